//! The ALU grammar. Both interpolation opcodes are two-source operations;
//! the three-source path differs only in source count and in which word 1
//! interpretation the encoder writes.

use super::super::tokenize::Tokens;
use super::{channel, expect, number_token, Error};
use crate::assembler::model::{Alu, AluSrc, Op, OutputMod};
use crate::spec::alu;

pub(super) fn parse(toks: &mut Tokens) -> Result<Op, Error> {
    expect(toks, ".")?;

    let (alu_inst, op2) = if toks.accept("ixy") {
        (alu::INST_INTERP_XY, true)
    } else if toks.accept("iz") {
        (alu::INST_INTERP_Z, true)
    } else {
        return Err(Error::UnknownOpcode(toks.next().to_owned()));
    };

    let mut op = Alu {
        alu_inst,
        ..Alu::default()
    };

    // `-` discards the result; a register destination enables the write.
    if !toks.accept("-") {
        op.dst_gpr = dst_register(toks)?;
        op.write_enable = true;
    }
    expect(toks, ".")?;
    op.dst_chan = channel(toks)?;

    if op2 {
        output_modifier(toks, &mut op)?;
    }

    let num_srcs = if op2 { 2 } else { 3 };
    for slot in 0..num_srcs {
        expect(toks, ",")?;
        op.src[slot] = source(toks, op2)?;
    }

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("ps0") {
                op.pred_sel = alu::PRED_SEL_0;
            } else if toks.accept("ps1") {
                op.pred_sel = alu::PRED_SEL_1;
            } else if toks.accept("last") {
                op.last = true;
            } else if toks.accept("iml") {
                op.index_mode = alu::INDEX_LOOP;
            } else if toks.accept("img") {
                op.index_mode = alu::INDEX_GLOBAL;
            } else if toks.accept("imga") {
                op.index_mode = alu::INDEX_GLOBAL_AR_X;
            } else if toks.accept("uem") {
                op.update_exec_mask = true;
            } else if toks.accept("up") {
                op.update_pred = true;
            } else if toks.accept("021") {
                op.bank_swizzle = alu::VEC_021;
            } else if toks.accept("120") {
                op.bank_swizzle = alu::VEC_120;
            } else if toks.accept("102") {
                op.bank_swizzle = alu::VEC_102;
            } else if toks.accept("201") {
                op.bank_swizzle = alu::VEC_201;
            } else if toks.accept("210") {
                op.bank_swizzle = alu::VEC_210;
            } else if toks.accept("122") {
                op.bank_swizzle = alu::SCL_122;
            } else if toks.accept("212") {
                op.bank_swizzle = alu::SCL_212;
            } else if toks.accept("221") {
                op.bank_swizzle = alu::SCL_221;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(if op2 { Op::AluOp2(op) } else { Op::AluOp3(op) })
}

fn dst_register(toks: &mut Tokens) -> Result<i32, Error> {
    let tok = toks.next().to_owned();
    if tok.starts_with('r') || tok.starts_with('R') {
        number_token(&tok[1..])
    } else {
        Err(Error::Malformed("destination register", tok))
    }
}

/// The op2-only output modifier, `*2`, `*4` or `/2`. The tokenizer splits
/// these into two delimiter-and-digit tokens.
fn output_modifier(toks: &mut Tokens, op: &mut Alu) -> Result<(), Error> {
    if toks.accept("*") {
        op.omod = if toks.accept("2") {
            OutputMod::Mul2
        } else if toks.accept("4") {
            OutputMod::Mul4
        } else {
            return Err(Error::Expected("output modifier", toks.next().to_owned()));
        };
    } else if toks.accept("/") {
        if !toks.accept("2") {
            return Err(Error::Expected("output modifier", toks.next().to_owned()));
        }
        op.omod = OutputMod::Div2;
    }
    Ok(())
}

/// One source operand: `[+]?[-]?(rN|pN|kC[idx])[.chan]?`, with `+` (absolute
/// value) accepted only in the op2 form.
fn source(toks: &mut Tokens, op2: bool) -> Result<AluSrc, Error> {
    let mut src = AluSrc::default();

    if op2 && toks.accept("+") {
        src.abs = true;
    }
    if toks.accept("-") {
        src.neg = true;
    }

    let tok = toks.next().to_owned();
    src.sel = match tok.as_bytes().first() {
        Some(b'r') => alu::SRC_GPR_BASE + number_token(&tok[1..])?,
        Some(b'p') => alu::SRC_PARAM_BASE + number_token(&tok[1..])?,
        Some(b'k') => {
            let window = number_token(&tok[1..])?;
            let base = match window {
                0..=3 => alu::SRC_KCACHE_BASE[window as usize],
                _ => return Err(Error::Malformed("kcache window", tok)),
            };
            expect(toks, "[")?;
            let index = super::number(toks)?;
            expect(toks, "]")?;
            base + index
        }
        _ => return Err(Error::Malformed("source operand", tok)),
    };

    if toks.accept(".") {
        src.chan = channel(toks)?;
    }

    Ok(src)
}
