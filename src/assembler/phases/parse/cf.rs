//! Control-flow grammars: plain CF ops, ALU clause launches and swizzle
//! exports.

use super::super::tokenize::Tokens;
use super::{count, expect, keyword, label, number, register, swizzle, Error};
use crate::assembler::model::{Cf, CfAlu, CfExp, Cond, ExportKind, Kcache, KcacheMode, Op};
use crate::spec::cf;

pub(super) fn parse(toks: &mut Tokens) -> Result<Op, Error> {
    expect(toks, ".")?;

    if toks.accept("fs") {
        plain(toks, cf::INST_CALL_FS)
    } else if toks.accept("vc") {
        plain(toks, cf::INST_VC)
    } else if toks.accept("tc") {
        plain(toks, cf::INST_TC)
    } else if toks.accept("ret") {
        plain(toks, cf::INST_RETURN)
    } else if toks.accept("nop") {
        plain(toks, cf::INST_NOP)
    } else if toks.accept("alu") {
        clause(toks, cf::INST_ALU)
    } else if toks.accept("xd") {
        export(toks, cf::INST_EXPORT_DONE)
    } else {
        Err(Error::UnknownOpcode(toks.next().to_owned()))
    }
}

fn plain(toks: &mut Tokens, cf_inst: i32) -> Result<Op, Error> {
    let mut op = Cf {
        cf_inst,
        ..Cf::default()
    };

    if cf_inst == cf::INST_VC || cf_inst == cf::INST_TC {
        op.count = count(toks)?;
    }

    if toks.accept("cc") {
        condition(toks, &mut op)?;
    }

    if matches!(cf_inst, cf::INST_CALL_FS | cf::INST_VC | cf::INST_TC) {
        op.label = Some(label(toks)?);
    }

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("eop") {
                op.end_of_program = true;
            } else if toks.accept("vpm") {
                op.valid_pixel_mode = true;
            } else if toks.accept("wqm") {
                op.whole_quad_mode = true;
            } else if toks.accept("b") {
                op.barrier = true;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(Op::Cf(op))
}

/// `cc.<a|f|b|nb>`, with a parenthesized boolean-constant slot for the
/// `b`/`nb` conditions.
fn condition(toks: &mut Tokens, op: &mut Cf) -> Result<(), Error> {
    expect(toks, ".")?;
    op.cond = match keyword::<Cond>(toks) {
        Some(cond) => cond,
        None => return Err(Error::Expected("condition", toks.next().to_owned())),
    };
    if matches!(op.cond, Cond::Bool | Cond::NotBool) {
        op.cf_const = count(toks)?;
    }
    Ok(())
}

fn clause(toks: &mut Tokens, cf_inst: i32) -> Result<Op, Error> {
    let mut op = CfAlu {
        cf_inst,
        ..CfAlu::default()
    };

    op.count = count(toks)?;

    for (bank_slot, key) in ["kc0", "kc1", "kc2", "kc3"].iter().enumerate() {
        if toks.accept(key) {
            op.kcache[bank_slot] = kcache(toks)?;
            if bank_slot >= 2 {
                op.ext = true;
            }
        }
    }

    op.label = label(toks)?;

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("alt") {
                op.alt_const = true;
            } else if toks.accept("wqm") {
                op.whole_quad_mode = true;
            } else if toks.accept("b") {
                op.barrier = true;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(Op::CfAlu(op))
}

/// One constant-cache binding, `(bank[addr], mode)`.
fn kcache(toks: &mut Tokens) -> Result<Kcache, Error> {
    expect(toks, "(")?;
    let bank = number(toks)?;
    expect(toks, "[")?;
    let addr = number(toks)?;
    expect(toks, "]")?;
    expect(toks, ",")?;
    let mode = match keyword::<KcacheMode>(toks) {
        Some(mode) => mode,
        None => return Err(Error::Expected("kcache mode", toks.next().to_owned())),
    };
    expect(toks, ")")?;
    Ok(Kcache { bank, addr, mode })
}

fn export(toks: &mut Tokens, cf_inst: i32) -> Result<Op, Error> {
    let mut op = CfExp {
        cf_inst,
        elem_size: 1,
        ..CfExp::default()
    };

    expect(toks, ".")?;
    op.kind = match keyword::<ExportKind>(toks) {
        Some(kind) => kind,
        None => return Err(Error::Expected("export target", toks.next().to_owned())),
    };

    op.burst_count = count(toks)?;

    // `[base]`, `[base + rN]` or `[base + rN * size]`.
    expect(toks, "[")?;
    op.array_base = number(toks)?;
    if toks.accept("+") {
        op.index_gpr = register(toks)?;
        if toks.accept("*") {
            op.elem_size = number(toks)?;
        }
    }
    expect(toks, "]")?;

    expect(toks, ",")?;
    op.rw_gpr = register(toks)?;
    if toks.accept(".") {
        op.swiz = swizzle(toks)?;
    }

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("eop") {
                op.end_of_program = true;
            } else if toks.accept("vpm") {
                op.valid_pixel_mode = true;
            } else if toks.accept("rel") {
                op.rw_rel = true;
            } else if toks.accept("m") {
                op.mark = true;
            } else if toks.accept("b") {
                op.barrier = true;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(Op::CfExp(op))
}

#[cfg(test)]
mod tests {
    use super::super::super::tokenize::tokenize;
    use super::super::parse;
    use super::*;
    use crate::assembler::model::{Sel, Swizzle};

    fn op(source: &str) -> Op {
        let mut toks = tokenize(source, &(0..source.len())).unwrap();
        parse(&mut toks).unwrap()
    }

    fn err(source: &str) -> Error {
        let mut toks = tokenize(source, &(0..source.len())).unwrap();
        parse(&mut toks).unwrap_err()
    }

    #[test]
    fn ret_is_bare() {
        assert_eq!(
            op(".c.ret;"),
            Op::Cf(Cf {
                cf_inst: cf::INST_RETURN,
                ..Cf::default()
            }),
        );
    }

    #[test]
    fn fetch_clauses_take_count_and_label() {
        match op(".c.vc(7) fetches eop;") {
            Op::Cf(vc) => {
                assert_eq!(vc.cf_inst, cf::INST_VC);
                assert_eq!(vc.count, 7);
                assert_eq!(vc.label.as_deref(), Some("fetches"));
                assert!(vc.end_of_program);
            }
            other => panic!("not a plain CF op: {:?}", other),
        }
    }

    #[test]
    fn conditions_with_boolean_constant() {
        match op(".c.tc(1) cc.nb(3) texes;") {
            Op::Cf(tc) => {
                assert_eq!(tc.cond, Cond::NotBool);
                assert_eq!(tc.cf_const, 3);
                assert_eq!(tc.label.as_deref(), Some("texes"));
            }
            other => panic!("not a plain CF op: {:?}", other),
        }
    }

    #[test]
    fn flags_mix_commas_and_spaces() {
        match op(".c.ret eop, b wqm;") {
            Op::Cf(ret) => {
                assert!(ret.end_of_program && ret.barrier && ret.whole_quad_mode);
                assert!(!ret.valid_pixel_mode);
            }
            other => panic!("not a plain CF op: {:?}", other),
        }
    }

    #[test]
    fn clause_with_kcache_bindings() {
        match op(".c.alu(4) kc0(1[0x10],l1) kc1(2[3],lli) body b;") {
            Op::CfAlu(alu) => {
                assert_eq!(alu.count, 4);
                assert_eq!(
                    alu.kcache[0],
                    Kcache {
                        bank: 1,
                        addr: 0x10,
                        mode: KcacheMode::Lock1
                    },
                );
                assert_eq!(
                    alu.kcache[1],
                    Kcache {
                        bank: 2,
                        addr: 3,
                        mode: KcacheMode::LockLoopIndex
                    },
                );
                assert_eq!(alu.label, "body");
                assert!(alu.barrier && !alu.ext);
            }
            other => panic!("not a clause: {:?}", other),
        }
    }

    #[test]
    fn kc2_selects_the_extended_form() {
        match op(".c.alu(1) kc2(0[0],l1) body;") {
            Op::CfAlu(alu) => assert!(alu.ext),
            other => panic!("not a clause: {:?}", other),
        }
    }

    #[test]
    fn clause_label_is_mandatory() {
        assert_eq!(err(".c.alu(1);"), Error::Expected("label", ";".to_owned()));
    }

    #[test]
    fn export_with_indexed_base_and_swizzle() {
        match op(".c.xd.prm(2) [0x3 + r5 * 4], r7.xyz1 eop, m;") {
            Op::CfExp(exp) => {
                assert_eq!(exp.cf_inst, cf::INST_EXPORT_DONE);
                assert_eq!(exp.kind, ExportKind::Param);
                assert_eq!(exp.burst_count, 2);
                assert_eq!(exp.array_base, 3);
                assert_eq!(exp.index_gpr, 5);
                assert_eq!(exp.elem_size, 4);
                assert_eq!(exp.rw_gpr, 7);
                assert_eq!(exp.swiz, Swizzle([Sel::X, Sel::Y, Sel::Z, Sel::One]));
                assert!(exp.end_of_program && exp.mark);
            }
            other => panic!("not an export: {:?}", other),
        }
    }

    #[test]
    fn export_base_defaults() {
        match op(".c.xd.pix(0) [0], r0;") {
            Op::CfExp(exp) => {
                assert_eq!(exp.kind, ExportKind::Pixel);
                assert_eq!(exp.index_gpr, 0);
                assert_eq!(exp.elem_size, 1);
                assert_eq!(exp.swiz, Swizzle::default());
            }
            other => panic!("not an export: {:?}", other),
        }
    }

    #[test]
    fn unknown_cf_opcode() {
        assert_eq!(err(".c.pop;"), Error::UnknownOpcode("pop".to_owned()));
    }
}
