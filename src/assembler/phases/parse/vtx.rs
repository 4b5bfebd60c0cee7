//! The vertex-fetch grammar. `sem` names a semantic id, `reg` a destination
//! register; everything after that is shared.

use super::super::tokenize::Tokens;
use super::{channel, expect, keyword, number, register, swizzle, Error};
use crate::assembler::model::{DataFormat, NumFormat, Op, Vtx};
use crate::spec::vtx;

pub(super) fn parse(toks: &mut Tokens) -> Result<Op, Error> {
    expect(toks, ".")?;

    let semantic = if toks.accept("sem") {
        true
    } else if toks.accept("reg") {
        false
    } else {
        return Err(Error::UnknownOpcode(toks.next().to_owned()));
    };

    let mut op = Vtx {
        vc_inst: if semantic {
            vtx::INST_SEMANTIC
        } else {
            vtx::INST_FETCH
        },
        ..Vtx::default()
    };

    if semantic {
        op.sem_id = number(toks)?;
    } else {
        op.dst_gpr = register(toks)?;
    }

    expect(toks, ",")?;
    op.data_format = if toks.accept("flt3") {
        DataFormat::Fmt32_32_32Float
    } else if toks.accept("flt2") {
        DataFormat::Fmt32_32Float
    } else {
        return Err(Error::Expected("data format", toks.next().to_owned()));
    };

    expect(toks, ",")?;
    if toks.accept("-") {
        op.format_comp_signed = true;
    }
    op.num_format = match keyword::<NumFormat>(toks) {
        Some(fmt) => fmt,
        None => return Err(Error::Expected("numeric format", toks.next().to_owned())),
    };

    // The fetch-shader constant base, `fs[buffer][offset]`.
    expect(toks, ",")?;
    expect(toks, "fs")?;
    expect(toks, "[")?;
    op.buffer_id = number(toks)?;
    expect(toks, "]")?;
    expect(toks, "[")?;
    op.offset = number(toks)?;
    expect(toks, "]")?;
    if toks.accept(".") {
        op.dst_swiz = swizzle(toks)?;
    }

    expect(toks, ",")?;
    op.src_gpr = register(toks)?;
    if toks.accept(".") {
        op.src_sel_x = channel(toks)?;
    }

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("alt") {
                op.alt_const = true;
            } else if toks.accept("cbns") {
                op.const_buf_no_stride = true;
            } else if toks.accept("mf") {
                op.mega_fetch = true;
            } else if toks.accept("ucf") {
                op.use_const_fields = true;
            } else if toks.accept("sma") {
                op.srf_mode_all = true;
            } else if toks.accept("fwq") {
                op.fetch_whole_quad = true;
            } else if toks.accept("srel") {
                op.src_rel = true;
            } else if toks.accept("drel") {
                op.dst_rel = true;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(if semantic {
        Op::VtxSem(op)
    } else {
        Op::VtxGpr(op)
    })
}
