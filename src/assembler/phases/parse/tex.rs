//! The texture-fetch grammar. The `ps`/`vs` stage marker is part of the
//! grammar but carries no encoding.

use super::super::tokenize::Tokens;
use super::{expect, number, register, swizzle, Error};
use crate::assembler::model::{Op, Tex};
use crate::spec::tex;

pub(super) fn parse(toks: &mut Tokens) -> Result<Op, Error> {
    expect(toks, ".")?;

    if !toks.accept("samp") {
        return Err(Error::UnknownOpcode(toks.next().to_owned()));
    }

    let mut op = Tex {
        tex_inst: tex::INST_SAMPLE,
        ..Tex::default()
    };

    op.dst_gpr = register(toks)?;
    if toks.accept(".") {
        op.dst_swiz = swizzle(toks)?;
    }

    expect(toks, ",")?;
    if !toks.accept("ps") && !toks.accept("vs") {
        return Err(Error::Expected("shader stage", toks.next().to_owned()));
    }

    // `[resource][sampler][rN[.swizzle]]`
    expect(toks, "[")?;
    op.resource_id = number(toks)?;
    expect(toks, "]")?;
    expect(toks, "[")?;
    op.sampler_id = number(toks)?;
    expect(toks, "]")?;
    expect(toks, "[")?;
    op.src_gpr = register(toks)?;
    if toks.accept(".") {
        op.src_swiz = swizzle(toks)?;
    }
    expect(toks, "]")?;

    // Texel offsets and LOD bias, `+[x,y,z,bias]`.
    if toks.accept("+") {
        expect(toks, "[")?;
        op.offset_x = number(toks)?;
        expect(toks, ",")?;
        op.offset_y = number(toks)?;
        expect(toks, ",")?;
        op.offset_z = number(toks)?;
        expect(toks, ",")?;
        op.lod_bias = number(toks)?;
        expect(toks, "]")?;
    }

    loop {
        if toks.accept(";") {
            break;
        }
        loop {
            if toks.accept("alt") {
                op.alt_const = true;
            } else if toks.accept("srel") {
                op.src_rel = true;
            } else if toks.accept("drel") {
                op.dst_rel = true;
            } else if toks.accept("fwq") {
                op.fetch_whole_quad = true;
            } else if toks.accept("rim0") {
                op.resource_index_mode = 1;
            } else if toks.accept("rim1") {
                op.resource_index_mode = 2;
            } else if toks.accept("sim0") {
                op.sampler_index_mode = 1;
            } else if toks.accept("sim1") {
                op.sampler_index_mode = 2;
            } else if toks.accept("xn") {
                op.coord_type_x = true;
            } else if toks.accept("yn") {
                op.coord_type_y = true;
            } else if toks.accept("zn") {
                op.coord_type_z = true;
            } else if toks.accept("wn") {
                op.coord_type_w = true;
            } else {
                return Err(Error::Expected("flag", toks.next().to_owned()));
            }
            if !toks.accept(",") {
                break;
            }
        }
    }

    Ok(Op::Tex(op))
}
