//! The family encoders. Each walks its layout table in order, ORing packed
//! fields into a zeroed word group. Count-style fields take their `- 1`
//! bias here, wrapping into the field width, so an unset count fills its
//! field. Nothing is range-checked; packing truncates by contract.

use crate::assembler::model::{Alu, Cf, CfAlu, CfExp, Op, Tex, Vtx};
use crate::spec::{alu, cf, tex, vtx};
use std::fmt::Display;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnsupportedEncoding(&'static str),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnsupportedEncoding(what) => write!(f, "no encoding for {}", what),
        }
    }
}

pub fn encode(op: &Op) -> Result<Vec<u32>, Error> {
    match op {
        Op::Cf(op) => Ok(cf_plain(op).to_vec()),
        Op::CfAlu(op) => cf_clause(op).map(|w| w.to_vec()),
        Op::CfExp(op) => Ok(cf_export(op).to_vec()),
        Op::AluOp2(op) => Ok(alu_op(op, true).to_vec()),
        Op::AluOp3(op) => Ok(alu_op(op, false).to_vec()),
        Op::VtxGpr(op) | Op::VtxSem(op) => Ok(vtx_fetch(op).to_vec()),
        Op::Tex(op) => Ok(tex_sample(op).to_vec()),
    }
}

fn cf_plain(op: &Cf) -> [u32; 2] {
    let mut w = [0u32; 2];
    cf::WORD0_ADDR.set(&mut w, op.addr);
    cf::WORD0_JMP_TAB_SEL.set(&mut w, op.jump_table_sel);

    cf::WORD1_POP_COUNT.set(&mut w, op.pop_count);
    cf::WORD1_CONST.set(&mut w, op.cf_const);
    cf::WORD1_COND.set(&mut w, op.cond as i32);
    cf::WORD1_COUNT.set(&mut w, op.count - 1);
    cf::WORD1_VALID_PIXEL_MODE.set(&mut w, op.valid_pixel_mode as i32);
    cf::WORD1_END_OF_PROGRAM.set(&mut w, op.end_of_program as i32);
    cf::WORD1_INST.set(&mut w, op.cf_inst);
    cf::WORD1_WHOLE_QUAD_MODE.set(&mut w, op.whole_quad_mode as i32);
    cf::WORD1_BARRIER.set(&mut w, op.barrier as i32);
    w
}

fn cf_clause(op: &CfAlu) -> Result<[u32; 2], Error> {
    if op.ext {
        return Err(Error::UnsupportedEncoding("extended alu clause"));
    }

    let mut w = [0u32; 2];
    cf::ALU_WORD0_ADDR.set(&mut w, op.addr);
    cf::ALU_WORD0_KCACHE_BANK0.set(&mut w, op.kcache[0].bank);
    cf::ALU_WORD0_KCACHE_BANK1.set(&mut w, op.kcache[1].bank);
    cf::ALU_WORD0_KCACHE_MODE0.set(&mut w, op.kcache[0].mode as i32);

    cf::ALU_WORD1_KCACHE_MODE1.set(&mut w, op.kcache[1].mode as i32);
    cf::ALU_WORD1_KCACHE_ADDR0.set(&mut w, op.kcache[0].addr);
    cf::ALU_WORD1_KCACHE_ADDR1.set(&mut w, op.kcache[1].addr);
    cf::ALU_WORD1_COUNT.set(&mut w, op.count - 1);
    cf::ALU_WORD1_ALT_CONST.set(&mut w, op.alt_const as i32);
    cf::ALU_WORD1_INST.set(&mut w, op.cf_inst);
    cf::ALU_WORD1_WHOLE_QUAD_MODE.set(&mut w, op.whole_quad_mode as i32);
    cf::ALU_WORD1_BARRIER.set(&mut w, op.barrier as i32);
    Ok(w)
}

fn cf_export(op: &CfExp) -> [u32; 2] {
    let mut w = [0u32; 2];
    cf::AIE_WORD0_ARRAY_BASE.set(&mut w, op.array_base);
    cf::AIE_WORD0_TYPE.set(&mut w, op.kind as i32);
    cf::AIE_WORD0_RW_GPR.set(&mut w, op.rw_gpr);
    cf::AIE_WORD0_RW_REL.set(&mut w, op.rw_rel as i32);
    cf::AIE_WORD0_INDEX_GPR.set(&mut w, op.index_gpr);
    cf::AIE_WORD0_ELEM_SIZE.set(&mut w, op.elem_size - 1);

    cf::AIE_WORD1_SWIZ_SEL_X.set(&mut w, op.swiz.0[0] as i32);
    cf::AIE_WORD1_SWIZ_SEL_Y.set(&mut w, op.swiz.0[1] as i32);
    cf::AIE_WORD1_SWIZ_SEL_Z.set(&mut w, op.swiz.0[2] as i32);
    cf::AIE_WORD1_SWIZ_SEL_W.set(&mut w, op.swiz.0[3] as i32);
    cf::AIE_WORD1_BURST_COUNT.set(&mut w, op.burst_count - 1);
    cf::AIE_WORD1_VALID_PIXEL_MODE.set(&mut w, op.valid_pixel_mode as i32);
    cf::AIE_WORD1_END_OF_PROGRAM.set(&mut w, op.end_of_program as i32);
    cf::AIE_WORD1_INST.set(&mut w, op.cf_inst);
    cf::AIE_WORD1_MARK.set(&mut w, op.mark as i32);
    cf::AIE_WORD1_BARRIER.set(&mut w, op.barrier as i32);
    w
}

fn alu_op(op: &Alu, op2: bool) -> [u32; 2] {
    let mut w = [0u32; 2];
    alu::WORD0_SRC0_SEL.set(&mut w, op.src[0].sel);
    alu::WORD0_SRC0_REL.set(&mut w, op.src[0].rel as i32);
    alu::WORD0_SRC0_CHAN.set(&mut w, op.src[0].chan as i32);
    alu::WORD0_SRC0_NEG.set(&mut w, op.src[0].neg as i32);
    alu::WORD0_SRC1_SEL.set(&mut w, op.src[1].sel);
    alu::WORD0_SRC1_REL.set(&mut w, op.src[1].rel as i32);
    alu::WORD0_SRC1_CHAN.set(&mut w, op.src[1].chan as i32);
    alu::WORD0_SRC1_NEG.set(&mut w, op.src[1].neg as i32);
    alu::WORD0_INDEX_MODE.set(&mut w, op.index_mode);
    alu::WORD0_PRED_SEL.set(&mut w, op.pred_sel);
    alu::WORD0_LAST.set(&mut w, op.last as i32);

    if op2 {
        alu::WORD1_OP2_SRC0_ABS.set(&mut w, op.src[0].abs as i32);
        alu::WORD1_OP2_SRC1_ABS.set(&mut w, op.src[1].abs as i32);
        alu::WORD1_OP2_UPDATE_EXEC_MASK.set(&mut w, op.update_exec_mask as i32);
        alu::WORD1_OP2_UPDATE_PRED.set(&mut w, op.update_pred as i32);
        alu::WORD1_OP2_WRITE_ENABLE.set(&mut w, op.write_enable as i32);
        alu::WORD1_OP2_OUT_MOD.set(&mut w, op.omod as i32);
    } else {
        alu::WORD1_OP3_SRC2_SEL.set(&mut w, op.src[2].sel);
        alu::WORD1_OP3_SRC2_REL.set(&mut w, op.src[2].rel as i32);
        alu::WORD1_OP3_SRC2_CHAN.set(&mut w, op.src[2].chan as i32);
        alu::WORD1_OP3_SRC2_NEG.set(&mut w, op.src[2].neg as i32);
    }

    alu::WORD1_INST.set(&mut w, op.alu_inst);
    alu::WORD1_BANK_SWIZZLE.set(&mut w, op.bank_swizzle);
    alu::WORD1_DST_GPR.set(&mut w, op.dst_gpr);
    alu::WORD1_DST_REL.set(&mut w, op.dst_rel as i32);
    alu::WORD1_DST_CHAN.set(&mut w, op.dst_chan as i32);
    alu::WORD1_CLAMP.set(&mut w, op.clamp as i32);
    w
}

fn vtx_fetch(op: &Vtx) -> [u32; 4] {
    let mut w = [0u32; 4];
    vtx::WORD0_INST.set(&mut w, op.vc_inst);
    vtx::WORD0_FETCH_TYPE.set(&mut w, op.fetch_type);
    vtx::WORD0_FETCH_WHOLE_QUAD.set(&mut w, op.fetch_whole_quad as i32);
    vtx::WORD0_BUFFER_ID.set(&mut w, op.buffer_id);
    vtx::WORD0_SRC_GPR.set(&mut w, op.src_gpr);
    vtx::WORD0_SRC_REL.set(&mut w, op.src_rel as i32);
    vtx::WORD0_SRC_SEL_X.set(&mut w, op.src_sel_x as i32);
    vtx::WORD0_MEGA_FETCH_COUNT.set(&mut w, op.mega_fetch_count);

    if op.vc_inst == vtx::INST_SEMANTIC {
        vtx::WORD1_SEM_SEM_ID.set(&mut w, op.sem_id);
    } else {
        vtx::WORD1_GPR_DST_GPR.set(&mut w, op.dst_gpr);
        vtx::WORD1_GPR_DST_REL.set(&mut w, op.dst_rel as i32);
    }
    vtx::WORD1_DST_SEL_X.set(&mut w, op.dst_swiz.0[0] as i32);
    vtx::WORD1_DST_SEL_Y.set(&mut w, op.dst_swiz.0[1] as i32);
    vtx::WORD1_DST_SEL_Z.set(&mut w, op.dst_swiz.0[2] as i32);
    vtx::WORD1_DST_SEL_W.set(&mut w, op.dst_swiz.0[3] as i32);
    vtx::WORD1_USE_CONST_FIELDS.set(&mut w, op.use_const_fields as i32);
    vtx::WORD1_DATA_FORMAT.set(&mut w, op.data_format as i32);
    vtx::WORD1_NUM_FORMAT_ALL.set(&mut w, op.num_format as i32);
    vtx::WORD1_FORMAT_COMP_ALL.set(&mut w, op.format_comp_signed as i32);
    vtx::WORD1_SRF_MODE_ALL.set(&mut w, op.srf_mode_all as i32);

    vtx::WORD2_OFFSET.set(&mut w, op.offset);
    vtx::WORD2_ENDIAN_SWAP.set(&mut w, op.endian_swap);
    vtx::WORD2_CONST_BUF_NO_STRIDE.set(&mut w, op.const_buf_no_stride as i32);
    vtx::WORD2_MEGA_FETCH.set(&mut w, op.mega_fetch as i32);
    vtx::WORD2_ALT_CONST.set(&mut w, op.alt_const as i32);
    vtx::WORD2_BUFFER_INDEX_MODE.set(&mut w, op.buffer_index_mode);

    // Word 3 is padding.
    w
}

fn tex_sample(op: &Tex) -> [u32; 4] {
    let mut w = [0u32; 4];
    tex::WORD0_INST.set(&mut w, op.tex_inst);
    tex::WORD0_INST_MOD.set(&mut w, op.inst_mod);
    tex::WORD0_FETCH_WHOLE_QUAD.set(&mut w, op.fetch_whole_quad as i32);
    tex::WORD0_RESOURCE_ID.set(&mut w, op.resource_id);
    tex::WORD0_SRC_GPR.set(&mut w, op.src_gpr);
    tex::WORD0_SRC_REL.set(&mut w, op.src_rel as i32);
    tex::WORD0_ALT_CONST.set(&mut w, op.alt_const as i32);
    tex::WORD0_RESOURCE_INDEX_MODE.set(&mut w, op.resource_index_mode);
    tex::WORD0_SAMPLER_INDEX_MODE.set(&mut w, op.sampler_index_mode);

    tex::WORD1_DST_GPR.set(&mut w, op.dst_gpr);
    tex::WORD1_DST_REL.set(&mut w, op.dst_rel as i32);
    tex::WORD1_DST_SEL_X.set(&mut w, op.dst_swiz.0[0] as i32);
    tex::WORD1_DST_SEL_Y.set(&mut w, op.dst_swiz.0[1] as i32);
    tex::WORD1_DST_SEL_Z.set(&mut w, op.dst_swiz.0[2] as i32);
    tex::WORD1_DST_SEL_W.set(&mut w, op.dst_swiz.0[3] as i32);
    tex::WORD1_LOD_BIAS.set(&mut w, op.lod_bias);
    tex::WORD1_COORD_TYPE_X.set(&mut w, op.coord_type_x as i32);
    tex::WORD1_COORD_TYPE_Y.set(&mut w, op.coord_type_y as i32);
    tex::WORD1_COORD_TYPE_Z.set(&mut w, op.coord_type_z as i32);
    tex::WORD1_COORD_TYPE_W.set(&mut w, op.coord_type_w as i32);

    tex::WORD2_OFFSET_X.set(&mut w, op.offset_x);
    tex::WORD2_OFFSET_Y.set(&mut w, op.offset_y);
    tex::WORD2_OFFSET_Z.set(&mut w, op.offset_z);
    tex::WORD2_SAMPLER_ID.set(&mut w, op.sampler_id);
    tex::WORD2_SRC_SEL_X.set(&mut w, op.src_swiz.0[0] as i32);
    tex::WORD2_SRC_SEL_Y.set(&mut w, op.src_swiz.0[1] as i32);
    tex::WORD2_SRC_SEL_Z.set(&mut w, op.src_swiz.0[2] as i32);
    tex::WORD2_SRC_SEL_W.set(&mut w, op.src_swiz.0[3] as i32);

    // Word 3 is padding.
    w
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::model::{Kcache, Sel};

    #[test]
    fn bare_ret_fills_its_count_field() {
        let w = cf_plain(&Cf {
            cf_inst: cf::INST_RETURN,
            ..Cf::default()
        });
        assert_eq!(w, [0x0000_0000, 0x0500_fc00]);
    }

    #[test]
    fn clause_count_bias_wraps() {
        let w = cf_clause(&CfAlu {
            cf_inst: cf::INST_ALU,
            count: 0,
            ..CfAlu::default()
        })
        .unwrap();
        // The opcode truncates to 0 in the 4-bit INST field; the biased
        // count fills all 7 bits.
        assert_eq!(w[1], 0x7f << 18);
    }

    #[test]
    fn clause_kcache_fields() {
        let w = cf_clause(&CfAlu {
            count: 3,
            kcache: [
                Kcache {
                    bank: 1,
                    addr: 0x10,
                    mode: crate::assembler::model::KcacheMode::Lock1,
                },
                Kcache::default(),
                Kcache::default(),
                Kcache::default(),
            ],
            ..CfAlu::default()
        })
        .unwrap();
        assert_eq!(w[0], (1 << 22) | (1 << 30));
        assert_eq!(w[1], (0x10 << 2) | (2 << 18));
    }

    #[test]
    fn extended_clause_is_rejected() {
        let err = cf_clause(&CfAlu {
            ext: true,
            ..CfAlu::default()
        })
        .unwrap_err();
        assert_eq!(err, Error::UnsupportedEncoding("extended alu clause"));
    }

    #[test]
    fn interp_golden_words() {
        let mut op = Alu::default();
        op.alu_inst = alu::INST_INTERP_XY;
        op.write_enable = true;
        op.src[0].sel = 1;
        op.src[1].sel = 2;
        let w = alu_op(&op, true);
        assert_eq!(w, [0x0000_4001, 0x0000_6b10]);
    }

    #[test]
    fn op3_writes_src2_into_word1() {
        let mut op = Alu::default();
        op.src[2].sel = 5;
        op.src[2].chan = Sel::W;
        op.src[2].neg = true;
        let w = alu_op(&op, false);
        assert_eq!(w[1] & 0x1fff, 5 | (3 << 10) | (1 << 12));
    }

    #[test]
    fn semantic_fetch_selects_the_sem_word() {
        let mut op = Vtx::default();
        op.vc_inst = vtx::INST_SEMANTIC;
        op.sem_id = 0x2c;
        op.dst_gpr = 9; // ignored in the semantic form
        let w = vtx_fetch(&op);
        assert_eq!(w[0] & 0x1f, 1);
        assert_eq!(w[1] & 0x1ff, 0x2c);
    }

    #[test]
    fn export_biases_burst_and_elem_size() {
        let w = cf_export(&CfExp {
            cf_inst: cf::INST_EXPORT_DONE,
            elem_size: 1,
            burst_count: 1,
            ..CfExp::default()
        });
        assert_eq!(w[0] >> 30, 0);
        assert_eq!((w[1] >> 16) & 0xf, 0);
    }
}
