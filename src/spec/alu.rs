//! ALU instruction layout: a shared word 0, and a word 1 read either in its
//! two-source (op2) or three-source (op3) interpretation.

use super::bits::Field;
use static_assertions::const_assert;

// ALU_WORD0
pub const WORD0_SRC0_SEL: Field = Field::new("src0_sel", 0, 0, 9);
pub const WORD0_SRC0_REL: Field = Field::new("src0_rel", 0, 9, 1);
pub const WORD0_SRC0_CHAN: Field = Field::new("src0_chan", 0, 10, 2);
pub const WORD0_SRC0_NEG: Field = Field::new("src0_neg", 0, 12, 1);
pub const WORD0_SRC1_SEL: Field = Field::new("src1_sel", 0, 13, 9);
pub const WORD0_SRC1_REL: Field = Field::new("src1_rel", 0, 22, 1);
pub const WORD0_SRC1_CHAN: Field = Field::new("src1_chan", 0, 23, 2);
pub const WORD0_SRC1_NEG: Field = Field::new("src1_neg", 0, 25, 1);
pub const WORD0_INDEX_MODE: Field = Field::new("index_mode", 0, 26, 3);
pub const WORD0_PRED_SEL: Field = Field::new("pred_sel", 0, 29, 2);
pub const WORD0_LAST: Field = Field::new("last", 0, 31, 1);

pub const INDEX_AR_X: i32 = 0;
pub const INDEX_LOOP: i32 = 4;
pub const INDEX_GLOBAL: i32 = 5;
pub const INDEX_GLOBAL_AR_X: i32 = 6;

pub const PRED_SEL_OFF: i32 = 0;
pub const PRED_SEL_0: i32 = 2;
pub const PRED_SEL_1: i32 = 3;

// Source selector bases. GPRs sit at the bottom of the selector space,
// interpolation parameters above it, and the four constant-cache windows
// at their fixed slots.
pub const SRC_GPR_BASE: i32 = 0;
pub const SRC_PARAM_BASE: i32 = 0x1c0;
pub const SRC_KCACHE_BASE: [i32; 4] = [159, 191, 287, 319];

// ALU_WORD1_OP2
pub const WORD1_OP2_SRC0_ABS: Field = Field::new("src0_abs", 1, 0, 1);
pub const WORD1_OP2_SRC1_ABS: Field = Field::new("src1_abs", 1, 1, 1);
pub const WORD1_OP2_UPDATE_EXEC_MASK: Field = Field::new("update_exec_mask", 1, 2, 1);
pub const WORD1_OP2_UPDATE_PRED: Field = Field::new("update_pred", 1, 3, 1);
pub const WORD1_OP2_WRITE_ENABLE: Field = Field::new("write_enable", 1, 4, 1);
pub const WORD1_OP2_OUT_MOD: Field = Field::new("out_mod", 1, 5, 2);

// ALU_WORD1_OP3. The third source occupies the same slots in word 1 that
// source 0 does in word 0.
pub const WORD1_OP3_SRC2_SEL: Field = Field::new("src2_sel", 1, 0, 9);
pub const WORD1_OP3_SRC2_REL: Field = Field::new("src2_rel", 1, 9, 1);
pub const WORD1_OP3_SRC2_CHAN: Field = Field::new("src2_chan", 1, 10, 2);
pub const WORD1_OP3_SRC2_NEG: Field = Field::new("src2_neg", 1, 12, 1);

// ALU_WORD1, both interpretations
pub const WORD1_INST: Field = Field::new("alu_inst", 1, 7, 11);
pub const WORD1_BANK_SWIZZLE: Field = Field::new("bank_swizzle", 1, 18, 3);
pub const WORD1_DST_GPR: Field = Field::new("dst_gpr", 1, 21, 7);
pub const WORD1_DST_REL: Field = Field::new("dst_rel", 1, 28, 1);
pub const WORD1_DST_CHAN: Field = Field::new("dst_chan", 1, 29, 2);
pub const WORD1_CLAMP: Field = Field::new("clamp", 1, 31, 1);

pub const INST_INTERP_XY: i32 = 214;
pub const INST_INTERP_ZW: i32 = 215;
pub const INST_INTERP_Z: i32 = 217;

// Bank swizzle encodings for the vector and scalar unit keywords.
pub const VEC_012: i32 = 0;
pub const VEC_021: i32 = 1;
pub const VEC_120: i32 = 2;
pub const VEC_102: i32 = 3;
pub const VEC_201: i32 = 4;
pub const VEC_210: i32 = 5;
pub const SCL_210: i32 = 0;
pub const SCL_122: i32 = 1;
pub const SCL_212: i32 = 2;
pub const SCL_221: i32 = 3;

const_assert!(WORD0_LAST.fits_word());
const_assert!(WORD1_CLAMP.fits_word());
const_assert!(WORD1_OP3_SRC2_NEG.fits_word());
