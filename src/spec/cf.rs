//! Control-flow instruction layouts: the plain CF word pair, the ALU clause
//! launch pair, and the allocate/import/export pair in its swizzle form.

use super::bits::Field;
use static_assertions::const_assert;

// CF_WORD0
pub const WORD0_ADDR: Field = Field::new("addr", 0, 0, 24);
pub const WORD0_JMP_TAB_SEL: Field = Field::new("jmp_tab_sel", 0, 24, 3);

pub const JTS_CONST_A: i32 = 0;
pub const JTS_CONST_B: i32 = 1;
pub const JTS_CONST_C: i32 = 2;
pub const JTS_CONST_D: i32 = 3;
pub const JTS_INDEX_0: i32 = 4;
pub const JTS_INDEX_1: i32 = 5;

// CF_WORD1
pub const WORD1_POP_COUNT: Field = Field::new("pop_count", 1, 0, 3);
pub const WORD1_CONST: Field = Field::new("cf_const", 1, 3, 5);
pub const WORD1_COND: Field = Field::new("cond", 1, 8, 2);
pub const WORD1_COUNT: Field = Field::new("count", 1, 10, 6);
pub const WORD1_VALID_PIXEL_MODE: Field = Field::new("valid_pixel_mode", 1, 20, 1);
pub const WORD1_END_OF_PROGRAM: Field = Field::new("end_of_program", 1, 21, 1);
pub const WORD1_INST: Field = Field::new("cf_inst", 1, 22, 8);
pub const WORD1_WHOLE_QUAD_MODE: Field = Field::new("whole_quad_mode", 1, 30, 1);
pub const WORD1_BARRIER: Field = Field::new("barrier", 1, 31, 1);

pub const INST_NOP: i32 = 0;
pub const INST_TC: i32 = 1;
pub const INST_VC: i32 = 2;
pub const INST_CALL: i32 = 18;
pub const INST_CALL_FS: i32 = 19;
pub const INST_RETURN: i32 = 20;
pub const INST_HALT: i32 = 31;

// CF_ALU_WORD0
pub const ALU_WORD0_ADDR: Field = Field::new("addr", 0, 0, 22);
pub const ALU_WORD0_KCACHE_BANK0: Field = Field::new("kcache_bank0", 0, 22, 4);
pub const ALU_WORD0_KCACHE_BANK1: Field = Field::new("kcache_bank1", 0, 26, 4);
pub const ALU_WORD0_KCACHE_MODE0: Field = Field::new("kcache_mode0", 0, 30, 2);

// CF_ALU_WORD1
pub const ALU_WORD1_KCACHE_MODE1: Field = Field::new("kcache_mode1", 1, 0, 2);
pub const ALU_WORD1_KCACHE_ADDR0: Field = Field::new("kcache_addr0", 1, 2, 8);
pub const ALU_WORD1_KCACHE_ADDR1: Field = Field::new("kcache_addr1", 1, 10, 8);
pub const ALU_WORD1_COUNT: Field = Field::new("count", 1, 18, 7);
pub const ALU_WORD1_ALT_CONST: Field = Field::new("alt_const", 1, 25, 1);
pub const ALU_WORD1_INST: Field = Field::new("cf_inst", 1, 26, 4);
pub const ALU_WORD1_WHOLE_QUAD_MODE: Field = Field::new("whole_quad_mode", 1, 30, 1);
pub const ALU_WORD1_BARRIER: Field = Field::new("barrier", 1, 31, 1);

/// Defined relative to the 8-bit CF_WORD1 INST position; the 4-bit CF_ALU
/// INST field truncates it to 0 when packed.
pub const INST_ALU: i32 = 8 << 4;
pub const INST_ALU_ELSE_AFTER: i32 = 15 << 4;

// CF_ALLOC_IMPORT_EXPORT_WORD0
pub const AIE_WORD0_ARRAY_BASE: Field = Field::new("array_base", 0, 0, 13);
pub const AIE_WORD0_TYPE: Field = Field::new("type", 0, 13, 2);
pub const AIE_WORD0_RW_GPR: Field = Field::new("rw_gpr", 0, 15, 7);
pub const AIE_WORD0_RW_REL: Field = Field::new("rw_rel", 0, 22, 1);
pub const AIE_WORD0_INDEX_GPR: Field = Field::new("index_gpr", 0, 23, 7);
pub const AIE_WORD0_ELEM_SIZE: Field = Field::new("elem_size", 0, 30, 2);

// CF_ALLOC_IMPORT_EXPORT_WORD1, swizzle form
pub const AIE_WORD1_SWIZ_SEL_X: Field = Field::new("sel_x", 1, 0, 3);
pub const AIE_WORD1_SWIZ_SEL_Y: Field = Field::new("sel_y", 1, 3, 3);
pub const AIE_WORD1_SWIZ_SEL_Z: Field = Field::new("sel_z", 1, 6, 3);
pub const AIE_WORD1_SWIZ_SEL_W: Field = Field::new("sel_w", 1, 9, 3);
pub const AIE_WORD1_BURST_COUNT: Field = Field::new("burst_count", 1, 16, 4);
pub const AIE_WORD1_VALID_PIXEL_MODE: Field = Field::new("valid_pixel_mode", 1, 20, 1);
pub const AIE_WORD1_END_OF_PROGRAM: Field = Field::new("end_of_program", 1, 21, 1);
pub const AIE_WORD1_INST: Field = Field::new("cf_inst", 1, 22, 8);
pub const AIE_WORD1_MARK: Field = Field::new("mark", 1, 30, 1);
pub const AIE_WORD1_BARRIER: Field = Field::new("barrier", 1, 31, 1);

pub const INST_EXPORT: i32 = 83;
pub const INST_EXPORT_DONE: i32 = 84;

const_assert!(WORD0_ADDR.fits_word());
const_assert!(WORD1_BARRIER.fits_word());
const_assert!(ALU_WORD1_BARRIER.fits_word());
const_assert!(AIE_WORD1_BARRIER.fits_word());
