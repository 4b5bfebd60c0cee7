//! Vertex-fetch instruction layout: three encoded words plus a padding word.
//! Word 1 has two interpretations, selected by the opcode: a destination
//! GPR for plain fetches or a semantic id for semantic fetches.

use super::bits::Field;
use static_assertions::const_assert;

// VTX_WORD0
pub const WORD0_INST: Field = Field::new("vc_inst", 0, 0, 5);
pub const WORD0_FETCH_TYPE: Field = Field::new("fetch_type", 0, 5, 2);
pub const WORD0_FETCH_WHOLE_QUAD: Field = Field::new("fetch_whole_quad", 0, 7, 1);
pub const WORD0_BUFFER_ID: Field = Field::new("buffer_id", 0, 8, 8);
pub const WORD0_SRC_GPR: Field = Field::new("src_gpr", 0, 16, 7);
pub const WORD0_SRC_REL: Field = Field::new("src_rel", 0, 23, 1);
pub const WORD0_SRC_SEL_X: Field = Field::new("src_sel_x", 0, 24, 2);
pub const WORD0_MEGA_FETCH_COUNT: Field = Field::new("mega_fetch_count", 0, 26, 6);

pub const INST_FETCH: i32 = 0;
pub const INST_SEMANTIC: i32 = 1;

// VTX_WORD1, plain-fetch interpretation
pub const WORD1_GPR_DST_GPR: Field = Field::new("dst_gpr", 1, 0, 7);
pub const WORD1_GPR_DST_REL: Field = Field::new("dst_rel", 1, 7, 1);

// VTX_WORD1, semantic interpretation
pub const WORD1_SEM_SEM_ID: Field = Field::new("sem_id", 1, 0, 8);

// VTX_WORD1, both interpretations
pub const WORD1_DST_SEL_X: Field = Field::new("dst_sel_x", 1, 9, 3);
pub const WORD1_DST_SEL_Y: Field = Field::new("dst_sel_y", 1, 12, 3);
pub const WORD1_DST_SEL_Z: Field = Field::new("dst_sel_z", 1, 15, 3);
pub const WORD1_DST_SEL_W: Field = Field::new("dst_sel_w", 1, 18, 3);
pub const WORD1_USE_CONST_FIELDS: Field = Field::new("use_const_fields", 1, 21, 1);
pub const WORD1_DATA_FORMAT: Field = Field::new("data_format", 1, 22, 6);
pub const WORD1_NUM_FORMAT_ALL: Field = Field::new("num_format_all", 1, 28, 2);
pub const WORD1_FORMAT_COMP_ALL: Field = Field::new("format_comp_all", 1, 30, 1);
pub const WORD1_SRF_MODE_ALL: Field = Field::new("srf_mode_all", 1, 31, 1);

// VTX_WORD2
pub const WORD2_OFFSET: Field = Field::new("offset", 2, 0, 16);
pub const WORD2_ENDIAN_SWAP: Field = Field::new("endian_swap", 2, 16, 2);
pub const WORD2_CONST_BUF_NO_STRIDE: Field = Field::new("const_buf_no_stride", 2, 18, 1);
pub const WORD2_MEGA_FETCH: Field = Field::new("mega_fetch", 2, 19, 1);
pub const WORD2_ALT_CONST: Field = Field::new("alt_const", 2, 20, 1);
pub const WORD2_BUFFER_INDEX_MODE: Field = Field::new("buffer_index_mode", 2, 21, 2);

const_assert!(WORD0_MEGA_FETCH_COUNT.fits_word());
const_assert!(WORD1_SRF_MODE_ALL.fits_word());
const_assert!(WORD2_BUFFER_INDEX_MODE.fits_word());
