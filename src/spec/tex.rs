//! Texture-fetch instruction layout: three encoded words plus a padding
//! word.

use super::bits::Field;
use static_assertions::const_assert;

// TEX_WORD0
pub const WORD0_INST: Field = Field::new("tex_inst", 0, 0, 5);
pub const WORD0_INST_MOD: Field = Field::new("inst_mod", 0, 5, 2);
pub const WORD0_FETCH_WHOLE_QUAD: Field = Field::new("fetch_whole_quad", 0, 7, 1);
pub const WORD0_RESOURCE_ID: Field = Field::new("resource_id", 0, 8, 8);
pub const WORD0_SRC_GPR: Field = Field::new("src_gpr", 0, 16, 7);
pub const WORD0_SRC_REL: Field = Field::new("src_rel", 0, 23, 1);
pub const WORD0_ALT_CONST: Field = Field::new("alt_const", 0, 24, 1);
pub const WORD0_RESOURCE_INDEX_MODE: Field = Field::new("resource_index_mode", 0, 25, 2);
pub const WORD0_SAMPLER_INDEX_MODE: Field = Field::new("sampler_index_mode", 0, 27, 2);

pub const INST_SAMPLE: i32 = 16;

// TEX_WORD1
pub const WORD1_DST_GPR: Field = Field::new("dst_gpr", 1, 0, 7);
pub const WORD1_DST_REL: Field = Field::new("dst_rel", 1, 7, 1);
pub const WORD1_DST_SEL_X: Field = Field::new("dst_sel_x", 1, 9, 3);
pub const WORD1_DST_SEL_Y: Field = Field::new("dst_sel_y", 1, 12, 3);
pub const WORD1_DST_SEL_Z: Field = Field::new("dst_sel_z", 1, 15, 3);
pub const WORD1_DST_SEL_W: Field = Field::new("dst_sel_w", 1, 18, 3);
pub const WORD1_LOD_BIAS: Field = Field::new("lod_bias", 1, 21, 7);
pub const WORD1_COORD_TYPE_X: Field = Field::new("coord_type_x", 1, 28, 1);
pub const WORD1_COORD_TYPE_Y: Field = Field::new("coord_type_y", 1, 29, 1);
pub const WORD1_COORD_TYPE_Z: Field = Field::new("coord_type_z", 1, 30, 1);
pub const WORD1_COORD_TYPE_W: Field = Field::new("coord_type_w", 1, 31, 1);

// TEX_WORD2
pub const WORD2_OFFSET_X: Field = Field::new("offset_x", 2, 0, 5);
pub const WORD2_OFFSET_Y: Field = Field::new("offset_y", 2, 5, 5);
pub const WORD2_OFFSET_Z: Field = Field::new("offset_z", 2, 10, 5);
pub const WORD2_SAMPLER_ID: Field = Field::new("sampler_id", 2, 15, 5);
pub const WORD2_SRC_SEL_X: Field = Field::new("src_sel_x", 2, 20, 3);
pub const WORD2_SRC_SEL_Y: Field = Field::new("src_sel_y", 2, 23, 3);
pub const WORD2_SRC_SEL_Z: Field = Field::new("src_sel_z", 2, 26, 3);
pub const WORD2_SRC_SEL_W: Field = Field::new("src_sel_w", 2, 29, 3);

const_assert!(WORD0_SAMPLER_INDEX_MODE.fits_word());
const_assert!(WORD1_COORD_TYPE_W.fits_word());
const_assert!(WORD2_SRC_SEL_W.fits_word());
