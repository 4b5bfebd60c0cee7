//! The parsed instruction model. Each family keeps its own field record;
//! the alternate word interpretations (op2/op3, fetch/semantic) are distinct
//! `Op` variants rather than overlapping layouts.

use std::ops::Range;
use strum_macros::{Display, EnumIter};

/// Channel selector values shared by every family's swizzle fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sel {
    X = 0,
    Y = 1,
    Z = 2,
    W = 3,
    Zero = 4,
    One = 5,
    Mask = 7,
}

impl Sel {
    /// Unrecognized characters select the mask value, as the hardware
    /// swizzle tables do.
    pub fn from_char(c: char) -> Sel {
        match c {
            'x' | 'X' => Sel::X,
            'y' | 'Y' => Sel::Y,
            'z' | 'Z' => Sel::Z,
            'w' | 'W' => Sel::W,
            '0' => Sel::Zero,
            '1' => Sel::One,
            _ => Sel::Mask,
        }
    }
}

impl Default for Sel {
    fn default() -> Sel {
        Sel::X
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Swizzle(pub [Sel; 4]);

impl Default for Swizzle {
    fn default() -> Swizzle {
        Swizzle([Sel::X, Sel::Y, Sel::Z, Sel::W])
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum Cond {
    #[strum(serialize = "a")]
    Active = 0,
    #[strum(serialize = "f")]
    False = 1,
    #[strum(serialize = "b")]
    Bool = 2,
    #[strum(serialize = "nb")]
    NotBool = 3,
}

impl Default for Cond {
    fn default() -> Cond {
        Cond::Active
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum KcacheMode {
    #[strum(serialize = "nop")]
    Nop = 0,
    #[strum(serialize = "l1")]
    Lock1 = 1,
    #[strum(serialize = "l2")]
    Lock2 = 2,
    #[strum(serialize = "lli")]
    LockLoopIndex = 3,
}

impl Default for KcacheMode {
    fn default() -> KcacheMode {
        KcacheMode::Nop
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum ExportKind {
    #[strum(serialize = "pix")]
    Pixel = 0,
    #[strum(serialize = "pos")]
    Position = 1,
    #[strum(serialize = "prm")]
    Param = 2,
}

impl Default for ExportKind {
    fn default() -> ExportKind {
        ExportKind::Pixel
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter)]
pub enum NumFormat {
    #[strum(serialize = "n")]
    Norm = 0,
    #[strum(serialize = "i")]
    Int = 1,
    #[strum(serialize = "s")]
    Scaled = 2,
}

impl Default for NumFormat {
    fn default() -> NumFormat {
        NumFormat::Norm
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    Fmt32_32Float = 30,
    Fmt32_32_32_32Float = 35,
    Fmt32_32_32 = 47,
    Fmt32_32_32Float = 48,
}

impl Default for DataFormat {
    fn default() -> DataFormat {
        DataFormat::Fmt32_32Float
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMod {
    Off = 0,
    Mul2 = 1,
    Mul4 = 2,
    Div2 = 3,
}

impl Default for OutputMod {
    fn default() -> OutputMod {
        OutputMod::Off
    }
}

/// A plain control-flow instruction (call/fetch-clause/return/nop).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Cf {
    pub cf_inst: i32,
    pub label: Option<String>,
    pub addr: i32,
    pub jump_table_sel: i32,
    pub pop_count: i32,
    pub cf_const: i32,
    pub cond: Cond,
    pub count: i32,
    pub valid_pixel_mode: bool,
    pub end_of_program: bool,
    pub whole_quad_mode: bool,
    pub barrier: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Kcache {
    pub bank: i32,
    pub addr: i32,
    pub mode: KcacheMode,
}

/// An ALU clause launch. Banks 2 and 3 are only reachable through the
/// extended four-word form, which the encoder does not support.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CfAlu {
    pub cf_inst: i32,
    pub label: String,
    pub addr: i32,
    pub count: i32,
    pub kcache: [Kcache; 4],
    pub ext: bool,
    pub alt_const: bool,
    pub whole_quad_mode: bool,
    pub barrier: bool,
}

/// An export in the swizzle form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CfExp {
    pub cf_inst: i32,
    pub kind: ExportKind,
    pub array_base: i32,
    pub index_gpr: i32,
    pub elem_size: i32,
    pub rw_gpr: i32,
    pub rw_rel: bool,
    pub swiz: Swizzle,
    pub burst_count: i32,
    pub valid_pixel_mode: bool,
    pub end_of_program: bool,
    pub mark: bool,
    pub barrier: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AluSrc {
    pub sel: i32,
    pub rel: bool,
    pub chan: Sel,
    pub neg: bool,
    pub abs: bool,
}

/// An ALU operation. `src[2]` and the op2-only fields are meaningful only
/// for the matching `Op` variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Alu {
    pub alu_inst: i32,
    pub src: [AluSrc; 3],
    pub dst_gpr: i32,
    pub dst_rel: bool,
    pub dst_chan: Sel,
    pub write_enable: bool,
    pub clamp: bool,
    pub omod: OutputMod,
    pub index_mode: i32,
    pub pred_sel: i32,
    pub last: bool,
    pub update_exec_mask: bool,
    pub update_pred: bool,
    pub bank_swizzle: i32,
}

/// A vertex fetch. `sem_id` or `dst_gpr`/`dst_rel` applies depending on the
/// `Op` variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vtx {
    pub vc_inst: i32,
    pub fetch_type: i32,
    pub fetch_whole_quad: bool,
    pub buffer_id: i32,
    pub src_gpr: i32,
    pub src_rel: bool,
    pub src_sel_x: Sel,
    pub mega_fetch_count: i32,
    pub sem_id: i32,
    pub dst_gpr: i32,
    pub dst_rel: bool,
    pub dst_swiz: Swizzle,
    pub use_const_fields: bool,
    pub data_format: DataFormat,
    pub num_format: NumFormat,
    pub format_comp_signed: bool,
    pub srf_mode_all: bool,
    pub offset: i32,
    pub endian_swap: i32,
    pub const_buf_no_stride: bool,
    pub mega_fetch: bool,
    pub alt_const: bool,
    pub buffer_index_mode: i32,
}

/// A texture sample.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tex {
    pub tex_inst: i32,
    pub inst_mod: i32,
    pub fetch_whole_quad: bool,
    pub resource_id: i32,
    pub src_gpr: i32,
    pub src_rel: bool,
    pub src_swiz: Swizzle,
    pub alt_const: bool,
    pub resource_index_mode: i32,
    pub sampler_index_mode: i32,
    pub dst_gpr: i32,
    pub dst_rel: bool,
    pub dst_swiz: Swizzle,
    pub lod_bias: i32,
    pub coord_type_x: bool,
    pub coord_type_y: bool,
    pub coord_type_z: bool,
    pub coord_type_w: bool,
    pub offset_x: i32,
    pub offset_y: i32,
    pub offset_z: i32,
    pub sampler_id: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Cf(Cf),
    CfAlu(CfAlu),
    CfExp(CfExp),
    AluOp2(Alu),
    AluOp3(Alu),
    VtxGpr(Vtx),
    VtxSem(Vtx),
    Tex(Tex),
}

impl Op {
    /// Fixed by kind; the program counter advances by half of this, in
    /// 64-bit units.
    pub fn word_count(&self) -> usize {
        match self {
            Op::Cf(_) | Op::CfExp(_) | Op::AluOp2(_) | Op::AluOp3(_) => 2,
            Op::CfAlu(alu) => {
                if alu.ext {
                    4
                } else {
                    2
                }
            }
            Op::VtxGpr(_) | Op::VtxSem(_) | Op::Tex(_) => 4,
        }
    }
}

/// One assembled instruction: the parsed operation, the labels defined in
/// front of it, its source span, its address, and (after encoding) its
/// words.
#[derive(Debug, Clone, PartialEq)]
pub struct Instruction {
    pub op: Op,
    pub labels: Vec<String>,
    pub span: Range<usize>,
    pub pc: i32,
    pub words: Vec<u32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub instructions: Vec<Instruction>,
}

impl Program {
    pub fn words(&self) -> Vec<u32> {
        self.instructions
            .iter()
            .flat_map(|inst| inst.words.iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sel_from_char_table() {
        assert_eq!(Sel::from_char('x'), Sel::X);
        assert_eq!(Sel::from_char('W'), Sel::W);
        assert_eq!(Sel::from_char('0'), Sel::Zero);
        assert_eq!(Sel::from_char('1'), Sel::One);
        assert_eq!(Sel::from_char('q'), Sel::Mask);
    }

    #[test]
    fn word_counts_by_kind() {
        assert_eq!(Op::Cf(Cf::default()).word_count(), 2);
        assert_eq!(Op::VtxGpr(Vtx::default()).word_count(), 4);
        assert_eq!(Op::Tex(Tex::default()).word_count(), 4);

        let mut clause = CfAlu::default();
        assert_eq!(Op::CfAlu(clause.clone()).word_count(), 2);
        clause.ext = true;
        assert_eq!(Op::CfAlu(clause).word_count(), 4);
    }
}
