/// One named bit-field slot inside an instruction's word group.
///
/// Packing truncates: a value wider than `bits` silently loses its high
/// bits, and negative values wrap two's-complement into the field. Several
/// layout constants (count biases, the ALU clause opcode) rely on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub word: usize,
    pub pos: u32,
    pub bits: u32,
}

impl Field {
    pub const fn new(name: &'static str, word: usize, pos: u32, bits: u32) -> Field {
        Field { name, word, pos, bits }
    }

    pub const fn mask(self) -> u32 {
        ((1u64 << self.bits) - 1) as u32
    }

    pub const fn pack(self, v: i32) -> u32 {
        ((v as u32) & self.mask()) << self.pos
    }

    /// ORs the packed value into the field's word.
    pub fn set(self, words: &mut [u32], v: i32) {
        words[self.word] |= self.pack(v);
    }

    pub const fn fits_word(self) -> bool {
        self.pos + self.bits <= 32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const COUNT: Field = Field::new("count", 1, 10, 6);
    const INST: Field = Field::new("inst", 1, 26, 4);

    #[test]
    fn pack_shifts_into_place() {
        assert_eq!(COUNT.pack(1), 1 << 10);
        assert_eq!(COUNT.pack(0), 0);
    }

    #[test]
    fn pack_wraps_negative_values() {
        // An unset count biased by -1 fills the field.
        assert_eq!(COUNT.pack(-1), 0x3f << 10);
        assert_eq!(COUNT.pack(0 - 1), 0x3f << 10);
    }

    #[test]
    fn pack_truncates_wide_values() {
        // The ALU clause opcode is defined relative to the wide CF INST
        // field and truncates to zero in the narrow one.
        assert_eq!(INST.pack(8 << 4), 0);
        assert_eq!(COUNT.pack(0x40), 0);
        assert_eq!(COUNT.pack(0x41), 1 << 10);
    }

    #[test]
    fn set_ors_into_the_right_word() {
        let mut w = [0u32; 2];
        COUNT.set(&mut w, 3);
        INST.set(&mut w, 5);
        assert_eq!(w[0], 0);
        assert_eq!(w[1], (3 << 10) | (5 << 26));
    }
}
