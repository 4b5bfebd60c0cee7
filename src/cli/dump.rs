//! The listing printer. Each instruction renders as its labels, its words
//! and an echo of its (whitespace-collapsed) source text:
//!
//! ```text
//! /*label:*/
//! 0x00000000, 0x0500fc00, /*0: .c.ret;*/
//! ```

use crate::assembler::model::{Instruction, Program};
use crate::common;
use std::fmt::Write;

pub fn dump(program: &Program, source: &str) -> String {
    let mut out = String::new();
    for inst in &program.instructions {
        dump_inst(&mut out, inst, source);
    }
    out
}

fn dump_inst(out: &mut String, inst: &Instruction, source: &str) {
    for label in &inst.labels {
        writeln!(out, "/*{}:*/", label).unwrap();
    }
    for word in &inst.words {
        write!(out, "0x{:08x}, ", word).unwrap();
    }
    writeln!(
        out,
        "/*{}: {}*/",
        inst.pc,
        common::collapse_spaces(&source[inst.span.clone()])
    )
    .unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assembler::assemble;

    #[test]
    fn listing_matches_the_reference_printer() {
        let source = "main:\n.c.ret;";
        let program = assemble(source).unwrap();
        assert_eq!(
            dump(&program, source),
            "/*main:*/\n0x00000000, 0x0500fc00, /*0: .c.ret;*/\n",
        );
    }

    #[test]
    fn echo_collapses_whitespace() {
        let source = ".c.fs\t\n  entry ;\nentry: .c.ret;";
        let program = assemble(source).unwrap();
        let listing = dump(&program, source);
        assert!(listing.contains("/*0: .c.fs entry ;*/"));
        assert!(listing.contains("/*entry:*/\n"));
    }
}
