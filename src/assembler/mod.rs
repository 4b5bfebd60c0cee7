//! The assembler: a pure function from a source buffer to an instruction
//! list carrying encoded words. Phases run in order over the whole program;
//! the first fatal error aborts with its location.

pub mod model;
pub mod phases;

pub use phases::types::Error;

use log::debug;
use model::{Instruction, Program};
use phases::types::{Loc, Located};

pub fn assemble(source: &str) -> Result<Program, Error> {
    let raw_insts = phases::scan(source)?;
    debug!("scanned {} instruction spans", raw_insts.len());

    let mut insts = Vec::with_capacity(raw_insts.len());
    let mut pc: i32 = 0;
    for raw in raw_insts {
        let mut toks = phases::tokenize(source, &raw.span)?;
        let op = phases::parse(&mut toks)
            .map_err(|err| Located::with_loc(Loc::new(raw.span.start), err))?;

        let num_words = op.word_count();
        insts.push(Instruction {
            op,
            labels: raw.labels,
            span: raw.span,
            pc,
            words: Vec::new(),
        });
        // Addresses count 64-bit quantities.
        pc += (num_words / 2) as i32;
    }
    debug!("parsed {} instructions, {} quadwords", insts.len(), pc);

    phases::resolve(&mut insts)?;

    for inst in &mut insts {
        inst.words = phases::encode(&inst.op)?;
    }

    Ok(Program { instructions: insts })
}
