//! The label scanner. Walks the raw buffer once, splitting it into
//! instruction spans (everything up to and including a `;`) and collecting
//! the `name:` labels defined in front of each span. `#` starts a comment
//! running to end of line.

use super::types::{Loc, Located};
use std::fmt::Display;
use std::ops::Range;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnterminatedInstruction,
    EmptyLabel,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnterminatedInstruction => write!(f, "instruction not terminated by ';'"),
            Error::EmptyLabel => write!(f, "empty label name"),
        }
    }
}

/// One not-yet-tokenized instruction: its labels and its source span.
#[derive(Debug, PartialEq, Eq)]
pub struct RawInst {
    pub labels: Vec<String>,
    pub span: Range<usize>,
}

pub fn scan(source: &str) -> Result<Vec<RawInst>, Located<Error>> {
    let buf = source.as_bytes();
    let mut insts = Vec::new();

    let mut i = 0;
    'next_inst: while i < buf.len() {
        let mut labels = Vec::new();
        loop {
            while i < buf.len() && buf[i].is_ascii_whitespace() {
                i += 1;
            }
            if i == buf.len() {
                // Trailing labels with nothing after them are dropped.
                break 'next_inst;
            }

            let start = i;
            if buf[start] == b'#' {
                while i < buf.len() && buf[i] != b'\n' {
                    i += 1;
                }
                continue;
            }

            while i < buf.len() && buf[i] != b';' && buf[i] != b':' {
                i += 1;
            }
            if i == buf.len() {
                return Err(Located::with_loc(
                    Loc::new(start),
                    Error::UnterminatedInstruction,
                ));
            }

            if buf[i] == b';' {
                insts.push(RawInst {
                    labels,
                    span: start..i + 1,
                });
                i += 1;
                continue 'next_inst;
            }

            let name = source[start..i].trim();
            if name.is_empty() {
                return Err(Located::with_loc(Loc::new(i), Error::EmptyLabel));
            }
            labels.push(name.to_owned());
            i += 1;
        }
    }

    Ok(insts)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(source: &str) -> Vec<(Vec<String>, String)> {
        scan(source)
            .unwrap()
            .into_iter()
            .map(|inst| (inst.labels, source[inst.span].to_owned()))
            .collect()
    }

    #[test]
    fn single_instruction() {
        assert_eq!(
            spans(".c.ret;"),
            vec![(vec![], ".c.ret;".to_owned())],
        );
    }

    #[test]
    fn labels_accumulate_onto_the_next_instruction() {
        assert_eq!(
            spans("main: other :\n .c.ret;"),
            vec![(
                vec!["main".to_owned(), "other".to_owned()],
                ".c.ret;".to_owned()
            )],
        );
    }

    #[test]
    fn comments_run_to_end_of_line() {
        assert_eq!(
            spans("# leading\nfoo: # interleaved\n.c.ret; # trailing\n"),
            vec![(vec!["foo".to_owned()], ".c.ret;".to_owned())],
        );
    }

    #[test]
    fn spans_are_inclusive_of_the_semicolon() {
        let insts = scan(".c.fs foo;\n.c.ret;").unwrap();
        assert_eq!(insts.len(), 2);
        assert_eq!(insts[0].span, 0..10);
        assert_eq!(insts[1].span, 11..18);
    }

    #[test]
    fn empty_label_is_fatal() {
        assert_eq!(
            scan(" : .c.ret;"),
            Err(Located::with_loc(Loc::new(1), Error::EmptyLabel)),
        );
    }

    #[test]
    fn unterminated_instruction_is_fatal() {
        assert_eq!(
            scan(".c.ret"),
            Err(Located::with_loc(
                Loc::new(0),
                Error::UnterminatedInstruction
            )),
        );
    }

    #[test]
    fn trailing_labels_are_dropped() {
        assert_eq!(spans(".c.ret; orphan: \n"), vec![(vec![], ".c.ret;".to_owned())]);
    }
}
