//! The lexer. Splits one instruction span into string tokens: whitespace
//! separates, and each delimiter character is a token of its own, so
//! back-to-back delimiters like `.c.fs` yield `.`, `c`, `.`, `fs`. The
//! token list always ends with `;`.

use super::types::{Loc, Located};
use std::fmt::Display;
use std::ops::Range;

const DELIMITERS: &[u8] = b".,;()[]-+/*$";

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnterminatedInstruction,
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnterminatedInstruction => write!(f, "token stream not terminated by ';'"),
        }
    }
}

/// A strictly sequential cursor over the tokens of one instruction.
#[derive(Debug, PartialEq, Eq)]
pub struct Tokens {
    toks: Vec<String>,
    cursor: usize,
}

impl Tokens {
    fn new(toks: Vec<String>) -> Self {
        Tokens { toks, cursor: 0 }
    }

    /// Every grammar stops at the closing `;`, so running off the end is a
    /// grammar bug, not an input error.
    pub fn next(&mut self) -> &str {
        assert!(self.cursor < self.toks.len(), "token cursor overrun");
        let tok = &self.toks[self.cursor];
        self.cursor += 1;
        tok
    }

    /// Consumes the next token if it equals `tok`, otherwise leaves the
    /// cursor where it was.
    pub fn accept(&mut self, tok: &str) -> bool {
        if self.next() == tok {
            true
        } else {
            self.cursor -= 1;
            false
        }
    }

    #[cfg(test)]
    fn remaining(&self) -> &[String] {
        &self.toks[self.cursor..]
    }
}

pub fn tokenize(source: &str, span: &Range<usize>) -> Result<Tokens, Located<Error>> {
    let buf = source.as_bytes();
    let mut toks = Vec::new();

    let mut open: Option<usize> = None;
    for i in span.clone() {
        let c = buf[i];
        let is_space = c.is_ascii_whitespace();
        if is_space && open.is_none() {
            continue;
        }

        if is_space || DELIMITERS.contains(&c) {
            if let Some(start) = open.take() {
                toks.push(source[start..i].to_owned());
            }
            if is_space {
                continue;
            }
            toks.push((c as char).to_string());
            if c == b';' {
                return Ok(Tokens::new(toks));
            }
        } else if open.is_none() {
            open = Some(i);
        }
    }

    Err(Located::with_loc(
        Loc::new(span.start),
        Error::UnterminatedInstruction,
    ))
}
