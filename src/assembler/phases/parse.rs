//! The parser. Dispatches on the leading `.` and family letter, then hands
//! the token cursor to the family grammar. The shared helpers here cover
//! the grammar fragments every family uses: numbers, parenthesized counts,
//! registers, channels and swizzles.

mod alu;
mod cf;
mod tex;
mod vtx;

use super::tokenize::Tokens;
use crate::assembler::model::{Op, Sel, Swizzle};
use std::fmt::Display;
use strum::IntoEnumIterator;

#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    UnknownFamily(String),
    UnknownOpcode(String),
    Expected(&'static str, String),
    Malformed(&'static str, String),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::UnknownFamily(tok) => write!(f, "unknown instruction family '{}'", tok),
            Error::UnknownOpcode(tok) => write!(f, "unknown opcode '{}'", tok),
            Error::Expected(what, tok) => write!(f, "expected {}, found '{}'", what, tok),
            Error::Malformed(what, tok) => write!(f, "malformed {} '{}'", what, tok),
        }
    }
}

pub fn parse(toks: &mut Tokens) -> Result<Op, Error> {
    if !toks.accept(".") {
        return Err(Error::UnknownFamily(toks.next().to_owned()));
    }

    if toks.accept("c") {
        cf::parse(toks)
    } else if toks.accept("a") {
        alu::parse(toks)
    } else if toks.accept("v") {
        vtx::parse(toks)
    } else if toks.accept("t") {
        tex::parse(toks)
    } else {
        Err(Error::UnknownFamily(toks.next().to_owned()))
    }
}

fn expect(toks: &mut Tokens, lit: &'static str) -> Result<(), Error> {
    if toks.accept(lit) {
        Ok(())
    } else {
        Err(Error::Expected(lit, toks.next().to_owned()))
    }
}

fn number_token(tok: &str) -> Result<i32, Error> {
    let parsed = if let Some(hex) = tok.strip_prefix("0x") {
        u32::from_str_radix(hex, 16).map(|v| v as i32)
    } else {
        tok.parse::<i32>()
    };
    parsed.map_err(|_| Error::Malformed("number", tok.to_owned()))
}

fn number(toks: &mut Tokens) -> Result<i32, Error> {
    let tok = toks.next().to_owned();
    number_token(&tok)
}

/// A parenthesized count, `( n )`.
fn count(toks: &mut Tokens) -> Result<i32, Error> {
    expect(toks, "(")?;
    let n = number(toks)?;
    expect(toks, ")")?;
    Ok(n)
}

/// A register token, `r`/`R` followed by a number.
fn register(toks: &mut Tokens) -> Result<i32, Error> {
    let tok = toks.next().to_owned();
    if tok.starts_with('r') || tok.starts_with('R') {
        number_token(&tok[1..])
    } else {
        Err(Error::Malformed("register", tok))
    }
}

/// A single-character channel selector.
fn channel(toks: &mut Tokens) -> Result<Sel, Error> {
    let tok = toks.next();
    let mut chars = tok.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(Sel::from_char(c)),
        _ => Err(Error::Malformed("channel", tok.to_owned())),
    }
}

/// An exactly-four-character swizzle.
fn swizzle(toks: &mut Tokens) -> Result<Swizzle, Error> {
    let tok = toks.next();
    if tok.chars().count() != 4 {
        return Err(Error::Malformed("swizzle", tok.to_owned()));
    }
    let mut sels = [Sel::X; 4];
    for (slot, c) in sels.iter_mut().zip(tok.chars()) {
        *slot = Sel::from_char(c);
    }
    Ok(Swizzle(sels))
}

/// Matches the next token against a keyword enum, consuming it on a hit.
fn keyword<E: IntoEnumIterator + Display>(toks: &mut Tokens) -> Option<E> {
    E::iter().find(|k| toks.accept(&k.to_string()))
}

/// A trailing bare label-reference token. The closing `;` cannot be a
/// label name.
fn label(toks: &mut Tokens) -> Result<String, Error> {
    let tok = toks.next().to_owned();
    if tok == ";" {
        Err(Error::Expected("label", tok))
    } else {
        Ok(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::super::tokenize::tokenize;
    use super::*;
    use crate::assembler::model::Cond;

    fn toks(source: &str) -> Tokens {
        tokenize(source, &(0..source.len())).unwrap()
    }

    #[test]
    fn numbers_decimal_and_hex() {
        assert_eq!(number(&mut toks("17;")), Ok(17));
        assert_eq!(number(&mut toks("0x1c0;")), Ok(0x1c0));
        assert_eq!(
            number(&mut toks("zzz;")),
            Err(Error::Malformed("number", "zzz".to_owned())),
        );
    }

    #[test]
    fn registers_take_either_case() {
        assert_eq!(register(&mut toks("r12;")), Ok(12));
        assert_eq!(register(&mut toks("R3;")), Ok(3));
        assert_eq!(
            register(&mut toks("q7;")),
            Err(Error::Malformed("register", "q7".to_owned())),
        );
    }

    #[test]
    fn swizzles_are_exactly_four_characters() {
        assert_eq!(
            swizzle(&mut toks("xw01;")),
            Ok(Swizzle([Sel::X, Sel::W, Sel::Zero, Sel::One])),
        );
        assert_eq!(
            swizzle(&mut toks("xyz;")),
            Err(Error::Malformed("swizzle", "xyz".to_owned())),
        );
        // Junk characters select the mask value.
        assert_eq!(
            swizzle(&mut toks("xq__;")),
            Ok(Swizzle([Sel::X, Sel::Mask, Sel::Mask, Sel::Mask])),
        );
    }

    #[test]
    fn keyword_matches_whole_tokens() {
        assert_eq!(keyword::<Cond>(&mut toks("nb;")), Some(Cond::NotBool));
        assert_eq!(keyword::<Cond>(&mut toks("b;")), Some(Cond::Bool));
        assert_eq!(keyword::<Cond>(&mut toks("never;")), None);
    }

    #[test]
    fn unknown_family_is_rejected() {
        assert_eq!(
            parse(&mut toks(".q.ret;")),
            Err(Error::UnknownFamily("q".to_owned())),
        );
        assert_eq!(
            parse(&mut toks("c.ret;")),
            Err(Error::UnknownFamily("c".to_owned())),
        );
    }
}
