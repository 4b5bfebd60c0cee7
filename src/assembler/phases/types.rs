use super::{encode, parse, resolve, scan, tokenize};
use derive_more::Constructor;
use std::fmt::Display;

/// A byte offset into the source buffer.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Constructor)]
pub struct Loc {
    offset: usize,
}

impl Loc {
    pub fn offset(self) -> usize {
        self.offset
    }
}

impl Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(byte {})", self.offset)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct Located<T: Sized> {
    loc: Option<Loc>,
    val: T,
}

impl<T: Display> Display for Located<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.loc {
            None => write!(f, "@<unknown location>: {}", self.val),
            Some(loc) => write!(f, "@{}: {}", loc, self.val),
        }
    }
}

impl<T> Located<T> {
    fn new(loc: Option<Loc>, val: T) -> Self {
        Located { loc, val }
    }

    pub fn with_loc(loc: Loc, val: T) -> Self {
        Located::new(Some(loc), val)
    }

    pub fn loc(&self) -> Option<Loc> {
        self.loc
    }

    pub fn value(self) -> T {
        self.val
    }

    pub fn proximate_to_loc(self, loc: Loc) -> Self {
        match self.loc {
            None => Self { loc: Some(loc), ..self },
            Some(_) => self,
        }
    }

    pub fn map<S, F>(self, f: F) -> Located<S>
    where
        F: FnOnce(T) -> S,
    {
        Located::new(self.loc, f(self.val))
    }
}

impl<T> From<T> for Located<T> {
    fn from(val: T) -> Self {
        Located { loc: None, val }
    }
}

#[derive(Debug, PartialEq)]
pub enum Error {
    Scan(Located<String>),
    Tokenize(Located<String>),
    Parse(Located<String>),
    Resolve(String),
    Encode(String),
}

impl From<Located<scan::Error>> for Error {
    fn from(err: Located<scan::Error>) -> Self {
        Error::Scan(err.map(|err| format!("{}", err)))
    }
}

impl From<Located<tokenize::Error>> for Error {
    fn from(err: Located<tokenize::Error>) -> Self {
        Error::Tokenize(err.map(|err| format!("{}", err)))
    }
}

impl From<Located<parse::Error>> for Error {
    fn from(err: Located<parse::Error>) -> Self {
        Error::Parse(err.map(|err| format!("{}", err)))
    }
}

impl From<resolve::Error> for Error {
    fn from(err: resolve::Error) -> Self {
        Error::Resolve(format!("{}", err))
    }
}

impl From<encode::Error> for Error {
    fn from(err: encode::Error) -> Self {
        Error::Encode(format!("{}", err))
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Assembly Error (in ")?;
        match self {
            Error::Scan(_) => write!(f, "Scanner"),
            Error::Tokenize(_) => write!(f, "Tokenizer"),
            Error::Parse(_) => write!(f, "Parser"),
            Error::Resolve(_) => write!(f, "Resolver"),
            Error::Encode(_) => write!(f, "Encoder"),
        }?;
        write!(f, "): ")?;
        match self {
            Error::Scan(msg) => write!(f, "{}", msg),
            Error::Tokenize(msg) => write!(f, "{}", msg),
            Error::Parse(msg) => write!(f, "{}", msg),
            Error::Resolve(msg) => write!(f, "{}", msg),
            Error::Encode(msg) => write!(f, "{}", msg),
        }
    }
}
