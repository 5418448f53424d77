use std::fmt;

#[derive(Debug)]
pub enum Error {
    InputParseError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InputParseError(msg) => write!(f, "Input Parse Error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}
