use thiserror::Error;

/// Failure to read a statement balance such as `"1.234,56€"`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty balance")]
    Empty,

    #[error("Invalid balance: '{0}'")]
    Invalid(String),

    #[error("Balance out of range: '{0}'")]
    OutOfRange(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Color must start with '#': '{0}'")]
    MissingHash(String),

    #[error("Color must have 6 or 8 hex digits: '{0}'")]
    BadLength(String),

    #[error("Invalid hex digits in color: '{0}'")]
    BadDigits(String),
}
