use std::fmt;

/// Error types for complex arithmetic and text parsing
#[derive(Debug, Clone, PartialEq)]
pub enum ComplexError {
    DivisionByZero,
    ParseFormat(String),
}

impl fmt::Display for ComplexError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ComplexError::DivisionByZero => write!(f, "Division by zero"),
            ComplexError::ParseFormat(msg) => write!(f, "Invalid complex format: {}", msg),
        }
    }
}

impl std::error::Error for ComplexError {}

impl From<simple_error::SimpleError> for ComplexError {
    fn from(err: simple_error::SimpleError) -> Self {
        ComplexError::ParseFormat(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ComplexError>;
