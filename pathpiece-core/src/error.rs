use std::fmt::Display;
use std::str::Utf8Error;
use thiserror::Error;

pub type DecodeResult<T> = Result<T, DecodeError>;

/// Why a piece of text could not be turned into a typed value.
///
/// The `Display` output is the human-readable message handed back to callers,
/// so every variant renders a complete sentence on its own.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    // Malformed input
    #[error("could not parse: '{input}'")]
    CouldNotParse { input: String },

    #[error("could not parse: '{input}' ({reason})")]
    Malformed { input: String, reason: String },

    // Numeric range
    #[error("out of bounds: '{value}' (should be between {min} and {max})")]
    OutOfBounds {
        value: String,
        min: String,
        max: String,
    },

    #[error("underflow: {value} (should be a non-negative integer)")]
    Underflow { value: String },

    // Header bytes
    #[error("could not parse: '{source}'")]
    InvalidEncoding {
        #[source]
        source: Utf8Error,
    },

    // Enumerations
    #[error("Invalid {type_name}")]
    InvalidVariant { type_name: &'static str },

    #[error("{type_name} cannot be parsed")]
    Unparseable { type_name: &'static str },

    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    pub fn could_not_parse(input: impl Into<String>) -> Self {
        Self::CouldNotParse {
            input: input.into(),
        }
    }

    pub fn malformed(input: impl Into<String>, reason: impl Display) -> Self {
        Self::Malformed {
            input: input.into(),
            reason: reason.to_string(),
        }
    }

    pub fn custom(message: impl Into<String>) -> Self {
        Self::Custom(message.into())
    }

    pub fn invalid_encoding(source: Utf8Error) -> Self {
        Self::InvalidEncoding { source }
    }
}

impl From<Utf8Error> for DecodeError {
    fn from(source: Utf8Error) -> Self {
        Self::invalid_encoding(source)
    }
}
