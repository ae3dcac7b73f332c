//! Error type for the XDR serializer and deserializer.

use std::{fmt, string::FromUtf8Error};

use serde::{de, ser};

/// Error type for the XDR Serde implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    // === General errors ===
    /// Custom message from Serde framework.
    Message(String),

    /// Invalid UTF-8 in string data.
    InvalidUtf8(FromUtf8Error),

    /// Base64 text could not be decoded.
    Base64(base64::DecodeError),

    /// Unexpected end of input.
    UnexpectedEof,

    // === XDR-specific errors ===
    /// Boolean or optional flag other than 0 or 1.
    InvalidBool(u32),

    /// Union discriminant outside the declared arms.
    InvalidDiscriminant {
        /// Union type name.
        name: &'static str,
        /// Actual discriminant value.
        value: u32,
    },

    /// Padding bytes after opaque data or a string were not zero.
    NonZeroPadding,

    /// Length does not fit the 32-bit XDR length prefix.
    LengthOverflow(usize),

    /// Unsupported type for this format.
    UnsupportedType(&'static str),

    /// Trailing data after deserialization.
    TrailingData(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Message(msg) => write!(f, "{msg}"),
            Self::InvalidUtf8(err) => write!(f, "Invalid UTF-8: {err}"),
            Self::Base64(err) => write!(f, "Invalid base64: {err}"),
            Self::UnexpectedEof => write!(f, "Unexpected end of input"),
            Self::InvalidBool(value) => write!(f, "Invalid XDR bool value {value}"),
            Self::InvalidDiscriminant { name, value } => {
                write!(f, "Invalid discriminant {value} for union {name}")
            }
            Self::NonZeroPadding => write!(f, "Non-zero padding bytes"),
            Self::LengthOverflow(len) => write!(f, "Length {len} does not fit in 32 bits"),
            Self::UnsupportedType(ty) => write!(f, "Unsupported type: {ty}"),
            Self::TrailingData(n) => write!(f, "{n} byte(s) of trailing data after value"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidUtf8(err) => Some(err),
            Self::Base64(err) => Some(err),
            _ => None,
        }
    }
}

// Required for serde::ser::Serializer
impl ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }
}

// Required for serde::de::Deserializer
impl de::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Self::Message(msg.to_string())
    }
}

impl From<FromUtf8Error> for Error {
    fn from(err: FromUtf8Error) -> Self {
        Self::InvalidUtf8(err)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(err: base64::DecodeError) -> Self {
        Self::Base64(err)
    }
}

/// Shorthand Result type for XDR operations.
pub type Result<T> = std::result::Result<T, Error>;
