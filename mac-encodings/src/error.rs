//! Errors of strict decoding.

use core::fmt;

/// A specialized [`Result`] type for decoding operations.
pub type Result<T> = core::result::Result<T, DecodeError>;

/// An error encountered while decoding legacy text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// The input contains a code that has no Unicode mapping.
    Unmapped {
        /// The offending code.
        code: u8,
        /// The byte offset of the code in the input.
        offset: usize,
    },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unmapped { code, offset } => {
                write!(f, "code {code:#04X} at offset {offset} has no Unicode mapping")
            }
        }
    }
}

impl core::error::Error for DecodeError {}
