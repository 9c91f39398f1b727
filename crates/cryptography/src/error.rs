//! Error types for the Base58 and Base58Check codec.

use thiserror::Error;

/// Errors returned when decoding Base58 or Base58Check text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Base58Error {
    /// The text contains a character outside the Base58 alphabet.
    #[error("base58: invalid character '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input text.
        position: usize,
    },

    /// The decoded buffer cannot hold a version byte and a checksum.
    #[error("base58check: decoded length {length} is shorter than the minimum of {min} bytes")]
    TooShort {
        /// Length of the decoded buffer.
        length: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// The trailing four bytes do not match the recomputed checksum.
    #[error("base58check: invalid checksum (expected {expected:08x}, found {actual:08x})")]
    IncorrectChecksum {
        /// Checksum recomputed from the decoded payload.
        expected: u32,
        /// Checksum carried by the text.
        actual: u32,
    },
}

impl Base58Error {
    /// Returns true for malformed text: a bad character or a buffer that is too short.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::InvalidCharacter { .. } | Self::TooShort { .. })
    }

    /// Returns true when the text was well formed but its checksum did not match.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Self::IncorrectChecksum { .. })
    }
}

/// Result type for Base58 operations.
pub type Base58Result<T> = Result<T, Base58Error>;
