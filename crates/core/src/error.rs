use btc_cryptography::Base58Error;
use thiserror::Error;

use crate::hash::HashKind;

/// Errors raised by [`Address`](crate::Address) accessors and constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// The address text is malformed or its checksum does not match.
    #[error("address: {0}")]
    Base58(#[from] Base58Error),

    /// The address resolved to another kind of hash, or to none.
    #[error("address: not a {expected} address (resolved to {})", describe(.found))]
    WrongKind {
        expected: HashKind,
        found: Option<HashKind>,
    },

    /// The address has no public-key hash to encode as text.
    #[error("address: only public key hash addresses can be encoded as text")]
    InvalidState,

    /// The construction version byte is neither a known address version nor the public key marker.
    #[error("address: unsupported version byte 0x{0:02x}")]
    UnsupportedVersion(u8),

    /// The version bytes the address is read against are unusable.
    #[error("address: invalid settings: {0}")]
    InvalidSettings(String),

    /// The address does not resolve to any hash.
    #[error("address: does not resolve to a hash")]
    Unresolved,
}

impl AddressError {
    /// Returns true for errors coming from malformed address text.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Self::Base58(err) if err.is_format_error())
    }

    /// Returns true when the address text failed its checksum.
    pub fn is_checksum_error(&self) -> bool {
        matches!(self, Self::Base58(err) if err.is_checksum_error())
    }
}

fn describe(found: &Option<HashKind>) -> String {
    match found {
        Some(kind) => kind.to_string(),
        None => "no recognized hash".to_string(),
    }
}

/// Result type for address operations.
pub type AddressResult<T> = Result<T, AddressError>;
