//! Cryptographic primitives for Bitcoin address handling.
//!
//! - [`hash`]: SHA-256, RIPEMD-160, Hash160, Hash256 and the four byte checksum
//! - [`base58`]: Base58 and Base58Check encoding, including the versioned form
//!   used by addresses

pub mod base58;
pub mod error;
pub mod hash;

pub use base58::{
    decode, decode_check, decode_versioned, encode, encode_check, encode_versioned, ToBase58Check,
};
pub use error::{Base58Error, Base58Result};
pub use hash::{checksum, hash160, hash256, ripemd160, sha256, verify_checksum};
