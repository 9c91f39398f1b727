//! Bitcoin address types.
//!
//! [`Address`] wraps either Base58Check text or a hash and converts between
//! the two on demand. [`Hash`] is the byte value both hash kinds share and
//! [`HashKind`] tells a public-key hash from a script hash.

pub mod address;
pub mod error;
pub mod hash;

pub use address::Address;
pub use error::{AddressError, AddressResult};
pub use hash::{Hash, HashKind, TypedHash};
