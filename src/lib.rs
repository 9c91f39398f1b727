//! # btc-address: Bitcoin address encoding in Rust
//!
//! Conversion between Base58Check address text and the hash it carries,
//! either a public-key hash (P2PKH) or a script hash (P2SH).
//!
//! This library is organized into three crates:
//!
//! - [`btc_cryptography`] - SHA-256, RIPEMD-160, Hash160 and the Base58Check codec
//! - [`btc_config`] - network selection and address version bytes
//! - [`btc_core`] - the [`Hash`](core::Hash) value and the lazily resolved [`Address`](core::Address)
//!
//! ## Quick Start
//!
//! ```rust
//! use btc_address::prelude::*;
//!
//! let address: Address = "33iFwdLuRpW1uK1RTRqsoi8rR4NpDzk66k".parse()?;
//! assert_eq!(address.kind()?, Some(HashKind::ScriptHash));
//! assert!(address.pubkey_hash().is_err());
//!
//! let zero = Address::from_bytes([0u8; 20], PUBKEY_HASH_VERSION)?;
//! assert_eq!(zero.to_base58()?, "1111111111111111111114oLvT2");
//! # Ok::<(), AddressError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub use btc_config as config;
pub use btc_core as core;
pub use btc_cryptography as crypto;

/// Common imports for address handling
pub mod prelude {
    pub use crate::config::{
        AddressSettings, AddressVersions, NetworkType, PUBKEY_HASH_VERSION, PUBLIC_KEY_SENTINEL,
        SCRIPT_HASH_VERSION,
    };
    pub use crate::core::{Address, AddressError, Hash, HashKind, TypedHash};
    pub use crate::crypto::{Base58Error, ToBase58Check};
}

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
