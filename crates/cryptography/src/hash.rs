//! Hash functions for Bitcoin address handling.
//!
//! This module provides the SHA-256 and RIPEMD-160 primitives and the two
//! combinations built on top of them: Hash160 for public-key hashes and
//! Hash256 (double SHA-256) for Base58Check checksums.

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Length in bytes of a Base58Check checksum.
pub const CHECKSUM_SIZE: usize = 4;

/// Length in bytes of a Hash160 digest.
pub const HASH160_SIZE: usize = 20;

/// Computes SHA-256 hash of the input data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes RIPEMD-160 hash of the input data.
pub fn ripemd160(data: &[u8]) -> [u8; 20] {
    let mut hasher = Ripemd160::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Computes Hash160 (RIPEMD-160 of SHA-256) of the input data.
/// This is how a public key becomes a public-key hash.
pub fn hash160(data: &[u8]) -> [u8; HASH160_SIZE] {
    let sha256_hash = sha256(data);
    ripemd160(&sha256_hash)
}

/// Computes Hash256 (double SHA-256) of the input data.
pub fn hash256(data: &[u8]) -> [u8; 32] {
    let first_hash = sha256(data);
    sha256(&first_hash)
}

/// Computes the Base58Check checksum: the first four bytes of Hash256.
pub fn checksum(data: &[u8]) -> [u8; CHECKSUM_SIZE] {
    let hash = hash256(data);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Verifies a Base58Check checksum.
pub fn verify_checksum(data: &[u8], checksum: &[u8]) -> bool {
    let computed_checksum = self::checksum(data);
    computed_checksum == checksum
}
