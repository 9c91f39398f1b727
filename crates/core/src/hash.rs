//! Hash values carried by addresses.

use btc_config::AddressVersions;
use serde::{de::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An immutable hash value with byte-wise equality.
///
/// Usually a 20 byte RIPEMD-160 output, but addresses built from raw bytes
/// keep whatever length they were given.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Hash(Vec<u8>);

impl Hash {
    #[inline]
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self(bytes.into())
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Hash {
    #[inline]
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Hash {
    #[inline]
    fn from(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl<const N: usize> From<[u8; N]> for Hash {
    #[inline]
    fn from(bytes: [u8; N]) -> Self {
        Self(bytes.to_vec())
    }
}

impl From<&[u8]> for Hash {
    #[inline]
    fn from(bytes: &[u8]) -> Self {
        Self(bytes.to_vec())
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(&self.0))
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", hex::encode(&self.0))
    }
}

impl FromStr for Hash {
    type Err = hex::FromHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);
        hex::decode(digits).map(Self)
    }
}

impl Serialize for Hash {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(&self.0))
    }
}

impl<'de> Deserialize<'de> for Hash {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(D::Error::custom)
    }
}

/// Which spending condition a hash identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// Hash160 of a public key (P2PKH).
    PublicKeyHash,
    /// Hash of a redemption script (P2SH).
    ScriptHash,
}

impl HashKind {
    /// Maps an address version byte to its hash kind, if the byte is one of `versions`.
    pub fn from_version(version: u8, versions: &AddressVersions) -> Option<Self> {
        if version == versions.pubkey_hash {
            Some(Self::PublicKeyHash)
        } else if version == versions.script_hash {
            Some(Self::ScriptHash)
        } else {
            None
        }
    }

    /// The version byte that tags this kind.
    pub fn version(self, versions: &AddressVersions) -> u8 {
        match self {
            Self::PublicKeyHash => versions.pubkey_hash,
            Self::ScriptHash => versions.script_hash,
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PublicKeyHash => f.write_str("public key hash"),
            Self::ScriptHash => f.write_str("script hash"),
        }
    }
}

/// A resolved hash together with its kind.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypedHash {
    kind: HashKind,
    hash: Hash,
}

impl TypedHash {
    #[inline]
    pub fn new(kind: HashKind, hash: Hash) -> Self {
        Self { kind, hash }
    }

    #[inline]
    pub fn kind(&self) -> HashKind {
        self.kind
    }

    #[inline]
    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    #[inline]
    pub fn into_hash(self) -> Hash {
        self.hash
    }
}
