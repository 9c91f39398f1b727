//! Base58Check addresses for public-key hashes and script hashes.
//!
//! An [`Address`] is built either from text or from hash bytes and derives
//! the other representation on first use. Each derived form is computed at
//! most once per instance and cached; a failed decode is cached as well, so
//! repeated accessor calls on bad text report the same error without
//! decoding again.
//!
//! Only public-key-hash addresses can be turned back into text. A script
//! hash address built from bytes has no textual form and
//! [`Address::to_base58`] reports [`AddressError::InvalidState`] for it.

use btc_config::{AddressSettings, AddressVersions, PUBLIC_KEY_SENTINEL};
use btc_cryptography::{base58, hash160, Base58Error};
use once_cell::sync::OnceCell;
use serde::{ser::Error as _, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, trace};

use crate::error::{AddressError, AddressResult};
use crate::hash::{Hash, HashKind, TypedHash};

type Resolution = Result<Option<TypedHash>, Base58Error>;

/// A Bitcoin address resolving lazily between its text and its hash.
///
/// Equality compares the resolved hash bytes only. An address that resolves
/// to no hash (bad text, or an unrecognized version) is not equal to
/// anything, itself included, which is why `Address` is `PartialEq` but not
/// `Eq`.
#[derive(Debug, Clone)]
pub struct Address {
    versions: AddressVersions,
    text: OnceCell<String>,
    resolved: OnceCell<Resolution>,
}

impl Address {
    /// Builds an address from raw bytes tagged with a version byte, using
    /// mainnet versions.
    ///
    /// - `0xFF`: `data` is a public key and is hashed with Hash160
    /// - `0x00`: `data` is already a public-key hash
    /// - `0x05`: `data` is already a script hash
    ///
    /// Any other version fails with [`AddressError::UnsupportedVersion`].
    pub fn from_bytes(data: impl Into<Vec<u8>>, version: u8) -> AddressResult<Self> {
        Self::from_bytes_with(&AddressSettings::default(), data, version)
    }

    /// Like [`Address::from_bytes`], against the version bytes of `settings`.
    ///
    /// Fails with [`AddressError::InvalidSettings`] when the version bytes
    /// collide or use the public key marker.
    pub fn from_bytes_with(
        settings: &AddressSettings,
        data: impl Into<Vec<u8>>,
        version: u8,
    ) -> AddressResult<Self> {
        let versions = checked_versions(settings)?;
        let data = data.into();
        let typed = if version == PUBLIC_KEY_SENTINEL {
            TypedHash::new(HashKind::PublicKeyHash, Hash::from(hash160(&data)))
        } else {
            let kind = HashKind::from_version(version, &versions)
                .ok_or(AddressError::UnsupportedVersion(version))?;
            TypedHash::new(kind, Hash::from(data))
        };
        Ok(Self::resolved_with(versions, typed))
    }

    /// Builds a public-key-hash address from a raw public key.
    pub fn from_public_key(public_key: &[u8]) -> Self {
        let hash = Hash::from(hash160(public_key));
        Self::from_typed_hash(TypedHash::new(HashKind::PublicKeyHash, hash))
    }

    /// Builds a public-key-hash address from an existing hash.
    pub fn from_pubkey_hash(hash: impl Into<Hash>) -> Self {
        Self::from_typed_hash(TypedHash::new(HashKind::PublicKeyHash, hash.into()))
    }

    /// Builds a script-hash address from an existing hash.
    pub fn from_script_hash(hash: impl Into<Hash>) -> Self {
        Self::from_typed_hash(TypedHash::new(HashKind::ScriptHash, hash.into()))
    }

    /// Builds an address from an already resolved hash, using mainnet versions.
    pub fn from_typed_hash(typed: TypedHash) -> Self {
        Self::resolved_with(AddressVersions::default(), typed)
    }

    fn resolved_with(versions: AddressVersions, typed: TypedHash) -> Self {
        Self {
            versions,
            text: OnceCell::new(),
            resolved: OnceCell::with_value(Ok(Some(typed))),
        }
    }

    /// Wraps address text without decoding it, using mainnet versions.
    pub fn from_base58(text: impl Into<String>) -> Self {
        Self::unresolved_with(AddressVersions::default(), text.into())
    }

    /// Like [`Address::from_base58`], against the version bytes of `settings`.
    ///
    /// The text is still decoded lazily; only the settings are checked here.
    pub fn from_base58_with(
        settings: &AddressSettings,
        text: impl Into<String>,
    ) -> AddressResult<Self> {
        let versions = checked_versions(settings)?;
        Ok(Self::unresolved_with(versions, text.into()))
    }

    fn unresolved_with(versions: AddressVersions, text: String) -> Self {
        Self {
            versions,
            text: OnceCell::with_value(text),
            resolved: OnceCell::new(),
        }
    }

    /// Wraps address text and decodes it immediately, surfacing format and
    /// checksum errors at construction.
    pub fn parse_with(settings: &AddressSettings, text: &str) -> AddressResult<Self> {
        let address = Self::from_base58_with(settings, text)?;
        address.resolve()?;
        Ok(address)
    }

    /// The version bytes this address is interpreted against.
    #[inline]
    pub fn versions(&self) -> &AddressVersions {
        &self.versions
    }

    fn resolve(&self) -> AddressResult<Option<&TypedHash>> {
        let resolution = self.resolved.get_or_init(|| self.decode_text());
        match resolution {
            Ok(typed) => Ok(typed.as_ref()),
            Err(err) => Err(AddressError::Base58(*err)),
        }
    }

    fn decode_text(&self) -> Resolution {
        // Only text-built addresses reach here; byte-built ones start resolved.
        let Some(text) = self.text.get() else {
            return Ok(None);
        };
        trace!(address = %text, "resolving address text");

        let (payload, version) = base58::decode_versioned(text)?;
        match HashKind::from_version(version, &self.versions) {
            Some(kind) => Ok(Some(TypedHash::new(kind, Hash::from(payload)))),
            None => {
                debug!(
                    address = %text,
                    version,
                    "address version is neither public key hash nor script hash"
                );
                Ok(None)
            }
        }
    }

    fn hash_of(&self, expected: HashKind) -> AddressResult<&Hash> {
        match self.resolve()? {
            Some(typed) if typed.kind() == expected => Ok(typed.hash()),
            other => Err(AddressError::WrongKind {
                expected,
                found: other.map(TypedHash::kind),
            }),
        }
    }

    /// The public-key hash, decoding the text on first use.
    ///
    /// Fails with [`AddressError::WrongKind`] when the address holds a script
    /// hash or no recognized hash.
    pub fn pubkey_hash(&self) -> AddressResult<&Hash> {
        self.hash_of(HashKind::PublicKeyHash)
    }

    /// The script hash, decoding the text on first use.
    pub fn script_hash(&self) -> AddressResult<&Hash> {
        self.hash_of(HashKind::ScriptHash)
    }

    /// Whichever hash the address resolves to, or `None` for an
    /// unrecognized version.
    pub fn either_hash(&self) -> AddressResult<Option<&Hash>> {
        Ok(self.resolve()?.map(TypedHash::hash))
    }

    /// The kind of hash the address resolves to.
    pub fn kind(&self) -> AddressResult<Option<HashKind>> {
        Ok(self.resolve()?.map(TypedHash::kind))
    }

    /// The resolved hash together with its kind.
    pub fn typed_hash(&self) -> AddressResult<Option<&TypedHash>> {
        self.resolve()
    }

    /// The resolved hash, for use as a lookup key.
    ///
    /// Fails with [`AddressError::Unresolved`] rather than returning a
    /// placeholder when no hash resolves.
    pub fn hash_key(&self) -> AddressResult<&Hash> {
        self.either_hash()?.ok_or(AddressError::Unresolved)
    }

    /// The Base58Check text of the address, encoding it on first use.
    pub fn to_base58(&self) -> AddressResult<&str> {
        self.text
            .get_or_try_init(|| match self.resolved.get() {
                Some(Ok(Some(typed))) if typed.kind() == HashKind::PublicKeyHash => {
                    trace!(hash = %typed.hash(), "encoding public key hash address");
                    Ok(base58::encode_versioned(
                        typed.hash().as_bytes(),
                        self.versions.pubkey_hash,
                    ))
                }
                _ => Err(AddressError::InvalidState),
            })
            .map(String::as_str)
    }
}

fn checked_versions(settings: &AddressSettings) -> AddressResult<AddressVersions> {
    settings
        .versions
        .validate()
        .map_err(|err| AddressError::InvalidSettings(err.to_string()))?;
    Ok(settings.versions)
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        match (self.either_hash(), other.either_hash()) {
            (Ok(Some(lhs)), Ok(Some(rhs))) => lhs == rhs,
            _ => false,
        }
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Ok(text) = self.to_base58() {
            return f.write_str(text);
        }
        match self.typed_hash() {
            Ok(Some(typed)) => write!(f, "{}:{}", typed.kind(), typed.hash()),
            _ => f.write_str("<unresolved address>"),
        }
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(&AddressSettings::default(), s)
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_base58().map_err(S::Error::custom)?;
        serializer.serialize_str(text)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Ok(Self::from_base58(text))
    }
}
