//! Address Configuration Module
//!
//! Network selection and the version bytes that tag Base58Check addresses.
//! Settings can be built in code or loaded from a TOML file:
//!
//! ```toml
//! network = "testnet"
//!
//! [versions]
//! pubkey_hash = 0x6f
//! script_hash = 0xc4
//! ```
//!
//! When the `[versions]` table is omitted the versions of the selected
//! network are used.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

/// Version byte of a mainnet public-key-hash (P2PKH) address.
pub const PUBKEY_HASH_VERSION: u8 = 0x00;
/// Version byte of a mainnet script-hash (P2SH) address.
pub const SCRIPT_HASH_VERSION: u8 = 0x05;
/// Construction-time marker: the bytes are a raw public key that still has to be hashed.
/// Never appears inside an encoded address.
pub const PUBLIC_KEY_SENTINEL: u8 = 0xFF;

/// Version byte of a testnet/regtest public-key-hash address.
pub const TESTNET_PUBKEY_HASH_VERSION: u8 = 0x6F;
/// Version byte of a testnet/regtest script-hash address.
pub const TESTNET_SCRIPT_HASH_VERSION: u8 = 0xC4;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid settings: {0}")]
    Invalid(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Network type for Bitcoin addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NetworkType {
    #[default]
    MainNet,
    TestNet,
    Regtest,
}

impl NetworkType {
    /// Gets the address version bytes used on this network
    pub fn address_versions(&self) -> AddressVersions {
        match self {
            NetworkType::MainNet => AddressVersions::MAINNET,
            NetworkType::TestNet | NetworkType::Regtest => AddressVersions::TESTNET,
        }
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetworkType::MainNet => write!(f, "mainnet"),
            NetworkType::TestNet => write!(f, "testnet"),
            NetworkType::Regtest => write!(f, "regtest"),
        }
    }
}

impl FromStr for NetworkType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mainnet" | "main" | "bitcoin" => Ok(NetworkType::MainNet),
            "testnet" | "test" => Ok(NetworkType::TestNet),
            "regtest" | "local" => Ok(NetworkType::Regtest),
            _ => Err(ConfigError::Invalid(format!("unknown network type: {}", s))),
        }
    }
}

/// The pair of version bytes that tag the two address kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AddressVersions {
    /// Version byte of public-key-hash addresses
    pub pubkey_hash: u8,
    /// Version byte of script-hash addresses
    pub script_hash: u8,
}

impl AddressVersions {
    pub const MAINNET: Self = Self {
        pubkey_hash: PUBKEY_HASH_VERSION,
        script_hash: SCRIPT_HASH_VERSION,
    };

    pub const TESTNET: Self = Self {
        pubkey_hash: TESTNET_PUBKEY_HASH_VERSION,
        script_hash: TESTNET_SCRIPT_HASH_VERSION,
    };

    /// Checks that the two versions can be told apart and neither collides
    /// with [`PUBLIC_KEY_SENTINEL`].
    pub fn validate(&self) -> ConfigResult<()> {
        if self.pubkey_hash == self.script_hash {
            return Err(ConfigError::Invalid(format!(
                "pubkey_hash and script_hash share version 0x{:02x}",
                self.pubkey_hash
            )));
        }
        for version in [self.pubkey_hash, self.script_hash] {
            if version == PUBLIC_KEY_SENTINEL {
                return Err(ConfigError::Invalid(format!(
                    "version 0x{:02x} is reserved for raw public keys",
                    version
                )));
            }
        }
        Ok(())
    }
}

impl Default for AddressVersions {
    fn default() -> Self {
        Self::MAINNET
    }
}

/// Address settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(try_from = "RawAddressSettings")]
pub struct AddressSettings {
    pub network: NetworkType,
    pub versions: AddressVersions,
}

#[derive(Deserialize)]
struct RawAddressSettings {
    #[serde(default)]
    network: NetworkType,
    #[serde(default)]
    versions: Option<AddressVersions>,
}

impl TryFrom<RawAddressSettings> for AddressSettings {
    type Error = ConfigError;

    fn try_from(raw: RawAddressSettings) -> Result<Self, Self::Error> {
        let versions = raw
            .versions
            .unwrap_or_else(|| raw.network.address_versions());
        versions.validate()?;
        Ok(Self {
            network: raw.network,
            versions,
        })
    }
}

impl AddressSettings {
    /// Settings for a network with its standard version bytes
    pub fn for_network(network: NetworkType) -> Self {
        Self {
            network,
            versions: network.address_versions(),
        }
    }

    /// Parses settings from TOML text
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Loads settings from a TOML file
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let settings = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            network = %settings.network,
            pubkey_hash = settings.versions.pubkey_hash,
            script_hash = settings.versions.script_hash,
            "loaded address settings"
        );
        Ok(settings)
    }

    /// Renders the settings as TOML
    pub fn to_toml_string(&self) -> ConfigResult<String> {
        toml::to_string(self).map_err(|err| ConfigError::Invalid(err.to_string()))
    }
}
