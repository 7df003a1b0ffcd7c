//! Configuration file management.
//!
//! Handles reading, writing, and validating `.saltseal.toml`, which declares
//! the desired items and the settings used to compute them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::codec;
use crate::core::constants;
use crate::core::encryptor::Encryptor;
use crate::core::fingerprint::FingerprintAlgorithm;
use crate::core::key::KeyPolicy;
use crate::core::validation;
use crate::error::{ConfigError, Result};

const TEMPLATE_COMMENT: &str = r#"
# Declare items to seal, for example:
#
# [items.deploy_token]
# public_key_base64 = "qbQa1k8xeoBnKnzenV/QGTsNiCaGdDS0fjBpVuz1RFI="
# content_base64 = "dGhlX3NlY3JldA=="
# # or: content = "the_secret"
"#;

/// Project configuration stored in `.saltseal.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    /// Settings shared by every item
    pub saltseal: Meta,
    /// Declared items, keyed by name
    #[serde(default)]
    pub items: BTreeMap<String, ItemConfig>,
}

/// Settings section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct Meta {
    /// Configuration version
    pub version: String,
    /// How public keys of the wrong length are handled
    #[serde(default)]
    pub key_policy: KeyPolicy,
    /// Fingerprint digest
    #[serde(default)]
    pub fingerprint: FingerprintAlgorithm,
}

/// One declared item.
///
/// Content is given either already base64 encoded or as raw text.
#[derive(Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    pub public_key_base64: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl ItemConfig {
    /// Content as base64 text, encoding raw `content` if that was given.
    pub fn content_base64(&self) -> Zeroizing<String> {
        match (&self.content_base64, &self.content) {
            (Some(encoded), _) => Zeroizing::new(encoded.clone()),
            (None, Some(raw)) => Zeroizing::new(codec::encode(raw.as_bytes())),
            (None, None) => Zeroizing::new(String::new()),
        }
    }

    fn validate(&self, name: &str) -> Result<()> {
        if self.public_key_base64.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "public_key_base64",
                reason: format!("empty value for item '{}'", name),
            }
            .into());
        }

        match (&self.content_base64, &self.content) {
            (Some(_), Some(_)) => Err(ConfigError::InvalidValue {
                field: "content",
                reason: format!(
                    "item '{}' sets both content and content_base64; choose one",
                    name
                ),
            }
            .into()),
            (None, None) => Err(ConfigError::InvalidValue {
                field: "content_base64",
                reason: format!(
                    "item '{}' sets neither content nor content_base64",
                    name
                ),
            }
            .into()),
            _ => Ok(()),
        }
    }
}

impl std::fmt::Debug for ItemConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemConfig")
            .field("public_key_base64", &self.public_key_base64)
            .field("content", &constants::REDACTED)
            .finish()
    }
}

impl Config {
    /// Create a new empty configuration with current version
    pub fn new() -> Self {
        Self {
            saltseal: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                key_policy: KeyPolicy::default(),
                fingerprint: FingerprintAlgorithm::default(),
            },
            items: BTreeMap::new(),
        }
    }

    /// Load configuration from `path`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized(path.display().to_string()).into());
        }
        let contents = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        let config = Self::parse(&contents)?;

        debug!(items = config.items.len(), "config loaded");
        Ok(config)
    }

    /// Parse and validate configuration text.
    pub fn parse(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to `path`, with an example item in a comment.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self, path: &Path) -> Result<()> {
        debug!(path = %path.display(), "saving config");

        let mut contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        if self.items.is_empty() {
            contents.push_str(TEMPLATE_COMMENT);
        }
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Encryptor for the configured key policy and fingerprint algorithm.
    pub fn encryptor(&self) -> Encryptor {
        Encryptor::new(self.saltseal.key_policy, self.saltseal.fingerprint)
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is present and looks like semver
    /// - Item names are valid table keys
    /// - Each item has a public key and exactly one content field
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` or `ValidationError` on the first failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.saltseal.version.is_empty() {
            return Err(ConfigError::MissingField { field: "version" }.into());
        }

        let version_parts: Vec<&str> = self.saltseal.version.split('.').collect();
        if version_parts.len() < 2 {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: format!("not a valid semver: {}", self.saltseal.version),
            }
            .into());
        }

        for (name, item) in &self.items {
            validation::validate_name(name)?;
            item.validate(name)?;
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
