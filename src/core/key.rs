//! Recipient public key handling.
//!
//! Decoded keys must be interpreted as exactly [`PUBLIC_KEY_SIZE`] bytes.
//! [`KeyPolicy::Strict`] rejects anything else. [`KeyPolicy::Lenient`]
//! reproduces fixed-buffer copy semantics: short keys are zero-filled and
//! long keys are truncated. Lenient mode is an opt-in compatibility policy;
//! a zero-filled or truncated key almost never belongs to the intended
//! recipient.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::core::codec::{self, Field};
use crate::core::constants::PUBLIC_KEY_SIZE;
use crate::error::{KeyError, Result};

/// How decoded keys of the wrong length are treated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyPolicy {
    /// Reject any length other than 32 bytes.
    #[default]
    Strict,
    /// Zero-fill short keys, truncate long keys.
    Lenient,
}

impl KeyPolicy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lenient => "lenient",
        }
    }
}

impl std::fmt::Display for KeyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A 32-byte recipient public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Build a key from decoded bytes under `policy`.
    ///
    /// # Errors
    ///
    /// Returns `KeyError::InvalidLength` in strict mode when `bytes` is not
    /// exactly 32 bytes long.
    pub fn from_bytes(bytes: &[u8], policy: KeyPolicy) -> Result<Self> {
        if bytes.len() == PUBLIC_KEY_SIZE {
            let mut key = [0u8; PUBLIC_KEY_SIZE];
            key.copy_from_slice(bytes);
            return Ok(Self(key));
        }

        match policy {
            KeyPolicy::Strict => Err(KeyError::InvalidLength {
                expected: PUBLIC_KEY_SIZE,
                actual: bytes.len(),
            }
            .into()),
            KeyPolicy::Lenient => {
                let mut key = [0u8; PUBLIC_KEY_SIZE];
                let n = bytes.len().min(PUBLIC_KEY_SIZE);
                key[..n].copy_from_slice(&bytes[..n]);
                if bytes.len() < PUBLIC_KEY_SIZE {
                    warn!(
                        actual = bytes.len(),
                        expected = PUBLIC_KEY_SIZE,
                        "public key shorter than expected, zero-filling"
                    );
                } else {
                    warn!(
                        actual = bytes.len(),
                        expected = PUBLIC_KEY_SIZE,
                        "public key longer than expected, truncating"
                    );
                }
                Ok(Self(key))
            }
        }
    }

    /// Decode a base64 key and apply `policy`.
    pub fn decode(text: &str, policy: KeyPolicy) -> Result<Self> {
        let bytes = codec::decode(Field::PublicKey, text)?;
        Self::from_bytes(&bytes, policy)
    }

    pub fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Canonical base64 form of the normalized key.
    pub fn encode(&self) -> String {
        codec::encode(&self.0)
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for PublicKey {
    fn from(bytes: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }
}

impl std::fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("PublicKey").field(&self.encode()).finish()
    }
}
