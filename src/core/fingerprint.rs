//! Fingerprints over encoded text.
//!
//! A fingerprint is a change-detection and identity tag, not a security
//! boundary. It is always computed over the base64 text, never over raw
//! bytes, and rendered as lowercase hex.

use serde::{Deserialize, Serialize};
use sha1::Sha1;
use sha2::{Digest, Sha256};

/// Digest used for fingerprints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintAlgorithm {
    /// 160-bit SHA-1, 40 hex characters.
    #[default]
    Sha1,
    /// 256-bit SHA-256, 64 hex characters.
    Sha256,
}

impl FingerprintAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Sha1 => "sha1",
            Self::Sha256 => "sha256",
        }
    }

    /// Length of a rendered fingerprint in hex characters.
    pub fn hex_len(&self) -> usize {
        match self {
            Self::Sha1 => 40,
            Self::Sha256 => 64,
        }
    }

    /// Digest `text` and render it as lowercase hex.
    pub fn fingerprint(&self, text: &str) -> String {
        match self {
            Self::Sha1 => hex::encode(Sha1::digest(text.as_bytes())),
            Self::Sha256 => hex::encode(Sha256::digest(text.as_bytes())),
        }
    }
}

impl std::fmt::Display for FingerprintAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Fingerprint `text` with the default algorithm.
pub fn fingerprint(text: &str) -> String {
    FingerprintAlgorithm::default().fingerprint(text)
}
