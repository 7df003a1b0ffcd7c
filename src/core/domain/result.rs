//! Encryption result types.

use serde::Serialize;

use crate::core::codec;
use crate::core::fingerprint::FingerprintAlgorithm;

/// Output of one seal computation.
///
/// Only constructed by [`EncryptionResult::derive`], which computes both
/// fingerprints from the same ciphertext and content text, so the two can
/// never drift from the data they describe.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionResult {
    ciphertext: Vec<u8>,
    content_fingerprint: String,
    result_fingerprint: String,
}

impl EncryptionResult {
    /// Build a result from a ciphertext and the encoded plaintext text.
    pub fn derive(
        ciphertext: Vec<u8>,
        content_base64: &str,
        algorithm: FingerprintAlgorithm,
    ) -> Self {
        let content_fingerprint = algorithm.fingerprint(content_base64);
        let result_fingerprint = algorithm.fingerprint(&codec::encode(&ciphertext));
        Self {
            ciphertext,
            content_fingerprint,
            result_fingerprint,
        }
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn ciphertext_base64(&self) -> String {
        codec::encode(&self.ciphertext)
    }

    /// Digest of the encoded plaintext (`content_checksum`).
    pub fn content_fingerprint(&self) -> &str {
        &self.content_fingerprint
    }

    /// Digest of the encoded ciphertext (`id`).
    pub fn result_fingerprint(&self) -> &str {
        &self.result_fingerprint
    }
}

impl std::fmt::Debug for EncryptionResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionResult")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("content_fingerprint", &self.content_fingerprint)
            .field("result_fingerprint", &self.result_fingerprint)
            .finish()
    }
}

/// Text form of a result, as returned by the one-shot encrypt entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EncryptOutput {
    #[serde(rename = "encrypted_value_base64")]
    pub ciphertext_base64: String,
    #[serde(rename = "content_checksum")]
    pub content_fingerprint: String,
    #[serde(rename = "id")]
    pub result_fingerprint: String,
}

impl From<&EncryptionResult> for EncryptOutput {
    fn from(result: &EncryptionResult) -> Self {
        Self {
            ciphertext_base64: result.ciphertext_base64(),
            content_fingerprint: result.content_fingerprint.clone(),
            result_fingerprint: result.result_fingerprint.clone(),
        }
    }
}
