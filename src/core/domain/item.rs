//! Item type.
//!
//! A declared encrypted item: the last request it was given and the last
//! result computed for it. Its identity is the result fingerprint.

use crate::core::codec::{self, Field};
use crate::core::fingerprint::FingerprintAlgorithm;
use crate::core::schema;
use crate::error::{Result, StateError};

use super::{EncryptionRequest, EncryptionResult};

/// A request together with the result computed from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    request: EncryptionRequest,
    result: EncryptionResult,
    algorithm: FingerprintAlgorithm,
}

impl Item {
    pub(crate) fn new(
        request: EncryptionRequest,
        result: EncryptionResult,
        algorithm: FingerprintAlgorithm,
    ) -> Self {
        Self {
            request,
            result,
            algorithm,
        }
    }

    /// Rebuild an item from stored text values.
    ///
    /// Both fingerprints are re-derived from the stored ciphertext and
    /// content and must match the stored ones.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` for a malformed ciphertext and
    /// `StateError::Mismatch` for the first fingerprint that disagrees.
    pub fn restore(
        request: EncryptionRequest,
        ciphertext_base64: &str,
        content_checksum: &str,
        id: &str,
        algorithm: FingerprintAlgorithm,
    ) -> Result<Self> {
        let ciphertext = codec::decode(Field::EncryptedValue, ciphertext_base64)?;
        let result = EncryptionResult::derive(ciphertext, &request.content_base64(), algorithm);

        if result.content_fingerprint() != content_checksum {
            return Err(StateError::Mismatch {
                field: schema::CONTENT_CHECKSUM,
                derived_from: schema::CONTENT_BASE64,
            }
            .into());
        }
        if result.result_fingerprint() != id {
            return Err(StateError::Mismatch {
                field: schema::ID,
                derived_from: schema::ENCRYPTED_VALUE_BASE64,
            }
            .into());
        }

        Ok(Self::new(request, result, algorithm))
    }

    /// Identity: fingerprint of the encoded ciphertext.
    pub fn id(&self) -> &str {
        self.result.result_fingerprint()
    }

    pub fn request(&self) -> &EncryptionRequest {
        &self.request
    }

    pub fn result(&self) -> &EncryptionResult {
        &self.result
    }

    /// Algorithm the fingerprints were computed with.
    pub fn algorithm(&self) -> FingerprintAlgorithm {
        self.algorithm
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}
