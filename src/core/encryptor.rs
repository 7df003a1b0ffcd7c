//! Encryption pipeline.
//!
//! `decode -> seal -> fingerprint x2 -> encode`, as one synchronous unit of
//! work with no I/O and no shared mutable state.

use tracing::debug;

use crate::core::cipher::{SealedBox, Sealer};
use crate::core::domain::{EncryptOutput, EncryptionRequest, EncryptionResult};
use crate::core::fingerprint::FingerprintAlgorithm;
use crate::core::key::KeyPolicy;
use crate::error::{Result, SealError};

/// Computes sealed results under a fixed key policy and fingerprint
/// algorithm.
#[derive(Debug, Clone, Default)]
pub struct Encryptor<S = SealedBox> {
    sealer: S,
    policy: KeyPolicy,
    algorithm: FingerprintAlgorithm,
}

impl Encryptor<SealedBox> {
    pub fn new(policy: KeyPolicy, algorithm: FingerprintAlgorithm) -> Self {
        Self::with_sealer(SealedBox, policy, algorithm)
    }
}

impl<S: Sealer> Encryptor<S> {
    pub fn with_sealer(sealer: S, policy: KeyPolicy, algorithm: FingerprintAlgorithm) -> Self {
        Self {
            sealer,
            policy,
            algorithm,
        }
    }

    pub fn algorithm(&self) -> FingerprintAlgorithm {
        self.algorithm
    }

    /// Decode text inputs into a request under this encryptor's key policy.
    pub fn request(
        &self,
        public_key_base64: &str,
        content_base64: &str,
    ) -> Result<EncryptionRequest> {
        EncryptionRequest::decode(public_key_base64, content_base64, self.policy)
    }

    /// Seal a decoded request and derive both fingerprints.
    ///
    /// # Errors
    ///
    /// Returns `SealError` if the sealer fails, or `SealError::Rejected` if
    /// its output is not exactly plaintext length plus its overhead.
    pub fn compute(&self, request: &EncryptionRequest) -> Result<EncryptionResult> {
        let plaintext = request.plaintext();
        let ciphertext = self.sealer.seal(plaintext, request.public_key())?;
        if ciphertext.len() != plaintext.len() + self.sealer.overhead() {
            return Err(SealError::Rejected.into());
        }

        let result =
            EncryptionResult::derive(ciphertext, &request.content_base64(), self.algorithm);

        debug!(
            sealer = self.sealer.name(),
            algorithm = %self.algorithm,
            plaintext_len = request.plaintext().len(),
            ciphertext_len = result.ciphertext().len(),
            id = %result.result_fingerprint(),
            "computed sealed result"
        );

        Ok(result)
    }

    /// One-shot encryption of base64 inputs to base64 output.
    ///
    /// # Errors
    ///
    /// Returns `CodecError`, `KeyError`, or `SealError` for the failing
    /// step.
    pub fn encrypt(
        &self,
        public_key_base64: &str,
        content_base64: &str,
    ) -> Result<EncryptOutput> {
        let request = self.request(public_key_base64, content_base64)?;
        let result = self.compute(&request)?;
        Ok(EncryptOutput::from(&result))
    }
}

/// Encrypt with the default sealed box, strict key policy, and SHA-1
/// fingerprints.
pub fn encrypt(public_key_base64: &str, content_base64: &str) -> Result<EncryptOutput> {
    Encryptor::<SealedBox>::default().encrypt(public_key_base64, content_base64)
}
