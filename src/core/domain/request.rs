//! Encryption request type.
//!
//! The decoded inputs of one computation: a normalized 32-byte public key
//! and the plaintext bytes.

use zeroize::Zeroizing;

use crate::core::codec::{self, Field};
use crate::core::key::{KeyPolicy, PublicKey};
use crate::error::Result;

/// Decoded input for one seal computation.
///
/// Equality is structural over the normalized key and the plaintext bytes;
/// this is what reconciliation compares. The plaintext is wiped on drop and
/// never shown by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct EncryptionRequest {
    public_key: PublicKey,
    plaintext: Zeroizing<Vec<u8>>,
}

impl EncryptionRequest {
    pub fn new(public_key: PublicKey, plaintext: impl Into<Vec<u8>>) -> Self {
        Self {
            public_key,
            plaintext: Zeroizing::new(plaintext.into()),
        }
    }

    /// Decode both base64 inputs.
    ///
    /// The content is decoded before the key so a malformed content field is
    /// reported even when the key is also bad.
    ///
    /// # Errors
    ///
    /// Returns `CodecError` naming the malformed field, or `KeyError` when
    /// the key length is rejected by `policy`.
    pub fn decode(
        public_key_base64: &str,
        content_base64: &str,
        policy: KeyPolicy,
    ) -> Result<Self> {
        let plaintext = Zeroizing::new(codec::decode(Field::Content, content_base64)?);
        let public_key = PublicKey::decode(public_key_base64, policy)?;
        Ok(Self {
            public_key,
            plaintext,
        })
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn plaintext(&self) -> &[u8] {
        &self.plaintext
    }

    /// Canonical base64 text of the plaintext.
    ///
    /// Equal to the content text the caller supplied, since decoding only
    /// accepts canonical input.
    pub fn content_base64(&self) -> Zeroizing<String> {
        Zeroizing::new(codec::encode(&self.plaintext))
    }
}

impl std::fmt::Debug for EncryptionRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EncryptionRequest")
            .field("public_key", &self.public_key)
            .field("plaintext_len", &self.plaintext.len())
            .finish()
    }
}
