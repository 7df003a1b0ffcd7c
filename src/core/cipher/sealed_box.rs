//! Sealed box backend.
//!
//! Wire format (libsodium `crypto_box_seal`):
//! `ephemeral_pk (32) || xsalsa20poly1305(plaintext) (len + 16)`.
//!
//! Each call draws a fresh 32-byte seed from the operating system through a
//! fallible read, and uses it to key the CSPRNG that generates the
//! ephemeral key for that call only.

use crypto_box::PublicKey as BoxPublicKey;
use rand::rngs::{OsRng, StdRng};
use rand::{RngCore, SeedableRng};
use tracing::trace;
use zeroize::Zeroizing;

use super::Sealer;
use crate::core::constants::SEAL_OVERHEAD;
use crate::core::key::PublicKey;
use crate::error::{Result, SealError};

/// Anonymous sealed box using x25519 keys
#[derive(Debug, Clone, Copy, Default)]
pub struct SealedBox;

impl SealedBox {
    fn ephemeral_rng() -> Result<StdRng> {
        let mut seed = Zeroizing::new([0u8; 32]);
        OsRng
            .try_fill_bytes(&mut seed[..])
            .map_err(|e| SealError::Entropy(e.to_string()))?;
        Ok(StdRng::from_seed(*seed))
    }
}

impl Sealer for SealedBox {
    fn seal(&self, plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let mut rng = Self::ephemeral_rng()?;
        let recipient = BoxPublicKey::from(*recipient.as_bytes());
        let sealed = recipient
            .seal(&mut rng, plaintext)
            .map_err(|_| SealError::Rejected)?;

        trace!(ciphertext_len = sealed.len(), "sealed");
        Ok(sealed)
    }

    fn overhead(&self) -> usize {
        SEAL_OVERHEAD
    }

    fn name(&self) -> &'static str {
        "sealed-box"
    }
}
