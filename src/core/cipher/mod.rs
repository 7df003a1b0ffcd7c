//! Sealing primitives.
//!
//! Provides the anonymous sealing abstraction and its implementation.
//!
//! ## Backends
//!
//! - **sealed box**: Default. libsodium-compatible `crypto_box_seal`
//!   (X25519 + XSalsa20-Poly1305 with an ephemeral sender key).
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Sealer` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use crate::core::key::PublicKey;
use crate::error::Result;

mod sealed_box;

pub use sealed_box::SealedBox;

/// Anonymous public-key sealing.
///
/// Implementations encrypt to a recipient without any sender identity or
/// return channel. Output is expected to differ on every call for the same
/// input.
pub trait Sealer {
    /// Seal `plaintext` for `recipient`.
    ///
    /// # Errors
    ///
    /// Returns `SealError` if the primitive rejects the input or randomness
    /// is unavailable.
    fn seal(&self, plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>>;

    /// Bytes added to the plaintext length by `seal`.
    fn overhead(&self) -> usize;

    /// Backend name for display/logging.
    fn name(&self) -> &'static str;
}

impl<S: Sealer + ?Sized> Sealer for &S {
    fn seal(&self, plaintext: &[u8], recipient: &PublicKey) -> Result<Vec<u8>> {
        (**self).seal(plaintext, recipient)
    }

    fn overhead(&self) -> usize {
        (**self).overhead()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}
