//! Test fixtures and constants.

use crypto_box::SecretKey;
use rand::rngs::OsRng;

/// Recipient public key used throughout the reference example.
pub const PUBLIC_KEY: &str = "qbQa1k8xeoBnKnzenV/QGTsNiCaGdDS0fjBpVuz1RFI=";

/// `base64("the_secret")`.
pub const SECRET_B64: &str = "dGhlX3NlY3JldA==";

/// SHA-1 hex of the text `dGhlX3NlY3JldA==`.
pub const SECRET_B64_SHA1: &str = "5135d3e5fe14d710095f0060f120e2aaf9a4911a";

/// Input that is not valid base64.
pub const MALFORMED: &str = "not base64 !!";

/// A fresh key pair, for opening sealed output in tests.
pub fn keypair() -> (SecretKey, String) {
    let secret = SecretKey::generate(&mut OsRng);
    let public = saltseal::core::codec::encode(secret.public_key().as_bytes());
    (secret, public)
}
