//! Encrypt command.
//!
//! One-shot encryption: computes a fresh sealed result every time and
//! never reads or writes state.

use crate::cli::output;
use crate::core::codec;
use crate::core::encryptor::Encryptor;
use crate::core::fingerprint::FingerprintAlgorithm;
use crate::core::key::KeyPolicy;
use crate::core::schema;
use crate::error::Result;
use zeroize::Zeroizing;

/// Encrypt `content` (base64) or `text` (raw) for `public_key`.
pub fn execute(
    public_key: &str,
    content: Option<&str>,
    text: Option<&str>,
    lenient: bool,
    json: bool,
) -> Result<()> {
    let content_base64 = match (content, text) {
        (Some(encoded), _) => Zeroizing::new(encoded.to_string()),
        (None, Some(raw)) => Zeroizing::new(codec::encode(raw.as_bytes())),
        (None, None) => Zeroizing::new(String::new()),
    };

    let policy = if lenient {
        KeyPolicy::Lenient
    } else {
        KeyPolicy::Strict
    };
    let encryptor = Encryptor::new(policy, FingerprintAlgorithm::default());
    let out = encryptor.encrypt(public_key, &content_base64)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    output::kv(schema::ENCRYPTED_VALUE_BASE64, &out.ciphertext_base64);
    output::kv(schema::CONTENT_CHECKSUM, &out.content_fingerprint);
    output::kv(schema::ID, &out.result_fingerprint);
    Ok(())
}
