//! Tests for `saltseal encrypt` command.

use crate::support::*;
use saltseal::core::codec::{self, Field};
use saltseal::core::constants::SEAL_OVERHEAD;

#[test]
fn test_encrypt_reference_example() {
    let t = Test::new();

    let output = t.encrypt_json(PUBLIC_KEY, SECRET_B64);
    assert_success(&output);

    let json = stdout_json(&output);
    let sealed = json["encrypted_value_base64"].as_str().unwrap();
    assert_eq!(
        codec::decode(Field::Content, sealed).unwrap().len(),
        10 + SEAL_OVERHEAD
    );
    assert_eq!(json["content_checksum"], SECRET_B64_SHA1);
    assert_eq!(json["id"].as_str().unwrap().len(), 40);
}

#[test]
fn test_encrypt_text_matches_content() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["encrypt", "--public-key", PUBLIC_KEY, "--text", "the_secret", "--json"])
        .output()
        .unwrap();
    assert_success(&output);
    assert_eq!(stdout_json(&output)["content_checksum"], SECRET_B64_SHA1);
}

#[test]
fn test_encrypt_recipient_can_open() {
    let t = Test::new();
    let (secret, public) = keypair();

    let output = t.encrypt_json(&public, SECRET_B64);
    assert_success(&output);

    let json = stdout_json(&output);
    let sealed = codec::decode(Field::Content, json["encrypted_value_base64"].as_str().unwrap())
        .unwrap();
    assert_eq!(secret.unseal(&sealed).unwrap(), b"the_secret");
}

#[test]
fn test_encrypt_is_not_repeatable() {
    let t = Test::new();

    let a = stdout_json(&t.encrypt_json(PUBLIC_KEY, SECRET_B64));
    let b = stdout_json(&t.encrypt_json(PUBLIC_KEY, SECRET_B64));
    assert_ne!(a["encrypted_value_base64"], b["encrypted_value_base64"]);
    assert_eq!(a["content_checksum"], b["content_checksum"]);
}

#[test]
fn test_encrypt_plain_output() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["encrypt", "--public-key", PUBLIC_KEY, "--content", SECRET_B64])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "encrypted_value_base64");
    assert_stdout_contains(&output, SECRET_B64_SHA1);
}

#[test]
fn test_encrypt_does_not_touch_state() {
    let t = Test::new();

    assert_success(&t.encrypt_json(PUBLIC_KEY, SECRET_B64));
    assert!(!t.state_path().exists());
}

#[test]
fn test_encrypt_short_key() {
    let t = Test::new();

    let output = t.encrypt_json("AAEC", SECRET_B64);
    assert_failure(&output);
    assert_stderr_contains(&output, "expected 32 bytes, got 3");

    let output = t
        .cmd()
        .args(["encrypt", "--public-key", "AAEC", "--content", SECRET_B64, "--lenient"])
        .output()
        .unwrap();
    assert_success(&output);
}

#[test]
fn test_encrypt_malformed_content() {
    let t = Test::new();

    let output = t.encrypt_json(PUBLIC_KEY, MALFORMED);
    assert_failure(&output);
    assert_stderr_contains(&output, "content_base64");
}

#[test]
fn test_encrypt_requires_content() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["encrypt", "--public-key", PUBLIC_KEY])
        .output()
        .unwrap();
    assert_failure(&output);
}

#[test]
fn test_encrypt_content_conflicts_with_text() {
    let t = Test::new();

    let output = t
        .cmd()
        .args([
            "encrypt",
            "--public-key",
            PUBLIC_KEY,
            "--content",
            SECRET_B64,
            "--text",
            "the_secret",
        ])
        .output()
        .unwrap();
    assert_failure(&output);
}
