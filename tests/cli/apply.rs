//! Tests for `saltseal apply` command.

use crate::support::*;

#[test]
fn test_apply_creates_items() {
    let t = Test::with_items(&[("token", "abc")]);

    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "+ token  create");
    assert_stdout_contains(&output, "1 created, 0 replaced, 0 unchanged, 0 destroyed");
    assert!(t.state_contents().contains("[items.token]"));
}

#[test]
fn test_apply_twice_keeps_id() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    let id = t.id_of("token");
    let before = t.state_contents();

    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "no changes");
    assert_eq!(t.id_of("token"), id);
    assert_eq!(t.state_contents(), before);
}

#[test]
fn test_apply_replaces_on_content_change() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    let id = t.id_of("token");

    t.write_config(&[("token", "abd")]);
    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "~ token  replace");
    assert_ne!(t.id_of("token"), id);
}

#[test]
fn test_apply_replaces_on_key_change() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    let id = t.id_of("token");

    let (_, public) = keypair();
    let text = format!(
        "[saltseal]\nversion = \"0.1.0\"\n\n[items.token]\npublic_key_base64 = \"{}\"\ncontent = \"abc\"\n",
        public
    );
    std::fs::write(t.config_path(), text).unwrap();

    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "~ token  replace");
    assert_ne!(t.id_of("token"), id);
}

#[test]
fn test_apply_equivalent_encoding_is_unchanged() {
    let t = Test::with_items(&[("token", "the_secret")]);
    assert_success(&t.apply());
    let id = t.id_of("token");

    let text = format!(
        "[saltseal]\nversion = \"0.1.0\"\n\n[items.token]\npublic_key_base64 = \"{}\"\ncontent_base64 = \"{}\"\n",
        PUBLIC_KEY, SECRET_B64
    );
    std::fs::write(t.config_path(), text).unwrap();

    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "no changes");
    assert_eq!(t.id_of("token"), id);
}

#[test]
fn test_apply_drops_undeclared() {
    let t = Test::with_items(&[("token", "abc"), ("old", "xyz")]);
    assert_success(&t.apply());

    t.write_config(&[("token", "abc")]);
    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "- old  destroy");
    assert!(!t.state_contents().contains("[items.old]"));
}

#[test]
fn test_apply_json_summary() {
    let t = Test::with_items(&[("a", "1"), ("b", "2")]);

    let output = t.apply_json();
    assert_success(&output);

    let json = stdout_json(&output);
    assert_eq!(json["created"], 2);
    assert_eq!(json["changes"].as_array().unwrap().len(), 2);
    assert_eq!(json["changes"][0]["id"].as_str().unwrap().len(), 40);
}

#[test]
fn test_apply_failure_keeps_state() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    let before = t.state_contents();

    let text = format!(
        "[saltseal]\nversion = \"0.1.0\"\n\n[items.token]\npublic_key_base64 = \"{}\"\ncontent_base64 = \"{}\"\n",
        PUBLIC_KEY, MALFORMED
    );
    std::fs::write(t.config_path(), text).unwrap();

    let output = t.apply();
    assert_failure(&output);
    assert_stderr_contains(&output, "token");
    assert_eq!(t.state_contents(), before);
}

#[test]
fn test_apply_sha256_config() {
    let t = Test::new();
    let text = format!(
        "[saltseal]\nversion = \"0.1.0\"\nfingerprint = \"sha256\"\n\n[items.token]\npublic_key_base64 = \"{}\"\ncontent = \"abc\"\n",
        PUBLIC_KEY
    );
    std::fs::write(t.config_path(), text).unwrap();

    assert_success(&t.apply());
    assert_eq!(t.id_of("token").len(), 64);
}

#[cfg(unix)]
#[test]
fn test_state_file_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());

    let mode = std::fs::metadata(t.state_path()).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}
