//! Tests for `saltseal schema` command.

use crate::support::*;

#[test]
fn test_schema_table() {
    let t = Test::new();

    let output = t.cmd().arg("schema").output().unwrap();
    assert_success(&output);
    for name in [
        "public_key_base64",
        "content_base64",
        "encrypted_value_base64",
        "content_checksum",
        "id",
    ] {
        assert_stdout_contains(&output, name);
    }
    assert_stdout_contains(&output, "sensitive");
}

#[test]
fn test_schema_json() {
    let t = Test::new();

    let output = t.cmd().args(["schema", "--json"]).output().unwrap();
    assert_success(&output);

    let json = stdout_json(&output);
    let attrs = json.as_array().unwrap();
    assert_eq!(attrs.len(), 5);

    let content = attrs.iter().find(|a| a["name"] == "content_base64").unwrap();
    assert_eq!(content["sensitive"], true);
    let id = attrs.iter().find(|a| a["name"] == "id").unwrap();
    assert_eq!(id["sensitive"], false);
}

#[test]
fn test_completions() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "saltseal");
}
