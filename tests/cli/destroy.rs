//! Tests for `saltseal destroy` command.

use crate::support::*;

#[test]
fn test_destroy_one() {
    let t = Test::with_items(&[("a", "1"), ("b", "2")]);
    assert_success(&t.apply());

    let output = t.destroy(Some("a"));
    assert_success(&output);
    assert_stdout_contains(&output, "1 item destroyed");
    assert_stderr_contains(&output, "still declared");

    let state = t.state_contents();
    assert!(!state.contains("[items.a]"));
    assert!(state.contains("[items.b]"));
}

#[test]
fn test_destroy_all() {
    let t = Test::with_items(&[("a", "1"), ("b", "2")]);
    assert_success(&t.apply());

    let output = t.destroy(None);
    assert_success(&output);
    assert_stdout_contains(&output, "2 items destroyed");

    let output = t.cmd().arg("show").output().unwrap();
    assert_stdout_contains(&output, "no items in state");
}

#[test]
fn test_destroy_then_apply_recreates() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    let id = t.id_of("token");

    assert_success(&t.destroy(Some("token")));
    let output = t.apply();
    assert_success(&output);
    assert_stdout_contains(&output, "+ token  create");
    assert_ne!(t.id_of("token"), id);
}

#[test]
fn test_destroy_unknown() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());

    let output = t.destroy(Some("nope"));
    assert_failure(&output);
    assert_stderr_contains(&output, "item not found in state");
}

#[test]
fn test_destroy_without_config() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());
    std::fs::remove_file(t.config_path()).unwrap();

    let output = t.destroy(Some("token"));
    assert_success(&output);
    assert!(!t.state_contents().contains("[items.token]"));
}

#[test]
fn test_destroy_all_on_empty_state() {
    let t = Test::with_items(&[("token", "abc")]);

    let output = t.destroy(None);
    assert_success(&output);
    assert_stdout_contains(&output, "no items in state");
    assert!(!t.state_path().exists());
}
