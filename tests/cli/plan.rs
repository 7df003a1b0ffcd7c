//! Tests for `saltseal plan` command.

use crate::support::*;

#[test]
fn test_plan_before_apply() {
    let t = Test::with_items(&[("token", "abc")]);

    let output = t.plan();
    assert_success(&output);
    assert_stdout_contains(&output, "+ token  create");
    assert_stderr_contains(&output, "1 change pending");
    assert!(!t.state_path().exists());
}

#[test]
fn test_plan_after_apply() {
    let t = Test::with_items(&[("token", "abc")]);
    assert_success(&t.apply());

    let output = t.plan();
    assert_success(&output);
    assert_stdout_contains(&output, "= token  unchanged");
    assert_stdout_contains(&output, "up to date");
}

#[test]
fn test_plan_json_actions() {
    let t = Test::with_items(&[("kept", "abc"), ("edited", "one"), ("dropped", "x")]);
    assert_success(&t.apply());
    t.write_config(&[("kept", "abc"), ("edited", "two"), ("added", "y")]);

    let output = t.plan_json();
    assert_success(&output);

    let json = stdout_json(&output);
    let action = |name: &str| {
        json.as_array()
            .unwrap()
            .iter()
            .find(|c| c["name"] == name)
            .map(|c| c["action"].as_str().unwrap().to_string())
            .unwrap()
    };
    assert_eq!(action("kept"), "unchanged");
    assert_eq!(action("edited"), "replace");
    assert_eq!(action("added"), "create");
    assert_eq!(action("dropped"), "destroy");
}
