//! Assertions over command output.

use std::process::Output;

/// Captured stream of a finished command.
#[derive(Clone, Copy)]
enum Stream {
    Out,
    Err,
}

fn text(output: &Output, stream: Stream) -> String {
    let bytes = match stream {
        Stream::Out => &output.stdout,
        Stream::Err => &output.stderr,
    };
    String::from_utf8_lossy(bytes).into_owned()
}

fn expect_in(output: &Output, stream: Stream, needle: &str, present: bool) {
    let haystack = text(output, stream);
    let label = match stream {
        Stream::Out => "stdout",
        Stream::Err => "stderr",
    };
    assert_eq!(
        haystack.contains(needle),
        present,
        "{} {} '{}':\n{}",
        label,
        if present { "missing" } else { "unexpectedly contains" },
        needle,
        haystack
    );
}

/// Exit status was zero; prints stderr otherwise.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "saltseal exited with {}:\n{}",
        output.status,
        text(output, Stream::Err)
    );
}

/// Exit status was non-zero.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "saltseal succeeded unexpectedly:\n{}",
        text(output, Stream::Out)
    );
}

pub fn stdout(output: &Output) -> String {
    text(output, Stream::Out)
}

pub fn stderr(output: &Output) -> String {
    text(output, Stream::Err)
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    expect_in(output, Stream::Out, expected, true);
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    expect_in(output, Stream::Err, expected, true);
}

pub fn assert_stdout_excludes(output: &Output, excluded: &str) {
    expect_in(output, Stream::Out, excluded, false);
}

/// Stdout parsed as a JSON document (`--json` output).
pub fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout)
        .unwrap_or_else(|e| panic!("stdout is not JSON ({}):\n{}", e, stdout(output)))
}
