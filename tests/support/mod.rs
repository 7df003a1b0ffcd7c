//! Test support utilities for saltseal integration tests.
//!
//! Provides reusable test environment setup and helper commands.

#![allow(dead_code)]

pub mod assertions;
pub mod fixtures;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with an isolated temp directory.
///
/// Child processes use `.current_dir()` so tests can safely run in
/// parallel; no process-global state is mutated.
pub struct Test {
    /// Temporary directory for the test project
    pub dir: TempDir,
}

impl Test {
    /// Create a new empty test environment.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        Self { dir }
    }

    /// Create a test environment with a skeleton config.
    pub fn init() -> Self {
        let t = Self::new();
        let output = t.init_cmd();
        assert!(
            output.status.success(),
            "Failed to initialize: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// Create a test environment whose config declares `items`
    /// as `(name, raw content)` pairs for [`PUBLIC_KEY`].
    pub fn with_items(items: &[(&str, &str)]) -> Self {
        let t = Self::new();
        t.write_config(items);
        t
    }

    /// Overwrite the config with `items` as `(name, raw content)` pairs.
    pub fn write_config(&self, items: &[(&str, &str)]) {
        let mut text = String::from("[saltseal]\nversion = \"0.1.0\"\n");
        for (name, content) in items {
            text.push_str(&format!(
                "\n[items.{}]\npublic_key_base64 = \"{}\"\ncontent = \"{}\"\n",
                name, PUBLIC_KEY, content
            ));
        }
        std::fs::write(self.config_path(), text).expect("failed to write config");
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join(".saltseal.toml")
    }

    pub fn state_path(&self) -> PathBuf {
        self.dir.path().join(".saltseal.state.toml")
    }

    pub fn state_contents(&self) -> String {
        std::fs::read_to_string(self.state_path()).expect("failed to read state")
    }
}
