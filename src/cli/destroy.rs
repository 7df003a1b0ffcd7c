//! Destroy command.
//!
//! Drops items from the state file. Nothing is decrypted or revoked;
//! previously published ciphertext stays valid for its recipient.

use crate::cli::{output, Paths};
use crate::core::config::Config;
use crate::core::project::Project;
use crate::core::state::State;
use crate::error::Result;

/// Remove `name`, or every item, from the state.
pub fn execute(paths: &Paths, name: Option<&str>) -> Result<()> {
    // Destroy only needs the state; fall back to default settings when the
    // configuration is gone.
    let config = if paths.config.exists() {
        Config::load(&paths.config)?
    } else {
        Config::new()
    };
    let state = State::load(&paths.state)?;
    let mut project = Project::new(config, state);

    let removed = project.destroy(name)?;
    if removed.is_empty() {
        output::dimmed("no items in state");
        return Ok(());
    }

    for name in &removed {
        output::change("-", name, "destroy");
    }
    output::success(&format!(
        "{} item{} destroyed",
        removed.len(),
        if removed.len() == 1 { "" } else { "s" }
    ));

    if name.is_some_and(|n| project.config().items.contains_key(n)) {
        output::hint("item is still declared; the next apply will create it again");
    }
    Ok(())
}
