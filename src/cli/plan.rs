//! Plan command.
//!
//! Compares declared items with the state without sealing anything.

use crate::cli::{output, Paths};
use crate::core::project::{Action, Project};
use crate::error::Result;

/// Print the changes apply would make.
pub fn execute(paths: &Paths, json: bool) -> Result<()> {
    let project = Project::open(&paths.config, &paths.state)?;
    let changes = project.plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&changes)?);
        return Ok(());
    }

    if changes.is_empty() {
        output::dimmed("no items declared");
        return Ok(());
    }

    output::header("Plan");
    for change in &changes {
        output::change(symbol(change.action), &change.name, change.action.name());
    }

    let pending = changes
        .iter()
        .filter(|c| c.action != Action::Unchanged)
        .count();
    if pending == 0 {
        output::success("up to date");
    } else {
        output::hint(&format!(
            "{} change{} pending, run: {}",
            pending,
            if pending == 1 { "" } else { "s" },
            output::cmd("saltseal apply")
        ));
    }
    Ok(())
}

/// Symbol shown next to an action.
pub(crate) fn symbol(action: Action) -> &'static str {
    match action {
        Action::Create => "+",
        Action::Replace => "~",
        Action::Destroy => "-",
        Action::Unchanged => "=",
    }
}
