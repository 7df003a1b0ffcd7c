//! Apply command.

use crate::cli::plan::symbol;
use crate::cli::{output, Paths};
use crate::core::project::Project;
use crate::error::Result;

/// Reconcile declared items and print a summary.
pub fn execute(paths: &Paths, json: bool) -> Result<()> {
    let mut project = Project::open(&paths.config, &paths.state)?;
    let summary = project.apply()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    for change in &summary.changes {
        output::change(symbol(change.action), &change.name, change.action.name());
    }

    let line = format!(
        "{} created, {} replaced, {} unchanged, {} destroyed",
        summary.created, summary.replaced, summary.unchanged, summary.destroyed
    );
    if summary.changed() {
        output::success(&line);
    } else {
        output::success(&format!("no changes ({})", line));
    }
    Ok(())
}
