//! Init command.
//!
//! Writes a skeleton configuration file.

use std::path::Path;
use tracing::debug;

use crate::cli::output;
use crate::core::config::Config;
use crate::error::{ConfigError, Result};

/// Create the configuration file at `path`.
pub fn execute(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(ConfigError::AlreadyInitialized(path.display().to_string()).into());
    }

    debug!(path = %path.display(), force, "writing skeleton config");
    Config::new().save(path)?;

    output::success(&format!("created {}", output::path(&path.display().to_string())));
    output::hint(&format!(
        "declare items, then run: {}",
        output::cmd("saltseal apply")
    ));
    Ok(())
}
