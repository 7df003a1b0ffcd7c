//! Schema command.

use crate::cli::output;
use crate::core::schema::{Role, ATTRIBUTES};
use crate::error::Result;

/// Print the attribute table.
pub fn execute(json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(ATTRIBUTES)?);
        return Ok(());
    }

    output::header("encrypted item");
    output::rule();
    for attr in ATTRIBUTES {
        let mut flags = vec![match attr.role {
            Role::Required => "required",
            Role::Computed => "computed",
        }];
        if attr.sensitive {
            flags.push("sensitive");
        }
        output::kv(
            &format!("{:<24}", attr.name),
            format!("{} ({})", attr.description, flags.join(", ")),
        );
    }
    Ok(())
}
