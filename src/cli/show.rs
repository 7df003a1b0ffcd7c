//! Show command.
//!
//! Prints stored items attribute by attribute. Attributes marked sensitive
//! in the schema are replaced with a placeholder unless `--reveal` is given.

use serde_json::{Map, Value};

use crate::cli::{output, Paths};
use crate::core::constants::REDACTED;
use crate::core::schema;
use crate::core::state::{Entry, State};
use crate::error::{Result, StateError};

/// Show one item or all items in the state.
pub fn execute(paths: &Paths, name: Option<&str>, json: bool, reveal: bool) -> Result<()> {
    let state = State::load(&paths.state)?;

    let entries: Vec<(&str, &Entry)> = match name {
        Some(name) => {
            let entry = state
                .get(name)
                .ok_or_else(|| StateError::NotFound(name.to_string()))?;
            vec![(name, entry)]
        }
        None => state.entries().collect(),
    };

    if json {
        let mut doc = Map::new();
        for (name, entry) in &entries {
            let mut obj = Map::new();
            for (attr, value) in attributes(entry, reveal) {
                obj.insert(attr.to_string(), Value::String(value));
            }
            obj.insert(
                "fingerprint".to_string(),
                Value::String(entry.item.algorithm().to_string()),
            );
            obj.insert(
                "updated_at".to_string(),
                Value::String(entry.updated_at.to_rfc3339()),
            );
            doc.insert(name.to_string(), Value::Object(obj));
        }
        println!("{}", serde_json::to_string_pretty(&Value::Object(doc))?);
        return Ok(());
    }

    if entries.is_empty() {
        output::dimmed("no items in state");
        return Ok(());
    }

    for (name, entry) in entries {
        output::section(name);
        for (attr, value) in attributes(entry, reveal) {
            output::kv(attr, value);
        }
        output::kv("fingerprint", entry.item.algorithm());
        output::kv(
            "updated_at",
            entry.updated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        );
    }
    Ok(())
}

/// Schema attributes of `entry` in table order, redacted as needed.
fn attributes(entry: &Entry, reveal: bool) -> Vec<(&'static str, String)> {
    let item = &entry.item;
    schema::ATTRIBUTES
        .iter()
        .map(|attr| {
            let value = if !reveal && schema::is_sensitive(attr.name) {
                REDACTED.to_string()
            } else {
                match attr.name {
                    schema::PUBLIC_KEY_BASE64 => item.request().public_key().encode(),
                    schema::CONTENT_BASE64 => item.request().content_base64().to_string(),
                    schema::ENCRYPTED_VALUE_BASE64 => item.result().ciphertext_base64(),
                    schema::CONTENT_CHECKSUM => item.result().content_fingerprint().to_string(),
                    _ => item.id().to_string(),
                }
            };
            (attr.name, value)
        })
        .collect()
}
