//! Input validation for saltseal operations.

use crate::error::{Result, ValidationError};

/// Validate an item name.
///
/// Item names are table keys in the configuration and state files:
/// - Only ASCII letters, digits, underscore, and hyphen
/// - Cannot start with a digit or hyphen
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_name(name: &str) -> Result<()> {
    let Some(first) = name.chars().next() else {
        return Err(ValidationError::EmptyName.into());
    };

    if first.is_ascii_digit() || first == '-' {
        return Err(ValidationError::InvalidName {
            name: name.to_string(),
            reason: "must start with a letter or underscore".to_string(),
        }
        .into());
    }

    for (i, ch) in name.chars().enumerate() {
        if !ch.is_ascii_alphanumeric() && ch != '_' && ch != '-' {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                reason: format!(
                    "invalid character '{}' at position {}. Only letters, digits, '_' and '-' are allowed",
                    ch,
                    i + 1
                ),
            }
            .into());
        }
    }

    Ok(())
}
