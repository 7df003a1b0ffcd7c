//! Attribute table.
//!
//! Static description of an encrypted item's attributes. The core never
//! reads it; the CLI uses it to label output and redact sensitive values.

use serde::Serialize;

/// Whether an attribute is supplied by the user or computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Required,
    Computed,
}

/// One attribute of an encrypted item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Attribute {
    pub name: &'static str,
    pub role: Role,
    pub sensitive: bool,
    pub description: &'static str,
}

pub const PUBLIC_KEY_BASE64: &str = "public_key_base64";
pub const CONTENT_BASE64: &str = "content_base64";
pub const ENCRYPTED_VALUE_BASE64: &str = "encrypted_value_base64";
pub const CONTENT_CHECKSUM: &str = "content_checksum";
pub const ID: &str = "id";

pub const ATTRIBUTES: &[Attribute] = &[
    Attribute {
        name: PUBLIC_KEY_BASE64,
        role: Role::Required,
        sensitive: false,
        description: "Recipient public key, base64 encoded (32 bytes decoded)",
    },
    Attribute {
        name: CONTENT_BASE64,
        role: Role::Required,
        sensitive: true,
        description: "Base64 encoded plaintext to encrypt",
    },
    Attribute {
        name: ENCRYPTED_VALUE_BASE64,
        role: Role::Computed,
        sensitive: true,
        description: "Base64 encoded sealed box",
    },
    Attribute {
        name: CONTENT_CHECKSUM,
        role: Role::Computed,
        sensitive: false,
        description: "Hex digest of content_base64",
    },
    Attribute {
        name: ID,
        role: Role::Computed,
        sensitive: false,
        description: "Item identifier: hex digest of encrypted_value_base64",
    },
];

/// Look up an attribute by name.
pub fn attribute(name: &str) -> Option<&'static Attribute> {
    ATTRIBUTES.iter().find(|a| a.name == name)
}

/// Whether the named attribute must be redacted in output.
pub fn is_sensitive(name: &str) -> bool {
    attribute(name).is_some_and(|a| a.sensitive)
}
