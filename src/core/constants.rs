//! Constants used throughout saltseal.
//!
//! Centralizes file names, sizes, and attribute names.

/// Configuration file name (.saltseal.toml).
pub const CONFIG_FILE: &str = ".saltseal.toml";

/// State file name (.saltseal.state.toml).
pub const STATE_FILE: &str = ".saltseal.state.toml";

/// Decoded recipient public key size in bytes.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Bytes a sealed box adds to the plaintext: 32-byte ephemeral public key
/// plus 16-byte Poly1305 tag.
pub const SEAL_OVERHEAD: usize = 48;

/// Marker printed in place of sensitive attribute values.
pub const REDACTED: &str = "(sensitive)";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SALTSEAL_LOG";
