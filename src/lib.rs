//! Saltseal - declarative anonymous sealed-box encryption.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── init          # Write a skeleton .saltseal.toml
//! │   ├── encrypt       # One-shot encryption, no state
//! │   ├── plan          # Show what apply would change
//! │   ├── apply         # Reconcile declared items into state
//! │   ├── show          # Print stored items (redacted)
//! │   ├── destroy       # Remove items from state
//! │   ├── schema        # Print the attribute table
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── codec         # Canonical base64
//!     ├── key           # 32-byte public keys and key policy
//!     ├── cipher/       # Sealer trait and sealed box
//!     ├── fingerprint   # Hex digests over encoded text
//!     ├── domain/       # Request, result, item
//!     ├── encryptor     # decode -> seal -> fingerprint -> encode
//!     ├── reconcile     # Item state machine
//!     ├── schema        # Attribute table
//!     ├── config        # .saltseal.toml
//!     ├── state         # .saltseal.state.toml
//!     └── project       # Config + state + encryptor
//! ```
//!
//! # Example
//!
//! ```no_run
//! use saltseal::core::encrypt;
//!
//! let out = encrypt(
//!     "qbQa1k8xeoBnKnzenV/QGTsNiCaGdDS0fjBpVuz1RFI=",
//!     "dGhlX3NlY3JldA==",
//! )?;
//! println!("{} {}", out.result_fingerprint, out.ciphertext_base64);
//! # Ok::<(), saltseal::error::Error>(())
//! ```

pub mod cli;
pub mod core;
pub mod error;
