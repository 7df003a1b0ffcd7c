//! Core library components.
//!
//! The sealing pipeline and reconciliation model (`codec`, `key`, `cipher`,
//! `fingerprint`, `domain`, `encryptor`, `reconcile`) are pure and hold no
//! global state. `config`, `state`, and `project` are the file-backed layer
//! the CLI drives them through.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod constants;
pub mod domain;
pub mod encryptor;
pub mod fingerprint;
pub mod key;
pub mod project;
pub mod reconcile;
pub mod schema;
pub mod state;
pub mod validation;

pub use encryptor::{encrypt, Encryptor};
pub use reconcile::{reconcile, ItemState, Reconciliation, Transition};
