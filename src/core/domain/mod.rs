//! Domain types.

mod item;
mod request;
mod result;

pub use item::Item;
pub use request::EncryptionRequest;
pub use result::{EncryptOutput, EncryptionResult};
