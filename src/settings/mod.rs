//! Settings - Persisted Font Settings
//!
//! The watched font settings, the events they emit and their TOML persistence.

mod setting;
mod store;

pub use setting::*;
pub use store::*;
