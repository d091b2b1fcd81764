//! Chat Fonts Library
//!
//! Font resolution for the chat client's rendering layer: logical font roles
//! are resolved to toolkit fonts and metrics, cached per scale, and dropped
//! whenever the font settings change.

pub mod constants;
pub mod context;
pub mod error;
pub mod fonts;
pub mod helpers;
pub mod layout;
pub mod platform;
pub mod settings;
pub mod toolkit;

pub use context::FontContext;
pub use error::{Error, Result};
pub use fonts::{FontCache, FontData, FontStyle, FontsChanged};
pub use layout::WindowManager;
pub use platform::Platform;
pub use settings::{FontSettings, SettingChanged, SettingKey};
