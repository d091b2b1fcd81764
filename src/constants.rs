//! Font Constants
//!
//! Centralized defaults and setting keys shared by the settings layer and the cache.

/// Setting key for the chat font family
pub const CHAT_FONT_FAMILY_KEY: &str = "/appearance/currentFontFamily";

/// Setting key for the chat font size
pub const CHAT_FONT_SIZE_KEY: &str = "/appearance/currentFontSize";

/// Setting key for the bold chat font weight
pub const BOLD_SCALE_KEY: &str = "/appearance/boldScale";

/// Default boldness on the legacy 0-100 weight scale
pub const DEFAULT_BOLD_SCALE: i32 = 63;

/// Family used by the `Tiny` UI role regardless of platform
pub const MONOSPACE_FONT_FAMILY: &str = "Monospace";

/// Point size of the `Tiny` UI role
pub const TINY_FONT_SIZE: f32 = 8.0;

/// Point size of the regular UI roles before the platform multiplier
pub const UI_FONT_SIZE: f32 = 9.0;

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "chat-fonts.toml";
