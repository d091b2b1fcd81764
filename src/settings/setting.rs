//! Setting - Persisted Value With Its Default

use crate::constants::{BOLD_SCALE_KEY, CHAT_FONT_FAMILY_KEY, CHAT_FONT_SIZE_KEY};
use std::fmt;

/// The font settings the cache watches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SettingKey {
    ChatFontFamily,
    ChatFontSize,
    BoldScale,
}

impl SettingKey {
    pub const ALL: [SettingKey; 3] = [
        SettingKey::ChatFontFamily,
        SettingKey::ChatFontSize,
        SettingKey::BoldScale,
    ];

    /// Path under which the setting is stored
    pub fn path(self) -> &'static str {
        match self {
            SettingKey::ChatFontFamily => CHAT_FONT_FAMILY_KEY,
            SettingKey::ChatFontSize => CHAT_FONT_SIZE_KEY,
            SettingKey::BoldScale => BOLD_SCALE_KEY,
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A single value plus the default it falls back to
///
/// Mutation goes through [`FontSettings`](crate::settings::FontSettings) so
/// every change is emitted to subscribers.
#[derive(Debug, Clone)]
pub struct Setting<T> {
    key: SettingKey,
    default: T,
    value: T,
}

impl<T: Clone + PartialEq> Setting<T> {
    /// Create a setting holding its default value
    pub fn new(key: SettingKey, default: T) -> Self {
        let value = default.clone();
        Self::with_value(key, default, value)
    }

    /// Create a setting with a stored value that differs from the default
    pub fn with_value(key: SettingKey, default: T, value: T) -> Self {
        Self {
            key,
            default,
            value,
        }
    }

    pub fn key(&self) -> SettingKey {
        self.key
    }

    pub fn path(&self) -> &'static str {
        self.key.path()
    }

    /// Current value
    pub fn get(&self) -> T {
        self.value.clone()
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    /// Value used when nothing is stored
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Store `value`, returning whether it differs from the previous one
    pub(crate) fn replace(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        true
    }
}
