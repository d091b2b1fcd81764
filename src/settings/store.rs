//! Font Settings Store
//!
//! The three values the font cache watches, their change events and their TOML
//! representation. Live settings are held in a GPUI entity; every setter emits a
//! [`SettingChanged`] event and notifies observers when the value changed.

use crate::constants::{DEFAULT_BOLD_SCALE, SETTINGS_FILE_NAME};
use crate::error::{Error, ParseSettingsSnafu, ReadSettingsSnafu, Result, WriteSettingsSnafu};
use crate::helpers::get_or_create_config_dir;
use crate::platform::Platform;
use crate::settings::{Setting, SettingKey};
use gpui::{App, Context, Entity, EventEmitter, Subscription};
use serde::{Deserialize, Serialize};
use snafu::ResultExt;
use std::fmt;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

// ==================== Persisted Format ====================

/// On-disk settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsFile {
    #[serde(default)]
    pub appearance: AppearanceConfig,
}

/// `[appearance]` table; missing keys fall back to platform defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_font_family: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub current_font_size: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold_scale: Option<i32>,
}

impl AppearanceConfig {
    /// Family to apply, ignoring blank strings
    fn family(&self) -> Option<&str> {
        self.current_font_family
            .as_deref()
            .filter(|family| !family.trim().is_empty())
    }

    fn validate(&self) -> Result<()> {
        if self.current_font_size == Some(0) {
            return Err(Error::Invalid {
                message: "font size must be positive".to_string(),
            });
        }
        Ok(())
    }
}

/// Path of the settings file in the config directory
pub fn settings_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(SETTINGS_FILE_NAME))
}

// ==================== Events ====================

/// Emitted by [`FontSettings`] after one of its values changed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SettingChanged {
    pub key: SettingKey,
}

// ==================== Live Settings ====================

/// Font-related settings shared between the settings UI and the font cache
#[derive(Debug, Clone)]
pub struct FontSettings {
    chat_font_family: Setting<String>,
    chat_font_size: Setting<u32>,
    bold_scale: Setting<i32>,
}

impl EventEmitter<SettingChanged> for FontSettings {}

impl FontSettings {
    /// Settings holding the platform defaults
    pub fn new(platform: Platform) -> Self {
        Self {
            chat_font_family: Setting::new(
                SettingKey::ChatFontFamily,
                platform.default_font_family().to_string(),
            ),
            chat_font_size: Setting::new(SettingKey::ChatFontSize, platform.default_font_size()),
            bold_scale: Setting::new(SettingKey::BoldScale, DEFAULT_BOLD_SCALE),
        }
    }

    /// Settings initialized from a persisted `[appearance]` table
    pub fn from_config(platform: Platform, config: &AppearanceConfig) -> Result<Self> {
        config.validate()?;

        let defaults = Self::new(platform);
        let family = config
            .family()
            .map(str::to_string)
            .unwrap_or_else(|| defaults.chat_font_family.get());
        let size = config
            .current_font_size
            .unwrap_or_else(|| defaults.chat_font_size.get());
        let bold = config.bold_scale.unwrap_or(DEFAULT_BOLD_SCALE);

        Ok(Self {
            chat_font_family: Setting::with_value(
                SettingKey::ChatFontFamily,
                defaults.chat_font_family.get(),
                family,
            ),
            chat_font_size: Setting::with_value(
                SettingKey::ChatFontSize,
                defaults.chat_font_size.get(),
                size,
            ),
            bold_scale: Setting::with_value(SettingKey::BoldScale, DEFAULT_BOLD_SCALE, bold),
        })
    }

    /// Snapshot of the current values in persisted form
    pub fn to_config(&self) -> AppearanceConfig {
        AppearanceConfig {
            current_font_family: Some(self.chat_font_family.get()),
            current_font_size: Some(self.chat_font_size.get()),
            bold_scale: Some(self.bold_scale.get()),
        }
    }

    // ==================== Getters ====================

    /// Family of every chat font
    pub fn chat_font_family(&self) -> &Setting<String> {
        &self.chat_font_family
    }

    /// Base point size of the chat fonts
    pub fn chat_font_size(&self) -> &Setting<u32> {
        &self.chat_font_size
    }

    /// Weight of the bold chat font on the legacy 0-100 scale
    pub fn bold_scale(&self) -> &Setting<i32> {
        &self.bold_scale
    }

    // ==================== Setters ====================

    /// Returns whether the family changed
    pub fn set_chat_font_family(
        &mut self,
        family: impl Into<String>,
        cx: &mut Context<Self>,
    ) -> bool {
        Self::store(&mut self.chat_font_family, family.into(), cx)
    }

    /// Returns whether the size changed
    pub fn set_chat_font_size(&mut self, size: u32, cx: &mut Context<Self>) -> bool {
        Self::store(&mut self.chat_font_size, size, cx)
    }

    /// Returns whether the boldness changed
    pub fn set_bold_scale(&mut self, bold_scale: i32, cx: &mut Context<Self>) -> bool {
        Self::store(&mut self.bold_scale, bold_scale, cx)
    }

    /// Restore every default, emitting one event per value that changed
    pub fn reset(&mut self, cx: &mut Context<Self>) {
        let family = self.chat_font_family.default_value().clone();
        let size = *self.chat_font_size.default_value();
        let bold = *self.bold_scale.default_value();

        self.set_chat_font_family(family, cx);
        self.set_chat_font_size(size, cx);
        self.set_bold_scale(bold, cx);
    }

    /// Apply persisted values to the live settings
    ///
    /// Keys missing from `config` are left untouched.
    pub fn apply(&mut self, config: &AppearanceConfig, cx: &mut Context<Self>) -> Result<()> {
        config.validate()?;

        if let Some(family) = config.family() {
            self.set_chat_font_family(family, cx);
        }
        if let Some(size) = config.current_font_size {
            self.set_chat_font_size(size, cx);
        }
        if let Some(bold) = config.bold_scale {
            self.set_bold_scale(bold, cx);
        }
        Ok(())
    }

    fn store<T>(setting: &mut Setting<T>, value: T, cx: &mut Context<Self>) -> bool
    where
        T: Clone + PartialEq + fmt::Debug,
    {
        if !setting.replace(value) {
            return false;
        }

        debug!(path = setting.path(), value = ?setting.value(), "Setting changed");
        cx.emit(SettingChanged { key: setting.key() });
        cx.notify();
        true
    }

    // ==================== Subscriptions ====================

    /// Run `callback` whenever the setting `key` changes
    ///
    /// With `fire_immediately` the callback also runs once right away.
    pub fn subscribe_setting(
        settings: &Entity<Self>,
        key: SettingKey,
        fire_immediately: bool,
        cx: &mut App,
        mut callback: impl FnMut(Entity<Self>, &mut App) + 'static,
    ) -> Subscription {
        if fire_immediately {
            callback(settings.clone(), cx);
        }

        cx.subscribe(settings, move |settings, event: &SettingChanged, cx| {
            if event.key == key {
                callback(settings, cx);
            }
        })
    }

    // ==================== Persistence ====================

    /// Load settings from the default settings file
    pub fn load(platform: Platform) -> Result<Self> {
        Self::load_from(&settings_path()?, platform)
    }

    /// Save settings to the default settings file
    pub fn save(&self) -> Result<()> {
        self.save_to(&settings_path()?)
    }

    /// Load settings from `path`; a missing or empty file yields defaults
    pub fn load_from(path: &Path, platform: Platform) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "Settings file not found, using defaults");
            return Ok(Self::new(platform));
        }

        info!(path = ?path, "Loading settings file");
        let value = std::fs::read_to_string(path).context(ReadSettingsSnafu { path })?;
        if value.trim().is_empty() {
            return Ok(Self::new(platform));
        }

        let file: SettingsFile = toml::from_str(&value)
            .inspect_err(|e| error!(error = %e, path = ?path, "Failed to parse settings file"))
            .context(ParseSettingsSnafu { path })?;

        Self::from_config(platform, &file.appearance)
    }

    /// Write the current values to `path`
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let file = SettingsFile {
            appearance: self.to_config(),
        };
        let value = toml::to_string(&file)?;
        std::fs::write(path, value).context(WriteSettingsSnafu { path })?;
        info!(path = ?path, "Settings saved");
        Ok(())
    }
}
