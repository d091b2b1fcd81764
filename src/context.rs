//! Font Context
//!
//! Everything the rendering layer needs for fonts, built once at startup and
//! passed down by reference instead of being reached through a global.

use crate::error::Result;
use crate::fonts::{FontCache, FontStyle};
use crate::layout::WindowManager;
use crate::platform::Platform;
use crate::settings::FontSettings;
use crate::toolkit::{FontToolkit, GpuiToolkit};
use gpui::{App, AppContext, Entity};
use std::path::Path;
use std::rc::Rc;
use tracing::info;

/// Platform, settings, window manager hook and the font cache watching them
pub struct FontContext<T: FontToolkit> {
    platform: Platform,
    settings: Entity<FontSettings>,
    windows: Rc<dyn WindowManager>,
    fonts: Entity<FontCache<T>>,
}

impl<T: FontToolkit> FontContext<T> {
    /// Create the settings and cache entities and subscribe the cache
    pub fn new(
        toolkit: T,
        platform: Platform,
        settings: FontSettings,
        windows: Rc<dyn WindowManager>,
        cx: &mut App,
    ) -> Self {
        info!(
            platform = ?platform,
            family = %settings.chat_font_family().value(),
            size = settings.chat_font_size().get(),
            "Initializing font cache"
        );

        let settings = cx.new(|_| settings);
        let fonts = cx.new(|cx| {
            let mut fonts = FontCache::new(toolkit, settings.clone(), platform);
            fonts.initialize(windows.clone(), cx);
            fonts
        });

        Self {
            platform,
            settings,
            windows,
            fonts,
        }
    }

    /// Like [`FontContext::new`], with settings read from the settings file
    pub fn load(
        toolkit: T,
        platform: Platform,
        windows: Rc<dyn WindowManager>,
        cx: &mut App,
    ) -> Result<Self> {
        let settings = FontSettings::load(platform)?;
        Ok(Self::new(toolkit, platform, settings, windows, cx))
    }

    // ==================== Getters ====================

    pub fn fonts(&self) -> &Entity<FontCache<T>> {
        &self.fonts
    }

    pub fn settings(&self) -> &Entity<FontSettings> {
        &self.settings
    }

    pub fn windows(&self) -> &Rc<dyn WindowManager> {
        &self.windows
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    // ==================== Lookup ====================

    /// Font for `style` at `scale`, see [`FontCache::get_font`]
    pub fn font(&self, style: FontStyle, scale: f32, cx: &mut App) -> T::Font {
        self.fonts
            .update(cx, |fonts, cx| fonts.get_font(style, scale, cx))
    }

    /// Metrics for `style` at `scale`, see [`FontCache::get_metrics`]
    pub fn metrics(&self, style: FontStyle, scale: f32, cx: &mut App) -> T::Metrics {
        self.fonts
            .update(cx, |fonts, cx| fonts.get_metrics(style, scale, cx))
    }

    // ==================== Persistence ====================

    /// Save the current settings to the settings file
    pub fn persist(&self, cx: &App) -> Result<()> {
        self.settings.read(cx).save()
    }

    /// Save the current settings to `path`
    pub fn persist_to(&self, path: &Path, cx: &App) -> Result<()> {
        self.settings.read(cx).save_to(path)
    }
}

impl FontContext<GpuiToolkit> {
    /// Context resolving fonts through the application's text system
    pub fn for_app(windows: Rc<dyn WindowManager>, cx: &mut App) -> Result<Self> {
        let toolkit = GpuiToolkit::from_app(cx);
        Self::load(toolkit, Platform::current(), windows, cx)
    }
}
