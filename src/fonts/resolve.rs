//! Font Resolution Rules
//!
//! Turns a role and a scale into a [`FontDescriptor`]. Chat roles scale the
//! user's chat font; UI roles use fixed sizes and the platform's default family.

use crate::constants::{MONOSPACE_FONT_FAMILY, TINY_FONT_SIZE, UI_FONT_SIZE};
use crate::fonts::{FontStyle, WeightScale};
use crate::platform::Platform;
use crate::settings::FontSettings;
use crate::toolkit::FontDescriptor;
use gpui::SharedString;

/// Chat role relative to the chat font settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChatFontSpec<W> {
    /// Multiplier applied to the chat font size
    pub size_scale: f32,
    pub italic: bool,
    pub weight: W,
}

/// Family of a UI role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiFamily {
    Monospace,
    PlatformDefault,
}

/// UI role with a fixed size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiFontSpec<W> {
    /// Size in points, platform multiplier already applied
    pub size: f32,
    pub family: UiFamily,
    pub italic: bool,
    pub weight: W,
}

/// Table entry of a role
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FontSpec<W> {
    Chat(ChatFontSpec<W>),
    Ui(UiFontSpec<W>),
}

/// Table entry for `style`
///
/// The bold chat entry is computed from `boldness` on every call since the
/// setting can change at runtime.
pub fn font_spec<S: WeightScale>(
    style: FontStyle,
    boldness: i32,
    platform: Platform,
) -> FontSpec<S::Weight> {
    let chat = |size_scale, italic, weight| {
        FontSpec::Chat(ChatFontSpec {
            size_scale,
            italic,
            weight,
        })
    };
    let ui = |size, family, weight| {
        FontSpec::Ui(UiFontSpec {
            size,
            family,
            italic: false,
            weight,
        })
    };
    let ui_size = UI_FONT_SIZE * platform.ui_size_multiplier();

    match style {
        FontStyle::ChatSmall => chat(0.6, false, S::NORMAL),
        FontStyle::ChatMediumSmall => chat(0.8, false, S::NORMAL),
        FontStyle::ChatMedium => chat(1.0, false, S::NORMAL),
        FontStyle::ChatMediumBold => chat(1.0, false, S::from_boldness(boldness)),
        FontStyle::ChatMediumItalic => chat(1.0, true, S::NORMAL),
        FontStyle::ChatLarge => chat(1.2, false, S::NORMAL),
        FontStyle::ChatVeryLarge => chat(1.4, false, S::NORMAL),
        FontStyle::Tiny => ui(TINY_FONT_SIZE, UiFamily::Monospace, S::NORMAL),
        FontStyle::UiMedium | FontStyle::UiTabs => {
            ui(ui_size, UiFamily::PlatformDefault, S::NORMAL)
        }
        FontStyle::UiMediumBold => ui(ui_size, UiFamily::PlatformDefault, S::BOLD),
    }
}

/// Descriptor for `style` at `scale` given the current settings
pub fn resolve_font<S: WeightScale>(
    style: FontStyle,
    scale: f32,
    settings: &FontSettings,
    platform: Platform,
) -> FontDescriptor<S::Weight> {
    match font_spec::<S>(style, settings.bold_scale().get(), platform) {
        FontSpec::Chat(spec) => {
            let base = settings.chat_font_size().get() as f32;
            FontDescriptor {
                family: SharedString::from(settings.chat_font_family().get()),
                size: point_size(base * spec.size_scale * scale),
                weight: spec.weight,
                italic: spec.italic,
            }
        }
        FontSpec::Ui(spec) => {
            let family = match spec.family {
                UiFamily::Monospace => MONOSPACE_FONT_FAMILY,
                UiFamily::PlatformDefault => platform.default_font_family(),
            };
            FontDescriptor {
                family: SharedString::new_static(family),
                size: point_size(spec.size * scale),
                weight: spec.weight,
                italic: spec.italic,
            }
        }
    }
}

/// Round to whole points, never below one
fn point_size(size: f32) -> u32 {
    (size.round() as u32).max(1)
}
