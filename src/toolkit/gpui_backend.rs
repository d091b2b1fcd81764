//! GPUI Toolkit
//!
//! Resolves fonts through GPUI's text system. GPUI uses OpenType weights, so
//! the bold chat weight is snapped to the closest named weight.

use crate::fonts::OpenTypeScale;
use crate::toolkit::{FontDescriptor, FontToolkit};
use gpui::{App, Font, FontId, FontWeight, Pixels, TextSystem, font, px};
use std::fmt;
use std::sync::Arc;

/// A GPUI font together with the size it was resolved at
///
/// [`Font`] describes a face only, so the size travels alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct GpuiFont {
    pub font: Font,
    pub size: Pixels,
}

/// Metrics reported by GPUI's text system for one font and size
#[derive(Debug, Clone, Copy)]
pub struct GpuiFontMetrics {
    pub font_id: FontId,
    pub font_size: Pixels,
    pub ascent: Pixels,
    pub descent: Pixels,
    /// Advance of the `m` glyph; the font size when the glyph is missing
    pub em_width: Pixels,
}

impl GpuiFontMetrics {
    pub fn line_height(&self) -> Pixels {
        self.ascent + self.descent.abs()
    }
}

/// Toolkit backed by a GPUI [`TextSystem`]
#[derive(Clone)]
pub struct GpuiToolkit {
    text_system: Arc<TextSystem>,
}

impl GpuiToolkit {
    pub fn new(text_system: Arc<TextSystem>) -> Self {
        Self { text_system }
    }

    /// Toolkit sharing the application's text system
    pub fn from_app(cx: &App) -> Self {
        Self::new(cx.text_system().clone())
    }
}

impl fmt::Debug for GpuiToolkit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GpuiToolkit").finish_non_exhaustive()
    }
}

impl FontToolkit for GpuiToolkit {
    type Weights = OpenTypeScale;
    type Font = GpuiFont;
    type Metrics = GpuiFontMetrics;

    fn create_font(&self, descriptor: &FontDescriptor<FontWeight>) -> GpuiFont {
        let mut resolved = font(descriptor.family.clone());
        resolved.weight = descriptor.weight;
        resolved.style = if descriptor.italic {
            gpui::FontStyle::Italic
        } else {
            gpui::FontStyle::Normal
        };

        GpuiFont {
            font: resolved,
            size: px(descriptor.size as f32),
        }
    }

    fn metrics(&self, font: &GpuiFont, size: u32) -> GpuiFontMetrics {
        let font_id = self.text_system.resolve_font(&font.font);
        let font_size = px(size as f32);

        GpuiFontMetrics {
            font_id,
            font_size,
            ascent: self.text_system.ascent(font_id, font_size),
            descent: self.text_system.descent(font_id, font_size),
            em_width: self
                .text_system
                .em_width(font_id, font_size)
                .unwrap_or(font_size),
        }
    }
}
