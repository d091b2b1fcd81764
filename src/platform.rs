//! Platform - Per-OS Font Defaults

use crate::helpers::{is_macos, is_windows};
use serde::{Deserialize, Serialize};

/// Desktop platform the fonts are resolved for
///
/// Detected once via [`Platform::current`]; tests pass a specific platform to
/// exercise defaults that differ from the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Windows,
    MacOs,
    /// Linux and every other desktop target
    #[default]
    Other,
}

impl Platform {
    /// Platform the crate was compiled for
    pub fn current() -> Self {
        if is_windows() {
            Platform::Windows
        } else if is_macos() {
            Platform::MacOs
        } else {
            Platform::Other
        }
    }

    /// Default chat and UI font family
    pub fn default_font_family(self) -> &'static str {
        match self {
            Platform::Windows => "Segoe UI",
            Platform::MacOs => "Helvetica Neue",
            Platform::Other => "Arial",
        }
    }

    /// Default chat font size in points
    pub fn default_font_size(self) -> u32 {
        match self {
            Platform::Windows => 10,
            Platform::MacOs => 12,
            Platform::Other => 11,
        }
    }

    /// Multiplier applied to the default-family UI sizes
    ///
    /// macOS renders points larger than the other platforms, so UI text is
    /// shrunk there. The caller-supplied scale is never affected.
    pub fn ui_size_multiplier(self) -> f32 {
        match self {
            Platform::MacOs => 0.8,
            Platform::Windows | Platform::Other => 1.0,
        }
    }
}
