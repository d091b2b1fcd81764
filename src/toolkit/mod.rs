//! Toolkit - Font Primitives of the Host GUI Toolkit
//!
//! The cache never builds fonts itself. It hands a [`FontDescriptor`] to a
//! [`FontToolkit`], which owns font construction, fallback and metrics.

mod gpui_backend;
mod headless;

pub use gpui_backend::*;
pub use headless::*;

use crate::fonts::WeightScale;
use gpui::SharedString;
use std::fmt;

/// Weight type used by toolkit `T`
pub type ToolkitWeight<T> = <<T as FontToolkit>::Weights as WeightScale>::Weight;

/// Everything a toolkit needs to construct a font
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor<W> {
    pub family: SharedString,
    /// Size in points
    pub size: u32,
    pub weight: W,
    pub italic: bool,
}

/// Font construction and measurement provided by a GUI toolkit
///
/// Construction never fails: a missing family resolves to whatever the
/// toolkit falls back to.
pub trait FontToolkit: 'static {
    /// Weight representation, fixed per toolkit
    type Weights: WeightScale;
    /// Resolved font handle
    type Font: Clone + fmt::Debug;
    /// Metrics derived from a resolved font
    type Metrics: Clone + fmt::Debug;

    /// Build a font for `descriptor`
    fn create_font(
        &self,
        descriptor: &FontDescriptor<<Self::Weights as WeightScale>::Weight>,
    ) -> Self::Font;

    /// Measure `font` at `size` points
    fn metrics(&self, font: &Self::Font, size: u32) -> Self::Metrics;
}
