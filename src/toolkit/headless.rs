//! Headless Toolkit
//!
//! A toolkit without a windowing system. Fonts are their descriptors and
//! metrics follow fixed typographic ratios, which keeps results deterministic
//! for tests and command-line previews.

use crate::fonts::{OpenTypeScale, WeightScale};
use crate::toolkit::{FontDescriptor, FontToolkit};
use std::cell::Cell;
use std::marker::PhantomData;

/// Pixels per typographic point at 96 DPI
const PIXELS_PER_POINT: f32 = 96.0 / 72.0;

const ASCENT_RATIO: f32 = 0.8;
const DESCENT_RATIO: f32 = 0.2;
const LEADING_RATIO: f32 = 0.15;
const AVERAGE_CHAR_WIDTH_RATIO: f32 = 0.5;

/// Approximate metrics in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeadlessMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub leading: f32,
    pub average_char_width: f32,
}

impl HeadlessMetrics {
    /// Distance between consecutive baselines
    pub fn line_height(&self) -> f32 {
        self.ascent + self.descent + self.leading
    }
}

/// Toolkit that resolves fonts to their own descriptors
///
/// The weight scale is chosen by type parameter, defaulting to OpenType.
#[derive(Debug)]
pub struct HeadlessToolkit<S = OpenTypeScale> {
    fonts_created: Cell<usize>,
    _scale: PhantomData<S>,
}

impl<S> HeadlessToolkit<S> {
    pub fn new() -> Self {
        Self {
            fonts_created: Cell::new(0),
            _scale: PhantomData,
        }
    }

    /// Number of fonts constructed so far
    pub fn fonts_created(&self) -> usize {
        self.fonts_created.get()
    }
}

impl<S> Default for HeadlessToolkit<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WeightScale> FontToolkit for HeadlessToolkit<S> {
    type Weights = S;
    type Font = FontDescriptor<S::Weight>;
    type Metrics = HeadlessMetrics;

    fn create_font(&self, descriptor: &FontDescriptor<S::Weight>) -> Self::Font {
        self.fonts_created.set(self.fonts_created.get() + 1);
        descriptor.clone()
    }

    fn metrics(&self, _font: &Self::Font, size: u32) -> HeadlessMetrics {
        let pixels = size as f32 * PIXELS_PER_POINT;
        HeadlessMetrics {
            ascent: pixels * ASCENT_RATIO,
            descent: pixels * DESCENT_RATIO,
            leading: pixels * LEADING_RATIO,
            average_char_width: pixels * AVERAGE_CHAR_WIDTH_RATIO,
        }
    }
}
