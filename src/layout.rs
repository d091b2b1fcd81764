//! Layout Generation
//!
//! The window manager keeps its own layout caches keyed by a generation number.
//! The font cache bumps that generation when text metrics change underneath it.

use std::cell::Cell;

/// Window manager operations the font cache depends on
pub trait WindowManager {
    /// Invalidate every layout cached by the window manager
    fn bump_generation(&self);
}

/// Plain generation counter
#[derive(Debug, Default)]
pub struct LayoutGeneration {
    generation: Cell<u64>,
}

impl LayoutGeneration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current generation
    pub fn current(&self) -> u64 {
        self.generation.get()
    }
}

impl WindowManager for LayoutGeneration {
    fn bump_generation(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }
}
