//! Fonts - Logical Font Roles and Their Resolution
//!
//! Maps a [`FontStyle`] and a scale factor to a concrete toolkit font, caching
//! the result until one of the watched settings changes.

mod cache;
mod resolve;
mod style;
mod weight;

pub use cache::*;
pub use resolve::*;
pub use style::*;
pub use weight::*;
