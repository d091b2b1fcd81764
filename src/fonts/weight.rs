//! Font Weights - Boldness Setting to Toolkit Weight
//!
//! The boldness setting is stored on the legacy 0-100 weight scale. Toolkits
//! with OpenType weights (100-900) need it snapped to the closest named weight;
//! toolkits that still use the legacy scale take it unchanged. Each toolkit
//! picks one [`WeightScale`] at build time through its associated type.

use gpui::FontWeight;
use std::fmt;

/// How a toolkit represents font weights
pub trait WeightScale: 'static {
    /// Toolkit weight value
    type Weight: Copy + fmt::Debug + PartialEq + 'static;

    /// Regular text
    const NORMAL: Self::Weight;

    /// Bold UI text
    const BOLD: Self::Weight;

    /// Weight for a boldness setting on the legacy 0-100 scale
    fn from_boldness(boldness: i32) -> Self::Weight;
}

// ==================== OpenType ====================

/// Legacy weight of each named OpenType weight, in ascending legacy order
pub const LEGACY_TO_OPENTYPE: [(i32, FontWeight); 9] = [
    (0, FontWeight::THIN),
    (12, FontWeight::EXTRA_LIGHT),
    (25, FontWeight::LIGHT),
    (50, FontWeight::NORMAL),
    (57, FontWeight::MEDIUM),
    (63, FontWeight::SEMIBOLD),
    (75, FontWeight::BOLD),
    (81, FontWeight::EXTRA_BOLD),
    (87, FontWeight::BLACK),
];

/// Named OpenType weight closest to a legacy weight
///
/// The table is sorted, so the distance to `target` falls and then rises; the
/// scan stops at the first point that is not closer. Ties go to the lighter
/// weight.
pub fn closest_opentype_weight(target: i32) -> FontWeight {
    let mut result = FontWeight::MEDIUM;
    let mut closest = u32::MAX;

    for (legacy, weight) in LEGACY_TO_OPENTYPE {
        let distance = legacy.abs_diff(target);
        if distance < closest {
            result = weight;
            closest = distance;
        } else {
            break;
        }
    }

    result
}

/// OpenType weights, as used by GPUI
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenTypeScale;

impl WeightScale for OpenTypeScale {
    type Weight = FontWeight;

    const NORMAL: FontWeight = FontWeight::NORMAL;
    const BOLD: FontWeight = FontWeight::BOLD;

    fn from_boldness(boldness: i32) -> FontWeight {
        closest_opentype_weight(boldness)
    }
}

// ==================== Legacy ====================

/// Weight on the continuous legacy 0-100 scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LegacyWeight(pub i32);

impl LegacyWeight {
    pub const NORMAL: Self = Self(50);
    pub const BOLD: Self = Self(75);
}

/// Legacy weights; the boldness setting passes through unmapped
#[derive(Debug, Clone, Copy, Default)]
pub struct LegacyScale;

impl WeightScale for LegacyScale {
    type Weight = LegacyWeight;

    const NORMAL: LegacyWeight = LegacyWeight::NORMAL;
    const BOLD: LegacyWeight = LegacyWeight::BOLD;

    fn from_boldness(boldness: i32) -> LegacyWeight {
        LegacyWeight(boldness)
    }
}
