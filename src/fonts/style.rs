//! FontStyle - Logical Font Roles

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Purpose a font is used for, independent of its concrete size and weight
///
/// The chat roles form the contiguous range `ChatSmall..=ChatVeryLarge`; they
/// follow the user's chat font settings. The remaining roles are fixed UI fonts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum FontStyle {
    Tiny,
    ChatSmall,
    ChatMediumSmall,
    ChatMedium,
    ChatMediumBold,
    ChatMediumItalic,
    ChatLarge,
    ChatVeryLarge,
    UiMedium,
    UiMediumBold,
    UiTabs,
}

impl FontStyle {
    /// Number of roles
    pub const COUNT: usize = 11;

    /// Every role in index order
    pub const ALL: [FontStyle; Self::COUNT] = [
        FontStyle::Tiny,
        FontStyle::ChatSmall,
        FontStyle::ChatMediumSmall,
        FontStyle::ChatMedium,
        FontStyle::ChatMediumBold,
        FontStyle::ChatMediumItalic,
        FontStyle::ChatLarge,
        FontStyle::ChatVeryLarge,
        FontStyle::UiMedium,
        FontStyle::UiMediumBold,
        FontStyle::UiTabs,
    ];

    /// First chat role
    pub const CHAT_START: FontStyle = FontStyle::ChatSmall;

    /// Last chat role
    pub const CHAT_END: FontStyle = FontStyle::ChatVeryLarge;

    /// Position of the role in [`FontStyle::ALL`]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Role at `index`
    ///
    /// # Panics
    /// If `index` is not below [`FontStyle::COUNT`]. An out-of-range role is a
    /// programming error, never a value to recover from.
    #[track_caller]
    pub fn from_index(index: usize) -> Self {
        assert!(
            index < Self::COUNT,
            "font style index {index} out of range (0..{})",
            Self::COUNT
        );
        Self::ALL[index]
    }

    /// Role at `index`, or `None` when out of range
    pub fn try_from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Whether the role follows the chat font settings
    pub fn is_chat(self) -> bool {
        self >= Self::CHAT_START && self <= Self::CHAT_END
    }

    /// Stable kebab-case name
    pub fn name(self) -> &'static str {
        match self {
            FontStyle::Tiny => "tiny",
            FontStyle::ChatSmall => "chat-small",
            FontStyle::ChatMediumSmall => "chat-medium-small",
            FontStyle::ChatMedium => "chat-medium",
            FontStyle::ChatMediumBold => "chat-medium-bold",
            FontStyle::ChatMediumItalic => "chat-medium-italic",
            FontStyle::ChatLarge => "chat-large",
            FontStyle::ChatVeryLarge => "chat-very-large",
            FontStyle::UiMedium => "ui-medium",
            FontStyle::UiMediumBold => "ui-medium-bold",
            FontStyle::UiTabs => "ui-tabs",
        }
    }
}

impl fmt::Display for FontStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FontStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|style| style.name() == s)
            .ok_or_else(|| Error::UnknownStyle {
                name: s.to_string(),
            })
    }
}
