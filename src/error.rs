//! Error types for chat-fonts
//!
//! Only the settings layer can fail at runtime; cache lookups never return errors.

use snafu::Snafu;
use std::path::PathBuf;

/// Main error type for the crate
#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// The OS reports no home or config directory
    #[snafu(display("Could not determine the configuration directory"))]
    ConfigDirUnavailable,

    #[snafu(display("Failed to create config directory {}: {source}", path.display()))]
    CreateConfigDir { path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to read settings from {}: {source}", path.display()))]
    ReadSettings { path: PathBuf, source: std::io::Error },

    #[snafu(display("Failed to write settings to {}: {source}", path.display()))]
    WriteSettings { path: PathBuf, source: std::io::Error },

    /// The settings file is not valid TOML or has wrongly typed keys
    #[snafu(display("Failed to parse settings file {}: {source}", path.display()))]
    ParseSettings { path: PathBuf, source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },

    /// A font style name that does not match any role
    #[snafu(display("Unknown font style: {name}"))]
    UnknownStyle { name: String },
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;
