//! File System Utilities
//!
//! Configuration directory lookup and compile-time platform checks.

use crate::error::{ConfigDirUnavailableSnafu, CreateConfigDirSnafu, Result};
use directories::ProjectDirs;
use snafu::{OptionExt, ResultExt};
use std::fs;
use std::path::PathBuf;

/// Get or create the directory holding the settings file
///
/// - **Linux**: `$XDG_CONFIG_HOME/chat-fonts/`
/// - **macOS**: `~/Library/Application Support/org.chatfonts.chat-fonts/`
/// - **Windows**: `%APPDATA%\chatfonts\chat-fonts\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs =
        ProjectDirs::from("org", "chatfonts", "chat-fonts").context(ConfigDirUnavailableSnafu)?;
    let config_dir = project_dirs.config_dir().to_path_buf();

    if !config_dir.exists() {
        fs::create_dir_all(&config_dir).context(CreateConfigDirSnafu {
            path: config_dir.clone(),
        })?;
    }

    Ok(config_dir)
}

pub fn is_windows() -> bool {
    cfg!(target_os = "windows")
}

pub fn is_macos() -> bool {
    cfg!(target_os = "macos")
}
