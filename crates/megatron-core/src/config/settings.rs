//! Application configuration loaded from a TOML file.
//!
//! The file lives at `~/.config/megatron/config.toml` (see
//! [`default_config_path`]). Every table and field is optional.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::keymap::Keymap;
use crate::config::theme::Theme;
use crate::error::{CoreError, CoreResult};
use crate::fs::tree::{ensure_directory, BuildOptions};
use crate::launch::PlayerLauncher;

/// Top-level application configuration.
///
/// All fields have sensible defaults so Megatron works with an empty file.
/// Call [`Config::load`] to read from a TOML path.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub player: PlayerConfig,
    /// Key → action id overrides, layered over the default keymap.
    #[serde(default)]
    pub keys: HashMap<String, String>,
    #[serde(default)]
    pub theme: Theme,
}

impl Config {
    /// Loads configuration from a TOML file at `path`.
    ///
    /// # Errors
    ///
    /// - [`CoreError::NotFound`] if the file does not exist.
    /// - [`CoreError::PermissionDenied`] if the file is not readable.
    /// - [`CoreError::ConfigParse`] if the TOML is malformed.
    pub fn load(path: &Path) -> CoreResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| CoreError::from_io(path, e))?;
        toml::from_str(&content).map_err(|e| CoreError::ConfigParse(e.to_string()))
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save(&self, path: &Path) -> CoreResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| CoreError::ConfigParse(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Returns the configured browse root after checking it is a directory.
    ///
    /// `config_path` is only used in the error message when no root is set.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingRootDir`] if `general.root_dir` is unset or blank.
    /// - [`CoreError::NotFound`] / [`CoreError::NotADirectory`] if it does
    ///   not point at a directory.
    pub fn root_dir(&self, config_path: &Path) -> CoreResult<PathBuf> {
        let root = self
            .general
            .root_dir
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .ok_or_else(|| CoreError::MissingRootDir(config_path.to_path_buf()))?;
        ensure_directory(&root)?;
        Ok(root)
    }

    pub fn build_options(&self) -> BuildOptions {
        BuildOptions {
            skip_unreadable: self.general.skip_unreadable,
        }
    }

    pub fn launcher(&self) -> PlayerLauncher {
        PlayerLauncher::new(self.player.command.clone(), self.player.args.clone())
    }

    pub fn keymap(&self) -> Keymap {
        Keymap::with_overrides(&self.keys)
    }
}

/// General browsing preferences.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Directory opened when no `-d` argument is given.
    #[serde(default)]
    pub root_dir: Option<String>,
    /// Keep unreadable entries as placeholders instead of refusing to start.
    #[serde(default)]
    pub skip_unreadable: bool,
}

/// External player invocation: `command args... <file>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    #[serde(default = "default_player_command")]
    pub command: String,
    #[serde(default = "default_player_args")]
    pub args: Vec<String>,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            command: default_player_command(),
            args: default_player_args(),
        }
    }
}

fn default_player_command() -> String {
    "vlc".to_string()
}

fn default_player_args() -> Vec<String> {
    vec!["--fullscreen".to_string()]
}

/// Returns `~/.config/megatron/config.toml`, or `None` if `HOME` is unset.
pub fn default_config_path() -> Option<PathBuf> {
    std::env::var_os("HOME").map(|home| {
        PathBuf::from(home)
            .join(".config")
            .join("megatron")
            .join("config.toml")
    })
}
