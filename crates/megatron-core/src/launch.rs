//! Video detection and the external player.
//!
//! The navigator only decides *whether* the selection is playable and
//! produces a [`LaunchRequest`]. Starting the player is the job of a
//! [`Launcher`], which the frontend owns.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use crate::error::{CoreError, CoreResult};

/// Extensions treated as playable video, compared case-sensitively.
pub const VIDEO_EXTENSIONS: [&str; 6] = ["mp4", "mkv", "avi", "mov", "flv", "wmv"];

/// Returns `true` if the file name ends in `.` plus one of [`VIDEO_EXTENSIONS`].
///
/// The suffix after the last dot counts even when it is the whole name, so
/// a bare `.mp4` is playable.
pub fn has_video_extension(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.rsplit_once('.'))
        .is_some_and(|(_, ext)| VIDEO_EXTENSIONS.contains(&ext))
}

/// Request to play the file at `path`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub path: PathBuf,
}

/// Starts an external program on a file.
pub trait Launcher {
    /// Starts playback of `path` and returns without waiting for it.
    fn launch(&self, path: &Path) -> CoreResult<()>;
}

/// Launches a media player process, fire-and-forget.
///
/// The child's stdio is detached so it cannot draw over the TUI, and the
/// process is never waited on. On Unix a player that exits stays a zombie
/// until Megatron itself exits and the child is reparented to init.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLauncher {
    command: String,
    args: Vec<String>,
}

impl PlayerLauncher {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    pub fn command(&self) -> &str {
        &self.command
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for PlayerLauncher {
    fn default() -> Self {
        Self::new("vlc", vec!["--fullscreen".to_string()])
    }
}

impl Launcher for PlayerLauncher {
    fn launch(&self, path: &Path) -> CoreResult<()> {
        let child = Command::new(&self.command)
            .args(&self.args)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| CoreError::Launch {
                command: self.command.clone(),
                source,
            })?;

        tracing::info!(pid = child.id(), command = %self.command, path = %path.display(), "player started");
        Ok(())
    }
}
