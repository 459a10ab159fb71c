//! Megatron core library: UI-agnostic media browser logic.
//!
//! `megatron-core` provides the directory tree snapshot and the navigation
//! state machine that the terminal frontend (`megatron-tui`) drives. It is
//! intentionally decoupled from any terminal backend.
//!
//! # Modules
//!
//! - [`fs`]: The immutable, arena-backed [`FileTree`] built once at startup.
//! - [`nav`]: The [`Navigator`] state machine, its [`NavigationStack`] and the [`Preview`] projection.
//! - [`launch`]: Video detection and the external player [`Launcher`].
//! - [`config`]: TOML configuration: settings, key bindings, theme.
//! - [`action`]: Bindable user actions.
//! - [`event`]: [`Command`]s sent from the UI to the navigator.
//! - [`error`]: Unified error type ([`CoreError`]) and result alias ([`CoreResult`]).

pub mod action;
pub mod config;
pub mod error;
pub mod event;
pub mod fs;
pub mod launch;
pub mod nav;

pub use action::{Action, ActionDescriptor, ActionRegistry};
pub use config::keymap::Keymap;
pub use config::settings::{default_config_path, Config};
pub use config::theme::{parse_color, Theme};
pub use error::{CoreError, CoreResult};
pub use event::Command;
pub use fs::tree::{ensure_directory, BuildOptions, FileTree, NodeId, TreeNode};
pub use launch::{has_video_extension, LaunchRequest, Launcher, PlayerLauncher};
pub use nav::history::{Frame, NavigationStack};
pub use nav::navigator::{follow_cursor, Navigator};
pub use nav::preview::{Preview, PreviewItem};

/// Normalises a string to NFC (composed) form.
///
/// macOS stores filenames in NFD (decomposed), which splits accented
/// characters into base letter plus combining mark. This re-composes them.
pub fn nfc_string(s: &str) -> String {
    use unicode_normalization::UnicodeNormalization;
    s.nfc().collect()
}
