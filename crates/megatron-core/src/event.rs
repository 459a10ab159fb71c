//! Commands sent from the UI to the navigator.
//!
//! The UI translates key presses into [`Command`]s and feeds them to
//! [`Navigator::apply`](crate::nav::navigator::Navigator::apply). Every
//! command is total: out-of-range requests are no-ops, never errors.

/// A navigation request.
///
/// Commands flow **UI → Core**. The core never creates commands itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the cursor down by one entry.
    CursorDown,
    /// Move the cursor up by one entry.
    CursorUp,
    /// Descend into the selected directory.
    Open,
    /// Ascend to the parent directory, restoring its cursor.
    Close,
    /// Play the selected file if it is a video.
    Activate,
}
