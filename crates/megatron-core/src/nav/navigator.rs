//! The navigation state machine.
//!
//! A [`Navigator`] tracks which directory populates the left pane, which of
//! its children is selected, the left pane's scroll position, and a stack of
//! [`Frame`]s so that ascending restores the exact cursor the user left.

use std::rc::Rc;

use crate::error::{CoreError, CoreResult};
use crate::event::Command;
use crate::fs::tree::{FileTree, NodeId, TreeNode};
use crate::launch::{has_video_extension, LaunchRequest};
use crate::nav::history::{Frame, NavigationStack};

/// Cursor over an immutable [`FileTree`].
///
/// Immutable: all state transitions consume `self` and return a new
/// `Navigator`. The selected node is always derived from
/// `current.children[selected_index]`, so it can never drift out of sync.
#[derive(Debug, Clone)]
pub struct Navigator {
    tree: Rc<FileTree>,
    current: NodeId,
    selected_index: usize,
    viewport_origin: usize,
    history: NavigationStack,
}

impl Navigator {
    /// Starts at the tree root with the first child selected.
    ///
    /// # Errors
    ///
    /// [`CoreError::EmptyDirectory`] if the root has no children; an empty
    /// root has nothing to select and must be rejected before browsing.
    pub fn new(tree: Rc<FileTree>) -> CoreResult<Self> {
        let root = tree.node(tree.root());
        if !root.has_children() {
            return Err(CoreError::EmptyDirectory(root.path().to_path_buf()));
        }
        Ok(Self {
            current: tree.root(),
            tree,
            selected_index: 0,
            viewport_origin: 0,
            history: NavigationStack::new(),
        })
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    /// The directory whose children fill the left pane.
    pub fn current(&self) -> NodeId {
        self.current
    }

    pub fn current_node(&self) -> &TreeNode {
        self.tree.node(self.current)
    }

    /// The highlighted child, or `None` if the current directory is empty.
    pub fn selected(&self) -> Option<NodeId> {
        self.tree.child(self.current, self.selected_index)
    }

    pub fn selected_node(&self) -> Option<&TreeNode> {
        self.selected().map(|id| self.tree.node(id))
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    /// First visible row of the left pane.
    pub fn viewport_origin(&self) -> usize {
        self.viewport_origin
    }

    pub fn history(&self) -> &NavigationStack {
        &self.history
    }

    /// How many levels below the root the current directory is.
    pub fn depth(&self) -> usize {
        self.history.len()
    }

    pub fn is_at_root(&self) -> bool {
        self.current == self.tree.root()
    }

    fn child_count(&self) -> usize {
        self.current_node().children().len()
    }

    /// Moves the selection down by one. No-op at the last entry.
    pub fn move_down(self) -> Self {
        if self.selected_index + 1 >= self.child_count() {
            return self;
        }
        Self {
            selected_index: self.selected_index + 1,
            ..self
        }
    }

    /// Moves the selection up by one. No-op at the first entry.
    pub fn move_up(self) -> Self {
        if self.selected_index == 0 {
            return self;
        }
        Self {
            selected_index: self.selected_index - 1,
            ..self
        }
    }

    /// Descends into the selected node.
    ///
    /// No-op when the selection is a file or an empty directory. Otherwise
    /// the current cursor is saved and the new level starts at the top.
    pub fn open(self) -> Self {
        let Some(selected) = self.selected() else {
            return self;
        };
        if !self.tree.node(selected).has_children() {
            return self;
        }

        let history = self.history.push(Frame {
            selected_index: self.selected_index,
            viewport_origin: self.viewport_origin,
        });
        tracing::debug!(path = %self.tree.node(selected).path().display(), depth = history.len(), "open");

        Self {
            current: selected,
            selected_index: 0,
            viewport_origin: 0,
            history,
            ..self
        }
    }

    /// Ascends to the parent, restoring the cursor saved by [`open`](Self::open).
    ///
    /// No-op at the root. Every non-root level was entered through `open`,
    /// so being below the root implies a saved frame.
    pub fn close(self) -> Self {
        let Some(parent) = self.current_node().parent() else {
            return self;
        };
        debug_assert!(
            !self.history.is_empty(),
            "below the root without a saved frame"
        );

        let frame = *self.history.top();
        let history = self.history.pop();
        tracing::debug!(path = %self.tree.node(parent).path().display(), depth = history.len(), "close");

        Self {
            current: parent,
            selected_index: frame.selected_index,
            viewport_origin: frame.viewport_origin,
            history,
            ..self
        }
    }

    /// Returns a launch request when the selection is a playable video.
    ///
    /// `None` when nothing is selected, the selection is not a regular file,
    /// or its extension is not a known video extension. Never changes state.
    pub fn activate(&self) -> Option<LaunchRequest> {
        let node = self.selected_node()?;
        if !node.is_file() || !has_video_extension(node.path()) {
            return None;
        }
        Some(LaunchRequest {
            path: node.path().to_path_buf(),
        })
    }

    /// Applies a [`Command`], returning the new state and any launch request.
    pub fn apply(self, command: Command) -> (Self, Option<LaunchRequest>) {
        match command {
            Command::CursorDown => (self.move_down(), None),
            Command::CursorUp => (self.move_up(), None),
            Command::Open => (self.open(), None),
            Command::Close => (self.close(), None),
            Command::Activate => {
                let request = self.activate();
                (self, request)
            }
        }
    }

    /// Scrolls the viewport so the selection is visible in `rows` rows.
    pub fn with_viewport_rows(self, rows: usize) -> Self {
        Self {
            viewport_origin: follow_cursor(self.selected_index, self.viewport_origin, rows),
            ..self
        }
    }
}

/// Returns the viewport origin that keeps `selected` inside
/// `origin..origin + rows`, moving as little as possible.
///
/// For single-step cursor moves this is a one-row scroll. `rows == 0`
/// leaves the origin unchanged.
pub fn follow_cursor(selected: usize, origin: usize, rows: usize) -> usize {
    if rows == 0 {
        origin
    } else if selected >= origin + rows {
        selected + 1 - rows
    } else if selected < origin {
        selected
    } else {
        origin
    }
}
