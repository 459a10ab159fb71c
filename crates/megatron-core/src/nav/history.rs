//! Cursor history used to restore the view when ascending.

/// Saved interaction state for one directory level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Frame {
    /// Index into the directory's children that was selected.
    pub selected_index: usize,
    /// First visible row of the left pane.
    pub viewport_origin: usize,
}

/// Immutable LIFO stack of [`Frame`]s.
///
/// Every mutation returns a **new** `NavigationStack`, following the
/// project-wide immutability convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<Frame>,
}

impl NavigationStack {
    /// Creates an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a new stack with `frame` on top.
    pub fn push(&self, frame: Frame) -> Self {
        let mut frames = self.frames.clone();
        frames.push(frame);
        Self { frames }
    }

    /// Returns a new stack without its top frame. No-op on an empty stack.
    pub fn pop(&self) -> Self {
        let mut frames = self.frames.clone();
        frames.pop();
        Self { frames }
    }

    /// Returns the most recently pushed frame.
    ///
    /// # Panics
    ///
    /// Panics if the stack is empty. Callers check [`is_empty`](Self::is_empty)
    /// first.
    pub fn top(&self) -> &Frame {
        &self.frames[self.frames.len() - 1]
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Number of saved frames, i.e. how many levels below the root we are.
    pub fn len(&self) -> usize {
        self.frames.len()
    }
}
