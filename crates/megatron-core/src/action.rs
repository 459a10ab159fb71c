//! User-triggerable actions.
//!
//! Every bindable action is represented by the [`Action`] enum.
//! [`ActionRegistry`] provides the snake-case ids used in the config file and
//! the descriptions shown in the help overlay.

/// Every user-triggerable action in Megatron.
///
/// Variants carry no parameters; context is determined at dispatch time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    CursorDown,
    CursorUp,
    Open,
    Close,
    Confirm,
    Search,
    Help,
    Quit,
}

/// Metadata for a single action.
#[derive(Debug, Clone)]
pub struct ActionDescriptor {
    pub action: Action,
    /// Snake-case identifier used in the `[keys]` config table (e.g. `"cursor_up"`).
    pub id: &'static str,
    /// Short description shown in the help overlay.
    pub description: &'static str,
}

/// Registry of all available actions, in help-display order.
#[derive(Debug, Clone)]
pub struct ActionRegistry {
    descriptors: Vec<ActionDescriptor>,
}

impl ActionRegistry {
    /// Builds the registry containing every known action.
    pub fn new() -> Self {
        let descriptors = vec![
            ActionDescriptor {
                action: Action::CursorDown,
                id: "cursor_down",
                description: "Move down",
            },
            ActionDescriptor {
                action: Action::CursorUp,
                id: "cursor_up",
                description: "Move up",
            },
            ActionDescriptor {
                action: Action::Open,
                id: "open",
                description: "Open directory",
            },
            ActionDescriptor {
                action: Action::Close,
                id: "close",
                description: "Back to parent directory",
            },
            ActionDescriptor {
                action: Action::Confirm,
                id: "confirm",
                description: "Play selected video",
            },
            ActionDescriptor {
                action: Action::Search,
                id: "search",
                description: "Search (not available)",
            },
            ActionDescriptor {
                action: Action::Help,
                id: "help",
                description: "Show this help",
            },
            ActionDescriptor {
                action: Action::Quit,
                id: "quit",
                description: "Quit",
            },
        ];
        Self { descriptors }
    }

    /// Looks up an action by its config identifier.
    pub fn find_by_id(&self, id: &str) -> Option<Action> {
        self.descriptors
            .iter()
            .find(|d| d.id == id)
            .map(|d| d.action)
    }

    /// Returns the descriptor for `action`.
    pub fn descriptor(&self, action: Action) -> Option<&ActionDescriptor> {
        self.descriptors.iter().find(|d| d.action == action)
    }

    pub fn all(&self) -> &[ActionDescriptor] {
        &self.descriptors
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}
