//! Key binding configuration.
//!
//! Key bindings map key names (e.g. `"j"`, `"?"`) to [`Action`] values. The
//! default bindings follow vim conventions. The `[keys]` table of the config
//! file uses string action identifiers (e.g. `"cursor_down"`) which are
//! resolved via [`ActionRegistry::find_by_id`] and layered over the defaults.

use std::collections::HashMap;

use crate::action::{Action, ActionRegistry};

/// Complete set of character key bindings.
///
/// Arrow keys, Enter and Ctrl+C are fixed in the frontend and not part of
/// the keymap.
#[derive(Debug, Clone)]
pub struct Keymap {
    bindings: HashMap<String, Action>,
    /// Reverse map: Action → list of key strings (for help display).
    reverse: HashMap<Action, Vec<String>>,
}

impl Default for Keymap {
    fn default() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert("j".to_string(), Action::CursorDown);
        bindings.insert("k".to_string(), Action::CursorUp);
        bindings.insert("l".to_string(), Action::Open);
        bindings.insert("h".to_string(), Action::Close);
        bindings.insert("/".to_string(), Action::Search);
        bindings.insert("?".to_string(), Action::Help);
        bindings.insert("q".to_string(), Action::Quit);

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }
}

/// Builds the reverse mapping from Action → Vec<key string>.
fn build_reverse(bindings: &HashMap<String, Action>) -> HashMap<Action, Vec<String>> {
    let mut reverse: HashMap<Action, Vec<String>> = HashMap::new();
    for (key, action) in bindings {
        reverse.entry(*action).or_default().push(key.clone());
    }
    // Sort keys for deterministic display
    for keys in reverse.values_mut() {
        keys.sort();
    }
    reverse
}

impl Keymap {
    /// Returns the defaults with `overrides` (key → action id) applied on top.
    ///
    /// Unknown action identifiers are logged and ignored.
    pub fn with_overrides(overrides: &HashMap<String, String>) -> Self {
        let registry = ActionRegistry::new();
        let mut bindings = Self::default().bindings;

        for (key, action_id) in overrides {
            match registry.find_by_id(action_id) {
                Some(action) => {
                    bindings.insert(key.clone(), action);
                }
                None => tracing::warn!(key = %key, action = %action_id, "ignoring unknown action"),
            }
        }

        let reverse = build_reverse(&bindings);
        Self { bindings, reverse }
    }

    /// Returns the action mapped to `key`, or `None` if unbound.
    pub fn action_for_key(&self, key: &str) -> Option<Action> {
        self.bindings.get(key).copied()
    }

    /// Returns the key(s) bound to a given action (for display in help).
    pub fn keys_for_action(&self, action: Action) -> Option<&[String]> {
        self.reverse.get(&action).map(|v| v.as_slice())
    }
}
