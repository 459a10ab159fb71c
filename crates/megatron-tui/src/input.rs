use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use megatron_core::action::Action;
use megatron_core::config::keymap::Keymap;
use megatron_core::event::Command;

/// Actions that can result from a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Dispatch a core Command.
    Navigate(Command),
    ShowHelp,
    /// Close the help overlay.
    DismissHelp,
    /// Search was requested; reported as unavailable.
    Search,
    /// Quit the application.
    Quit,
    /// No action for this key.
    None,
}

/// Maps a key event to an InputAction.
///
/// While the help overlay is visible every key dismisses it. Otherwise
/// character keys are resolved through the `Keymap`; arrow keys, Enter and
/// Ctrl+C are hardcoded.
pub fn handle_key(key: KeyEvent, help_visible: bool, keymap: &Keymap) -> InputAction {
    if help_visible {
        return InputAction::DismissHelp;
    }

    match key.code {
        KeyCode::Down => InputAction::Navigate(Command::CursorDown),
        KeyCode::Up => InputAction::Navigate(Command::CursorUp),
        KeyCode::Right => InputAction::Navigate(Command::Open),
        KeyCode::Left => InputAction::Navigate(Command::Close),
        KeyCode::Enter => InputAction::Navigate(Command::Activate),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => InputAction::Quit,
        // Look up character keys in the keymap
        KeyCode::Char(c) => keymap
            .action_for_key(&c.to_string())
            .map(action_to_input_action)
            .unwrap_or(InputAction::None),
        _ => InputAction::None,
    }
}

/// Converts an `Action` enum variant to the corresponding `InputAction`.
fn action_to_input_action(action: Action) -> InputAction {
    match action {
        Action::CursorDown => InputAction::Navigate(Command::CursorDown),
        Action::CursorUp => InputAction::Navigate(Command::CursorUp),
        Action::Open => InputAction::Navigate(Command::Open),
        Action::Close => InputAction::Navigate(Command::Close),
        Action::Confirm => InputAction::Navigate(Command::Activate),
        Action::Search => InputAction::Search,
        Action::Help => InputAction::ShowHelp,
        Action::Quit => InputAction::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use std::collections::HashMap;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn key_with_mod(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn default_keymap() -> Keymap {
        Keymap::default()
    }

    fn press(code: KeyCode) -> InputAction {
        handle_key(key(code), false, &default_keymap())
    }

    // --- Navigation keys ---

    #[test]
    fn j_and_down_move_cursor_down() {
        assert_eq!(
            press(KeyCode::Char('j')),
            InputAction::Navigate(Command::CursorDown)
        );
        assert_eq!(press(KeyCode::Down), InputAction::Navigate(Command::CursorDown));
    }

    #[test]
    fn k_and_up_move_cursor_up() {
        assert_eq!(
            press(KeyCode::Char('k')),
            InputAction::Navigate(Command::CursorUp)
        );
        assert_eq!(press(KeyCode::Up), InputAction::Navigate(Command::CursorUp));
    }

    #[test]
    fn l_and_right_open() {
        assert_eq!(press(KeyCode::Char('l')), InputAction::Navigate(Command::Open));
        assert_eq!(press(KeyCode::Right), InputAction::Navigate(Command::Open));
    }

    #[test]
    fn h_and_left_close() {
        assert_eq!(press(KeyCode::Char('h')), InputAction::Navigate(Command::Close));
        assert_eq!(press(KeyCode::Left), InputAction::Navigate(Command::Close));
    }

    #[test]
    fn enter_activates() {
        assert_eq!(press(KeyCode::Enter), InputAction::Navigate(Command::Activate));
    }

    // --- Misc keys ---

    #[test]
    fn q_and_ctrl_c_quit() {
        assert_eq!(press(KeyCode::Char('q')), InputAction::Quit);
        let action = handle_key(
            key_with_mod(KeyCode::Char('c'), KeyModifiers::CONTROL),
            false,
            &default_keymap(),
        );
        assert_eq!(action, InputAction::Quit);
    }

    #[test]
    fn plain_c_is_unbound() {
        assert_eq!(press(KeyCode::Char('c')), InputAction::None);
    }

    #[test]
    fn question_mark_shows_help() {
        assert_eq!(press(KeyCode::Char('?')), InputAction::ShowHelp);
    }

    #[test]
    fn slash_requests_search() {
        assert_eq!(press(KeyCode::Char('/')), InputAction::Search);
    }

    #[test]
    fn unbound_keys_do_nothing() {
        assert_eq!(press(KeyCode::Char('z')), InputAction::None);
        assert_eq!(press(KeyCode::Tab), InputAction::None);
        assert_eq!(press(KeyCode::Esc), InputAction::None);
    }

    // --- Help overlay ---

    #[test]
    fn any_key_dismisses_help() {
        let km = default_keymap();
        for code in [KeyCode::Char('q'), KeyCode::Esc, KeyCode::Enter, KeyCode::Char('j')] {
            assert_eq!(handle_key(key(code), true, &km), InputAction::DismissHelp);
        }
    }

    // --- Custom keymap ---

    #[test]
    fn custom_keymap_binding_is_used() {
        let km = Keymap::with_overrides(&HashMap::from([(
            "n".to_string(),
            "cursor_down".to_string(),
        )]));
        assert_eq!(
            handle_key(key(KeyCode::Char('n')), false, &km),
            InputAction::Navigate(Command::CursorDown)
        );
    }

    #[test]
    fn custom_keymap_confirm_binding_activates() {
        let km = Keymap::with_overrides(&HashMap::from([(
            "p".to_string(),
            "confirm".to_string(),
        )]));
        assert_eq!(
            handle_key(key(KeyCode::Char('p')), false, &km),
            InputAction::Navigate(Command::Activate)
        );
    }

    #[test]
    fn arrows_ignore_keymap_overrides() {
        let km = Keymap::with_overrides(&HashMap::from([(
            "j".to_string(),
            "quit".to_string(),
        )]));
        assert_eq!(
            handle_key(key(KeyCode::Down), false, &km),
            InputAction::Navigate(Command::CursorDown)
        );
    }
}
