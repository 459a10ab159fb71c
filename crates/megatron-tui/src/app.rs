use megatron_core::action::ActionRegistry;
use megatron_core::config::keymap::Keymap;
use megatron_core::config::settings::Config;
use megatron_core::config::theme::Theme;
use megatron_core::event::Command;
use megatron_core::launch::LaunchRequest;
use megatron_core::nav::navigator::Navigator;
use megatron_core::nav::preview::Preview;

/// Top-level application state.
///
/// Owns the [`Navigator`] and the [`Preview`] projected from it. Every
/// transition consumes the App and returns a new one; the preview is
/// recomputed whenever the navigator changes.
#[derive(Debug, Clone)]
pub struct App {
    navigator: Navigator,
    preview: Preview,
    help_visible: bool,
    should_quit: bool,
    status_message: Option<String>,
    keymap: Keymap,
    theme: Theme,
    action_registry: ActionRegistry,
}

impl App {
    /// Creates an App browsing `navigator`, styled and bound per `config`.
    pub fn new(navigator: Navigator, config: &Config) -> Self {
        let preview = Preview::project(&navigator);
        Self {
            navigator,
            preview,
            help_visible: false,
            should_quit: false,
            status_message: None,
            keymap: config.keymap(),
            theme: config.theme.clone(),
            action_registry: ActionRegistry::new(),
        }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn status_message(&self) -> Option<&str> {
        self.status_message.as_deref()
    }

    pub fn keymap(&self) -> &Keymap {
        &self.keymap
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn action_registry(&self) -> &ActionRegistry {
        &self.action_registry
    }

    /// Applies a navigation command.
    ///
    /// Returns the launch request produced by [`Command::Activate`] on a
    /// video; the caller is responsible for running it. Any status message
    /// from a previous action is cleared.
    pub fn with_command(self, command: Command) -> (Self, Option<LaunchRequest>) {
        let (navigator, request) = self.navigator.apply(command);
        tracing::debug!(
            ?command,
            depth = navigator.depth(),
            selected = navigator.selected_index(),
            "navigation"
        );
        let preview = Preview::project(&navigator);
        let app = Self {
            navigator,
            preview,
            status_message: None,
            ..self
        };
        (app, request)
    }

    /// Keeps the selection visible in a left pane of `rows` rows.
    pub fn with_viewport_rows(self, rows: usize) -> Self {
        Self {
            navigator: self.navigator.with_viewport_rows(rows),
            ..self
        }
    }

    pub fn with_help(self, visible: bool) -> Self {
        Self {
            help_visible: visible,
            ..self
        }
    }

    /// Mark the app for quitting.
    pub fn with_quit(self) -> Self {
        Self {
            should_quit: true,
            ..self
        }
    }

    /// Set a status message.
    pub fn with_status(self, msg: String) -> Self {
        Self {
            status_message: Some(msg),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use megatron_core::fs::tree::FileTree;
    use std::collections::HashMap;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    fn setup_app() -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("Action/Extras")).unwrap();
        fs::write(tmp.path().join("Action/Heat.mkv"), "xx").unwrap();
        fs::write(tmp.path().join("Alien.mp4"), "xxx").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        let tree = FileTree::build(tmp.path()).unwrap();
        let navigator = Navigator::new(Rc::new(tree)).unwrap();
        let app = App::new(navigator, &Config::default());
        (tmp, app)
    }

    fn names(items: &[megatron_core::nav::preview::PreviewItem]) -> Vec<&str> {
        items.iter().map(|i| i.name.as_str()).collect()
    }

    // --- App creation ---

    #[test]
    fn app_new_initial_flags() {
        let (_tmp, app) = setup_app();
        assert!(!app.should_quit());
        assert!(!app.help_visible());
        assert!(app.status_message().is_none());
    }

    #[test]
    fn app_new_projects_preview() {
        let (_tmp, app) = setup_app();
        assert_eq!(
            names(&app.preview().left),
            vec!["Action", "Alien.mp4", "notes.txt"]
        );
        assert_eq!(names(&app.preview().right), vec!["Extras", "Heat.mkv"]);
        assert_eq!(app.preview().right_title, "Action");
    }

    #[test]
    fn app_new_uses_config_keymap() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("a.mp4"), "x").unwrap();
        let tree = FileTree::build(tmp.path()).unwrap();
        let navigator = Navigator::new(Rc::new(tree)).unwrap();
        let mut config = Config::default();
        config.keys = HashMap::from([("n".to_string(), "cursor_down".to_string())]);

        let app = App::new(navigator, &config);

        assert_eq!(
            app.keymap().action_for_key("n"),
            Some(megatron_core::action::Action::CursorDown)
        );
    }

    // --- Navigation ---

    #[test]
    fn with_command_moves_and_reprojects() {
        let (_tmp, app) = setup_app();
        let (app, request) = app.with_command(Command::CursorDown);

        assert!(request.is_none());
        assert_eq!(app.navigator().selected_index(), 1);
        assert!(app.preview().right.is_empty());
        assert_eq!(app.preview().right_title, "");
    }

    #[test]
    fn with_command_open_then_close_round_trip() {
        let (_tmp, app) = setup_app();
        let (app, _) = app.with_command(Command::Open);
        assert_eq!(names(&app.preview().left), vec!["Extras", "Heat.mkv"]);

        let (app, _) = app.with_command(Command::Close);
        assert!(app.navigator().is_at_root());
        assert_eq!(app.navigator().selected_index(), 0);
        assert_eq!(app.preview().right_title, "Action");
    }

    #[test]
    fn with_command_activate_video_returns_request() {
        let (tmp, app) = setup_app();
        let (app, _) = app.with_command(Command::CursorDown);
        let (_app, request) = app.with_command(Command::Activate);

        assert_eq!(request.unwrap().path, tmp.path().join("Alien.mp4"));
    }

    #[test]
    fn with_command_activate_non_video_is_silent() {
        let (_tmp, app) = setup_app();
        let (app, _) = app.with_command(Command::CursorDown);
        let (app, _) = app.with_command(Command::CursorDown);
        let (app, request) = app.with_command(Command::Activate);

        assert!(request.is_none());
        assert_eq!(app.navigator().selected_index(), 2);
    }

    #[test]
    fn with_command_clears_status() {
        let (_tmp, app) = setup_app();
        let app = app.with_status("player failed".to_string());
        let (app, _) = app.with_command(Command::CursorDown);
        assert!(app.status_message().is_none());
    }

    #[test]
    fn with_viewport_rows_scrolls_to_selection() {
        let (_tmp, app) = setup_app();
        let (app, _) = app.with_command(Command::CursorDown);
        let (app, _) = app.with_command(Command::CursorDown);

        let app = app.with_viewport_rows(2);
        assert_eq!(app.navigator().viewport_origin(), 1);
    }

    // --- Flags ---

    #[test]
    fn with_help_toggles_visibility() {
        let (_tmp, app) = setup_app();
        let app = app.with_help(true);
        assert!(app.help_visible());
        let app = app.with_help(false);
        assert!(!app.help_visible());
    }

    #[test]
    fn with_quit_sets_should_quit() {
        let (_tmp, app) = setup_app();
        let app = app.with_quit();
        assert!(app.should_quit());
    }

    #[test]
    fn with_status_sets_message() {
        let (_tmp, app) = setup_app();
        let app = app.with_status("hello".to_string());
        assert_eq!(app.status_message(), Some("hello"));
        // Only a navigation command clears it.
        let app = app.with_help(true).with_help(false).with_viewport_rows(5);
        assert_eq!(app.status_message(), Some("hello"));
    }
}
