//! Megatron: a two-pane terminal browser for a film collection.
//!
//! This binary parses the command line, builds the directory tree before
//! touching the terminal, runs the main event loop, and restores the
//! terminal on exit or panic.

mod app;
mod cli;
mod input;
mod render;
mod ui;

use std::fs::OpenOptions;
use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use megatron_core::config::settings::{default_config_path, Config};
use megatron_core::fs::tree::{ensure_directory, FileTree};
use megatron_core::launch::{LaunchRequest, Launcher};
use megatron_core::nav::navigator::Navigator;
use megatron_core::CoreError;
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use crate::app::App;
use crate::cli::{parse_args, CliCommand, USAGE};
use crate::input::{handle_key, InputAction};
use crate::render::{left_pane_rows, render};

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Undoes [`setup_terminal`]. Every step runs even if an earlier one fails;
/// the first failure is returned.
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    let raw = disable_raw_mode();
    let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let cursor = terminal.show_cursor();
    raw?;
    screen?;
    cursor?;
    Ok(())
}

/// Merges the event loop result with the terminal teardown result.
///
/// An event loop error is what the user sees; a teardown failure after it
/// only goes to the log.
fn finish(result: anyhow::Result<()>, restored: anyhow::Result<()>) -> anyhow::Result<()> {
    match (result, restored) {
        (Err(e), Err(restore_err)) => {
            tracing::error!("failed to restore terminal: {restore_err:#}");
            Err(e)
        }
        (Ok(()), restored) => restored.context("failed to restore terminal"),
        (result, Ok(())) => result,
    }
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Sends tracing output to `$TMPDIR/megatron.log` so it never draws over the UI.
///
/// Logging is best-effort: if the file cannot be opened, no subscriber is
/// installed.
fn init_tracing() {
    let path = std::env::temp_dir().join("megatron.log");
    let Ok(file) = OpenOptions::new().create(true).append(true).open(&path) else {
        return;
    };
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}

fn main() {
    init_tracing();

    let Some(command) = parse_args(std::env::args().skip(1)) else {
        eprintln!("{USAGE}");
        std::process::exit(1);
    };

    if let Err(e) = run(command) {
        tracing::error!("{e:#}");
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(command: CliCommand) -> anyhow::Result<()> {
    let config_path = default_config_path().context("HOME is not set")?;
    match command {
        CliCommand::EditConfig => edit_config(&config_path),
        CliCommand::Browse(dir) => browse(dir, &config_path),
    }
}

/// Loads the config file, treating a missing file as all defaults.
fn load_config(path: &Path) -> anyhow::Result<Config> {
    match Config::load(path) {
        Ok(config) => Ok(config),
        Err(CoreError::NotFound(_)) => {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Config::default())
        }
        Err(e) => Err(e.into()),
    }
}

/// Builds the tree for `dir` (or the configured root) and runs the browser.
///
/// Every startup failure, including an empty root, is returned before the
/// terminal enters raw mode.
fn browse(dir: Option<PathBuf>, config_path: &Path) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let root = match dir {
        Some(dir) => {
            ensure_directory(&dir)?;
            dir
        }
        None => config.root_dir(config_path)?,
    };

    let tree = FileTree::build_with(&root, config.build_options())?;
    let navigator = Navigator::new(Rc::new(tree))?;
    let app = App::new(navigator, &config);
    let launcher = config.launcher();

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, app, &launcher);
    let restored = restore_terminal(&mut terminal);
    finish(result, restored)
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    mut app: App,
    launcher: &dyn Launcher,
) -> anyhow::Result<()> {
    loop {
        let size = terminal.size()?;
        app = app.with_viewport_rows(left_pane_rows(Rect::new(0, 0, size.width, size.height)));
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            return Ok(());
        }

        // Resize events fall through and trigger a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = handle_key(key, app.help_visible(), app.keymap());
            app = dispatch(app, action, launcher);
        }
    }
}

/// Applies an input action to the app, running any resulting launch.
fn dispatch(app: App, action: InputAction, launcher: &dyn Launcher) -> App {
    match action {
        InputAction::Navigate(command) => match app.with_command(command) {
            (app, Some(request)) => launch(app, &request, launcher),
            (app, None) => app,
        },
        InputAction::ShowHelp => app.with_help(true),
        InputAction::DismissHelp => app.with_help(false),
        InputAction::Search => app.with_status("Search is not available".to_string()),
        InputAction::Quit => app.with_quit(),
        InputAction::None => app,
    }
}

fn launch(app: App, request: &LaunchRequest, launcher: &dyn Launcher) -> App {
    let name = request
        .path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    match launcher.launch(&request.path) {
        Ok(()) => app.with_status(format!("Playing {name}")),
        Err(e) => {
            tracing::error!(path = %request.path.display(), "launch failed: {e}");
            app.with_status(format!("Error: {e}"))
        }
    }
}

/// Opens the config file in `$EDITOR` (or `vi`), writing defaults first if
/// it does not exist yet.
fn edit_config(config_path: &Path) -> anyhow::Result<()> {
    if !config_path.exists() {
        Config::default().save(config_path)?;
        tracing::info!(path = %config_path.display(), "created default config");
    }

    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vi".to_string());
    let status = std::process::Command::new(&editor).arg(config_path).status();

    match status {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => anyhow::bail!("{editor} exited with {s}"),
        Err(e) => anyhow::bail!("failed to launch {editor}: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use megatron_core::error::CoreResult;
    use megatron_core::event::Command;
    use std::cell::RefCell;
    use std::fs;
    use tempfile::TempDir;

    /// Records launched paths; fails when `fail` is set.
    #[derive(Default)]
    struct FakeLauncher {
        launched: RefCell<Vec<PathBuf>>,
        fail: bool,
    }

    impl Launcher for FakeLauncher {
        fn launch(&self, path: &Path) -> CoreResult<()> {
            if self.fail {
                return Err(CoreError::Launch {
                    command: "vlc".to_string(),
                    source: io::Error::new(io::ErrorKind::NotFound, "not installed"),
                });
            }
            self.launched.borrow_mut().push(path.to_path_buf());
            Ok(())
        }
    }

    fn setup_app() -> (TempDir, App) {
        let tmp = TempDir::new().unwrap();
        fs::create_dir(tmp.path().join("Action")).unwrap();
        fs::write(tmp.path().join("Action/Heat.mkv"), "x").unwrap();
        fs::write(tmp.path().join("Alien.mp4"), "x").unwrap();
        fs::write(tmp.path().join("notes.txt"), "x").unwrap();
        let tree = FileTree::build(tmp.path()).unwrap();
        let navigator = Navigator::new(Rc::new(tree)).unwrap();
        (tmp, App::new(navigator, &Config::default()))
    }

    fn down(app: App, launcher: &FakeLauncher) -> App {
        dispatch(app, InputAction::Navigate(Command::CursorDown), launcher)
    }

    #[test]
    fn dispatch_activate_video_launches_player() {
        let (tmp, app) = setup_app();
        let launcher = FakeLauncher::default();

        let app = down(app, &launcher);
        let app = dispatch(app, InputAction::Navigate(Command::Activate), &launcher);

        assert_eq!(*launcher.launched.borrow(), vec![tmp.path().join("Alien.mp4")]);
        assert_eq!(app.status_message(), Some("Playing Alien.mp4"));
        assert_eq!(app.navigator().selected_index(), 1);
    }

    #[test]
    fn dispatch_activate_non_video_does_nothing() {
        let (_tmp, app) = setup_app();
        let launcher = FakeLauncher::default();

        let app = down(down(app, &launcher), &launcher);
        let app = dispatch(app, InputAction::Navigate(Command::Activate), &launcher);

        assert!(launcher.launched.borrow().is_empty());
        assert!(app.status_message().is_none());
    }

    #[test]
    fn dispatch_activate_directory_does_not_open_it() {
        let (_tmp, app) = setup_app();
        let launcher = FakeLauncher::default();

        let app = dispatch(app, InputAction::Navigate(Command::Activate), &launcher);

        assert!(launcher.launched.borrow().is_empty());
        assert!(app.navigator().is_at_root());
    }

    #[test]
    fn dispatch_launch_failure_sets_status_and_keeps_state() {
        let (_tmp, app) = setup_app();
        let launcher = FakeLauncher {
            fail: true,
            ..FakeLauncher::default()
        };

        let app = down(app, &launcher);
        let app = dispatch(app, InputAction::Navigate(Command::Activate), &launcher);

        let status = app.status_message().unwrap();
        assert!(status.starts_with("Error: failed to launch vlc"));
        assert_eq!(app.navigator().selected_index(), 1);
    }

    #[test]
    fn dispatch_help_and_quit() {
        let (_tmp, app) = setup_app();
        let launcher = FakeLauncher::default();

        let app = dispatch(app, InputAction::ShowHelp, &launcher);
        assert!(app.help_visible());
        let app = dispatch(app, InputAction::DismissHelp, &launcher);
        assert!(!app.help_visible());
        let app = dispatch(app, InputAction::Quit, &launcher);
        assert!(app.should_quit());
    }

    #[test]
    fn dispatch_search_reports_unavailable() {
        let (_tmp, app) = setup_app();
        let app = dispatch(app, InputAction::Search, &FakeLauncher::default());
        assert_eq!(app.status_message(), Some("Search is not available"));
    }

    #[test]
    fn load_config_missing_file_uses_defaults() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&tmp.path().join("config.toml")).unwrap();
        assert_eq!(config.player.command, "vlc");
    }

    #[test]
    fn load_config_invalid_file_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        fs::write(&path, "[[[").unwrap();
        assert!(load_config(&path).is_err());
    }

    #[test]
    fn browse_rejects_empty_root_before_terminal_setup() {
        let tmp = TempDir::new().unwrap();
        let root = tmp.path().join("empty");
        fs::create_dir(&root).unwrap();

        let err = browse(Some(root), &tmp.path().join("config.toml")).unwrap_err();
        assert!(err.to_string().contains("directory is empty"));
    }

    #[test]
    fn browse_rejects_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let err = browse(Some(tmp.path().join("nope")), &tmp.path().join("c.toml")).unwrap_err();
        assert!(err.to_string().contains("path not found"));
    }

    #[test]
    fn browse_without_configured_root_is_an_error() {
        let tmp = TempDir::new().unwrap();
        let err = browse(None, &tmp.path().join("config.toml")).unwrap_err();
        assert!(err.to_string().contains("no root directory configured"));
    }

    #[test]
    fn finish_keeps_event_loop_error_over_teardown_error() {
        let result = finish(
            Err(anyhow::anyhow!("event read failed")),
            Err(anyhow::anyhow!("raw mode stuck")),
        );
        assert_eq!(result.unwrap_err().to_string(), "event read failed");
    }

    #[test]
    fn finish_reports_teardown_error_after_clean_exit() {
        let err = finish(Ok(()), Err(anyhow::anyhow!("raw mode stuck"))).unwrap_err();
        assert_eq!(format!("{err:#}"), "failed to restore terminal: raw mode stuck");
    }

    #[test]
    fn finish_passes_through_when_teardown_succeeds() {
        assert!(finish(Ok(()), Ok(())).is_ok());
        let err = finish(Err(anyhow::anyhow!("event read failed")), Ok(())).unwrap_err();
        assert_eq!(err.to_string(), "event read failed");
    }
}
