use megatron_core::action::{Action, ActionRegistry};
use megatron_core::config::keymap::Keymap;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::app::App;
use crate::ui::panel::{render_pane, PaneCursor};
use crate::ui::popup::render_popup;
use crate::ui::statusbar::{render_statusbar, StatusBarProps};
use crate::ui::title::{display_path, render_title};

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub title: Rect,
    pub left: Rect,
    pub right: Rect,
    pub statusbar: Rect,
}

/// Splits the screen into title bar, two equal panes and status bar.
pub fn layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(vertical[1]);

    AppLayout {
        title: vertical[0],
        left: panes[0],
        right: panes[1],
        statusbar: vertical[2],
    }
}

/// Number of list rows visible inside the bordered left pane.
pub fn left_pane_rows(area: Rect) -> usize {
    usize::from(layout(area).left.height.saturating_sub(2))
}

/// Main render function. Composes the full UI layout each frame.
pub fn render(f: &mut Frame, app: &App) {
    let theme = app.theme();
    let nav = app.navigator();
    let preview = app.preview();
    let areas = layout(f.area());

    let current_path = nav.current_node().path();
    render_title(f, areas.title, current_path, theme);

    render_pane(
        f,
        areas.left,
        &display_path(current_path),
        &preview.left,
        PaneCursor {
            selected: Some(nav.selected_index()),
            offset: nav.viewport_origin(),
        },
        theme,
    );
    render_pane(
        f,
        areas.right,
        &preview.right_title,
        &preview.right,
        PaneCursor::default(),
        theme,
    );

    let status_props = StatusBarProps {
        entry_count: preview.left.len(),
        selected_index: nav.selected_index(),
        selected_entry: nav.selected_node(),
        status_message: app.status_message(),
    };
    render_statusbar(f, areas.statusbar, &status_props, theme);

    if app.help_visible() {
        let lines = help_lines(app.action_registry(), app.keymap());
        render_popup(f, "Help", &lines, theme);
    }
}

/// Builds the help overlay text from the registry and the active keymap.
fn help_lines(registry: &ActionRegistry, keymap: &Keymap) -> Vec<String> {
    let mut lines: Vec<String> = registry
        .all()
        .iter()
        .map(|desc| {
            let mut keys: Vec<String> = keymap
                .keys_for_action(desc.action)
                .map(<[String]>::to_vec)
                .unwrap_or_default();
            keys.extend(fixed_keys(desc.action).iter().map(|k| k.to_string()));
            format!("{:<12} {}", keys.join(" "), desc.description)
        })
        .collect();
    lines.push(String::new());
    lines.push("Press any key to close".to_owned());
    lines
}

/// Keys handled directly by the input layer, not the keymap.
fn fixed_keys(action: Action) -> &'static [&'static str] {
    match action {
        Action::CursorDown => &["Down"],
        Action::CursorUp => &["Up"],
        Action::Open => &["Right"],
        Action::Close => &["Left"],
        Action::Confirm => &["Enter"],
        Action::Quit => &["Ctrl+c"],
        Action::Search | Action::Help => &[],
    }
}
