use std::path::{Path, PathBuf};

use megatron_core::config::theme::{parse_color, Theme};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Renders the one-line title bar: the app name followed by the current path.
/// Example: " Megatron  ~/films/Action"
pub fn render_title(f: &mut Frame, area: Rect, current_dir: &Path, theme: &Theme) {
    let fg = parse_color(&theme.title.fg);
    let path_fg = parse_color(&theme.title.path_fg);

    let line = Line::from(vec![
        Span::styled(
            " Megatron",
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", display_path(current_dir)),
            Style::default().fg(path_fg),
        ),
    ]);

    f.render_widget(Paragraph::new(line), area);
}

/// Formats `path` for display, abbreviating the home directory to `~`.
pub fn display_path(path: &Path) -> String {
    abbreviate_home(path, home_dir().as_deref())
}

fn abbreviate_home(path: &Path, home: Option<&Path>) -> String {
    let stripped = home
        .filter(|h| h.components().count() > 1)
        .and_then(|h| path.strip_prefix(h).ok());

    match stripped {
        Some(rest) if rest.as_os_str().is_empty() => "~".to_string(),
        Some(rest) => megatron_core::nfc_string(&format!("~/{}", rest.display())),
        None => megatron_core::nfc_string(&path.display().to_string()),
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}
