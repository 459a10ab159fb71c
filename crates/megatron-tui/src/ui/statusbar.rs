//! Status bar rendering.
//!
//! The status bar occupies a single row at the bottom of the terminal and
//! shows the cursor position, the selected entry with its size, and an
//! optional status message (launch results, errors, hints).

use megatron_core::config::theme::{parse_color, Theme};
use megatron_core::fs::tree::TreeNode;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Data needed to render the status bar.
pub struct StatusBarProps<'a> {
    pub entry_count: usize,
    pub selected_index: usize,
    pub selected_entry: Option<&'a TreeNode>,
    pub status_message: Option<&'a str>,
}

/// Renders the bottom status bar.
pub fn render_statusbar(f: &mut Frame, area: Rect, props: &StatusBarProps<'_>, theme: &Theme) {
    let bg = parse_color(&theme.statusbar.bg);
    let position_fg = parse_color(&theme.statusbar.position_fg);
    let message_fg = parse_color(&theme.statusbar.message_fg);

    let position = if props.entry_count > 0 {
        format!(" {}/{}", props.selected_index + 1, props.entry_count)
    } else {
        " 0/0".to_owned()
    };

    let file_info = props.selected_entry.map(entry_info).unwrap_or_default();

    let status_span = props
        .status_message
        .map(|msg| {
            Span::styled(
                format!("  {msg}"),
                Style::default()
                    .fg(message_fg)
                    .bg(bg)
                    .add_modifier(Modifier::ITALIC),
            )
        })
        .unwrap_or_default();

    let line = Line::from(vec![
        Span::styled(
            position,
            Style::default()
                .fg(position_fg)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(file_info, Style::default().fg(position_fg).bg(bg)),
        status_span,
    ]);

    let bar = Paragraph::new(line).style(Style::default().bg(bg));
    f.render_widget(bar, area);
}

fn entry_info(node: &TreeNode) -> String {
    if node.is_unreadable() {
        format!("  [?] {}", node.name())
    } else if node.is_dir() {
        format!("  [DIR] {} ({})", node.name(), format_size(node.size()))
    } else {
        format!("  {} ({})", node.name(), format_size(node.size()))
    }
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if bytes >= TB {
        format!("{:.1} TB", bytes as f64 / TB as f64)
    } else if bytes >= GB {
        format!("{:.1} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}
