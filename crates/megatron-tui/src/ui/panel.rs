//! Pane rendering for the two directory listings.
//!
//! Both panes are bordered `List` widgets. The left pane carries the cursor
//! and scrolls with the navigator's viewport origin; the right pane is a
//! read-only listing of the selected directory.

use std::path::Path;

use megatron_core::config::theme::{parse_color, Theme};
use megatron_core::launch::has_video_extension;
use megatron_core::nav::preview::PreviewItem;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph},
    Frame,
};

const EMPTY_PLACEHOLDER: &str = "--Empty--";

/// Cursor position within a pane.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaneCursor {
    pub selected: Option<usize>,
    /// Index of the first visible row.
    pub offset: usize,
}

/// Renders a bordered pane listing `items`.
///
/// Directories are shown in `dir_fg` + bold with a trailing `/`, videos in
/// `video_fg`. The selected row is highlighted and marked with an arrow.
pub fn render_pane(
    f: &mut Frame,
    area: Rect,
    title: &str,
    items: &[PreviewItem],
    cursor: PaneCursor,
    theme: &Theme,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_owned())
        .border_style(Style::default().fg(parse_color(&theme.panel.border_fg)));

    if items.is_empty() {
        let placeholder = Paragraph::new(Line::from(Span::styled(
            format!("  {EMPTY_PLACEHOLDER}"),
            Style::default()
                .fg(parse_color(&theme.panel.empty_fg))
                .add_modifier(Modifier::ITALIC),
        )))
        .block(block);
        f.render_widget(placeholder, area);
        return;
    }

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let display = if item.is_dir {
                format!("{}/", item.name)
            } else {
                item.name.clone()
            };
            ListItem::new(Line::from(Span::styled(display, item_style(item, theme))))
        })
        .collect();

    let list = List::new(list_items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(parse_color(&theme.panel.selected_fg))
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("➤ ")
        .highlight_spacing(HighlightSpacing::Always);

    let mut state = ListState::default()
        .with_offset(cursor.offset)
        .with_selected(cursor.selected.filter(|&i| i < items.len()));

    f.render_stateful_widget(list, area, &mut state);
}

fn item_style(item: &PreviewItem, theme: &Theme) -> Style {
    if item.is_dir {
        Style::default()
            .fg(parse_color(&theme.panel.dir_fg))
            .add_modifier(Modifier::BOLD)
    } else if has_video_extension(Path::new(&item.name)) {
        Style::default().fg(parse_color(&theme.panel.video_fg))
    } else {
        Style::default()
    }
}
