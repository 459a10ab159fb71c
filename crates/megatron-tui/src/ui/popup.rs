use megatron_core::config::theme::{parse_color, Theme};
use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Renders a centered popup sized to fit `lines`, clipped to the screen.
pub fn render_popup(f: &mut Frame, title: &str, lines: &[String], theme: &Theme) {
    let content_width = lines
        .iter()
        .map(|l| Line::from(l.as_str()).width())
        .chain(std::iter::once(title.chars().count()))
        .max()
        .unwrap_or(0);
    // Borders plus one column of padding on each side.
    let width = u16::try_from(content_width + 4).unwrap_or(u16::MAX);
    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(width, height, f.area());
    let border_fg = parse_color(&theme.popup.border_fg);

    f.render_widget(Clear, area);

    let content: Vec<Line> = lines
        .iter()
        .map(|l| Line::from(format!(" {l}")))
        .collect();

    let popup = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title.to_owned())
            .border_style(Style::default().fg(border_fg)),
    );

    f.render_widget(popup, area);
}

/// Returns a `width` x `height` rectangle centered in `area`, shrunk to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
