//! Theme configuration for Megatron.
//!
//! Colors are stored as strings (e.g. `"blue"`, `"#ff5500"`) and converted
//! to [`ratatui::style::Color`] at render time via [`parse_color`].

use serde::{Deserialize, Serialize};

/// Complete theme configuration with per-component color groups.
///
/// Lives under the `[theme]` table of the config file; every group and
/// every field may be omitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub title: TitleTheme,
    #[serde(default)]
    pub panel: PanelTheme,
    #[serde(default)]
    pub statusbar: StatusBarTheme,
    #[serde(default)]
    pub popup: PopupTheme,
}

/// Title bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TitleTheme {
    pub fg: String,
    pub path_fg: String,
}

impl Default for TitleTheme {
    fn default() -> Self {
        Self {
            fg: "cyan".to_string(),
            path_fg: "white".to_string(),
        }
    }
}

/// Pane colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelTheme {
    pub dir_fg: String,
    pub video_fg: String,
    pub selected_fg: String,
    pub border_fg: String,
    pub empty_fg: String,
}

impl Default for PanelTheme {
    fn default() -> Self {
        Self {
            dir_fg: "blue".to_string(),
            video_fg: "white".to_string(),
            selected_fg: "green".to_string(),
            border_fg: "dark_gray".to_string(),
            empty_fg: "dark_gray".to_string(),
        }
    }
}

/// Status bar colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusBarTheme {
    pub bg: String,
    pub position_fg: String,
    pub message_fg: String,
}

impl Default for StatusBarTheme {
    fn default() -> Self {
        Self {
            bg: "white".to_string(),
            position_fg: "black".to_string(),
            message_fg: "magenta".to_string(),
        }
    }
}

/// Popup/dialog colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopupTheme {
    pub border_fg: String,
}

impl Default for PopupTheme {
    fn default() -> Self {
        Self {
            border_fg: "yellow".to_string(),
        }
    }
}

/// Parses a color string into a `ratatui::style::Color`.
///
/// Supports named colors (`"blue"`, `"dark_gray"`) and hex (`"#rrggbb"`).
/// Returns `Color::Reset` for unrecognised values.
pub fn parse_color(s: &str) -> ratatui::style::Color {
    use ratatui::style::Color;

    match s.to_lowercase().as_str() {
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "gray" | "grey" => Color::Gray,
        "dark_gray" | "dark_grey" | "darkgray" | "darkgrey" => Color::DarkGray,
        "light_red" | "lightred" => Color::LightRed,
        "light_green" | "lightgreen" => Color::LightGreen,
        "light_yellow" | "lightyellow" => Color::LightYellow,
        "light_blue" | "lightblue" => Color::LightBlue,
        "light_magenta" | "lightmagenta" => Color::LightMagenta,
        "light_cyan" | "lightcyan" => Color::LightCyan,
        "white" => Color::White,
        "reset" => Color::Reset,
        hex if hex.starts_with('#') && hex.len() == 7 && hex.is_ascii() => {
            let r = u8::from_str_radix(&hex[1..3], 16).unwrap_or(0);
            let g = u8::from_str_radix(&hex[3..5], 16).unwrap_or(0);
            let b = u8::from_str_radix(&hex[5..7], 16).unwrap_or(0);
            Color::Rgb(r, g, b)
        }
        _ => Color::Reset,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    #[test]
    fn default_theme_panel() {
        let theme = Theme::default();
        assert_eq!(theme.panel.dir_fg, "blue");
        assert_eq!(theme.panel.selected_fg, "green");
        assert_eq!(theme.panel.border_fg, "dark_gray");
    }

    #[test]
    fn default_theme_statusbar() {
        let theme = Theme::default();
        assert_eq!(theme.statusbar.bg, "white");
        assert_eq!(theme.statusbar.position_fg, "black");
        assert_eq!(theme.statusbar.message_fg, "magenta");
    }

    #[test]
    fn default_theme_title_and_popup() {
        let theme = Theme::default();
        assert_eq!(theme.title.fg, "cyan");
        assert_eq!(theme.popup.border_fg, "yellow");
    }

    #[test]
    fn partial_group_keeps_other_field_defaults() {
        let theme: Theme = toml::from_str(
            r##"
[panel]
dir_fg = "#00ff00"
"##,
        )
        .unwrap();

        assert_eq!(theme.panel.dir_fg, "#00ff00");
        assert_eq!(theme.panel.selected_fg, "green");
        assert_eq!(theme.statusbar.bg, "white");
    }

    #[test]
    fn parse_color_named() {
        assert_eq!(parse_color("blue"), Color::Blue);
        assert_eq!(parse_color("red"), Color::Red);
        assert_eq!(parse_color("green"), Color::Green);
        assert_eq!(parse_color("white"), Color::White);
        assert_eq!(parse_color("dark_gray"), Color::DarkGray);
        assert_eq!(parse_color("reset"), Color::Reset);
    }

    #[test]
    fn parse_color_case_insensitive() {
        assert_eq!(parse_color("Blue"), Color::Blue);
        assert_eq!(parse_color("DARK_GRAY"), Color::DarkGray);
        assert_eq!(parse_color("DarkGray"), Color::DarkGray);
    }

    #[test]
    fn parse_color_hex() {
        assert_eq!(parse_color("#ff0000"), Color::Rgb(255, 0, 0));
        assert_eq!(parse_color("#ff5500"), Color::Rgb(255, 85, 0));
    }

    #[test]
    fn parse_color_unknown_returns_reset() {
        assert_eq!(parse_color("nonexistent"), Color::Reset);
        assert_eq!(parse_color(""), Color::Reset);
        assert_eq!(parse_color("#zzzzzz"), Color::Rgb(0, 0, 0));
    }

    #[test]
    fn parse_color_non_ascii_hex_returns_reset() {
        assert_eq!(parse_color("#ééé"), Color::Reset);
    }
}
