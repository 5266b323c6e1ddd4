//! Color configuration for the terminal table and the link picker.

use std::str::FromStr;

use ratatui::style::Color;
use serde::{de, Deserialize, Deserializer};

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ColorConfig {
    #[serde(deserialize_with = "deserialize_color")]
    pub bookmark_count: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub title: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_fg: Color,
    #[serde(deserialize_with = "deserialize_color")]
    pub selection_bg: Color,
}

impl Default for ColorConfig {
    fn default() -> Self {
        Self {
            bookmark_count: Color::Yellow,
            title: Color::Cyan,
            selection_fg: Color::Black,
            selection_bg: Color::Cyan,
        }
    }
}

fn deserialize_color<'de, D>(deserializer: D) -> Result<Color, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_color_string(&s).map_err(de::Error::custom)
}

/// Parse a color string into a ratatui Color.
///
/// Accepts whatever ratatui's `Color::from_str` accepts (names such as
/// "Cyan" or "light-red", "#RRGGBB", an ANSI index) plus the short "#RGB" form.
pub fn parse_color_string(s: &str) -> Result<Color, String> {
    let s = s.trim();

    if let Some(hex) = s.strip_prefix('#') {
        if !hex.is_ascii() {
            return Err(format!("Invalid hex color: {}", s));
        }
        // #RGB expands to #RRGGBB
        if hex.len() == 3 {
            let long: String = hex.chars().flat_map(|c| [c, c]).collect();
            return Color::from_str(&format!("#{}", long))
                .map_err(|_| format!("Invalid hex color: {}", s));
        }
    }

    Color::from_str(s).map_err(|_| format!("Unknown color: {}", s))
}

/// Map a configured color onto crossterm for the plain (non-TUI) table output.
///
/// ratatui names the bright variants `Light*` while crossterm names the dim
/// ones `Dark*`, so the plain names shift by one step.
pub fn to_crossterm(color: Color) -> crossterm::style::Color {
    use crossterm::style::Color as C;

    match color {
        Color::Reset => C::Reset,
        Color::Black => C::Black,
        Color::Red => C::DarkRed,
        Color::Green => C::DarkGreen,
        Color::Yellow => C::DarkYellow,
        Color::Blue => C::DarkBlue,
        Color::Magenta => C::DarkMagenta,
        Color::Cyan => C::DarkCyan,
        Color::Gray => C::Grey,
        Color::DarkGray => C::DarkGrey,
        Color::LightRed => C::Red,
        Color::LightGreen => C::Green,
        Color::LightYellow => C::Yellow,
        Color::LightBlue => C::Blue,
        Color::LightMagenta => C::Magenta,
        Color::LightCyan => C::Cyan,
        Color::White => C::White,
        Color::Rgb(r, g, b) => C::Rgb { r, g, b },
        Color::Indexed(i) => C::AnsiValue(i),
    }
}
