// Style references and resolution
//
// A log is configured with a StyleRef - either a name looked up in a palette
// at draw time, or a literal ratatui Style. Resolution never fails: unknown
// names degrade to the default style so a typo in a palette shows unstyled
// text instead of taking the view down.

use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// A named or literal style.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRef {
    /// Resolved through a palette at draw time
    Named(String),
    /// Used as-is
    Literal(Style),
}

impl From<&str> for StyleRef {
    fn from(name: &str) -> Self {
        StyleRef::Named(name.to_string())
    }
}

impl From<String> for StyleRef {
    fn from(name: String) -> Self {
        StyleRef::Named(name)
    }
}

impl From<Style> for StyleRef {
    fn from(style: Style) -> Self {
        StyleRef::Literal(style)
    }
}

/// Resolves style references to concrete styles.
///
/// Implemented by [`Palette`]; hosts with their own theme systems can
/// implement it directly.
pub trait StyleResolver {
    fn resolve(&self, style: &StyleRef) -> Style;
}

/// Named style table with hardcoded defaults.
///
/// Loading priority mirrors a theme file workflow: construct from a TOML
/// document when one is available, fall back to the built-in defaults
/// otherwise. Entries set on a loaded palette override the defaults.
#[derive(Debug, Clone)]
pub struct Palette {
    styles: HashMap<String, Style>,
}

/// Root structure for TOML palette files
#[derive(Debug, Clone, Deserialize)]
struct PaletteFile {
    styles: HashMap<String, String>,
}

impl Palette {
    /// Parse a palette from a TOML document with a `[styles]` table of
    /// name = color entries.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        let file: PaletteFile = toml::from_str(content)?;
        let mut palette = Palette::default();
        for (name, value) in file.styles {
            palette
                .styles
                .insert(name, Style::default().fg(parse_color(&value)));
        }
        Ok(palette)
    }

    /// Set or override a named style.
    pub fn insert(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Look up a named style. Unknown names yield the default style.
    pub fn get(&self, name: &str) -> Style {
        self.styles.get(name).copied().unwrap_or_default()
    }

    /// Shared instance of the built-in defaults, for callers that don't
    /// carry a palette of their own.
    pub fn shared_default() -> &'static Palette {
        static DEFAULT: OnceLock<Palette> = OnceLock::new();
        DEFAULT.get_or_init(Palette::default)
    }
}

impl Default for Palette {
    fn default() -> Self {
        let mut styles = HashMap::new();
        styles.insert("log".to_string(), Style::default());
        styles.insert(
            "error".to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
        styles.insert("warn".to_string(), Style::default().fg(Color::Yellow));
        styles.insert("info".to_string(), Style::default().fg(Color::Green));
        styles.insert("debug".to_string(), Style::default().fg(Color::DarkGray));
        styles.insert("trace".to_string(), Style::default().fg(Color::DarkGray));
        styles.insert("border".to_string(), Style::default().fg(Color::Gray));
        styles.insert("title".to_string(), Style::default().fg(Color::White));
        Self { styles }
    }
}

impl StyleResolver for Palette {
    fn resolve(&self, style: &StyleRef) -> Style {
        match style {
            StyleRef::Named(name) => self.get(name),
            StyleRef::Literal(style) => *style,
        }
    }
}

/// Parse a color string to ratatui Color
/// Supports:
/// - Hex format: #RRGGBB
/// - ANSI format: ansi:0-15 (for terminal-native colors)
fn parse_color(value: &str) -> Color {
    if let Some(ansi) = value.strip_prefix("ansi:") {
        return match ansi {
            "0" => Color::Black,
            "1" => Color::Red,
            "2" => Color::Green,
            "3" => Color::Yellow,
            "4" => Color::Blue,
            "5" => Color::Magenta,
            "6" => Color::Cyan,
            "7" => Color::White,
            "8" => Color::DarkGray,
            "9" => Color::LightRed,
            "10" => Color::LightGreen,
            "11" => Color::LightYellow,
            "12" => Color::LightBlue,
            "13" => Color::LightMagenta,
            "14" => Color::LightCyan,
            "15" => Color::Gray,
            _ => Color::White,
        };
    }

    let hex = value.trim_start_matches('#');
    if hex.len() != 6 {
        return Color::White; // fallback
    }
    let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(255);
    let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(255);
    let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(255);
    Color::Rgb(r, g, b)
}
