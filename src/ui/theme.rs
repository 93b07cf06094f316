use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ColorError {
    #[error("color must be a hex code like #EAD575, got {0:?}")]
    Malformed(String),
}

/// Parse a `#RRGGBB` hex color.
pub fn parse_color(s: &str) -> Result<Color, ColorError> {
    let malformed = || ColorError::Malformed(s.to_string());
    let hex = s.strip_prefix('#').ok_or_else(malformed)?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(malformed());
    }
    let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| malformed())?;
    let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| malformed())?;
    let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| malformed())?;
    Ok(Color::Rgb(r, g, b))
}

pub struct Theme;

impl Theme {
    pub const ACCENT_TEAL: Color = Color::Rgb(80, 200, 210);
    pub const ACCENT_AMBER: Color = Color::Rgb(230, 180, 80);
    pub const TEXT_PRIMARY: Color = Color::Rgb(220, 220, 220);
    pub const TEXT_MUTED: Color = Color::Rgb(110, 110, 120);
    pub const BORDER_DIM: Color = Color::Rgb(70, 70, 80);
    pub const BG_ELEVATED: Color = Color::Rgb(30, 32, 40);

    pub fn border() -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn border_focused() -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn title() -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    pub fn paragraph_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Style a marked paragraph renders with while its marker class is set.
    pub fn marker() -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(Self::ACCENT_AMBER)
            .add_modifier(Modifier::BOLD)
    }

    pub fn cell_text() -> Style {
        Style::default().fg(Self::TEXT_PRIMARY)
    }

    /// Text style inside a cell whose background attribute is set. The
    /// background itself comes from the applied attribute, not the theme.
    pub fn cell_text_highlighted() -> Style {
        Style::default().fg(Color::Black)
    }

    pub fn grid_line() -> Style {
        Style::default().fg(Self::BORDER_DIM)
    }

    pub fn status_bar() -> Style {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}
