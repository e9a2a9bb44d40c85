use lazy_static::lazy_static;
use ratatui::style::Color;
use regex::Regex;

use crate::engine::Category;

lazy_static! {
    static ref HEX_COLOR: Option<Regex> =
        Regex::new(r"^#?([0-9a-fA-F]{2})([0-9a-fA-F]{2})([0-9a-fA-F]{2})$").ok();
    static ref SHORT_HEX_COLOR: Option<Regex> =
        Regex::new(r"^#?([0-9a-fA-F])([0-9a-fA-F])([0-9a-fA-F])$").ok();
}

/// Parse `#RRGGBB` or `#RGB` into a terminal color
pub fn parse_hex(value: &str) -> Option<Color> {
    let value = value.trim();
    let channel = |s: &str| u8::from_str_radix(s, 16).ok();

    if let Some(caps) = HEX_COLOR.as_ref().and_then(|re| re.captures(value)) {
        return Some(Color::Rgb(
            channel(&caps[1])?,
            channel(&caps[2])?,
            channel(&caps[3])?,
        ));
    }
    let caps = SHORT_HEX_COLOR.as_ref()?.captures(value)?;
    let short = |s: &str| channel(s).map(|v| v * 17);
    Some(Color::Rgb(short(&caps[1])?, short(&caps[2])?, short(&caps[3])?))
}

/// Pick black or white text for legibility on `background`
pub fn contrast_text(background: Color) -> Color {
    match background {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64;
            if luma > 150.0 {
                Color::Rgb(17, 24, 39)
            } else {
                Color::White
            }
        }
        _ => Color::White,
    }
}

/// Card and chrome colors
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub card: Color,
    pub card_text: Color,
    pub dimmed: Color,
    pub accent: Color,
    pub focus: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme::paper()
    }
}

impl Theme {
    pub fn paper() -> Self {
        Self {
            card: Color::Rgb(255, 255, 255),
            card_text: Color::Rgb(17, 24, 39),    // #111827
            dimmed: Color::Rgb(107, 114, 128),    // #6B7280
            accent: Color::Rgb(255, 107, 107),    // #FF6B6B coral
            focus: Color::Rgb(30, 95, 116),       // #1E5F74 dark teal
            error: Color::Rgb(220, 38, 38),       // #DC2626
        }
    }

    pub fn current() -> Self {
        Self::paper()
    }

    /// Highlight color for a tagged word
    pub fn category(category: Category) -> Color {
        match category {
            Category::Adjective => Color::Rgb(147, 51, 234), // #9333EA
            Category::Subject => Color::Rgb(37, 99, 235),    // #2563EB
            Category::Action => Color::Rgb(22, 163, 74),     // #16A34A
            Category::Item => Color::Rgb(234, 88, 12),       // #EA580C
            Category::Scene => Color::Rgb(219, 39, 119),     // #DB2777
        }
    }
}

/// Convenience access to current theme colors
pub mod colors {
    use super::Theme;
    use ratatui::style::Color;

    pub fn card() -> Color {
        Theme::current().card
    }
    pub fn card_text() -> Color {
        Theme::current().card_text
    }
    pub fn dimmed() -> Color {
        Theme::current().dimmed
    }
    pub fn accent() -> Color {
        Theme::current().accent
    }
    pub fn focus() -> Color {
        Theme::current().focus
    }
    pub fn error() -> Color {
        Theme::current().error
    }
}
