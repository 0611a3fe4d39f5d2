//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes.

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Build the `ColorPalette` for this variant.
    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Human-readable name for status display.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header and nav --
    pub title: Style,
    pub tag: Style,
    pub price: Style,
    pub nav_item: Style,
    pub nav_active: Style,
    pub nav_arrow: Style,

    // -- Page body --
    pub section_heading: Style,
    pub body: Style,
    pub muted: Style,
    pub bullet: Style,
    pub toggle: Style,
    pub link: Style,

    // -- Reviews --
    pub star_filled: Style,
    pub star_empty: Style,
    pub filter_selected: Style,
    pub reviewer: Style,

    // -- Images --
    pub image_tile: Style,
    pub image_loading: Style,
    pub image_error: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub cta_bar: Style,
    pub overlay_border: Style,
    pub selected: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            tag: Style::default().fg(Color::Cyan),
            price: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::Gray),
            nav_active: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            nav_arrow: Style::default().fg(Color::DarkGray),

            section_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            body: Style::default(),
            muted: Style::default().fg(Color::DarkGray),
            bullet: Style::default().fg(Color::Green),
            toggle: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            link: Style::default().fg(Color::Green),

            star_filled: Style::default().fg(Color::Yellow),
            star_empty: Style::default().fg(Color::DarkGray),
            filter_selected: Style::default().bg(Color::Yellow).fg(Color::Black),
            reviewer: Style::default().add_modifier(Modifier::BOLD),

            image_tile: Style::default().fg(Color::Blue),
            image_loading: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
            image_error: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            cta_bar: Style::default().bg(Color::Blue).fg(Color::White),
            overlay_border: Style::default().fg(Color::Cyan),
            selected: Style::default().bg(Color::DarkGray).fg(Color::White),
        }
    }

    fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            tag: Style::default().fg(Color::Blue),
            price: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
            nav_item: Style::default().fg(Color::DarkGray),
            nav_active: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            nav_arrow: Style::default().fg(Color::Gray),

            section_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            body: Style::default().fg(Color::Black),
            muted: Style::default().fg(Color::Gray),
            bullet: Style::default().fg(Color::Green),
            toggle: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::UNDERLINED),
            link: Style::default().fg(Color::Green),

            star_filled: Style::default().fg(Color::Rgb(200, 140, 0)),
            star_empty: Style::default().fg(Color::Gray),
            filter_selected: Style::default().bg(Color::Blue).fg(Color::White),
            reviewer: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            image_tile: Style::default().fg(Color::Blue),
            image_loading: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::ITALIC),
            image_error: Style::default().fg(Color::Red),

            status_bar: Style::default().bg(Color::Gray).fg(Color::Black),
            cta_bar: Style::default().bg(Color::Blue).fg(Color::White),
            overlay_border: Style::default().fg(Color::Blue),
            selected: Style::default().bg(Color::Blue).fg(Color::White),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_palette_status_bar() {
        let palette = ThemeVariant::Dark.palette();
        assert_eq!(
            palette.status_bar,
            Style::default().bg(Color::DarkGray).fg(Color::White)
        );
    }

    #[test]
    fn active_nav_stands_out() {
        for variant in [ThemeVariant::Dark, ThemeVariant::Light] {
            let palette = variant.palette();
            assert_ne!(palette.nav_active, palette.nav_item);
            assert!(palette.nav_active.add_modifier.contains(Modifier::BOLD));
        }
    }

    #[test]
    fn light_palette_differs_from_dark() {
        let dark = ThemeVariant::Dark.palette();
        let light = ThemeVariant::Light.palette();
        assert_ne!(dark.selected, light.selected);
        assert_ne!(dark.body, light.body);
    }

    #[test]
    fn variant_from_str_name() {
        assert_eq!(
            ThemeVariant::from_str_name("dark"),
            Some(ThemeVariant::Dark)
        );
        assert_eq!(
            ThemeVariant::from_str_name("Light"),
            Some(ThemeVariant::Light)
        );
        assert_eq!(ThemeVariant::from_str_name("neon"), None);
    }

    #[test]
    fn variant_cycles() {
        assert_eq!(ThemeVariant::Dark.next(), ThemeVariant::Light);
        assert_eq!(ThemeVariant::Light.next().next(), ThemeVariant::Light);
    }
}
