use ratatui::style::Color;
use serde::{Deserialize, Serialize};

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub primary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_muted: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_menu: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// Color specification that can be serialized/deserialized.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

impl Theme {
    /// Tokyo Night theme.
    ///
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night".to_string(),
            primary: ColorSpec::rgb(125, 207, 255),       // Blue
            accent: ColorSpec::rgb(255, 159, 196),        // Magenta
            text: ColorSpec::rgb(169, 177, 214),          // Foreground
            text_muted: ColorSpec::rgb(117, 121, 148),    // Comment
            success: ColorSpec::rgb(158, 206, 106),       // Green
            warning: ColorSpec::rgb(255, 202, 40),        // Yellow
            error: ColorSpec::rgb(247, 118, 142),         // Red
            border_active: ColorSpec::rgb(125, 207, 255), // Blue
            border_normal: ColorSpec::rgb(117, 121, 148), // Comment
            highlight_bg: ColorSpec::rgb(125, 207, 255),  // Blue
            highlight_fg: ColorSpec::rgb(26, 27, 38),     // Background
            footer_search: ColorSpec::rgb(125, 207, 255), // Blue
            footer_menu: ColorSpec::rgb(158, 206, 106),   // Green
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Rose Pine Dawn theme.
    ///
    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn".to_string(),
            primary: ColorSpec::rgb(161, 119, 255),
            accent: ColorSpec::rgb(255, 109, 146),
            text: ColorSpec::rgb(88, 82, 96),
            text_muted: ColorSpec::rgb(152, 147, 165),
            success: ColorSpec::rgb(59, 247, 209),
            warning: ColorSpec::rgb(255, 210, 0),
            error: ColorSpec::rgb(235, 111, 146),
            border_active: ColorSpec::rgb(161, 119, 255),
            border_normal: ColorSpec::rgb(88, 82, 96),
            highlight_bg: ColorSpec::rgb(161, 119, 255),
            highlight_fg: ColorSpec::rgb(250, 244, 237),
            footer_search: ColorSpec::rgb(61, 174, 233),
            footer_menu: ColorSpec::rgb(59, 247, 209),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Dracula theme.
    ///
    pub fn dracula() -> Self {
        Theme {
            name: "dracula".to_string(),
            primary: ColorSpec::rgb(189, 147, 249),
            accent: ColorSpec::rgb(255, 121, 198),
            text: ColorSpec::rgb(248, 248, 242),
            text_muted: ColorSpec::rgb(98, 114, 164),
            success: ColorSpec::rgb(80, 250, 123),
            warning: ColorSpec::rgb(241, 250, 140),
            error: ColorSpec::rgb(255, 85, 85),
            border_active: ColorSpec::rgb(189, 147, 249),
            border_normal: ColorSpec::rgb(98, 114, 164),
            highlight_bg: ColorSpec::rgb(68, 71, 90),
            highlight_fg: ColorSpec::rgb(248, 248, 242),
            footer_search: ColorSpec::rgb(139, 233, 253),
            footer_menu: ColorSpec::rgb(80, 250, 123),
            footer_normal: ColorSpec::rgb(0, 0, 0),
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            "dracula" => Some(Self::dracula()),
            _ => None,
        }
    }

    /// Get a theme by name, falling back to the default for unknown names.
    ///
    pub fn by_name(name: &str) -> Self {
        Self::from_name(name).unwrap_or_else(|| {
            log::warn!("Unknown theme '{}', using default.", name);
            Self::default()
        })
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> Vec<String> {
        vec![
            "tokyo-night".to_string(),
            "rose-pine-dawn".to_string(),
            "dracula".to_string(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_available_theme_resolves() {
        for name in Theme::available_themes() {
            let theme = Theme::from_name(&name).unwrap();
            assert_eq!(theme.name, name);
        }
    }

    #[test]
    fn unknown_theme_falls_back_to_default() {
        assert_eq!(Theme::by_name("solarized"), Theme::default());
        assert_eq!(Theme::default().name, "tokyo-night");
    }

    #[test]
    fn color_spec_to_color() {
        assert_eq!(ColorSpec::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }
}
