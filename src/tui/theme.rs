//! Dark and light color palettes.
//!
//! `ThemeMode::Auto` asks the OS for its appearance through `dark-light`.

use ratatui::style::Color;

use crate::config::ThemeMode;
use crate::models::TokenColor;

/// Colors used by the form, token panels and popups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    /// App title and panel titles
    pub primary: Color,
    /// Key names in hints
    pub accent: Color,
    /// Success banner
    pub success: Color,
    /// Field errors and the error overlay
    pub error: Color,
    /// Status line warnings
    pub warning: Color,

    /// Body text
    pub text: Color,
    /// Placeholders and hint labels
    pub text_muted: Color,
    /// Screen background
    pub background: Color,
    /// Background of the confirm dialog
    pub popup_bg: Color,
    /// Border of the focused field or token panel
    pub focus_border: Color,

    /// Blue chip colors as (text, fill)
    pub blue_chip: (Color, Color),
    /// Red chip colors as (text, fill)
    pub red_chip: (Color, Color),
}

impl Theme {
    /// Palette matching the OS appearance, dark when it cannot be read.
    #[must_use]
    pub fn detect() -> Self {
        match dark_light::detect() {
            Ok(dark_light::Mode::Light) => Self::light(),
            Ok(dark_light::Mode::Dark | dark_light::Mode::Unspecified) | Err(_) => Self::dark(),
        }
    }

    /// Palette for dark terminal backgrounds.
    #[must_use]
    pub const fn dark() -> Self {
        Self {
            primary: Color::Cyan,
            accent: Color::Yellow,
            success: Color::Green,
            error: Color::Red,
            warning: Color::Yellow,
            text: Color::White,
            text_muted: Color::DarkGray,
            background: Color::Black,
            popup_bg: Color::Rgb(30, 30, 30),
            focus_border: Color::Yellow,
            blue_chip: (Color::Rgb(227, 242, 253), Color::Rgb(25, 118, 210)),
            red_chip: (Color::Rgb(255, 235, 238), Color::Rgb(211, 47, 47)),
        }
    }

    /// Palette for light terminal backgrounds. Chips invert to pale fills.
    #[must_use]
    pub const fn light() -> Self {
        Self {
            primary: Color::Blue,
            accent: Color::Rgb(180, 100, 0),
            success: Color::Rgb(0, 128, 0),
            error: Color::Red,
            warning: Color::Rgb(200, 100, 0),
            text: Color::Black,
            text_muted: Color::Gray,
            background: Color::White,
            popup_bg: Color::Rgb(245, 245, 245),
            focus_border: Color::Rgb(180, 100, 0),
            blue_chip: (Color::Rgb(25, 118, 210), Color::Rgb(227, 242, 253)),
            red_chip: (Color::Rgb(211, 47, 47), Color::Rgb(255, 235, 238)),
        }
    }

    /// Resolves the configured mode; `Auto` detects the OS setting.
    #[must_use]
    pub fn from_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Auto => Self::detect(),
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    /// Text and fill colors of a token chip.
    #[must_use]
    pub const fn token_colors(&self, color: TokenColor) -> (Color, Color) {
        match color {
            TokenColor::Blue => self.blue_chip,
            TokenColor::Red => self.red_chip,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
