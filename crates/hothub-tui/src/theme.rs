use ratatui::style::{Color, Modifier, Style};

use hothub_core::ThemePreference;

/// Color theme for the shell.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub accent: Color,
    pub warning: Color,
    pub danger: Color,
    pub footer_fg: Color,
    pub footer_bg: Color,
}

impl Theme {
    /// Default dark palette with the brand magenta accent.
    pub fn dark() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Rgb(255, 64, 129),
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(60, 20, 40),
            accent: Color::Rgb(255, 64, 129),
            warning: Color::Yellow,
            danger: Color::Red,
            footer_fg: Color::DarkGray,
            footer_bg: Color::Reset,
        }
    }

    /// Light palette: dark text on a pale surface, muted accent.
    pub fn light() -> Self {
        Self {
            header_fg: Color::White,
            header_bg: Color::Rgb(180, 40, 100),
            border: Color::Gray,
            text: Color::Black,
            dim: Color::Gray,
            highlight_bg: Color::Rgb(240, 210, 225),
            accent: Color::Rgb(180, 40, 100),
            warning: Color::Rgb(180, 120, 0),
            danger: Color::Rgb(200, 40, 40),
            footer_fg: Color::Gray,
            footer_bg: Color::Reset,
        }
    }

    pub fn from_preference(pref: ThemePreference) -> Self {
        if pref.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn footer_style(&self) -> Style {
        Style::default().fg(self.footer_fg).bg(self.footer_bg)
    }
}
