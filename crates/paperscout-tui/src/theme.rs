use ratatui::style::{Color, Modifier, Style};

use paperscout_core::Notice;

/// Color theme for the TUI.
pub struct Theme {
    pub header_fg: Color,
    pub header_bg: Color,
    pub border: Color,
    pub text: Color,
    pub dim: Color,
    pub highlight_bg: Color,
    pub active: Color,
    pub selected: Color,
    pub error: Color,
    pub success: Color,
    pub spinner: Color,
}

impl Theme {
    /// Default ink-on-paper terminal theme.
    pub fn ink() -> Self {
        Self {
            header_fg: Color::Black,
            header_bg: Color::Cyan,
            border: Color::DarkGray,
            text: Color::White,
            dim: Color::DarkGray,
            highlight_bg: Color::Rgb(30, 40, 50),
            active: Color::Cyan,
            selected: Color::Green,
            error: Color::Red,
            success: Color::Green,
            spinner: Color::Cyan,
        }
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self) -> Style {
        Style::default().fg(self.border)
    }

    pub fn highlight_style(&self) -> Style {
        Style::default()
            .bg(self.highlight_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn notice_style(&self, notice: &Notice) -> Style {
        match notice {
            Notice::Info(_) => Style::default().fg(self.success),
            Notice::Error(_) => Style::default().fg(self.error),
        }
    }
}
