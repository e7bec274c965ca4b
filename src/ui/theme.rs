use ratatui::style::{Color, Modifier, Style};

pub struct Theme;

impl Theme {
    pub const BG: Color = Color::Rgb(0, 0, 0);
    pub const FG: Color = Color::Rgb(229, 231, 235);
    pub const FG_MUTED: Color = Color::Rgb(107, 114, 128);

    pub const DATA: Color = Color::Rgb(37, 99, 235);
    pub const MODEL: Color = Color::Rgb(239, 68, 68);
    pub const WARN: Color = Color::Rgb(255, 200, 0);

    pub fn base() -> Style {
        Style::default().fg(Self::FG).bg(Self::BG)
    }

    pub fn title() -> Style {
        Style::default().fg(Self::FG).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(Self::FG_MUTED)
    }

    pub fn data() -> Style {
        Style::default().fg(Self::DATA)
    }

    pub fn model() -> Style {
        Style::default().fg(Self::MODEL)
    }

    /// Slider fill; the focused slider is drawn bold.
    pub fn slider(focused: bool) -> Style {
        let style = Style::default().fg(Self::DATA).bg(Color::Rgb(20, 20, 30));

        if focused {
            style.add_modifier(Modifier::BOLD)
        } else {
            style
        }
    }

    pub fn border(focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::DATA)
        } else {
            Style::default().fg(Self::FG_MUTED)
        }
    }

    pub fn notice() -> Style {
        Style::default()
            .fg(Self::WARN)
            .bg(Self::BG)
            .add_modifier(Modifier::BOLD)
    }
}
