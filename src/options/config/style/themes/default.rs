use tui::{
    style::{Color, Modifier},
    widgets::BorderType,
};

use super::color;
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn default_style() -> Self {
        const HIGHLIGHT_COLOUR: Color = Color::LightBlue;
        const TEXT_COLOUR: Color = Color::Gray;

        Self {
            bar_colours: vec![
                Color::LightMagenta,
                Color::LightYellow,
                Color::LightCyan,
                Color::LightGreen,
                Color::LightBlue,
                Color::LightRed,
                Color::Cyan,
                Color::Green,
                Color::Blue,
                Color::Magenta,
            ],
            axis_style: color!(Color::DarkGray),
            border_style: color!(TEXT_COLOUR),
            title_style: color!(HIGHLIGHT_COLOUR).add_modifier(Modifier::BOLD),
            text_style: color!(TEXT_COLOUR),
            status_style: color!(Color::DarkGray),
            border_type: BorderType::Plain,
        }
    }

    pub(crate) fn default_light_mode() -> Self {
        Self {
            bar_colours: vec![
                Color::Blue,
                Color::Red,
                Color::Magenta,
                Color::Green,
                Color::Cyan,
                Color::LightBlue,
                Color::LightRed,
                Color::LightMagenta,
            ],
            axis_style: color!(Color::Gray),
            border_style: color!(Color::Black),
            title_style: color!(Color::Black).add_modifier(Modifier::BOLD),
            text_style: color!(Color::Black),
            status_style: color!(Color::Gray),
            ..Self::default_style()
        }
    }
}
