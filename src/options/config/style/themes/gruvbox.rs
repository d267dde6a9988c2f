use tui::{style::Modifier, widgets::BorderType};

use super::{hex, hex_colour};
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn gruvbox_palette() -> Self {
        Self {
            bar_colours: vec![
                hex_colour!("#fb4934"),
                hex_colour!("#b8bb26"),
                hex_colour!("#fabd2f"),
                hex_colour!("#83a598"),
                hex_colour!("#d3869b"),
                hex_colour!("#8ec07c"),
                hex_colour!("#fe8019"),
                hex_colour!("#cc241d"),
                hex_colour!("#98971a"),
                hex_colour!("#d79921"),
                hex_colour!("#458588"),
                hex_colour!("#b16286"),
            ],
            axis_style: hex!("#665c54"),
            border_style: hex!("#ebdbb2"),
            title_style: hex!("#fabd2f").add_modifier(Modifier::BOLD),
            text_style: hex!("#ebdbb2"),
            status_style: hex!("#665c54"),
            border_type: BorderType::Plain,
        }
    }
}
