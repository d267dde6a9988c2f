use tui::{style::Modifier, widgets::BorderType};

use super::{hex, hex_colour};
use crate::options::config::style::Styles;

impl Styles {
    pub(crate) fn nord_palette() -> Self {
        Self {
            bar_colours: vec![
                hex_colour!("#88c0d0"),
                hex_colour!("#d08770"),
                hex_colour!("#a3be8c"),
                hex_colour!("#b48ead"),
                hex_colour!("#ebcb8b"),
                hex_colour!("#5e81ac"),
                hex_colour!("#bf616a"),
                hex_colour!("#8fbcbb"),
                hex_colour!("#81a1c1"),
            ],
            axis_style: hex!("#4c566a"),
            border_style: hex!("#88c0d0"),
            title_style: hex!("#81a1c1").add_modifier(Modifier::BOLD),
            text_style: hex!("#e5e9f0"),
            status_style: hex!("#4c566a"),
            border_type: BorderType::Rounded,
        }
    }
}
