//! Config options around styling.

mod themes;
pub(crate) mod utils;

use std::borrow::Cow;

use serde::Deserialize;
use tui::{
    style::{Color, Style},
    widgets::BorderType,
};
use utils::{opt, parse_colour, set_colour, set_colour_list, set_style};

use super::Config;
use crate::options::{args::BarraceArgs, OptionError, OptionResult};

#[derive(Clone, Debug, Deserialize)]
#[cfg_attr(test, derive(PartialEq, Eq))]
pub(crate) struct ColorStr(Cow<'static, str>);

/// A style for text.
#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) enum TextStyleConfig {
    Colour(ColorStr),
    TextStyle {
        /// A built-in ANSI colour, RGB hex, or RGB colour code.
        #[serde(alias = "colour")]
        color: Option<ColorStr>,

        /// A built-in ANSI colour, RGB hex, or RGB colour code.
        #[serde(alias = "bg_colour")]
        bg_color: Option<ColorStr>,

        /// Whether to make this text bolded or not. If not set,
        /// will default to built-in defaults.
        bold: Option<bool>,

        /// Whether to make this text italicized or not. If not set,
        /// will default to built-in defaults.
        italics: Option<bool>,
    },
}

/// Style-related configs.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct StyleConfig {
    /// A built-in theme.
    ///
    /// If this is and a custom colour are both set, in the config file,
    /// the custom colour scheme will be prioritized first. If a theme
    /// is set in the command-line args, however, it will always be
    /// prioritized first.
    pub(crate) theme: Option<Cow<'static, str>>,

    /// Styling for the bars.
    pub(crate) bars: Option<BarStyle>,

    /// Styling for the surrounding widget.
    pub(crate) widgets: Option<WidgetStyle>,
}

/// Styling for the bars themselves.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct BarStyle {
    /// Colours handed out, in order, to values without a colour of their own.
    #[serde(alias = "colours")]
    pub(crate) colors: Option<Vec<ColorStr>>,

    /// The colour of the centre axis when a baseline is set.
    #[serde(alias = "axis_colour")]
    pub(crate) axis_color: Option<ColorStr>,
}

/// General styling for the chart widget.
#[derive(Clone, Debug, Default, Deserialize)]
#[cfg_attr(test, serde(deny_unknown_fields), derive(PartialEq, Eq))]
pub(crate) struct WidgetStyle {
    #[serde(alias = "border_colour")]
    pub(crate) border_color: Option<ColorStr>,
    pub(crate) title: Option<TextStyleConfig>,
    pub(crate) text: Option<TextStyleConfig>,
    pub(crate) status: Option<TextStyleConfig>,
}

/// The actual internal representation of the configured styles.
#[derive(Debug, Clone)]
pub struct Styles {
    pub(crate) bar_colours: Vec<Color>,
    pub(crate) axis_style: Style,
    pub(crate) border_style: Style,
    pub(crate) title_style: Style,
    pub(crate) text_style: Style,
    pub(crate) status_style: Style,
    pub(crate) border_type: BorderType,
}

impl Default for Styles {
    fn default() -> Self {
        Self::default_style()
    }
}

impl Styles {
    pub fn new(args: &BarraceArgs, config: &Config) -> OptionResult<Self> {
        let mut palette = match &args.style_args.theme {
            Some(theme) => Self::from_theme(theme)?,
            None => match config.styles.as_ref().and_then(|s| s.theme.as_ref()) {
                Some(theme) => Self::from_theme(theme)?,
                None => Self::default(),
            },
        };

        // Apply the config's custom colours on top, unless the args picked a theme.
        if args.style_args.theme.is_none() {
            if let Some(style) = &config.styles {
                palette.set_styles_from_config(style)?;
            }
        }

        Ok(palette)
    }

    fn from_theme(theme: &str) -> OptionResult<Self> {
        let lower_case = theme.to_lowercase();
        match lower_case.as_str() {
            "default" => Ok(Self::default_style()),
            "default-light" => Ok(Self::default_light_mode()),
            "gruvbox" => Ok(Self::gruvbox_palette()),
            "nord" => Ok(Self::nord_palette()),
            _ => Err(OptionError::config(format!(
                "'{theme}' is an invalid built-in theme."
            ))),
        }
    }

    fn set_styles_from_config(&mut self, config: &StyleConfig) -> OptionResult<()> {
        // Bars
        set_colour_list!(self.bar_colours, config.bars, colors);
        set_colour!(self.axis_style, config.bars, axis_color);

        // General widget text.
        set_style!(self.title_style, config.widgets, title);
        set_style!(self.text_style, config.widgets, text);
        set_style!(self.status_style, config.widgets, status);

        // Widget borders
        set_colour!(self.border_style, config.widgets, border_color);

        Ok(())
    }
}
