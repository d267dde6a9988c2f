use concat_string::concat_string;
use tui::style::Color;
use unicode_segmentation::UnicodeSegmentation;

use crate::options::OptionError;

/// Convert a hex string to a colour.
pub(crate) fn try_hex_to_colour(hex: &str) -> Result<Color, String> {
    fn hex_component_to_int(hex: &str, first: &str, second: &str) -> Result<u8, String> {
        u8::from_str_radix(&concat_string!(first, second), 16)
            .map_err(|_| format!("'{hex}' is an invalid hex color, could not decode."))
    }

    fn invalid_hex_format(hex: &str) -> String {
        format!(
            "'{hex}' is an invalid hex color. It must be either a 7 character hex string of the form '#12ab3c' or a 3 character hex string of the form '#1a2'.",
        )
    }

    if !hex.starts_with('#') {
        return Err(invalid_hex_format(hex));
    }

    let components: Vec<&str> = hex.graphemes(true).collect();
    if components.len() == 7 {
        // A 6-long hex.
        let r = hex_component_to_int(hex, components[1], components[2])?;
        let g = hex_component_to_int(hex, components[3], components[4])?;
        let b = hex_component_to_int(hex, components[5], components[6])?;

        Ok(Color::Rgb(r, g, b))
    } else if components.len() == 4 {
        // A 3-long hex.
        let r = hex_component_to_int(hex, components[1], components[1])?;
        let g = hex_component_to_int(hex, components[2], components[2])?;
        let b = hex_component_to_int(hex, components[3], components[3])?;

        Ok(Color::Rgb(r, g, b))
    } else {
        Err(invalid_hex_format(hex))
    }
}

/// Parses a colour from a config file or a frame file. Accepts hex
/// (`#rrggbb`, `#rgb`), comma-separated RGB (`255, 0, 155`) and the named
/// ANSI colours.
pub(crate) fn str_to_colour(input_val: &str) -> Result<Color, String> {
    let input_val = input_val.trim();

    if input_val.len() > 1 {
        if input_val.starts_with('#') {
            try_hex_to_colour(input_val)
        } else if input_val.contains(',') {
            convert_rgb_to_color(input_val)
        } else {
            convert_name_to_colour(input_val)
        }
    } else {
        Err(format!("Value '{input_val}' is not valid.",))
    }
}

fn convert_rgb_to_color(rgb_str: &str) -> Result<Color, String> {
    let rgb_list = rgb_str.split(',').collect::<Vec<&str>>();
    if rgb_list.len() != 3 {
        return Err(format!(
            "Value '{rgb_str}' is an invalid RGB colour. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        ));
    }

    let rgb = rgb_list
        .iter()
        .filter_map(|val| val.trim().parse::<u8>().ok())
        .collect::<Vec<_>>();

    if let [r, g, b] = rgb[..] {
        Ok(Color::Rgb(r, g, b))
    } else {
        Err(format!(
            "Value '{rgb_str}' contained invalid RGB values. It must be a comma separated value with 3 integers from 0 to 255 (ie: '255, 0, 155').",
        ))
    }
}

fn convert_name_to_colour(color_name: &str) -> Result<Color, String> {
    match color_name.to_lowercase().trim() {
        "reset" => Ok(Color::Reset),
        "black" => Ok(Color::Black),
        "red" => Ok(Color::Red),
        "green" => Ok(Color::Green),
        "yellow" => Ok(Color::Yellow),
        "blue" => Ok(Color::Blue),
        "magenta" => Ok(Color::Magenta),
        "cyan" => Ok(Color::Cyan),
        "gray" | "grey" => Ok(Color::Gray),
        "darkgray" | "darkgrey" | "dark gray" | "dark grey" => Ok(Color::DarkGray),
        "lightred" | "light red" => Ok(Color::LightRed),
        "lightgreen" | "light green" => Ok(Color::LightGreen),
        "lightyellow" | "light yellow" => Ok(Color::LightYellow),
        "lightblue" | "light blue" => Ok(Color::LightBlue),
        "lightmagenta" | "light magenta" => Ok(Color::LightMagenta),
        "lightcyan" | "light cyan" => Ok(Color::LightCyan),
        "white" => Ok(Color::White),
        _ => Err(format!(
            "'{color_name}' is an invalid named color.

The following are supported named colors:
+--------+-------------+---------------------+
|  Reset | Magenta     | Light Yellow        |
+--------+-------------+---------------------+
|  Black | Cyan        | Light Blue          |
+--------+-------------+---------------------+
|   Red  | Gray/Grey   | Light Magenta       |
+--------+-------------+---------------------+
|  Green | Light Cyan  | Dark Gray/Dark Grey |
+--------+-------------+---------------------+
| Yellow | Light Red   | White               |
+--------+-------------+---------------------+
|  Blue  | Light Green |                     |
+--------+-------------+---------------------+

Alternatively, hex colors or RGB color codes are valid.\n"
        )),
    }
}

/// Builds the error for a bad colour at `styles.<section>.<field>`.
///
/// `location` is the stringified config expression, e.g. `config.bars`.
pub(super) fn style_config_error(location: &str, field: &str, err: String) -> OptionError {
    match location.split_once('.') {
        Some((_, section)) => OptionError::config(format!(
            "Please update 'styles.{section}.{field}' in your config file. {err}"
        )),
        None => OptionError::config(format!(
            "Please update 'styles.{field}' in your config file. {err}"
        )),
    }
}

macro_rules! opt {
    ($($e: tt)+) => {
        (|| { $($e)+ })()
    }
}

macro_rules! parse_colour {
    ($colour:expr, $config_location:expr, $field:tt) => {
        crate::options::config::style::utils::str_to_colour(&$colour.0).map_err(|err| {
            crate::options::config::style::utils::style_config_error(
                stringify!($config_location),
                stringify!($field),
                err,
            )
        })?
    };
}

macro_rules! set_style {
    ($palette_field:expr, $config_location:expr, $field:tt) => {
        if let Some(style) = &(opt!($config_location.as_ref()?.$field.as_ref())) {
            match &style {
                TextStyleConfig::Colour(colour) => {
                    $palette_field =
                        $palette_field.fg(parse_colour!(colour, $config_location, $field));
                }
                TextStyleConfig::TextStyle {
                    color,
                    bg_color,
                    bold,
                    italics,
                } => {
                    if let Some(fg) = &color {
                        $palette_field =
                            $palette_field.fg(parse_colour!(fg, $config_location, $field));
                    }

                    if let Some(bg) = &bg_color {
                        $palette_field =
                            $palette_field.bg(parse_colour!(bg, $config_location, $field));
                    }

                    if let Some(bold) = &bold {
                        if *bold {
                            $palette_field =
                                $palette_field.add_modifier(tui::style::Modifier::BOLD);
                        } else {
                            $palette_field =
                                $palette_field.remove_modifier(tui::style::Modifier::BOLD);
                        }
                    }

                    if let Some(italics) = &italics {
                        if *italics {
                            $palette_field =
                                $palette_field.add_modifier(tui::style::Modifier::ITALIC);
                        } else {
                            $palette_field =
                                $palette_field.remove_modifier(tui::style::Modifier::ITALIC);
                        }
                    }
                }
            }
        }
    };
}

macro_rules! set_colour {
    ($palette_field:expr, $config_location:expr, $field:tt) => {
        if let Some(colour) = &(opt!($config_location.as_ref()?.$field.as_ref())) {
            $palette_field = $palette_field.fg(parse_colour!(colour, $config_location, $field));
        }
    };
}

/// Unlike [`set_colour`], this sets a list of plain [`Color`]s, not styles.
macro_rules! set_colour_list {
    ($palette_field:expr, $config_location:expr, $field:tt) => {
        if let Some(colour_list) = &(opt!($config_location.as_ref()?.$field.as_ref())) {
            $palette_field = colour_list
                .iter()
                .map(|s| crate::options::config::style::utils::str_to_colour(&s.0))
                .collect::<Result<Vec<Color>, String>>()
                .map_err(|err| {
                    crate::options::config::style::utils::style_config_error(
                        stringify!($config_location),
                        stringify!($field),
                        err,
                    )
                })?;
        }
    };
}

pub(super) use opt;
pub(super) use parse_colour;
pub(super) use set_colour;
pub(super) use set_colour_list;
pub(super) use set_style;
