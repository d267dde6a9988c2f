//! Resolving and generating bar colours.

use tui::style::Color;

use crate::{data::BarColour, options::config::style::utils::str_to_colour};

/// How a bar is filled.
#[derive(Clone, Debug, PartialEq)]
pub enum BarFill {
    Solid(Color),

    /// Left-to-right gradient, always at least two stops.
    Gradient(Vec<Color>),
}

impl BarFill {
    /// The colour used for the bar's value text. For gradients this is the
    /// first stop.
    pub fn text_colour(&self) -> Color {
        match self {
            BarFill::Solid(colour) => *colour,
            BarFill::Gradient(stops) => stops.first().copied().unwrap_or(Color::Reset),
        }
    }

    /// The colour of the fill at `ratio` (`0.0` is the left edge, `1.0` the
    /// right edge). RGB stops are interpolated; anything else is picked
    /// piecewise.
    pub fn colour_at(&self, ratio: f64) -> Color {
        let stops = match self {
            BarFill::Solid(colour) => return *colour,
            BarFill::Gradient(stops) => stops,
        };

        match stops.len() {
            0 => Color::Reset,
            1 => stops[0],
            len => {
                let position = ratio.clamp(0.0, 1.0) * (len - 1) as f64;
                let index = (position.floor() as usize).min(len - 2);
                let local = position - index as f64;

                match (stops[index], stops[index + 1]) {
                    (Color::Rgb(r1, g1, b1), Color::Rgb(r2, g2, b2)) => Color::Rgb(
                        lerp_channel(r1, r2, local),
                        lerp_channel(g1, g2, local),
                        lerp_channel(b1, b2, local),
                    ),
                    (from, to) => {
                        if local < 0.5 {
                            from
                        } else {
                            to
                        }
                    }
                }
            }
        }
    }
}

fn lerp_channel(from: u8, to: u8, t: f64) -> u8 {
    (from as f64 + (to as f64 - from as f64) * t).round() as u8
}

/// Turns a colour from a frame file into a [`BarFill`]. Returns [`None`] if
/// there is nothing usable in it, in which case the caller should fall back to
/// a remembered or generated colour.
pub(crate) fn resolve_fill(colour: &BarColour) -> Option<BarFill> {
    match &*colour.normalized()? {
        BarColour::Solid(value) => match str_to_colour(value) {
            Ok(colour) => Some(BarFill::Solid(colour)),
            Err(_err) => {
                crate::warn!("ignoring bar colour: {_err}");
                None
            }
        },
        BarColour::Gradient(stops) => {
            let mut colours = Vec::with_capacity(stops.len());
            for stop in stops {
                match str_to_colour(stop) {
                    Ok(colour) => colours.push(colour),
                    Err(_err) => {
                        crate::warn!("ignoring gradient stop: {_err}");
                    }
                }
            }

            match colours.len() {
                0 => None,
                1 => Some(BarFill::Solid(colours[0])),
                _ => Some(BarFill::Gradient(colours)),
            }
        }
    }
}

/// Hands out colours for ids that never had one. The palette is used first,
/// in order; after that, colours are spread around the hue wheel by the
/// golden angle so neighbours stay distinct.
#[derive(Clone, Debug)]
pub struct ColourPicker {
    palette: Vec<Color>,
    handed_out: usize,
}

impl ColourPicker {
    const GOLDEN_ANGLE: f64 = 137.507_764;

    pub fn new(palette: Vec<Color>) -> Self {
        Self {
            palette,
            handed_out: 0,
        }
    }

    pub fn next_colour(&mut self) -> Color {
        let index = self.handed_out;
        self.handed_out += 1;

        match self.palette.get(index) {
            Some(colour) => *colour,
            None => {
                let n = index - self.palette.len();
                let hue = (n as f64 * Self::GOLDEN_ANGLE + 15.0) % 360.0;
                hsl_to_rgb(hue, 0.65, 0.6)
            }
        }
    }
}

/// `hue` is in degrees, `saturation` and `lightness` are in `0.0..=1.0`.
fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Color {
    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector % 2.0 - 1.0).abs());

    let (r, g, b) = match sector as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    let m = lightness - chroma / 2.0;
    let to_u8 = |c: f64| ((c + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Color::Rgb(to_u8(r), to_u8(g), to_u8(b))
}
