//! Projects the displayed values into an ordered list of bars to draw.

use indexmap::IndexMap;

use super::{colour::BarFill, frame_store::DisplayPoint};
use crate::constants::BAR_HEADROOM_RATIO;

/// How wide a bar is, relative to the chart width.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BarWidth {
    /// A percentage of the available width, always finite and positive.
    Percent(f64),

    /// The value couldn't be scaled (e.g. it was NaN, or everything was zero),
    /// so draw the smallest visible bar instead.
    MinimumVisible,
}

impl BarWidth {
    /// Cells taken by [`BarWidth::MinimumVisible`].
    pub const MINIMUM_VISIBLE_CELLS: f64 = 1.0;

    /// The width as a fraction of the chart, where the minimum width counts as
    /// zero. Used to animate between two widths.
    pub fn ratio(&self) -> f64 {
        match self {
            BarWidth::Percent(percent) => percent / 100.0,
            BarWidth::MinimumVisible => 0.0,
        }
    }
}

/// Which way a bar grows from its axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BarDirection {
    Right,

    /// Only used for values below a set baseline.
    Left,
}

/// Layout settings the projection needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    pub bar_height: u16,
    pub bar_gap_size: u16,
    pub baseline: Option<f64>,
}

/// Everything needed to draw a single bar.
#[derive(Clone, Debug, PartialEq)]
pub struct BarInstruction {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub rank: usize,

    /// Rows from the top of the chart area.
    pub row_offset: u32,
    pub width: BarWidth,
    pub direction: BarDirection,
    pub fill: BarFill,
}

/// Sorts the displayed values by descending value and sizes each one against
/// `highest_magnitude`.
pub fn project(
    display: &IndexMap<String, DisplayPoint>, highest_magnitude: f64, layout: &BarLayout,
) -> Vec<BarInstruction> {
    let baseline = layout.baseline.unwrap_or(0.0);
    let scale_max = highest_magnitude / BAR_HEADROOM_RATIO;
    let stride = u32::from(layout.bar_height) + u32::from(layout.bar_gap_size);

    let mut sorted: Vec<&DisplayPoint> = display.values().collect();
    sorted.sort_by(|a, b| sort_key(b.value).total_cmp(&sort_key(a.value)));

    sorted
        .into_iter()
        .enumerate()
        .map(|(rank, point)| {
            let width_percent = (point.value - baseline).abs() / scale_max * 100.0;
            let width = if width_percent.is_finite() && width_percent > 0.0 {
                BarWidth::Percent(width_percent)
            } else {
                BarWidth::MinimumVisible
            };

            let direction = match layout.baseline {
                Some(baseline) if point.value < baseline => BarDirection::Left,
                _ => BarDirection::Right,
            };

            BarInstruction {
                id: point.id.clone(),
                label: point.display_label().to_string(),
                value: point.value,
                rank,
                row_offset: rank as u32 * stride,
                width,
                direction,
                fill: point.fill.clone(),
            }
        })
        .collect()
}

/// NaN sorts below everything.
fn sort_key(value: f64) -> f64 {
    if value.is_nan() {
        f64::NEG_INFINITY
    } else {
        value
    }
}
