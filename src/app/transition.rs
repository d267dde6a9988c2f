//! Animates bars between two projections, so that bars slide into their new
//! rank and grow or shrink to their new width.

use std::time::{Duration, Instant};

use hashbrown::HashMap;

use super::projection::{BarInstruction, BarWidth};

/// A bar part way through a transition.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimatedBar {
    pub instruction: BarInstruction,

    /// Rows from the top of the chart area; fractional while moving.
    pub row: f64,

    /// Fraction of the chart width.
    pub width_ratio: f64,
}

impl AnimatedBar {
    /// The bar's width in cells for a chart `available` cells wide. A bar is
    /// never drawn narrower than [`BarWidth::MINIMUM_VISIBLE_CELLS`].
    pub fn cells(&self, available: f64) -> f64 {
        let minimum = BarWidth::MINIMUM_VISIBLE_CELLS.min(available);
        (self.width_ratio * available).clamp(minimum, available)
    }
}

#[derive(Clone, Copy, Debug)]
struct Track {
    from_row: f64,
    from_ratio: f64,
}

/// Interpolates from whatever was on screen to the latest projection.
#[derive(Debug)]
pub struct Transition {
    duration: Duration,
    started: Instant,
    targets: Vec<BarInstruction>,
    tracks: HashMap<String, Track>,
}

impl Transition {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            started: Instant::now(),
            targets: Vec::new(),
            tracks: HashMap::new(),
        }
    }

    /// Starts moving towards `targets`. Bars that are already on screen start
    /// from where they are at `now`, even mid-transition. New bars start at
    /// their target row with no width.
    pub fn retarget(&mut self, targets: Vec<BarInstruction>, now: Instant) {
        let current: HashMap<String, (f64, f64)> = self
            .sample(now)
            .into_iter()
            .map(|bar| (bar.instruction.id, (bar.row, bar.width_ratio)))
            .collect();

        self.tracks = targets
            .iter()
            .map(|target| {
                let (from_row, from_ratio) = current
                    .get(&target.id)
                    .copied()
                    .unwrap_or((f64::from(target.row_offset), 0.0));

                (
                    target.id.clone(),
                    Track {
                        from_row,
                        from_ratio,
                    },
                )
            })
            .collect();

        self.targets = targets;
        self.started = now;
    }

    /// Drops every bar.
    pub fn clear(&mut self) {
        self.targets.clear();
        self.tracks.clear();
    }

    /// Eased progress of the current transition, from `0.0` to `1.0`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }

        let elapsed = now.saturating_duration_since(self.started);
        let linear = (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);

        ease_in_out(linear)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        !self.targets.is_empty() && self.progress(now) < 1.0
    }

    /// Where every bar is at `now`, in rank order.
    pub fn sample(&self, now: Instant) -> Vec<AnimatedBar> {
        let t = self.progress(now);

        self.targets
            .iter()
            .map(|target| {
                let to_row = f64::from(target.row_offset);
                let to_ratio = target.width.ratio();

                let (row, width_ratio) = match self.tracks.get(&target.id) {
                    Some(track) if t < 1.0 => (
                        lerp(track.from_row, to_row, t),
                        lerp(track.from_ratio, to_ratio, t),
                    ),
                    _ => (to_row, to_ratio),
                };

                AnimatedBar {
                    instruction: target.clone(),
                    row,
                    width_ratio,
                }
            })
            .collect()
    }
}

fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Cubic ease-in-out over `0.0..=1.0`.
fn ease_in_out(t: f64) -> f64 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}
