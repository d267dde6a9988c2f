//! The chart's state, and how it reacts to timer and key events.

pub mod colour;
pub mod frame_store;
pub mod projection;
pub mod transition;

use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use frame_store::{Advance, FrameStore};
use projection::{project, BarLayout};
use transition::{AnimatedBar, Transition};
use tui::style::Color;

use crate::{
    data::{load_frames, Frame},
    options::ChartOptions,
    timer::AdvanceTimer,
};

/// How many frames are shown without waiting a full period.
const BOOTSTRAP_FRAMES: usize = 2;

/// Owns everything about a running chart: the frames, the advance timer and the
/// animation between frames.
///
/// Dropping the [`App`] drops its timer, so no advance can happen afterwards.
pub struct App {
    store: FrameStore,
    transition: Transition,
    layout: BarLayout,
    options: ChartOptions,
    timer: AdvanceTimer,
    is_paused: bool,
    data_path: Option<PathBuf>,
    reload_error: Option<String>,
}

impl App {
    pub fn new(
        frames: Vec<Frame>, options: ChartOptions, palette: Vec<Color>, timer: AdvanceTimer,
    ) -> Self {
        let layout = BarLayout {
            bar_height: options.bar_height,
            bar_gap_size: options.bar_gap_size,
            baseline: options.baseline,
        };

        Self {
            store: FrameStore::new(frames, palette, options.baseline),
            transition: Transition::new(options.transition_duration),
            layout,
            options,
            timer,
            is_paused: false,
            data_path: None,
            reload_error: None,
        }
    }

    /// Sets the file that [`App::restart`] reloads frames from.
    pub fn with_data_path(mut self, data_path: PathBuf) -> Self {
        self.data_path = Some(data_path);
        self
    }

    /// Schedules the first advance after the startup delay. The second frame
    /// follows it after the same delay.
    pub fn start(&mut self) {
        self.timer.arm(self.options.start_running_timeout);
    }

    /// Handles a fired timer. Returns whether anything happened; events from
    /// cancelled or replaced arms are ignored.
    pub fn on_advance_event(&mut self, generation: u64, now: Instant) -> bool {
        if !self.timer.fire(generation) {
            crate::debug!("ignoring stale advance {generation}");
            return false;
        }

        self.advance(now);
        true
    }

    fn advance(&mut self, now: Instant) {
        match self.store.advance() {
            Advance::Continue => {
                self.retarget(now);
                if !self.is_paused {
                    self.timer.arm(self.next_delay());
                }
            }
            Advance::Finished => {
                self.retarget(now);
                self.timer.cancel();
            }
            Advance::Halted => {
                self.timer.cancel();
            }
        }
    }

    /// The first two frames both follow the startup delay; later frames wait a
    /// full period.
    fn next_delay(&self) -> Duration {
        if self.store.active_index() < BOOTSTRAP_FRAMES {
            self.options.start_running_timeout
        } else {
            self.options.iteration_timeout
        }
    }

    fn retarget(&mut self, now: Instant) {
        let bars = project(
            self.store.display(),
            self.store.highest_magnitude(),
            &self.layout,
        );
        self.transition.retarget(bars, now);
    }

    /// Pauses or resumes. Resuming waits a full period before the next frame.
    pub fn toggle_pause(&mut self) {
        if self.is_paused {
            self.is_paused = false;
            if !self.store.is_halted() {
                self.timer.arm(self.options.iteration_timeout);
            }
        } else {
            self.is_paused = true;
            self.timer.cancel();
        }
    }

    /// Shows the next frame right away.
    pub fn step(&mut self) {
        if self.store.is_halted() {
            return;
        }

        self.timer.cancel();
        self.advance(Instant::now());
    }

    /// Goes back to the first frame, reloading the frames from disk if they
    /// came from a file. If the reload fails the current frames are replayed.
    pub fn restart(&mut self) {
        let frames = match &self.data_path {
            Some(path) => match load_frames(path) {
                Ok(frames) => {
                    self.reload_error = None;
                    frames
                }
                Err(err) => {
                    crate::error!("failed to reload frames: {err}");
                    self.reload_error = Some(err.to_string());
                    self.store.frames().to_vec()
                }
            },
            None => self.store.frames().to_vec(),
        };

        self.store.set_frames(frames);
        self.transition.clear();
        self.is_paused = false;
        self.timer.arm(self.options.start_running_timeout);
    }

    /// The bars to draw at `now`.
    pub fn bars(&self, now: Instant) -> Vec<AnimatedBar> {
        self.transition.sample(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.transition.is_animating(now)
    }

    pub fn current_frame_name(&self) -> Option<&str> {
        self.store.current_frame().map(|frame| frame.name.as_str())
    }

    /// How many frames have been shown.
    pub fn frames_shown(&self) -> usize {
        self.store.active_index()
    }

    pub fn frame_count(&self) -> usize {
        self.store.frame_count()
    }

    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    pub fn is_finished(&self) -> bool {
        self.store.is_halted()
    }

    /// Whether an advance is scheduled.
    pub fn is_running(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn baseline(&self) -> Option<f64> {
        self.options.baseline
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn reload_error(&self) -> Option<&str> {
        self.reload_error.as_deref()
    }
}
