//! The frame store, which owns the frames being replayed and advances through
//! them one at a time.

use hashbrown::HashMap;
use indexmap::IndexMap;
use tui::style::Color;

use super::colour::{resolve_fill, BarFill, ColourPicker};
use crate::data::Frame;

/// A value as it is currently displayed, with its colour resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayPoint {
    pub id: String,
    pub value: f64,
    pub label: Option<String>,
    pub fill: BarFill,
}

impl DisplayPoint {
    /// The label to draw, falling back to the id.
    pub fn display_label(&self) -> &str {
        match &self.label {
            Some(label) if !label.trim().is_empty() => label,
            _ => &self.id,
        }
    }
}

/// The result of an [`FrameStore::advance`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Advance {
    /// A frame was published and there are more to come.
    Continue,

    /// The last frame was published. The store is now halted.
    Finished,

    /// Nothing happened, as there are no frames left.
    Halted,
}

/// Holds the frames and the currently displayed state.
///
/// The colour memory outlives any one sequence of frames, so an id keeps its
/// colour even if the frames are swapped out with [`FrameStore::set_frames`].
#[derive(Debug)]
pub struct FrameStore {
    frames: Vec<Frame>,
    active_index: usize,
    display: IndexMap<String, DisplayPoint>,
    highest_magnitude: f64,
    colour_memory: HashMap<String, BarFill>,
    picker: ColourPicker,
    halted: bool,
    baseline: f64,
}

impl FrameStore {
    pub fn new(frames: Vec<Frame>, palette: Vec<Color>, baseline: Option<f64>) -> Self {
        Self {
            frames,
            active_index: 0,
            display: IndexMap::new(),
            highest_magnitude: 0.0,
            colour_memory: HashMap::new(),
            picker: ColourPicker::new(palette),
            halted: false,
            baseline: baseline.unwrap_or(0.0),
        }
    }

    /// Replaces the frames, and resets everything but the colour memory.
    pub fn set_frames(&mut self, frames: Vec<Frame>) {
        self.frames = frames;
        self.active_index = 0;
        self.display.clear();
        self.highest_magnitude = 0.0;
        self.halted = false;
    }

    /// Publishes the frame at the active index and moves on to the next one.
    ///
    /// Once there is nothing left to publish, this halts and every later call
    /// is a no-op that returns [`Advance::Halted`].
    pub fn advance(&mut self) -> Advance {
        if self.halted {
            return Advance::Halted;
        }

        let Some(frame) = self.frames.get(self.active_index) else {
            self.halted = true;
            return Advance::Halted;
        };

        let mut display = IndexMap::with_capacity(frame.values.len());
        let mut highest_magnitude = 0.0;

        for point in &frame.values {
            let fill = match point.color.as_ref().and_then(resolve_fill) {
                Some(fill) => {
                    self.colour_memory.insert(point.id.clone(), fill.clone());
                    fill
                }
                None => self
                    .colour_memory
                    .entry(point.id.clone())
                    .or_insert_with(|| BarFill::Solid(self.picker.next_colour()))
                    .clone(),
            };

            let magnitude = (point.value - self.baseline).abs();
            if magnitude > highest_magnitude {
                highest_magnitude = magnitude;
            }

            display.insert(
                point.id.clone(),
                DisplayPoint {
                    id: point.id.clone(),
                    value: point.value,
                    label: point.label.clone(),
                    fill,
                },
            );
        }

        self.display = display;
        self.highest_magnitude = highest_magnitude;
        self.active_index += 1;

        crate::debug!(
            "advanced to frame {}/{} ('{}')",
            self.active_index,
            self.frames.len(),
            frame.name
        );

        if self.active_index == self.frames.len() {
            self.halted = true;
            Advance::Finished
        } else {
            Advance::Continue
        }
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn display(&self) -> &IndexMap<String, DisplayPoint> {
        &self.display
    }

    pub fn highest_magnitude(&self) -> f64 {
        self.highest_magnitude
    }

    /// How many frames have been published so far.
    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn is_halted(&self) -> bool {
        self.halted
    }

    /// The most recently published frame, if any.
    pub fn current_frame(&self) -> Option<&Frame> {
        self.active_index
            .checked_sub(1)
            .and_then(|index| self.frames.get(index))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::data::{BarColour, ValuePoint};

    fn frame(name: &str, values: Vec<ValuePoint>) -> Frame {
        Frame {
            name: name.to_string(),
            values,
        }
    }

    fn store(frames: Vec<Frame>) -> FrameStore {
        FrameStore::new(frames, vec![Color::Cyan, Color::Magenta], None)
    }

    fn fill_of(store: &FrameStore, id: &str) -> BarFill {
        store.display()[id].fill.clone()
    }

    #[test]
    fn advancing_through_every_frame_halts() {
        let frames = (0..3)
            .map(|i| frame(&i.to_string(), vec![ValuePoint::new("a", i as f64)]))
            .collect();
        let mut store = store(frames);

        assert_eq!(store.advance(), Advance::Continue);
        assert_eq!(store.advance(), Advance::Continue);
        assert_eq!(store.advance(), Advance::Finished);
        assert!(store.is_halted());
        assert_eq!(store.active_index(), 3);

        let display = store.display().clone();
        let highest = store.highest_magnitude();

        assert_eq!(store.advance(), Advance::Halted);
        assert_eq!(store.active_index(), 3);
        assert_eq!(store.display(), &display);
        assert_eq!(store.highest_magnitude(), highest);
        assert_eq!(store.current_frame().map(|f| f.name.as_str()), Some("2"));
    }

    #[test]
    fn empty_frames_halt_immediately() {
        let mut store = store(vec![]);

        assert_eq!(store.advance(), Advance::Halted);
        assert!(store.is_halted());
        assert!(store.display().is_empty());
        assert_eq!(store.active_index(), 0);
        assert!(store.current_frame().is_none());
    }

    #[test]
    fn explicit_colour_sticks() {
        let mut store = store(vec![
            frame(
                "0",
                vec![ValuePoint::new("a", 1.0).with_colour(BarColour::Solid("#ff0000".into()))],
            ),
            frame("1", vec![ValuePoint::new("a", 2.0)]),
        ]);

        store.advance();
        let first = fill_of(&store, "a");
        assert_eq!(first, BarFill::Solid(Color::Rgb(255, 0, 0)));

        store.advance();
        assert_eq!(fill_of(&store, "a"), first);
    }

    #[test]
    fn explicit_override_replaces_memory() {
        let mut store = store(vec![
            frame("0", vec![ValuePoint::new("a", 1.0)]),
            frame(
                "1",
                vec![ValuePoint::new("a", 1.0).with_colour(BarColour::Solid("blue".into()))],
            ),
            frame("2", vec![ValuePoint::new("a", 1.0)]),
        ]);

        store.advance();
        assert_eq!(fill_of(&store, "a"), BarFill::Solid(Color::Cyan));

        store.advance();
        assert_eq!(fill_of(&store, "a"), BarFill::Solid(Color::Blue));

        store.advance();
        assert_eq!(fill_of(&store, "a"), BarFill::Solid(Color::Blue));
    }

    #[test]
    fn generated_colours_are_stable_per_id() {
        let mut store = store(vec![
            frame("0", vec![ValuePoint::new("a", 1.0), ValuePoint::new("b", 2.0)]),
            frame("1", vec![ValuePoint::new("b", 1.0)]),
            frame(
                "2",
                vec![
                    ValuePoint::new("c", 1.0),
                    ValuePoint::new("b", 1.0),
                    ValuePoint::new("a", 1.0),
                ],
            ),
        ]);

        store.advance();
        let a = fill_of(&store, "a");
        let b = fill_of(&store, "b");
        assert_ne!(a, b);

        store.advance();
        assert!(!store.display().contains_key("a"));
        assert_eq!(fill_of(&store, "b"), b);

        store.advance();
        assert_eq!(fill_of(&store, "a"), a);
        assert_eq!(fill_of(&store, "b"), b);
        assert!(matches!(fill_of(&store, "c"), BarFill::Solid(Color::Rgb(..))));
    }

    #[test]
    fn invalid_colour_falls_back_to_generated() {
        let mut store = store(vec![frame(
            "0",
            vec![ValuePoint::new("a", 1.0).with_colour(BarColour::Solid("nope".into()))],
        )]);

        store.advance();
        assert_eq!(fill_of(&store, "a"), BarFill::Solid(Color::Cyan));
    }

    #[test]
    fn highest_magnitude_uses_absolute_values() {
        let mut store = store(vec![
            frame(
                "0",
                vec![
                    ValuePoint::new("a", 10.0),
                    ValuePoint::new("b", -40.0),
                    ValuePoint::new("c", f64::NAN),
                ],
            ),
            frame("1", vec![ValuePoint::new("a", 5.0)]),
        ]);

        store.advance();
        assert_eq!(store.highest_magnitude(), 40.0);

        store.advance();
        assert_eq!(store.highest_magnitude(), 5.0);
    }

    #[test]
    fn highest_magnitude_is_relative_to_baseline() {
        let mut store = FrameStore::new(
            vec![frame(
                "0",
                vec![ValuePoint::new("a", 110.0), ValuePoint::new("b", 70.0)],
            )],
            vec![],
            Some(100.0),
        );

        store.advance();
        assert_eq!(store.highest_magnitude(), 30.0);
    }

    #[test]
    fn replacing_frames_resets_state_but_not_colours() {
        let mut store = store(vec![frame("0", vec![ValuePoint::new("a", 1.0)])]);
        assert_eq!(store.advance(), Advance::Finished);
        let a = fill_of(&store, "a");

        store.set_frames(vec![
            frame("new 0", vec![ValuePoint::new("a", 3.0)]),
            frame("new 1", vec![ValuePoint::new("a", 4.0)]),
        ]);
        assert!(!store.is_halted());
        assert_eq!(store.active_index(), 0);
        assert!(store.display().is_empty());
        assert_eq!(store.highest_magnitude(), 0.0);
        assert_eq!(store.frame_count(), 2);

        assert_eq!(store.advance(), Advance::Continue);
        assert_eq!(fill_of(&store, "a"), a);
        assert_eq!(store.display()["a"].value, 3.0);
    }

    #[test]
    fn gradients_are_kept() {
        let mut store = store(vec![frame(
            "0",
            vec![ValuePoint::new("a", 1.0)
                .with_label("Alpha")
                .with_colour(BarColour::Gradient(vec!["red".into(), "blue".into()]))],
        )]);

        store.advance();
        let point = &store.display()["a"];
        assert_eq!(point.fill, BarFill::Gradient(vec![Color::Red, Color::Blue]));
        assert_eq!(point.display_label(), "Alpha");
    }
}
