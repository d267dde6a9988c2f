//! The frames a chart replays, and how they are loaded from disk.
//!
//! A frame file is a JSON array of frames:
//!
//! ```json
//! [
//!   {
//!     "name": "2001",
//!     "values": [
//!       { "id": "de", "value": 10, "label": "Germany", "color": "#e06c75" },
//!       { "id": "fr", "value": 12.5, "color": ["#61afef", "#c678dd"] }
//!     ]
//!   }
//! ]
//! ```

use std::{borrow::Cow, fs, path::Path};

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// One named snapshot of values, representing one animation step.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
pub struct Frame {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub values: Vec<ValuePoint>,
}

/// One labeled, coloured value within a [`Frame`], keyed by a stable id.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ValuePoint {
    pub id: String,

    /// Anything that isn't a number (or a numeric string) loads as NaN.
    #[serde(default = "nan", deserialize_with = "value_or_nan")]
    pub value: f64,

    #[serde(default)]
    pub label: Option<String>,

    #[serde(default, alias = "colour")]
    pub color: Option<BarColour>,
}

/// A colour as given by a frame file: either a single colour or an ordered
/// list of gradient stops.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum BarColour {
    Solid(String),
    Gradient(Vec<String>),
}

impl BarColour {
    /// Collapses degenerate gradients: one stop is a solid colour, no stops
    /// is no colour at all.
    pub fn normalized(&self) -> Option<Cow<'_, BarColour>> {
        match self {
            BarColour::Solid(_) => Some(Cow::Borrowed(self)),
            BarColour::Gradient(stops) => match stops.as_slice() {
                [] => None,
                [single] => Some(Cow::Owned(BarColour::Solid(single.clone()))),
                _ => Some(Cow::Borrowed(self)),
            },
        }
    }
}

impl ValuePoint {
    pub fn new<I: Into<String>>(id: I, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            label: None,
            color: None,
        }
    }

    pub fn with_label<L: Into<String>>(mut self, label: L) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_colour(mut self, colour: BarColour) -> Self {
        self.color = Some(colour);
        self
    }
}

fn nan() -> f64 {
    f64::NAN
}

fn value_or_nan<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = serde_json::Value::deserialize(deserializer)?;

    Ok(match raw {
        serde_json::Value::Number(num) => num.as_f64().unwrap_or(f64::NAN),
        serde_json::Value::String(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
        _ => f64::NAN,
    })
}

/// An error while loading frames.
#[derive(Debug)]
pub enum DataError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for DataError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataError::Io(reason) => write!(f, "Unable to read the data file: {reason}"),
            DataError::Parse(reason) => write!(f, "Unable to parse the data file: {reason}"),
        }
    }
}

impl std::error::Error for DataError {}

impl From<std::io::Error> for DataError {
    fn from(err: std::io::Error) -> Self {
        DataError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for DataError {
    fn from(err: serde_json::Error) -> Self {
        DataError::Parse(err.to_string())
    }
}

/// Parses frames from a JSON string.
///
/// Ids are made unique within each frame; if an id repeats, the last value
/// for it wins.
pub fn parse_frames(content: &str) -> Result<Vec<Frame>, DataError> {
    let mut frames: Vec<Frame> = serde_json::from_str(content)?;

    for frame in &mut frames {
        dedup_ids(frame);
    }

    Ok(frames)
}

/// Reads and parses frames from a JSON file at `path`.
pub fn load_frames(path: &Path) -> Result<Vec<Frame>, DataError> {
    let content = fs::read_to_string(path)
        .map_err(|err| DataError::Io(format!("'{}': {err}", path.display())))?;
    let frames = parse_frames(&content)?;

    crate::info!(
        "loaded {} frames from {}",
        frames.len(),
        path.display()
    );

    Ok(frames)
}

fn dedup_ids(frame: &mut Frame) {
    let count = frame.values.len();
    let mut unique: IndexMap<String, ValuePoint> = IndexMap::with_capacity(count);

    for point in frame.values.drain(..) {
        unique.insert(point.id.clone(), point);
    }

    if unique.len() != count {
        crate::warn!(
            "frame '{}' has {} duplicate id(s), keeping the last of each",
            frame.name,
            count - unique.len()
        );
    }

    frame.values = unique.into_values().collect();
}
