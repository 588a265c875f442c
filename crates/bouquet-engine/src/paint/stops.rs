use serde_json::Value;

use super::{parse_color, ColorInput, ColorStop, GradientError};

/// Maximum number of stops; equals the reference lookup texture resolution.
pub const MAX_STOPS: usize = 1024;

/// Validated, insertion-ordered stop collection.
///
/// Invariants:
/// - `len() <= max` (checked whenever the collection is assigned).
/// - duplicate and out-of-order positions are allowed; consumers sort.
#[derive(Debug, Clone, PartialEq)]
pub struct StopList {
    stops: Vec<ColorStop>,
    max: usize,
}

impl Default for StopList {
    fn default() -> Self {
        Self::empty(MAX_STOPS)
    }
}

impl StopList {
    /// An empty list that accepts at most `max` stops.
    pub fn empty(max: usize) -> Self {
        Self { stops: Vec::new(), max }
    }

    /// Validates `stops` against the default capacity.
    pub fn new(stops: Vec<ColorStop>) -> Result<Self, GradientError> {
        Self::with_max(stops, MAX_STOPS)
    }

    /// Validates `stops` against `max`.
    pub fn with_max(stops: Vec<ColorStop>, max: usize) -> Result<Self, GradientError> {
        check_len(stops.len(), max)?;
        Ok(Self { stops, max })
    }

    /// Builds a list from a dynamic JSON array.
    ///
    /// Each element must be an object `{"position": <number>, "color": <color>}`;
    /// `position` defaults to `0.0` and `color` to white when absent. Any other
    /// element is a type error. The length check runs before elements are inspected.
    pub fn from_json(value: &Value, max: usize) -> Result<Self, GradientError> {
        let items = value.as_array().ok_or(GradientError::NotAStop {
            index: 0,
            found: json_kind(value),
        })?;
        check_len(items.len(), max)?;

        let mut stops = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            stops.push(stop_from_json(index, item)?);
        }
        Ok(Self { stops, max })
    }

    #[inline]
    pub fn as_slice(&self) -> &[ColorStop] {
        &self.stops
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    pub fn iter(&self) -> impl Iterator<Item = &ColorStop> {
        self.stops.iter()
    }
}

fn check_len(len: usize, max: usize) -> Result<(), GradientError> {
    if len > max {
        return Err(GradientError::TooManyStops { len, max });
    }
    Ok(())
}

fn stop_from_json(index: usize, item: &Value) -> Result<ColorStop, GradientError> {
    let Some(obj) = item.as_object() else {
        return Err(GradientError::NotAStop {
            index,
            found: json_kind(item),
        });
    };

    let position = match obj.get("position") {
        None => 0.0,
        Some(v) => v.as_f64().ok_or(GradientError::NotAStop {
            index,
            found: "an object with a non-numeric position",
        })?,
    };

    let color = match obj.get("color") {
        None => ColorStop::default().color(),
        Some(v) => parse_color(ColorInput::from_json(v))?,
    };

    Ok(ColorStop::from_color(position, color))
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
