//! Color input parsing.
//!
//! Accepted inputs form a closed set (see [`ColorInput`]); everything else is a
//! [`ColorError`]. Parsing is a pure function with no registry or global state.

use super::named;
use super::{Color, ColorError};

/// Any value a caller may offer as a color.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// No value (`None` / JSON `null`). Always rejected.
    Missing,
    /// A color keyword (`"red"`) or hex string (`"#ff000080"`).
    Text(String),
    /// 3 (opaque) or 4 numeric components in `[0, 1]`.
    Components(Vec<f32>),
    /// An already validated color.
    Color(Color),
    /// Some other dynamic value; carries a short description of what it was.
    Unsupported(&'static str),
}

impl ColorInput {
    /// Classifies a JSON value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => ColorInput::Missing,
            Value::String(s) => ColorInput::Text(s.clone()),
            Value::Array(items) => {
                let mut components = Vec::with_capacity(items.len());
                for item in items {
                    match item.as_f64() {
                        Some(v) => components.push(v as f32),
                        None => return ColorInput::Unsupported("an array with non-numeric items"),
                    }
                }
                ColorInput::Components(components)
            }
            Value::Bool(_) => ColorInput::Unsupported("a boolean"),
            Value::Number(_) => ColorInput::Unsupported("a number"),
            Value::Object(_) => ColorInput::Unsupported("an object"),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(s: &str) -> Self {
        ColorInput::Text(s.to_owned())
    }
}

impl From<String> for ColorInput {
    fn from(s: String) -> Self {
        ColorInput::Text(s)
    }
}

impl From<[f32; 4]> for ColorInput {
    fn from(c: [f32; 4]) -> Self {
        ColorInput::Components(c.to_vec())
    }
}

impl From<[f32; 3]> for ColorInput {
    fn from(c: [f32; 3]) -> Self {
        ColorInput::Components(c.to_vec())
    }
}

impl From<&[f32]> for ColorInput {
    fn from(c: &[f32]) -> Self {
        ColorInput::Components(c.to_vec())
    }
}

impl From<Vec<f32>> for ColorInput {
    fn from(c: Vec<f32>) -> Self {
        ColorInput::Components(c)
    }
}

impl From<Color> for ColorInput {
    fn from(c: Color) -> Self {
        ColorInput::Color(c)
    }
}

impl<T: Into<ColorInput>> From<Option<T>> for ColorInput {
    fn from(v: Option<T>) -> Self {
        v.map_or(ColorInput::Missing, Into::into)
    }
}

/// Parses any accepted color input into a straight-alpha [`Color`].
pub fn parse_color(input: impl Into<ColorInput>) -> Result<Color, ColorError> {
    match input.into() {
        ColorInput::Missing => Err(ColorError::Missing),
        ColorInput::Text(s) => parse_text(&s),
        ColorInput::Components(c) => from_components(&c),
        ColorInput::Color(c) => from_components(&c.to_array()),
        ColorInput::Unsupported(what) => Err(ColorError::Unsupported(what)),
    }
}

fn parse_text(s: &str) -> Result<Color, ColorError> {
    let trimmed = s.trim();
    if let Some(digits) = trimmed.strip_prefix('#') {
        return parse_hex(digits).ok_or_else(|| ColorError::InvalidHex(s.to_owned()));
    }

    let name = trimmed.to_ascii_lowercase();
    named::lookup(&name)
        .map(|[r, g, b, a]| Color::from_srgb_u8(r, g, b, a))
        .ok_or_else(|| ColorError::UnknownName(s.to_owned()))
}

fn parse_hex(digits: &str) -> Option<Color> {
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    // Short forms repeat each nibble: "f80" == "ff8800".
    let expanded: String = match digits.len() {
        3 | 4 => digits.chars().flat_map(|c| [c, c]).collect(),
        6 | 8 => digits.to_owned(),
        _ => return None,
    };

    let byte = |i: usize| u8::from_str_radix(&expanded[i..i + 2], 16).ok();
    let r = byte(0)?;
    let g = byte(2)?;
    let b = byte(4)?;
    let a = if expanded.len() == 8 { byte(6)? } else { 255 };
    Some(Color::from_srgb_u8(r, g, b, a))
}

fn from_components(c: &[f32]) -> Result<Color, ColorError> {
    if c.len() != 3 && c.len() != 4 {
        return Err(ColorError::ComponentCount(c.len()));
    }
    for (index, &value) in c.iter().enumerate() {
        if !(0.0..=1.0).contains(&value) {
            return Err(ColorError::ComponentOutOfRange { index, value });
        }
    }
    let a = c.get(3).copied().unwrap_or(1.0);
    Ok(Color::new(c[0], c[1], c[2], a))
}
