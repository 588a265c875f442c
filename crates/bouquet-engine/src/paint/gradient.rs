use std::fmt;

use super::{parse_color, Color, ColorError, ColorInput};

/// A single gradient stop: a position along the gradient axis and a color.
///
/// Invariants:
/// - `position` is always in `[0, 1]`; setters clamp instead of failing.
/// - `color` always went through [`parse_color`], so channels are in `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ColorStop {
    position: f64,
    color: Color,
}

impl Default for ColorStop {
    /// Position `0.0`, opaque white.
    fn default() -> Self {
        Self {
            position: 0.0,
            color: Color::white(),
        }
    }
}

impl ColorStop {
    /// Creates a stop, clamping `position` and parsing `color`.
    pub fn new(position: f64, color: impl Into<ColorInput>) -> Result<Self, ColorError> {
        Ok(Self {
            position: clamp_position(position),
            color: parse_color(color)?,
        })
    }

    /// Creates a stop from an already validated color. Only the position is clamped.
    #[inline]
    pub fn from_color(position: f64, color: Color) -> Self {
        Self {
            position: clamp_position(position),
            color,
        }
    }

    #[inline]
    pub fn position(&self) -> f64 {
        self.position
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Sets the position, silently clamping it into `[0, 1]`.
    #[inline]
    pub fn set_position(&mut self, position: f64) {
        self.position = clamp_position(position);
    }

    /// Sets the color. On error the previous color is kept.
    pub fn set_color(&mut self, color: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.color = parse_color(color)?;
        Ok(())
    }

    /// Flat `(position, r, g, b, a)` tuple.
    #[inline]
    pub fn data(&self) -> (f64, f32, f32, f32, f32) {
        let Color { r, g, b, a } = self.color;
        (self.position, r, g, b, a)
    }
}

impl fmt::Display for ColorStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "<ColorStop(position={:?}, color={:?})>",
            self.position,
            self.color.to_array()
        )
    }
}

#[inline]
fn clamp_position(p: f64) -> f64 {
    if p.is_nan() { 0.0 } else { p.clamp(0.0, 1.0) }
}
