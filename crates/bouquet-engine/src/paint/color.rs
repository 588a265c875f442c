use serde::{Deserialize, Serialize};

/// Straight-alpha RGBA color with channels in `[0, 1]`.
///
/// Invariant:
/// - values produced by [`parse_color`](super::parse_color) are finite and in range.
/// - `rgb` is NOT multiplied by `a`; premultiplication happens when quantizing
///   (see [`AlphaMode`]).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

/// How alpha is folded into 8-bit output pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlphaMode {
    /// `rgb * a`, matching premultiplied-alpha blending on the GPU.
    #[default]
    Premultiplied,
    /// Channels are written as they are.
    Straight,
}

impl Color {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn transparent() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    #[inline]
    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }

    /// Creates a color from straight sRGB bytes (`0`–`255`).
    #[inline]
    pub fn from_srgb_u8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, a as f32 / 255.0)
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Channelwise linear interpolation; `t = 0` yields `self`, `t = 1` yields `other`.
    #[inline]
    pub fn lerp(self, other: Color, t: f32) -> Self {
        Self::new(
            self.r + (other.r - self.r) * t,
            self.g + (other.g - self.g) * t,
            self.b + (other.b - self.b) * t,
            self.a + (other.a - self.a) * t,
        )
    }

    /// Quantizes to RGBA8 with `round(c * 255)`, clamped to `[0, 255]`.
    #[inline]
    pub fn to_rgba8(self, alpha: AlphaMode) -> [u8; 4] {
        quantize_rgba(self.to_array().map(f64::from), alpha)
    }

    /// [`lerp`](Self::lerp) followed by [`to_rgba8`](Self::to_rgba8), evaluated in
    /// `f64`. Only the final bytes are narrowed.
    pub fn lerp_rgba8(self, other: Color, t: f64, alpha: AlphaMode) -> [u8; 4] {
        let a = self.to_array().map(f64::from);
        let b = other.to_array().map(f64::from);
        quantize_rgba(std::array::from_fn(|i| a[i] + (b[i] - a[i]) * t), alpha)
    }
}

fn quantize_rgba([r, g, b, a]: [f64; 4], alpha: AlphaMode) -> [u8; 4] {
    let (r, g, b) = match alpha {
        AlphaMode::Premultiplied => (r * a, g * a, b * a),
        AlphaMode::Straight => (r, g, b),
    };
    [quantize(r), quantize(g), quantize(b), quantize(a)]
}

#[inline]
fn quantize(c: f64) -> u8 {
    // NaN casts to 0.
    (c * 255.0).round().clamp(0.0, 255.0) as u8
}
