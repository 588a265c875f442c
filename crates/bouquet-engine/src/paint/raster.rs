//! CPU rasterization of gradient fills.
//!
//! Mirrors the WGSL programs in `render/shaders` so that widgets can produce
//! a texture without a GPU. Output is row-major RGBA8, row 0 at the top.
//! Pixel `(x, y)` is evaluated at `u = x / (w - 1)`, `v = y / (h - 1)`, so the
//! corner pixels carry the exact corner colors.

use super::{AlphaMode, Color, GradientTexture};

/// Corner colors of a bilinear gradient.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Corners {
    pub top_left: Color,
    pub top_right: Color,
    pub bottom_left: Color,
    pub bottom_right: Color,
}

/// Owned RGBA8 image.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelBuffer {
    fn from_fn(width: u32, height: u32, mut f: impl FnMut(f32, f32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            let v = unit(y, height);
            for x in 0..width {
                data.extend_from_slice(&f(unit(x, width), v));
            }
        }
        Self { width, height, data }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Flat RGBA8 bytes, `4 * width * height` long.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_pixels(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = 4 * (y as usize * self.width as usize + x as usize);
        let p = &self.data[i..i + 4];
        Some([p[0], p[1], p[2], p[3]])
    }
}

#[inline]
fn unit(i: u32, n: u32) -> f32 {
    if n <= 1 { 0.0 } else { i as f32 / (n - 1) as f32 }
}

/// Four-corner gradient: mix across x on the top and bottom edges, then across y.
pub fn render_bilinear(width: u32, height: u32, corners: &Corners, alpha: AlphaMode) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |u, v| {
        let top = corners.top_left.lerp(corners.top_right, u);
        let bottom = corners.bottom_left.lerp(corners.bottom_right, u);
        top.lerp(bottom, v).to_rgba8(alpha)
    })
}

/// Two-color radial gradient; the border color is reached at the inscribed circle.
pub fn render_radial(
    width: u32,
    height: u32,
    center: Color,
    border: Color,
    alpha: AlphaMode,
) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |u, v| {
        let (dx, dy) = (u - 0.5, v - 0.5);
        let d = ((dx * dx + dy * dy).sqrt() * 2.0).clamp(0.0, 1.0);
        center.lerp(border, d).to_rgba8(alpha)
    })
}

/// Horizontal lookup of a resampled gradient texture. Texels are copied as is.
pub fn render_ramp(width: u32, height: u32, texture: &GradientTexture) -> PixelBuffer {
    PixelBuffer::from_fn(width, height, |u, _| texture.sample(u))
}
