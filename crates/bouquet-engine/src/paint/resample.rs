//! Color stop → 1-D lookup texture resampling.
//!
//! The output is a `width × 1` RGBA8 buffer meant to be sampled with a single
//! normalized coordinate. Texel `i` holds the gradient color at
//! `t = i / (width - 1)`.

use serde::{Deserialize, Serialize};

use super::{AlphaMode, ColorStop, MAX_STOPS};

/// Mapping between stop positions and texel indices.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Position `0.0` is texel `0`.
    #[default]
    Forward,
    /// Position `0.0` is the last texel.
    Reversed,
}

/// Resampler parameters.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResampleConfig {
    /// Number of texels. Also the stop-count limit of gradients using this config.
    pub width: usize,
    pub orientation: Orientation,
    pub alpha: AlphaMode,
}

impl Default for ResampleConfig {
    fn default() -> Self {
        Self {
            width: MAX_STOPS,
            orientation: Orientation::Forward,
            alpha: AlphaMode::Premultiplied,
        }
    }
}

/// Dense RGBA8 lookup texture (`width × 1`).
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct GradientTexture {
    texels: Vec<[u8; 4]>,
}

impl GradientTexture {
    /// A fully transparent texture.
    pub fn transparent(width: usize) -> Self {
        Self {
            texels: vec![[0; 4]; width],
        }
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.texels.len()
    }

    #[inline]
    pub fn height(&self) -> usize {
        1
    }

    #[inline]
    pub fn texels(&self) -> &[[u8; 4]] {
        &self.texels
    }

    /// Flat byte view, `4 * width` bytes in R, G, B, A order.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        self.texels.as_flattened()
    }

    /// Nearest texel for a normalized coordinate; `u` is clamped to `[0, 1]`.
    ///
    /// Returns transparent black for an empty texture.
    pub fn sample(&self, u: f32) -> [u8; 4] {
        let Some(last) = self.texels.len().checked_sub(1) else {
            return [0; 4];
        };
        let u = if u.is_nan() { 0.0 } else { u.clamp(0.0, 1.0) };
        let i = (u * last as f32).round() as usize;
        self.texels[i.min(last)]
    }
}

/// Resamples `stops` into a lookup texture.
///
/// Rules:
/// - no stops: every texel is transparent black.
/// - stops are stable-sorted by position; input order breaks ties.
/// - before the first stop / at or after the last: that stop's color, no extrapolation.
/// - between stops: channelwise linear interpolation in straight alpha.
/// - a duplicated position resolves to the later stop.
pub fn resample(stops: &[ColorStop], config: &ResampleConfig) -> GradientTexture {
    let width = config.width;
    if stops.is_empty() {
        log::debug!("resample: no stops, {width} transparent texels");
        return GradientTexture::transparent(width);
    }

    let mut sorted = stops.to_vec();
    // `sort_by` is stable.
    sorted.sort_by(|a, b| a.position().total_cmp(&b.position()));

    let denom = width.saturating_sub(1).max(1) as f64;
    let mut texels: Vec<[u8; 4]> = (0..width)
        .map(|i| texel_at(&sorted, i as f64 / denom, config.alpha))
        .collect();

    if config.orientation == Orientation::Reversed {
        texels.reverse();
    }

    log::debug!("resample: {} stops -> {width} texels", stops.len());
    GradientTexture { texels }
}

/// Gradient texel at `t` over position-sorted, non-empty `sorted`.
fn texel_at(sorted: &[ColorStop], t: f64, alpha: AlphaMode) -> [u8; 4] {
    // Index of the first stop strictly after `t`.
    let upper = sorted.partition_point(|s| s.position() <= t);

    if upper == 0 {
        return sorted[0].color().to_rgba8(alpha);
    }
    let a = &sorted[upper - 1];
    let Some(b) = sorted.get(upper) else {
        return a.color().to_rgba8(alpha);
    };

    // b.position() > t >= a.position(), so the span is never zero.
    let f = (t - a.position()) / (b.position() - a.position());
    a.color().lerp_rgba8(b.color(), f, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::ColorInput;

    fn stop(p: f64, c: impl Into<ColorInput>) -> ColorStop {
        ColorStop::new(p, c).unwrap()
    }

    fn px(tex: &GradientTexture, i: usize) -> &[u8] {
        &tex.pixels()[4 * i..4 * (i + 1)]
    }

    // ── reference gradients ───────────────────────────────────────────────

    #[test]
    fn black_to_white() {
        let tex = resample(
            &[stop(0.0, "black"), stop(1.0, "white")],
            &ResampleConfig::default(),
        );
        assert_eq!(tex.width(), 1024);
        assert_eq!(tex.height(), 1);
        assert_eq!(tex.pixels().len(), 4 * 1024);
        assert_eq!(px(&tex, 0), b"\x00\x00\x00\xff");
        assert_eq!(px(&tex, 512), b"\x80\x80\x80\xff");
        assert_eq!(px(&tex, 1023), b"\xff\xff\xff\xff");
    }

    #[test]
    fn unsorted_stops_with_transparency() {
        let tex = resample(
            &[stop(0.75, [1.0, 0.0, 0.0, 0.0]), stop(0.25, [0.0, 0.0, 1.0, 1.0])],
            &ResampleConfig::default(),
        );
        assert_eq!(px(&tex, 0), b"\x00\x00\xff\xff");
        assert_eq!(px(&tex, 256), b"\x00\x00\xff\xff");
        // transparent red premultiplies to transparent black
        assert_eq!(px(&tex, 768), b"\x00\x00\x00\x00");
        assert_eq!(px(&tex, 1023), b"\x00\x00\x00\x00");
    }

    #[test]
    fn straight_alpha_keeps_rgb() {
        let config = ResampleConfig { alpha: AlphaMode::Straight, ..Default::default() };
        let tex = resample(
            &[stop(0.75, [1.0, 0.0, 0.0, 0.0]), stop(0.25, [0.0, 0.0, 1.0, 1.0])],
            &config,
        );
        assert_eq!(px(&tex, 1023), b"\xff\x00\x00\x00");
    }

    // ── edge policy ───────────────────────────────────────────────────────

    #[test]
    fn empty_stops_are_transparent() {
        let tex = resample(&[], &ResampleConfig::default());
        assert_eq!(tex.width(), 1024);
        assert!(tex.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn single_stop_fills_everything() {
        let tex = resample(&[stop(0.3, "red")], &ResampleConfig::default());
        assert!(tex.texels().iter().all(|&t| t == [255, 0, 0, 255]));
    }

    #[test]
    fn midpoint_between_decimal_stops_rounds_up() {
        // (0.5 - 0.4) / (0.6 - 0.4) must come out as exactly one half
        let config = ResampleConfig { width: 11, ..Default::default() };
        let tex = resample(&[stop(0.6, "white"), stop(0.4, "black")], &config);
        assert_eq!(tex.texels()[5], [128, 128, 128, 255]);
        assert_eq!(tex.texels()[4], [0, 0, 0, 255]);
        assert_eq!(tex.texels()[6], [255, 255, 255, 255]);
    }

    #[test]
    fn no_extrapolation_outside_stops() {
        let config = ResampleConfig { width: 11, ..Default::default() };
        let tex = resample(&[stop(0.4, "black"), stop(0.6, "white")], &config);
        for i in 0..=4 {
            assert_eq!(tex.texels()[i], [0, 0, 0, 255], "texel {i}");
        }
        for i in 6..=10 {
            assert_eq!(tex.texels()[i], [255, 255, 255, 255], "texel {i}");
        }
        assert_eq!(tex.texels()[5], [128, 128, 128, 255]);
    }

    #[test]
    fn duplicate_position_later_stop_wins() {
        // texel 5 of 11 sits exactly on t = 0.5
        let config = ResampleConfig { width: 11, ..Default::default() };
        let tex = resample(
            &[
                stop(0.0, "black"),
                stop(0.5, "red"),
                stop(0.5, "blue"),
                stop(1.0, "white"),
            ],
            &config,
        );
        assert_eq!(tex.texels()[5], [0, 0, 255, 255]);
        // left of the hard edge still blends towards red
        assert_eq!(tex.texels()[4], [204, 0, 0, 255]);
    }

    #[test]
    fn duplicate_last_position_later_stop_wins() {
        let tex = resample(
            &[stop(1.0, "red"), stop(1.0, "lime")],
            &ResampleConfig { width: 3, ..Default::default() },
        );
        assert_eq!(tex.texels()[2], [0, 255, 0, 255]);
        // below the first stop: the first stop in sorted order
        assert_eq!(tex.texels()[0], [255, 0, 0, 255]);
    }

    #[test]
    fn tiny_widths() {
        let stops = [stop(0.0, "black"), stop(1.0, "white")];
        let one = resample(&stops, &ResampleConfig { width: 1, ..Default::default() });
        assert_eq!(one.texels(), &[[0, 0, 0, 255]]);
        let zero = resample(&stops, &ResampleConfig { width: 0, ..Default::default() });
        assert_eq!(zero.width(), 0);
    }

    // ── orientation / purity ──────────────────────────────────────────────

    #[test]
    fn reversed_mirrors_forward() {
        let stops = [stop(0.1, "red"), stop(0.7, [0.0, 1.0, 0.0, 0.5])];
        let fwd = resample(&stops, &ResampleConfig::default());
        let rev = resample(
            &stops,
            &ResampleConfig { orientation: Orientation::Reversed, ..Default::default() },
        );
        let mut mirrored = fwd.texels().to_vec();
        mirrored.reverse();
        assert_eq!(rev.texels(), mirrored.as_slice());
        assert_eq!(rev.texels()[1023], [255, 0, 0, 255]);
    }

    #[test]
    fn idempotent_and_input_untouched() {
        let stops = vec![stop(0.9, "navy"), stop(0.2, "gold"), stop(0.5, "#80808080")];
        let before = stops.clone();
        let a = resample(&stops, &ResampleConfig::default());
        let b = resample(&stops, &ResampleConfig::default());
        assert_eq!(a, b);
        assert_eq!(stops, before);
    }

    // ── sampling ──────────────────────────────────────────────────────────

    #[test]
    fn sample_nearest_texel() {
        let tex = resample(
            &[stop(0.0, "black"), stop(1.0, "white")],
            &ResampleConfig { width: 3, ..Default::default() },
        );
        assert_eq!(tex.sample(-1.0), [0, 0, 0, 255]);
        assert_eq!(tex.sample(0.5), [128, 128, 128, 255]);
        assert_eq!(tex.sample(2.0), [255, 255, 255, 255]);
        assert_eq!(GradientTexture::default().sample(0.5), [0; 4]);
    }
}
