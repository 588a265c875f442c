use bouquet_engine::paint::{raster, ColorStop, GradientError, PixelBuffer, ResampleConfig};
use bouquet_engine::render::{ShaderKind, ShaderSource, UniformSink, UniformTable};

use crate::widget::GradientWidget;
use crate::widgets::base::GradientBase;

/// Multi-stop gradient running left (position `0.0`) to right (position `1.0`).
///
/// # Example
/// ```rust,ignore
/// let mut g = LinearGradient::new();
/// g.set_color_stops(vec![
///     ColorStop::new(0.0, "navy")?,
///     ColorStop::new(0.6, "#ff8800")?,
///     ColorStop::new(1.0, "white")?,
/// ])?;
/// let image = g.render_texture(256, 32);
/// ```
pub struct LinearGradient<S: UniformSink = UniformTable> {
    base: GradientBase<S>,
}

impl LinearGradient<UniformTable> {
    pub fn new() -> Self {
        Self::with_canvas(UniformTable::new())
    }
}

impl Default for LinearGradient<UniformTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSink> LinearGradient<S> {
    pub fn with_canvas(canvas: S) -> Self {
        Self::with_config(canvas, ResampleConfig::default())
    }

    pub fn with_config(canvas: S, config: ResampleConfig) -> Self {
        Self {
            base: GradientBase::with_config(canvas, config, ShaderSource::builtin(ShaderKind::Ramp)),
        }
    }

    pub fn set_color_stops(&mut self, stops: Vec<ColorStop>) -> Result<(), GradientError> {
        self.base.set_color_stops(stops)
    }

    pub fn set_color_stops_json(&mut self, value: &serde_json::Value) -> Result<(), GradientError> {
        self.base.set_color_stops_json(value)
    }

    #[inline]
    pub fn color_stops(&self) -> &[ColorStop] {
        self.base.color_stops()
    }

    #[inline]
    pub fn base(&self) -> &GradientBase<S> {
        &self.base
    }

    #[inline]
    pub fn base_mut(&mut self) -> &mut GradientBase<S> {
        &mut self.base
    }
}

impl<S: UniformSink> GradientWidget for LinearGradient<S> {
    fn shader(&self) -> &ShaderSource {
        self.base.shader()
    }

    fn render_texture(&self, width: u32, height: u32) -> PixelBuffer {
        raster::render_ramp(width, height, self.base.texture())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_stops_left_to_right() {
        let mut g = LinearGradient::new();
        g.set_color_stops(vec![
            ColorStop::new(1.0, "white").unwrap(),
            ColorStop::new(0.0, "black").unwrap(),
        ])
        .unwrap();

        let img = g.render_texture(101, 3);
        assert_eq!(img.size(), (101, 3));
        assert_eq!(img.pixel(0, 2), Some([0, 0, 0, 255]));
        assert_eq!(img.pixel(100, 0), Some([255, 255, 255, 255]));
        assert_eq!(img.pixel(50, 1), Some([128, 128, 128, 255]));
    }

    #[test]
    fn empty_gradient_renders_transparent() {
        let img = LinearGradient::new().render_default_texture();
        assert_eq!(img.size(), (100, 100));
        assert!(img.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn renderer_receives_premultiplied_lookup() {
        use bouquet_engine::paint::AlphaMode;
        use bouquet_engine::render::GradientRenderer;

        let config = ResampleConfig { width: 8, alpha: AlphaMode::Straight, ..Default::default() };
        let renderer = GradientRenderer::new(ShaderSource::builtin(ShaderKind::Ramp));
        let mut g = LinearGradient::with_config(renderer, config);
        g.set_color_stops(vec![ColorStop::new(0.0, [1.0, 0.0, 0.0, 0.0]).unwrap()])
            .unwrap();

        let lookup = g.base().canvas().lookup().unwrap();
        assert_eq!(lookup.width(), 8);
        assert!(lookup.texels().iter().all(|&t| t == [0, 0, 0, 0]));
        // the CPU image keeps straight channels
        assert_eq!(g.render_texture(2, 1).pixel(0, 0), Some([255, 0, 0, 0]));
    }

    #[test]
    fn observers_through_base() {
        use std::cell::Cell;
        use std::rc::Rc;

        let count = Rc::new(Cell::new(0));
        let mut g = LinearGradient::new();
        let c = count.clone();
        g.base_mut().bind_texture(move |_| c.set(c.get() + 1));
        g.set_color_stops(vec![ColorStop::new(0.5, "teal").unwrap()]).unwrap();
        assert!(g.set_color_stops_json(&serde_json::json!([null])).is_err());
        assert_eq!(count.get(), 1);
    }

    #[test]
    fn uses_ramp_program() {
        assert_eq!(LinearGradient::new().shader().kind, ShaderKind::Ramp);
    }
}
