use bouquet_engine::paint::{
    parse_color, raster, AlphaMode, Color, ColorError, ColorInput, Corners, PixelBuffer,
};
use bouquet_engine::render::{names, ShaderKind, ShaderSource, UniformSink, UniformTable};

use crate::widget::GradientWidget;

/// Gradient defined by one color per corner.
///
/// Each row blends left to right between its edge's two corners, then the
/// rows blend top to bottom. Every color setter pushes the matching uniform
/// (`topLeftColor`, `topRightColor`, `bottomLeftColor`, `bottomRightColor`)
/// to the canvas immediately.
pub struct BilinearGradient<S: UniformSink = UniformTable> {
    corners: Corners,
    alpha: AlphaMode,
    canvas: S,
    shader: ShaderSource,
}

impl BilinearGradient<UniformTable> {
    pub fn new() -> Self {
        Self::with_canvas(UniformTable::new())
    }
}

impl Default for BilinearGradient<UniformTable> {
    fn default() -> Self {
        Self::new()
    }
}

/// Top-left `green`, top-right `yellow`, bottom-left `black`, bottom-right `red`.
pub fn default_corners() -> Corners {
    Corners {
        top_left: Color::from_srgb_u8(0, 128, 0, 255),
        top_right: Color::from_srgb_u8(255, 255, 0, 255),
        bottom_left: Color::black(),
        bottom_right: Color::from_srgb_u8(255, 0, 0, 255),
    }
}

impl<S: UniformSink> BilinearGradient<S> {
    pub fn with_canvas(canvas: S) -> Self {
        Self::with_shader(canvas, ShaderSource::builtin(ShaderKind::Bilinear))
    }

    pub fn with_shader(canvas: S, shader: ShaderSource) -> Self {
        let mut g = Self {
            corners: default_corners(),
            alpha: AlphaMode::default(),
            canvas,
            shader,
        };
        g.push_all();
        g
    }

    /// Output alpha handling for [`render_texture`](GradientWidget::render_texture).
    pub fn alpha_mode(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn corners(&self) -> &Corners {
        &self.corners
    }

    #[inline]
    pub fn top_left_color(&self) -> Color {
        self.corners.top_left
    }

    #[inline]
    pub fn top_right_color(&self) -> Color {
        self.corners.top_right
    }

    #[inline]
    pub fn bottom_left_color(&self) -> Color {
        self.corners.bottom_left
    }

    #[inline]
    pub fn bottom_right_color(&self) -> Color {
        self.corners.bottom_right
    }

    pub fn set_top_left_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.corners.top_left = parse_color(c)?;
        self.canvas.set_vec4(names::TOP_LEFT_COLOR, self.corners.top_left.to_array());
        Ok(())
    }

    pub fn set_top_right_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.corners.top_right = parse_color(c)?;
        self.canvas.set_vec4(names::TOP_RIGHT_COLOR, self.corners.top_right.to_array());
        Ok(())
    }

    pub fn set_bottom_left_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.corners.bottom_left = parse_color(c)?;
        self.canvas.set_vec4(names::BOTTOM_LEFT_COLOR, self.corners.bottom_left.to_array());
        Ok(())
    }

    pub fn set_bottom_right_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.corners.bottom_right = parse_color(c)?;
        self.canvas.set_vec4(names::BOTTOM_RIGHT_COLOR, self.corners.bottom_right.to_array());
        Ok(())
    }

    #[inline]
    pub fn canvas(&self) -> &S {
        &self.canvas
    }

    #[inline]
    pub fn canvas_mut(&mut self) -> &mut S {
        &mut self.canvas
    }

    fn push_all(&mut self) {
        let c = self.corners;
        self.canvas.set_vec4(names::TOP_LEFT_COLOR, c.top_left.to_array());
        self.canvas.set_vec4(names::TOP_RIGHT_COLOR, c.top_right.to_array());
        self.canvas.set_vec4(names::BOTTOM_LEFT_COLOR, c.bottom_left.to_array());
        self.canvas.set_vec4(names::BOTTOM_RIGHT_COLOR, c.bottom_right.to_array());
    }
}

impl<S: UniformSink> GradientWidget for BilinearGradient<S> {
    fn shader(&self) -> &ShaderSource {
        &self.shader
    }

    fn render_texture(&self, width: u32, height: u32) -> PixelBuffer {
        raster::render_bilinear(width, height, &self.corners, self.alpha)
    }
}
