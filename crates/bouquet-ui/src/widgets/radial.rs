use bouquet_engine::paint::{parse_color, raster, AlphaMode, Color, ColorError, ColorInput, PixelBuffer};
use bouquet_engine::render::{names, ShaderKind, ShaderSource, UniformSink, UniformTable};

use crate::widget::GradientWidget;

/// Two-color radial gradient.
///
/// Color blends linearly from `center_color` at the middle of the widget to
/// `border_color` on the inscribed circle; everything outside it is `border_color`.
pub struct RadialGradient<S: UniformSink = UniformTable> {
    center: Color,
    border: Color,
    alpha: AlphaMode,
    canvas: S,
    shader: ShaderSource,
}

impl RadialGradient<UniformTable> {
    pub fn new() -> Self {
        Self::with_canvas(UniformTable::new())
    }
}

impl Default for RadialGradient<UniformTable> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: UniformSink> RadialGradient<S> {
    pub fn with_canvas(canvas: S) -> Self {
        Self::with_shader(canvas, ShaderSource::builtin(ShaderKind::Radial))
    }

    /// Center `white`, border `black`.
    pub fn with_shader(mut canvas: S, shader: ShaderSource) -> Self {
        let center = Color::white();
        let border = Color::black();
        canvas.set_vec4(names::CENTER_COLOR, center.to_array());
        canvas.set_vec4(names::BORDER_COLOR, border.to_array());
        Self {
            center,
            border,
            alpha: AlphaMode::default(),
            canvas,
            shader,
        }
    }

    pub fn alpha_mode(mut self, alpha: AlphaMode) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    pub fn center_color(&self) -> Color {
        self.center
    }

    #[inline]
    pub fn border_color(&self) -> Color {
        self.border
    }

    pub fn set_center_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.center = parse_color(c)?;
        self.canvas.set_vec4(names::CENTER_COLOR, self.center.to_array());
        Ok(())
    }

    pub fn set_border_color(&mut self, c: impl Into<ColorInput>) -> Result<(), ColorError> {
        self.border = parse_color(c)?;
        self.canvas.set_vec4(names::BORDER_COLOR, self.border.to_array());
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
}

impl<S: UniformSink> GradientWidget for RadialGradient<S> {
    fn shader(&self) -> &ShaderSource {
        &self.shader
    }

    fn render_texture(&self, width: u32, height: u32) -> PixelBuffer {
        raster::render_radial(width, height, self.center, self.border, self.alpha)
    }
}
