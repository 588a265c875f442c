use bouquet_engine::paint::PixelBuffer;
use bouquet_engine::render::ShaderSource;

/// Size used by [`GradientWidget::render_default_texture`].
pub const DEFAULT_TEXTURE_SIZE: (u32, u32) = (100, 100);

/// Common surface of every gradient widget.
///
/// Widgets own a canvas (a [`UniformSink`](bouquet_engine::render::UniformSink))
/// and keep it in sync with their properties; this trait exposes what a host
/// needs on top of that.
pub trait GradientWidget {
    /// Program the widget's canvas is meant to be drawn with.
    fn shader(&self) -> &ShaderSource;

    /// Renders the widget's current state on the CPU, row 0 at the top.
    fn render_texture(&self, width: u32, height: u32) -> PixelBuffer;

    fn render_default_texture(&self) -> PixelBuffer {
        let (w, h) = DEFAULT_TEXTURE_SIZE;
        self.render_texture(w, h)
    }
}
