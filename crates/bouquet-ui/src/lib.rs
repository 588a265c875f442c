//! Bouquet UI - gradient widgets on top of `bouquet-engine`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bouquet_ui::prelude::*;
//!
//! let mut corners = BilinearGradient::new();
//! corners.set_bottom_left_color("#00000000")?;
//! let image = corners.render_texture(500, 600);
//!
//! let mut ramp = LinearGradient::new();
//! ramp.set_color_stops(vec![
//!     ColorStop::new(0.0, "black")?,
//!     ColorStop::new(1.0, "white")?,
//! ])?;
//! ```
//!
//! # Drawing on the GPU
//!
//! Widgets are generic over their canvas. Pass a
//! [`GradientRenderer`](bouquet_engine::render::GradientRenderer) instead of
//! the default [`UniformTable`](bouquet_engine::render::UniformTable) and every
//! property change lands in the renderer's uniforms:
//!
//! ```rust,ignore
//! let renderer = GradientRenderer::new(ShaderSource::builtin(ShaderKind::Radial));
//! let mut radial = RadialGradient::with_canvas(renderer);
//! radial.set_border_color("navy")?;
//! radial.canvas_mut().render(&ctx, &mut target, Rect::from_size(200.0, 200.0));
//! ```

pub mod binding;
pub mod widget;
pub mod widgets;

/// Everything needed to build and render gradients.
pub mod prelude {
    pub use crate::binding::{BindingId, Observers};
    pub use crate::widget::{GradientWidget, DEFAULT_TEXTURE_SIZE};
    pub use crate::widgets::{
        base::GradientBase, bilinear::BilinearGradient, linear::LinearGradient,
        radial::RadialGradient,
    };

    pub use bouquet_engine::coords::Rect;
    pub use bouquet_engine::paint::{
        AlphaMode, Color, ColorError, ColorInput, ColorStop, ErrorKind, GradientError,
        GradientTexture, Orientation, PixelBuffer, ResampleConfig,
    };
    pub use bouquet_engine::render::{
        GradientRenderer, ShaderKind, ShaderSource, UniformSink, UniformTable,
    };
}
