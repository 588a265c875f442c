//! GPU rendering of gradient fills.
//!
//! Widgets talk to renderers only through [`UniformSink`]; the wgpu-backed
//! [`GradientRenderer`] is one implementation, [`UniformTable`] another.
//!
//! Convention:
//! - CPU geometry is in logical pixels (top-left origin, +Y down).
//! - Vertex shaders convert to NDC using the viewport carried in the uniform block.
//! - Fragment shaders output premultiplied alpha.

mod common;
mod ctx;
pub mod gradient;
pub mod shader;
pub mod uniforms;

pub use ctx::{RenderCtx, RenderTarget};
pub use gradient::GradientRenderer;
pub use shader::{names, ShaderKind, ShaderSource};
pub use uniforms::{UniformSink, UniformTable};
