//! Bouquet engine crate.
//!
//! Owns the gradient core (colors, color stops, stop → texture resampling),
//! CPU rasterization of gradient fills and the wgpu programs that draw them.

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;

/// Crate version, as logged at startup.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
