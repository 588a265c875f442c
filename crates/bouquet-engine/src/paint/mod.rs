//! Paint model shared between widgets and renderers.
//!
//! Scope:
//! - color representation (straight alpha) and input parsing
//! - color stops and validated stop collections
//! - stop → lookup texture resampling
//! - CPU rasterization of gradient fills

pub mod color;
pub mod error;
pub mod gradient;
mod named;
pub mod parse;
pub mod raster;
pub mod resample;
pub mod stops;

pub use color::{AlphaMode, Color};
pub use error::{ColorError, ErrorKind, GradientError};
pub use gradient::ColorStop;
pub use parse::{parse_color, ColorInput};
pub use raster::{Corners, PixelBuffer};
pub use resample::{resample, GradientTexture, Orientation, ResampleConfig};
pub use stops::{StopList, MAX_STOPS};
