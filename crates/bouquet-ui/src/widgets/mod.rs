//! Gradient widgets.

pub mod base;
pub mod bilinear;
pub mod linear;
pub mod radial;
