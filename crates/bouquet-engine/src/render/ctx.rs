use crate::coords::{Rect, Viewport};

/// Device handles and surface description a gradient renderer draws with.
///
/// `surface_format` keys the cached pipeline: passing a different format
/// rebuilds it on the next draw.
pub struct RenderCtx<'a> {
    pub device: &'a wgpu::Device,
    pub queue: &'a wgpu::Queue,
    pub surface_format: wgpu::TextureFormat,
    /// Logical px; quad rects are given in the same space.
    pub viewport: Viewport,
}

impl<'a> RenderCtx<'a> {
    #[inline]
    pub fn new(
        device: &'a wgpu::Device,
        queue: &'a wgpu::Queue,
        surface_format: wgpu::TextureFormat,
        viewport: Viewport,
    ) -> Self {
        Self {
            device,
            queue,
            surface_format,
            viewport,
        }
    }

    /// Whether drawing a normalized `rect` can touch any pixel.
    #[inline]
    pub fn is_visible(&self, rect: Rect) -> bool {
        self.viewport.is_valid() && !rect.is_empty() && self.viewport.overlaps(rect)
    }
}

/// Encoder and color attachment a gradient pass records into. The pass loads
/// existing contents and blends on top.
pub struct RenderTarget<'a> {
    pub encoder: &'a mut wgpu::CommandEncoder,
    pub color_view: &'a wgpu::TextureView,
}

impl<'a> RenderTarget<'a> {
    #[inline]
    pub fn new(encoder: &'a mut wgpu::CommandEncoder, color_view: &'a wgpu::TextureView) -> Self {
        Self { encoder, color_view }
    }
}
