use wgpu::util::DeviceExt;

use crate::coords::Rect;
use crate::paint::GradientTexture;
use crate::render::{RenderCtx, RenderTarget};

use super::common::{
    premul_alpha_blend, uniform_min_binding_size, GradientUniform, QuadVertex, QUAD_INDICES,
    QUAD_VERTICES,
};
use super::shader::{names, ShaderSource};
use super::uniforms::UniformSink;

/// Draws one gradient-filled rectangle with a single program.
///
/// Uniforms arrive through [`UniformSink`] and are kept CPU-side until the next
/// [`render`](Self::render), which uploads whatever changed. GPU resources are
/// created lazily on first use and rebuilt when the surface format changes.
pub struct GradientRenderer {
    source: ShaderSource,
    uniform: GradientUniform,

    lookup: Option<GradientTexture>,
    lookup_dirty: bool,
    warned_unknown: bool,

    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    ubo: Option<wgpu::Buffer>,
    sampler: Option<wgpu::Sampler>,

    texture: Option<wgpu::Texture>,
    texture_view: Option<wgpu::TextureView>,
    texture_width: u32,

    quad_vbo: Option<wgpu::Buffer>,
    quad_ibo: Option<wgpu::Buffer>,
}

impl GradientRenderer {
    pub fn new(source: ShaderSource) -> Self {
        Self {
            source,
            uniform: bytemuck::Zeroable::zeroed(),
            lookup: None,
            lookup_dirty: false,
            warned_unknown: false,
            pipeline_format: None,
            pipeline: None,
            bind_group_layout: None,
            bind_group: None,
            ubo: None,
            sampler: None,
            texture: None,
            texture_view: None,
            texture_width: 0,
            quad_vbo: None,
            quad_ibo: None,
        }
    }

    #[inline]
    pub fn source(&self) -> &ShaderSource {
        &self.source
    }

    /// Current value of color slot `slot` (straight alpha).
    #[inline]
    pub fn color(&self, slot: usize) -> Option<[f32; 4]> {
        self.uniform.colors.get(slot).copied()
    }

    /// Lookup texture waiting for (or already in) GPU memory.
    #[inline]
    pub fn lookup(&self) -> Option<&GradientTexture> {
        self.lookup.as_ref()
    }

    /// Fills `rect` (logical px) in `target` with the gradient.
    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, rect: Rect) {
        let rect = rect.normalized();
        if !ctx.is_visible(rect) {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_static_buffers(ctx);
        self.ensure_sampler(ctx);
        self.ensure_texture(ctx);
        self.ensure_bindings(ctx);

        self.write_uniform(ctx, rect);
        self.upload_lookup(ctx);

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };
        let Some(quad_vbo) = self.quad_vbo.as_ref() else { return };
        let Some(quad_ibo) = self.quad_ibo.as_ref() else { return };

        let mut rpass = target.encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("bouquet gradient pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: target.color_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Load,
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });

        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, quad_vbo.slice(..));
        rpass.set_index_buffer(quad_ibo.slice(..), wgpu::IndexFormat::Uint16);
        rpass.draw_indexed(0..QUAD_INDICES.len() as u32, 0, 0..1);
    }

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        log::debug!(
            "creating {:?} gradient pipeline ({}) for {:?}",
            self.source.kind,
            self.source.label,
            ctx.surface_format
        );

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some(self.source.label.as_ref()),
            source: wgpu::ShaderSource::Wgsl(self.source.wgsl.clone()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bouquet gradient bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(uniform_min_binding_size()),
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 2,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("bouquet gradient pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("bouquet gradient pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[QuadVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                strip_index_format: None,
                front_face: wgpu::FrontFace::Ccw,
                cull_mode: None,
                polygon_mode: wgpu::PolygonMode::Fill,
                unclipped_depth: false,
                conservative: false,
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bgl);
        self.bind_group = None;
        self.ubo = None;
    }

    fn ensure_static_buffers(&mut self, ctx: &RenderCtx<'_>) {
        if self.quad_vbo.is_some() && self.quad_ibo.is_some() {
            return;
        }

        self.quad_vbo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("bouquet gradient quad vbo"),
            contents: bytemuck::cast_slice(&QUAD_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        }));

        self.quad_ibo = Some(ctx.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("bouquet gradient quad ibo"),
            contents: bytemuck::cast_slice(&QUAD_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        }));
    }

    fn ensure_sampler(&mut self, ctx: &RenderCtx<'_>) {
        if self.sampler.is_some() {
            return;
        }
        self.sampler = Some(ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("bouquet gradient sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::MipmapFilterMode::Nearest,
            ..Default::default()
        }));
    }

    /// Keeps a `width × 1` texture matching the pending lookup.
    ///
    /// Programs that never sample it still get a 1×1 texture so the bind group
    /// layout stays the same for every kind.
    fn ensure_texture(&mut self, ctx: &RenderCtx<'_>) {
        let width = self
            .lookup
            .as_ref()
            .map_or(1, |t| t.width().max(1) as u32);
        if self.texture.is_some() && self.texture_width == width {
            return;
        }

        let texture = ctx.device.create_texture(&wgpu::TextureDescriptor {
            label: Some("bouquet gradient lookup"),
            size: wgpu::Extent3d {
                width,
                height: 1,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });

        self.texture_view = Some(texture.create_view(&wgpu::TextureViewDescriptor::default()));
        self.texture = Some(texture);
        self.texture_width = width;
        self.lookup_dirty = self.lookup.is_some();
        self.bind_group = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.ubo.is_some() {
            return;
        }

        let Some(bgl) = self.bind_group_layout.as_ref() else { return };
        let Some(view) = self.texture_view.as_ref() else { return };
        let Some(sampler) = self.sampler.as_ref() else { return };

        let ubo = match self.ubo.take() {
            Some(ubo) => ubo,
            None => ctx.device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("bouquet gradient ubo"),
                size: std::mem::size_of::<GradientUniform>() as u64,
                usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }),
        };

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bouquet gradient bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: ubo.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        });

        self.ubo = Some(ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_uniform(&mut self, ctx: &RenderCtx<'_>, rect: Rect) {
        self.uniform.viewport = ctx.viewport.uniform_size();
        self.uniform.rect = [rect.origin.x, rect.origin.y, rect.size.x, rect.size.y];

        let Some(ubo) = self.ubo.as_ref() else { return };
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&self.uniform));
    }

    fn upload_lookup(&mut self, ctx: &RenderCtx<'_>) {
        if !self.lookup_dirty {
            return;
        }
        let Some(lookup) = self.lookup.as_ref() else { return };
        let Some(texture) = self.texture.as_ref() else { return };
        if lookup.width() == 0 {
            self.lookup_dirty = false;
            return;
        }

        let width = lookup.width() as u32;
        ctx.queue.write_texture(
            wgpu::TexelCopyTextureInfo {
                texture,
                mip_level: 0,
                origin: wgpu::Origin3d::ZERO,
                aspect: wgpu::TextureAspect::All,
            },
            lookup.pixels(),
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * width),
                rows_per_image: Some(1),
            },
            wgpu::Extent3d {
                width,
                height: 1,
                depth_or_array_layers: 1,
            },
        );
        self.lookup_dirty = false;
    }

    fn warn_unknown(&mut self, name: &str) {
        if !self.warned_unknown {
            log::debug!(
                "GradientRenderer: {:?} program has no uniform {name:?}; ignored",
                self.source.kind
            );
            self.warned_unknown = true;
        }
    }
}

impl UniformSink for GradientRenderer {
    fn set_vec4(&mut self, name: &str, value: [f32; 4]) {
        match self.source.kind.color_slot(name) {
            Some(slot) => self.uniform.colors[slot] = value,
            None => self.warn_unknown(name),
        }
    }

    fn set_texture(&mut self, name: &str, texture: &GradientTexture) {
        if name != names::GRADIENT_TEXTURE || !self.source.kind.samples_texture() {
            self.warn_unknown(name);
            return;
        }
        self.lookup = Some(texture.clone());
        self.lookup_dirty = true;
    }
}
