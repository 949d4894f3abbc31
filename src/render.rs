use crate::core::constants::FACE_COUNT;
use crate::core::cube::{cube_edges, face_corners};
use crate::core::{FrameOutput, SceneParams};
use glam::{Mat4, Vec3};
use web_sys as web;
use wgpu::util::DeviceExt;

mod faces;
mod helpers;
mod targets;
pub use faces::{face_assets, load_face_images, paint_faces, FacePixels, FACE_TEXTURE_SIZE};
use helpers::PassDesc;
use targets::DepthTarget;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct SceneUniforms {
    view: [[f32; 4]; 4],
    proj: [[f32; 4]; 4],
    model: [[f32; 4]; 4],
    particle_model: [[f32; 4]; 4],
    face_invert: [[f32; 4]; 2],
    line_color: [f32; 4],
    particle_color: [f32; 4],
    params: [f32; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct CubeVertex {
    pos: [f32; 3],
    uv: [f32; 2],
    face: u32,
}

const CUBE_ATTRS: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2, 2 => Uint32];
const POINT_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

fn cube_vertices(edge: f32) -> Vec<CubeVertex> {
    let mut out = Vec::with_capacity(FACE_COUNT * 6);
    for face in 0..FACE_COUNT {
        let [tl, tr, bl, br] = face_corners(face, edge * 0.5);
        let v = |p: Vec3, uv: [f32; 2]| CubeVertex {
            pos: p.to_array(),
            uv,
            face: face as u32,
        };
        // Counter-clockwise seen from outside.
        out.extend_from_slice(&[
            v(tl, [0.0, 0.0]),
            v(bl, [0.0, 1.0]),
            v(br, [1.0, 1.0]),
            v(tl, [0.0, 0.0]),
            v(br, [1.0, 1.0]),
            v(tr, [1.0, 0.0]),
        ]);
    }
    out
}

fn edge_vertices(edge: f32) -> Vec<[f32; 3]> {
    cube_edges(edge * 0.5)
        .iter()
        .flat_map(|[a, b]| [a.to_array(), b.to_array()])
        .collect()
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    depth: DepthTarget,

    uniform_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    _face_texture: wgpu::Texture,

    cube_pipeline: wgpu::RenderPipeline,
    line_pipeline: wgpu::RenderPipeline,
    particle_pipeline: wgpu::RenderPipeline,

    cube_vb: wgpu::Buffer,
    cube_vertex_count: u32,
    edge_vb: wgpu::Buffer,
    edge_vertex_count: u32,
    particle_vb: wgpu::Buffer,
    particle_count: u32,

    width: u32,
    height: u32,
    srgb_target: bool,
    wire_opacity: f32,
    particle_opacity: f32,
    particle_size: f32,
}

impl<'a> GpuState<'a> {
    pub async fn new(
        canvas: &'a web::HtmlCanvasElement,
        params: &SceneParams,
        particles: &[Vec3],
        face_layers: &[FacePixels],
    ) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        let alpha_mode = caps
            .alpha_modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {:?} {}x{}", format, width, height);

        let depth = DepthTarget::new(&device, width, height);

        // Face textures: one array layer per face, painted in sRGB space.
        let face_texture = device.create_texture(&wgpu::TextureDescriptor {
            label: Some("face_tex"),
            size: wgpu::Extent3d {
                width: FACE_TEXTURE_SIZE,
                height: FACE_TEXTURE_SIZE,
                depth_or_array_layers: FACE_COUNT as u32,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        });
        let layer_bytes = (FACE_TEXTURE_SIZE * FACE_TEXTURE_SIZE * 4) as usize;
        for (layer, pixels) in face_layers.iter().enumerate().take(FACE_COUNT) {
            if pixels.len() != layer_bytes {
                log::warn!("[gpu] face {} has {} bytes, skipping", layer, pixels.len());
                continue;
            }
            queue.write_texture(
                wgpu::TexelCopyTextureInfo {
                    texture: &face_texture,
                    mip_level: 0,
                    origin: wgpu::Origin3d {
                        x: 0,
                        y: 0,
                        z: layer as u32,
                    },
                    aspect: wgpu::TextureAspect::All,
                },
                pixels,
                wgpu::TexelCopyBufferLayout {
                    offset: 0,
                    bytes_per_row: Some(FACE_TEXTURE_SIZE * 4),
                    rows_per_image: Some(FACE_TEXTURE_SIZE),
                },
                wgpu::Extent3d {
                    width: FACE_TEXTURE_SIZE,
                    height: FACE_TEXTURE_SIZE,
                    depth_or_array_layers: 1,
                },
            );
        }
        let face_view = face_texture.create_view(&wgpu::TextureViewDescriptor {
            label: Some("face_view"),
            dimension: Some(wgpu::TextureViewDimension::D2Array),
            ..Default::default()
        });
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("face_sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Linear,
            min_filter: wgpu::FilterMode::Linear,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("scene_uniforms"),
            size: std::mem::size_of::<SceneUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("scene_bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        multisampled: false,
                        view_dimension: wgpu::TextureViewDimension::D2Array,
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
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
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("scene_bg"),
            layout: &bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: uniform_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::TextureView(&face_view),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: wgpu::BindingResource::Sampler(&sampler),
                },
            ],
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("scene_pl"),
            bind_group_layouts: &[&bgl],
            push_constant_ranges: &[],
        });

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("scene_shader"),
            source: wgpu::ShaderSource::Wgsl(crate::core::SCENE_WGSL.into()),
        });
        let cube_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PassDesc {
                label: "cube_pipeline",
                vs_entry: "vs_cube",
                fs_entry: "fs_cube",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<CubeVertex>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &CUBE_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: Some(wgpu::Face::Back),
                blend: Some(wgpu::BlendState::REPLACE),
                depth_write: true,
            },
        );
        let line_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PassDesc {
                label: "line_pipeline",
                vs_entry: "vs_line",
                fs_entry: "fs_line",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &POINT_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::LineList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );
        let particle_pipeline = helpers::make_scene_pipeline(
            &device,
            &layout,
            &shader,
            format,
            PassDesc {
                label: "particle_pipeline",
                vs_entry: "vs_particle",
                fs_entry: "fs_particle",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 3]>() as u64,
                    step_mode: wgpu::VertexStepMode::Instance,
                    attributes: &POINT_ATTRS,
                }],
                topology: wgpu::PrimitiveTopology::TriangleList,
                cull_mode: None,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                depth_write: false,
            },
        );

        let cube = cube_vertices(params.cube_size);
        let cube_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("cube_vb"),
            contents: bytemuck::cast_slice(&cube),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let edges = edge_vertices(params.cube_size);
        let edge_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("edge_vb"),
            contents: bytemuck::cast_slice(&edges),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let particle_count = particles.len() as u32;
        let mut points: Vec<[f32; 3]> = particles.iter().map(|p| p.to_array()).collect();
        // A zero-sized vertex buffer is invalid.
        if points.is_empty() {
            points.push([0.0; 3]);
        }
        let particle_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("particle_vb"),
            contents: bytemuck::cast_slice(&points),
            usage: wgpu::BufferUsages::VERTEX,
        });

        Ok(Self {
            surface,
            device,
            queue,
            config,
            depth,
            uniform_buffer,
            bind_group,
            _face_texture: face_texture,
            cube_pipeline,
            line_pipeline,
            particle_pipeline,
            cube_vb,
            cube_vertex_count: cube.len() as u32,
            edge_vb,
            edge_vertex_count: edges.len() as u32,
            particle_vb,
            particle_count,
            width,
            height,
            srgb_target: format.is_srgb(),
            wire_opacity: params.wire_opacity,
            particle_opacity: params.particle_opacity,
            particle_size: params.particle_size,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.depth.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface was lost or went stale.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn uniforms(&self, frame: &FrameOutput) -> SceneUniforms {
        let gray = frame.line_gray;
        let mut face_invert = [[0.0f32; 4]; 2];
        for (i, v) in frame.face_invert.iter().enumerate() {
            face_invert[i / 4][i % 4] = *v;
        }
        let cols = |m: Mat4| m.to_cols_array_2d();
        SceneUniforms {
            view: cols(frame.view),
            proj: cols(frame.proj),
            model: cols(frame.model),
            particle_model: cols(frame.particle_model),
            face_invert,
            line_color: [gray, gray, gray, self.wire_opacity],
            particle_color: [gray, gray, gray, self.particle_opacity],
            params: [
                self.particle_size,
                if self.srgb_target { 1.0 } else { 0.0 },
                0.0,
                0.0,
            ],
        }
    }

    pub fn render(&mut self, frame: &FrameOutput) -> Result<(), wgpu::SurfaceError> {
        let u = self.uniforms(frame);
        self.queue
            .write_buffer(&self.uniform_buffer, 0, bytemuck::bytes_of(&u));

        let surface_tex = self.surface.get_current_texture()?;
        let view = surface_tex
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let bg = frame.background;
        let channel = |c: f32| {
            if self.srgb_target {
                helpers::srgb_to_linear(c)
            } else {
                c as f64
            }
        };
        let clear = wgpu::Color {
            r: channel(bg.x),
            g: channel(bg.y),
            b: channel(bg.z),
            a: 1.0,
        };
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(clear),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth.view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.bind_group, &[]);

            rpass.set_pipeline(&self.cube_pipeline);
            rpass.set_vertex_buffer(0, self.cube_vb.slice(..));
            rpass.draw(0..self.cube_vertex_count, 0..1);

            rpass.set_pipeline(&self.line_pipeline);
            rpass.set_vertex_buffer(0, self.edge_vb.slice(..));
            rpass.draw(0..self.edge_vertex_count, 0..1);

            if self.particle_count > 0 {
                rpass.set_pipeline(&self.particle_pipeline);
                rpass.set_vertex_buffer(0, self.particle_vb.slice(..));
                rpass.draw(0..6, 0..self.particle_count);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        surface_tex.present();
        Ok(())
    }
}
