//! WebGL2 cube renderer using wgpu
//!
//! One vertex/index buffer pair holds the shared cube. Each draw gets its own
//! 256-byte aligned slot in a uniform buffer and is selected with a dynamic
//! offset, so a whole frame is a single buffer write and a single pass.

use crate::camera::Camera;
use crate::config::ViewerConfig;
use crate::draw::CubeRenderer;
use crate::error::SetupError;
use crate::mesh::{CubeVertex, CUBE_INDEX_COUNT, CUBE_INDICES, CUBE_VERTICES};
use crate::rig::BodyPart;
use glam::Mat4;
use static_assertions::assert_eq_size;
use wgpu::util::DeviceExt;

const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth24Plus;

/// Uniform slots per frame
const MAX_CUBES: usize = BodyPart::COUNT;

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct MatrixUniform {
    matrix: [[f32; 4]; 4],
}

assert_eq_size!(MatrixUniform, [f32; 16]);

impl From<Mat4> for MatrixUniform {
    fn from(m: Mat4) -> Self {
        Self {
            matrix: m.to_cols_array_2d(),
        }
    }
}

const MATRIX_SIZE: u64 = std::mem::size_of::<MatrixUniform>() as u64;

pub struct Renderer {
    canvas: web_sys::HtmlCanvasElement,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface: wgpu::Surface<'static>,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    globals_buffer: wgpu::Buffer,
    parts_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    /// Byte distance between part slots in `parts_buffer`
    part_stride: u64,
    depth_view: wgpu::TextureView,
    clear_color: wgpu::Color,
    current: Mat4,
    pending: Vec<Mat4>,
}

impl Renderer {
    /// Bring up the surface, device, shader program and buffers.
    ///
    /// Any failure aborts setup; nothing is rendered with a partial renderer.
    pub async fn new(
        canvas: web_sys::HtmlCanvasElement,
        viewer: &ViewerConfig,
        camera: &Camera,
    ) -> Result<Self, SetupError> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::GL,
            ..Default::default()
        });

        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;

        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await?;

        let (device, queue) = adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Cube Robot Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::downlevel_webgl2_defaults(),
                experimental_features: Default::default(),
                memory_hints: Default::default(),
                trace: wgpu::Trace::Off,
            })
            .await?;

        // Vertex colors are authored for a linear canvas
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| !f.is_srgb())
            .or_else(|| caps.formats.first().copied())
            .ok_or(SetupError::UnsupportedSurface)?;

        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::AutoVsync,
            alpha_mode: caps
                .alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto),
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        // Program
        device.push_error_scope(wgpu::ErrorFilter::Validation);
        let bind_group_layout = create_bind_group_layout(&device);
        let pipeline = create_pipeline(&device, &bind_group_layout, format);
        if let Some(e) = device.pop_error_scope().await {
            log::error!("Cube shader rejected: {}", e);
            return Err(SetupError::Program(e.to_string()));
        }

        // Buffers
        let alignment = u64::from(device.limits().min_uniform_buffer_offset_alignment);
        let part_stride = MATRIX_SIZE.next_multiple_of(alignment);

        device.push_error_scope(wgpu::ErrorFilter::OutOfMemory);
        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Vertices"),
            contents: bytemuck::cast_slice::<CubeVertex, u8>(&CUBE_VERTICES),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Cube Indices"),
            contents: bytemuck::cast_slice(&CUBE_INDICES),
            usage: wgpu::BufferUsages::INDEX,
        });
        let globals_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("Projection"),
            contents: bytemuck::bytes_of(&MatrixUniform::from(camera.projection_matrix())),
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        });
        let parts_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("Part Matrices"),
            size: part_stride * MAX_CUBES as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Cube Bind Group"),
            layout: &bind_group_layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: globals_buffer.as_entire_binding(),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Buffer(wgpu::BufferBinding {
                        buffer: &parts_buffer,
                        offset: 0,
                        size: wgpu::BufferSize::new(MATRIX_SIZE),
                    }),
                },
            ],
        });
        let depth_view = create_depth_view(&device, width, height);
        if let Some(e) = device.pop_error_scope().await {
            log::error!("GPU buffer allocation failed: {}", e);
            return Err(SetupError::Resource(e.to_string()));
        }

        let [r, g, b, a] = viewer.clear_color;
        log::info!("Renderer ready: {:?} {}x{}", format, width, height);

        Ok(Self {
            canvas,
            device,
            queue,
            surface,
            config,
            pipeline,
            vertex_buffer,
            index_buffer,
            globals_buffer,
            parts_buffer,
            bind_group,
            part_stride,
            depth_view,
            clear_color: wgpu::Color { r, g, b, a },
            current: Mat4::IDENTITY,
            pending: Vec::with_capacity(MAX_CUBES),
        })
    }

    fn acquire_frame(&mut self) -> Option<wgpu::SurfaceTexture> {
        match self.surface.get_current_texture() {
            Ok(frame) => Some(frame),
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.config);
                self.surface.get_current_texture().ok()
            }
            Err(e) => {
                log::error!("Failed to acquire frame: {:?}", e);
                None
            }
        }
    }
}

impl CubeRenderer for Renderer {
    fn begin_frame(&mut self) {
        self.pending.clear();
    }

    fn set_view_matrix(&mut self, matrix: Mat4) {
        self.current = matrix;
    }

    fn draw_cube(&mut self) {
        if self.pending.len() < MAX_CUBES {
            self.pending.push(self.current);
        } else {
            log::warn!("More than {} cubes in one frame, dropping draw", MAX_CUBES);
        }
    }

    fn end_frame(&mut self) {
        let Some(frame) = self.acquire_frame() else {
            return;
        };

        let stride = self.part_stride as usize;
        let mut data = vec![0u8; stride * self.pending.len()];
        for (slot, matrix) in data.chunks_exact_mut(stride).zip(&self.pending) {
            let uniform = MatrixUniform::from(*matrix);
            slot[..MATRIX_SIZE as usize].copy_from_slice(bytemuck::bytes_of(&uniform));
        }
        if !data.is_empty() {
            self.queue.write_buffer(&self.parts_buffer, 0, &data);
        }

        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Figure Encoder"),
            });

        {
            let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Figure Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    depth_slice: None,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            pass.set_pipeline(&self.pipeline);
            pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
            pass.set_index_buffer(self.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            for i in 0..self.pending.len() {
                let offset = (i as u64 * self.part_stride) as u32;
                pass.set_bind_group(0, &self.bind_group, &[offset]);
                pass.draw_indexed(0..CUBE_INDEX_COUNT, 0, 0..1);
            }
        }

        self.queue.submit(std::iter::once(encoder.finish()));
        frame.present();
    }

    fn resize_viewport(&mut self, width: u32, height: u32, projection: Mat4) {
        let width = width.max(1);
        let height = height.max(1);
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        self.config.width = width;
        self.config.height = height;
        self.surface.configure(&self.device, &self.config);
        self.depth_view = create_depth_view(&self.device, width, height);

        self.queue.write_buffer(
            &self.globals_buffer,
            0,
            bytemuck::bytes_of(&MatrixUniform::from(projection)),
        );
        log::info!("Viewport resized to {}x{}", width, height);
    }
}

fn create_bind_group_layout(device: &wgpu::Device) -> wgpu::BindGroupLayout {
    device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("Cube Bind Group Layout"),
        entries: &[
            // Projection
            wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: wgpu::BufferSize::new(MATRIX_SIZE),
                },
                count: None,
            },
            // Per-part view * model, one slot per draw
            wgpu::BindGroupLayoutEntry {
                binding: 1,
                visibility: wgpu::ShaderStages::VERTEX,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: true,
                    min_binding_size: wgpu::BufferSize::new(MATRIX_SIZE),
                },
                count: None,
            },
        ],
    })
}

fn create_pipeline(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("Cube Shader"),
        source: wgpu::ShaderSource::Wgsl(include_str!("shaders/cube.wgsl").into()),
    });

    let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("Cube Pipeline Layout"),
        bind_group_layouts: &[bind_group_layout],
        push_constant_ranges: &[],
    });

    let vertex_layout = wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<CubeVertex>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3],
    };

    device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("Cube Pipeline"),
        layout: Some(&layout),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            buffers: &[vertex_layout],
            compilation_options: Default::default(),
        },
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            targets: &[Some(wgpu::ColorTargetState {
                format,
                blend: Some(wgpu::BlendState::REPLACE),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: Default::default(),
        }),
        primitive: wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            unclipped_depth: false,
            polygon_mode: wgpu::PolygonMode::Fill,
            conservative: false,
        },
        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::LessEqual,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),
        multiview: None,
        cache: None,
    })
}

fn create_depth_view(device: &wgpu::Device, width: u32, height: u32) -> wgpu::TextureView {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("Depth Texture"),
        size: wgpu::Extent3d {
            width,
            height,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    texture.create_view(&wgpu::TextureViewDescriptor::default())
}
