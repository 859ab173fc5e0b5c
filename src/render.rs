use crate::constants::{CLEAR_RGBA, DEPTH_CLEAR};
use crate::core::{Item, MeshData, Scene};
use helpers::UniformSlot;
use mesh_pass::{FrameUniforms, ObjectUniforms, SceneLayouts};
use web_sys as web;
use wgpu::util::DeviceExt;

mod helpers;
mod line_pass;
mod mesh_pass;
mod targets;

use targets::RenderTargets;

/// GPU copy of one label's extruded text.
struct LabelBuffers {
    vertices: wgpu::Buffer,
    indices: wgpu::Buffer,
    index_count: u32,
}

impl LabelBuffers {
    fn upload(device: &wgpu::Device, mesh: &MeshData, name: &str) -> Option<Self> {
        if mesh.is_empty() {
            return None;
        }
        let vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(name),
            contents: bytemuck::cast_slice(&mesh.vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let indices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(name),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });
        Some(Self {
            vertices,
            indices,
            index_count: mesh.indices.len() as u32,
        })
    }
}

struct ItemResources {
    label: Option<LabelBuffers>,
    label_uniforms: UniformSlot,
    box_uniforms: UniformSlot,
}

pub struct GpuState {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    layouts: SceneLayouts,
    mesh_pipeline: wgpu::RenderPipeline,
    lines: line_pass::LineResources,
    frame_uniforms: UniformSlot,
    targets: RenderTargets,
    // Uploaded lazily, once the scene has been populated.
    items: Vec<ItemResources>,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement) -> anyhow::Result<Self> {
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
            .find(|f| f.is_srgb())
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
        log::info!("[gpu] surface {}x{} {:?}", width, height, format);

        let layouts = mesh_pass::create_scene_layouts(&device);
        let mesh_pipeline = mesh_pass::create_mesh_pipeline(&device, &layouts, format);
        let lines = line_pass::create_line_resources(&device, &layouts, format);
        let frame_uniforms = UniformSlot::new(
            &device,
            &layouts.frame,
            "frame_uniforms",
            &<FrameUniforms as bytemuck::Zeroable>::zeroed(),
        );
        let targets = RenderTargets::new(&device, width, height);
        let [r, g, b, a] = CLEAR_RGBA;

        Ok(Self {
            surface,
            device,
            queue,
            config,
            layouts,
            mesh_pipeline,
            lines,
            frame_uniforms,
            targets,
            items: Vec::new(),
            width,
            height,
            clear_color: wgpu::Color { r, g, b, a },
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
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reapply the current configuration after the surface was lost.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    fn upload_items(&mut self, items: &[Item]) {
        for (i, item) in items.iter().enumerate().skip(self.items.len()) {
            let label_uniforms = UniformSlot::new(
                &self.device,
                &self.layouts.object,
                "label_uniforms",
                &ObjectUniforms::new(item.label_matrix(), item.label_color),
            );
            let box_uniforms = UniformSlot::new(
                &self.device,
                &self.layouts.object,
                "box_uniforms",
                &ObjectUniforms::new(item.box_matrix(), item.box_color),
            );
            let label = LabelBuffers::upload(
                &self.device,
                &item.label_mesh,
                &format!("label_{}", i),
            );
            if label.is_none() {
                log::warn!("[gpu] label {:?} has no geometry", item.entry.text);
            }
            self.items.push(ItemResources {
                label,
                label_uniforms,
                box_uniforms,
            });
        }
    }

    fn write_uniforms(&self, scene: &Scene) {
        let frame = FrameUniforms::new(&scene.camera, &scene.lights());
        self.frame_uniforms.write(&self.queue, &frame);
        for (item, res) in scene.items().iter().zip(&self.items) {
            res.label_uniforms.write(
                &self.queue,
                &ObjectUniforms::new(item.label_matrix(), item.label_color),
            );
            res.box_uniforms.write(
                &self.queue,
                &ObjectUniforms::new(item.box_matrix(), item.box_color),
            );
        }
    }

    pub fn render(&mut self, scene: &Scene) -> Result<(), wgpu::SurfaceError> {
        if scene.items().len() > self.items.len() {
            self.upload_items(scene.items());
        }
        self.write_uniforms(scene);

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
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
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(DEPTH_CLEAR),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_bind_group(0, &self.frame_uniforms.bind_group, &[]);

            rpass.set_pipeline(&self.mesh_pipeline);
            for res in &self.items {
                let Some(label) = &res.label else {
                    continue;
                };
                rpass.set_bind_group(1, &res.label_uniforms.bind_group, &[]);
                rpass.set_vertex_buffer(0, label.vertices.slice(..));
                rpass.set_index_buffer(label.indices.slice(..), wgpu::IndexFormat::Uint32);
                rpass.draw_indexed(0..label.index_count, 0, 0..1);
            }

            rpass.set_pipeline(&self.lines.pipeline);
            rpass.set_vertex_buffer(0, self.lines.box_vertices.slice(..));
            for res in &self.items {
                rpass.set_bind_group(1, &res.box_uniforms.bind_group, &[]);
                rpass.draw(0..self.lines.box_vertex_count, 0..1);
            }
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
