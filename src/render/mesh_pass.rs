use super::helpers;
use crate::core::{hex_to_linear_rgba, Lights, PerspectiveCamera, Vertex};
use glam::Mat4;

/// Bind group 0, shared by every draw in a frame.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct FrameUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) camera_pos: [f32; 4],
    pub(crate) light_pos: [f32; 4],
    pub(crate) light_color: [f32; 4],
    /// x = ambient, y = point light.
    pub(crate) intensities: [f32; 4],
}

impl FrameUniforms {
    pub(crate) fn new(camera: &PerspectiveCamera, lights: &Lights) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            camera_pos: camera.position.extend(1.0).to_array(),
            light_pos: lights.point_position.extend(1.0).to_array(),
            light_color: hex_to_linear_rgba(lights.color),
            intensities: [lights.ambient_intensity, lights.point_intensity, 0.0, 0.0],
        }
    }
}

/// Bind group 1, one per drawn object.
#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ObjectUniforms {
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) normal_matrix: [[f32; 4]; 4],
    pub(crate) color: [f32; 4],
}

impl ObjectUniforms {
    pub(crate) fn new(model: Mat4, color: u32) -> Self {
        Self {
            model: model.to_cols_array_2d(),
            normal_matrix: model.inverse().transpose().to_cols_array_2d(),
            color: hex_to_linear_rgba(color),
        }
    }
}

pub(crate) struct SceneLayouts {
    pub(crate) frame: wgpu::BindGroupLayout,
    pub(crate) object: wgpu::BindGroupLayout,
    pub(crate) pipeline: wgpu::PipelineLayout,
}

pub(crate) fn create_scene_layouts(device: &wgpu::Device) -> SceneLayouts {
    let visibility = wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT;
    let frame = helpers::uniform_layout(device, "frame_bgl", visibility);
    let object = helpers::uniform_layout(device, "object_bgl", visibility);
    let pipeline = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("scene_pl"),
        bind_group_layouts: &[&frame, &object],
        push_constant_ranges: &[],
    });
    SceneLayouts {
        frame,
        object,
        pipeline,
    }
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

/// Lit, depth-tested pipeline for the extruded labels.
pub(crate) fn create_mesh_pipeline(
    device: &wgpu::Device,
    layouts: &SceneLayouts,
    color_format: wgpu::TextureFormat,
) -> wgpu::RenderPipeline {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mesh_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::MESH_WGSL.into()),
    });
    helpers::make_scene_pipeline(
        device,
        "mesh_pipeline",
        &layouts.pipeline,
        &shader,
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &VERTEX_ATTRIBUTES,
        },
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            front_face: wgpu::FrontFace::Ccw,
            cull_mode: Some(wgpu::Face::Back),
            ..Default::default()
        },
        color_format,
    )
}
