use super::helpers;
use super::mesh_pass::SceneLayouts;
use crate::core::{box_edges, LineVertex, BOX_SIZE};
use wgpu::util::DeviceExt;

const LINE_ATTRIBUTES: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x3];

/// Unlit line-list pipeline plus the unit box every item shares.
pub(crate) struct LineResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) box_vertices: wgpu::Buffer,
    pub(crate) box_vertex_count: u32,
}

pub(crate) fn create_line_resources(
    device: &wgpu::Device,
    layouts: &SceneLayouts,
    color_format: wgpu::TextureFormat,
) -> LineResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("lines_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::LINES_WGSL.into()),
    });
    let pipeline = helpers::make_scene_pipeline(
        device,
        "lines_pipeline",
        &layouts.pipeline,
        &shader,
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LineVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &LINE_ATTRIBUTES,
        },
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::LineList,
            ..Default::default()
        },
        color_format,
    );
    let edges = box_edges(BOX_SIZE);
    let box_vertices = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("box_edges"),
        contents: bytemuck::cast_slice(&edges),
        usage: wgpu::BufferUsages::VERTEX,
    });
    LineResources {
        pipeline,
        box_vertices,
        box_vertex_count: edges.len() as u32,
    }
}
