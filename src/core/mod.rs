pub use landing_core::*;

// Shaders bundled as string constants
pub static MESH_WGSL: &str = include_str!("../../shaders/mesh.wgsl");
pub static LINES_WGSL: &str = include_str!("../../shaders/lines.wgsl");
