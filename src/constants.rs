/// Browser-side constants: canvas styling, navigation and clear colour.
///
/// Scene tuning (layout, animation, camera, lights) lives in `landing-core`.
// Canvas element
pub const CANVAS_ID: &str = "landing-canvas";
pub const CANVAS_STYLE: [(&str, &str); 5] = [
    ("position", "absolute"),
    ("top", "0"),
    ("left", "0"),
    ("width", "100%"),
    ("height", "100%"),
];

// Links open in a fresh browsing context with no back-reference.
pub const LINK_TARGET: &str = "_blank";
pub const LINK_FEATURES: &str = "noopener,noreferrer";

// Framebuffer clear colour (linear RGBA)
pub const CLEAR_RGBA: [f64; 4] = [0.0, 0.0, 0.0, 1.0];

// Depth buffer
pub const DEPTH_CLEAR: f32 = 1.0;

// Upper bound for the canvas backing store; WebGPU rejects larger textures.
pub const MAX_BACKING_PX: u32 = 8192;
