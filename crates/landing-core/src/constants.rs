use glam::Vec3;

// Tuning values for the landing scene. Colours are sRGB hex.

// Layout
pub const VERTICAL_SPACING: f32 = 8.0; // distance between consecutive labels

// Palette shared by labels and their boxes, indexed by `item % len`
pub const PALETTE: [u32; 4] = [0xF098C4, 0xFAE4E1, 0x96B3FF, 0x98C5D8];
pub const HIGHLIGHT_COLOR: u32 = 0xFFFFFF; // clicked labels stay this colour

// Hover scale animation
pub const IDLE_SCALE: f32 = 1.0;
pub const HOVER_SCALE: f32 = 1.4;
pub const SCALE_TAU_SEC: f32 = 0.5;

// Vertical "breathing" applied on top of the hover scale
pub const BREATH_AMPLITUDE: f32 = 0.05;
pub const BREATH_RATE_PER_MS: f64 = 0.005;

// Companion wireframe box
pub const BOX_SIZE: f32 = 2.0;
pub const BOX_OFFSET_X: f32 = -4.0; // multiplied by the current label scale
pub const BOX_OFFSET_Z: f32 = -2.0;
pub const BOX_SPEED_MIN: f32 = 0.01; // radians per frame, inclusive
pub const BOX_SPEED_MAX: f32 = 0.06; // exclusive
pub const BOX_SPEED_HOVER: f32 = 0.2;

// Invisible hit-test planes
pub const HIT_WIDTH: f32 = 10.0;
pub const HIT_HEIGHT: f32 = 5.0;
pub const HIT_Z: f32 = 1.0;

// Camera
pub const CAMERA_FOV_Y_DEG: f32 = 75.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;
pub const CAMERA_POSITION: Vec3 = Vec3::new(3.0, -10.0, 40.0);
pub const CAMERA_PITCH_RAD: f32 = 0.2;

// Lights
pub const LIGHT_COLOR: u32 = 0xFFFFFF;
pub const AMBIENT_INTENSITY: f32 = 2.0;
pub const POINT_INTENSITY: f32 = 20.0;
pub const POINT_LIGHT_POSITION: Vec3 = Vec3::new(5.0, 5.0, 5.0);

// Label text geometry
pub const FONT_URL: &str = "https://threejs.org/examples/fonts/helvetiker_bold.typeface.json";
pub const TEXT_SIZE: f32 = 3.0;
pub const TEXT_DEPTH: f32 = 0.05;
pub const CURVE_SEGMENTS: usize = 12;
pub const BEVEL_THICKNESS: f32 = 0.03;
pub const BEVEL_SIZE: f32 = 0.02;
pub const BEVEL_OFFSET: f32 = 0.0;
pub const BEVEL_SEGMENTS: usize = 5;
