pub mod camera;
pub mod color;
pub mod constants;
pub mod extrude;
pub mod layout;
pub mod links;
pub mod mesh;
pub mod picking;
pub mod scene;
pub mod typeface;
pub mod wireframe;

pub use camera::PerspectiveCamera;
pub use color::{hex_to_linear_rgba, palette_color};
pub use constants::*;
pub use extrude::{extrude_shapes, ExtrudeParams, MeshError};
pub use links::{LinkEntry, LINKS};
pub use mesh::{LineVertex, MeshData, Vertex};
pub use picking::{pick_nearest, pointer_ndc, HitRegion, Ray};
pub use scene::{ClickOutcome, Item, Lights, ScalePair, Scene, Viewport};
pub use typeface::{FontError, Shape, Typeface};
pub use wireframe::box_edges;
