// Shared fixtures for host-side tests.

#![allow(dead_code)]

use landing_core::{Scene, Typeface, LINKS};

/// Tiny typeface: a square `o` with a square hole, a tall `l`, a rounded `c`
/// made of quadratic curves, a cubic `s`, a blank space and a `?` fallback.
pub const TEST_FONT_JSON: &str = r#"{
    "glyphs": {
        "o": { "ha": 800, "x_min": 0, "x_max": 700,
               "o": "m 0 0 l 700 0 l 700 700 l 0 700 m 200 200 l 200 500 l 500 500 l 500 200" },
        "l": { "ha": 300, "x_min": 0, "x_max": 200,
               "o": "m 0 0 l 200 0 l 200 1000 l 0 1000 z" },
        "c": { "ha": 700,
               "o": "m 600 350 q 350 0 600 0 q 100 350 100 0 q 350 700 100 700 q 600 350 600 700" },
        "s": { "ha": 700,
               "o": "m 0 0 b 600 0 200 -100 400 -100 l 600 600 l 0 600" },
        " ": { "ha": 400 },
        "?": { "ha": 600, "o": "m 0 0 l 500 0 l 500 500 l 0 500" }
    },
    "familyName": "Test Sans",
    "ascender": 1000,
    "descender": -200,
    "resolution": 1000,
    "boundingBox": { "yMin": -200, "xMin": 0, "yMax": 1000, "xMax": 800 },
    "underlineThickness": 50
}"#;

pub fn test_font() -> Typeface {
    Typeface::from_json(TEST_FONT_JSON).expect("fixture font parses")
}

pub fn populated_scene() -> Scene {
    let mut scene = Scene::new(1280, 720, 42);
    assert!(scene.populate(&LINKS, &test_font()));
    scene
}

/// NDC at which `world` appears on screen.
pub fn ndc_of(scene: &Scene, world: glam::Vec3) -> glam::Vec2 {
    let clip = scene.camera.view_projection() * world.extend(1.0);
    glam::Vec2::new(clip.x / clip.w, clip.y / clip.w)
}

pub fn assert_close(a: f32, b: f32, tol: f32) {
    assert!((a - b).abs() <= tol, "expected {b}, got {a} (tol {tol})");
}
