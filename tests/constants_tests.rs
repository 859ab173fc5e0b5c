// Host-side tests for the browser constants and bundled shaders.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use landing_core::{HIGHLIGHT_COLOR, HOVER_SCALE, IDLE_SCALE, PALETTE};

const MESH_WGSL: &str = include_str!("../shaders/mesh.wgsl");
const LINES_WGSL: &str = include_str!("../shaders/lines.wgsl");

#[test]
fn canvas_covers_the_viewport() {
    let style = |name: &str| {
        CANVAS_STYLE
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| *v)
    };
    assert_eq!(style("position"), Some("absolute"));
    assert_eq!(style("top"), Some("0"));
    assert_eq!(style("left"), Some("0"));
    assert_eq!(style("width"), Some("100%"));
    assert_eq!(style("height"), Some("100%"));
}

#[test]
fn links_open_without_opener() {
    assert_eq!(LINK_TARGET, "_blank");
    let features: Vec<&str> = LINK_FEATURES.split(',').collect();
    assert!(features.contains(&"noopener"));
    assert!(features.contains(&"noreferrer"));
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn clear_and_depth_values_are_normalized() {
    assert!(CLEAR_RGBA.iter().all(|c| (0.0..=1.0).contains(c)));
    assert_eq!(CLEAR_RGBA[3], 1.0);
    assert_eq!(DEPTH_CLEAR, 1.0);
    assert!(MAX_BACKING_PX >= 2048);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn highlight_differs_from_every_palette_colour() {
    assert!(PALETTE.iter().all(|c| *c != HIGHLIGHT_COLOR));
    assert!(HOVER_SCALE > IDLE_SCALE);
}

#[test]
fn shaders_expose_expected_entry_points() {
    for src in [MESH_WGSL, LINES_WGSL] {
        assert!(src.contains("fn vs_main("));
        assert!(src.contains("fn fs_main("));
        assert!(src.contains("@group(0) @binding(0) var<uniform> u_frame"));
        assert!(src.contains("@group(1) @binding(0) var<uniform> u_object"));
    }
}

#[test]
fn shaders_agree_on_uniform_layout() {
    let block = |src: &'static str, name: &str| -> String {
        let start = src
            .find(&format!("struct {name} {{"))
            .unwrap_or_else(|| panic!("{name} missing"));
        let end = start + src[start..].find("};").expect("struct terminated");
        src[start..end]
            .lines()
            .map(str::trim)
            .filter(|l| !l.starts_with("//"))
            .collect::<Vec<_>>()
            .join("\n")
    };
    for name in ["FrameUniforms", "ObjectUniforms"] {
        assert_eq!(block(MESH_WGSL, name), block(LINES_WGSL, name), "{name}");
    }
}
