use glam::Vec3;
use landing_core::color::{hex_to_linear_rgba, hex_to_srgb, palette_color, srgb_to_linear};
use landing_core::wireframe::box_edges;
use landing_core::{LINKS, PALETTE};

#[test]
fn box_has_twelve_unit_edges() {
    let lines = box_edges(2.0);
    assert_eq!(lines.len(), 24);
    for pair in lines.chunks_exact(2) {
        let a = Vec3::from_array(pair[0].position);
        let b = Vec3::from_array(pair[1].position);
        assert!((a.distance(b) - 2.0).abs() < 1e-6);
        // axis-aligned: exactly one coordinate differs
        let diff = (a - b).abs();
        let moving = [diff.x, diff.y, diff.z].iter().filter(|d| **d > 0.0).count();
        assert_eq!(moving, 1);
    }
}

#[test]
fn every_corner_has_three_edges() {
    let lines = box_edges(1.0);
    let corners: Vec<Vec3> = lines.iter().map(|v| Vec3::from_array(v.position)).collect();
    for c in &corners {
        assert_eq!(c.abs(), Vec3::splat(0.5));
        let n = corners.iter().filter(|o| *o == c).count();
        assert_eq!(n, 3, "corner {c} has {n} edges");
    }
}

#[test]
fn hex_decodes_channels() {
    assert_eq!(hex_to_srgb(0xFF0000), [1.0, 0.0, 0.0]);
    assert_eq!(hex_to_srgb(0x00FF00), [0.0, 1.0, 0.0]);
    let [r, g, b] = hex_to_srgb(0xF098C4);
    assert!((r - 240.0 / 255.0).abs() < 1e-6);
    assert!((g - 152.0 / 255.0).abs() < 1e-6);
    assert!((b - 196.0 / 255.0).abs() < 1e-6);
}

#[test]
fn srgb_curve_endpoints_and_monotonic() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!((srgb_to_linear(0.5) - 0.214).abs() < 1e-3);
    let mut prev = -1.0;
    for i in 0..=100 {
        let v = srgb_to_linear(i as f32 / 100.0);
        assert!(v > prev);
        prev = v;
    }
    assert_eq!(hex_to_linear_rgba(0xFFFFFF), [1.0, 1.0, 1.0, 1.0]);
}

#[test]
fn palette_wraps_by_index() {
    for i in 0..10 {
        assert_eq!(palette_color(i), PALETTE[i % 4]);
    }
}

#[test]
fn link_table_is_well_formed() {
    assert_eq!(LINKS.len(), 4);
    assert_eq!(LINKS[0].text, "elijah");
    assert_eq!(LINKS[0].subtitle, Some("Fullstack Engineer"));
    for link in &LINKS {
        assert!(!link.text.is_empty());
        assert!(link.url.starts_with("https://"), "{} is not https", link.url);
    }
}
