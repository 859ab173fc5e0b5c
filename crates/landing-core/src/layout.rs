use crate::constants::{BOX_OFFSET_X, BOX_OFFSET_Z, HIT_HEIGHT, HIT_WIDTH, HIT_Z};
use crate::picking::HitRegion;
use glam::{Vec2, Vec3};

/// Vertical position of item `index` in a column of `count` items centred on
/// the origin, first item on top.
#[inline]
pub fn item_y(index: usize, count: usize, spacing: f32) -> f32 {
    let total_height = count.saturating_sub(1) as f32 * spacing;
    total_height / 2.0 - index as f32 * spacing
}

#[inline]
pub fn label_position(y: f32) -> Vec3 {
    Vec3::new(0.0, y, 0.0)
}

/// Hit plane for a label at `label`, pushed slightly toward the camera.
#[inline]
pub fn hit_region_for(label: Vec3) -> HitRegion {
    HitRegion {
        center: Vec3::new(label.x, label.y, HIT_Z),
        half_extents: Vec2::new(HIT_WIDTH * 0.5, HIT_HEIGHT * 0.5),
    }
}

/// Offset of the companion box from its label. Only the sideways part follows
/// the label scale.
#[inline]
pub fn box_offset(scale: f32) -> Vec3 {
    Vec3::new(BOX_OFFSET_X * scale, 0.0, BOX_OFFSET_Z)
}
