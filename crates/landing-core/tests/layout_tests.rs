use landing_core::constants::{HIT_HEIGHT, HIT_WIDTH, HIT_Z, VERTICAL_SPACING};
use landing_core::layout::*;
use glam::Vec3;

#[test]
fn four_items_are_centred_around_origin() {
    assert_eq!(item_y(0, 4, 8.0), 12.0);
    assert_eq!(item_y(1, 4, 8.0), 4.0);
    assert_eq!(item_y(2, 4, 8.0), -4.0);
    assert_eq!(item_y(3, 4, 8.0), -12.0);
}

#[test]
fn positions_sum_to_zero_for_any_count() {
    for count in 1..10 {
        let sum: f32 = (0..count).map(|i| item_y(i, count, VERTICAL_SPACING)).sum();
        assert!(sum.abs() < 1e-4, "count {count} not centred: {sum}");
    }
}

#[test]
fn single_item_sits_on_origin() {
    assert_eq!(item_y(0, 1, VERTICAL_SPACING), 0.0);
}

#[test]
fn hit_region_is_in_front_of_label() {
    let label = label_position(4.0);
    let region = hit_region_for(label);
    assert_eq!(region.center, Vec3::new(0.0, 4.0, HIT_Z));
    assert_eq!(region.half_extents.x * 2.0, HIT_WIDTH);
    assert_eq!(region.half_extents.y * 2.0, HIT_HEIGHT);
}

#[test]
fn box_offset_follows_scale_sideways_only() {
    assert_eq!(box_offset(1.0), Vec3::new(-4.0, 0.0, -2.0));
    assert_eq!(box_offset(1.4), Vec3::new(-4.0 * 1.4, 0.0, -2.0));
}
