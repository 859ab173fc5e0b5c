use glam::{Vec2, Vec3};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    /// Unit length.
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Distance along the ray to `region`, front side only.
    pub fn intersect_region(&self, region: &HitRegion) -> Option<f32> {
        // The plane faces +Z; rays travelling away from it or along it miss.
        if self.direction.z > -1e-6 {
            return None;
        }
        let t = (region.center.z - self.origin.z) / self.direction.z;
        if t < 0.0 {
            return None;
        }
        let p = self.at(t);
        let d = (p.truncate() - region.center.truncate()).abs();
        (d.x <= region.half_extents.x && d.y <= region.half_extents.y).then_some(t)
    }
}

/// Invisible axis-aligned rectangle facing +Z, used only for picking.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRegion {
    pub center: Vec3,
    pub half_extents: Vec2,
}

/// Index of the nearest region hit by `ray`. On equal distance the lower
/// index wins.
pub fn pick_nearest<'a>(
    ray: &Ray,
    regions: impl IntoIterator<Item = &'a HitRegion>,
) -> Option<usize> {
    let mut best = None::<(usize, f32)>;
    for (i, region) in regions.into_iter().enumerate() {
        if let Some(t) = ray.intersect_region(region) {
            match best {
                Some((_, bt)) if t >= bt => {}
                _ => best = Some((i, t)),
            }
        }
    }
    best.map(|(i, _)| i)
}

/// Client-space pointer position to NDC relative to an element rect.
#[inline]
pub fn pointer_ndc(client: Vec2, rect_origin: Vec2, rect_size: Vec2) -> Option<Vec2> {
    if !(rect_size.x > 0.0 && rect_size.y > 0.0) {
        return None;
    }
    let local = client - rect_origin;
    Some(Vec2::new(
        (local.x / rect_size.x) * 2.0 - 1.0,
        -(local.y / rect_size.y) * 2.0 + 1.0,
    ))
}
