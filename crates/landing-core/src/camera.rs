//! Perspective camera used for both rendering and pointer picking.
//!
//! The camera is fixed apart from its aspect ratio, which follows the
//! viewport. Conventions are right-handed, looking down -Z in view space, with
//! a projection that maps depth to wgpu's `[0, 1]` clip range.

use crate::constants::{
    CAMERA_FAR, CAMERA_FOV_Y_DEG, CAMERA_NEAR, CAMERA_PITCH_RAD, CAMERA_POSITION,
};
use crate::picking::Ray;
use glam::{Mat4, Quat, Vec2, Vec3};

#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub position: Vec3,
    pub rotation: Quat,
    pub fov_y_degrees: f32,
    pub aspect: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl PerspectiveCamera {
    /// The landing-page camera: pulled back, shifted down and pitched up so the
    /// label column sits slightly above centre.
    pub fn landing(aspect: f32) -> Self {
        Self {
            position: CAMERA_POSITION,
            rotation: Quat::from_rotation_x(CAMERA_PITCH_RAD),
            fov_y_degrees: CAMERA_FOV_Y_DEG,
            aspect,
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }

    /// Set the aspect ratio from viewport dimensions. Degenerate sizes are
    /// ignored and reported as `false`.
    pub fn set_aspect(&mut self, width: f32, height: f32) -> bool {
        if !(width > 0.0 && height > 0.0) {
            return false;
        }
        self.aspect = width / height;
        true
    }

    /// World to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// View to clip space.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space ray from the eye through a point given in normalized device
    /// coordinates (`x` right, `y` up, both in `[-1, 1]` on screen).
    pub fn ray_from_ndc(&self, ndc: Vec2) -> Ray {
        let half_h = (self.fov_y_degrees.to_radians() * 0.5).tan();
        let dir_view = Vec3::new(ndc.x * half_h * self.aspect, ndc.y * half_h, -1.0);
        Ray::new(self.position, self.rotation * dir_view)
    }
}
