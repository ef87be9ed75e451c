//! Chase camera
//!
//! The sim moves a camera holder behind the ball; the eye sits at a fixed
//! local offset from that holder and always faces -Z down the track.

use glam::{Mat4, Vec3};

use crate::consts::CAMERA_OFFSET;

pub struct Camera {
    /// Holder position driven by the sim's camera anchor
    pub anchor: Vec3,
    /// Vertical field of view in radians
    fov: f32,
    /// Aspect ratio (width / height)
    aspect: f32,
    near: f32,
    far: f32,
}

impl Camera {
    pub fn new(aspect: f32) -> Self {
        Self {
            anchor: Vec3::ZERO,
            fov: 75.0_f32.to_radians(),
            aspect,
            near: 0.1,
            far: 1000.0,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    pub fn follow(&mut self, anchor: Vec3) {
        self.anchor = anchor;
    }

    /// World-space eye position (holder plus local offset)
    pub fn eye(&self) -> Vec3 {
        self.anchor + Vec3::from(CAMERA_OFFSET)
    }

    /// Combined view-projection matrix
    pub fn view_proj(&self) -> Mat4 {
        let eye = self.eye();
        let view = Mat4::look_at_rh(eye, eye - Vec3::Z, Vec3::Y);
        let proj = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eye_offset_from_anchor() {
        let mut camera = Camera::new(16.0 / 9.0);
        camera.follow(Vec3::new(0.0, 12.0, 5.0));
        assert_eq!(camera.eye(), Vec3::new(0.0, 13.0, 10.0));
    }

    #[test]
    fn test_point_ahead_projects_to_center() {
        let camera = Camera::new(1.0);
        // Straight down -Z from the eye
        let p = camera.eye() - Vec3::new(0.0, 0.0, 10.0);
        let clip = camera.view_proj() * p.extend(1.0);
        let ndc = clip / clip.w;
        assert!(ndc.x.abs() < 1e-5);
        assert!(ndc.y.abs() < 1e-5);
        assert!(clip.w > 0.0);
    }

    #[test]
    fn test_point_behind_has_negative_w() {
        let camera = Camera::new(1.0);
        let p = camera.eye() + Vec3::new(0.0, 0.0, 10.0);
        let clip = camera.view_proj() * p.extend(1.0);
        assert!(clip.w < 0.0);
    }
}
