use glam::{Mat4, Vec2, Vec3, Vec4};

/// Anything that can turn world space into clip space.
///
/// The picker only needs the combined matrix, so any camera model works.
pub trait ViewProjection {
    fn view_projection(&self) -> Mat4;
}

impl ViewProjection for Mat4 {
    fn view_projection(&self) -> Mat4 {
        *self
    }
}

/// A half-line in world space. `direction` is unit length.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    /// Ray with a normalized copy of `direction`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Build the pick ray through normalized device coordinates.
    ///
    /// `ndc` is in `[-1, 1]` on both axes with +Y up. Values outside that
    /// range are accepted and simply point outside the view frustum. The
    /// origin is the unprojected point on the near plane (depth 0) and the
    /// direction runs toward the far plane (depth 1).
    pub fn from_ndc(ndc: Vec2, camera: &impl ViewProjection) -> Self {
        let inv_vp = camera.view_projection().inverse();
        let near4 = inv_vp * Vec4::new(ndc.x, ndc.y, 0.0, 1.0);
        let far4 = inv_vp * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let near = near4.truncate() / near4.w;
        let far = far4.truncate() / far4.w;
        Self::new(near, far - near)
    }

    /// Point at distance `t` along the ray.
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera(eye: Vec3, target: Vec3) -> Mat4 {
        let view = Mat4::look_at_rh(eye, target, Vec3::Y);
        let proj = Mat4::perspective_rh(75.0_f32.to_radians(), 16.0 / 9.0, 0.1, 1000.0);
        proj * view
    }

    #[test]
    fn center_ray_points_at_target() {
        let eye = Vec3::new(10.0, 8.0, 12.0);
        let ray = Ray::from_ndc(Vec2::ZERO, &camera(eye, Vec3::ZERO));
        let expected = (Vec3::ZERO - eye).normalize();
        assert!(ray.direction.abs_diff_eq(expected, 1e-4));
        // Origin sits on the near plane, just in front of the eye.
        assert!((ray.origin - eye).length() < 0.2);
    }

    #[test]
    fn positive_ndc_y_points_up() {
        let eye = Vec3::new(0.0, 0.0, 10.0);
        let vp = camera(eye, Vec3::ZERO);
        let up = Ray::from_ndc(Vec2::new(0.0, 0.5), &vp);
        let down = Ray::from_ndc(Vec2::new(0.0, -0.5), &vp);
        assert!(up.direction.y > 0.0);
        assert!(down.direction.y < 0.0);
    }

    #[test]
    fn out_of_range_ndc_is_tolerated() {
        let vp = camera(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO);
        let ray = Ray::from_ndc(Vec2::new(3.0, -2.0), &vp);
        assert!(ray.direction.is_finite());
        assert!((ray.direction.length() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn at_walks_along_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -2.0));
        assert_eq!(ray.at(3.0), Vec3::new(0.0, 0.0, -3.0));
    }
}
