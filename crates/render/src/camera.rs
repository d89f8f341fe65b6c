use cubepick_picking::ViewProjection;
use cubepick_scene::CameraConfig;
use glam::{Mat4, Vec3};

/// Elevation limit, just short of straight up or down.
const MAX_PITCH: f32 = std::f32::consts::FRAC_PI_2 - 1e-3;

/// Orbit camera circling a target point.
///
/// Drag input accumulates yaw/pitch velocity which `update` bleeds off by
/// `damping` each frame, so motion eases out after the pointer stops. With
/// `damping` of 0 input is applied immediately.
/// Camera motion lives outside the scene; it never changes selection.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub distance: f32,
    /// Azimuth around +Y, measured from +Z toward +X.
    pub yaw: f32,
    /// Elevation above the XZ plane.
    pub pitch: f32,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    pub min_distance: f32,
    pub max_distance: f32,
    pub damping: f32,
    pub zoom_step: f32,
    yaw_velocity: f32,
    pitch_velocity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default(), 16.0 / 9.0)
    }
}

impl OrbitCamera {
    /// Place the camera at `config.eye`, looking at `config.target`.
    pub fn from_config(config: &CameraConfig, aspect: f32) -> Self {
        let offset = config.eye - config.target;
        let raw_distance = offset.length().max(f32::EPSILON);
        let pitch = (offset.y / raw_distance).clamp(-1.0, 1.0).asin();
        let yaw = offset.x.atan2(offset.z);

        Self {
            target: config.target,
            distance: raw_distance.clamp(config.min_distance, config.max_distance),
            yaw,
            pitch: pitch.clamp(-MAX_PITCH, MAX_PITCH),
            fov: config.fov_degrees.to_radians(),
            aspect,
            near: config.near,
            far: config.far,
            min_distance: config.min_distance,
            max_distance: config.max_distance,
            damping: config.damping,
            zoom_step: 0.95,
            yaw_velocity: 0.0,
            pitch_velocity: 0.0,
        }
    }

    /// World-space eye position.
    pub fn eye(&self) -> Vec3 {
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        self.target
            + Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw) * self.distance
    }

    /// Update the aspect ratio after a viewport resize.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// Queue an orbit from a pointer drag of `(dx, dy)` pixels.
    ///
    /// Dragging the full viewport height turns the camera by one revolution.
    pub fn drag(&mut self, dx: f32, dy: f32, viewport_height: u32) {
        let per_pixel = std::f32::consts::TAU / viewport_height.max(1) as f32;
        self.yaw_velocity -= dx * per_pixel;
        self.pitch_velocity += dy * per_pixel;
    }

    /// Zoom by scroll `lines`. Positive moves closer.
    pub fn zoom(&mut self, lines: f32) {
        self.distance = (self.distance * self.zoom_step.powf(lines))
            .clamp(self.min_distance, self.max_distance);
    }

    /// Advance one frame of orbit motion. Returns whether the camera moved.
    pub fn update(&mut self) -> bool {
        if self.yaw_velocity == 0.0 && self.pitch_velocity == 0.0 {
            return false;
        }

        let factor = if self.damping > 0.0 { self.damping } else { 1.0 };
        self.yaw += self.yaw_velocity * factor;
        self.pitch = (self.pitch + self.pitch_velocity * factor).clamp(-MAX_PITCH, MAX_PITCH);
        self.yaw_velocity *= 1.0 - factor;
        self.pitch_velocity *= 1.0 - factor;

        if self.yaw_velocity.abs() < 1e-6 {
            self.yaw_velocity = 0.0;
        }
        if self.pitch_velocity.abs() < 1e-6 {
            self.pitch_velocity = 0.0;
        }
        true
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }
}

impl ViewProjection for OrbitCamera {
    fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_camera_starts_at_configured_eye() {
        let cam = OrbitCamera::default();
        assert!(cam.eye().abs_diff_eq(Vec3::new(10.0, 8.0, 12.0), 1e-4));
        assert_eq!(cam.target, Vec3::ZERO);
        let vp = cam.view_projection();
        assert!(!vp.col(0).x.is_nan());
    }

    #[test]
    fn far_eye_is_clamped_to_max_distance() {
        let config = CameraConfig {
            eye: Vec3::new(0.0, 0.0, 500.0),
            ..CameraConfig::default()
        };
        let cam = OrbitCamera::from_config(&config, 1.0);
        assert_eq!(cam.distance, 50.0);
    }

    #[test]
    fn drag_with_damping_eases_out() {
        let mut cam = OrbitCamera::default();
        let start_yaw = cam.yaw;
        cam.drag(100.0, 0.0, 720);

        assert!(cam.update());
        let first_step = (cam.yaw - start_yaw).abs();
        let before = cam.yaw;
        assert!(cam.update());
        let second_step = (cam.yaw - before).abs();
        assert!(first_step > 0.0);
        assert!(second_step < first_step);
    }

    #[test]
    fn no_damping_applies_immediately() {
        let mut cam = OrbitCamera {
            damping: 0.0,
            ..OrbitCamera::default()
        };
        let start_yaw = cam.yaw;
        cam.drag(-72.0, 0.0, 720);
        assert!(cam.update());
        assert!((cam.yaw - start_yaw - std::f32::consts::TAU / 10.0).abs() < 1e-5);
        assert!(!cam.update());
    }

    #[test]
    fn pitch_never_flips_over_the_pole() {
        let mut cam = OrbitCamera {
            damping: 0.0,
            ..OrbitCamera::default()
        };
        cam.drag(0.0, 10_000.0, 100);
        cam.update();
        assert!(cam.pitch <= MAX_PITCH);
        assert!(cam.eye().is_finite());
    }

    #[test]
    fn orbit_keeps_distance_to_target() {
        let mut cam = OrbitCamera::default();
        let d = cam.distance;
        cam.drag(250.0, -40.0, 720);
        for _ in 0..100 {
            cam.update();
        }
        assert!(((cam.eye() - cam.target).length() - d).abs() < 1e-3);
    }

    #[test]
    fn zoom_is_clamped() {
        let mut cam = OrbitCamera::default();
        cam.zoom(1000.0);
        assert_eq!(cam.distance, cam.min_distance);
        cam.zoom(-1000.0);
        assert_eq!(cam.distance, cam.max_distance);
    }

    #[test]
    fn resize_updates_aspect_only() {
        let mut cam = OrbitCamera::default();
        let eye = cam.eye();
        cam.resize(800, 400);
        assert_eq!(cam.aspect, 2.0);
        assert_eq!(cam.eye(), eye);
        cam.resize(800, 0);
        assert!(cam.aspect.is_finite());
    }

    #[test]
    fn view_looks_at_target() {
        let cam = OrbitCamera::default();
        let target_in_view = cam.view_matrix().transform_point3(cam.target);
        assert!(target_in_view.x.abs() < 1e-4 && target_in_view.y.abs() < 1e-4);
        assert!(target_in_view.z < 0.0);
    }
}
