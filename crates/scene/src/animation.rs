use glam::{EulerRot, Quat};

/// Idle wobble for the object at `index` after `elapsed` seconds.
///
/// Stateless: the same `(elapsed, index)` always gives the same rotation.
/// Yaw swings within ±0.1 rad and pitch within ±0.05 rad, phase-shifted per
/// object so neighbours do not move in lockstep.
pub fn idle_rotation(elapsed: f32, index: usize) -> Quat {
    let i = index as f32;
    let yaw = (elapsed + i * 0.5).sin() * 0.1;
    let pitch = (elapsed + i * 0.3).cos() * 0.05;
    Quat::from_euler(EulerRot::XYZ, pitch, yaw, 0.0)
}
