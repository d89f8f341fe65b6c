use std::fmt::Write;

use cubepick_common::ObjectId;
use cubepick_scene::Scene;

use crate::camera::OrbitCamera;

/// Renderer-agnostic interface.
///
/// A renderer reads the scene, the camera and the current selection and
/// produces output. It never mutates the scene; style changes belong to the
/// selection controller.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame.
    fn render(&self, scene: &Scene, camera: &OrbitCamera, selected: Option<ObjectId>)
    -> Self::Output;
}

/// Plain-text renderer for the CLI, logs and tests.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, scene: &Scene, camera: &OrbitCamera, selected: Option<ObjectId>) -> String {
        let mut out = String::new();
        let selected_name = selected
            .and_then(|id| scene.get(id))
            .map_or("None", |o| o.name.as_str());
        let eye = camera.eye();
        let target = camera.target;

        // Writing into a String cannot fail.
        let _ = writeln!(
            out,
            "=== Scene ({} objects, selected={selected_name}) ===",
            scene.len()
        );
        let _ = writeln!(
            out,
            "Camera: eye=({:.1}, {:.1}, {:.1}) target=({:.1}, {:.1}, {:.1}) fov={:.0}",
            eye.x,
            eye.y,
            eye.z,
            target.x,
            target.y,
            target.z,
            camera.fov.to_degrees()
        );

        for object in scene.objects() {
            let marker = if selected == Some(object.id) { '*' } else { ' ' };
            let p = object.transform.position;
            let _ = writeln!(
                out,
                "{marker} [{}] {} pos=({:.2}, {:.2}, {:.2}) color={} scale={:.2}",
                object.id,
                object.name,
                p.x,
                p.y,
                p.z,
                object.appearance.color,
                object.transform.scale.x
            );
        }

        if let Some(ground) = scene.ground() {
            let _ = writeln!(
                out,
                "  ground {0:.0}x{0:.0} at y={1:.2} color={2}",
                ground.size, ground.height, ground.color
            );
        }

        out
    }
}
