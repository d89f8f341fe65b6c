//! Rendering adapter: renderer-agnostic interface and the orbit camera.
//!
//! # Invariants
//! - Renderers never mutate the scene.
//! - Render output derives from scene state, camera and selection.
//! - Camera motion never affects selection.

mod camera;
mod renderer;

pub use camera::OrbitCamera;
pub use renderer::{DebugTextRenderer, Renderer};
