//! wgpu render backend for cubepick.
//!
//! Draws every scene object as a lit instanced box, plus the ground slab.
//!
//! # Invariants
//! - Renderer never mutates the scene.
//! - Drawn boxes match the bounding boxes the picker tests against.
//! - Redraw rate is independent of input handling.

mod gpu;
mod shaders;

pub use gpu::WgpuRenderer;
