//! Pointer-ray picking against scene bounding boxes.
//!
//! # Invariants
//! - Picking never mutates the scene.
//! - A miss is `None`, never an error.
//! - The nearest non-negative hit distance wins.

mod bounds;
mod pick;
mod ray;

pub use bounds::Aabb;
pub use pick::{PickHit, pick, pick_ray};
pub use ray::{Ray, ViewProjection};
