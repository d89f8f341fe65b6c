//! Scene: the collection of selectable objects the picker works against.
//!
//! # Invariants
//! - Objects are created at construction and never removed; `ObjectId` is an index.
//! - Style mutations (color, emission, scale) flow through explicit operations.
//! - The idle animation is a pure function of elapsed time and object index.

mod animation;
pub mod config;
mod scene;

pub use animation::idle_rotation;
pub use config::{
    Background, CameraConfig, ConfigError, GridLayout, GroundPlane, HighlightStyle, MAX_GRID_SIZE,
    SceneConfig,
};
pub use scene::{Appearance, Scene, SelectableObject};
