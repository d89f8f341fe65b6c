//! Pick-and-select: single selection with highlight, driven by input actions.
//!
//! # Invariants
//! - At most one object carries the highlight at any time.
//! - Selecting a new object restores the previous one before highlighting.
//! - The selection is an `ObjectId`, never a reference into the scene.

mod controller;
mod sink;

pub use controller::SelectionController;
pub use sink::{SelectionDisplay, SelectionLabel, SelectionSink};
