//! Input mapping: pointer and keyboard events turned into selection actions.
//!
//! # Invariants
//! - Consumers see `Action`s, never raw window events.
//! - Pointer positions are converted to NDC with +Y up before picking.

pub mod action;
mod keys;
mod pointer;

pub use action::Action;
pub use keys::KeyBindings;
pub use pointer::{ClickTracker, screen_to_ndc};
