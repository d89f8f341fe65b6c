//! Shared value types for the cubepick workspace.

mod types;

pub use types::{Color, ColorParseError, ObjectId, Transform};
