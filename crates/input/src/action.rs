use glam::Vec2;

/// A discrete input event after mapping from the windowing layer.
///
/// The selection controller consumes actions, never raw window events, so
/// the desktop app and the scripted CLI demo drive the same logic.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Pick at normalized device coordinates (`[-1, 1]`, +Y up).
    Pick(Vec2),
    /// Clear the current selection.
    Deselect,
    /// Select a uniformly random object.
    SelectRandom,
    /// Viewport changed size. Affects projection only.
    Resize { width: u32, height: u32 },
    /// Input with no binding.
    Noop,
}
