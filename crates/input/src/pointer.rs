use glam::Vec2;

/// Convert a pointer position in pixels (origin top-left, +Y down) to
/// normalized device coordinates (origin center, +Y up, `[-1, 1]`).
///
/// Zero-sized viewports are treated as one pixel to avoid dividing by zero.
pub fn screen_to_ndc(position: Vec2, width: u32, height: u32) -> Vec2 {
    let w = width.max(1) as f32;
    let h = height.max(1) as f32;
    Vec2::new(position.x / w * 2.0 - 1.0, 1.0 - position.y / h * 2.0)
}

/// Distinguishes a click from a drag on one mouse button.
///
/// A press followed by a release counts as a click only if the pointer never
/// strayed more than `threshold` pixels from the press position. Movement
/// past that turns the gesture into a drag for the rest of the press.
#[derive(Debug, Clone)]
pub struct ClickTracker {
    threshold: f32,
    pressed_at: Option<Vec2>,
    last: Option<Vec2>,
    dragging: bool,
}

impl Default for ClickTracker {
    fn default() -> Self {
        Self::new(4.0)
    }
}

impl ClickTracker {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            pressed_at: None,
            last: None,
            dragging: false,
        }
    }

    pub fn press(&mut self, position: Vec2) {
        self.pressed_at = Some(position);
        self.last = Some(position);
        self.dragging = false;
    }

    /// Record pointer motion. Returns the delta since the last motion while
    /// the gesture is a drag, `None` otherwise.
    pub fn moved(&mut self, position: Vec2) -> Option<Vec2> {
        let start = self.pressed_at?;
        let previous = self.last.replace(position).unwrap_or(position);
        if !self.dragging && start.distance(position) > self.threshold {
            self.dragging = true;
            return Some(position - start);
        }
        self.dragging.then(|| position - previous)
    }

    /// Finish the gesture. Returns the click position if it was a click.
    pub fn release(&mut self, position: Vec2) -> Option<Vec2> {
        let start = self.pressed_at.take()?;
        self.last = None;
        let was_drag = std::mem::take(&mut self.dragging);
        if was_drag || start.distance(position) > self.threshold {
            None
        } else {
            Some(position)
        }
    }
}
