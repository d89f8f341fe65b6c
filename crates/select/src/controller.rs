use cubepick_common::ObjectId;
use cubepick_input::Action;
use cubepick_picking::{ViewProjection, pick};
use cubepick_scene::{Appearance, HighlightStyle, Scene};
use glam::Vec3;
use rand::Rng;

use crate::sink::{SelectionDisplay, SelectionSink};

/// Tracks the single selected object and applies or removes its highlight.
///
/// The controller does not own the objects. It holds the selected object's
/// id and mutates the scene through explicit operations, so at most one
/// object carries the highlight at any time.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selected: Option<ObjectId>,
    style: HighlightStyle,
}

impl SelectionController {
    pub fn new(style: HighlightStyle) -> Self {
        Self {
            selected: None,
            style,
        }
    }

    pub fn selected(&self) -> Option<ObjectId> {
        self.selected
    }

    pub fn is_selected(&self, id: ObjectId) -> bool {
        self.selected == Some(id)
    }

    pub fn style(&self) -> &HighlightStyle {
        &self.style
    }

    /// Select `id`, restoring any previous selection first.
    ///
    /// Returns false, leaving everything untouched, if `id` is not in the scene.
    pub fn select<S: SelectionSink + ?Sized>(
        &mut self,
        scene: &mut Scene,
        id: ObjectId,
        sink: &mut S,
    ) -> bool {
        let Some(name) = scene.get(id).map(|o| o.name.clone()) else {
            tracing::warn!("ignoring selection of unknown object {id}");
            return false;
        };

        if let Some(previous) = self.selected.take() {
            scene.restore(previous);
        }

        scene.set_appearance(
            id,
            Appearance {
                color: self.style.color,
                emissive: self.style.emissive,
            },
        );
        scene.set_scale(id, Vec3::splat(self.style.scale));
        self.selected = Some(id);

        tracing::info!("Selected: {name}");
        sink.show(&SelectionDisplay::Selected {
            name,
            emphasis: self.style.color,
        });
        true
    }

    /// Clear the selection and restore the object's original style.
    ///
    /// With nothing selected this is a no-op and the sink is not notified.
    /// Returns whether anything was cleared.
    pub fn deselect_current<S: SelectionSink + ?Sized>(
        &mut self,
        scene: &mut Scene,
        sink: &mut S,
    ) -> bool {
        let Some(previous) = self.selected.take() else {
            return false;
        };
        scene.restore(previous);
        tracing::info!("deselected {previous}");
        sink.show(&SelectionDisplay::Empty);
        true
    }

    /// Select a uniformly random object. `None` only for an empty scene.
    pub fn select_random<S: SelectionSink + ?Sized, R: Rng + ?Sized>(
        &mut self,
        scene: &mut Scene,
        sink: &mut S,
        rng: &mut R,
    ) -> Option<ObjectId> {
        if scene.is_empty() {
            return None;
        }
        let id = ObjectId(rng.random_range(0..scene.len()) as u32);
        self.select(scene, id, sink);
        Some(id)
    }

    /// Apply one input action. Returns the selection afterwards.
    ///
    /// A pick that hits nothing keeps the current selection. `Resize` and
    /// `Noop` never touch the selection.
    pub fn handle<C, S, R>(
        &mut self,
        action: Action,
        scene: &mut Scene,
        camera: &C,
        sink: &mut S,
        rng: &mut R,
    ) -> Option<ObjectId>
    where
        C: ViewProjection,
        S: SelectionSink + ?Sized,
        R: Rng + ?Sized,
    {
        match action {
            Action::Pick(ndc) => {
                if let Some(id) = pick(ndc, camera, scene) {
                    self.select(scene, id, sink);
                }
            }
            Action::Deselect => {
                self.deselect_current(scene, sink);
            }
            Action::SelectRandom => {
                self.select_random(scene, sink, rng);
            }
            Action::Resize { .. } | Action::Noop => {}
        }
        self.selected
    }
}
