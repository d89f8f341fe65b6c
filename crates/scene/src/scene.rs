use cubepick_common::{Color, ObjectId, Transform};
use glam::Vec3;

use crate::animation::idle_rotation;
use crate::config::{GridLayout, GroundPlane, MAX_GRID_SIZE, SceneConfig};

/// Current visual style of an object.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Appearance {
    pub color: Color,
    pub emissive: Color,
}

impl Appearance {
    /// Unlit base style: the given color with no emission.
    pub fn base(color: Color) -> Self {
        Self {
            color,
            emissive: Color::BLACK,
        }
    }
}

/// A scene entity eligible to be picked and highlighted.
///
/// Whether the object is selected is not stored here; the selection
/// controller owns that and compares ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectableObject {
    pub id: ObjectId,
    pub name: String,
    pub transform: Transform,
    /// Color the object was created with. Restored on deselection.
    pub base_color: Color,
    pub appearance: Appearance,
    /// Half size of the local-space bounding box, centered on the origin.
    pub half_extents: Vec3,
}

impl SelectableObject {
    /// True when color, emission and scale are all at their original values.
    pub fn has_default_style(&self) -> bool {
        self.appearance == Appearance::base(self.base_color) && self.transform.scale == Vec3::ONE
    }
}

/// The collection of selectable objects plus the non-selectable ground.
///
/// Objects are only added at construction time and are never removed, so an
/// `ObjectId` is a plain index into `objects`. All mutations go through
/// explicit operations that report whether the id existed.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<SelectableObject>,
    ground: Option<GroundPlane>,
}

impl Scene {
    /// Create an empty scene with no ground.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the cube grid described by `layout`.
    ///
    /// Cubes are created x-major: the object at grid cell `(x, z)` gets
    /// index `x * grid_size + z`, the name `Cube-{x}-{z}`, and a hue of
    /// `index / (grid_size * grid_size)`. Sizes above [`MAX_GRID_SIZE`] are
    /// clamped to it.
    pub fn cube_grid(layout: &GridLayout) -> Self {
        let mut scene = Self::new();
        let n = layout.grid_size.min(MAX_GRID_SIZE);
        let count = (n * n) as f32;
        let center = (n as f32 - 1.0) / 2.0;
        let half = Vec3::splat(layout.cube_size / 2.0);

        for x in 0..n {
            for z in 0..n {
                let index = x * n + z;
                let color =
                    Color::from_hsl(index as f32 / count, layout.saturation, layout.lightness);
                let position = Vec3::new(
                    (x as f32 - center) * layout.spacing,
                    0.0,
                    (z as f32 - center) * layout.spacing,
                );
                scene.spawn(
                    format!("Cube-{x}-{z}"),
                    Transform::from_position(position),
                    color,
                    half,
                );
            }
        }

        tracing::debug!(cubes = scene.len(), spacing = layout.spacing, "built cube grid");
        scene
    }

    /// Build the grid and ground plane from a full configuration.
    pub fn from_config(config: &SceneConfig) -> Self {
        let mut scene = Self::cube_grid(&config.grid);
        scene.ground = Some(config.ground);
        scene
    }

    /// Add an object. Returns its id.
    pub fn spawn(
        &mut self,
        name: impl Into<String>,
        transform: Transform,
        color: Color,
        half_extents: Vec3,
    ) -> ObjectId {
        let id = ObjectId(self.objects.len() as u32);
        self.objects.push(SelectableObject {
            id,
            name: name.into(),
            transform,
            base_color: color,
            appearance: Appearance::base(color),
            half_extents,
        });
        id
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Read-only access to all objects, in id order.
    pub fn objects(&self) -> &[SelectableObject] {
        &self.objects
    }

    pub fn ground(&self) -> Option<&GroundPlane> {
        self.ground.as_ref()
    }

    pub fn get(&self, id: ObjectId) -> Option<&SelectableObject> {
        self.objects.get(id.index())
    }

    /// Look up an object by display name.
    pub fn find_by_name(&self, name: &str) -> Option<ObjectId> {
        self.objects.iter().find(|o| o.name == name).map(|o| o.id)
    }

    /// Replace an object's color and emission.
    pub fn set_appearance(&mut self, id: ObjectId, appearance: Appearance) -> bool {
        match self.objects.get_mut(id.index()) {
            Some(object) => {
                object.appearance = appearance;
                true
            }
            None => false,
        }
    }

    pub fn set_scale(&mut self, id: ObjectId, scale: Vec3) -> bool {
        match self.objects.get_mut(id.index()) {
            Some(object) => {
                object.transform.scale = scale;
                true
            }
            None => false,
        }
    }

    /// Put an object back to its original color, no emission, identity scale.
    pub fn restore(&mut self, id: ObjectId) -> bool {
        match self.objects.get_mut(id.index()) {
            Some(object) => {
                object.appearance = Appearance::base(object.base_color);
                object.transform.scale = Vec3::ONE;
                true
            }
            None => false,
        }
    }

    /// Number of objects whose color, emission or scale differs from the original.
    pub fn styled_count(&self) -> usize {
        self.objects.iter().filter(|o| !o.has_default_style()).count()
    }

    /// Write the idle wobble for `elapsed` seconds into every object's rotation.
    pub fn apply_idle_animation(&mut self, elapsed: f32) {
        for (index, object) in self.objects.iter_mut().enumerate() {
            object.transform.rotation = idle_rotation(elapsed, index);
        }
    }
}
