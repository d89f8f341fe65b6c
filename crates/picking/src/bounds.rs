use glam::{Mat4, Vec3};

use crate::ray::Ray;

/// Axis-aligned bounding box in an object's local space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    pub fn new(min: Vec3, max: Vec3) -> Self {
        Self { min, max }
    }

    /// Box centered on the origin.
    pub fn from_half_extents(half: Vec3) -> Self {
        Self {
            min: -half,
            max: half,
        }
    }

    /// Slab-method intersection with a ray given in the same space as the box.
    ///
    /// Returns the ray parameter of the entry point, or 0 when the origin
    /// is already inside. Hits entirely behind the origin are misses.
    pub fn intersect(&self, origin: Vec3, direction: Vec3) -> Option<f32> {
        let t1 = (self.min - origin) / direction;
        let t2 = (self.max - origin) / direction;
        let tmin = t1.min(t2);
        let tmax = t1.max(t2);
        let enter = tmin.max_element();
        let exit = tmax.min_element();
        if exit >= enter.max(0.0) {
            Some(enter.max(0.0))
        } else {
            None
        }
    }

    /// Intersect a world-space ray with this box placed by `model`.
    ///
    /// The ray is moved into local space with the inverse model matrix, so
    /// rotation and non-uniform scale are handled exactly. Because the local
    /// direction is not renormalized, the returned parameter is the distance
    /// along the (unit) world ray.
    pub fn intersect_transformed(&self, ray: &Ray, model: &Mat4) -> Option<f32> {
        let inv = model.inverse();
        let origin = inv.transform_point3(ray.origin);
        let direction = inv.transform_vector3(ray.direction);
        self.intersect(origin, direction)
    }
}
