use cubepick_common::ObjectId;
use cubepick_scene::Scene;
use glam::{Vec2, Vec3};

use crate::bounds::Aabb;
use crate::ray::{Ray, ViewProjection};

/// The nearest object hit by a pick ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickHit {
    pub id: ObjectId,
    /// Distance from the ray origin to the entry point.
    pub distance: f32,
    /// World-space entry point.
    pub point: Vec3,
}

/// Intersect `ray` with every object in the scene and keep the nearest hit.
///
/// Each object is tested against its local bounding box under its current
/// model matrix, so scale and the idle rotation are taken into account.
/// On an exact distance tie the lower id wins.
pub fn pick_ray(ray: &Ray, scene: &Scene) -> Option<PickHit> {
    let mut closest: Option<(ObjectId, f32)> = None;
    for object in scene.objects() {
        let bounds = Aabb::from_half_extents(object.half_extents);
        let model = object.transform.matrix();
        let Some(t) = bounds.intersect_transformed(ray, &model) else {
            continue;
        };
        if closest.is_none_or(|(_, best)| t < best) {
            closest = Some((object.id, t));
        }
    }
    closest.map(|(id, distance)| PickHit {
        id,
        distance,
        point: ray.at(distance),
    })
}

/// Pick the object under normalized device coordinates `ndc`.
///
/// Returns `None` when the ray hits nothing; that is an ordinary outcome,
/// not an error.
pub fn pick(ndc: Vec2, camera: &impl ViewProjection, scene: &Scene) -> Option<ObjectId> {
    let ray = Ray::from_ndc(ndc, camera);
    let hit = pick_ray(&ray, scene);
    match &hit {
        Some(hit) => tracing::debug!(
            id = %hit.id,
            distance = hit.distance,
            "pick at ({:.3}, {:.3}) hit",
            ndc.x,
            ndc.y
        ),
        None => tracing::debug!("pick at ({:.3}, {:.3}) missed", ndc.x, ndc.y),
    }
    hit.map(|h| h.id)
}
