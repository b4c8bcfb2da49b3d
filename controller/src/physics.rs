use crate::{
    layers::LayerMask,
    types::{ProbeRay, RayHit},
};

/// Ray-intersection queries offered by the physics collaborator.
///
/// Implementations return the nearest hit along `ray` within `max_distance` (measured along the
/// normalized direction) among colliders whose layer is contained in `mask`.
pub trait RayQuery {
    fn cast_ray(&self, ray: &ProbeRay, max_distance: f32, mask: LayerMask) -> Option<RayHit>;
}

impl<T: RayQuery + ?Sized> RayQuery for &T {
    fn cast_ray(&self, ray: &ProbeRay, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        (**self).cast_ray(ray, max_distance, mask)
    }
}
