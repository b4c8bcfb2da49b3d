//! Rapier-based query world for immutable scene geometry.
//!
//! Builds an in-memory Rapier scene from a set of static collider definitions and answers the
//! controller's ray queries against it.
//!
//! Design goals
//! - Deterministic: given the same inputs (sorted by `id`), build identical in-memory sets.
//! - Query-focused: no dynamics are stepped; only broad/narrow phases are kept up to date.

// Re-export Rapier so hosts can build shapes without depending on `rapier3d` directly.
pub use rapier3d;

use rapier3d::{na::Translation3, prelude::*};

use crate::{
    body_tag::try_unpack_body_tag,
    layers::LayerMask,
    physics::RayQuery,
    rapier::{WorldStaticDef, collider_from_def},
    types::{Point3, ProbeRay, RayHit, Vec3},
};

/// In-memory Rapier structures needed for scene queries against a static world.
pub struct RapierQueryWorld {
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhaseBvh,
    pub narrow_phase: NarrowPhase,
}

impl RapierQueryWorld {
    /// Build a query world from a list of static collider definitions.
    ///
    /// Determinism
    /// - The input is sorted by `id` before insertion.
    /// - Any NaN/invalid values should be filtered/validated by the caller.
    pub fn build(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut bodies = RigidBodySet::new();
        let mut colliders = ColliderSet::new();

        // Each static is a fixed rigid-body carrying the pose, plus one attached collider.
        for def in defs.into_iter() {
            let iso = Isometry::from_parts(Translation3::from(def.translation), def.rotation);

            let rb = RigidBodyBuilder::fixed().pose(iso).build();
            let rb_handle = bodies.insert(rb);

            let collider = collider_from_def(&def);
            colliders.insert_with_parent(collider, rb_handle, &mut bodies);
        }

        // Collision detection only (no dynamics): updates the broad-phase BVH and the
        // narrow-phase contact graph so queries can run.
        let mut broad_phase = BroadPhaseBvh::new();
        let mut narrow_phase = NarrowPhase::new();
        let mut collision_pipeline = CollisionPipeline::new();

        let hooks = ();
        let events = ();

        collision_pipeline.step(
            0.0,
            &mut broad_phase,
            &mut narrow_phase,
            &mut bodies,
            &mut colliders,
            &hooks,
            &events,
        );

        log::debug!("built query world with {} colliders", colliders.len());

        Self {
            bodies,
            colliders,
            broad_phase,
            narrow_phase,
        }
    }

    /// Create a borrowed `QueryPipeline` view filtered by `filter`.
    pub fn query_pipeline<'a>(&'a self, filter: QueryFilter<'a>) -> QueryPipeline<'a> {
        self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            filter,
        )
    }
}

impl RayQuery for RapierQueryWorld {
    fn cast_ray(&self, ray: &ProbeRay, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        let dir_len = ray.direction.norm();
        if dir_len <= 0.0 || !dir_len.is_finite() || max_distance <= 0.0 {
            return None;
        }
        let dir = ray.direction / dir_len;

        // Colliders with foreign user data are never hit.
        let in_mask = |_handle: ColliderHandle, collider: &Collider| {
            try_unpack_body_tag(collider.user_data).is_some_and(|info| mask.has(info.layer))
        };
        let filter = QueryFilter::default().predicate(&in_mask);
        let pipeline = self.query_pipeline(filter);

        let rapier_ray = Ray::new(
            rapier3d::na::Point3::new(ray.origin.x, ray.origin.y, ray.origin.z),
            rapier3d::na::Vector3::new(dir.x, dir.y, dir.z),
        );
        let (handle, hit) = pipeline.cast_ray_and_get_normal(&rapier_ray, max_distance, true)?;

        let info = try_unpack_body_tag(self.colliders.get(handle)?.user_data)?;
        let point = rapier_ray.point_at(hit.time_of_impact);

        Some(RayHit {
            entity: info.entity,
            point: Point3::new(point.x, point.y, point.z),
            normal: Vec3::new(hit.normal.x, hit.normal.y, hit.normal.z),
            distance: hit.time_of_impact,
            layer: info.layer,
            category: info.category,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        layers::CollisionLayer,
        rapier::ColliderShapeDef,
        test_support::approx_eq,
        weapon::TargetCategory,
    };

    fn scene() -> RapierQueryWorld {
        RapierQueryWorld::build(vec![
            WorldStaticDef::target(
                2,
                42,
                TargetCategory::Dummy,
                Vector::new(0.0, 1.0, -1.5),
                ColliderShapeDef::Sphere { radius: 0.3 },
            ),
            WorldStaticDef::environment(
                1,
                Vector::new(0.0, 0.0, 0.0),
                ColliderShapeDef::Plane {
                    offset_along_normal: 0.0,
                },
            ),
        ])
    }

    #[test]
    fn downward_ray_hits_ground_plane() {
        let world = scene();
        let ray = ProbeRay::new(Point3::new(3.0, 0.8, 3.0), -Vec3::y());

        let hit = world
            .cast_ray(&ray, 1.0, LayerMask::all_except(CollisionLayer::Player))
            .unwrap();
        assert!(approx_eq(hit.distance, 0.8));
        assert!(approx_eq(hit.point.y, 0.0));
        assert!(approx_eq(hit.normal.y, 1.0));
        assert_eq!(hit.layer, CollisionLayer::Environment);
        assert_eq!(hit.entity, 1);
    }

    #[test]
    fn ray_beyond_max_distance_misses() {
        let world = scene();
        let ray = ProbeRay::new(Point3::new(3.0, 1.2, 3.0), -Vec3::y());

        assert!(world.cast_ray(&ray, 1.0, LayerMask::everything()).is_none());
    }

    #[test]
    fn forward_ray_classifies_target() {
        let world = scene();
        // Unnormalized direction: distance is still measured in meters.
        let ray = ProbeRay::new(Point3::new(0.0, 1.0, 0.0), Vec3::new(0.0, 0.0, -4.0));

        let hit = world.cast_ray(&ray, 2.0, LayerMask::everything()).unwrap();
        assert_eq!(hit.entity, 42);
        assert_eq!(hit.category, TargetCategory::Dummy);
        assert!(approx_eq(hit.distance, 1.2));
    }

    #[test]
    fn plane_offset_stacks_on_body_translation() {
        let world = RapierQueryWorld::build(vec![WorldStaticDef::environment(
            1,
            Vector::new(0.0, 1.0, 0.0),
            ColliderShapeDef::Plane {
                offset_along_normal: 0.5,
            },
        )]);
        let ray = ProbeRay::new(Point3::new(0.0, 5.0, 0.0), -Vec3::y());

        let hit = world.cast_ray(&ray, 10.0, LayerMask::everything()).unwrap();
        assert_eq!(hit.entity, 1);
        assert!(approx_eq(hit.point.y, 1.5));
        assert!(approx_eq(hit.distance, 3.5));
    }

    #[test]
    fn solid_shapes_are_hit_at_their_surface() {
        let world = RapierQueryWorld::build(vec![
            WorldStaticDef::environment(
                2,
                Vector::new(10.0, 0.0, 0.0),
                ColliderShapeDef::Cuboid {
                    half_extents: Vector::new(1.0, 3.0, 1.0),
                },
            ),
            WorldStaticDef::target(
                3,
                30,
                TargetCategory::Enemy,
                Vector::new(-10.0, 0.0, -5.0),
                ColliderShapeDef::CapsuleY {
                    radius: 0.5,
                    half_height: 1.0,
                },
            ),
            WorldStaticDef::environment(
                4,
                Vector::new(20.0, 0.0, -5.0),
                ColliderShapeDef::CylinderY {
                    radius: 0.25,
                    half_height: 1.0,
                },
            ),
        ]);
        let mask = LayerMask::everything();

        let hit = world
            .cast_ray(&ProbeRay::new(Point3::new(10.0, 8.0, 0.0), -Vec3::y()), 10.0, mask)
            .unwrap();
        assert_eq!(hit.entity, 2);
        assert!(approx_eq(hit.point.y, 3.0));

        let hit = world
            .cast_ray(&ProbeRay::new(Point3::new(-10.0, 0.5, 0.0), -Vec3::z()), 10.0, mask)
            .unwrap();
        assert_eq!(hit.entity, 30);
        assert_eq!(hit.layer, CollisionLayer::Target);
        assert_eq!(hit.category, TargetCategory::Enemy);
        assert!(approx_eq(hit.distance, 4.5));

        let hit = world
            .cast_ray(&ProbeRay::new(Point3::new(20.0, 0.5, 0.0), -Vec3::z()), 10.0, mask)
            .unwrap();
        assert_eq!(hit.entity, 4);
        assert!(approx_eq(hit.distance, 4.75));

        // Above the capsule's top cap.
        assert!(
            world
                .cast_ray(&ProbeRay::new(Point3::new(-10.0, 1.6, 0.0), -Vec3::z()), 10.0, mask)
                .is_none()
        );
    }

    #[test]
    fn mask_filters_out_layers() {
        let world = scene();
        let ray = ProbeRay::new(Point3::new(0.0, 1.0, 0.0), -Vec3::z());

        let mask = LayerMask::all_except(CollisionLayer::Target);
        assert!(world.cast_ray(&ray, 2.0, mask).is_none());
    }
}
