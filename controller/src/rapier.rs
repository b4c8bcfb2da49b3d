use rapier3d::{na::UnitQuaternion, prelude::*};

use crate::{
    body_tag::pack_body_tag,
    layers::CollisionLayer,
    types::EntityRef,
    weapon::TargetCategory,
};

/// Canonical, engine-agnostic definition of an immutable scene collider.
///
/// Conventions
/// - Units are meters.
/// - Rotation is a unit quaternion.
/// - `entity`, `layer` and `category` are packed into the collider's user data so ray hits can be
///   filtered and classified (see [`crate::body_tag`]).
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    pub entity: EntityRef,
    pub layer: CollisionLayer,
    pub category: TargetCategory,
    /// World-space translation.
    pub translation: Vector<f32>,
    /// World-space rotation (unit quaternion).
    pub rotation: UnitQuaternion<f32>,
    /// Collider shape parameters.
    pub shape: ColliderShapeDef,
}

impl WorldStaticDef {
    /// Untagged environment geometry at an axis-aligned pose.
    pub fn environment(id: u32, translation: Vector<f32>, shape: ColliderShapeDef) -> Self {
        Self {
            id,
            entity: id as EntityRef,
            layer: CollisionLayer::Environment,
            category: TargetCategory::Untagged,
            translation,
            rotation: UnitQuaternion::identity(),
            shape,
        }
    }

    /// A hittable target on the target layer.
    pub fn target(
        id: u32,
        entity: EntityRef,
        category: TargetCategory,
        translation: Vector<f32>,
        shape: ColliderShapeDef,
    ) -> Self {
        Self {
            id,
            entity,
            layer: CollisionLayer::Target,
            category,
            translation,
            rotation: UnitQuaternion::identity(),
            shape,
        }
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space) whose normal is the pose's local +Y.
    ///
    /// In Rapier a half-space is infinite; any visible plane size is a rendering concern.
    Plane {
        /// Offset along the plane normal (meters).
        offset_along_normal: f32,
    },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vector<f32> },

    /// Sphere/ball (meters).
    Sphere { radius: f32 },

    /// Y-aligned capsule (meters).
    CapsuleY { radius: f32, half_height: f32 },

    /// Y-aligned cylinder (meters).
    CylinderY { radius: f32, half_height: f32 },
}

/// Build a Rapier collider from a `WorldStaticDef`.
///
/// The pose lives on the parent rigid-body, so shapes are built in local space.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let builder = match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => ColliderBuilder::halfspace(Vector::y_axis())
            .translation(Vector::y() * *offset_along_normal),

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius),

        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius),

        ColliderShapeDef::CylinderY {
            radius,
            half_height,
        } => ColliderBuilder::cylinder(*half_height, *radius),
    };

    builder
        .user_data(pack_body_tag(def.entity, def.layer, def.category))
        .build()
}
