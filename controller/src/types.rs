/*!
Core data types and math aliases shared by the controller modules.

This module intentionally contains no algorithms. It defines the values exchanged between
the host engine and the controller each tick:
- poses and aim transforms sampled from the scene graph
- directional/discrete input sampled from the input collaborator
- probe rays and ray hits exchanged with the physics collaborator

Basis convention (local space): right = +X, up = +Y, forward = -Z.
*/

use nalgebra as na;

use crate::{
    layers::CollisionLayer,
    weapon::{TargetCategory, WeaponKind},
};

/// Common math aliases for clarity and consistency.
pub type Vec2 = na::Vector2<f32>;
pub type Vec3 = na::Vector3<f32>;
pub type Point3 = na::Point3<f32>;
pub type Quat = na::UnitQuaternion<f32>;

/// Opaque identifier of a scene entity, assigned by the host.
pub type EntityRef = u64;

/// World-space up vector.
#[inline]
pub fn world_up() -> Vec3 {
    Vec3::y()
}

/// World-space position and orientation of a transform.
#[derive(Clone, Copy, Debug)]
pub struct Pose {
    pub position: Point3,
    pub rotation: Quat,
}

impl Pose {
    #[inline]
    pub fn new(position: Point3, rotation: Quat) -> Self {
        Self { position, rotation }
    }

    #[inline]
    pub fn identity_at(position: Point3) -> Self {
        Self::new(position, Quat::identity())
    }

    #[inline]
    pub fn right(&self) -> Vec3 {
        self.rotation * Vec3::x()
    }

    #[inline]
    pub fn up(&self) -> Vec3 {
        self.rotation * Vec3::y()
    }

    #[inline]
    pub fn forward(&self) -> Vec3 {
        self.rotation * -Vec3::z()
    }
}

/// The aim transform the melee probe fan is built from (muzzle/hand socket under the camera).
pub type AimTransform = Pose;

/// Continuous movement axes sampled once per physics tick.
///
/// Both axes are expected in `[-1, 1]`: `x` strafes along local right, `y` moves along local forward.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct MoveInput {
    pub axes: Vec2,
}

impl MoveInput {
    #[inline]
    pub fn new(horizontal: f32, vertical: f32) -> Self {
        Self {
            axes: Vec2::new(horizontal, vertical),
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.axes.x != 0.0 || self.axes.y != 0.0
    }
}

/// Discrete input sampled once per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameInput {
    /// True only on the frame the jump control went down (rising edge).
    pub jump_pressed: bool,
    /// True for every frame the crouch control is held.
    pub crouch_held: bool,
}

/// A single ray used for ground and melee probing. `direction` need not be unit length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProbeRay {
    pub origin: Point3,
    pub direction: Vec3,
}

impl ProbeRay {
    #[inline]
    pub fn new(origin: Point3, direction: Vec3) -> Self {
        Self { origin, direction }
    }

    #[inline]
    pub fn point_at(&self, distance: f32) -> Point3 {
        self.origin + self.direction.normalize() * distance
    }
}

/// Nearest intersection reported by a ray query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayHit {
    pub entity: EntityRef,
    /// World-space hit point.
    pub point: Point3,
    /// World-space surface normal at the hit point.
    pub normal: Vec3,
    /// Distance from the ray origin along the normalized direction (meters).
    pub distance: f32,
    pub layer: CollisionLayer,
    pub category: TargetCategory,
}

/// One contact point of a persisting collision, as reported by the physics collaborator.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactPoint {
    /// World-space contact normal pointing from the other body toward the player.
    pub normal: Vec3,
}

impl ContactPoint {
    #[inline]
    pub fn new(normal: Vec3) -> Self {
        Self { normal }
    }
}

/// Where a resolved melee hit came from. The sword-with-gun case suppresses the blood effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HitOrigin {
    /// Produced by the controller's own probe fan.
    MeleeProbe,
    /// Never produced by the probe fan; supplied by the host or weapon layer when a sword strike
    /// lands while a gun is equipped.
    SwordWithGun,
}

/// Transient result of the first successful melee probe intersection.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitResult {
    pub target: EntityRef,
    pub point: Point3,
    pub tag: TargetCategory,
    pub weapon_kind: WeaponKind,
    pub origin: HitOrigin,
}
