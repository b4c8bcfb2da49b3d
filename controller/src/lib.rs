pub mod body_tag;
pub mod config;
pub mod constants;
pub mod controller;
pub mod crouch;
pub mod effects;
pub mod error;
pub mod footsteps;
pub mod ground;
pub mod jump;
pub mod kinematic;
pub mod layers;
pub mod locomotion;
pub mod melee;
pub mod physics;
pub mod rapier;
pub mod rapier_world;
pub mod types;
pub mod utils;
pub mod weapon;

#[cfg(test)]
mod test_support;

pub use config::{
    ControllerConfig, CrouchTuning, FeedbackAssets, GroundTuning, JumpTuning, MeleeTuning,
    MovementTuning,
};
pub use controller::{FixedTick, FrameTick, PlayerController};
pub use effects::{Cue, EffectId, FeedbackSink, SwingId, SwingOutcome};
pub use error::ConfigError;
pub use footsteps::Footsteps;
pub use layers::{CollisionLayer, LayerMask};
pub use melee::{MeleeProbeArray, MeleeTick};
pub use physics::RayQuery;
pub use rapier::{ColliderShapeDef, WorldStaticDef, collider_from_def};
pub use rapier_world::RapierQueryWorld;
pub use types::{
    AimTransform, ContactPoint, EntityRef, FrameInput, HitOrigin, HitResult, MoveInput, Pose,
    ProbeRay, RayHit,
};
pub use weapon::{TargetCategory, WeaponKind, WeaponSource};
