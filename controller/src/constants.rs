//! Default tuning values for the player controller.
//!
//! Distances are in meters, time in seconds, angles in degrees. These are the defaults used by
//! [`crate::config::ControllerConfig::default`]; override them per player from game data.

/// Horizontal speed cap while walking. Also selects the walk footstep cue.
pub const WALK_MAX_SPEED: i32 = 3;

/// Horizontal speed cap while running. Also selects the run footstep cue.
pub const RUN_MAX_SPEED: i32 = 5;

/// Force applied along the input direction, scaled by input and `dt` each physics tick.
pub const ACCELERATION_FORCE: f32 = 50_000.0;

/// Air-control multiplier for planar movement while airborne.
pub const AIR_CONTROL_MULTIPLIER: f32 = 0.5;

/// Deceleration smoothing time used while any movement axis is held.
pub const DECELERATION_ACTIVE: f32 = 0.5;

/// Deceleration smoothing time used while no movement axis is held. Short, so the player
/// stops instead of sliding.
pub const DECELERATION_IDLE: f32 = 0.1;

/// Deceleration smoothing time before the first tick rewrites it.
pub const DECELERATION_INITIAL: f32 = 15.0;

/// Contacts whose normal is strictly closer than this to world-up count as ground.
pub const GROUND_CONTACT_MAX_ANGLE_DEG: f32 = 60.0;

/// Length of the redundant downward ground probe.
pub const GROUND_PROBE_LENGTH: f32 = 1.0;

/// Force applied along local up when jumping.
pub const JUMP_FORCE: f32 = 500.0;

/// Mass used to turn the jump force into a velocity change.
pub const BODY_MASS: f32 = 100.0;

/// Vertical scale while crouched / standing.
pub const CROUCH_HEIGHT: f32 = 0.6;
pub const STAND_HEIGHT: f32 = 1.0;

/// Lerp speed toward the crouch/stand target, multiplied by frame `dt`.
pub const CROUCH_LERP_SPEED: f32 = 15.0;

/// Angular spread of the outer melee probes along right/up, relative to forward.
pub const MELEE_PROBE_SPACING: f32 = 0.15;

/// Origin offset of the outer melee probes along right/up.
pub const MELEE_PROBE_ORIGIN_OFFSET: f32 = 0.05;

/// Reach of each melee probe ray.
pub const MELEE_RANGE: f32 = 2.0;

/// Lower bound of the melee cooldown timer.
pub const MELEE_COOLDOWN_FLOOR: f32 = -5.0;

/// Cooldown started by each dispatched swing. Zero never blocks a swing.
pub const MELEE_SWING_COOLDOWN: f32 = 0.0;

/// Minimum speed for footstep audio to play.
pub const FOOTSTEP_MIN_SPEED: f32 = 1.0;

/// Smallest smoothing time accepted by the damping filter.
pub const MIN_SMOOTH_TIME: f32 = 1.0e-4;
