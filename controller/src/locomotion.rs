use crate::{
    config::MovementTuning,
    kinematic::KinematicState,
    types::{MoveInput, Quat, Vec3},
    utils::{clamp_planar, from_planar, smooth_damp, to_planar},
};

/// Output of a single [`Locomotion::step`] tick.
#[derive(Clone, Copy, Debug)]
pub struct LocomotionStep {
    /// Speed recomputed at the start of the tick.
    pub speed_before: f32,
    /// Planar speed right after the hard clamp (always `<= max_speed`).
    pub clamped_planar_speed: f32,
    /// Deceleration smoothing time that was used by this tick's damping.
    pub deceleration_used: f32,
}

/// Velocity-clamped, force-driven movement with state-dependent deceleration.
#[derive(Clone, Debug)]
pub struct Locomotion {
    tuning: MovementTuning,
    /// Smoothing time of the ground damping filter; rewritten at the end of every step.
    deceleration: f32,
    /// Velocity of the damping filter itself, carried across ticks.
    slowdown_rate: Vec3,
}

impl Locomotion {
    pub fn new(tuning: MovementTuning) -> Self {
        Self {
            deceleration: tuning.deceleration_initial,
            tuning,
            slowdown_rate: Vec3::zeros(),
        }
    }

    #[inline]
    pub fn deceleration(&self) -> f32 {
        self.deceleration
    }

    #[inline]
    pub fn max_speed(&self) -> i32 {
        self.tuning.max_speed
    }

    /// Switch between walk and run caps.
    pub fn set_max_speed(&mut self, max_speed: i32) {
        self.tuning.max_speed = max_speed;
    }

    /// Perform one fixed physics tick.
    ///
    /// Behavior
    /// - Recomputes the cached speed.
    /// - Hard-clamps planar (XZ) speed to `max_speed`; vertical velocity is untouched.
    /// - While grounded, damps planar velocity toward zero with the current deceleration time.
    ///   This runs even while accelerating and is what stops residual sliding.
    /// - Adds `input * acceleration_force * dt` along local right/forward, scaled by
    ///   `air_control` while airborne.
    /// - Picks next tick's deceleration time from whether any input axis is held.
    pub fn step(
        &mut self,
        state: &mut KinematicState,
        rotation: &Quat,
        input: MoveInput,
        dt: f32,
    ) -> LocomotionStep {
        let dt = dt.max(0.0);
        state.sanitize_velocity();

        // 1) Fresh speed; never stale across a tick.
        let speed_before = state.refresh_speed();

        // 2-4) Hard clamp of the planar component.
        let vertical = state.velocity.y;
        let planar = clamp_planar(to_planar(state.velocity), self.tuning.max_speed as f32);
        state.velocity = from_planar(planar, vertical);

        // 5) Ground damping toward (0, vy, 0).
        let deceleration_used = self.deceleration;
        if state.grounded {
            let target = Vec3::new(0.0, state.velocity.y, 0.0);
            state.velocity = smooth_damp(
                state.velocity,
                target,
                &mut self.slowdown_rate,
                deceleration_used,
                dt,
            );
        }

        // 6) Input force along local right (+X) and forward (-Z).
        let scale = if state.grounded {
            self.tuning.acceleration_force
        } else {
            self.tuning.acceleration_force * self.tuning.air_control
        } * dt;
        let local_force = Vec3::new(input.axes.x * scale, 0.0, -input.axes.y * scale);
        state.add_relative_force(rotation, local_force);

        // 7) Takes effect on the next tick's damping.
        self.deceleration = if input.is_active() {
            self.tuning.deceleration_active
        } else {
            self.tuning.deceleration_idle
        };

        LocomotionStep {
            speed_before,
            clamped_planar_speed: planar.norm(),
            deceleration_used,
        }
    }
}
