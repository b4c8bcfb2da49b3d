use log::warn;

use crate::{
    constants::STAND_HEIGHT,
    types::{Quat, Vec3},
};

/// Mutable physical state of the player, owned by the controller and written only from ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct KinematicState {
    pub velocity: Vec3,
    /// Ground contact as classified from collision contacts. Authoritative for movement.
    pub grounded: bool,
    /// Vertical scale of the player body (crouch animation).
    pub crouch_scale: f32,
    pub(crate) current_speed: f32,
}

impl Default for KinematicState {
    fn default() -> Self {
        Self {
            velocity: Vec3::zeros(),
            grounded: false,
            crouch_scale: STAND_HEIGHT,
            current_speed: 0.0,
        }
    }
}

impl KinematicState {
    /// Speed as of the last [`KinematicState::refresh_speed`].
    #[inline]
    pub fn current_speed(&self) -> f32 {
        self.current_speed
    }

    /// Recompute the cached speed from the velocity. Called at the start of every locomotion step.
    #[inline]
    pub fn refresh_speed(&mut self) -> f32 {
        self.current_speed = self.velocity.norm();
        self.current_speed
    }

    /// Add a force expressed in the body's local frame, applied as this tick's velocity change.
    #[inline]
    pub fn add_relative_force(&mut self, rotation: &Quat, local_force: Vec3) {
        self.velocity += rotation * local_force;
    }

    /// Replace non-finite velocity components with zero. Returns true if anything was replaced.
    pub fn sanitize_velocity(&mut self) -> bool {
        let mut replaced = false;
        for c in self.velocity.iter_mut() {
            if !c.is_finite() {
                *c = 0.0;
                replaced = true;
            }
        }
        if replaced {
            warn!("non-finite player velocity reset to zero on affected axes");
        }
        replaced
    }

    /// Full body scale with the crouch factor on the vertical axis.
    #[inline]
    pub fn scale(&self) -> Vec3 {
        Vec3::new(1.0, self.crouch_scale, 1.0)
    }
}
