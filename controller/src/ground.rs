//! Ground contact classification.
//!
//! Two independent signals:
//! - contact-based: collision-stay events whose contact normals are close enough to world-up.
//!   This drives movement.
//! - probe-based: a short downward ray from the player position. This only drives footstep audio.

use crate::{
    config::GroundTuning,
    layers::LayerMask,
    physics::RayQuery,
    types::{ContactPoint, Pose, ProbeRay, world_up},
};

#[derive(Clone, Debug)]
pub struct GroundClassifier {
    /// Cosine of the maximum contact angle. A contact is ground iff `cos(angle) > max_angle_cos`.
    max_angle_cos: f32,
    probe_length: f32,
    probe_mask: LayerMask,
    grounded: bool,
}

impl GroundClassifier {
    pub fn new(tuning: &GroundTuning) -> Self {
        Self {
            max_angle_cos: tuning.contact_max_angle_deg.to_radians().cos(),
            probe_length: tuning.probe_length,
            probe_mask: LayerMask::all_except(tuning.player_layer),
            grounded: false,
        }
    }

    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    /// Collision-persistence event. Sets grounded if any contact is walkable; never clears it.
    pub fn on_collision_stay(&mut self, contacts: &[ContactPoint]) {
        if contacts.iter().any(|c| self.is_walkable(c)) {
            self.grounded = true;
        }
    }

    /// Collision-exit event (no contacts remain).
    pub fn on_collision_exit(&mut self) {
        self.grounded = false;
    }

    /// Strictly-less-than comparison on the angle, done in cosine space.
    #[inline]
    fn is_walkable(&self, contact: &ContactPoint) -> bool {
        let len = contact.normal.norm();
        if len <= 0.0 || !len.is_finite() {
            return false;
        }
        contact.normal.dot(&world_up()) / len > self.max_angle_cos
    }

    /// Redundant downward probe: true iff anything except the player's own layer is within
    /// `probe_length` straight below `pose`.
    pub fn probe(&self, world: &impl RayQuery, pose: &Pose) -> bool {
        let ray = ProbeRay::new(pose.position, -pose.up());
        world.cast_ray(&ray, self.probe_length, self.probe_mask).is_some()
    }
}
