use log::warn;

use crate::{
    config::{FeedbackAssets, JumpTuning},
    effects::FeedbackSink,
    kinematic::KinematicState,
    types::{Quat, Vec3},
};

/// One-shot upward impulse. Edge detection of the jump control belongs to the input layer.
#[derive(Clone, Debug)]
pub struct JumpAction {
    tuning: JumpTuning,
}

impl JumpAction {
    pub fn new(tuning: JumpTuning) -> Self {
        Self { tuning }
    }

    /// Velocity change produced by one jump.
    #[inline]
    pub fn impulse(&self) -> f32 {
        self.tuning.force / self.tuning.body_mass
    }

    /// Jump if `pressed` is a rising edge and the player is grounded. Returns whether it fired.
    ///
    /// Locomotion cues are stopped so the jump cue is not layered over footsteps.
    pub fn try_jump(
        &self,
        pressed: bool,
        state: &mut KinematicState,
        rotation: &Quat,
        assets: &FeedbackAssets,
        sink: &mut impl FeedbackSink,
    ) -> bool {
        if !pressed || !state.grounded {
            return false;
        }

        state.add_relative_force(rotation, Vec3::new(0.0, self.impulse(), 0.0));

        match assets.jump_cue {
            Some(cue) => sink.play_cue(cue),
            None => warn!("no jump cue configured"),
        }
        for cue in [assets.walk_cue, assets.run_cue].into_iter().flatten() {
            sink.stop_cue(cue);
        }

        true
    }
}
