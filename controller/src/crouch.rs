use crate::{config::CrouchTuning, kinematic::KinematicState, utils::lerp};

/// Eases the player's vertical scale toward the crouched or standing height every frame.
#[derive(Clone, Debug)]
pub struct CrouchAnimator {
    tuning: CrouchTuning,
}

impl CrouchAnimator {
    pub fn new(tuning: CrouchTuning) -> Self {
        Self { tuning }
    }

    pub fn update(&self, state: &mut KinematicState, crouch_held: bool, dt: f32) {
        let target = if crouch_held {
            self.tuning.crouch_height
        } else {
            self.tuning.stand_height
        };
        state.crouch_scale = lerp(state.crouch_scale, target, dt.max(0.0) * self.tuning.lerp_speed);
    }
}
