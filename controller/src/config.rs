//! Per-player tuning, grouped by the component that reads it.
//!
//! Every group defaults to the values in [`crate::constants`]. Call
//! [`ControllerConfig::validate`] once when the player is spawned; the tick code trusts it.

use crate::{
    constants::*,
    effects::{Cue, EffectId},
    error::ConfigError,
    layers::CollisionLayer,
    weapon::TargetCategory,
};

#[derive(Clone, Debug, PartialEq)]
pub struct MovementTuning {
    /// Horizontal speed cap. 3 (walk) and 5 (run) also select the footstep cue.
    pub max_speed: i32,
    pub acceleration_force: f32,
    /// Fraction of the acceleration applied while airborne.
    pub air_control: f32,
    pub deceleration_active: f32,
    pub deceleration_idle: f32,
    pub deceleration_initial: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: RUN_MAX_SPEED,
            acceleration_force: ACCELERATION_FORCE,
            air_control: AIR_CONTROL_MULTIPLIER,
            deceleration_active: DECELERATION_ACTIVE,
            deceleration_idle: DECELERATION_IDLE,
            deceleration_initial: DECELERATION_INITIAL,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GroundTuning {
    pub contact_max_angle_deg: f32,
    pub probe_length: f32,
    /// Layer the player body lives on; excluded from every probe.
    pub player_layer: CollisionLayer,
}

impl Default for GroundTuning {
    fn default() -> Self {
        Self {
            contact_max_angle_deg: GROUND_CONTACT_MAX_ANGLE_DEG,
            probe_length: GROUND_PROBE_LENGTH,
            player_layer: CollisionLayer::Player,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct JumpTuning {
    pub force: f32,
    pub body_mass: f32,
}

impl Default for JumpTuning {
    fn default() -> Self {
        Self {
            force: JUMP_FORCE,
            body_mass: BODY_MASS,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CrouchTuning {
    pub crouch_height: f32,
    pub stand_height: f32,
    pub lerp_speed: f32,
}

impl Default for CrouchTuning {
    fn default() -> Self {
        Self {
            crouch_height: CROUCH_HEIGHT,
            stand_height: STAND_HEIGHT,
            lerp_speed: CROUCH_LERP_SPEED,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MeleeTuning {
    pub probe_spacing: f32,
    pub probe_origin_offset: f32,
    pub range: f32,
    pub cooldown_floor: f32,
    pub swing_cooldown: f32,
    /// Category whose hits resolve into damage and effects.
    pub target_category: TargetCategory,
}

impl Default for MeleeTuning {
    fn default() -> Self {
        Self {
            probe_spacing: MELEE_PROBE_SPACING,
            probe_origin_offset: MELEE_PROBE_ORIGIN_OFFSET,
            range: MELEE_RANGE,
            cooldown_floor: MELEE_COOLDOWN_FLOOR,
            swing_cooldown: MELEE_SWING_COOLDOWN,
            target_category: TargetCategory::Dummy,
        }
    }
}

/// Audio cues and effect assets wired to this player. `None` means "not configured": the
/// side effect is skipped with a warning.
#[derive(Clone, Debug, PartialEq)]
pub struct FeedbackAssets {
    pub jump_cue: Option<Cue>,
    pub walk_cue: Option<Cue>,
    pub run_cue: Option<Cue>,
    pub hit_cue: Option<Cue>,
    pub blood_effect: Option<EffectId>,
    pub footstep_min_speed: f32,
}

impl FeedbackAssets {
    /// Nothing configured; every cue and effect is skipped.
    pub fn none() -> Self {
        Self {
            jump_cue: None,
            walk_cue: None,
            run_cue: None,
            hit_cue: None,
            blood_effect: None,
            footstep_min_speed: FOOTSTEP_MIN_SPEED,
        }
    }
}

impl Default for FeedbackAssets {
    fn default() -> Self {
        Self {
            jump_cue: Some(Cue::Jump),
            walk_cue: Some(Cue::Walk),
            run_cue: Some(Cue::Run),
            hit_cue: Some(Cue::Hit),
            blood_effect: Some(EffectId::BLOOD),
            footstep_min_speed: FOOTSTEP_MIN_SPEED,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControllerConfig {
    pub movement: MovementTuning,
    pub ground: GroundTuning,
    pub jump: JumpTuning,
    pub crouch: CrouchTuning,
    pub melee: MeleeTuning,
    pub feedback: FeedbackAssets,
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { field, value })
    }
}

fn non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Negative { field, value })
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.movement;
        positive("movement.max_speed", m.max_speed as f32)?;
        positive("movement.acceleration_force", m.acceleration_force)?;
        positive("movement.deceleration_active", m.deceleration_active)?;
        positive("movement.deceleration_idle", m.deceleration_idle)?;
        positive("movement.deceleration_initial", m.deceleration_initial)?;
        if !(0.0..=1.0).contains(&m.air_control) {
            return Err(ConfigError::AirControlOutOfRange(m.air_control));
        }

        let g = &self.ground;
        if !(g.contact_max_angle_deg > 0.0 && g.contact_max_angle_deg < 180.0) {
            return Err(ConfigError::ContactAngleOutOfRange(g.contact_max_angle_deg));
        }
        positive("ground.probe_length", g.probe_length)?;

        non_negative("jump.force", self.jump.force)?;
        positive("jump.body_mass", self.jump.body_mass)?;

        let c = &self.crouch;
        positive("crouch.stand_height", c.stand_height)?;
        if !(c.crouch_height > 0.0 && c.crouch_height <= c.stand_height) {
            return Err(ConfigError::CrouchHeightOutOfRange {
                crouch: c.crouch_height,
                stand: c.stand_height,
            });
        }
        non_negative("crouch.lerp_speed", c.lerp_speed)?;

        let me = &self.melee;
        non_negative("melee.probe_spacing", me.probe_spacing)?;
        non_negative("melee.probe_origin_offset", me.probe_origin_offset)?;
        positive("melee.range", me.range)?;
        non_negative("melee.swing_cooldown", me.swing_cooldown)?;
        if !(me.cooldown_floor.is_finite() && me.cooldown_floor <= 0.0) {
            return Err(ConfigError::CooldownFloorPositive(me.cooldown_floor));
        }
        if me.target_category == TargetCategory::Untagged {
            return Err(ConfigError::UntaggedMeleeTarget);
        }

        non_negative("feedback.footstep_min_speed", self.feedback.footstep_min_speed)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(ControllerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_zero_max_speed() {
        let mut config = ControllerConfig::default();
        config.movement.max_speed = 0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::NotPositive {
                field: "movement.max_speed",
                value: 0.0
            })
        );
    }

    #[test]
    fn rejects_contact_angle_out_of_range() {
        let mut config = ControllerConfig::default();
        config.ground.contact_max_angle_deg = 180.0;

        assert_eq!(
            config.validate(),
            Err(ConfigError::ContactAngleOutOfRange(180.0))
        );
    }

    #[test]
    fn rejects_crouch_taller_than_stand() {
        let mut config = ControllerConfig::default();
        config.crouch.crouch_height = 1.5;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::CrouchHeightOutOfRange { .. })
        ));
    }

    #[test]
    fn rejects_untagged_melee_target() {
        let mut config = ControllerConfig::default();
        config.melee.target_category = TargetCategory::Untagged;

        assert_eq!(config.validate(), Err(ConfigError::UntaggedMeleeTarget));
    }

    #[test]
    fn rejects_nan_probe_spacing() {
        let mut config = ControllerConfig::default();
        config.melee.probe_spacing = f32::NAN;

        assert!(matches!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "melee.probe_spacing",
                ..
            })
        ));
    }
}
