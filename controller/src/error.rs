use thiserror::Error;

/// Reasons a [`crate::config::ControllerConfig`] is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("{field} must be finite and greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("{field} must be finite and non-negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("ground contact angle must be within (0, 180) degrees, got {0}")]
    ContactAngleOutOfRange(f32),

    #[error("crouch height {crouch} must be within (0, {stand}]")]
    CrouchHeightOutOfRange { crouch: f32, stand: f32 },

    #[error("air control multiplier must be within [0, 1], got {0}")]
    AirControlOutOfRange(f32),

    #[error("melee cooldown floor must be finite and not above zero, got {0}")]
    CooldownFloorPositive(f32),

    #[error("melee target category must not be Untagged")]
    UntaggedMeleeTarget,
}
