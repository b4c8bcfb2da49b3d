//! Boundary to the audio and visual-effect collaborators.
//!
//! The controller never plays sounds or spawns particles itself. It issues commands through a
//! [`FeedbackSink`] implemented by the host.

use log::{debug, warn};

use crate::{
    config::FeedbackAssets,
    types::{HitOrigin, HitResult, Point3},
    weapon::WeaponKind,
};

/// Named audio cues the controller can start and stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cue {
    Jump,
    Walk,
    Run,
    Hit,
}

/// Handle of a spawnable visual effect asset, interpreted by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EffectId(pub u32);

impl EffectId {
    pub const BLOOD: EffectId = EffectId(1);
}

/// Monotonic identifier of one melee swing.
pub type SwingId = u64;

/// Completion signal of a swing's hit resolution, delivered one frame after dispatch.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwingOutcome {
    pub swing: SwingId,
    /// `None` when no probe hit the designated target. That is a normal outcome.
    pub hit: Option<HitResult>,
}

/// Commands the controller issues to the host's audio/effect layer.
pub trait FeedbackSink {
    fn play_cue(&mut self, cue: Cue);
    fn stop_cue(&mut self, cue: Cue);
    fn is_cue_playing(&self, cue: Cue) -> bool;
    /// Hit-confirmation marker owned by the weapon layer.
    fn hit_marker(&mut self);
    fn spawn_effect(&mut self, effect: EffectId, at: Point3);
    fn swing_resolved(&mut self, outcome: SwingOutcome);
}

/// Apply damage feedback for a resolved melee hit.
///
/// Only the gun weapon kind produces feedback; hits with any other kind are dropped here.
pub fn dispatch_hit(assets: &FeedbackAssets, result: &HitResult, sink: &mut impl FeedbackSink) {
    if result.weapon_kind != WeaponKind::Gun {
        debug!(
            "melee hit on entity {} with {:?} produces no feedback",
            result.target, result.weapon_kind
        );
        return;
    }

    sink.hit_marker();

    match assets.hit_cue {
        Some(cue) => sink.play_cue(cue),
        None => warn!("no hit cue configured"),
    }

    if result.origin == HitOrigin::SwordWithGun {
        return;
    }

    match assets.blood_effect {
        Some(effect) => sink.spawn_effect(effect, result.point),
        None => warn!("no blood effect configured"),
    }
}
