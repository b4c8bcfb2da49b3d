/*!
Short-range melee hit detection.

- probe:  builds the 3x3 cone of probe rays from the aim transform (fresh every tick).
- this module: cooldown timer, the once-per-swing dispatch latch, first-hit-wins resolution and the
  single-slot swing whose completion is deferred to the next frame boundary.
*/

pub mod probe;

use log::{debug, info};

use crate::{
    config::{FeedbackAssets, MeleeTuning},
    effects::{FeedbackSink, SwingId, SwingOutcome, dispatch_hit},
    layers::{CollisionLayer, LayerMask},
    physics::RayQuery,
    types::{AimTransform, HitOrigin, HitResult, ProbeRay},
    weapon::{TargetCategory, WeaponKind},
};

pub use probe::{CENTER_RAY, PROBE_COUNT, build_probe_fan};

/// What happened during one [`MeleeProbeArray::tick`].
#[derive(Clone, Copy, Debug)]
pub struct MeleeTick {
    /// The probe fan built this tick (debug drawing, tests).
    pub rays: [ProbeRay; PROBE_COUNT],
    /// Swing whose hit resolution was dispatched this tick, if any.
    pub dispatched: Option<SwingId>,
}

/// Collaborators a dispatched swing needs to resolve its hit.
pub struct SwingContext<'a, W: RayQuery, S: FeedbackSink> {
    pub world: &'a W,
    pub weapon_kind: WeaponKind,
    pub assets: &'a FeedbackAssets,
    pub sink: &'a mut S,
}

#[derive(Clone, Debug)]
pub struct MeleeProbeArray {
    tuning: MeleeTuning,
    probe_mask: LayerMask,
    cooldown: f32,
    /// Set once the current swing has been handled; cleared when the swing signal drops.
    latched: bool,
    next_swing: SwingId,
    /// Resolved swing waiting for the frame boundary.
    pending: Option<SwingOutcome>,
}

impl MeleeProbeArray {
    pub fn new(tuning: MeleeTuning, player_layer: CollisionLayer) -> Self {
        Self {
            tuning,
            probe_mask: LayerMask::all_except(player_layer),
            cooldown: 0.0,
            latched: false,
            next_swing: 0,
            pending: None,
        }
    }

    #[inline]
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    #[inline]
    pub fn is_latched(&self) -> bool {
        self.latched
    }

    #[inline]
    pub fn pending_swing(&self) -> Option<SwingId> {
        self.pending.map(|p| p.swing)
    }

    /// One physics tick: decay cooldown, rebuild the fan, run the latch.
    ///
    /// For one continuous `swinging == true` interval at most one swing is dispatched, however
    /// many ticks it lasts.
    pub fn tick<W: RayQuery, S: FeedbackSink>(
        &mut self,
        dt: f32,
        aim: &AimTransform,
        swinging: bool,
        ctx: SwingContext<'_, W, S>,
    ) -> MeleeTick {
        self.cooldown = (self.cooldown - dt.max(0.0)).max(self.tuning.cooldown_floor);

        let rays = build_probe_fan(aim, self.tuning.probe_spacing, self.tuning.probe_origin_offset);

        if !swinging {
            self.latched = false;
            return MeleeTick {
                rays,
                dispatched: None,
            };
        }

        if self.latched {
            return MeleeTick {
                rays,
                dispatched: None,
            };
        }
        self.latched = true;

        if self.cooldown > 0.0 {
            debug!("melee swing skipped, cooldown {:.3}s remaining", self.cooldown);
            return MeleeTick {
                rays,
                dispatched: None,
            };
        }

        let swing = self.dispatch(&rays, ctx);
        MeleeTick {
            rays,
            dispatched: Some(swing),
        }
    }

    /// Start this swing's hit resolution. The ray checks and effects run now; the completion
    /// signal is held until [`MeleeProbeArray::end_frame`].
    fn dispatch<W: RayQuery, S: FeedbackSink>(
        &mut self,
        rays: &[ProbeRay; PROBE_COUNT],
        ctx: SwingContext<'_, W, S>,
    ) -> SwingId {
        // Single slot: a swing still parked from earlier this frame completes first.
        if let Some(previous) = self.pending.take() {
            ctx.sink.swing_resolved(previous);
        }

        let swing = self.next_swing;
        self.next_swing += 1;
        self.cooldown = self.tuning.swing_cooldown;

        let hit = resolve_first_hit(
            ctx.world,
            rays,
            self.tuning.range,
            self.probe_mask,
            self.tuning.target_category,
            ctx.weapon_kind,
        );

        match &hit {
            Some(result) => {
                info!("melee swing {swing} hit {:?} entity {}", result.tag, result.target);
                dispatch_hit(ctx.assets, result, ctx.sink);
            }
            None => debug!("melee swing {swing} hit nothing"),
        }

        self.pending = Some(SwingOutcome { swing, hit });
        swing
    }

    /// Frame boundary: completes the parked swing, if any.
    pub fn end_frame(&mut self, sink: &mut impl FeedbackSink) -> Option<SwingOutcome> {
        let outcome = self.pending.take()?;
        sink.swing_resolved(outcome);
        Some(outcome)
    }
}

/// Test the rays in order and stop at the first one that hits anything.
///
/// This is first-hit-wins across rays, not closest-hit. The hit only resolves when the object
/// belongs to `target_category`; any other first hit blocks the swing.
pub fn resolve_first_hit(
    world: &impl RayQuery,
    rays: &[ProbeRay],
    range: f32,
    mask: LayerMask,
    target_category: TargetCategory,
    weapon_kind: WeaponKind,
) -> Option<HitResult> {
    let hit = rays.iter().find_map(|ray| world.cast_ray(ray, range, mask))?;

    (hit.category == target_category).then_some(HitResult {
        target: hit.entity,
        point: hit.point,
        tag: hit.category,
        weapon_kind,
        origin: HitOrigin::MeleeProbe,
    })
}
