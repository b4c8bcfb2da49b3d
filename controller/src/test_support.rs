//! Test doubles for the engine collaborators.

use std::cell::Cell;

use crate::{
    effects::{Cue, EffectId, FeedbackSink, SwingOutcome},
    layers::{CollisionLayer, LayerMask},
    physics::RayQuery,
    types::{EntityRef, Point3, ProbeRay, RayHit, Vec3},
    weapon::{TargetCategory, WeaponKind, WeaponSource},
};

/// Sink that records every command it receives.
#[derive(Default, Debug)]
pub struct RecordingSink {
    pub played: Vec<Cue>,
    pub stopped: Vec<Cue>,
    pub playing: Vec<Cue>,
    pub hit_markers: usize,
    pub effects: Vec<(EffectId, Point3)>,
    pub outcomes: Vec<SwingOutcome>,
}

impl FeedbackSink for RecordingSink {
    fn play_cue(&mut self, cue: Cue) {
        self.played.push(cue);
        if !self.playing.contains(&cue) {
            self.playing.push(cue);
        }
    }

    fn stop_cue(&mut self, cue: Cue) {
        self.stopped.push(cue);
        self.playing.retain(|c| *c != cue);
    }

    fn is_cue_playing(&self, cue: Cue) -> bool {
        self.playing.contains(&cue)
    }

    fn hit_marker(&mut self) {
        self.hit_markers += 1;
    }

    fn spawn_effect(&mut self, effect: EffectId, at: Point3) {
        self.effects.push((effect, at));
    }

    fn swing_resolved(&mut self, outcome: SwingOutcome) {
        self.outcomes.push(outcome);
    }
}

/// Weapon whose state can be flipped between ticks.
#[derive(Debug)]
pub struct ScriptedWeapon {
    pub kind: Cell<WeaponKind>,
    pub swinging: Cell<bool>,
}

impl ScriptedWeapon {
    pub fn new(kind: WeaponKind) -> Self {
        Self {
            kind: Cell::new(kind),
            swinging: Cell::new(false),
        }
    }
}

impl WeaponSource for ScriptedWeapon {
    fn equipped(&self) -> WeaponKind {
        self.kind.get()
    }

    fn is_melee_swinging(&self) -> bool {
        self.swinging.get()
    }
}

/// Sphere collider used by [`SphereWorld`].
#[derive(Clone, Copy, Debug)]
pub struct TestSphere {
    pub entity: EntityRef,
    pub center: Point3,
    pub radius: f32,
    pub layer: CollisionLayer,
    pub category: TargetCategory,
}

/// Minimal analytic ray world made of spheres and an optional ground plane at `y = ground_y`.
#[derive(Default, Debug)]
pub struct SphereWorld {
    pub spheres: Vec<TestSphere>,
    pub ground_y: Option<f32>,
    /// Every ray cast so far, in order.
    pub casts: std::cell::RefCell<Vec<ProbeRay>>,
}

impl SphereWorld {
    pub fn with_ground(ground_y: f32) -> Self {
        Self {
            ground_y: Some(ground_y),
            ..Self::default()
        }
    }

    pub fn add_target(&mut self, entity: EntityRef, center: Point3, radius: f32) {
        self.spheres.push(TestSphere {
            entity,
            center,
            radius,
            layer: CollisionLayer::Target,
            category: TargetCategory::Dummy,
        });
    }
}

impl RayQuery for SphereWorld {
    fn cast_ray(&self, ray: &ProbeRay, max_distance: f32, mask: LayerMask) -> Option<RayHit> {
        self.casts.borrow_mut().push(*ray);
        let dir = ray.direction.normalize();
        let mut best: Option<RayHit> = None;

        for s in &self.spheres {
            if !mask.has(s.layer) {
                continue;
            }
            let oc = ray.origin - s.center;
            let b = oc.dot(&dir);
            let c = oc.norm_squared() - s.radius * s.radius;
            let disc = b * b - c;
            if disc < 0.0 {
                continue;
            }
            let t = -b - disc.sqrt();
            if t < 0.0 || t > max_distance {
                continue;
            }
            if best.as_ref().is_none_or(|h| t < h.distance) {
                let point = ray.origin + dir * t;
                best = Some(RayHit {
                    entity: s.entity,
                    point,
                    normal: (point - s.center).normalize(),
                    distance: t,
                    layer: s.layer,
                    category: s.category,
                });
            }
        }

        if let Some(ground_y) = self.ground_y {
            if mask.has(CollisionLayer::Environment) && dir.y < 0.0 {
                let t = (ground_y - ray.origin.y) / dir.y;
                if t >= 0.0 && t <= max_distance && best.as_ref().is_none_or(|h| t < h.distance) {
                    best = Some(RayHit {
                        entity: 0,
                        point: ray.origin + dir * t,
                        normal: Vec3::y(),
                        distance: t,
                        layer: CollisionLayer::Environment,
                        category: TargetCategory::Untagged,
                    });
                }
            }
        }

        best
    }
}

#[inline]
pub fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < 1.0e-4
}
