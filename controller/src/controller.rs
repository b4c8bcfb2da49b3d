use log::debug;

use crate::{
    config::ControllerConfig,
    crouch::CrouchAnimator,
    effects::{FeedbackSink, SwingOutcome},
    error::ConfigError,
    footsteps::{Footsteps, update_footsteps},
    ground::GroundClassifier,
    jump::JumpAction,
    kinematic::KinematicState,
    locomotion::{Locomotion, LocomotionStep},
    melee::{MeleeProbeArray, MeleeTick, SwingContext},
    physics::RayQuery,
    types::{AimTransform, ContactPoint, FrameInput, MoveInput, Pose, Vec3},
    weapon::WeaponSource,
};

/// Output of one [`PlayerController::fixed_update`].
#[derive(Clone, Copy, Debug)]
pub struct FixedTick {
    pub locomotion: LocomotionStep,
    pub melee: MeleeTick,
}

/// Output of one [`PlayerController::frame_update`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    pub jumped: bool,
    /// Downward probe result; only used for audio.
    pub probe_grounded: bool,
    pub footsteps: Footsteps,
}

/// First-person player controller.
///
/// Driven by the host in two logically sequential phases:
/// - fixed physics tick: [`PlayerController::fixed_update`] (ground state from the contact events
///   received since the previous tick, locomotion, melee probes);
/// - variable frame tick: [`PlayerController::frame_update`] (jump, crouch, footsteps) followed by
///   [`PlayerController::end_frame`] at the frame boundary.
///
/// Collision events go to [`PlayerController::on_collision_stay`] / [`PlayerController::on_collision_exit`]
/// as the physics collaborator reports them.
pub struct PlayerController<W: WeaponSource> {
    config: ControllerConfig,
    state: KinematicState,
    ground: GroundClassifier,
    locomotion: Locomotion,
    jump: JumpAction,
    crouch: CrouchAnimator,
    melee: MeleeProbeArray,
    weapon: W,
}

impl<W: WeaponSource> PlayerController<W> {
    /// Validate `config` and spawn a controller at rest, standing, not grounded.
    pub fn new(config: ControllerConfig, weapon: W) -> Result<Self, ConfigError> {
        config.validate()?;

        Ok(Self {
            state: KinematicState::default(),
            ground: GroundClassifier::new(&config.ground),
            locomotion: Locomotion::new(config.movement.clone()),
            jump: JumpAction::new(config.jump.clone()),
            crouch: CrouchAnimator::new(config.crouch.clone()),
            melee: MeleeProbeArray::new(config.melee.clone(), config.ground.player_layer),
            weapon,
            config,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &KinematicState {
        &self.state
    }

    /// Host-side velocity write-back (e.g. after the physics engine integrated collisions).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.state.velocity = velocity;
    }

    pub fn velocity(&self) -> Vec3 {
        self.state.velocity
    }

    pub fn is_grounded(&self) -> bool {
        self.ground.is_grounded()
    }

    pub fn current_speed(&self) -> f32 {
        self.state.current_speed()
    }

    pub fn scale(&self) -> Vec3 {
        self.state.scale()
    }

    pub fn deceleration(&self) -> f32 {
        self.locomotion.deceleration()
    }

    pub fn melee_cooldown(&self) -> f32 {
        self.melee.cooldown()
    }

    pub fn melee(&self) -> &MeleeProbeArray {
        &self.melee
    }

    pub fn weapon(&self) -> &W {
        &self.weapon
    }

    /// Switch the speed cap (walk = 3, run = 5).
    pub fn set_max_speed(&mut self, max_speed: i32) {
        self.locomotion.set_max_speed(max_speed);
    }

    pub fn on_collision_stay(&mut self, contacts: &[ContactPoint]) {
        self.ground.on_collision_stay(contacts);
    }

    pub fn on_collision_exit(&mut self) {
        self.ground.on_collision_exit();
    }

    /// One fixed-rate physics tick.
    pub fn fixed_update<Q: RayQuery, S: FeedbackSink>(
        &mut self,
        world: &Q,
        pose: &Pose,
        aim: &AimTransform,
        input: MoveInput,
        dt: f32,
        sink: &mut S,
    ) -> FixedTick {
        self.state.grounded = self.ground.is_grounded();

        let locomotion = self.locomotion.step(&mut self.state, &pose.rotation, input, dt);

        let melee = self.melee.tick(
            dt,
            aim,
            self.weapon.is_melee_swinging(),
            SwingContext {
                world,
                weapon_kind: self.weapon.equipped(),
                assets: &self.config.feedback,
                sink,
            },
        );
        if let Some(swing) = melee.dispatched {
            debug!("dispatched melee swing {swing}");
        }

        FixedTick { locomotion, melee }
    }

    /// One variable-rate frame tick.
    pub fn frame_update<Q: RayQuery, S: FeedbackSink>(
        &mut self,
        world: &Q,
        pose: &Pose,
        input: FrameInput,
        dt: f32,
        sink: &mut S,
    ) -> FrameTick {
        self.state.grounded = self.ground.is_grounded();

        let jumped = self.jump.try_jump(
            input.jump_pressed,
            &mut self.state,
            &pose.rotation,
            &self.config.feedback,
            sink,
        );

        self.crouch.update(&mut self.state, input.crouch_held, dt);

        let probe_grounded = self.ground.probe(world, pose);
        let footsteps = update_footsteps(
            &self.config.feedback,
            probe_grounded,
            self.state.current_speed(),
            self.locomotion.max_speed(),
            sink,
        );

        FrameTick {
            jumped,
            probe_grounded,
            footsteps,
        }
    }

    /// Frame boundary: completes a swing dispatched since the previous boundary.
    pub fn end_frame(&mut self, sink: &mut impl FeedbackSink) -> Option<SwingOutcome> {
        self.melee.end_frame(sink)
    }
}
