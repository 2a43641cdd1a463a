//! One player flying through a world and editing blocks.

use cubecast_config::Config;
use cubecast_raycast::{InteractError, RaycastResult, place_block, raycast, remove_block};
use cubecast_voxel::{SOLID, World, WorldError, build_world};
use glam::IVec3;

use crate::camera::FlyCamera;
use crate::input::{Action, ActionState, InputFrame};

/// What happened during one [`Session::update`].
#[derive(Clone, Debug, PartialEq)]
pub struct FrameReport {
    /// Raycast from the camera after this frame's look and movement.
    pub target: RaycastResult,
    /// Block removed this frame, if any.
    pub removed: Option<IVec3>,
    /// Block placed this frame, if any.
    pub placed: Option<IVec3>,
}

/// Running totals over a session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub frames: u64,
    pub removed: u64,
    pub placed: u64,
    pub rejected: u64,
}

#[derive(Debug)]
pub struct Session {
    world: World,
    camera: FlyCamera,
    actions: ActionState,
    reach: f32,
    stats: SessionStats,
}

impl Session {
    pub fn new(world: World, camera: FlyCamera, reach: f32) -> Self {
        Self {
            world,
            camera,
            actions: ActionState::new(),
            reach,
            stats: SessionStats::default(),
        }
    }

    /// Builds the configured world and camera.
    pub fn from_config(config: &Config) -> Result<Self, WorldError> {
        let world = build_world(&config.world.preset, config.world.max_chunks)?;
        Ok(Self::new(
            world,
            FlyCamera::from_config(&config.camera),
            config.raycast.reach,
        ))
    }

    /// Advances one frame: look, fly, target, then edit.
    ///
    /// "Break" removes the targeted block on every frame it is held. "Place"
    /// fills the cell in front of the targeted face once per press.
    pub fn update(&mut self, input: &InputFrame) -> FrameReport {
        self.actions.advance(input);
        self.camera.look(input.mouse_delta.x, input.mouse_delta.y);
        self.camera.fly(&self.actions, input.dt);
        self.stats.frames += 1;

        let target = raycast(&self.world, &self.camera.ray(self.reach));
        let mut report = FrameReport {
            target,
            removed: None,
            placed: None,
        };

        if self.actions.is_pressed(Action::Break) && target.collision() {
            match remove_block(&mut self.world, &target) {
                Ok(()) => {
                    self.stats.removed += 1;
                    report.removed = Some(target.hit_cell);
                }
                Err(e) => self.reject("break", &e),
            }
        }

        // A block removed this frame leaves `target` stale; skip placing.
        if self.actions.just_pressed(Action::Place) && report.removed.is_none() {
            match place_block(&mut self.world, &target, SOLID) {
                Ok(cell) => {
                    self.stats.placed += 1;
                    report.placed = Some(cell);
                }
                Err(e) => self.reject("place", &e),
            }
        }

        report
    }

    fn reject(&mut self, what: &str, error: &InteractError) {
        self.stats.rejected += 1;
        tracing::warn!("Rejected {what} at {}: {error}", self.camera.position);
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn camera(&self) -> &FlyCamera {
        &self.camera
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }
}
