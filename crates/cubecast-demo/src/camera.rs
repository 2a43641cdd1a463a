//! Free-flying first-person camera.

use cubecast_config::CameraConfig;
use cubecast_math::Vec3f;
use cubecast_raycast::Ray;

use crate::input::{Action, ActionState};

/// Pitch is clamped to this many degrees either side of the horizon.
pub const PITCH_LIMIT: f32 = 89.0;

/// Noclip camera driven by yaw/pitch angles in degrees.
///
/// Yaw -90 with pitch 0 looks down -Z. Forward/back movement stays in the
/// horizontal plane; up/down moves along world Y.
#[derive(Clone, Debug, PartialEq)]
pub struct FlyCamera {
    pub position: Vec3f,
    pub yaw: f32,
    pub pitch: f32,
    /// Blocks per second.
    pub speed: f32,
    /// Degrees per unit of pointer motion.
    pub mouse_sensitivity: f32,
}

impl Default for FlyCamera {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

impl FlyCamera {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            position: config.start_position,
            yaw: config.start_yaw,
            pitch: config.start_pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            speed: config.speed,
            mouse_sensitivity: config.mouse_sensitivity,
        }
    }

    /// Unit view direction.
    pub fn view_dir(&self) -> Vec3f {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        Vec3f::new(yaw.cos() * pitch.cos(), pitch.sin(), yaw.sin() * pitch.cos()).normalize()
    }

    /// View direction flattened onto the horizontal plane.
    pub fn move_dir(&self) -> Vec3f {
        let mut dir = self.view_dir();
        dir.y = 0.0;
        dir.normalize()
    }

    /// Horizontal right vector.
    pub fn right(&self) -> Vec3f {
        self.move_dir().cross(Vec3f::Y)
    }

    /// Turns by pointer motion; moving the pointer up raises the pitch.
    pub fn look(&mut self, dx: f32, dy: f32) {
        self.yaw += dx * self.mouse_sensitivity;
        self.pitch = (self.pitch - dy * self.mouse_sensitivity).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Applies every held movement action for `dt` seconds.
    ///
    /// Each action moves the full `speed * dt`; diagonals are not normalized.
    pub fn fly(&mut self, actions: &ActionState, dt: f32) {
        let step = self.speed * dt;
        let forward = self.move_dir();
        let right = self.right();

        let moves = [
            (Action::Forward, forward),
            (Action::Back, -forward),
            (Action::Right, right),
            (Action::Left, -right),
            (Action::Up, Vec3f::Y),
            (Action::Down, Vec3f::NEG_Y),
        ];
        for (action, dir) in moves {
            if actions.is_pressed(action) {
                self.position += dir * step;
            }
        }
    }

    /// Targeting ray from the eye along the view direction.
    pub fn ray(&self, reach: f32) -> Ray {
        Ray::new(self.position, self.view_dir(), reach)
    }
}
