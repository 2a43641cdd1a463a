//! Scripted input that replays a short dig from the default spawn.
//!
//! The camera strafes over the reference floor while tilting down, descends
//! until the floor is within reach, then keeps descending with "break" held so
//! it tunnels straight down.

use crate::input::{Action, InputFrame};

/// Fixed timestep used by the script.
pub const FRAME_DT: f32 = 1.0 / 60.0;

/// Frames spent strafing and tilting.
pub const POSITION_FRAMES: u32 = 60;

/// Frame at which "break" starts being held.
pub const DIG_START: u32 = 220;

/// Pointer motion per positioning frame; sixty of these saturate the pitch clamp.
const TILT_PER_FRAME: f32 = 15.0;

/// Input for frame `frame` of the script.
pub fn scripted_frame(frame: u32) -> InputFrame {
    let input = InputFrame::new(FRAME_DT);
    if frame < POSITION_FRAMES {
        input
            .with_mouse(0.0, TILT_PER_FRAME)
            .with(Action::Right)
            .with(Action::Back)
    } else if frame < DIG_START {
        input.with(Action::Down)
    } else {
        input.with(Action::Down).with(Action::Break)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::Session;
    use cubecast_config::Config;

    #[test]
    fn test_phases() {
        assert!(scripted_frame(0).held.contains(&Action::Right));
        assert!(!scripted_frame(POSITION_FRAMES).held.contains(&Action::Right));
        assert!(!scripted_frame(DIG_START - 1).held.contains(&Action::Break));
        assert!(scripted_frame(DIG_START).held.contains(&Action::Break));
    }

    #[test]
    fn test_default_script_digs_into_reference_floor() {
        let mut session = Session::from_config(&Config::default()).unwrap();
        let before: usize = session.world().iter().map(|(_, c)| c.solid_count()).sum();

        for frame in 0..240 {
            session.update(&scripted_frame(frame));
        }

        let camera = session.camera();
        assert_eq!(camera.pitch, -89.0);
        assert!((camera.position.x - 5.0).abs() < 1e-3);
        assert!((camera.position.z - 5.0).abs() < 1e-3);

        let stats = session.stats();
        assert_eq!(stats.frames, 240);
        assert!(stats.removed >= 1);
        assert_eq!(stats.rejected, 0);

        let after: usize = session.world().iter().map(|(_, c)| c.solid_count()).sum();
        assert_eq!(before - after, stats.removed as usize);
    }
}
