//! Per-frame input snapshots and held/edge tracking for sandbox actions.

use std::collections::HashSet;

use glam::Vec2;

/// Things the player can ask for in a frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Action {
    Forward,
    Back,
    Left,
    Right,
    Up,
    Down,
    /// Remove the targeted block every frame while held.
    Break,
    /// Place a block against the targeted face once per press.
    Place,
}

/// Everything the session needs from one frame of input.
#[derive(Clone, Debug, Default)]
pub struct InputFrame {
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Raw pointer motion this frame; +x is right, +y is down.
    pub mouse_delta: Vec2,
    /// Actions held down during this frame.
    pub held: HashSet<Action>,
}

impl InputFrame {
    /// An idle frame lasting `dt` seconds.
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Default::default()
        }
    }

    /// Adds `action` to the held set.
    #[must_use]
    pub fn with(mut self, action: Action) -> Self {
        self.held.insert(action);
        self
    }

    /// Sets the pointer motion.
    #[must_use]
    pub fn with_mouse(mut self, dx: f32, dy: f32) -> Self {
        self.mouse_delta = Vec2::new(dx, dy);
        self
    }
}

/// Remembers the previous frame so presses can be told apart from holds.
///
/// Call [`advance`](Self::advance) once per frame before querying.
#[derive(Clone, Debug, Default)]
pub struct ActionState {
    pressed: HashSet<Action>,
    previous: HashSet<Action>,
}

impl ActionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rolls the current set into `previous` and takes `frame`'s held set.
    pub fn advance(&mut self, frame: &InputFrame) {
        self.previous = std::mem::replace(&mut self.pressed, frame.held.clone());
    }

    /// `true` while the action is held.
    #[must_use]
    pub fn is_pressed(&self, action: Action) -> bool {
        self.pressed.contains(&action)
    }

    /// `true` if the action was held on the previous frame.
    #[must_use]
    pub fn was_pressed(&self, action: Action) -> bool {
        self.previous.contains(&action)
    }

    /// `true` only on the frame the action went from released to held.
    #[must_use]
    pub fn just_pressed(&self, action: Action) -> bool {
        self.is_pressed(action) && !self.was_pressed(action)
    }
}
