use serde::{Deserialize, Serialize};

/// Raw pointer movement collected during one polling cycle.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct MouseMotion {
    pub x_delta: i32,
    pub y_delta: i32,
}

impl MouseMotion {
    pub const fn new(x_delta: i32, y_delta: i32) -> Self {
        Self { x_delta, y_delta }
    }
}

/// Everything a hook gets to see about the user's input for one poll.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RawInputState {
    pub mouse: MouseMotion,
    /// Whether the host's modifier key is held down during this poll.
    pub modifier_held: bool,
}

impl RawInputState {
    pub const fn from_motion(x_delta: i32, y_delta: i32) -> Self {
        Self {
            mouse: MouseMotion::new(x_delta, y_delta),
            modifier_held: false,
        }
    }
}

/// The emulated controller report for one user, in the console's own layout.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct GamepadState {
    pub buttons: u16,
    pub left_trigger: u8,
    pub right_trigger: u8,
    pub thumb_lx: i16,
    pub thumb_ly: i16,
    pub thumb_rx: i16,
    pub thumb_ry: i16,
}

/// User settings shared by every hook.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Multiplier applied to raw mouse deltas.
    pub sensitivity: f64,
    pub invert_x: bool,
    pub invert_y: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sensitivity: 1.0,
            invert_x: false,
            invert_y: false,
        }
    }
}
