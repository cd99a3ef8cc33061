use core::fmt::Error;
use asr::Address;
use tracing::{debug, trace};

use crate::{
    shared::{self, Config, GamepadState, Host, RawInputState},
    HookableGame,
};
mod builds;
pub use builds::{addresses, find_by_version, BuildAddrs, GameBuild, SUPPORTED_BUILDS};

pub const TITLE_ID_GOW3: u32 = 0x4D5308AB;
pub const TITLE_ID_GOW2: u32 = 0x4D53082D;
pub const TITLE_ID_GOW: u32 = 0x4D5307D5;

const TITLE_IDS: [u32; 3] = [TITLE_ID_GOW3, TITLE_ID_GOW2, TITLE_ID_GOW];

/// Raw mouse counts per camera accumulator step, before sensitivity.
const MOUSE_SCALE: f64 = 10.0;

/// Mouse look for the Gears of War titles.
///
/// The detected build is remembered for as long as the instance lives, so a
/// new instance should be created for every session.
#[derive(Debug, Default)]
pub struct GearsOfWarGame {
    game_build: GameBuild,
}

impl GearsOfWarGame {
    pub const fn new() -> Self {
        Self {
            game_build: GameBuild::Unknown,
        }
    }

    /// The build detected for this session, `Unknown` until the first successful check.
    pub fn game_build(&self) -> GameBuild {
        self.game_build
    }
}

impl HookableGame for GearsOfWarGame {
    fn is_supported(&mut self, host: &dyn Host) -> bool {
        let title_id = host.title_id();
        if !TITLE_IDS.contains(&title_id) {
            return false
        }

        let version = host.title_version();
        let Some(game_build) = find_by_version(version) else {
            return false
        };

        if self.game_build == GameBuild::Unknown {
            debug!(version, build = ?game_build, "detected title {title_id:08X}");
            self.game_build = game_build;
        }
        true
    }

    fn choose_bind_set(&self) -> &'static str {
        "Default"
    }

    fn apply_hook(
        &mut self,
        host: &mut dyn Host,
        config: &Config,
        _user_index: u32,
        input: &RawInputState,
    ) -> bool {
        if !self.is_supported(&*host) {
            return false
        }

        let Some(addrs) = addresses(self.game_build) else {
            return false
        };

        // Only write while both axes are moving.
        if input.mouse.x_delta == 0 || input.mouse.y_delta == 0 {
            return false
        }

        let Some((x_axis, y_axis)) = resolve_axes(&*host, &addrs) else {
            trace!(build = ?self.game_build, "camera not mapped");
            return false
        };

        let x_delta = scale_delta(input.mouse.x_delta, config.sensitivity);
        let y_delta = scale_delta(input.mouse.y_delta, config.sensitivity);

        // Looking down raises the vertical accumulator.
        if nudge_axis(host, x_axis, x_delta, !config.invert_x).is_err()
            || nudge_axis(host, y_axis, y_delta, config.invert_y).is_err()
        {
            trace!(build = ?self.game_build, "camera write failed");
            return false
        }

        true
    }

    fn modifier_key_handler(
        &mut self,
        _host: &mut dyn Host,
        _config: &Config,
        _user_index: u32,
        _input: &RawInputState,
        _out_state: &mut GamepadState,
    ) -> bool {
        false
    }
}

/// Host addresses of both camera accumulators, or `None` while either one is unmapped.
fn resolve_axes(host: &dyn Host, addrs: &BuildAddrs) -> Option<(Address, Address)> {
    let x_axis = host.translate_virtual(addrs.x_address)?;
    let y_axis = host.translate_virtual(addrs.y_address)?;
    Some((x_axis, y_axis))
}

/// Scales a raw mouse delta into accumulator units.
///
/// Rounds to the nearest step and wraps modulo 2^16, the same width the game
/// accumulates in, so negative deltas become their two's complement. A
/// non-finite product scales to 0.
pub fn scale_delta(delta: i32, sensitivity: f64) -> u16 {
    let steps = (f64::from(delta) * MOUSE_SCALE * sensitivity).round();
    steps.rem_euclid(65536.0) as u16
}

/// Adds or subtracts `delta` from a big-endian u16 cell, wrapping around.
fn nudge_axis(host: &mut dyn Host, axis: Address, delta: u16, increase: bool) -> Result<(), Error> {
    let value = shared::read::<u16, _>(&*host, axis)?;

    let value = if increase {
        value.wrapping_add(delta)
    } else {
        value.wrapping_sub(delta)
    };

    shared::write(host, axis, value)
}
