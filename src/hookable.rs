use crate::shared::{Config, GamepadState, Host, RawInputState};

/// The contract every per-title hook implements, so the host can drive all of
/// them the same way.
pub trait HookableGame {
    /// Checks whether the running title, and the build of it, is one this hook knows.
    fn is_supported(&mut self, host: &dyn Host) -> bool;

    /// Name of the control-binding profile to use while this title runs.
    fn choose_bind_set(&self) -> &'static str;

    /// Applies one poll's mouse input to the running title.
    ///
    /// Returns true if the game's memory was changed.
    fn apply_hook(
        &mut self,
        host: &mut dyn Host,
        config: &Config,
        user_index: u32,
        input: &RawInputState,
    ) -> bool;

    /// Alternate behavior while the modifier key is held.
    ///
    /// Returns true if `out_state` or the game's memory was changed.
    fn modifier_key_handler(
        &mut self,
        host: &mut dyn Host,
        config: &Config,
        user_index: u32,
        input: &RawInputState,
        out_state: &mut GamepadState,
    ) -> bool;
}

/// Every hookable game compiled into this crate, one instance per session.
pub struct Hookables {
    games: Vec<Box<dyn HookableGame>>,
}

impl Hookables {
    /// Registers a fresh instance of each title family enabled through cargo features.
    pub fn new() -> Self {
        #[allow(unused_mut)]
        let mut games: Vec<Box<dyn HookableGame>> = Vec::new();

        #[cfg(feature = "gears")]
        games.push(Box::new(crate::gears::GearsOfWarGame::new()));

        Self { games }
    }

    /// Builds a registry from an explicit list of hooks.
    pub fn with_games(games: Vec<Box<dyn HookableGame>>) -> Self {
        Self { games }
    }

    /// Routes one input poll to the first hook supporting the running title.
    ///
    /// The modifier key handler only runs while `input.modifier_held` is set.
    /// Returns false if no hook supports the title or none of them did anything.
    pub fn apply_hooks(
        &mut self,
        host: &mut dyn Host,
        config: &Config,
        user_index: u32,
        input: &RawInputState,
        out_state: &mut GamepadState,
    ) -> bool {
        let Some(index) = self.games.iter_mut().position(|game| game.is_supported(&*host)) else {
            return false
        };
        let game = &mut self.games[index];

        let mut applied = game.apply_hook(host, config, user_index, input);
        if input.modifier_held {
            applied |= game.modifier_key_handler(host, config, user_index, input, out_state);
        }
        applied
    }

    /// Bind set of the hook supporting the running title, if any.
    pub fn choose_bind_set(&mut self, host: &dyn Host) -> Option<&'static str> {
        self.games
            .iter_mut()
            .find_map(|game| game.is_supported(host).then(|| game.choose_bind_set()))
    }
}

impl Default for Hookables {
    fn default() -> Self {
        Self::new()
    }
}
