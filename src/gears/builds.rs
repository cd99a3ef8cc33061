use asr::Address32;

/// A compiled release of one of the Gears of War titles.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum GameBuild {
    #[default]
    Unknown,
    GearsOfWar3Tu0,
    GearsOfWar2Tu0,
}

/// Where a given build keeps its camera accumulators.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct BuildAddrs {
    /// Version string the title reports for this build.
    pub title_version: &'static str,
    /// Horizontal look accumulator, a big-endian u16.
    pub x_address: Address32,
    /// Vertical look accumulator, a big-endian u16.
    pub y_address: Address32,
}

pub const SUPPORTED_BUILDS: [(GameBuild, BuildAddrs); 2] = [
    (
        GameBuild::GearsOfWar3Tu0,
        BuildAddrs {
            title_version: "11.0",
            x_address: Address32::new(0x437612A6),
            y_address: Address32::new(0x437612A2),
        },
    ),
    (
        GameBuild::GearsOfWar2Tu0,
        BuildAddrs {
            title_version: "5.0",
            x_address: Address32::new(0x40E66266),
            y_address: Address32::new(0x40E66262),
        },
    ),
];

/// Finds the build whose version string matches exactly.
pub fn find_by_version(version: &str) -> Option<GameBuild> {
    SUPPORTED_BUILDS
        .iter()
        .find(|build| build.1.title_version == version)
        .map(|build| build.0)
}

/// Camera addresses for a build. `Unknown` has none.
pub fn addresses(game_build: GameBuild) -> Option<BuildAddrs> {
    SUPPORTED_BUILDS
        .iter()
        .find(|build| build.0 == game_build)
        .map(|build| build.1)
}
