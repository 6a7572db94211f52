//! Configuration for world generation.
//!
//! This module contains:
//! - `WorldConfig` - game name, creator, dev mode and output folder
//! - Chart classification and world layout constants

mod world_config;

pub use world_config::*;

/// Chart classification.
pub mod chart {
    /// Songs with any chart at or above this level are boss songs.
    pub const BOSS_LEVEL: u8 = 20;
}

/// Manual world defaults and layout constants.
pub mod world {
    /// Base game name written to game.json.
    pub const GAME_NAME: &str = "SDVX";

    pub const CREATOR: &str = "MapleLeaf";

    /// Appended to the game name for development builds.
    pub const DEV_SUFFIX: &str = "_dev";

    pub const FILLER_ITEM_NAME: &str = "you tried (Score +0.1000)";

    /// Number of random songs from the "Songs" category granted at start.
    pub const STARTING_RANDOM_SONGS: u32 = 5;

    /// CHAIN value needed to access a boss song.
    pub const BOSS_CHAIN_REQUIREMENT: u32 = 300;

    /// Per-song goals, in order.
    pub const GOALS: [&str; 4] = ["Pass", "AA Rank", "AAA Rank", "S Rank"];

    /// Gauge steps unlocked by "Progressive Gauge", starting from Blastive 2.5.
    pub const GAUGE_LEVELS: [&str; 5] = [
        "Blastive 2.0",
        "Blastive 1.5",
        "Blastive 1.0",
        "Blastive 0.5",
        "Effective",
    ];

    /// Extra "Progressive Gauge" copies beyond one per gauge step.
    pub const EXTRA_GAUGE_ITEMS: u32 = 3;

    /// Folder for packaged worlds when no output folder is configured.
    pub const DEFAULT_OUTPUT_FOLDER: &str = "dist";
}

/// Environment variable names.
pub mod env {
    /// Set to `false` to build a release world (no `_dev` suffix, compact JSON).
    pub const DEV: &str = "DEV";

    pub const APWORLD_OUTPUT_FOLDER: &str = "APWORLD_OUTPUT_FOLDER";
}
