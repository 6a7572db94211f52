use serde::{Deserialize, Serialize};
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Difficulty tier of a chart.
///
/// NOV, ADV and EXH exist for every song. The remaining tiers are the
/// fourth/fifth slot charts introduced over the series, and a song has
/// at most a few of them.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Tier {
    Nov,
    Adv,
    Exh,
    Mxm,
    Grv,
    Xcd,
    Hvn,
    Inf,
    Vvd,
}

impl Tier {
    pub const REQUIRED: [Tier; 3] = [Tier::Nov, Tier::Adv, Tier::Exh];
    pub const OPTIONAL: [Tier; 6] = [
        Tier::Mxm,
        Tier::Grv,
        Tier::Xcd,
        Tier::Hvn,
        Tier::Inf,
        Tier::Vvd,
    ];

    /// All tiers in chart-table order.
    pub fn all() -> impl Iterator<Item = Tier> {
        Self::iter()
    }

    pub fn is_required(&self) -> bool {
        matches!(self, Self::Nov | Self::Adv | Self::Exh)
    }

    pub fn short_name(&self) -> &'static str {
        self.into()
    }

    /// Get the expanded tier name (e.g., "EXHAUST", "GRAVITY")
    pub fn expand_name(&self) -> &'static str {
        match self {
            Self::Nov => "NOVICE",
            Self::Adv => "ADVANCED",
            Self::Exh => "EXHAUST",
            Self::Mxm => "MAXIMUM",
            Self::Grv => "GRAVITY",
            Self::Xcd => "EXCEED",
            Self::Hvn => "HEAVENLY",
            Self::Inf => "INFINITE",
            Self::Vvd => "VIVID",
        }
    }

    /// RGB color of the tier label, used for console output
    pub fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Nov => (0x9B, 0x6B, 0xF0), // purple
            Self::Adv => (0xF2, 0xC1, 0x2E), // yellow
            Self::Exh => (0xE5, 0x3B, 0x3B), // red
            Self::Mxm => (0xC8, 0xC8, 0xC8), // silver
            Self::Grv => (0xF0, 0x8A, 0x24), // orange
            Self::Xcd => (0x3A, 0x7B, 0xF2), // blue
            Self::Hvn => (0x3C, 0xD6, 0xE6), // cyan
            Self::Inf => (0xE8, 0x4C, 0xB4), // pink
            Self::Vvd => (0xF5, 0x5F, 0xD2), // magenta
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.short_name())
    }
}
