use serde::{Deserialize, Deserializer, Serialize};

use crate::chart::Tier;
use crate::config::chart::BOSS_LEVEL;

/// Chart levels of one song, keyed by tier.
///
/// NOV/ADV/EXH are always present. The optional tiers are `None` when the
/// song has no chart of that tier, which is not the same as a level 0 chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChartLevels {
    #[serde(rename = "NOV")]
    pub nov: u8,
    #[serde(rename = "ADV")]
    pub adv: u8,
    #[serde(rename = "EXH")]
    pub exh: u8,
    #[serde(
        rename = "MXM",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub mxm: Option<u8>,
    #[serde(
        rename = "GRV",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub grv: Option<u8>,
    #[serde(
        rename = "XCD",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub xcd: Option<u8>,
    #[serde(
        rename = "HVN",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub hvn: Option<u8>,
    #[serde(
        rename = "INF",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub inf: Option<u8>,
    #[serde(
        rename = "VVD",
        default,
        deserialize_with = "present_level",
        skip_serializing_if = "Option::is_none"
    )]
    pub vvd: Option<u8>,
}

impl ChartLevels {
    /// Levels with only the required tiers charted
    pub fn new(nov: u8, adv: u8, exh: u8) -> Self {
        Self {
            nov,
            adv,
            exh,
            mxm: None,
            grv: None,
            xcd: None,
            hvn: None,
            inf: None,
            vvd: None,
        }
    }

    pub fn with(mut self, tier: Tier, level: u8) -> Self {
        match tier {
            Tier::Nov => self.nov = level,
            Tier::Adv => self.adv = level,
            Tier::Exh => self.exh = level,
            Tier::Mxm => self.mxm = Some(level),
            Tier::Grv => self.grv = Some(level),
            Tier::Xcd => self.xcd = Some(level),
            Tier::Hvn => self.hvn = Some(level),
            Tier::Inf => self.inf = Some(level),
            Tier::Vvd => self.vvd = Some(level),
        }
        self
    }

    /// Level of the given tier, `None` if the song has no such chart
    pub fn get(&self, tier: Tier) -> Option<u8> {
        match tier {
            Tier::Nov => Some(self.nov),
            Tier::Adv => Some(self.adv),
            Tier::Exh => Some(self.exh),
            Tier::Mxm => self.mxm,
            Tier::Grv => self.grv,
            Tier::Xcd => self.xcd,
            Tier::Hvn => self.hvn,
            Tier::Inf => self.inf,
            Tier::Vvd => self.vvd,
        }
    }

    pub fn has(&self, tier: Tier) -> bool {
        self.get(tier).is_some()
    }

    /// Present charts in tier order
    pub fn iter(&self) -> impl Iterator<Item = (Tier, u8)> + '_ {
        Tier::all().filter_map(|tier| self.get(tier).map(|level| (tier, level)))
    }

    /// Number of charts the song has (3 to 9)
    pub fn count(&self) -> usize {
        self.iter().count()
    }

    /// Highest level among all present charts
    pub fn max_level(&self) -> u8 {
        self.iter().map(|(_, level)| level).max().unwrap_or(self.exh)
    }

    /// The highest optional chart, if any. A song normally carries one
    /// fourth-slot chart, so this is "the" MXM/GRV/HVN/... chart.
    pub fn extra(&self) -> Option<(Tier, u8)> {
        Tier::OPTIONAL
            .iter()
            .filter_map(|&tier| self.get(tier).map(|level| (tier, level)))
            .max_by_key(|&(_, level)| level)
    }

    pub fn is_boss(&self) -> bool {
        self.max_level() >= BOSS_LEVEL
    }
}

/// A tier key that is present must carry a level; `null` is rejected rather
/// than read as "no chart".
fn present_level<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    u8::deserialize(deserializer).map(Some)
}
