use serde::{Deserialize, Serialize};

use crate::chart::{ChartLevels, Tier};

/// Song metadata
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Song {
    /// Display title. Not unique across the table.
    pub title: String,
    pub artist: String,
    /// Source collections (game version, pack, genre), in listing order
    pub groups: Vec<String>,
    pub charts: ChartLevels,
}

impl Song {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        groups: impl IntoIterator<Item = impl Into<String>>,
        charts: ChartLevels,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            groups: groups.into_iter().map(Into::into).collect(),
            charts,
        }
    }

    /// Name used for the song inside a generated world: "<title> by <artist>"
    pub fn identifier(&self) -> String {
        format!("{} by {}", self.title, self.artist)
    }

    pub fn level(&self, tier: Tier) -> Option<u8> {
        self.charts.get(tier)
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn is_boss(&self) -> bool {
        self.charts.is_boss()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_test_song() -> Song {
        Song::new(
            "Test Song",
            "Test Artist",
            ["SOUND VOLTEX II -infinite infection-", "ボーカロイド"],
            ChartLevels::new(5, 11, 15).with(Tier::Inf, 18),
        )
    }

    #[test]
    fn test_identifier() {
        assert_eq!(make_test_song().identifier(), "Test Song by Test Artist");
    }

    #[test]
    fn test_level_lookup() {
        let song = make_test_song();

        assert_eq!(song.level(Tier::Adv), Some(11));
        assert_eq!(song.level(Tier::Inf), Some(18));
        assert_eq!(song.level(Tier::Mxm), None);
        assert!(!song.is_boss());
    }

    #[test]
    fn test_in_group() {
        let song = make_test_song();

        assert!(song.in_group("ボーカロイド"));
        assert!(!song.in_group("ボーカロ"));
    }

    #[test]
    fn test_round_trip_json() {
        let song = make_test_song();
        let json = serde_json::to_string(&song).unwrap();
        let parsed: Song = serde_json::from_str(&json).unwrap();

        assert_eq!(song, parsed);
    }

    #[test]
    fn test_ignores_identifier_column() {
        let json = r#"{
            "identifier": "Example by A",
            "title": "Example",
            "artist": "A",
            "groups": [],
            "charts": {"NOV": 3, "ADV": 7, "EXH": 12}
        }"#;
        let song: Song = serde_json::from_str(json).unwrap();

        assert_eq!(song.identifier(), "Example by A");
        assert!(song.groups.is_empty());
    }

    #[test]
    fn test_null_title_rejected() {
        let json = r#"{"title": null, "artist": "A", "groups": [], "charts": {"NOV": 3, "ADV": 7, "EXH": 12}}"#;
        assert!(serde_json::from_str::<Song>(json).is_err());
    }
}
