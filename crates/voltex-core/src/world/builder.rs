//! Manual world generation from the song table.

use tracing::{debug, info, warn};

use crate::catalog::duplicate_identifiers;
use crate::chart::Song;
use crate::config::{WorldConfig, world};
use crate::error::Result;
use crate::world::{Categories, Category, GameInfo, Item, Location, Navigators, StartingItems};

/// Trap items: (name, count)
const TRAPS: [(&str, u32); 7] = [
    ("Swap Lazer Colors", 3),
    ("Hard Timing Window", 3),
    ("Rate +1.1", 3),
    ("Random", 3),
    ("Pass a 20", 3),
    ("Slowjam (Speed 3.0)", 3),
    ("Speedjam (Speed 9.0)", 3),
];

/// Helper items: (name, count)
const HELPERS: [(&str, u32); 7] = [
    ("Score +5.0000", 20),
    ("Score +10.0000", 10),
    ("Score +20.0000", 5),
    ("Score +50.0000", 3),
    ("Score +100.0000", 1),
    ("Cancel Trap", 12),
    ("Downlevel", 12),
];

/// CHAIN items: (name, count, chain value)
const CHAINS: [(&str, u32, u32); 6] = [
    ("CHAIN", 20, 1),
    ("5 CHAIN", 10, 5),
    ("10 CHAIN", 5, 10),
    ("20 CHAIN", 3, 20),
    ("50 CHAIN", 2, 50),
    ("100 CHAIN", 1, 100),
];

pub const VICTORY_LOCATION: &str = "PERFECT ULTIMATE CHAIN";
pub const PROGRESSIVE_GAUGE: &str = "Progressive Gauge";

pub fn song_number_category(song_number: usize) -> String {
    format!("Song Number {}", song_number)
}

pub fn navigator_access_category(navigator: &str) -> String {
    format!("Navigator Access for {}", navigator)
}

/// How a song enters the world
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SongKind {
    /// Any chart at boss level: gated by CHAIN, clearing it is the goal
    Boss,
    /// Listed by a navigator: unlocked through navigator access
    Navigator,
    /// Unlocked by its own song item
    Standard,
}

impl SongKind {
    pub fn classify(song: &Song, navigators: &[&str]) -> Self {
        if song.is_boss() {
            Self::Boss
        } else if !navigators.is_empty() {
            Self::Navigator
        } else {
            Self::Standard
        }
    }
}

/// A generated Manual world
#[derive(Debug, Clone)]
pub struct World {
    pub config: WorldConfig,
    pub game_info: GameInfo,
    pub items: Vec<Item>,
    pub locations: Vec<Location>,
    pub categories: Categories,
}

impl World {
    pub fn build(songs: &[Song], navigators: &Navigators, config: &WorldConfig) -> Result<Self> {
        config.validate()?;

        let mut world = Self {
            config: config.clone(),
            game_info: game_info(config),
            items: Vec::new(),
            locations: Vec::new(),
            categories: Categories::new(),
        };

        world.locations.push(
            Location::new(VICTORY_LOCATION)
                .requires("|@Boss Clear|")
                .victory()
                .category(["((Victory))"]),
        );
        world.add_chain_items();

        world.categories.insert("Goals", Category::hidden());
        world.categories.insert("Consumables", Category::hidden());

        world.add_navigators(navigators);

        for (song_number, song) in songs.iter().enumerate() {
            world.add_song(song_number, song, navigators);
        }

        world.add_traps_and_helpers();
        world.add_progressive_gauge();

        report_duplicate_identifiers(songs);
        info!(
            "Built world {}: {} items, {} locations, {} categories",
            world.game_info.game,
            world.item_count(),
            world.locations.len(),
            world.categories.len()
        );

        Ok(world)
    }

    /// Total items in the pool, counting every copy
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(Item::copies).sum()
    }

    pub fn world_file_name(&self) -> String {
        self.config.world_file_name()
    }

    pub fn find_item(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    pub fn find_location(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|location| location.name == name)
    }

    fn add_chain_items(&mut self) {
        for (name, count, chain) in CHAINS {
            self.items.push(
                Item::new(name)
                    .category(["CHAIN"])
                    .progression()
                    .count(count)
                    .value("chain", chain),
            );
        }
    }

    fn add_navigators(&mut self, navigators: &Navigators) {
        for navigator in navigators.names() {
            let access = navigator_access_category(navigator);
            self.categories.insert(access.clone(), Category::hidden());

            self.items.push(
                Item::new(format!("{} [ACCESS]", navigator))
                    .progression()
                    .category(["Navigator Keys".to_string(), access.clone()]),
            );
            self.locations.push(
                Location::new(format!("{} [RESCUE]", navigator))
                    .category(["((Navigator Rescue))"])
                    .requires(format!("|@{}|", access)),
            );
        }
    }

    fn add_song(&mut self, song_number: usize, song: &Song, navigators: &Navigators) {
        let identifier = song.identifier();
        let number_category = song_number_category(song_number);

        self.categories.insert(identifier.clone(), Category::hidden());
        self.categories
            .insert(number_category.clone(), Category::hidden());

        let song_navigators = navigators.for_title(&song.title);
        let kind = SongKind::classify(song, &song_navigators);
        debug!("Song #{} {} -> {:?}", song_number, identifier, kind);

        match kind {
            SongKind::Boss => {
                let completion = format!("{} (Completion)", identifier);

                self.items.push(Item::new(&identifier).progression().category([
                    "Goals".to_string(),
                    identifier.clone(),
                    number_category.clone(),
                    "Boss Access".to_string(),
                ]));
                self.locations.push(
                    Location::new(&identifier)
                        .requires(format!(
                            "{{ItemValue(chain:{})}} and |@{}|",
                            world::BOSS_CHAIN_REQUIREMENT,
                            number_category
                        ))
                        .category([
                            "Goals".to_string(),
                            identifier.clone(),
                            format!("(Boss) {}", identifier),
                        ])
                        .place_item(&completion),
                );
                self.items.push(Item::new(completion).progression().category([
                    "Goals".to_string(),
                    identifier.clone(),
                    "Boss Clear".to_string(),
                ]));
            }
            SongKind::Navigator => {
                let requires = song_navigators
                    .iter()
                    .map(|navigator| format!("|@{}|", navigator_access_category(navigator)))
                    .collect::<Vec<_>>()
                    .join(" or ");

                for goal in world::GOALS {
                    let mut categories = vec![
                        "Goals".to_string(),
                        identifier.clone(),
                        format!("(Song) {}", identifier),
                        format!("(Goal) {}", goal),
                    ];
                    categories.extend(
                        song_navigators
                            .iter()
                            .map(|navigator| format!("(Navigator) {}", navigator)),
                    );

                    self.locations.push(
                        Location::new(format!("{} ({})", identifier, goal))
                            .requires(requires.clone())
                            .category(categories),
                    );
                }
            }
            SongKind::Standard => {
                self.items.push(Item::new(&identifier).progression().category([
                    "Songs".to_string(),
                    identifier.clone(),
                    number_category.clone(),
                ]));

                for goal in world::GOALS {
                    self.locations.push(
                        Location::new(format!("{} ({})", identifier, goal))
                            .requires(format!("|@{}|", number_category))
                            .category([
                                "Goals".to_string(),
                                identifier.clone(),
                                format!("(Song) {}", identifier),
                                format!("(Goal) {}", goal),
                            ]),
                    );
                }
            }
        }
    }

    fn add_traps_and_helpers(&mut self) {
        for (name, count) in TRAPS {
            self.items
                .push(Item::new(name).count(count).trap().category(["Traps"]));
        }
        for (name, count) in HELPERS {
            self.items
                .push(Item::new(name).count(count).useful().category(["Helpers"]));
        }
    }

    fn add_progressive_gauge(&mut self) {
        let steps = world::GAUGE_LEVELS.len() as u32;
        self.items.push(
            Item::new(PROGRESSIVE_GAUGE)
                .count(steps + world::EXTRA_GAUGE_ITEMS)
                .progression()
                .category([PROGRESSIVE_GAUGE]),
        );

        for (index, rate) in world::GAUGE_LEVELS.iter().enumerate() {
            self.locations.push(
                Location::new(format!("{} ({})", PROGRESSIVE_GAUGE, rate))
                    .requires(format!("|{}:{}|", PROGRESSIVE_GAUGE, index + 1))
                    .category([format!("((Helpers)) {}", PROGRESSIVE_GAUGE)]),
            );
        }
    }
}

fn game_info(config: &WorldConfig) -> GameInfo {
    GameInfo {
        game: config.game_name(),
        creator: config.creator.clone(),
        filler_item_name: world::FILLER_ITEM_NAME.to_string(),
        death_link: false,
        starting_items: vec![StartingItems {
            item_categories: Some(vec!["Songs".to_string()]),
            random: Some(world::STARTING_RANDOM_SONGS),
            ..StartingItems::default()
        }],
    }
}

fn report_duplicate_identifiers(songs: &[Song]) {
    for (identifier, indices) in duplicate_identifiers(songs) {
        warn!(
            "Duplicate song identifier {:?} at songs {:?}: item and location names will collide",
            identifier, indices
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{ChartLevels, Tier};

    fn make_songs() -> Vec<Song> {
        vec![
            Song::new("Plain", "A", ["pack1"], ChartLevels::new(3, 7, 12)),
            Song::new(
                "Boss",
                "B",
                ["pack1"],
                ChartLevels::new(8, 14, 18).with(Tier::Xcd, 20),
            ),
            Song::new("Rescued", "C", ["pack2"], ChartLevels::new(5, 11, 15)),
        ]
    }

    fn make_navigators() -> Navigators {
        let mut navigators = Navigators::new();
        navigators.insert("Rasis", ["Rescued", "Boss"]);
        navigators.insert("Grace", ["Rescued"]);
        navigators
    }

    #[test]
    fn test_song_kind_classification() {
        let songs = make_songs();

        assert_eq!(SongKind::classify(&songs[0], &[]), SongKind::Standard);
        assert_eq!(SongKind::classify(&songs[1], &["Rasis"]), SongKind::Boss);
        assert_eq!(SongKind::classify(&songs[2], &["Rasis"]), SongKind::Navigator);
    }

    #[test]
    fn test_standard_song_items_and_goals() {
        let world = World::build(&make_songs(), &Navigators::new(), &WorldConfig::default()).unwrap();

        let item = world.find_item("Plain by A").unwrap();
        assert!(item.has_category("Songs"));
        assert!(item.has_category("Song Number 0"));

        for goal in world::GOALS {
            let location = world.find_location(&format!("Plain by A ({})", goal)).unwrap();
            assert_eq!(location.requires.as_deref(), Some("|@Song Number 0|"));
        }
    }

    #[test]
    fn test_boss_song() {
        let world = World::build(&make_songs(), &make_navigators(), &WorldConfig::default()).unwrap();

        let access = world.find_item("Boss by B").unwrap();
        assert!(access.has_category("Boss Access"));
        assert!(!access.has_category("Songs"));

        let location = world.find_location("Boss by B").unwrap();
        assert_eq!(
            location.requires.as_deref(),
            Some("{ItemValue(chain:300)} and |@Song Number 1|")
        );
        assert_eq!(
            location.place_item,
            Some(vec!["Boss by B (Completion)".to_string()])
        );

        let completion = world.find_item("Boss by B (Completion)").unwrap();
        assert!(completion.has_category("Boss Clear"));
        assert!(world.find_location("Boss by B (Pass)").is_none());
    }

    #[test]
    fn test_navigator_song() {
        let world = World::build(&make_songs(), &make_navigators(), &WorldConfig::default()).unwrap();

        assert!(world.find_item("Rescued by C").is_none());
        let location = world.find_location("Rescued by C (S Rank)").unwrap();
        assert_eq!(
            location.requires.as_deref(),
            Some("|@Navigator Access for Grace| or |@Navigator Access for Rasis|")
        );
        assert!(location.has_category("(Navigator) Grace"));
        assert!(location.has_category("(Navigator) Rasis"));

        let key = world.find_item("Rasis [ACCESS]").unwrap();
        assert!(key.has_category("Navigator Keys"));
        let rescue = world.find_location("Grace [RESCUE]").unwrap();
        assert_eq!(
            rescue.requires.as_deref(),
            Some("|@Navigator Access for Grace|")
        );
    }

    #[test]
    fn test_fixed_content() {
        let world = World::build(&[], &Navigators::new(), &WorldConfig::default()).unwrap();

        let victory = world.find_location(VICTORY_LOCATION).unwrap();
        assert_eq!(victory.victory, Some(true));

        let gauge = world.find_item(PROGRESSIVE_GAUGE).unwrap();
        assert_eq!(gauge.count, Some(8));
        let step = world.find_location("Progressive Gauge (Effective)").unwrap();
        assert_eq!(step.requires.as_deref(), Some("|Progressive Gauge:5|"));

        // 41 CHAIN + 21 traps + 63 helpers + 8 gauges
        assert_eq!(world.item_count(), 41 + 21 + 63 + 8);
        // victory + 5 gauge steps
        assert_eq!(world.locations.len(), 6);
        assert_eq!(world.categories.len(), 2);
    }

    #[test]
    fn test_song_categories() {
        let world = World::build(&make_songs(), &make_navigators(), &WorldConfig::default()).unwrap();

        // Goals, Consumables, 2 navigator access, 2 per song
        assert_eq!(world.categories.len(), 2 + 2 + 3 * 2);
        assert!(world.categories.contains("Song Number 2"));
        assert_eq!(world.categories.get("Plain by A"), Some(&Category::hidden()));
    }

    #[test]
    fn test_duplicate_identifier_categories_stored_once() {
        let song = Song::new("Rain", "Sta", ["pack1"], ChartLevels::new(4, 9, 14));
        let songs = vec![song.clone(), song];
        let world = World::build(&songs, &Navigators::new(), &WorldConfig::default()).unwrap();

        // Goals, Consumables, one shared identifier, two song numbers
        assert_eq!(world.categories.len(), 2 + 1 + 2);
        assert!(world.categories.contains("Rain by Sta"));
        assert!(world.categories.contains("Song Number 0"));
        assert!(world.categories.contains("Song Number 1"));

        let song_items = world
            .items
            .iter()
            .filter(|item| item.name == "Rain by Sta")
            .count();
        assert_eq!(song_items, 2);
    }

    #[test]
    fn test_game_info() {
        let world = World::build(&[], &Navigators::new(), &WorldConfig::default().with_dev(false)).unwrap();

        assert_eq!(world.game_info.game, "SDVX");
        assert_eq!(world.game_info.creator, "MapleLeaf");
        assert!(!world.game_info.death_link);
        assert_eq!(
            serde_json::to_string(&world.game_info.starting_items).unwrap(),
            r#"[{"item_categories":["Songs"],"random":5}]"#
        );
        assert_eq!(world.world_file_name(), "manual_SDVX_MapleLeaf");
    }
}
