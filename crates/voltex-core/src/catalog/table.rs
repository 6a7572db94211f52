use std::collections::{BTreeMap, HashMap};

use serde::Serialize;

use crate::chart::{Song, Tier};

/// Ordered, read-only song list.
///
/// Order is the asset's listing order and is preserved by every query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SongTable {
    songs: Vec<Song>,
}

impl SongTable {
    pub fn new(songs: Vec<Song>) -> Self {
        Self { songs }
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Song> {
        self.songs.iter()
    }

    pub fn as_slice(&self) -> &[Song] {
        &self.songs
    }

    /// Songs whose title matches, ignoring case. Titles are not unique.
    pub fn find_by_title(&self, title: &str) -> Vec<&Song> {
        let needle = title.to_lowercase();
        self.songs
            .iter()
            .filter(|song| song.title.to_lowercase() == needle)
            .collect()
    }

    pub fn find_by_identifier(&self, identifier: &str) -> Option<&Song> {
        self.songs.iter().find(|song| song.identifier() == identifier)
    }

    pub fn in_group<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Song> + 'a {
        self.songs.iter().filter(move |song| song.in_group(group))
    }

    /// Songs with a chart of exactly this tier and level
    pub fn with_level(&self, tier: Tier, level: u8) -> impl Iterator<Item = &Song> + '_ {
        self.songs
            .iter()
            .filter(move |song| song.level(tier) == Some(level))
    }

    pub fn bosses(&self) -> impl Iterator<Item = &Song> + '_ {
        self.songs.iter().filter(|song| song.is_boss())
    }

    /// Group label -> number of songs tagged with it
    pub fn groups(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for group in self.songs.iter().flat_map(|song| song.groups.iter()) {
            *counts.entry(group.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Level -> number of charts at that level, for one tier
    pub fn level_histogram(&self, tier: Tier) -> BTreeMap<u8, usize> {
        let mut histogram = BTreeMap::new();
        for level in self.songs.iter().filter_map(|song| song.level(tier)) {
            *histogram.entry(level).or_insert(0) += 1;
        }
        histogram
    }

    /// Identifiers shared by more than one song, with their indices
    pub fn duplicate_identifiers(&self) -> Vec<(String, Vec<usize>)> {
        duplicate_identifiers(&self.songs)
    }
}

/// Identifiers shared by more than one song, with their indices.
///
/// One entry per identifier, in order of first appearance.
pub fn duplicate_identifiers(songs: &[Song]) -> Vec<(String, Vec<usize>)> {
    let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
    let mut order = Vec::new();
    for (index, song) in songs.iter().enumerate() {
        let identifier = song.identifier();
        let indices = seen.entry(identifier.clone()).or_default();
        if indices.is_empty() {
            order.push(identifier);
        }
        indices.push(index);
    }

    order
        .into_iter()
        .filter_map(|identifier| {
            let indices = seen.remove(&identifier)?;
            (indices.len() > 1).then_some((identifier, indices))
        })
        .collect()
}

impl<'a> IntoIterator for &'a SongTable {
    type Item = &'a Song;
    type IntoIter = std::slice::Iter<'a, Song>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs.iter()
    }
}

impl From<Vec<Song>> for SongTable {
    fn from(songs: Vec<Song>) -> Self {
        Self::new(songs)
    }
}
