//! List command: songs in table order, optionally filtered.

use anyhow::Result;
use voltex_core::export::generate_song_list_json;
use voltex_core::{Song, SongTable, Tier, format_song_summary};

use crate::cli_utils;

#[derive(Debug, Default)]
pub struct Filter {
    pub group: Option<String>,
    pub tier_level: Option<(Tier, u8)>,
    pub bosses: bool,
}

impl Filter {
    pub fn matches(&self, song: &Song) -> bool {
        if let Some(group) = &self.group
            && !song.in_group(group)
        {
            return false;
        }
        if let Some((tier, level)) = self.tier_level
            && song.level(tier) != Some(level)
        {
            return false;
        }
        !self.bosses || song.is_boss()
    }
}

pub fn run(songs: Option<&str>, filter: &Filter, json: bool) -> Result<()> {
    let table = cli_utils::load_table(songs)?;

    let selected: Vec<Song> = table
        .iter()
        .filter(|song| filter.matches(song))
        .cloned()
        .collect();

    if json {
        println!("{}", generate_song_list_json(&SongTable::new(selected), true)?);
        return Ok(());
    }

    for song in &selected {
        println!("{}", format_song_summary(song));
    }
    eprintln!("{} of {} songs", selected.len(), table.len());

    Ok(())
}
