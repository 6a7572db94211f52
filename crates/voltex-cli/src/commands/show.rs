//! Show command: per-tier breakdown of one song.

use anyhow::{Result, bail};
use voltex_core::format_song_console;

use crate::cli_utils;

pub fn run(songs: Option<&str>, title: &str) -> Result<()> {
    let table = cli_utils::load_table(songs)?;

    let matches = match table.find_by_identifier(title) {
        Some(song) => vec![song],
        None => table.find_by_title(title),
    };

    if matches.is_empty() {
        bail!("No song titled {:?}", title);
    }
    if matches.len() > 1 {
        eprintln!(
            "{} songs titled {:?}; use \"<title> by <artist>\" to pick one",
            matches.len(),
            title
        );
    }

    for song in matches {
        println!("{}", format_song_console(song));
    }
    Ok(())
}
