//! Common CLI utility functions shared across commands.

use std::borrow::Cow;

use anyhow::Result;
use voltex_core::{SongTable, load_songs, load_songs_from_path};

/// Load the song table from `--songs` or fall back to the bundled table.
pub fn load_table(songs: Option<&str>) -> Result<Cow<'static, SongTable>> {
    match songs {
        Some(path) => Ok(Cow::Owned(load_songs_from_path(path)?)),
        None => Ok(Cow::Borrowed(load_songs()?)),
    }
}

/// Write to a file, or print to stdout when no path is given.
pub fn write_output(output: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = output {
        std::fs::write(path, content)?;
        eprintln!("Exported to: {}", path);
    } else {
        println!("{}", content);
    }
    Ok(())
}
