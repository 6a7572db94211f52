//! Validate command: check a songs.json file against the song schema.

use anyhow::Result;
use tracing::warn;
use voltex_core::load_songs_from_path;

pub fn run(file: &str) -> Result<()> {
    let table = load_songs_from_path(file)?;

    for (identifier, indices) in table.duplicate_identifiers() {
        warn!("Duplicate identifier {:?} at {:?}", identifier, indices);
    }

    println!("{}: {} songs OK", file, table.len());
    Ok(())
}
