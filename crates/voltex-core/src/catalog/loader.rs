//! Song table loading and schema validation

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::catalog::SongTable;
use crate::chart::Song;
use crate::error::{Error, Result};

/// Song list compiled into the crate
pub const BUNDLED_SONGS: &str = include_str!("../../data/songs.json");

/// Origin label used in errors for the compiled-in song list
pub const BUNDLED_ORIGIN: &str = "bundled songs.json";

static BUNDLED_TABLE: OnceLock<SongTable> = OnceLock::new();

/// Load the bundled song table.
///
/// The asset is parsed on first call and cached for the lifetime of the
/// process; later calls return the same table. A non-conforming asset is
/// reported as [`Error::SchemaViolation`] and nothing is cached.
pub fn load_songs() -> Result<&'static SongTable> {
    if let Some(table) = BUNDLED_TABLE.get() {
        return Ok(table);
    }

    let table = parse_songs(BUNDLED_ORIGIN, BUNDLED_SONGS)?;
    info!("Loaded {} songs from {}", table.len(), BUNDLED_ORIGIN);

    Ok(BUNDLED_TABLE.get_or_init(|| table))
}

/// Load a song table from a JSON file
pub fn load_songs_from_path<P: AsRef<Path>>(path: P) -> Result<SongTable> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let table = parse_songs(&path.display().to_string(), &content)?;
    info!("Loaded {} songs from {}", table.len(), path.display());
    Ok(table)
}

/// Parse a song list document.
///
/// The whole document must conform: the first bad entry fails the load and
/// the error names its index (and title when one is readable).
pub fn parse_songs(origin: &str, json: &str) -> Result<SongTable> {
    let document: Value = serde_json::from_str(json)
        .map_err(|e| Error::schema(origin, format!("invalid JSON: {}", e)))?;

    let Value::Array(entries) = document else {
        return Err(Error::schema(
            origin,
            format!("expected an array of songs, found {}", json_kind(&document)),
        ));
    };

    let mut songs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let title = entry
            .get("title")
            .and_then(Value::as_str)
            .map(str::to_owned);

        let song = Song::deserialize(entry).map_err(|e| {
            let location = match &title {
                Some(title) => format!("song #{} ({:?})", index, title),
                None => format!("song #{}", index),
            };
            Error::schema(origin, format!("{}: {}", location, e))
        })?;
        songs.push(song);
    }

    debug!("Parsed {} songs from {}", songs.len(), origin);
    Ok(SongTable::new(songs))
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
