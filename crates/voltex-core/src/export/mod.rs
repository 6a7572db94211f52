//! Export formats for the song table.

mod console;

pub use console::*;

use std::fs;
use std::path::Path;

use serde::Serialize;
use strum::{EnumString, IntoStaticStr};

use crate::catalog::SongTable;
use crate::chart::{Song, Tier};
use crate::error::Result;
use crate::world::to_json;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ExportFormat {
    Tsv,
    Json,
}

/// Song list TSV header: title, artist, groups, then one column per tier
pub fn format_song_tsv_header() -> String {
    let mut columns = vec!["title", "artist", "groups"];
    columns.extend(Tier::all().map(|tier| tier.short_name()));
    columns.join("\t")
}

/// One TSV row. Groups are joined with ", "; absent tiers are left empty.
pub fn format_song_tsv_row(song: &Song) -> String {
    let mut values = vec![
        sanitize_tsv(&song.title),
        sanitize_tsv(&song.artist),
        sanitize_tsv(&song.groups.join(", ")),
    ];
    values.extend(
        Tier::all().map(|tier| song.level(tier).map(|l| l.to_string()).unwrap_or_default()),
    );
    values.join("\t")
}

/// Tabs and newlines would break the row layout
fn sanitize_tsv(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}

pub fn generate_song_list_tsv(table: &SongTable) -> String {
    let mut lines = vec![format_song_tsv_header()];
    lines.extend(table.iter().map(format_song_tsv_row));
    lines.join("\n")
}

/// Song entry for JSON export, with derived fields
#[derive(Debug, Serialize)]
pub struct SongJson<'a> {
    pub identifier: String,
    #[serde(flatten)]
    pub song: &'a Song,
    pub boss: bool,
}

/// Same array layout as the input asset, plus identifier and boss flag
pub fn generate_song_list_json(table: &SongTable, pretty: bool) -> Result<String> {
    let entries: Vec<SongJson<'_>> = table
        .iter()
        .map(|song| SongJson {
            identifier: song.identifier(),
            song,
            boss: song.is_boss(),
        })
        .collect();
    to_json(&entries, pretty)
}

pub fn generate_song_list(table: &SongTable, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Tsv => Ok(generate_song_list_tsv(table)),
        ExportFormat::Json => generate_song_list_json(table, true),
    }
}

pub fn export_song_list<P: AsRef<Path>>(
    path: P,
    table: &SongTable,
    format: ExportFormat,
) -> Result<()> {
    fs::write(path, generate_song_list(table, format)?)?;
    Ok(())
}
