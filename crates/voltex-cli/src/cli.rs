//! CLI argument definitions for voltex.

use std::str::FromStr;

use clap::{Parser, Subcommand};
use voltex_core::{ExportFormat, Tier};

#[derive(Parser)]
#[command(name = "voltex")]
#[command(about = "SOUND VOLTEX song table and Manual world builder", version)]
pub struct Args {
    /// Use this songs.json instead of the bundled song table
    #[arg(long, value_name = "FILE", env = "VOLTEX_SONGS", global = true)]
    pub songs: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// List songs in table order
    List {
        /// Only songs tagged with this group
        #[arg(long)]
        group: Option<String>,
        /// Tier to filter by level (NOV, ADV, EXH, MXM, GRV, XCD, HVN, INF, VVD)
        #[arg(long, value_parser = parse_tier, requires = "level")]
        tier: Option<Tier>,
        /// Level to match on the selected tier
        #[arg(long, requires = "tier")]
        level: Option<u8>,
        /// Only boss songs (any chart at level 20 or above)
        #[arg(long)]
        bosses: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show every chart of a song
    Show {
        /// Song title (case-insensitive) or "<title> by <artist>"
        title: String,
    },
    /// Show song, group and level statistics
    Stats {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Check a songs.json file against the song schema
    Validate {
        /// File to validate
        file: String,
    },
    /// Export the song list
    Export {
        /// Output file path (stdout when omitted)
        #[arg(long, short)]
        output: Option<String>,
        /// Output format (tsv, json)
        #[arg(long, short, value_parser = parse_format, default_value = "tsv")]
        format: ExportFormat,
    },
    /// Generate Manual world data files and optionally package an apworld
    Build {
        /// Navigators file (JSON: navigator name -> song titles)
        #[arg(long, value_name = "FILE")]
        navigators: Option<String>,
        /// Directory for game/items/locations/categories JSON
        /// [default: <src>/data with --src, otherwise data]
        #[arg(long, value_name = "DIR")]
        data_dir: Option<String>,
        /// Manual world source directory to package as .apworld
        #[arg(long, value_name = "DIR")]
        src: Option<String>,
        /// Folder for the packaged .apworld
        #[arg(long, short, env = "APWORLD_OUTPUT_FOLDER")]
        output: Option<String>,
        /// Build a dev world (_dev suffix, tab-indented JSON) regardless of DEV
        #[arg(long, conflicts_with = "release")]
        dev: bool,
        /// Build a release world (no _dev suffix, compact JSON)
        #[arg(long)]
        release: bool,
    },
}

fn parse_tier(value: &str) -> Result<Tier, String> {
    Tier::from_str(value).map_err(|_| format!("unknown tier: {}", value))
}

fn parse_format(value: &str) -> Result<ExportFormat, String> {
    ExportFormat::from_str(value).map_err(|_| format!("unknown export format: {}", value))
}
