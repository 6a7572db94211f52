//! # voltex-core
//!
//! Core library for the SOUND VOLTEX song table.
//!
//! This crate provides:
//! - Song and chart types (`Song`, `ChartLevels`, `Tier`)
//! - The bundled song table, validated on load
//! - Song list export (TSV, JSON, console)
//! - Archipelago Manual world generation and `.apworld` packaging

pub mod catalog;
pub mod chart;
pub mod config;
pub mod error;
pub mod export;
pub mod prelude;
pub mod world;

// Re-export from catalog module
pub use catalog::{SongTable, load_songs, load_songs_from_path, parse_songs};

// Re-export from chart module
pub use chart::{ChartLevels, Song, Tier};

// Re-export from config module
pub use config::WorldConfig;

// Re-export from error module
pub use error::{Error, Result};

// Re-export from export module
pub use export::{
    ExportFormat, export_song_list, format_song_console, format_song_summary, generate_song_list,
};

// Re-export from world module
pub use world::{Navigators, SongKind, World, package_apworld};
