//! The song table.
//!
//! - `load_songs` - the bundled table, parsed once per process
//! - `parse_songs` / `load_songs_from_path` - tables from other documents
//! - `SongTable` - ordered read-only queries

mod loader;
mod table;

pub use loader::*;
pub use table::*;
