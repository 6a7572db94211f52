//! Prelude module for convenient imports
//!
//! ```ignore
//! use voltex_core::prelude::*;
//! ```
//!
//! This brings the following into scope:
//!
//! - Song data: `Song`, `ChartLevels`, `Tier`, `SongTable`, `load_songs`
//! - World generation: `World`, `WorldConfig`, `Navigators`
//! - Error handling: `Error`, `Result`

// Song data
pub use crate::catalog::{SongTable, load_songs};
pub use crate::chart::{ChartLevels, Song, Tier};

// World generation
pub use crate::config::WorldConfig;
pub use crate::world::{Navigators, World};

// Error handling
pub use crate::error::{Error, Result};
