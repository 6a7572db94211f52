//! Archipelago Manual world generation.
//!
//! Turns the song table into the Manual data files and packages them:
//! - `World` - items, locations, categories and game info for a song list
//! - `Navigators` - navigator to song title mapping
//! - `package_apworld` - `.apworld` zip packaging

mod builder;
mod navigators;
mod output;
mod types;

pub use builder::*;
pub use navigators::*;
pub use output::*;
pub use types::*;
