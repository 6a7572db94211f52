//! Build command: generate Manual world data and package the apworld.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::warn;
use voltex_core::{Navigators, World, WorldConfig};

use crate::cli_utils;

pub struct BuildOptions<'a> {
    pub songs: Option<&'a str>,
    pub navigators: Option<&'a str>,
    pub data_dir: Option<&'a str>,
    pub src: Option<&'a str>,
    pub output: Option<&'a str>,
    pub dev: bool,
    pub release: bool,
}

impl BuildOptions<'_> {
    /// Data files land inside the packaged tree unless `--data-dir` says otherwise
    pub fn data_dir(&self) -> PathBuf {
        match (self.data_dir, self.src) {
            (Some(dir), _) => PathBuf::from(dir),
            (None, Some(src)) => Path::new(src).join("data"),
            (None, None) => PathBuf::from("data"),
        }
    }
}

/// Build the world configuration from the environment and flags
pub fn world_config(options: &BuildOptions<'_>) -> WorldConfig {
    let mut config = WorldConfig::from_env();
    if options.dev {
        config = config.with_dev(true);
    } else if options.release {
        config = config.with_dev(false);
    }
    if let Some(output) = options.output {
        config = config.with_output_folder(output);
    }
    config
}

pub fn run(options: &BuildOptions<'_>) -> Result<()> {
    let config = world_config(options);

    if config.dev {
        warn!("Building a development world suffixed with '_dev'");
        warn!("Pass --release or set DEV=false to generate without the _dev suffix");
    }

    let table = cli_utils::load_table(options.songs)?;
    let navigators = match options.navigators {
        Some(path) => Navigators::load(path)?,
        None => Navigators::new(),
    };

    let world = World::build(table.as_slice(), &navigators, &config)?;

    eprintln!("Game: {}", world.game_info.game);
    eprintln!("Creator: {}", world.game_info.creator);
    eprintln!("Generated {} items", world.item_count());
    eprintln!("Generated {} locations", world.locations.len());
    eprintln!("Configured {} categories", world.categories.len());

    let written = world.write_data(options.data_dir())?;
    for path in &written {
        eprintln!("Saved {}", path.display());
    }

    if let Some(src) = options.src {
        let zip_path = world.package(Path::new(src))?;
        eprintln!("World path: {}", zip_path.display());
    }

    eprintln!("Done!");
    Ok(())
}
