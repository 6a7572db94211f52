//! Writing world data files and packaging `.apworld` archives

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::{debug, info};
use zip::CompressionMethod;
use zip::write::{SimpleFileOptions, ZipWriter};

use crate::error::{Error, Result};
use crate::world::World;

pub const GAME_FILE: &str = "game.json";
pub const ITEMS_FILE: &str = "items.json";
pub const LOCATIONS_FILE: &str = "locations.json";
pub const CATEGORIES_FILE: &str = "categories.json";

/// Serialize to JSON, tab-indented when `pretty`. Non-ASCII text is kept as is.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(serde_json::to_string(value)?);
    }

    let mut buffer = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"\t"));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}

impl World {
    /// Write game, items, locations and categories JSON into `dir`.
    ///
    /// Dev worlds are tab-indented for diffing; release worlds are compact.
    pub fn write_data<P: AsRef<Path>>(&self, dir: P) -> Result<Vec<PathBuf>> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let pretty = self.config.dev;
        let files = [
            (GAME_FILE, to_json(&self.game_info, pretty)?),
            (ITEMS_FILE, to_json(&self.items, pretty)?),
            (LOCATIONS_FILE, to_json(&self.locations, pretty)?),
            (CATEGORIES_FILE, to_json(&self.categories, pretty)?),
        ];

        let mut written = Vec::with_capacity(files.len());
        for (name, content) in files {
            let path = dir.join(name);
            fs::write(&path, content)?;
            info!("Saved {}", path.display());
            written.push(path);
        }
        Ok(written)
    }

    /// Package `src_dir` as `<output folder>/<world file name>.apworld`
    pub fn package<P: AsRef<Path>>(&self, src_dir: P) -> Result<PathBuf> {
        package_apworld(
            src_dir,
            self.config.output_folder(),
            &self.world_file_name(),
        )
    }
}

/// Zip every file under `src_dir` into `<out_dir>/<world_name>.apworld`.
///
/// Entries are stored under a `<world_name>/` prefix with `/` separators,
/// in sorted path order.
pub fn package_apworld<P, Q>(src_dir: P, out_dir: Q, world_name: &str) -> Result<PathBuf>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let src_dir = src_dir.as_ref();
    let out_dir = out_dir.as_ref();

    if !src_dir.is_dir() {
        return Err(Error::InvalidConfig(format!(
            "world source directory {} does not exist",
            src_dir.display()
        )));
    }

    fs::create_dir_all(out_dir)?;
    let zip_path = out_dir.join(format!("{}.apworld", world_name));

    let mut files = Vec::new();
    collect_files(src_dir, &mut files)?;
    files.sort();

    let mut zip = ZipWriter::new(File::create(&zip_path)?);
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    // The archive may be written inside the source tree; never pack it into itself.
    let zip_canonical = fs::canonicalize(&zip_path)?;

    for file in files {
        if fs::canonicalize(&file)? == zip_canonical {
            continue;
        }

        let relative = file
            .strip_prefix(src_dir)
            .map_err(|e| Error::Archive(e.to_string()))?;
        let entry_name = archive_entry_name(world_name, relative);

        debug!("Adding {}", entry_name);
        zip.start_file(entry_name, options)?;
        io::copy(&mut File::open(&file)?, &mut zip)?;
    }

    zip.finish()?;
    info!("Saved apworld {}", zip_path.display());
    Ok(zip_path)
}

fn archive_entry_name(world_name: &str, relative: &Path) -> String {
    let mut name = world_name.to_string();
    for component in relative.components() {
        name.push('/');
        name.push_str(&component.as_os_str().to_string_lossy());
    }
    name
}

/// Symlinked directories are not descended into; symlinked files are packed.
fn collect_files(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let path = entry.path();
        if file_type.is_dir() {
            collect_files(&path, files)?;
        } else if file_type.is_symlink() && path.is_dir() {
            debug!("Skipping symlinked directory {}", path.display());
        } else {
            files.push(path);
        }
    }
    Ok(())
}
