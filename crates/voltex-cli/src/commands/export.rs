//! Export command for the song list.

use anyhow::Result;
use voltex_core::{ExportFormat, generate_song_list};

use crate::cli_utils;

pub fn run(songs: Option<&str>, output: Option<&str>, format: ExportFormat) -> Result<()> {
    let table = cli_utils::load_table(songs)?;
    let content = generate_song_list(&table, format)?;

    cli_utils::write_output(output, &content)
}
