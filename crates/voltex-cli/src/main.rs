mod cli;
mod cli_utils;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Args, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides; warnings only by default
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("voltex=warn,voltex_core=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let songs = args.songs.as_deref();

    match args.command {
        Some(Command::List {
            group,
            tier,
            level,
            bosses,
            json,
        }) => commands::list::run(
            songs,
            &commands::list::Filter {
                group,
                tier_level: tier.zip(level),
                bosses,
            },
            json,
        ),
        Some(Command::Show { title }) => commands::show::run(songs, &title),
        Some(Command::Stats { json }) => commands::stats::run(songs, json),
        Some(Command::Validate { file }) => commands::validate::run(&file),
        Some(Command::Export { output, format }) => {
            commands::export::run(songs, output.as_deref(), format)
        }
        Some(Command::Build {
            navigators,
            data_dir,
            src,
            output,
            dev,
            release,
        }) => commands::build::run(&commands::build::BuildOptions {
            songs,
            navigators: navigators.as_deref(),
            data_dir: data_dir.as_deref(),
            src: src.as_deref(),
            output: output.as_deref(),
            dev,
            release,
        }),
        None => commands::list::run(songs, &commands::list::Filter::default(), false),
    }
}
