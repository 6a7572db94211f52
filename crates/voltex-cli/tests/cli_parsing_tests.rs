//! CLI argument parsing tests.
//!
//! These tests verify that command-line arguments are parsed correctly
//! without running the commands.

use clap::Parser;
use voltex_core::{ExportFormat, Tier};

#[path = "../src/cli.rs"]
#[allow(dead_code)]
mod cli;

use cli::{Args, Command};

#[test]
fn test_parse_no_args() {
    let args = Args::try_parse_from(["voltex"]).unwrap();
    assert!(args.command.is_none());
}

#[test]
fn test_parse_global_songs_file() {
    let args = Args::try_parse_from(["voltex", "stats", "--songs", "my-songs.json"]).unwrap();
    assert_eq!(args.songs, Some("my-songs.json".to_string()));
    assert!(matches!(args.command, Some(Command::Stats { json: false })));
}

#[test]
fn test_parse_list_filters() {
    let args = Args::try_parse_from([
        "voltex", "list", "--group", "FLOOR", "--tier", "mxm", "--level", "19", "--bosses",
    ])
    .unwrap();
    match args.command {
        Some(Command::List {
            group,
            tier,
            level,
            bosses,
            json,
        }) => {
            assert_eq!(group, Some("FLOOR".to_string()));
            assert_eq!(tier, Some(Tier::Mxm));
            assert_eq!(level, Some(19));
            assert!(bosses);
            assert!(!json);
        }
        _ => panic!("Expected List command"),
    }
}

#[test]
fn test_parse_list_tier_requires_level() {
    assert!(Args::try_parse_from(["voltex", "list", "--tier", "EXH"]).is_err());
    assert!(Args::try_parse_from(["voltex", "list", "--level", "12"]).is_err());
}

#[test]
fn test_parse_list_unknown_tier() {
    let result = Args::try_parse_from(["voltex", "list", "--tier", "SPA", "--level", "12"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_show() {
    let args = Args::try_parse_from(["voltex", "show", "Black Lotus"]).unwrap();
    match args.command {
        Some(Command::Show { title }) => assert_eq!(title, "Black Lotus"),
        _ => panic!("Expected Show command"),
    }
}

#[test]
fn test_parse_validate_requires_file() {
    assert!(Args::try_parse_from(["voltex", "validate"]).is_err());

    let args = Args::try_parse_from(["voltex", "validate", "songs.json"]).unwrap();
    assert!(matches!(args.command, Some(Command::Validate { file }) if file == "songs.json"));
}

#[test]
fn test_parse_export_default_format() {
    let args = Args::try_parse_from(["voltex", "export"]).unwrap();
    match args.command {
        Some(Command::Export { format, output }) => {
            assert!(output.is_none());
            assert_eq!(format, ExportFormat::Tsv);
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_export_json_format() {
    let args = Args::try_parse_from(["voltex", "export", "-f", "json", "-o", "songs.json"]).unwrap();
    match args.command {
        Some(Command::Export { format, output }) => {
            assert_eq!(format, ExportFormat::Json);
            assert_eq!(output, Some("songs.json".to_string()));
        }
        _ => panic!("Expected Export command"),
    }
}

#[test]
fn test_parse_build_defaults() {
    let args = Args::try_parse_from(["voltex", "build"]).unwrap();
    match args.command {
        Some(Command::Build {
            navigators,
            data_dir,
            src,
            dev,
            release,
            ..
        }) => {
            assert!(navigators.is_none());
            assert!(data_dir.is_none());
            assert!(src.is_none());
            assert!(!dev);
            assert!(!release);
        }
        _ => panic!("Expected Build command"),
    }
}

#[test]
fn test_parse_build_release() {
    let args = Args::try_parse_from([
        "voltex",
        "build",
        "--navigators",
        "navigators.json",
        "--src",
        "src",
        "-o",
        "dist",
        "--release",
    ])
    .unwrap();
    match args.command {
        Some(Command::Build {
            navigators,
            src,
            output,
            release,
            ..
        }) => {
            assert_eq!(navigators, Some("navigators.json".to_string()));
            assert_eq!(src, Some("src".to_string()));
            assert_eq!(output, Some("dist".to_string()));
            assert!(release);
        }
        _ => panic!("Expected Build command"),
    }
}

#[test]
fn test_parse_build_dev() {
    let args = Args::try_parse_from(["voltex", "build", "--dev", "--data-dir", "out/data"]).unwrap();
    match args.command {
        Some(Command::Build {
            data_dir,
            dev,
            release,
            ..
        }) => {
            assert_eq!(data_dir, Some("out/data".to_string()));
            assert!(dev);
            assert!(!release);
        }
        _ => panic!("Expected Build command"),
    }
}

#[test]
fn test_parse_build_dev_conflicts_with_release() {
    let result = Args::try_parse_from(["voltex", "build", "--dev", "--release"]);
    assert!(result.is_err());
}

#[test]
fn test_parse_export_unknown_format() {
    let result = Args::try_parse_from(["voltex", "export", "-f", "csv"]);
    assert!(result.is_err());
}

#[test]
fn test_invalid_command_fails() {
    let result = Args::try_parse_from(["voltex", "invalid-command"]);
    assert!(result.is_err());
}
