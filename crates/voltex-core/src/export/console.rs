//! Console output formatting with colored display

use std::fmt::Write as _;

use owo_colors::OwoColorize;

use crate::chart::{Song, Tier};

/// Format a song for console display with colored tier labels
///
/// Returns a multi-line string with a boxed format.
pub fn format_song_console(song: &Song) -> String {
    let mut output = String::new();

    let title_content = format!("  {} / {}", song.title.bold(), song.artist);

    // Approximate width; ANSI codes are not counted
    let content_width = song.title.chars().count() + song.artist.chars().count() + 5;
    let border_width = content_width.max(40);
    let border: String = "━".repeat(border_width);
    let border_dim = border.dimmed();

    let groups = if song.groups.is_empty() {
        "-".dimmed().to_string()
    } else {
        song.groups.join(", ")
    };

    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "{}", title_content);
    let _ = writeln!(output, "{}", border_dim);
    let _ = writeln!(output, "  GROUPS : {}", groups);
    for (tier, level) in song.charts.iter() {
        let _ = writeln!(
            output,
            "  {}    : Lv.{}",
            format_colored_tier(tier),
            format_level(level)
        );
    }
    if song.is_boss() {
        let _ = writeln!(output, "  {}", "BOSS".red().bold());
    }
    let _ = write!(output, "{}", border_dim);

    output
}

/// Format tier label with its in-game color
pub fn format_colored_tier(tier: Tier) -> String {
    let (r, g, b) = tier.color();
    tier.short_name().truecolor(r, g, b).to_string()
}

fn format_level(level: u8) -> String {
    if level >= crate::config::chart::BOSS_LEVEL {
        level.red().bold().to_string()
    } else {
        level.to_string()
    }
}

/// Single-line summary: "Title / Artist [NOV 3 | ADV 7 | EXH 12]"
pub fn format_song_summary(song: &Song) -> String {
    let charts = song
        .charts
        .iter()
        .map(|(tier, level)| format!("{} {}", tier, level))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("{} / {} [{}]", song.title, song.artist, charts)
}
