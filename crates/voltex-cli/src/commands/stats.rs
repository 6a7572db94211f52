//! Stats command: song, group and level statistics.

use std::collections::BTreeMap;

use anyhow::Result;
use owo_colors::OwoColorize;
use serde_json::json;
use voltex_core::Tier;
use voltex_core::export::format_colored_tier;

use crate::cli_utils;

pub fn run(songs: Option<&str>, json: bool) -> Result<()> {
    let table = cli_utils::load_table(songs)?;
    let groups = table.groups();
    let histograms: BTreeMap<Tier, BTreeMap<u8, usize>> = Tier::all()
        .map(|tier| (tier, table.level_histogram(tier)))
        .collect();
    let bosses = table.bosses().count();
    let duplicates = table.duplicate_identifiers();

    if json {
        let levels: serde_json::Map<String, serde_json::Value> = histograms
            .iter()
            .map(|(tier, histogram)| {
                let by_level: serde_json::Map<String, serde_json::Value> = histogram
                    .iter()
                    .map(|(level, count)| (level.to_string(), json!(count)))
                    .collect();
                (tier.short_name().to_string(), serde_json::Value::Object(by_level))
            })
            .collect();

        let output = json!({
            "songs": table.len(),
            "bosses": bosses,
            "groups": groups,
            "levels": levels,
            "duplicate_identifiers": duplicates.iter().map(|(id, _)| id).collect::<Vec<_>>(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{} songs ({} boss)", table.len().bold(), bosses);

    println!();
    println!("{}", "Groups".bold());
    for (group, count) in &groups {
        println!("  {:>4}  {}", count, group);
    }

    println!();
    println!("{}", "Levels".bold());
    for (tier, histogram) in &histograms {
        if histogram.is_empty() {
            continue;
        }
        let levels = histogram
            .iter()
            .map(|(level, count)| format!("{}:{}", level, count))
            .collect::<Vec<_>>()
            .join(" ");
        println!("  {}  {}", format_colored_tier(*tier), levels);
    }

    for (identifier, indices) in &duplicates {
        eprintln!(
            "{} duplicate identifier {:?} at {:?}",
            "warning:".yellow(),
            identifier,
            indices
        );
    }

    Ok(())
}
