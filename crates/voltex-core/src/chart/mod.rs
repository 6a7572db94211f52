//! Chart-related types and data structures.
//!
//! This module contains types for representing songs and their charts:
//! - `Tier` - difficulty tiers (NOV, ADV, EXH, MXM, GRV, XCD, HVN, INF, VVD)
//! - `ChartLevels` - per-tier levels of one song
//! - `Song` - song metadata

mod levels;
mod song;
mod tier;

pub use levels::*;
pub use song::*;
pub use tier::*;
