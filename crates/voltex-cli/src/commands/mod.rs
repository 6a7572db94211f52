//! CLI command implementations.
//!
//! This module contains the implementation of each CLI command.

pub mod build;
pub mod export;
pub mod list;
pub mod show;
pub mod stats;
pub mod validate;
