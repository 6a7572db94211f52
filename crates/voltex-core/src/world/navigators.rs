use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Error, Result};

/// Navigator name -> titles of the songs that navigator rescues.
///
/// File format: `{ "<navigator>": ["<song title>", ...], ... }`.
/// Navigators are kept sorted by name so generated worlds are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Navigators {
    entries: BTreeMap<String, Vec<String>>,
}

impl Navigators {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let navigators = Self::parse(&content).map_err(|e| match e {
            Error::InvalidConfig(message) => {
                Error::InvalidConfig(format!("{}: {}", path.display(), message))
            }
            other => other,
        })?;
        info!(
            "Loaded {} navigators from {}",
            navigators.len(),
            path.display()
        );
        Ok(navigators)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let navigators: Self = serde_json::from_str(content)
            .map_err(|e| Error::InvalidConfig(format!("invalid navigators file: {}", e)))?;

        if let Some(name) = navigators.entries.keys().find(|name| name.trim().is_empty()) {
            return Err(Error::InvalidConfig(format!(
                "navigator name {:?} is empty",
                name
            )));
        }
        Ok(navigators)
    }

    pub fn insert<I, S>(&mut self, navigator: impl Into<String>, titles: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .insert(navigator.into(), titles.into_iter().map(Into::into).collect());
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(name, titles)| (name.as_str(), titles.as_slice()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Navigators that list a song with exactly this title
    pub fn for_title(&self, title: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, titles)| titles.iter().any(|t| t == title))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
