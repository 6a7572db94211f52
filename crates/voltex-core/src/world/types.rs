//! Manual world data files: items, locations, categories and game info.
//!
//! Optional fields are left out of the JSON entirely when unset, which is
//! what the Manual loader expects for "not required" keys.

use std::collections::{BTreeMap, HashMap};

use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<BTreeMap<String, u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progression_skip_balancing: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub useful: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trap: Option<bool>,
}

impl Item {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn category<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn value(mut self, key: impl Into<String>, amount: u32) -> Self {
        self.value
            .get_or_insert_with(BTreeMap::new)
            .insert(key.into(), amount);
        self
    }

    pub fn progression(mut self) -> Self {
        self.progression = Some(true);
        self
    }

    pub fn useful(mut self) -> Self {
        self.useful = Some(true);
        self
    }

    pub fn trap(mut self) -> Self {
        self.trap = Some(true);
        self
    }

    /// Copies of this item in the pool (1 when unset)
    pub fn copies(&self) -> u32 {
        self.count.unwrap_or(1)
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|c| c.iter().any(|name| name == category))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requires: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_item: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_item_category: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub victory: Option<bool>,
}

impl Location {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn category<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.category = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn requires(mut self, requires: impl Into<String>) -> Self {
        self.requires = Some(requires.into());
        self
    }

    pub fn place_item(mut self, item: impl Into<String>) -> Self {
        self.place_item.get_or_insert_with(Vec::new).push(item.into());
        self
    }

    pub fn victory(mut self) -> Self {
        self.victory = Some(true);
        self
    }

    pub fn has_category(&self, category: &str) -> bool {
        self.category
            .as_ref()
            .is_some_and(|c| c.iter().any(|name| name == category))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub yaml_option: Option<Vec<String>>,
}

impl Category {
    pub fn hidden() -> Self {
        Self {
            hidden: Some(true),
            yaml_option: None,
        }
    }
}

/// Category table that keeps insertion order.
///
/// Inserting an existing name replaces its value but keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Categories {
    entries: Vec<(String, Category)>,
    index: HashMap<String, usize>,
}

impl Categories {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a category, returning the previous value
    pub fn insert(&mut self, name: impl Into<String>, category: Category) -> Option<Category> {
        let name = name.into();
        if let Some(&position) = self.index.get(&name) {
            return Some(std::mem::replace(&mut self.entries[position].1, category));
        }
        self.index.insert(name.clone(), self.entries.len());
        self.entries.push((name, category));
        None
    }

    pub fn get(&self, name: &str) -> Option<&Category> {
        self.index.get(name).map(|&position| &self.entries[position].1)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Category)> {
        self.entries.iter().map(|(name, category)| (name.as_str(), category))
    }
}

impl Serialize for Categories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.entries.iter().map(|(name, category)| (name, category)))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartingItems {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub item_categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameInfo {
    pub game: String,
    pub creator: String,
    pub filler_item_name: String,
    pub death_link: bool,
    pub starting_items: Vec<StartingItems>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_omits_unset_fields() {
        let item = Item::new("CHAIN")
            .category(["CHAIN"])
            .progression()
            .count(20)
            .value("chain", 1);

        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"name":"CHAIN","category":["CHAIN"],"count":20,"value":{"chain":1},"progression":true}"#
        );
        assert_eq!(item.copies(), 20);
        assert_eq!(Item::new("Filler").copies(), 1);
    }

    #[test]
    fn test_location_serialization() {
        let location = Location::new("PERFECT ULTIMATE CHAIN")
            .requires("|@Boss Clear|")
            .victory()
            .category(["((Victory))"]);

        assert_eq!(
            serde_json::to_string(&location).unwrap(),
            r#"{"name":"PERFECT ULTIMATE CHAIN","category":["((Victory))"],"requires":"|@Boss Clear|","victory":true}"#
        );
        assert!(location.has_category("((Victory))"));
    }

    #[test]
    fn test_categories_keep_insertion_order() {
        let mut categories = Categories::new();
        categories.insert("Goals", Category::hidden());
        categories.insert("Zeta", Category::hidden());
        categories.insert("Alpha", Category::default());

        assert_eq!(
            serde_json::to_string(&categories).unwrap(),
            r#"{"Goals":{"hidden":true},"Zeta":{"hidden":true},"Alpha":{}}"#
        );
    }

    #[test]
    fn test_categories_replace_in_place() {
        let mut categories = Categories::new();
        categories.insert("A", Category::default());
        categories.insert("B", Category::default());

        let previous = categories.insert("A", Category::hidden());

        assert_eq!(previous, Some(Category::default()));
        assert_eq!(categories.len(), 2);
        assert_eq!(categories.get("A"), Some(&Category::hidden()));
        let names: Vec<&str> = categories.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["A", "B"]);
    }
}
