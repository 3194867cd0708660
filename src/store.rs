//! Ordered name→xpath storage for one run and its frozen, serializable form

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;

use crate::collision::{DuplicateNameCounter, disambiguate_values};
use crate::naming::is_sentinel;
use crate::types::LocatorEntry;

/// Locators collected during one run, in DOM-encounter order
#[derive(Debug, Default)]
pub struct LocatorStore {
    entries: Vec<LocatorEntry>,
    names: HashSet<String>,
}

impl LocatorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Insert under a collision-free name and return the name actually used
    pub fn insert(
        &mut self,
        counter: &mut DuplicateNameCounter,
        name: &str,
        xpath: impl Into<String>,
    ) -> String {
        let unique = counter.unique_name(name, |candidate| self.names.contains(candidate));
        self.names.insert(unique.clone());
        self.entries.push(LocatorEntry::new(unique.clone(), xpath));
        unique
    }

    /// Drop sentinel entries, then disambiguate shared xpaths
    pub fn freeze(self) -> LocatorMap {
        let mut entries: Vec<LocatorEntry> = self
            .entries
            .into_iter()
            .filter(|entry| !is_sentinel(&entry.name))
            .collect();
        disambiguate_values(&mut entries);
        LocatorMap { entries }
    }
}

/// Final locator mapping of one page; serializes as an ordered `name: xpath` map
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocatorMap {
    entries: Vec<LocatorEntry>,
}

impl LocatorMap {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.xpath.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LocatorEntry> {
        self.entries.iter()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn into_entries(self) -> Vec<LocatorEntry> {
        self.entries
    }
}

impl FromIterator<LocatorEntry> for LocatorMap {
    fn from_iter<I: IntoIterator<Item = LocatorEntry>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl Serialize for LocatorMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.name, &entry.xpath)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for LocatorMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocatorMapVisitor)
    }
}

struct LocatorMapVisitor;

impl<'de> Visitor<'de> for LocatorMapVisitor {
    type Value = LocatorMap;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a mapping of locator names to xpath expressions")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some((name, xpath)) = access.next_entry::<String, String>()? {
            entries.push(LocatorEntry { name, xpath });
        }
        Ok(LocatorMap { entries })
    }

    // An empty YAML document parses as unit
    fn visit_unit<E: serde::de::Error>(self) -> Result<Self::Value, E> {
        Ok(LocatorMap::default())
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;
