//! Name and value collision resolution

use std::collections::HashMap;

use crate::types::LocatorEntry;

/// Per-run counter of numeric suffixes handed out for each base name
#[derive(Debug, Default)]
pub struct DuplicateNameCounter {
    counts: HashMap<String, usize>,
}

impl DuplicateNameCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `base` if it is free, otherwise `base2`, `base3`, ... skipping taken names.
    ///
    /// The counter for a base name keeps running for the whole run, so a third
    /// `submitButton` becomes `submitButton3` even if `submitButton2` was
    /// inserted long before.
    pub fn unique_name(&mut self, base: &str, is_taken: impl Fn(&str) -> bool) -> String {
        if !is_taken(base) {
            return base.to_string();
        }
        let count = self.counts.entry(base.to_string()).or_insert(1);
        loop {
            *count += 1;
            let candidate = format!("{}{}", base, count);
            if !is_taken(&candidate) {
                return candidate;
            }
        }
    }
}

/// Rewrite every xpath shared by several entries as `(<xpath>)[k]`, `k` counting from 1
/// in stored order. Returns the number of rewritten entries.
pub fn disambiguate_values(entries: &mut [LocatorEntry]) -> usize {
    let mut totals: HashMap<String, usize> = HashMap::new();
    for entry in entries.iter() {
        *totals.entry(entry.xpath.clone()).or_default() += 1;
    }

    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut rewritten = 0;
    for entry in entries.iter_mut() {
        if totals.get(&entry.xpath).copied().unwrap_or(0) < 2 {
            continue;
        }
        let occurrence = seen.entry(entry.xpath.clone()).or_default();
        *occurrence += 1;
        entry.xpath = format!("({})[{}]", entry.xpath, occurrence);
        rewritten += 1;
    }
    rewritten
}

#[cfg(test)]
#[path = "collision_test.rs"]
mod collision_test;
