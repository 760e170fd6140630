//! Insertion-ordered set of region names.

use crate::domain::Country;
use std::collections::HashSet;

/// Distinct, non-empty region names in order of first appearance.
///
/// Backed by a `Vec` for display order plus a `HashSet` for membership, so
/// inserting a duplicate is a no-op and iteration order never changes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionSet {
    ordered: Vec<String>,
    seen: HashSet<String>,
}

impl RegionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from a country collection, skipping empty regions.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_browser::domain::{Country, RegionSet};
    ///
    /// let countries = vec![
    ///     Country::new("", "Peru", 1, "Americas", None),
    ///     Country::new("", "France", 1, "Europe", None),
    ///     Country::new("", "Chile", 1, "Americas", None),
    /// ];
    /// let regions = RegionSet::from_countries(&countries);
    /// assert_eq!(regions.iter().collect::<Vec<_>>(), ["Americas", "Europe"]);
    /// ```
    #[must_use]
    pub fn from_countries(countries: &[Country]) -> Self {
        let mut set = Self::new();
        for country in countries {
            set.insert(&country.region);
        }
        set
    }

    /// Inserts a region, returning `true` if it was not yet present.
    ///
    /// Empty names are rejected.
    pub fn insert(&mut self, region: &str) -> bool {
        if region.is_empty() || self.seen.contains(region) {
            return false;
        }
        self.seen.insert(region.to_string());
        self.ordered.push(region.to_string());
        true
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&str> {
        self.ordered.get(index).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.ordered.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ordered.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ordered.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn country(name: &str, region: &str) -> Country {
        Country::new("", name, 0, region, None)
    }

    #[test]
    fn keeps_first_occurrence_order() {
        let countries = vec![
            country("Japan", "Asia"),
            country("Peru", "Americas"),
            country("India", "Asia"),
            country("France", "Europe"),
            country("Chile", "Americas"),
        ];

        let regions = RegionSet::from_countries(&countries);

        assert_eq!(regions.iter().collect::<Vec<_>>(), ["Asia", "Americas", "Europe"]);
        assert_eq!(regions.len(), 3);
    }

    #[test]
    fn skips_empty_regions() {
        let countries = vec![country("Nowhere", ""), country("Peru", "Americas")];

        let regions = RegionSet::from_countries(&countries);

        assert_eq!(regions.iter().collect::<Vec<_>>(), ["Americas"]);
        assert!(regions.iter().all(|region| !region.is_empty()));
    }

    #[test]
    fn duplicate_insert_is_rejected() {
        let mut regions = RegionSet::new();

        assert!(regions.insert("Europe"));
        assert!(!regions.insert("Europe"));
        assert_eq!(regions.get(0), Some("Europe"));
        assert_eq!(regions.get(1), None);
    }
}
