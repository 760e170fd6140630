//! Country filtering by search text and region.
//!
//! The filter works in one of two modes, chosen by [`FilterState::mode`]:
//!
//! - **World**: no region has ever been selected. Every country is listed and
//!   those whose name does not contain the search text are marked hidden.
//! - **Region-locked**: a region was selected. Only countries of exactly that
//!   region (and, if search text is present, whose name contains it) are
//!   listed at all.
//!
//! Once a region is selected the state never returns to world mode. There is
//! no operation that clears `selected_region`; the only way back is a fresh
//! `FilterState`, which the plugin creates only on load.
//!
//! Both modes are pure functions of the collection and the filter state, so
//! the listing is recomputed from scratch on every change.

use crate::domain::country::{fold_case, Country};

/// Search text plus the region selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Raw search text as typed, possibly empty.
    pub search_text: String,
    selected_region: Option<String>,
}

/// Which matching rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterMode<'a> {
    World,
    RegionLocked(&'a str),
}

/// One entry of a computed listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedCountry {
    /// Index into the country collection.
    pub index: usize,
    /// Present in the listing but not shown (world mode non-match).
    pub hidden: bool,
}

impl FilterState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects a region and enters region-locked mode for good.
    pub fn select_region(&mut self, region: impl Into<String>) {
        self.selected_region = Some(region.into());
    }

    #[must_use]
    pub fn selected_region(&self) -> Option<&str> {
        self.selected_region.as_deref()
    }

    #[must_use]
    pub fn mode(&self) -> FilterMode<'_> {
        self.selected_region
            .as_deref()
            .map_or(FilterMode::World, FilterMode::RegionLocked)
    }

    /// `needle_folded` is the search text after [`fold_case`].
    fn matches(&self, country: &Country, needle_folded: &str) -> bool {
        match self.mode() {
            FilterMode::World => country.name_contains(needle_folded),
            FilterMode::RegionLocked(region) => {
                country.region == region && country.name_contains(needle_folded)
            }
        }
    }
}

/// Computes the listing for `countries` under `filter`.
///
/// In world mode the result has one entry per country with `hidden` set on
/// non-matches. In region-locked mode only matching countries appear.
///
/// # Examples
///
/// ```
/// use country_browser::domain::{list_countries, Country, FilterState};
///
/// let countries = vec![
///     Country::new("", "Peru", 33_000_000, "Americas", Some("Lima")),
///     Country::new("", "France", 67_000_000, "Europe", Some("Paris")),
/// ];
/// let mut filter = FilterState::new();
/// filter.search_text = "per".into();
///
/// let listing = list_countries(&countries, &filter);
/// assert_eq!(listing.len(), 2);
/// assert!(!listing[0].hidden);
/// assert!(listing[1].hidden);
/// ```
#[must_use]
pub fn list_countries(countries: &[Country], filter: &FilterState) -> Vec<ListedCountry> {
    let _span = tracing::trace_span!("list_countries",
        total = countries.len(),
        mode = ?filter.mode()
    )
    .entered();

    let needle = fold_case(&filter.search_text);

    match filter.mode() {
        FilterMode::World => countries
            .iter()
            .enumerate()
            .map(|(index, country)| ListedCountry {
                index,
                hidden: !filter.matches(country, &needle),
            })
            .collect(),
        FilterMode::RegionLocked(_) => countries
            .iter()
            .enumerate()
            .filter(|(_, country)| filter.matches(country, &needle))
            .map(|(index, _)| ListedCountry { index, hidden: false })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_countries<'a>(countries: &'a [Country], filter: &FilterState) -> Vec<&'a Country> {
        list_countries(countries, filter)
            .into_iter()
            .filter(|entry| !entry.hidden)
            .map(|entry| &countries[entry.index])
            .collect()
    }

    fn sample() -> Vec<Country> {
        vec![
            Country::new("pe.svg", "Peru", 33_000_000, "Americas", Some("Lima")),
            Country::new("fr.svg", "France", 67_000_000, "Europe", Some("Paris")),
        ]
    }

    fn names(countries: &[&Country]) -> Vec<String> {
        countries.iter().map(|c| c.name.clone()).collect()
    }

    #[test]
    fn world_search_matches_name_substring() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.search_text = "per".to_string();

        assert_eq!(names(&visible_countries(&countries, &filter)), ["Peru"]);
    }

    #[test]
    fn world_search_ignores_case() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.search_text = "FRAN".to_string();

        assert_eq!(names(&visible_countries(&countries, &filter)), ["France"]);
    }

    #[test]
    fn empty_search_shows_everything() {
        let countries = sample();
        let filter = FilterState::new();

        assert_eq!(names(&visible_countries(&countries, &filter)), ["Peru", "France"]);
    }

    #[test]
    fn world_search_does_not_consider_region() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.search_text = "europe".to_string();

        assert!(visible_countries(&countries, &filter).is_empty());
    }

    #[test]
    fn world_mode_hides_rather_than_drops() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.search_text = "zzz".to_string();

        let listing = list_countries(&countries, &filter);

        assert_eq!(listing.len(), countries.len());
        assert!(listing.iter().all(|entry| entry.hidden));
    }

    #[test]
    fn region_only_selects_exact_region() {
        let mut countries = sample();
        countries.push(Country::new("x.svg", "Eurovia", 1, "Europe East", None));
        let mut filter = FilterState::new();
        filter.select_region("Europe");

        assert_eq!(names(&visible_countries(&countries, &filter)), ["France"]);
    }

    #[test]
    fn region_mode_drops_non_matches() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.select_region("Europe");

        let listing = list_countries(&countries, &filter);

        assert_eq!(listing, vec![ListedCountry { index: 1, hidden: false }]);
    }

    #[test]
    fn region_then_search_intersects() {
        let countries = sample();
        let mut filter = FilterState::new();
        filter.select_region("Europe");
        filter.search_text = "per".to_string();

        assert!(visible_countries(&countries, &filter).is_empty());

        filter.search_text = "fr".to_string();
        assert_eq!(names(&visible_countries(&countries, &filter)), ["France"]);
    }

    #[test]
    fn combined_equals_intersection_of_rules() {
        let countries = vec![
            Country::new("", "Peru", 1, "Americas", None),
            Country::new("", "Paraguay", 1, "Americas", None),
            Country::new("", "Portugal", 1, "Europe", None),
            Country::new("", "Spain", 1, "Europe", None),
        ];
        let mut filter = FilterState::new();
        filter.select_region("Americas");
        filter.search_text = "p".to_string();

        let combined = names(&visible_countries(&countries, &filter));

        let by_region: Vec<String> = countries
            .iter()
            .filter(|c| c.region == "Americas")
            .map(|c| c.name.clone())
            .collect();
        let by_name: Vec<String> = countries
            .iter()
            .filter(|c| c.name.to_lowercase().contains('p'))
            .map(|c| c.name.clone())
            .collect();
        let expected: Vec<String> = by_region.into_iter().filter(|n| by_name.contains(n)).collect();

        assert_eq!(combined, expected);
    }

    #[test]
    fn region_selection_is_one_way() {
        let mut filter = FilterState::new();
        assert_eq!(filter.mode(), FilterMode::World);

        filter.select_region("Asia");
        filter.search_text.clear();
        assert_eq!(filter.mode(), FilterMode::RegionLocked("Asia"));

        filter.select_region("Africa");
        assert_eq!(filter.selected_region(), Some("Africa"));
    }

    #[test]
    fn empty_region_country_is_listed_but_not_a_region() {
        let mut countries = sample();
        countries.push(Country::new("", "Nowhere", 0, "", None));
        let mut filter = FilterState::new();

        assert_eq!(names(&visible_countries(&countries, &filter)), ["Peru", "France", "Nowhere"]);

        filter.search_text = "nowh".to_string();
        assert_eq!(names(&visible_countries(&countries, &filter)), ["Nowhere"]);

        let regions = crate::domain::RegionSet::from_countries(&countries);
        assert_eq!(regions.iter().collect::<Vec<_>>(), ["Americas", "Europe"]);
    }

    #[test]
    fn dotted_capital_i_matches_its_folded_form() {
        let countries = vec![Country::new("", "İzmiria", 1, "Asia", None)];
        let mut filter = FilterState::new();
        filter.search_text = "i\u{307}zm".to_string();

        assert_eq!(names(&visible_countries(&countries, &filter)), ["İzmiria"]);
    }
}
