//! Country domain model and decoding of the public countries payload.
//!
//! The REST Countries API returns a JSON array of deeply nested objects. Only
//! a handful of fields matter here, so the payload is decoded into private
//! wire structs and flattened into [`Country`] right away. Absent capitals are
//! replaced by [`NO_CAPITAL`] during decoding, never at display time.

use crate::domain::error::FetchError;
use serde::{Deserialize, Serialize};

/// Placeholder shown for countries without a capital.
pub const NO_CAPITAL: &str = "No capital";

/// A single country as displayed by the browser.
///
/// Immutable for the session once decoded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    /// URL of the SVG flag image.
    pub flag_url: String,
    /// Common (short) English name, e.g. `"Peru"`.
    pub name: String,
    pub population: u64,
    /// Coarse region such as `"Europe"`. May be empty.
    pub region: String,
    /// Capital city, or [`NO_CAPITAL`].
    pub capital: String,
}

impl Country {
    /// Creates a country, substituting [`NO_CAPITAL`] when `capital` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use country_browser::domain::{Country, NO_CAPITAL};
    ///
    /// let c = Country::new("https://flagcdn.com/aq.svg", "Antarctica", 1000, "Antarctic", None);
    /// assert_eq!(c.capital, NO_CAPITAL);
    /// ```
    #[must_use]
    pub fn new(
        flag_url: impl Into<String>,
        name: impl Into<String>,
        population: u64,
        region: impl Into<String>,
        capital: Option<&str>,
    ) -> Self {
        Self {
            flag_url: flag_url.into(),
            name: name.into(),
            population,
            region: region.into(),
            capital: capital.map_or_else(|| NO_CAPITAL.to_string(), String::from),
        }
    }

    /// Returns `true` if the case-folded name contains `needle_folded`.
    ///
    /// `needle_folded` must already have gone through [`fold_case`]; the
    /// caller does that once per filter pass rather than once per country.
    #[must_use]
    pub fn name_contains(&self, needle_folded: &str) -> bool {
        needle_folded.is_empty() || fold_case(&self.name).contains(needle_folded)
    }
}

/// Lower-cases `text` one char at a time, keeping every char of multi-char
/// mappings (`İ` folds to `i` plus a combining dot).
///
/// Name matching and match highlighting both go through this so they never
/// disagree.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

#[derive(Debug, Deserialize)]
struct WireCountry {
    #[serde(default)]
    flags: WireFlags,
    name: WireName,
    #[serde(default)]
    population: u64,
    #[serde(default)]
    region: Option<String>,
    #[serde(default)]
    capital: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct WireFlags {
    #[serde(default)]
    svg: String,
}

#[derive(Debug, Deserialize)]
struct WireName {
    common: String,
}

impl From<WireCountry> for Country {
    fn from(wire: WireCountry) -> Self {
        let capital = wire
            .capital
            .filter(|capitals| !capitals.is_empty())
            .map_or_else(|| NO_CAPITAL.to_string(), |capitals| capitals.join(","));

        Self {
            flag_url: wire.flags.svg,
            name: wire.name.common,
            population: wire.population,
            region: wire.region.unwrap_or_default(),
            capital,
        }
    }
}

/// Decodes the countries endpoint body into the session's country collection.
///
/// Order is preserved exactly as the API returned it.
///
/// # Errors
///
/// Returns [`FetchError::Malformed`] if the body is not a JSON array of
/// objects carrying at least `name.common`.
pub fn decode_countries(body: &[u8]) -> Result<Vec<Country>, FetchError> {
    let wire: Vec<WireCountry> =
        serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))?;

    Ok(wire.into_iter().map(Country::from).collect())
}
