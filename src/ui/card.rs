//! The single country row builder.
//!
//! Every listing path (world search, region selection, combined filter) goes
//! through [`render_country`], so a country always renders the same way no
//! matter how it was reached.

use crate::domain::Country;

/// Display strings for one country, before any width fitting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    pub name: String,
    pub population: String,
    pub region: String,
    pub capital: String,
    pub flag_url: String,
}

/// Builds the display row for `country`.
///
/// Pure: no theme, no terminal width. The capital placeholder is already in
/// the record, so absent capitals come out as `"No capital"` here too.
///
/// # Examples
///
/// ```
/// use country_browser::domain::Country;
/// use country_browser::ui::render_country;
///
/// let row = render_country(&Country::new("aq.svg", "Antarctica", 1000, "Antarctic", None));
/// assert_eq!(row.capital, "No capital");
/// assert_eq!(row.population, "1000");
/// ```
#[must_use]
pub fn render_country(country: &Country) -> CountryRow {
    CountryRow {
        name: country.name.clone(),
        population: country.population.to_string(),
        region: country.region.clone(),
        capital: country.capital.clone(),
        flag_url: country.flag_url.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_carries_every_field() {
        let peru = Country::new("https://flagcdn.com/pe.svg", "Peru", 33_000_000, "Americas", Some("Lima"));

        let row = render_country(&peru);

        assert_eq!(
            row,
            CountryRow {
                name: "Peru".to_string(),
                population: "33000000".to_string(),
                region: "Americas".to_string(),
                capital: "Lima".to_string(),
                flag_url: "https://flagcdn.com/pe.svg".to_string(),
            }
        );
    }

    #[test]
    fn missing_capital_renders_placeholder() {
        let row = render_country(&Country::new("", "Bouvet Island", 0, "Antarctic", None));

        assert_eq!(row.capital, "No capital");
        assert!(!row.capital.is_empty());
    }
}
