//! Domain layer for the country browser.
//!
//! Holds the country model, region set, filtering rules and error types,
//! independent of Zellij APIs so everything here is unit-testable without a
//! running host.
//!
//! # Organization
//!
//! - [`country`]: Country record and payload decoding
//! - [`region`]: Insertion-ordered region set
//! - [`filter`]: Search/region filtering
//! - [`error`]: Error types and result alias

pub mod country;
pub mod error;
pub mod filter;
pub mod region;

pub use country::{decode_countries, fold_case, Country, NO_CAPITAL};
pub use error::{CountryBrowserError, FetchError, Result};
pub use filter::{list_countries, FilterMode, FilterState, ListedCountry};
pub use region::RegionSet;
