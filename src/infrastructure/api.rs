//! REST Countries endpoint contract.
//!
//! The plugin issues exactly one `GET` to the endpoint after permissions are
//! granted. Zellij delivers the answer as a `WebRequestResult` event carrying
//! the status, headers, body and the context map the request was tagged with.
//! [`interpret_response`] turns that into the dataset or a [`FetchError`].

use crate::domain::{decode_countries, Country, FetchError};
use std::collections::BTreeMap;

/// Default dataset endpoint.
///
/// The public API rejects `/v3.1/all` without a field list, so only the
/// fields the browser reads are requested.
pub const DEFAULT_ENDPOINT: &str =
    "https://restcountries.com/v3.1/all?fields=flags,name,population,region,capital";

/// Context key used to recognise our own web request results.
pub const REQUEST_CONTEXT_KEY: &str = "country_browser_request";

/// Context value for the dataset request.
pub const COUNTRIES_REQUEST: &str = "countries";

/// Builds the context map attached to the dataset request.
#[must_use]
pub fn countries_request_context() -> BTreeMap<String, String> {
    let mut context = BTreeMap::new();
    context.insert(REQUEST_CONTEXT_KEY.to_string(), COUNTRIES_REQUEST.to_string());
    context
}

/// Returns `true` if a web request result belongs to the dataset request.
#[must_use]
pub fn is_countries_response(context: &BTreeMap<String, String>) -> bool {
    context
        .get(REQUEST_CONTEXT_KEY)
        .is_some_and(|value| value == COUNTRIES_REQUEST)
}

/// Turns a raw HTTP answer into the country collection.
///
/// # Errors
///
/// - [`FetchError::Status`] for any status outside `200..300`
/// - [`FetchError::Malformed`] if the body is not a countries array
///
/// # Examples
///
/// ```
/// use country_browser::domain::FetchError;
/// use country_browser::infrastructure::api::interpret_response;
///
/// assert_eq!(interpret_response(502, b"").unwrap_err(), FetchError::Status(502));
/// assert!(interpret_response(200, b"[]").unwrap().is_empty());
/// ```
pub fn interpret_response(status: u16, body: &[u8]) -> Result<Vec<Country>, FetchError> {
    if !(200..300).contains(&status) {
        return Err(FetchError::Status(status));
    }

    let countries = decode_countries(body)?;
    tracing::debug!(count = countries.len(), "decoded countries payload");
    Ok(countries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_success_status_is_an_error() {
        let body = br#"{"status":404,"message":"Not Found"}"#;

        assert_eq!(interpret_response(404, body), Err(FetchError::Status(404)));
    }

    #[test]
    fn malformed_body_is_an_error() {
        assert!(matches!(
            interpret_response(200, b"<html>oops</html>"),
            Err(FetchError::Malformed(_))
        ));
    }

    #[test]
    fn success_yields_collection_in_order() {
        let body = br#"[
            {"flags": {"svg": "pe.svg"}, "name": {"common": "Peru"}, "population": 33000000, "region": "Americas", "capital": ["Lima"]},
            {"flags": {"svg": "fr.svg"}, "name": {"common": "France"}, "population": 67000000, "region": "Europe", "capital": ["Paris"]}
        ]"#;

        let countries = interpret_response(200, body).unwrap();

        let names: Vec<&str> = countries.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Peru", "France"]);
    }

    #[test]
    fn recognises_own_request_context() {
        assert!(is_countries_response(&countries_request_context()));
        assert!(!is_countries_response(&BTreeMap::new()));
    }
}
