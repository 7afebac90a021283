//! Stateless service façade exposing all URL builder operations.
//!
//! Every method on [`UrlBuilder`] is an associated function, no instance needed.
//! The same operations are re-exported as free functions at the crate root.

mod payload;
mod query;
mod url;

pub use payload::parse_payload;
pub use query::format_query_params;
pub use url::{
    build_default_url, build_url_from_payload, switch_environment, switch_mode, ABSENT_VALUE,
    CONTAINER_ID_KEY, ZONE_ID_KEY,
};

use crate::types::{Environment, Mode, PayloadFields};

/// Entry point for all URL building operations.
///
/// ```rust
/// use print_url_core::{Environment, Mode, UrlBuilder};
///
/// let url = UrlBuilder::build_url_from_payload(
///     Environment::Remote,
///     Mode::Standalone,
///     "zoneId: SZ0\ncontainerId: abc\nlang: \"en\"",
/// );
/// assert_eq!(url, "https://localhost:9002/s/print/dvr/SZ0/abc?lang=en");
/// ```
pub struct UrlBuilder;

impl UrlBuilder {
    /// Placeholder URL shown before any payload is pasted.
    pub fn build_default_url(env: Environment, mode: Mode) -> String {
        url::build_default_url(env, mode)
    }

    /// Parse a pasted `key:value` payload.
    ///
    /// Never fails: lines without a separator produce a key with no value and
    /// `null` values are dropped.
    pub fn parse_payload(raw: &str) -> PayloadFields {
        payload::parse_payload(raw)
    }

    /// Serialize fields as an unescaped query string, skipping `excluded` keys.
    pub fn format_query_params(fields: &PayloadFields, excluded: &[&str]) -> String {
        query::format_query_params(fields, excluded)
    }

    /// Full pipeline: payload text to print URL.
    pub fn build_url_from_payload(env: Environment, mode: Mode, raw: &str) -> String {
        url::build_url_from_payload(env, mode, raw)
    }

    /// Replace the first occurrence of `from`'s origin in `current_url`.
    pub fn switch_environment(current_url: &str, from: Environment, to: Environment) -> String {
        url::switch_environment(current_url, from, to)
    }

    /// Replace the first occurrence of `from`'s path segment in `current_url`.
    pub fn switch_mode(current_url: &str, from: Mode, to: Mode) -> String {
        url::switch_mode(current_url, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_facade_matches_free_functions() {
        let raw = "zoneId: SZ0\ncontainerId: c1\nstartTime: \"2020-12-10T02:35:42Z\"";

        assert_eq!(
            UrlBuilder::build_url_from_payload(Environment::Local, Mode::Integrated, raw),
            build_url_from_payload(Environment::Local, Mode::Integrated, raw)
        );
        assert_eq!(UrlBuilder::parse_payload(raw), parse_payload(raw));
        assert_eq!(
            UrlBuilder::build_default_url(Environment::Remote, Mode::Standalone),
            build_default_url(Environment::Remote, Mode::Standalone)
        );
    }

    #[test]
    fn test_facade_format_query_params() {
        let fields = UrlBuilder::parse_payload("zoneId: SZ0\nlang: en");
        assert_eq!(
            UrlBuilder::format_query_params(&fields, &[ZONE_ID_KEY]),
            "lang=en"
        );
    }
}
