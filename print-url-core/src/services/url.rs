//! URL templating and in-place environment/mode switching.

use log::debug;

use super::payload::parse_payload;
use super::query::format_query_params;
use crate::types::{Environment, Mode};

/// Payload key that supplies the zone path segment.
pub const ZONE_ID_KEY: &str = "zoneId";

/// Payload key that supplies the container path segment.
pub const CONTAINER_ID_KEY: &str = "containerId";

/// Rendered in place of a path segment the payload did not supply.
pub const ABSENT_VALUE: &str = "undefined";

const PRINT_PATH: &str = "print/dvr";

/// Placeholder URL with literal `:zoneId` / `:containerId` tokens.
pub fn build_default_url(env: Environment, mode: Mode) -> String {
    format!(
        "{}{}{PRINT_PATH}/:{ZONE_ID_KEY}/:{CONTAINER_ID_KEY}?",
        env.origin(),
        mode.segment()
    )
}

/// Build the print URL for a pasted payload.
///
/// An empty payload gives [`build_default_url`]. Otherwise `zoneId` and
/// `containerId` become path segments ([`ABSENT_VALUE`] when missing) and
/// every other field with a value becomes a query parameter.
pub fn build_url_from_payload(env: Environment, mode: Mode, raw: &str) -> String {
    if raw.is_empty() {
        return build_default_url(env, mode);
    }

    let fields = parse_payload(raw);
    let zone_id = fields.get(ZONE_ID_KEY);
    let container_id = fields.get(CONTAINER_ID_KEY);
    if zone_id.is_none() || container_id.is_none() {
        debug!("Payload is missing {ZONE_ID_KEY} or {CONTAINER_ID_KEY}");
    }
    let zone_id = zone_id.unwrap_or(ABSENT_VALUE);
    let container_id = container_id.unwrap_or(ABSENT_VALUE);

    let query = format_query_params(&fields, &[ZONE_ID_KEY, CONTAINER_ID_KEY]);

    format!(
        "{}{}{PRINT_PATH}/{zone_id}/{container_id}?{query}",
        env.origin(),
        mode.segment()
    )
}

/// Swap the origin of `from` for the origin of `to`, first occurrence only.
pub fn switch_environment(url: &str, from: Environment, to: Environment) -> String {
    url.replacen(from.origin(), to.origin(), 1)
}

/// Swap the segment of `from` for the segment of `to`, first occurrence only.
pub fn switch_mode(url: &str, from: Mode, to: Mode) -> String {
    url.replacen(from.segment(), to.segment(), 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "zoneId: \"SZ0\"\ncontainerId: \"1c61a4f0-6328-4367-a5da-08aa22c4f326\"\nlang: \"en\"";

    #[test]
    fn test_default_url_remote_standalone() {
        assert_eq!(
            build_default_url(Environment::Remote, Mode::Standalone),
            "https://localhost:9002/s/print/dvr/:zoneId/:containerId?"
        );
    }

    #[test]
    fn test_default_url_local_integrated() {
        assert_eq!(
            build_default_url(Environment::Local, Mode::Integrated),
            "http://localhost:4200/i/print/dvr/:zoneId/:containerId?"
        );
    }

    #[test]
    fn test_empty_payload_gives_default_url() {
        for env in Environment::all() {
            for mode in Mode::all() {
                assert_eq!(
                    build_url_from_payload(*env, *mode, ""),
                    build_default_url(*env, *mode)
                );
            }
        }
    }

    #[test]
    fn test_sample_payload() {
        assert_eq!(
            build_url_from_payload(Environment::Remote, Mode::Standalone, SAMPLE),
            "https://localhost:9002/s/print/dvr/SZ0/1c61a4f0-6328-4367-a5da-08aa22c4f326?lang=en"
        );
    }

    #[test]
    fn test_missing_ids_render_as_undefined() {
        assert_eq!(
            build_url_from_payload(Environment::Local, Mode::Standalone, "lang: en"),
            "http://localhost:4200/s/print/dvr/undefined/undefined?lang=en"
        );
    }

    #[test]
    fn test_blank_lines_give_empty_query() {
        assert_eq!(
            build_url_from_payload(Environment::Remote, Mode::Integrated, "\n"),
            "https://localhost:9002/i/print/dvr/undefined/undefined?"
        );
    }

    #[test]
    fn test_switch_environment() {
        let url = build_url_from_payload(Environment::Remote, Mode::Standalone, SAMPLE);
        assert_eq!(
            switch_environment(&url, Environment::Remote, Environment::Local),
            build_url_from_payload(Environment::Local, Mode::Standalone, SAMPLE)
        );
    }

    #[test]
    fn test_switch_mode_replaces_first_occurrence_only() {
        let url = build_url_from_payload(
            Environment::Remote,
            Mode::Standalone,
            "zoneId: SZ0\ncontainerId: c1\npath: /s/x",
        );
        assert_eq!(
            switch_mode(&url, Mode::Standalone, Mode::Integrated),
            "https://localhost:9002/i/print/dvr/SZ0/c1?path=/s/x"
        );
    }

    #[test]
    fn test_switch_without_occurrence_is_noop() {
        let url = "https://example.com/print";
        assert_eq!(
            switch_environment(url, Environment::Local, Environment::Remote),
            url
        );
        assert_eq!(switch_mode(url, Mode::Integrated, Mode::Standalone), url);
    }
}
