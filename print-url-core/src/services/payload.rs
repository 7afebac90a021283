//! Payload parsing: loosely formatted `key:value` lines into [`PayloadFields`].

use log::{debug, trace};

use crate::types::PayloadFields;

/// Literal value that drops a field entirely.
const NULL_VALUE: &str = "null";

/// Parse a pasted payload.
///
/// Each non-empty line is split on `:`. Keys whose lowercase form contains
/// `time` (but not `isrealtime`) are timestamps and keep every fragment after
/// the key, since ISO-8601 values contain colons themselves. Other keys keep
/// only the first fragment. Quote characters are removed in both cases.
pub fn parse_payload(raw: &str) -> PayloadFields {
    let mut fields = PayloadFields::new();

    for line in raw.lines().filter(|line| !line.is_empty()) {
        let mut parts = line.split(':');
        // `split` always yields at least one item
        let key = parts.next().unwrap_or_default();

        let Some(value) = parts.next() else {
            trace!("Payload line without separator: {key:?}");
            fields.insert(key, None);
            continue;
        };

        let value = value.trim();
        if value == NULL_VALUE {
            trace!("Dropping null field: {key:?}");
            continue;
        }

        let processed = if is_timestamp_key(key) {
            let mut joined = value.to_string();
            for fragment in parts {
                joined.push(':');
                joined.push_str(fragment);
            }
            strip_quotes(&joined)
        } else {
            strip_quotes(value)
        };

        fields.insert(key, Some(processed));
    }

    debug!("Parsed {} payload field(s)", fields.len());
    fields
}

/// `*time*` keys, case-insensitively, except `*isrealtime*`.
fn is_timestamp_key(key: &str) -> bool {
    let key = key.to_lowercase();
    key.contains("time") && !key.contains("isrealtime")
}

/// Remove every single and double quote character.
fn strip_quotes(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\'' | '"')).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_payload() {
        assert!(parse_payload("").is_empty());
        assert!(parse_payload("\n\n").is_empty());
    }

    #[test]
    fn test_scalar_field_trims_and_strips_quotes() {
        let fields = parse_payload(r#"lang: "en""#);
        assert_eq!(fields.get("lang"), Some("en"));

        let fields = parse_payload("positionSide: 'right'");
        assert_eq!(fields.get("positionSide"), Some("right"));
    }

    #[test]
    fn test_scalar_field_discards_rest() {
        let fields = parse_payload("url: https://example.com");
        assert_eq!(fields.get("url"), Some("https"));
    }

    #[test]
    fn test_timestamp_field_keeps_colons() {
        let fields = parse_payload(r#"startTime: "2020-12-10T02:35:42Z""#);
        assert_eq!(fields.get("startTime"), Some("2020-12-10T02:35:42Z"));
    }

    #[test]
    fn test_timestamp_detection_is_case_insensitive() {
        let fields = parse_payload(r#"METRICSTIME: "2020-12-10T02:40:12Z""#);
        assert_eq!(fields.get("METRICSTIME"), Some("2020-12-10T02:40:12Z"));
    }

    #[test]
    fn test_timestamp_without_extra_fragments() {
        let fields = parse_payload("refreshTime: 30");
        assert_eq!(fields.get("refreshTime"), Some("30"));
    }

    #[test]
    fn test_is_real_time_is_scalar() {
        assert!(!is_timestamp_key("isRealTime"));
        let fields = parse_payload("isRealTime: true");
        assert_eq!(fields.get("isRealTime"), Some("true"));
    }

    #[test]
    fn test_null_value_drops_field() {
        let fields = parse_payload("endTime: null\nlang: en");
        assert!(!fields.contains_key("endTime"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_quoted_null_is_kept() {
        let fields = parse_payload(r#"label: "null""#);
        assert_eq!(fields.get("label"), Some("null"));
    }

    #[test]
    fn test_line_without_separator_is_absent() {
        let fields = parse_payload("chartPage");
        assert!(fields.contains_key("chartPage"));
        assert_eq!(fields.get("chartPage"), None);
    }

    #[test]
    fn test_duplicate_key_last_write_wins() {
        let fields = parse_payload("lang: en\nlang: fr");
        assert_eq!(fields.get("lang"), Some("fr"));
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn test_key_case_is_preserved() {
        let fields = parse_payload("ZoneID: SZ1");
        assert_eq!(fields.get("ZoneID"), Some("SZ1"));
        assert_eq!(fields.get("zoneId"), None);
    }

    #[test]
    fn test_crlf_line_endings() {
        let fields = parse_payload("lang: en\r\nstartTime: \"2020-12-10T02:35:42Z\"\r\n");
        assert_eq!(fields.get("lang"), Some("en"));
        assert_eq!(fields.get("startTime"), Some("2020-12-10T02:35:42Z"));
    }
}
