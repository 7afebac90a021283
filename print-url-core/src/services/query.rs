//! Query string serialization.

use crate::types::PayloadFields;

/// Join fields into `key1=value1&key2=value2`, in insertion order.
///
/// Keys listed in `excluded` and fields without a value are skipped. Values
/// are written verbatim: the result is meant for copy/paste, so nothing is
/// percent-encoded and an `&` inside a value will split it.
pub fn format_query_params(fields: &PayloadFields, excluded: &[&str]) -> String {
    fields
        .iter()
        .filter(|(key, _)| !excluded.contains(key))
        .filter_map(|(key, value)| value.map(|value| format!("{key}={value}")))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, Option<&str>)]) -> PayloadFields {
        let mut fields = PayloadFields::new();
        for (key, value) in pairs {
            fields.insert(*key, value.map(str::to_string));
        }
        fields
    }

    #[test]
    fn test_empty_mapping() {
        assert_eq!(format_query_params(&PayloadFields::new(), &[]), "");
    }

    #[test]
    fn test_keeps_insertion_order() {
        let f = fields(&[("lang", Some("en")), ("chartPage", Some("0"))]);
        assert_eq!(format_query_params(&f, &[]), "lang=en&chartPage=0");
    }

    #[test]
    fn test_skips_excluded_keys() {
        let f = fields(&[
            ("zoneId", Some("SZ0")),
            ("lang", Some("en")),
            ("containerId", Some("abc")),
        ]);
        assert_eq!(
            format_query_params(&f, &["zoneId", "containerId"]),
            "lang=en"
        );
    }

    #[test]
    fn test_skips_absent_values() {
        let f = fields(&[("broken", None), ("lang", Some("en"))]);
        assert_eq!(format_query_params(&f, &[]), "lang=en");
    }

    #[test]
    fn test_values_are_not_escaped() {
        let f = fields(&[("startTime", Some("2020-12-10T02:35:42Z")), ("q", Some("a b&c"))]);
        assert_eq!(
            format_query_params(&f, &[]),
            "startTime=2020-12-10T02:35:42Z&q=a b&c"
        );
    }

    #[test]
    fn test_empty_value_is_serialized() {
        let f = fields(&[("title", Some(""))]);
        assert_eq!(format_query_params(&f, &[]), "title=");
    }
}
