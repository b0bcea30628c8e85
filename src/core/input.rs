//! Resolution of caller arguments from the loosely shaped voice-agent event.
//!
//! The agent runtime may place an argument under `args`, at the top level of
//! the event, or under `properties`. Sources are checked in that order and
//! the first usable value wins.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const ARG_SOURCES: [Option<&str>; 3] = [Some("args"), None, Some("properties")];

/// Looks up a free-text `key` across the event's argument sources.
///
/// Blank strings, nulls and non-string values are skipped so a lower
/// precedence source can still supply the argument.
#[must_use]
pub fn resolve_arg(event: &Value, key: &str) -> Option<String> {
    resolve_with(event, key, |value| match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        _ => None,
    })
}

/// Like [`resolve_arg`], but a numeric ZIP code is accepted and rendered as its decimal text.
#[must_use]
pub fn resolve_zip_code(event: &Value) -> Option<String> {
    resolve_with(event, "zip_code", |value| match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    })
}

fn resolve_with<F>(event: &Value, key: &str, accept: F) -> Option<String>
where
    F: Fn(&Value) -> Option<String>,
{
    ARG_SOURCES.iter().find_map(|source| {
        let container = match source {
            Some(name) => event.get(*name)?,
            None => event,
        };
        accept(container.get(key)?)
    })
}

/// Returns the trimmed ZIP code when it is exactly five ASCII digits.
#[must_use]
pub fn valid_zip(raw: &str) -> Option<&str> {
    static ZIP_RE: Lazy<Regex> =
        Lazy::new(|| Regex::new(r"^[0-9]{5}$").expect("static regex compile"));

    let trimmed = raw.trim();
    ZIP_RE.is_match(trimmed).then_some(trimmed)
}

/// The booking payload is forwarded verbatim from `args`; anything else becomes `{}`.
#[must_use]
pub fn booking_payload(event: &Value) -> Value {
    match event.get("args") {
        Some(Value::Null) | None => Value::Object(serde_json::Map::new()),
        Some(args) => args.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn args_take_precedence_over_top_level_and_properties() {
        let event = json!({
            "args": { "zip_code": "11111" },
            "zip_code": "22222",
            "properties": { "zip_code": "33333" }
        });
        assert_eq!(resolve_zip_code(&event).as_deref(), Some("11111"));
    }

    #[test]
    fn falls_through_to_properties() {
        let event = json!({ "args": {}, "properties": { "park_location": "Urban Air Frisco" } });
        assert_eq!(
            resolve_arg(&event, "park_location").as_deref(),
            Some("Urban Air Frisco")
        );
    }

    #[test]
    fn blank_and_null_values_are_skipped() {
        let event = json!({
            "args": { "zip_code": "   " },
            "zip_code": null,
            "properties": { "zip_code": "75034" }
        });
        assert_eq!(resolve_zip_code(&event).as_deref(), Some("75034"));
    }

    #[test]
    fn numeric_zip_code_is_rendered() {
        let event = json!({ "zip_code": 90210 });
        assert_eq!(resolve_zip_code(&event).as_deref(), Some("90210"));
    }

    #[test]
    fn numeric_park_location_is_not_text() {
        let event = json!({ "args": { "park_location": 123 } });
        assert!(resolve_arg(&event, "park_location").is_none());
    }

    #[test]
    fn missing_everywhere_is_none() {
        assert!(resolve_arg(&json!({}), "zip_code").is_none());
        assert!(resolve_arg(&json!({ "args": "nope" }), "zip_code").is_none());
    }

    #[test]
    fn zip_must_be_five_digits() {
        assert_eq!(valid_zip(" 90210 "), Some("90210"));
        assert!(valid_zip("1234").is_none());
        assert!(valid_zip("abcde").is_none());
        assert!(valid_zip("902101").is_none());
        assert!(valid_zip("90-21").is_none());
    }

    #[test]
    fn zip_rejects_non_ascii_digits() {
        assert!(valid_zip("٩٠٢١٠").is_none());
        assert!(valid_zip("９０２１０").is_none());
    }

    #[test]
    fn booking_payload_defaults_to_empty_object() {
        assert_eq!(booking_payload(&json!({})), json!({}));
        assert_eq!(booking_payload(&json!({ "args": null })), json!({}));
        assert_eq!(
            booking_payload(&json!({ "args": { "park_id": 12 } })),
            json!({ "park_id": 12 })
        );
    }
}
