//! Typed accessors over a [`Bucket`].
//!
//! These functions read a key's string representation and parse it into a
//! typed value. They all share the same shape:
//!
//! - `get_*` returns `Ok(None)` when the key is undefined, so callers can
//!   distinguish "not set" from "set but invalid";
//! - `get_*_default` substitutes a default for an undefined key;
//! - `*_between` variants enforce an inclusive range, and reject a default
//!   that is itself out of range.
//!
//! Anything that implements [`FromStr`] parses through the generic [`get`];
//! booleans, durations and URLs have dedicated accessors because their
//! accepted syntax is wider than (or absent from) their `FromStr` form.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use url::Url;

use crate::bucket::Bucket;
use crate::error::{KeyError, KeyResult};

/// Reads the string representation of `key`, or `None` if it is undefined.
fn read_string<B>(bucket: &B, key: &str) -> KeyResult<Option<String>>
where
    B: Bucket + ?Sized,
{
    let value = bucket.get(key);

    if value.is_empty() {
        return Ok(None);
    }

    match value.as_string() {
        Ok(raw) => Ok(Some(raw)),
        Err(source) => Err(KeyError::Unreadable {
            key: key.to_string(),
            source,
        }),
    }
}

/// Returns the parsed representation of the value associated with `key`.
///
/// Returns `Ok(None)` if the key is undefined, or an
/// [`InvalidValue`](KeyError::InvalidValue) error if parsing fails.
pub fn get<B, T>(bucket: &B, key: &str) -> KeyResult<Option<T>>
where
    B: Bucket + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    let Some(raw) = read_string(bucket, key)? else {
        return Ok(None);
    };

    match raw.parse() {
        Ok(parsed) => Ok(Some(parsed)),
        Err(err) => Err(KeyError::InvalidValue {
            key: key.to_string(),
            reason: err.to_string(),
            value: raw,
        }),
    }
}

/// Returns the parsed representation of the value associated with `key`, or
/// `default` if the key is undefined.
pub fn get_default<B, T>(bucket: &B, key: &str, default: T) -> KeyResult<T>
where
    B: Bucket + ?Sized,
    T: FromStr,
    T::Err: Display,
{
    Ok(get(bucket, key)?.unwrap_or(default))
}

/// Returns the parsed representation of the value associated with `key`,
/// verifying that it lies between `min` and `max` (inclusive).
pub fn get_between<B, T>(bucket: &B, key: &str, min: T, max: T) -> KeyResult<Option<T>>
where
    B: Bucket + ?Sized,
    T: FromStr + PartialOrd + Display,
    T::Err: Display,
{
    match get::<B, T>(bucket, key)? {
        None => Ok(None),
        Some(parsed) if parsed < min || parsed > max => Err(KeyError::InvalidValue {
            key: key.to_string(),
            value: parsed.to_string(),
            reason: format!("expected a value between {min} and {max} (inclusive)"),
        }),
        Some(parsed) => Ok(Some(parsed)),
    }
}

/// Returns the parsed representation of the value associated with `key`, or
/// `default` if the key is undefined, verifying that the result lies between
/// `min` and `max` (inclusive).
///
/// A `default` outside the range is an
/// [`InvalidDefault`](KeyError::InvalidDefault) error even when the key is
/// defined.
pub fn get_default_between<B, T>(
    bucket: &B,
    key: &str,
    default: T,
    min: T,
    max: T,
) -> KeyResult<T>
where
    B: Bucket + ?Sized,
    T: FromStr + PartialOrd + Display,
    T::Err: Display,
{
    if default < min || default > max {
        return Err(KeyError::InvalidDefault {
            key: key.to_string(),
            value: default.to_string(),
            reason: format!("expected a value between {min} and {max} (inclusive)"),
        });
    }

    Ok(get_between(bucket, key, min, max)?.unwrap_or(default))
}

// =============================================================================
// Booleans
// =============================================================================

/// Returns the boolean representation of the value associated with `key`.
///
/// Accepts `true`, `yes` and `on` as true, and `false`, `no` and `off` as
/// false, case-insensitively.
pub fn get_bool<B>(bucket: &B, key: &str) -> KeyResult<Option<bool>>
where
    B: Bucket + ?Sized,
{
    let Some(raw) = read_string(bucket, key)? else {
        return Ok(None);
    };

    match raw.to_lowercase().as_str() {
        "true" | "yes" | "on" => Ok(Some(true)),
        "false" | "no" | "off" => Ok(Some(false)),
        _ => Err(KeyError::InvalidValue {
            key: key.to_string(),
            value: raw,
            reason: r#"expected one of "true", "false", "yes", "no", "on" or "off""#.to_string(),
        }),
    }
}

/// Returns the boolean representation of the value associated with `key`, or
/// `default` if the key is undefined.
pub fn get_bool_default<B>(bucket: &B, key: &str, default: bool) -> KeyResult<bool>
where
    B: Bucket + ?Sized,
{
    Ok(get_bool(bucket, key)?.unwrap_or(default))
}

// =============================================================================
// Durations
// =============================================================================

/// Returns the duration representation of the value associated with `key`.
///
/// Durations use humantime syntax, e.g. `"250ms"`, `"90s"` or `"1h 30m"`.
pub fn get_duration<B>(bucket: &B, key: &str) -> KeyResult<Option<Duration>>
where
    B: Bucket + ?Sized,
{
    let Some(raw) = read_string(bucket, key)? else {
        return Ok(None);
    };

    match humantime::parse_duration(&raw) {
        Ok(duration) => Ok(Some(duration)),
        Err(err) => Err(KeyError::InvalidValue {
            key: key.to_string(),
            value: raw,
            reason: format!("expected a duration ({err})"),
        }),
    }
}

/// Returns the duration representation of the value associated with `key`,
/// or `default` if the key is undefined.
pub fn get_duration_default<B>(bucket: &B, key: &str, default: Duration) -> KeyResult<Duration>
where
    B: Bucket + ?Sized,
{
    Ok(get_duration(bucket, key)?.unwrap_or(default))
}

/// Returns the duration representation of the value associated with `key`,
/// verifying that it lies between `min` and `max` (inclusive).
pub fn get_duration_between<B>(
    bucket: &B,
    key: &str,
    min: Duration,
    max: Duration,
) -> KeyResult<Option<Duration>>
where
    B: Bucket + ?Sized,
{
    match get_duration(bucket, key)? {
        None => Ok(None),
        Some(duration) if duration < min || duration > max => Err(KeyError::InvalidValue {
            key: key.to_string(),
            value: humantime::format_duration(duration).to_string(),
            reason: format!(
                "expected a duration between {} and {} (inclusive)",
                humantime::format_duration(min),
                humantime::format_duration(max),
            ),
        }),
        Some(duration) => Ok(Some(duration)),
    }
}

/// Returns the duration representation of the value associated with `key`,
/// or `default` if the key is undefined, verifying that the result lies
/// between `min` and `max` (inclusive).
pub fn get_duration_default_between<B>(
    bucket: &B,
    key: &str,
    default: Duration,
    min: Duration,
    max: Duration,
) -> KeyResult<Duration>
where
    B: Bucket + ?Sized,
{
    if default < min || default > max {
        return Err(KeyError::InvalidDefault {
            key: key.to_string(),
            value: humantime::format_duration(default).to_string(),
            reason: format!(
                "expected a duration between {} and {} (inclusive)",
                humantime::format_duration(min),
                humantime::format_duration(max),
            ),
        });
    }

    Ok(get_duration_between(bucket, key, min, max)?.unwrap_or(default))
}

// =============================================================================
// URLs
// =============================================================================

/// Returns the URL representation of the value associated with `key`.
pub fn get_url<B>(bucket: &B, key: &str) -> KeyResult<Option<Url>>
where
    B: Bucket + ?Sized,
{
    let Some(raw) = read_string(bucket, key)? else {
        return Ok(None);
    };

    match Url::parse(&raw) {
        Ok(url) => Ok(Some(url)),
        Err(err) => Err(KeyError::InvalidValue {
            key: key.to_string(),
            value: raw,
            reason: format!("expected a URL ({err})"),
        }),
    }
}

/// Returns the URL representation of the value associated with `key`, or the
/// parsed `default` if the key is undefined.
pub fn get_url_default<B>(bucket: &B, key: &str, default: &str) -> KeyResult<Url>
where
    B: Bucket + ?Sized,
{
    if let Some(url) = get_url(bucket, key)? {
        return Ok(url);
    }

    Url::parse(default).map_err(|err| KeyError::InvalidDefault {
        key: key.to_string(),
        value: default.to_string(),
        reason: format!("expected a URL ({err})"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Value;
    use std::collections::HashMap;

    fn bucket(pairs: &[(&str, &str)]) -> HashMap<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::from_string(*v)))
            .collect()
    }

    #[test]
    fn test_get_parses_integers() {
        let b = bucket(&[("<key>", "-42")]);
        assert_eq!(get::<_, i32>(&b, "<key>").unwrap(), Some(-42));
    }

    #[test]
    fn test_get_parses_floats() {
        let b = bucket(&[("<key>", "1.5")]);
        assert_eq!(get::<_, f64>(&b, "<key>").unwrap(), Some(1.5));
    }

    #[test]
    fn test_get_returns_none_for_undefined_keys() {
        let b = bucket(&[]);
        assert_eq!(get::<_, u16>(&b, "<key>").unwrap(), None);
    }

    #[test]
    fn test_get_rejects_malformed_values() {
        let b = bucket(&[("<key>", "<not a number>")]);

        let err = get::<_, u64>(&b, "<key>").unwrap_err();
        assert!(matches!(err, KeyError::InvalidValue { .. }));
        assert_eq!(err.key(), "<key>");
    }

    #[test]
    fn test_get_reports_unreadable_values() {
        let b = HashMap::from([(
            "<key>".to_string(),
            Value::from_error(crate::ValueError::Decode("<reason>".to_string())),
        )]);

        let err = get::<_, u64>(&b, "<key>").unwrap_err();
        assert!(matches!(err, KeyError::Unreadable { .. }));
    }

    #[test]
    fn test_get_default() {
        let b = bucket(&[("<key>", "7")]);
        assert_eq!(get_default(&b, "<key>", 3u32).unwrap(), 7);
        assert_eq!(get_default(&b, "<other>", 3u32).unwrap(), 3);
    }

    #[test]
    fn test_get_between_accepts_inclusive_bounds() {
        let b = bucket(&[("<lo>", "1"), ("<hi>", "10")]);
        assert_eq!(get_between(&b, "<lo>", 1, 10).unwrap(), Some(1));
        assert_eq!(get_between(&b, "<hi>", 1, 10).unwrap(), Some(10));
    }

    #[test]
    fn test_get_between_rejects_out_of_range_values() {
        let b = bucket(&[("<key>", "11")]);

        let err = get_between(&b, "<key>", 1, 10).unwrap_err();
        assert!(matches!(err, KeyError::InvalidValue { .. }));
    }

    #[test]
    fn test_get_default_between_rejects_out_of_range_defaults() {
        let b = bucket(&[("<key>", "5")]);

        let err = get_default_between(&b, "<key>", 99, 1, 10).unwrap_err();
        assert!(matches!(err, KeyError::InvalidDefault { .. }));
    }

    #[test]
    fn test_get_default_between() {
        let b = bucket(&[("<key>", "5")]);
        assert_eq!(get_default_between(&b, "<key>", 2, 1, 10).unwrap(), 5);
        assert_eq!(get_default_between(&b, "<other>", 2, 1, 10).unwrap(), 2);
    }

    #[test]
    fn test_get_bool_token_table() {
        for (raw, expected) in [
            ("true", true),
            ("yes", true),
            ("on", true),
            ("TRUE", true),
            ("false", false),
            ("no", false),
            ("off", false),
            ("Off", false),
        ] {
            let b = bucket(&[("<key>", raw)]);
            assert_eq!(get_bool(&b, "<key>").unwrap(), Some(expected), "{raw}");
        }
    }

    #[test]
    fn test_get_bool_rejects_other_tokens() {
        let b = bucket(&[("<key>", "1")]);
        assert!(matches!(
            get_bool(&b, "<key>"),
            Err(KeyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_get_bool_default() {
        let b = bucket(&[("<key>", "no")]);
        assert!(!get_bool_default(&b, "<key>", true).unwrap());
        assert!(get_bool_default(&b, "<other>", true).unwrap());
    }

    #[test]
    fn test_get_duration_parses_humantime_syntax() {
        let b = bucket(&[("<key>", "1h 30m")]);
        assert_eq!(
            get_duration(&b, "<key>").unwrap(),
            Some(Duration::from_secs(90 * 60))
        );
    }

    #[test]
    fn test_get_duration_rejects_malformed_values() {
        let b = bucket(&[("<key>", "<not a duration>")]);
        assert!(matches!(
            get_duration(&b, "<key>"),
            Err(KeyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_get_duration_between() {
        let b = bucket(&[("<key>", "5s")]);

        assert_eq!(
            get_duration_between(&b, "<key>", Duration::from_secs(1), Duration::from_secs(10))
                .unwrap(),
            Some(Duration::from_secs(5))
        );

        assert!(matches!(
            get_duration_between(&b, "<key>", Duration::from_secs(6), Duration::from_secs(10)),
            Err(KeyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_get_duration_default_between_rejects_out_of_range_defaults() {
        let b = bucket(&[]);
        assert!(matches!(
            get_duration_default_between(
                &b,
                "<key>",
                Duration::from_secs(60),
                Duration::from_secs(1),
                Duration::from_secs(10),
            ),
            Err(KeyError::InvalidDefault { .. })
        ));
    }

    #[test]
    fn test_get_url() {
        let b = bucket(&[("<key>", "https://example.org/config")]);

        let url = get_url(&b, "<key>").unwrap().unwrap();
        assert_eq!(url.as_str(), "https://example.org/config");
        assert_eq!(get_url(&b, "<other>").unwrap(), None);
    }

    #[test]
    fn test_get_url_rejects_malformed_values() {
        let b = bucket(&[("<key>", "::not a url::")]);
        assert!(matches!(
            get_url(&b, "<key>"),
            Err(KeyError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_get_url_default() {
        let b = bucket(&[]);

        let url = get_url_default(&b, "<key>", "https://example.org/").unwrap();
        assert_eq!(url.as_str(), "https://example.org/");

        assert!(matches!(
            get_url_default(&b, "<key>", "::not a url::"),
            Err(KeyError::InvalidDefault { .. })
        ));
    }
}
