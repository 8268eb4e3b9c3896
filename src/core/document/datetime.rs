//! The one timestamp convention used by every document.
//!
//! Timestamps are written as ISO 8601 with an explicit `+00:00` offset and
//! fractional seconds only when they are non-zero, e.g.
//! `2023-12-07T08:00:00+00:00`. Input without an offset is read as UTC.

use chrono::{DateTime, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serializer};

const NAIVE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn format(dt: &DateTime<Utc>) -> String {
    // Precision stops at microseconds, so nanosecond leftovers count as zero.
    let precision = if dt.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    dt.to_rfc3339_opts(precision, false)
}

pub fn parse(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.with_timezone(&Utc)),
        Err(err) => match NaiveDateTime::parse_from_str(raw, NAIVE_FORMAT) {
            Ok(naive) => Ok(Utc.from_utc_datetime(&naive)),
            Err(_) => Err(err),
        },
    }
}

/// `#[serde(with = "...")]` adapter for optional timestamp fields.
pub mod option {
    use super::*;

    pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&super::format(dt)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(raw) => super::parse(&raw)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {e}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_seconds_use_plain_offset_form() {
        let dt = Utc.with_ymd_and_hms(2023, 12, 7, 8, 0, 0).unwrap();
        assert_eq!(format(&dt), "2023-12-07T08:00:00+00:00");
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let dt = parse("2013-04-25T15:45:00.5+00:00").unwrap();
        assert_eq!(format(&dt), "2013-04-25T15:45:00.500000+00:00");
    }

    #[test]
    fn sub_microsecond_remainders_print_whole_seconds() {
        let dt = Utc.timestamp_opt(1_701_936_000, 500).unwrap();
        assert_eq!(format(&dt), "2023-12-07T08:00:00+00:00");

        let dt = Utc.timestamp_opt(1_701_936_000, 1_500).unwrap();
        assert_eq!(format(&dt), "2023-12-07T08:00:00.000001+00:00");
    }

    #[test]
    fn offsets_are_normalized_to_utc() {
        let dt = parse("2011-11-17T22:00:00+02:00").unwrap();
        assert_eq!(format(&dt), "2011-11-17T20:00:00+00:00");
    }

    #[test]
    fn naive_input_is_utc() {
        let dt = parse("2009-05-13T20:11:00").unwrap();
        assert_eq!(format(&dt), "2009-05-13T20:11:00+00:00");
        assert!(parse("yesterday").is_err());
    }
}
