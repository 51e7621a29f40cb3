//! Date and time parsing and display formatting

use std::fmt;

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::errors::{Result, ViewError};
use crate::types::Publication;

const ZONED_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S %z",
    "%Y-%m-%d %H:%M:%S %:z",
    "%Y-%m-%d %H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Shapes that spell the zone out as a literal `UTC`
const UTC_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S UTC", "%Y-%m-%d %H:%M UTC"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// A date/time string from the content API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedTime {
    /// Carries its own UTC offset
    Zoned(DateTime<FixedOffset>),
    /// Date and time without an offset
    Naive(NaiveDateTime),
    /// Clock time only
    TimeOnly(NaiveTime),
}

impl ParsedTime {
    /// Wall-clock time as written, offset ignored
    pub fn time_of_day(&self) -> NaiveTime {
        match self {
            ParsedTime::Zoned(dt) => dt.time(),
            ParsedTime::Naive(dt) => dt.time(),
            ParsedTime::TimeOnly(t) => *t,
        }
    }

    /// Absolute instant; values without an offset are read as UTC
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            ParsedTime::Zoned(dt) => Some(dt.with_timezone(&Utc)),
            ParsedTime::Naive(dt) => Some(dt.and_utc()),
            ParsedTime::TimeOnly(_) => None,
        }
    }
}

/// Parse the date/time shapes the content API emits
pub fn parse_datetime(value: &str) -> Result<ParsedTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(ParsedTime::Zoned(dt));
    }
    for fmt in ZONED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Ok(ParsedTime::Zoned(dt));
        }
    }
    for fmt in UTC_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(ParsedTime::Zoned(dt.and_utc().fixed_offset()));
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(ParsedTime::Naive(dt));
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(ParsedTime::Naive(date.and_time(NaiveTime::MIN)));
    }
    for fmt in TIME_FORMATS {
        if let Ok(t) = NaiveTime::parse_from_str(value, fmt) {
            return Ok(ParsedTime::TimeOnly(t));
        }
    }

    Err(ViewError::InvalidDateTime(value.to_string()))
}

/// Parse a value that must name an absolute instant
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>> {
    parse_datetime(value)?
        .to_utc()
        .ok_or_else(|| ViewError::InvalidDateTime(value.to_string()))
}

/// Human date range, e.g. `Tuesday 14 October 2014,  2:30pm -  4:00pm`
pub fn date_range<Z: TimeZone>(from: &DateTime<Z>, until: &DateTime<Z>) -> String
where
    Z::Offset: fmt::Display,
{
    if from.date_naive() == until.date_naive() {
        format!(
            "{}, {} - {}",
            from.format("%A %d %B %Y"),
            from.format("%l:%M%P"),
            until.format("%l:%M%P")
        )
    } else {
        format!(
            "{} {} - {} {}",
            from.format("%A %d %B %Y"),
            from.format("%l:%M%P"),
            until.format("%A %d %B %Y"),
            until.format("%l:%M%P")
        )
    }
}

/// Whether the event ends after `now`
pub fn upcoming_event(publication: &Publication, now: DateTime<Utc>) -> Result<bool> {
    let end = publication
        .end_date
        .as_deref()
        .ok_or_else(|| ViewError::MissingField {
            record: publication.display_name().to_string(),
            field: "end_date",
        })?;
    Ok(parse_instant(end)? > now)
}

/// The publication's start date in the site's local zone
pub fn parse_to_local_time(publication: &Publication, tz: Tz) -> Result<DateTime<Tz>> {
    let start = publication
        .start_date
        .as_deref()
        .ok_or_else(|| ViewError::MissingField {
            record: publication.display_name().to_string(),
            field: "start_date",
        })?;
    Ok(parse_instant(start)?.with_timezone(&tz))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_event(start: &str, end: &str) -> Publication {
        Publication {
            title: Some("Open Data Camp".to_string()),
            format: "event".to_string(),
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_parse_shapes() {
        let t = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        for raw in [
            "2014-10-14T14:30:00+01:00",
            "2014-10-14 14:30:00 +0100",
            "2014-10-14T14:30:00",
            "2014-10-14 14:30",
            "14:30:00",
            "14:30",
        ] {
            assert_eq!(parse_datetime(raw).unwrap().time_of_day(), t, "{}", raw);
        }
        assert!(matches!(
            parse_datetime("2014-10-14").unwrap(),
            ParsedTime::Naive(_)
        ));
    }

    #[test]
    fn test_parse_utc_suffix() {
        let parsed = parse_datetime("2014-10-14 09:00:00 UTC").unwrap();
        assert_eq!(
            parsed.to_utc(),
            Some(Utc.with_ymd_and_hms(2014, 10, 14, 9, 0, 0).unwrap())
        );
        assert_eq!(
            parsed.time_of_day(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_datetime("next tuesday"),
            Err(ViewError::InvalidDateTime(_))
        ));
        assert!(parse_instant("14:30").is_err());
    }

    #[test]
    fn test_date_range_same_day() {
        let from = Utc.with_ymd_and_hms(2014, 10, 14, 14, 30, 0).unwrap();
        let until = Utc.with_ymd_and_hms(2014, 10, 14, 16, 0, 0).unwrap();
        assert_eq!(
            date_range(&from, &until),
            "Tuesday 14 October 2014,  2:30pm -  4:00pm"
        );
    }

    #[test]
    fn test_date_range_across_days() {
        let from = Utc.with_ymd_and_hms(2014, 10, 14, 9, 0, 0).unwrap();
        let until = Utc.with_ymd_and_hms(2014, 10, 15, 17, 0, 0).unwrap();
        assert_eq!(
            date_range(&from, &until),
            "Tuesday 14 October 2014  9:00am - Wednesday 15 October 2014  5:00pm"
        );
    }

    #[test]
    fn test_upcoming_event() {
        let event = make_event("2014-10-14T09:00:00Z", "2014-10-14T17:00:00Z");
        let before = Utc.with_ymd_and_hms(2014, 10, 14, 12, 0, 0).unwrap();
        let after = Utc.with_ymd_and_hms(2014, 10, 15, 0, 0, 0).unwrap();
        assert!(upcoming_event(&event, before).unwrap());
        assert!(!upcoming_event(&event, after).unwrap());
    }

    #[test]
    fn test_upcoming_event_without_end_date() {
        let event = Publication::default();
        assert!(matches!(
            upcoming_event(&event, Utc::now()),
            Err(ViewError::MissingField { field: "end_date", .. })
        ));
    }

    #[test]
    fn test_parse_to_local_time_applies_bst() {
        let event = make_event("2014-07-01T09:00:00Z", "2014-07-01T17:00:00Z");
        let local = parse_to_local_time(&event, chrono_tz::Europe::London).unwrap();
        assert_eq!(local.format("%H:%M %Z").to_string(), "10:00 BST");
    }
}
