//! Event date formatting
//!
//! Dates display in the `en-US` long form, e.g.
//! `"March 4, 2025 at 03:30 PM"`, in the viewer's timezone.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt;

/// Shown for anything that does not parse
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%B %-d, %Y at %I:%M %p";

/// Timestamps carrying an explicit offset
const OFFSET_FORMATS: [&str; 3] = [
    "%Y-%m-%d %H:%M:%S%.f%:z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
];

/// Wall-clock timestamps, read in the viewer's timezone
const LOCAL_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse a backend timestamp.
///
/// RFC 3339 and other offset-carrying forms are absolute. Date-time forms
/// without an offset are wall-clock time in `tz`. A bare date is midnight
/// UTC.
pub fn parse_event_date<Tz: TimeZone>(raw: &str, tz: &Tz) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for fmt in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(raw, fmt) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    for fmt in LOCAL_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return resolve_local(&naive, tz).map(|dt| dt.with_timezone(&Utc));
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| Utc.from_utc_datetime(&naive))
}

/// Wall-clock time in `tz`. Ambiguous times take the earlier instant; times
/// skipped by a DST jump are moved forward by an hour, as browsers do.
fn resolve_local<Tz: TimeZone>(naive: &NaiveDateTime, tz: &Tz) -> Option<DateTime<Tz>> {
    tz.from_local_datetime(naive).earliest().or_else(|| {
        let shifted = naive.checked_add_signed(Duration::hours(1))?;
        tz.from_local_datetime(&shifted).earliest()
    })
}

/// Format a backend timestamp for display in `tz`
pub fn format_event_date_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    match parse_event_date(raw, tz) {
        Some(dt) => dt.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Format a backend timestamp for display in the local timezone
pub fn format_event_date(raw: &str) -> String {
    format_event_date_in(raw, &Local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult};

    fn east(hours: i32) -> FixedOffset {
        FixedOffset::east_opt(hours * 3600).unwrap()
    }

    /// UTC+0 until 2025-03-30 01:00 UTC, UTC+1 after; local 01:00-02:00
    /// that day does not exist
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn switch() -> NaiveDateTime {
            NaiveDate::from_ymd_opt(2025, 3, 30)
                .unwrap()
                .and_hms_opt(1, 0, 0)
                .unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_offset: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &NaiveDate) -> LocalResult<FixedOffset> {
            self.offset_from_local_datetime(&local.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_end = Self::switch() + Duration::hours(1);
            if *local < Self::switch() {
                LocalResult::Single(east(0))
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(east(1))
            }
        }

        fn offset_from_utc_date(&self, utc: &NaiveDate) -> FixedOffset {
            self.offset_from_utc_datetime(&utc.and_hms_opt(0, 0, 0).unwrap())
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            if *utc < Self::switch() {
                east(0)
            } else {
                east(1)
            }
        }
    }

    #[test]
    fn test_rfc3339_in_utc() {
        assert_eq!(
            format_event_date_in("2025-03-04T15:30:00Z", &Utc),
            "March 4, 2025 at 03:30 PM"
        );
        assert_eq!(
            format_event_date_in("2025-11-20T09:05:12.123456+00:00", &Utc),
            "November 20, 2025 at 09:05 AM"
        );
    }

    #[test]
    fn test_converts_to_viewer_timezone() {
        assert_eq!(
            format_event_date_in("2025-03-04T15:30:00Z", &east(-5)),
            "March 4, 2025 at 10:30 AM"
        );
        assert_eq!(
            format_event_date_in("2025-03-04T23:30:00Z", &east(2)),
            "March 5, 2025 at 01:30 AM"
        );
    }

    #[test]
    fn test_midnight_is_twelve_am() {
        assert_eq!(
            format_event_date_in("2024-01-01T00:05:00Z", &Utc),
            "January 1, 2024 at 12:05 AM"
        );
    }

    #[test]
    fn test_naive_datetime_is_wall_clock() {
        assert_eq!(
            format_event_date_in("2025-03-04T09:05:00", &east(2)),
            "March 4, 2025 at 09:05 AM"
        );
        assert_eq!(
            format_event_date_in("2025-03-04 18:45", &east(-7)),
            "March 4, 2025 at 06:45 PM"
        );
    }

    #[test]
    fn test_time_in_dst_gap_moves_forward() {
        assert_eq!(
            format_event_date_in("2025-03-30T01:30:00", &SpringForward),
            "March 30, 2025 at 02:30 AM"
        );
        assert_eq!(
            format_event_date_in("2025-03-30T00:30:00", &SpringForward),
            "March 30, 2025 at 12:30 AM"
        );
        assert_eq!(
            format_event_date_in("2025-03-30T03:00:00", &SpringForward),
            "March 30, 2025 at 03:00 AM"
        );
    }

    #[test]
    fn test_bare_date_is_utc_midnight() {
        assert_eq!(
            format_event_date_in("2025-03-04", &east(-5)),
            "March 3, 2025 at 07:00 PM"
        );
    }

    #[test]
    fn test_offset_without_colon() {
        assert_eq!(
            format_event_date_in("2025-03-04T15:30:00+0100", &Utc),
            "March 4, 2025 at 02:30 PM"
        );
    }

    #[test]
    fn test_invalid_inputs() {
        assert_eq!(format_event_date_in("", &Utc), INVALID_DATE);
        assert_eq!(format_event_date_in("   ", &Utc), INVALID_DATE);
        assert_eq!(format_event_date_in("yesterday", &Utc), INVALID_DATE);
        assert_eq!(format_event_date_in("2025-13-40", &Utc), INVALID_DATE);
    }
}
