//! Date-range filtering shared by every dated chart and table.
//!
//! A [`DateFilter`] is resolved against a single "now" into a [`Window`] and
//! records whose [`Timestamped::timestamp`] falls inside the window are kept,
//! in their original order. Instants are compared directly; no timezone
//! normalisation happens here.

use crate::core::models::Timestamped;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use std::fmt;
use std::str::FromStr;

/// Preset "last N days" windows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayWindow {
    /// Last 30 days
    Thirty,
    /// Last 60 days
    Sixty,
    /// Last 90 days
    Ninety,
}

impl DayWindow {
    /// Length of the window in days
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Thirty => 30,
            Self::Sixty => 60,
            Self::Ninety => 90,
        }
    }

    /// Map a day count onto a preset window
    #[must_use]
    pub const fn from_days(days: i64) -> Option<Self> {
        match days {
            30 => Some(Self::Thirty),
            60 => Some(Self::Sixty),
            90 => Some(Self::Ninety),
            _ => None,
        }
    }
}

/// Custom start/end pair. Either bound may be missing; `start <= end` is
/// not enforced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CustomRange {
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub end: Option<DateTime<Utc>>,
}

impl CustomRange {
    /// Create a range from optional bounds
    #[must_use]
    pub const fn new(start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> Self {
        Self { start, end }
    }

    /// Both bounds set
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }
}

/// Filter selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DateFilter {
    /// No filtering
    #[default]
    AllTime,
    /// Records from the last N days
    LastNDays(DayWindow),
    /// Records inside an explicit inclusive range
    Custom(CustomRange),
}

/// A filter resolved against a fixed instant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Everything passes
    Unbounded,
    /// `timestamp >= cutoff`
    Since(DateTime<Utc>),
    /// `start <= timestamp <= end`
    Between(DateTime<Utc>, DateTime<Utc>),
}

impl Window {
    /// Whether an instant lies inside the window
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        match *self {
            Self::Unbounded => true,
            Self::Since(cutoff) => ts >= cutoff,
            Self::Between(start, end) => start <= ts && ts <= end,
        }
    }
}

impl DateFilter {
    /// Parse a selector as used on the command line.
    ///
    /// `selector` is one of `all`, `30`, `60`, `90` or `custom`. Bounds are
    /// only read for `custom` and accept `YYYY-MM-DD` (UTC midnight) or
    /// RFC 3339.
    ///
    /// # Errors
    /// Returns an error for an unknown selector or an unparsable bound.
    pub fn parse(selector: &str, start: Option<&str>, end: Option<&str>) -> Result<Self, String> {
        match selector.trim().to_ascii_lowercase().as_str() {
            "all" | "all-time" => Ok(Self::AllTime),
            "custom" => {
                let start = start.map(parse_instant).transpose()?;
                let end = end.map(parse_instant).transpose()?;
                Ok(Self::Custom(CustomRange::new(start, end)))
            }
            other => other
                .parse::<i64>()
                .ok()
                .and_then(DayWindow::from_days)
                .map(Self::LastNDays)
                .ok_or_else(|| {
                    format!("Unknown date filter: '{selector}' (expected all, 30, 60, 90 or custom)")
                }),
        }
    }

    /// Resolve this selection into a concrete window at `now`.
    ///
    /// A custom range with a missing bound resolves to [`Window::Unbounded`].
    #[must_use]
    pub fn resolve(&self, now: DateTime<Utc>) -> Window {
        match self {
            Self::AllTime => Window::Unbounded,
            Self::LastNDays(window) => Window::Since(now - Duration::days(window.days())),
            Self::Custom(CustomRange {
                start: Some(start),
                end: Some(end),
            }) => Window::Between(*start, *end),
            Self::Custom(_) => Window::Unbounded,
        }
    }

    /// Short label used in view headers
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::AllTime => "All Time".to_string(),
            Self::LastNDays(window) => format!("{} Days", window.days()),
            Self::Custom(range) => {
                let fmt_bound = |b: Option<DateTime<Utc>>| {
                    b.map_or_else(|| "…".to_string(), |d| d.format("%Y-%m-%d").to_string())
                };
                format!(
                    "Custom Range ({} to {})",
                    fmt_bound(range.start),
                    fmt_bound(range.end)
                )
            }
        }
    }
}

impl FromStr for DateFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, None, None)
    }
}

impl fmt::Display for DateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}

/// Parse a date bound: `YYYY-MM-DD` is taken as UTC midnight, anything else
/// must be RFC 3339.
///
/// # Errors
/// Returns an error if the value matches neither format.
pub fn parse_instant(value: &str) -> Result<DateTime<Utc>, String> {
    let value = value.trim();
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc());
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| format!("Invalid date '{value}': {e}"))
}

/// Filter records against an explicit "now".
///
/// Order is preserved; no error is raised for empty input, empty output or
/// inverted custom ranges.
#[must_use]
pub fn filter_records_at<T>(records: &[T], filter: &DateFilter, now: DateTime<Utc>) -> Vec<T>
where
    T: Timestamped + Clone,
{
    let window = filter.resolve(now);
    if window == Window::Unbounded {
        return records.to_vec();
    }
    records
        .iter()
        .filter(|record| window.contains(record.timestamp()))
        .cloned()
        .collect()
}

/// Filter records, reading the clock once for this call
#[must_use]
pub fn filter_records<T>(records: &[T], filter: &DateFilter) -> Vec<T>
where
    T: Timestamped + Clone,
{
    filter_records_at(records, filter, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[derive(Debug, Clone, PartialEq)]
    struct Sample(DateTime<Utc>);

    impl Timestamped for Sample {
        fn timestamp(&self) -> DateTime<Utc> {
            self.0
        }
    }

    fn day(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    fn samples() -> Vec<Sample> {
        vec![
            Sample(day(2024, 1, 1)),
            Sample(day(2024, 2, 15)),
            Sample(day(2024, 3, 1)),
        ]
    }

    #[test]
    fn all_time_is_identity() {
        let records = samples();
        assert_eq!(
            filter_records_at(&records, &DateFilter::AllTime, day(2024, 3, 10)),
            records
        );
    }

    #[test]
    fn last_thirty_days_example() {
        let result = filter_records_at(
            &samples(),
            &DateFilter::LastNDays(DayWindow::Thirty),
            day(2024, 3, 10),
        );
        assert_eq!(result, vec![Sample(day(2024, 2, 15)), Sample(day(2024, 3, 1))]);
    }

    #[test]
    fn cutoff_is_inclusive() {
        let now = Utc.with_ymd_and_hms(2024, 3, 31, 12, 0, 0).unwrap();
        let at_cutoff = Sample(now - Duration::days(30));
        let just_before = Sample(now - Duration::days(30) - Duration::seconds(1));
        let result = filter_records_at(
            &[just_before, at_cutoff.clone()],
            &DateFilter::LastNDays(DayWindow::Thirty),
            now,
        );
        assert_eq!(result, vec![at_cutoff]);
    }

    #[test]
    fn custom_range_is_inclusive_on_both_ends() {
        let range = DateFilter::Custom(CustomRange::new(
            Some(day(2024, 2, 15)),
            Some(day(2024, 3, 1)),
        ));
        let result = filter_records_at(&samples(), &range, day(2024, 3, 10));
        assert_eq!(result, vec![Sample(day(2024, 2, 15)), Sample(day(2024, 3, 1))]);
    }

    #[test]
    fn custom_range_with_missing_bound_returns_everything() {
        let now = day(2024, 3, 10);
        let open_end = DateFilter::Custom(CustomRange::new(Some(day(2024, 2, 1)), None));
        let open_start = DateFilter::Custom(CustomRange::new(None, Some(day(2024, 2, 1))));
        assert_eq!(filter_records_at(&samples(), &open_end, now), samples());
        assert_eq!(filter_records_at(&samples(), &open_start, now), samples());
    }

    #[test]
    fn inverted_range_yields_nothing() {
        let inverted = DateFilter::Custom(CustomRange::new(
            Some(day(2024, 3, 1)),
            Some(day(2024, 1, 1)),
        ));
        assert!(filter_records_at(&samples(), &inverted, day(2024, 3, 10)).is_empty());
    }

    #[test]
    fn empty_input_is_fine() {
        let empty: Vec<Sample> = Vec::new();
        let filter = DateFilter::LastNDays(DayWindow::Ninety);
        assert!(filter_records_at(&empty, &filter, day(2024, 3, 10)).is_empty());
    }

    #[test]
    fn parses_selectors() {
        assert_eq!("all".parse::<DateFilter>(), Ok(DateFilter::AllTime));
        assert_eq!(
            "60".parse::<DateFilter>(),
            Ok(DateFilter::LastNDays(DayWindow::Sixty))
        );
        assert!("45".parse::<DateFilter>().is_err());
        assert!("yesterday".parse::<DateFilter>().is_err());

        let custom = DateFilter::parse("custom", Some("2024-02-01"), None).unwrap();
        assert_eq!(
            custom,
            DateFilter::Custom(CustomRange::new(Some(day(2024, 2, 1)), None))
        );
        assert!(DateFilter::parse("custom", Some("02/01/2024"), None).is_err());
    }

    #[test]
    fn parse_instant_accepts_rfc3339() {
        let parsed = parse_instant("2024-02-01T10:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2024, 2, 1, 8, 30, 0).unwrap());
    }

    #[test]
    fn labels() {
        assert_eq!(DateFilter::AllTime.label(), "All Time");
        assert_eq!(DateFilter::LastNDays(DayWindow::Ninety).label(), "90 Days");
        assert_eq!(
            DateFilter::Custom(CustomRange::new(Some(day(2024, 2, 1)), None)).label(),
            "Custom Range (2024-02-01 to …)"
        );
    }
}
