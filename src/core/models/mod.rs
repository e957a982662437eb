//! Data models for `connect-analytics`
//!
//! Entity shapes are independent of each other; the only thing they share is
//! the [`Timestamped`] contract used by date-range filtering.

pub mod metric;
pub mod series;
pub mod user;

pub use metric::{MetricCategory, MetricDefinition};
pub use series::{
    CohortRow, CompatibilityCell, DatedValue, ForecastPoint, GasPoint, LabeledValue,
    SegmentDetails, SwapPoint, TierComparison, TierPoint,
};
pub use user::{ConnectionGroup, ConnectionType, User, UserStatus};

use chrono::{DateTime, NaiveDate, Utc};

/// A record carrying the single instant used for date filtering
pub trait Timestamped {
    /// The instant compared against the filter window
    fn timestamp(&self) -> DateTime<Utc>;
}

/// Calendar dates are compared as UTC midnight
#[must_use]
pub fn midnight_utc(date: NaiveDate) -> DateTime<Utc> {
    date.and_hms_opt(0, 0, 0).unwrap_or_default().and_utc()
}

/// Format an instant the way the dashboard tables do (`Mar 5, 2024`)
#[must_use]
pub fn display_date(ts: DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}
