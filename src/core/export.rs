//! CSV export of dashboard records
//!
//! The header row is the plain column names joined with commas. Every data
//! field is written as a JSON string literal, so quotes and backslashes are
//! escaped the JSON way. Lines are joined with `\n` without a trailing
//! newline; an empty record set produces the header row alone.

use crate::core::filter::{filter_records_at, DateFilter};
use crate::core::models::{MetricDefinition, User};
use crate::core::tier::{DashboardContext, UPGRADE_FEATURE_MESSAGE};
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A record that can be written as one CSV row
pub trait CsvRecord {
    /// Column names, in field order
    const HEADERS: &'static [&'static str];

    /// Field values for this record, one per header
    fn fields(&self) -> Vec<String>;
}

impl CsvRecord for User {
    const HEADERS: &'static [&'static str] = &[
        "Name",
        "Identifier",
        "Connection Type",
        "First Connected",
        "Last Connected",
        "Status",
    ];

    fn fields(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            self.identifier.clone(),
            self.connection_type.to_string(),
            self.first_connected_display(),
            self.last_connected_display(),
            self.status.to_string(),
        ]
    }
}

impl CsvRecord for MetricDefinition {
    const HEADERS: &'static [&'static str] =
        &["Category", "Metric", "Explanation", "Visualization", "Tier"];

    fn fields(&self) -> Vec<String> {
        vec![
            self.category.display_name(),
            self.name.to_string(),
            self.explanation.to_string(),
            self.visualization.to_string(),
            self.tier.to_string(),
        ]
    }
}

/// What to export
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportKind {
    /// Filtered users table
    #[default]
    Users,
    /// Metric definitions catalog
    Metrics,
}

impl ExportKind {
    /// Default file name for an export created at `now`
    #[must_use]
    pub fn default_filename(self, now: DateTime<Utc>) -> String {
        let prefix = match self {
            Self::Users => "users",
            Self::Metrics => "metrics",
        };
        format!("{prefix}_export_{}.csv", now.format("%Y-%m-%d"))
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "users" => Ok(Self::Users),
            "metrics" => Ok(Self::Metrics),
            _ => Err(format!("Unknown export: '{s}' (expected users or metrics)")),
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Users => write!(f, "users"),
            Self::Metrics => write!(f, "metrics"),
        }
    }
}

/// Quote a field as a JSON string literal
#[must_use]
pub fn quote_field(value: &str) -> String {
    serde_json::Value::String(value.to_string()).to_string()
}

/// Render records as CSV text
#[must_use]
pub fn to_csv<T: CsvRecord>(records: &[T]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(T::HEADERS.join(","));
    for record in records {
        let row: Vec<String> = record.fields().iter().map(|f| quote_field(f)).collect();
        lines.push(row.join(","));
    }
    lines.join("\n")
}

/// Write records as CSV to `output_path`, creating parent directories.
///
/// Returns the number of data rows written.
///
/// # Errors
/// Returns an error if the directory or file cannot be written.
pub fn export_csv<T: CsvRecord, P: AsRef<Path>>(
    records: &[T],
    output_path: P,
) -> Result<usize, Box<dyn Error>> {
    let output_path = output_path.as_ref();
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(output_path, to_csv(records))?;
    crate::debug!(
        "Wrote {} CSV rows to {}",
        records.len(),
        output_path.display()
    );
    Ok(records.len())
}

/// Users matching `filter` at `now`, refused for tiers without export.
///
/// The filter is first downgraded to what the tier allows.
///
/// # Errors
/// Returns the upgrade message if the context cannot export.
pub fn exportable_users(
    users: &[User],
    ctx: &DashboardContext,
    filter: &DateFilter,
    now: DateTime<Utc>,
) -> Result<Vec<User>, String> {
    if !ctx.can_export() {
        return Err(UPGRADE_FEATURE_MESSAGE.to_string());
    }
    Ok(filter_records_at(users, &ctx.effective_filter(filter), now))
}

/// Export the filtered users table
///
/// # Errors
/// Returns an error if the tier cannot export or the file cannot be written.
pub fn export_users<P: AsRef<Path>>(
    users: &[User],
    ctx: &DashboardContext,
    filter: &DateFilter,
    now: DateTime<Utc>,
    output_path: P,
) -> Result<usize, Box<dyn Error>> {
    let records = exportable_users(users, ctx, filter, now)?;
    export_csv(&records, output_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fixtures::metric_catalog;
    use crate::core::models::{ConnectionType, UserStatus};
    use crate::core::tier::Tier;
    use chrono::TimeZone;

    fn user(name: &str) -> User {
        User {
            id: "user-1".to_string(),
            name: name.to_string(),
            connection_type: ConnectionType::Metamask,
            identifier: "0x52908400098527886E0F7030069857D2E4169EE7".to_string(),
            first_connected: Utc.with_ymd_and_hms(2024, 1, 5, 10, 0, 0).unwrap(),
            last_connected: Utc.with_ymd_and_hms(2024, 3, 1, 8, 30, 0).unwrap(),
            status: UserStatus::Active,
        }
    }

    #[test]
    fn empty_export_is_header_only() {
        let csv = to_csv::<User>(&[]);
        assert_eq!(
            csv,
            "Name,Identifier,Connection Type,First Connected,Last Connected,Status"
        );
    }

    #[test]
    fn fields_are_json_quoted() {
        let csv = to_csv(&[user("Ada \"The\" Admin")]);
        let lines: Vec<&str> = csv.split('\n').collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            r#""Ada \"The\" Admin","0x52908400098527886E0F7030069857D2E4169EE7","metamask","Jan 5, 2024","Mar 1, 2024","active""#
        );
        assert!(!csv.ends_with('\n'));
    }

    #[test]
    fn commas_and_backslashes_stay_inside_fields() {
        assert_eq!(quote_field("a,b"), "\"a,b\"");
        assert_eq!(quote_field("C:\\x"), "\"C:\\\\x\"");
    }

    #[test]
    fn metrics_export_has_one_row_per_definition() {
        let catalog = metric_catalog();
        let csv = to_csv(&catalog);
        assert_eq!(csv.lines().count(), catalog.len() + 1);
        assert!(csv.starts_with("Category,Metric,Explanation,Visualization,Tier\n"));
        assert!(csv.contains("\"Session Metrics\",\"Daily Sessions\""));
    }

    #[test]
    fn free_tier_cannot_export_users() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 0, 0, 0).unwrap();
        let free = DashboardContext::new(Tier::Free, false);
        assert_eq!(
            exportable_users(&[user("A")], &free, &DateFilter::AllTime, now),
            Err(UPGRADE_FEATURE_MESSAGE.to_string())
        );

        let pro = DashboardContext::new(Tier::Pro, false);
        assert_eq!(
            exportable_users(&[user("A")], &pro, &DateFilter::AllTime, now)
                .map(|u| u.len()),
            Ok(1)
        );
    }

    #[test]
    fn default_filename_uses_date() {
        let now = Utc.with_ymd_and_hms(2024, 3, 10, 15, 0, 0).unwrap();
        assert_eq!(
            ExportKind::Users.default_filename(now),
            "users_export_2024-03-10.csv"
        );
        assert_eq!("METRICS".parse::<ExportKind>(), Ok(ExportKind::Metrics));
    }
}
