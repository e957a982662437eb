//! Integration tests for CSV export

use chrono::{Duration, TimeZone, Utc};
use connect_analytics::export::{export_csv, export_users, to_csv, CsvRecord, ExportKind};
use connect_analytics::filter::{DateFilter, DayWindow};
use connect_analytics::fixtures::Fixture;
use connect_analytics::models::User;
use connect_analytics::tier::{DashboardContext, Tier, UPGRADE_FEATURE_MESSAGE};
use std::fs;
use tempfile::TempDir;

fn fixture() -> Fixture {
    Fixture::generate(Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(), 8)
}

#[test]
fn pro_users_export_writes_filtered_rows() {
    let fixture = fixture();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("out").join("users.csv");
    let filter = DateFilter::LastNDays(DayWindow::Thirty);
    let cutoff = fixture.generated_at - Duration::days(30);

    let rows = export_users(
        &fixture.users,
        &DashboardContext::new(Tier::Pro, false),
        &filter,
        fixture.generated_at,
        &path,
    )
    .expect("export users");

    let expected = fixture
        .users
        .iter()
        .filter(|u| u.last_connected >= cutoff)
        .count();
    assert_eq!(rows, expected);

    let content = fs::read_to_string(&path).expect("read csv");
    let lines: Vec<&str> = content.split('\n').collect();
    assert_eq!(lines.len(), expected + 1);
    assert_eq!(lines[0], User::HEADERS.join(","));
    assert!(lines[1..].iter().all(|l| l.starts_with("\"User ")));
}

#[test]
fn users_export_keeps_full_wallet_identifier() {
    let fixture = fixture();
    let wallet_user = fixture
        .users
        .iter()
        .find(|u| u.connection_type.is_wallet())
        .expect("fixture has wallet users")
        .clone();
    let csv = to_csv(&[wallet_user.clone()]);
    assert!(csv.contains(&format!("\"{}\"", wallet_user.identifier)));
    assert!(!csv.contains("..."));
}

#[test]
fn free_users_export_is_refused_without_writing() {
    let fixture = fixture();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("users.csv");

    let err = export_users(
        &fixture.users,
        &DashboardContext::new(Tier::Free, false),
        &DateFilter::AllTime,
        fixture.generated_at,
        &path,
    )
    .expect_err("free tier cannot export");
    assert_eq!(err.to_string(), UPGRADE_FEATURE_MESSAGE);
    assert!(!path.exists());
}

#[test]
fn empty_filter_result_writes_header_only() {
    let fixture = fixture();
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("empty.csv");
    let future = DateFilter::parse("custom", Some("2030-01-01"), Some("2030-12-31")).unwrap();

    let rows = export_users(
        &fixture.users,
        &DashboardContext::new(Tier::Pro, false),
        &future,
        fixture.generated_at,
        &path,
    )
    .expect("export users");
    assert_eq!(rows, 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Name,Identifier,Connection Type,First Connected,Last Connected,Status"
    );
}

#[test]
fn metrics_export_covers_catalog() {
    let fixture = fixture();
    let dir = TempDir::new().expect("temp dir");
    let path = dir
        .path()
        .join(ExportKind::Metrics.default_filename(fixture.generated_at));

    let rows = export_csv(&fixture.metrics, &path).expect("export metrics");
    assert_eq!(rows, fixture.metrics.len());
    assert!(path.ends_with("metrics_export_2024-06-01.csv"));

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"Swap Metrics\""));
    assert!(content.contains("\"Pro\""));
}
