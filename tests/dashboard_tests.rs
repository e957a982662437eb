//! Integration tests for dashboard views and report rendering

use chrono::{DateTime, TimeZone, Utc};
use connect_analytics::dashboard::{build_view, CardBody, Tab, TabContent, ViewRequest};
use connect_analytics::filter::{CustomRange, DateFilter, DayWindow};
use connect_analytics::fixtures::Fixture;
use connect_analytics::report::{
    HtmlReporter, MarkdownReporter, ReportContext, ReportGenerator,
};
use connect_analytics::tier::{DashboardContext, Tier, UPGRADE_BANNER};
use std::fs;
use tempfile::TempDir;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

fn cards(content: &TabContent) -> &[connect_analytics::dashboard::RenderedCard] {
    match content {
        TabContent::Charts(cards) => cards,
        other => panic!("expected chart cards, got {other:?}"),
    }
}

#[test]
fn free_session_tab_mixes_open_and_paywalled_cards() {
    let fixture = Fixture::generate(now(), 4);
    let view = build_view(
        &fixture,
        &DashboardContext::default(),
        &ViewRequest::new(Tab::Session),
        now(),
    );

    assert_eq!(view.banner, Some(UPGRADE_BANNER));
    let cards = cards(&view.content);
    assert_eq!(cards.len(), 8);
    let paywalled: Vec<&str> = cards
        .iter()
        .filter(|c| c.is_paywalled())
        .map(|c| c.title.as_str())
        .collect();
    assert_eq!(
        paywalled,
        vec![
            "Connection Channel Distribution",
            "Social Connection Types",
            "Connection Success Rate by Channel",
            "Connection Drop-off Points",
        ]
    );
}

#[test]
fn pro_view_has_no_banner_or_paywalls() {
    let fixture = Fixture::generate(now(), 4);
    let ctx = DashboardContext::new(Tier::Pro, true);
    for tab in [Tab::Session, Tab::UserBehavior, Tab::Advanced, Tab::Swaps] {
        let view = build_view(&fixture, &ctx, &ViewRequest::new(tab), now());
        assert!(view.banner.is_none());
        assert!(cards(&view.content).iter().all(|c| !c.is_paywalled()));
    }
}

#[test]
fn swaps_filter_applies_to_every_dated_card() {
    let fixture = Fixture::generate(now(), 4);
    let ctx = DashboardContext::new(Tier::Pro, true);
    let request = ViewRequest::new(Tab::Swaps).with_filter(DateFilter::LastNDays(DayWindow::Sixty));
    let view = build_view(&fixture, &ctx, &request, now());

    for card in cards(&view.content) {
        if let CardBody::Data(table) = &card.body {
            if table.columns[0] == "Date" {
                assert_eq!(table.rows.len(), 61, "{}", card.title);
            }
        }
    }
}

#[test]
fn users_tab_uses_page_size_and_filter() {
    let fixture = Fixture::generate(now(), 4);
    let ctx = DashboardContext::new(Tier::Pro, false);
    let request = ViewRequest::new(Tab::Users)
        .with_filter(DateFilter::Custom(CustomRange::new(
            Some(now() - chrono::Duration::days(365)),
            Some(now()),
        )))
        .with_page(2)
        .with_page_size(40);
    let view = build_view(&fixture, &ctx, &request, now());

    let TabContent::Users(page) = &view.content else {
        panic!("expected users page");
    };
    assert_eq!(page.total_users, 100);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.table.rows.len(), 40);
    assert_eq!(page.summary(), "Showing 41 to 80 of 100 users");
}

#[test]
fn markdown_report_renders_view() {
    let fixture = Fixture::generate(now(), 4);
    let view = build_view(
        &fixture,
        &DashboardContext::default(),
        &ViewRequest::new(Tab::Swaps),
        now(),
    );
    let ctx = ReportContext::new(&view, fixture.seed);
    let markdown = MarkdownReporter::new().render(&ctx).expect("render");

    assert!(markdown.starts_with("# Connect Analytics (Free): Swaps"));
    assert!(markdown.contains("Swaps Not Enabled"));
    assert!(markdown.contains(UPGRADE_BANNER));
    assert!(!markdown.contains("{{"));
}

#[test]
fn html_report_is_written_to_file() {
    let fixture = Fixture::generate(now(), 4);
    let view = build_view(
        &fixture,
        &DashboardContext::default(),
        &ViewRequest::new(Tab::UserBehavior),
        now(),
    );
    let ctx = ReportContext::new(&view, fixture.seed);
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("user.html");

    HtmlReporter::new().generate(&ctx, &path).expect("generate");
    let html = fs::read_to_string(&path).expect("read report");
    assert!(html.contains("<title>Connect Analytics (Free): User Behavior</title>"));
    assert!(html.contains("Want to know more about feature usage analysis? Upgrade to Pro"));
    assert!(!html.contains("{{"));
}

#[test]
fn metrics_report_lists_catalog() {
    let fixture = Fixture::generate(now(), 4);
    let view = build_view(
        &fixture,
        &DashboardContext::default(),
        &ViewRequest::new(Tab::Metrics),
        now(),
    );
    let ctx = ReportContext::new(&view, fixture.seed);
    let markdown = MarkdownReporter::new().render(&ctx).expect("render");
    assert!(markdown.contains("| Date filter | n/a |"));
    assert!(markdown.contains("| Session Metrics | Daily Sessions |"));
}
