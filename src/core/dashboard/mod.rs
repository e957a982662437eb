//! Dashboard views
//!
//! A [`DashboardView`] is the data behind one tab: header metadata, the
//! upgrade banner, the applied filter and the tab content. Views are built
//! from a [`Fixture`] and an explicit [`DashboardContext`]; nothing here
//! mutates the fixture.

pub mod cards;
pub mod users;

pub use cards::{CardBody, ChartCard, ChartKind, DataTable, RenderedCard};
pub use users::{paginate_users, UsersPage};

use crate::core::config::DEFAULT_PAGE_SIZE;
use crate::core::filter::DateFilter;
use crate::core::fixtures::Fixture;
use crate::core::tier::{DashboardContext, Tier};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;

/// Dashboard title shown in view headers
pub const DASHBOARD_TITLE: &str = "Connect Analytics";

/// Notice shown on the swaps tab while swap analytics are disabled
pub const SWAPS_DISABLED_TITLE: &str = "Swaps Not Enabled";

/// Hint shown under [`SWAPS_DISABLED_TITLE`]
pub const SWAPS_DISABLED_HINT: &str =
    "Enable swaps in your project settings to view swap analytics.";

/// Dashboard tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Session and connection charts
    Session,
    /// User behaviour charts
    UserBehavior,
    /// Chain, technical and advanced charts
    Advanced,
    /// Swap charts
    Swaps,
    /// Metric definitions table
    Metrics,
    /// Users table
    Users,
}

impl Tab {
    /// All tabs in display order
    pub const ALL: [Self; 6] = [
        Self::Session,
        Self::UserBehavior,
        Self::Advanced,
        Self::Swaps,
        Self::Metrics,
        Self::Users,
    ];

    /// Tab label
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Session => "Session",
            Self::UserBehavior => "User Behavior",
            Self::Advanced => "Advanced",
            Self::Swaps => "Swaps",
            Self::Metrics => "Metrics",
            Self::Users => "Users",
        }
    }

    /// Command-line name of the tab
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Session => "session",
            Self::UserBehavior => "user",
            Self::Advanced => "advanced",
            Self::Swaps => "swaps",
            Self::Metrics => "metrics",
            Self::Users => "users",
        }
    }

    /// Whether the date filter applies to this tab
    #[must_use]
    pub const fn is_filterable(self) -> bool {
        !matches!(self, Self::Metrics)
    }
}

impl FromStr for Tab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "session" | "sessions" => Ok(Self::Session),
            "user" | "user-behavior" | "behavior" => Ok(Self::UserBehavior),
            "advanced" => Ok(Self::Advanced),
            "swaps" | "swap" => Ok(Self::Swaps),
            "metrics" => Ok(Self::Metrics),
            "users" => Ok(Self::Users),
            _ => Err(format!(
                "Unknown tab: '{s}' (expected session, user, advanced, swaps, metrics or users)"
            )),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// What to show
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewRequest {
    /// Selected tab
    pub tab: Tab,
    /// Requested date filter (may be downgraded by the tier)
    pub filter: DateFilter,
    /// 1-based users page
    pub page: usize,
    /// Rows per users page
    pub page_size: usize,
}

impl ViewRequest {
    /// Request a tab with no filter, first page
    #[must_use]
    pub const fn new(tab: Tab) -> Self {
        Self {
            tab,
            filter: DateFilter::AllTime,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the date filter
    #[must_use]
    pub fn with_filter(mut self, filter: DateFilter) -> Self {
        self.filter = filter;
        self
    }

    /// Set the users page
    #[must_use]
    pub const fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Set the users page size
    #[must_use]
    pub const fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }
}

/// Tab content
#[derive(Debug, Clone, PartialEq)]
pub enum TabContent {
    /// Chart cards after gating
    Charts(Vec<RenderedCard>),
    /// Swap analytics are disabled for this project
    SwapsDisabled,
    /// Metric definitions
    Metrics(DataTable),
    /// Page of the users table
    Users(UsersPage),
}

/// Everything needed to present one tab
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    /// Shown tab
    pub tab: Tab,
    /// Active tier
    pub tier: Tier,
    /// Upgrade banner (Free only)
    pub banner: Option<&'static str>,
    /// Filter actually applied
    pub filter: DateFilter,
    /// Set when a requested filter was replaced because of the tier
    pub filter_notice: Option<&'static str>,
    /// Instant the filter was resolved against
    pub generated_at: DateTime<Utc>,
    /// Tab content
    pub content: TabContent,
}

impl DashboardView {
    /// Header line, e.g. `Connect Analytics (Pro)`
    #[must_use]
    pub fn heading(&self) -> String {
        format!("{DASHBOARD_TITLE} ({})", self.tier)
    }

    /// Applied filter label, `None` for tabs that are not filtered
    #[must_use]
    pub fn filter_label(&self) -> Option<String> {
        self.tab.is_filterable().then(|| self.filter.label())
    }
}

/// Build the view for a tab.
///
/// Dated series and users are filtered against `now` with the filter the
/// context allows; categorical data is shown unfiltered.
#[must_use]
pub fn build_view(
    fixture: &Fixture,
    ctx: &DashboardContext,
    request: &ViewRequest,
    now: DateTime<Utc>,
) -> DashboardView {
    let filter = ctx.effective_filter(&request.filter);
    let filter_notice = (filter != request.filter)
        .then_some(crate::core::tier::UPGRADE_CUSTOM_RANGE_MESSAGE);

    crate::debug!(
        "Building {} view ({} tier, filter: {})",
        request.tab,
        ctx.tier,
        filter
    );

    let content = match request.tab {
        Tab::Session => charts(ctx, cards::session_cards(&fixture.analytics, &filter, now)),
        Tab::UserBehavior => charts(
            ctx,
            cards::user_behavior_cards(&fixture.analytics, &filter, now),
        ),
        Tab::Advanced => charts(ctx, cards::advanced_cards(&fixture.analytics)),
        Tab::Swaps if !ctx.swaps_enabled => TabContent::SwapsDisabled,
        Tab::Swaps => charts(ctx, cards::swap_cards(&fixture.analytics, &filter, now)),
        Tab::Metrics => TabContent::Metrics(cards::metrics_table(&fixture.metrics)),
        Tab::Users => TabContent::Users(paginate_users(
            &fixture.users,
            &filter,
            now,
            request.page,
            request.page_size,
            ctx,
        )),
    };

    DashboardView {
        tab: request.tab,
        tier: ctx.tier,
        banner: ctx.banner(),
        filter,
        filter_notice,
        generated_at: now,
        content,
    }
}

fn charts(ctx: &DashboardContext, cards: Vec<ChartCard>) -> TabContent {
    TabContent::Charts(cards.into_iter().filter_map(|c| c.render(ctx)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::{CustomRange, DayWindow};
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn tab_parses_cli_names() {
        for tab in Tab::ALL {
            assert_eq!(tab.key().parse::<Tab>(), Ok(tab));
        }
        assert!("billing".parse::<Tab>().is_err());
    }

    #[test]
    fn swaps_tab_respects_context_flag() {
        let fixture = Fixture::generate(now(), 3);
        let request = ViewRequest::new(Tab::Swaps);

        let mut ctx = DashboardContext::new(Tier::Pro, false);
        let view = build_view(&fixture, &ctx, &request, now());
        assert_eq!(view.content, TabContent::SwapsDisabled);

        ctx.enable_swaps();
        let view = build_view(&fixture, &ctx, &request, now());
        assert!(matches!(view.content, TabContent::Charts(ref c) if c.len() == 5));
    }

    #[test]
    fn free_custom_range_is_reported() {
        let fixture = Fixture::generate(now(), 3);
        let request = ViewRequest::new(Tab::Session)
            .with_filter(DateFilter::Custom(CustomRange::new(Some(now()), Some(now()))));

        let free = build_view(&fixture, &DashboardContext::default(), &request, now());
        assert_eq!(free.filter, DateFilter::AllTime);
        assert!(free.filter_notice.is_some());

        let pro_ctx = DashboardContext::new(Tier::Pro, false);
        let pro = build_view(&fixture, &pro_ctx, &request, now());
        assert_eq!(pro.filter, request.filter);
        assert!(pro.filter_notice.is_none());
    }

    #[test]
    fn metrics_tab_has_no_filter_label() {
        let fixture = Fixture::generate(now(), 3);
        let request =
            ViewRequest::new(Tab::Metrics).with_filter(DateFilter::LastNDays(DayWindow::Thirty));
        let view = build_view(&fixture, &DashboardContext::default(), &request, now());
        assert_eq!(view.filter_label(), None);
        assert_eq!(view.heading(), "Connect Analytics (Free)");
    }
}
