//! Paginated users table

use super::cards::DataTable;
use crate::core::filter::{filter_records_at, DateFilter};
use crate::core::models::User;
use crate::core::tier::{DashboardContext, UPGRADE_FEATURE_MESSAGE};
use chrono::{DateTime, Utc};

/// One page of the users table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersPage {
    /// Rows on this page
    pub table: DataTable,
    /// Current page after clamping (1-based)
    pub page: usize,
    /// Number of pages, at least 1
    pub total_pages: usize,
    /// Users matching the filter
    pub total_users: usize,
    /// Rows per page
    pub page_size: usize,
    /// Whether the export action is available
    pub can_export: bool,
    /// Message shown in place of the export action
    pub export_notice: Option<&'static str>,
}

impl UsersPage {
    /// 1-based index of the first row shown, 0 when there are no rows
    #[must_use]
    pub const fn first_index(&self) -> usize {
        if self.total_users == 0 {
            0
        } else {
            (self.page - 1) * self.page_size + 1
        }
    }

    /// 1-based index of the last row shown
    #[must_use]
    pub fn last_index(&self) -> usize {
        (self.page * self.page_size).min(self.total_users)
    }

    /// `Showing A to B of N users`
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Showing {} to {} of {} users",
            self.first_index(),
            self.last_index(),
            self.total_users
        )
    }

    /// Whether a previous page exists
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }

    /// Whether a next page exists
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Filter users by last connection and cut out one page.
///
/// `page` is clamped to `[1, total_pages]`; a zero `page_size` is treated as 1.
#[must_use]
pub fn paginate_users(
    users: &[User],
    filter: &DateFilter,
    now: DateTime<Utc>,
    page: usize,
    page_size: usize,
    ctx: &DashboardContext,
) -> UsersPage {
    let page_size = page_size.max(1);
    let filtered = filter_records_at(users, filter, now);
    let total_users = filtered.len();
    let total_pages = total_users.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);

    let mut table = DataTable::new(&[
        "Name",
        "Identifier",
        "Connection Type",
        "First Connected",
        "Last Connected",
        "Status",
    ]);
    for user in filtered.iter().skip((page - 1) * page_size).take(page_size) {
        table.push_row(vec![
            user.name.clone(),
            user.display_identifier(),
            user.connection_type.label(),
            user.first_connected_display(),
            user.last_connected_display(),
            user.status.to_string(),
        ]);
    }

    let can_export = ctx.can_export();
    UsersPage {
        table,
        page,
        total_pages,
        total_users,
        page_size,
        can_export,
        export_notice: (!can_export).then_some(UPGRADE_FEATURE_MESSAGE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filter::CustomRange;
    use crate::core::fixtures::Fixture;
    use crate::core::tier::Tier;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn pages_through_all_users() {
        let fixture = Fixture::generate(now(), 11);
        let ctx = DashboardContext::default();
        let first = paginate_users(&fixture.users, &DateFilter::AllTime, now(), 1, 15, &ctx);
        assert_eq!(first.total_users, 100);
        assert_eq!(first.total_pages, 7);
        assert_eq!(first.table.rows.len(), 15);
        assert_eq!(first.summary(), "Showing 1 to 15 of 100 users");
        assert!(!first.has_previous());

        let last = paginate_users(&fixture.users, &DateFilter::AllTime, now(), 7, 15, &ctx);
        assert_eq!(last.table.rows.len(), 10);
        assert_eq!(last.summary(), "Showing 91 to 100 of 100 users");
        assert!(!last.has_next());
    }

    #[test]
    fn page_is_clamped() {
        let fixture = Fixture::generate(now(), 11);
        let ctx = DashboardContext::default();
        let page = paginate_users(&fixture.users, &DateFilter::AllTime, now(), 99, 15, &ctx);
        assert_eq!(page.page, 7);
        let page = paginate_users(&fixture.users, &DateFilter::AllTime, now(), 0, 15, &ctx);
        assert_eq!(page.page, 1);
    }

    #[test]
    fn empty_result_reads_zero_to_zero() {
        let fixture = Fixture::generate(now(), 11);
        let inverted = DateFilter::Custom(CustomRange::new(
            Some(now()),
            Some(now() - chrono::Duration::days(1)),
        ));
        let page = paginate_users(
            &fixture.users,
            &inverted,
            now(),
            3,
            15,
            &DashboardContext::new(Tier::Pro, false),
        );
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.page, 1);
        assert!(page.table.is_empty());
        assert_eq!(page.summary(), "Showing 0 to 0 of 0 users");
    }

    #[test]
    fn export_notice_only_for_free() {
        let fixture = Fixture::generate(now(), 11);
        let free = paginate_users(
            &fixture.users,
            &DateFilter::AllTime,
            now(),
            1,
            15,
            &DashboardContext::default(),
        );
        assert_eq!(free.export_notice, Some(UPGRADE_FEATURE_MESSAGE));

        let pro = paginate_users(
            &fixture.users,
            &DateFilter::AllTime,
            now(),
            1,
            15,
            &DashboardContext::new(Tier::Pro, false),
        );
        assert!(pro.can_export);
        assert_eq!(pro.export_notice, None);
    }
}
