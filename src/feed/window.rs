use chrono::{Duration, NaiveDate, Utc};
use serde::Serialize;
use utoipa::ToSchema;

/// Contiguous calendar-date range over which observations are requested.
///
/// The feed accepts at most a 7-day span; range limits are enforced at the
/// API boundary, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, ToSchema)]
pub struct FeedWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl FeedWindow {
    pub fn new(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
        }
    }

    /// Window of `days` calendar days ending today (UTC), the dashboard's
    /// slider semantics: 1 day means today only.
    pub fn ending_today(days: u32) -> Self {
        let today = Utc::now().date_naive();
        Self {
            start_date: today - Duration::days(days.saturating_sub(1) as i64),
            end_date: today,
        }
    }

    pub fn span_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}
