//! Metric names for the publication cycle. The library only records; installing
//! an exporter is up to the host application.

use metrics::{describe_counter, describe_gauge};
use once_cell::sync::OnceCell;

pub const CANDIDATES_TOTAL: &str = "publish_candidates_total";
pub const ACCEPTED_TOTAL: &str = "publish_accepted_total";
pub const DROPPED_TOTAL: &str = "publish_dropped_total";
pub const CONFIRMED_NEWS_TOTAL: &str = "publish_confirmed_news_total";
pub const CYCLES_TOTAL: &str = "publish_cycles_total";
pub const OBSERVER_ERRORS_TOTAL: &str = "publish_observer_errors_total";
pub const PENDING_NEWS: &str = "publish_pending_news";

/// One-time metrics registration (so series show up once a recorder is installed).
pub fn ensure_metrics_described() {
    static ONCE: OnceCell<()> = OnceCell::new();
    ONCE.get_or_init(|| {
        describe_counter!(CANDIDATES_TOTAL, "Candidates offered to generate().");
        describe_counter!(ACCEPTED_TOTAL, "Candidates matching the active criterion.");
        describe_counter!(DROPPED_TOTAL, "Candidates rejected by the active criterion.");
        describe_counter!(CONFIRMED_NEWS_TOTAL, "News included in confirmed publications.");
        describe_counter!(CYCLES_TOTAL, "Completed confirmation cycles.");
        describe_counter!(
            OBSERVER_ERRORS_TOTAL,
            "Observer failures that aborted a confirmation."
        );
        describe_gauge!(PENDING_NEWS, "News waiting for confirmation.");
    });
}
