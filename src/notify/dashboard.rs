use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::PublicationObserver;
use crate::config::DashboardConfig;
use crate::news::{News, Priority};

/// Flat, serializable view of one news item for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecord {
    pub code: String,
    pub body: String,
    pub journalist_name: String,
    pub priority: Priority,
}

impl From<&News> for TransferRecord {
    fn from(news: &News) -> Self {
        Self {
            code: news.code().to_string(),
            body: news.body().to_string(),
            journalist_name: news.journalist_name(),
            priority: news.priority(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardInfo {
    pub title: String,
    pub items: Vec<TransferRecord>,
}

/// Outbound dashboard transport. Receives the whole batch in one call.
pub trait DashboardTransport {
    fn send(&self, info: &DashboardInfo) -> Result<()>;
}

pub struct DashboardObserver {
    transport: Box<dyn DashboardTransport>,
    title: String,
}

impl DashboardObserver {
    pub fn new(transport: Box<dyn DashboardTransport>, cfg: &DashboardConfig) -> Self {
        Self {
            transport,
            title: cfg.title.clone(),
        }
    }

    /// One record per news item, in batch order.
    pub fn build_records(confirmed: &[News]) -> Vec<TransferRecord> {
        confirmed.iter().map(TransferRecord::from).collect()
    }
}

impl PublicationObserver for DashboardObserver {
    fn name(&self) -> &'static str {
        "dashboard"
    }

    fn notify(&self, confirmed: &[News]) -> Result<()> {
        let info = DashboardInfo {
            title: self.title.clone(),
            items: Self::build_records(confirmed),
        };
        self.transport
            .send(&info)
            .context("sending batch to dashboard")
    }
}
