use anyhow::{Context, Result};
use reqwest::blocking::Client;
use std::time::Duration;

use super::dashboard::{DashboardInfo, DashboardTransport};

/// Posts the dashboard record as JSON to a webhook.
pub struct WebhookDashboard {
    url: String,
    client: Client,
    timeout: Duration,
}

impl WebhookDashboard {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: Client::new(),
            timeout: Duration::from_secs(5),
        }
    }

    /// `None` when `DASHBOARD_WEBHOOK_URL` is unset or blank.
    pub fn from_env() -> Option<Self> {
        std::env::var("DASHBOARD_WEBHOOK_URL")
            .ok()
            .filter(|u| !u.trim().is_empty())
            .map(Self::new)
    }
}

impl DashboardTransport for WebhookDashboard {
    fn send(&self, info: &DashboardInfo) -> Result<()> {
        self.client
            .post(&self.url)
            .timeout(self.timeout)
            .json(info)
            .send()
            .context("dashboard post")?
            .error_for_status()
            .context("dashboard non-2xx")?;
        tracing::info!(items = info.items.len(), "dashboard batch delivered");
        Ok(())
    }
}
