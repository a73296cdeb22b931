//! Transport that only logs, used when no real channel is configured.

use anyhow::Result;

use super::dashboard::{DashboardInfo, DashboardTransport};
use super::mail::{Mail, MailSender};

#[derive(Debug, Clone, Copy, Default)]
pub struct LogTransport;

impl MailSender for LogTransport {
    fn send_mail(&self, mail: &Mail) -> Result<()> {
        tracing::info!(
            from = %mail.from,
            to = %mail.to,
            subject = %mail.subject,
            body = %mail.body,
            "mail (log only)"
        );
        Ok(())
    }
}

impl DashboardTransport for LogTransport {
    fn send(&self, info: &DashboardInfo) -> Result<()> {
        let payload = serde_json::to_string(info)?;
        tracing::info!(title = %info.title, items = info.items.len(), %payload, "dashboard (log only)");
        Ok(())
    }
}
