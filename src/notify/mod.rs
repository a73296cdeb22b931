//! Observers reacting to confirmed publications, and the transports behind them.

pub mod dashboard;
pub mod email;
pub mod log;
pub mod mail;
pub mod payment;
pub mod webhook;

use anyhow::Result;

use crate::config::PublishingConfig;
use crate::news::News;

pub use dashboard::{DashboardInfo, DashboardObserver, DashboardTransport, TransferRecord};
pub use mail::{Mail, MailObserver, MailSender};
pub use payment::PaymentObserver;

/// Invoked once per confirmation with the whole confirmed batch.
pub trait PublicationObserver {
    /// Short stable name, used in logs and errors.
    fn name(&self) -> &'static str;

    fn notify(&self, confirmed: &[News]) -> Result<()>;
}

/// Handle returned by `PublicationManager::add_observer`, used to remove it again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(pub(crate) u64);

/// Build the standard observer set: payment, mail and dashboard.
/// Mail goes over SMTP when `SMTP_HOST` is set, dashboard over a webhook when
/// `DASHBOARD_WEBHOOK_URL` is set; otherwise both are only logged.
pub fn observers_from_env(cfg: &PublishingConfig) -> Result<Vec<Box<dyn PublicationObserver>>> {
    let mail_sender: Box<dyn MailSender> = match email::SmtpMailSender::from_env()? {
        Some(smtp) => Box::new(smtp),
        None => {
            tracing::debug!("SMTP disabled (no SMTP_HOST), logging mails instead");
            Box::new(log::LogTransport)
        }
    };

    let transport: Box<dyn DashboardTransport> = match webhook::WebhookDashboard::from_env() {
        Some(hook) => Box::new(hook),
        None => {
            tracing::debug!("dashboard webhook disabled (no DASHBOARD_WEBHOOK_URL)");
            Box::new(log::LogTransport)
        }
    };

    Ok(vec![
        Box::new(PaymentObserver::new(cfg.payment.clone())),
        Box::new(MailObserver::new(mail_sender, &cfg.mail)),
        Box::new(DashboardObserver::new(transport, &cfg.dashboard)),
    ])
}
