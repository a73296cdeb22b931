use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::PublicationObserver;
use crate::config::MailConfig;
use crate::news::News;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Outbound mail transport.
pub trait MailSender {
    fn send_mail(&self, mail: &Mail) -> Result<()>;
}

/// Mails the editor about every special piece in a batch.
pub struct MailObserver {
    sender: Box<dyn MailSender>,
    editor_address: String,
    subject: String,
}

impl MailObserver {
    pub fn new(sender: Box<dyn MailSender>, cfg: &MailConfig) -> Self {
        Self {
            sender,
            editor_address: cfg.editor_address.clone(),
            subject: cfg.subject.clone(),
        }
    }

    pub fn mail_for(&self, news: &News) -> Mail {
        Mail {
            from: news.contact_email().to_string(),
            to: self.editor_address.clone(),
            subject: self.subject.clone(),
            body: format!(
                "This is a special news item: {} written by {}.",
                news.title(),
                news.journalist_name()
            ),
        }
    }
}

impl PublicationObserver for MailObserver {
    fn name(&self) -> &'static str {
        "mail"
    }

    fn notify(&self, confirmed: &[News]) -> Result<()> {
        for news in confirmed.iter().filter(|n| n.is_special()) {
            let mail = self.mail_for(news);
            self.sender
                .send_mail(&mail)
                .with_context(|| format!("mailing special news \"{}\"", news.title()))?;
        }
        Ok(())
    }
}
