use anyhow::{Context, Result};
use lettre::message::{header, Mailbox, Message};
use lettre::transport::smtp::{authentication::Credentials, SmtpTransport};
use lettre::Transport;

use super::mail::{Mail, MailSender};

/// Blocking SMTP relay.
pub struct SmtpMailSender {
    mailer: SmtpTransport,
}

impl SmtpMailSender {
    pub fn new(host: &str, user: String, pass: String) -> Result<Self> {
        let creds = Credentials::new(user, pass);
        let mailer = SmtpTransport::relay(host)
            .with_context(|| format!("invalid SMTP host {host}"))?
            .credentials(creds)
            .build();
        Ok(Self { mailer })
    }

    /// `None` when `SMTP_HOST` is unset; an error when it is set but the
    /// credentials are missing.
    pub fn from_env() -> Result<Option<Self>> {
        let Ok(host) = std::env::var("SMTP_HOST") else {
            return Ok(None);
        };
        let user = std::env::var("SMTP_USER").context("SMTP_USER missing")?;
        let pass = std::env::var("SMTP_PASS").context("SMTP_PASS missing")?;
        Self::new(&host, user, pass).map(Some)
    }
}

impl MailSender for SmtpMailSender {
    fn send_mail(&self, mail: &Mail) -> Result<()> {
        let from: Mailbox = mail
            .from
            .parse()
            .with_context(|| format!("invalid sender address {}", mail.from))?;
        let to: Mailbox = mail
            .to
            .parse()
            .with_context(|| format!("invalid recipient address {}", mail.to))?;

        let msg = Message::builder()
            .from(from)
            .to(to)
            .subject(mail.subject.clone())
            .header(header::ContentType::TEXT_PLAIN)
            .body(mail.body.clone())
            .context("build email")?;

        self.mailer.send(&msg).context("send email")?;
        tracing::info!(to = %mail.to, subject = %mail.subject, "mail sent");
        Ok(())
    }
}
