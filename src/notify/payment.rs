use anyhow::{Context, Result};

use super::PublicationObserver;
use crate::config::PaymentConfig;
use crate::news::News;

/// Pays the author of every confirmed piece, once per piece.
#[derive(Debug, Clone, Default)]
pub struct PaymentObserver {
    cfg: PaymentConfig,
}

impl PaymentObserver {
    /// Invalid amounts in `cfg` are replaced by the defaults up front, so a
    /// batch is never left half paid because of the configuration.
    pub fn new(cfg: PaymentConfig) -> Self {
        Self {
            cfg: cfg.sanitized(),
        }
    }

    /// Bonus strictly above `min_words`, base payment otherwise.
    pub fn payment_for(&self, news: &News) -> f64 {
        if news.word_count() > self.cfg.min_words {
            self.cfg.bonus
        } else {
            self.cfg.base
        }
    }
}

impl PublicationObserver for PaymentObserver {
    fn name(&self) -> &'static str {
        "payment"
    }

    fn notify(&self, confirmed: &[News]) -> Result<()> {
        for news in confirmed {
            let amount = self.payment_for(news);
            news.journalist()
                .borrow_mut()
                .credit(amount)
                .with_context(|| format!("paying for \"{}\"", news.title()))?;
        }
        Ok(())
    }
}
