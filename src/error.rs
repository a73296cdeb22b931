//! Errors surfaced by the publication pipeline.

use thiserror::Error;

use crate::news::News;

#[derive(Debug, Error)]
pub enum PublishError {
    /// `generate` was called before any selection criterion was configured.
    #[error("no selection criterion configured; call set_criterion first")]
    CriterionNotSet,

    /// An observer (or the transport behind it) failed while handling a batch.
    /// The batch is handed back here and is no longer pending.
    #[error("observer `{observer}` failed on a batch of {} news", .batch.len())]
    Observer {
        observer: &'static str,
        batch: Vec<News>,
        #[source]
        source: anyhow::Error,
    },
}

impl PublishError {
    /// The unconfirmed batch of an observer failure.
    pub fn into_batch(self) -> Option<Vec<News>> {
        match self {
            PublishError::Observer { batch, .. } => Some(batch),
            PublishError::CriterionNotSet => None,
        }
    }
}

/// Credits must be finite and non-negative.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid credit amount: {amount}")]
pub struct InvalidCredit {
    pub amount: f64,
}

pub type Result<T> = std::result::Result<T, PublishError>;
