//! Publication lifecycle: filtered intake into a pending queue, then
//! confirmation into an immutable `Publication` fanned out to observers.

use chrono::NaiveDate;
use metrics::{counter, gauge};
use tracing::{debug, info, warn};

use crate::criteria::Criterion;
use crate::error::{PublishError, Result};
use crate::news::{today, News};
use crate::notify::{ObserverId, PublicationObserver};
use crate::telemetry;

/// Snapshot of the news confirmed in one cycle. Never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    date: NaiveDate,
    news: Vec<News>,
}

impl Publication {
    fn new(date: NaiveDate, news: Vec<News>) -> Self {
        Self { date, news }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn news(&self) -> &[News] {
        &self.news
    }

    pub fn len(&self) -> usize {
        self.news.len()
    }

    pub fn is_empty(&self) -> bool {
        self.news.is_empty()
    }

    pub fn into_news(self) -> Vec<News> {
        self.news
    }
}

/// Owns the active criterion, the pending queue and the registered observers.
/// The queue survives across cycles; only `confirm` drains it.
pub struct PublicationManager {
    criterion: Option<Criterion>,
    pending: Vec<News>,
    observers: Vec<(ObserverId, Box<dyn PublicationObserver>)>,
    next_observer_id: u64,
}

impl Default for PublicationManager {
    fn default() -> Self {
        Self::new()
    }
}

impl PublicationManager {
    pub fn new() -> Self {
        telemetry::ensure_metrics_described();
        Self {
            criterion: None,
            pending: Vec::new(),
            observers: Vec::new(),
            next_observer_id: 0,
        }
    }

    /// Builder style: start with a criterion already set.
    pub fn with_criterion(mut self, criterion: Criterion) -> Self {
        self.criterion = Some(criterion);
        self
    }

    /// Replaces the active criterion; applies from the next `generate`.
    pub fn set_criterion(&mut self, criterion: Criterion) {
        debug!(?criterion, "selection criterion changed");
        self.criterion = Some(criterion);
    }

    pub fn criterion(&self) -> Option<&Criterion> {
        self.criterion.as_ref()
    }

    /// Mutable access, e.g. to add or remove children of an `AllOf`.
    pub fn criterion_mut(&mut self) -> Option<&mut Criterion> {
        self.criterion.as_mut()
    }

    pub fn pending(&self) -> &[News] {
        &self.pending
    }

    /// Queues every candidate the active criterion matches, in order; the rest
    /// are dropped. Returns how many were queued.
    pub fn generate(&mut self, candidates: impl IntoIterator<Item = News>) -> Result<usize> {
        let criterion = self.criterion.as_ref().ok_or(PublishError::CriterionNotSet)?;

        let mut accepted = 0usize;
        let mut dropped = 0usize;
        for news in candidates {
            if criterion.matches(&news) {
                debug!(code = news.code(), title = news.title(), "candidate accepted");
                self.pending.push(news);
                accepted += 1;
            } else {
                debug!(code = news.code(), title = news.title(), "candidate dropped");
                dropped += 1;
            }
        }

        counter!(telemetry::CANDIDATES_TOTAL).increment((accepted + dropped) as u64);
        counter!(telemetry::ACCEPTED_TOTAL).increment(accepted as u64);
        counter!(telemetry::DROPPED_TOTAL).increment(dropped as u64);
        gauge!(telemetry::PENDING_NEWS).set(self.pending.len() as f64);

        Ok(accepted)
    }

    /// Confirms the pending queue as of today. See [`Self::confirm_on`].
    pub fn confirm(&mut self) -> Result<Publication> {
        self.confirm_on(today())
    }

    /// Builds the publication from the pending queue, notifies every observer
    /// in registration order and leaves the queue empty.
    ///
    /// If an observer fails, the remaining observers are skipped and the error
    /// names the failing observer and carries the batch. The queue stays drained:
    /// observers that ran before it (payment included) are not rolled back, so
    /// re-queuing the batch would notify them twice.
    pub fn confirm_on(&mut self, date: NaiveDate) -> Result<Publication> {
        let publication = Publication::new(date, std::mem::take(&mut self.pending));

        let failure = self.observers.iter().find_map(|(_, observer)| {
            observer
                .notify(publication.news())
                .err()
                .map(|e| (observer.name(), e))
        });

        if let Some((observer, source)) = failure {
            let batch = publication.into_news();
            warn!(observer, batch_len = batch.len(), error = ?source, "observer failed, publication not confirmed");
            counter!(telemetry::OBSERVER_ERRORS_TOTAL).increment(1);
            gauge!(telemetry::PENDING_NEWS).set(self.pending.len() as f64);
            return Err(PublishError::Observer {
                observer,
                batch,
                source,
            });
        }

        info!(%date, news = publication.len(), observers = self.observers.len(), "publication confirmed");
        counter!(telemetry::CYCLES_TOTAL).increment(1);
        counter!(telemetry::CONFIRMED_NEWS_TOTAL).increment(publication.len() as u64);
        gauge!(telemetry::PENDING_NEWS).set(self.pending.len() as f64);

        Ok(publication)
    }

    /// Queues a news item directly, bypassing the criterion.
    pub fn add_news(&mut self, news: News) {
        self.pending.push(news);
        gauge!(telemetry::PENDING_NEWS).set(self.pending.len() as f64);
    }

    /// Removes the first pending item equal to `news`; no-op when absent.
    pub fn remove_news(&mut self, news: &News) -> bool {
        let Some(idx) = self.pending.iter().position(|n| n == news) else {
            return false;
        };
        self.pending.remove(idx);
        gauge!(telemetry::PENDING_NEWS).set(self.pending.len() as f64);
        true
    }

    pub fn add_observer(&mut self, observer: Box<dyn PublicationObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer_id);
        self.next_observer_id += 1;
        debug!(observer = observer.name(), ?id, "observer registered");
        self.observers.push((id, observer));
        id
    }

    /// Removes the observer registered under `id`; no-op when absent.
    pub fn remove_observer(&mut self, id: ObserverId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(oid, _)| *oid != id);
        before != self.observers.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }
}
