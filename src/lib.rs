// src/lib.rs
// Public library surface for the demo binary and integration tests.

pub mod config;
pub mod criteria;
pub mod error;
pub mod journalist;
pub mod news;
pub mod notify;
pub mod preference;
pub mod publication;
pub mod telemetry;

// ---- Re-exports for stable public API ----
pub use crate::criteria::{AllOf, Criterion};
pub use crate::error::PublishError;
pub use crate::journalist::{Journalist, JournalistRef};
pub use crate::news::{News, NewsKind, Priority};
pub use crate::notify::{ObserverId, PublicationObserver};
pub use crate::preference::Preference;
pub use crate::publication::{Publication, PublicationManager};
