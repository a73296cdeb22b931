//! What a journalist likes to see published.

use serde::{Deserialize, Serialize};

use crate::news::News;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    /// Likes noteworthy news (notable, new and important).
    Noteworthy,
    /// Likes sensationalist news.
    Sensationalist,
    /// Likes anything whose title starts with an uppercase `T`.
    StartsWithT,
}

impl Preference {
    pub fn likes(self, news: &News) -> bool {
        match self {
            Preference::Noteworthy => news.is_noteworthy(),
            Preference::Sensationalist => news.is_sensationalist(),
            // empty title never matches
            Preference::StartsWithT => news.title().starts_with('T'),
        }
    }
}
