//! Selection criteria deciding which candidates reach the pending queue.
//!
//! Leaves are stateless apart from `ImportanceRange`'s bounds; `AllOf` is the
//! composite and can be reshaped at runtime. Criteria (de)serialize as an
//! externally tagged enum so a config file can describe the whole tree:
//!
//! ```toml
//! criterion = { all_of = ["sensationalist", { importance_range = { min = 5, max = 10 } }] }
//! ```

use serde::{Deserialize, Serialize};

use crate::news::News;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    /// The authoring journalist's current preference likes the piece.
    JournalistLikes,
    /// The piece is sensationalist.
    Sensationalist,
    /// Importance within `[min, max]`, both inclusive.
    ImportanceRange { min: i32, max: i32 },
    /// Every child matches (vacuously true when empty).
    AllOf(AllOf),
}

impl Criterion {
    pub fn importance_range(min: i32, max: i32) -> Self {
        Criterion::ImportanceRange { min, max }
    }

    pub fn all_of(children: impl IntoIterator<Item = Criterion>) -> Self {
        Criterion::AllOf(AllOf::new(children))
    }

    pub fn matches(&self, news: &News) -> bool {
        match self {
            Criterion::JournalistLikes => news.journalist().borrow().likes(news),
            Criterion::Sensationalist => news.is_sensationalist(),
            Criterion::ImportanceRange { min, max } => (*min..=*max).contains(&news.importance()),
            Criterion::AllOf(all) => all.matches(news),
        }
    }
}

/// Ordered conjunction of child criteria.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllOf {
    children: Vec<Criterion>,
}

impl AllOf {
    pub fn new(children: impl IntoIterator<Item = Criterion>) -> Self {
        Self {
            children: children.into_iter().collect(),
        }
    }

    /// Children are evaluated in insertion order; stops at the first miss.
    pub fn matches(&self, news: &News) -> bool {
        self.children.iter().all(|c| c.matches(news))
    }

    pub fn add_child(&mut self, child: Criterion) {
        self.children.push(child);
    }

    /// Removes the first child equal to `child`. Returns whether one was removed;
    /// an absent child is a no-op.
    pub fn remove_child(&mut self, child: &Criterion) -> bool {
        match self.children.iter().position(|c| c == child) {
            Some(idx) => {
                self.children.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn children(&self) -> &[Criterion] {
        &self.children
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
