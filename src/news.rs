//! News items and their classification rules.
//!
//! Every kind supplies the two primitive hooks (`is_notable`, `has_sensational_kind`)
//! plus `is_special`; everything else is derived from those and the shared fields:
//!
//! - noteworthy     = notable ∧ new ∧ important
//! - sensationalist = sensational title ∧ sensational kind
//! - important      = importance ≥ 8, moderately important = importance in 5..=7

use std::rc::Rc;

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::journalist::JournalistRef;

/// Words that make a title sensational (matched case-insensitively, as substrings).
pub const SENSATIONAL_WORDS: [&str; 3] = ["espectacular", "increible", "grandioso"];

/// The only interviewee whose interviews count as sensational.
pub const CELEBRITY: &str = "Dibu Martinez";

pub const DEFAULT_SCOOP_THRESHOLD: f64 = 2_000_000.0;

/// A piece younger than this many days is "new".
const NEW_WINDOW_DAYS: i64 = 3;

/// Kind-specific data of a news item.
#[derive(Debug, Clone, PartialEq)]
pub enum NewsKind {
    Article {
        links: Vec<String>,
    },
    Scoop {
        cost: f64,
        threshold: f64,
    },
    Interview {
        interviewee: String,
        is_musician: bool,
    },
}

impl NewsKind {
    pub fn article<I, S>(links: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        NewsKind::Article {
            links: links.into_iter().map(Into::into).collect(),
        }
    }

    pub fn scoop(cost: f64) -> Self {
        Self::scoop_with_threshold(cost, DEFAULT_SCOOP_THRESHOLD)
    }

    pub fn scoop_with_threshold(cost: f64, threshold: f64) -> Self {
        NewsKind::Scoop { cost, threshold }
    }

    pub fn interview(interviewee: impl Into<String>, is_musician: bool) -> Self {
        NewsKind::Interview {
            interviewee: interviewee.into(),
            is_musician,
        }
    }

    /// Kind code used when none is given explicitly.
    pub fn default_code(&self) -> &'static str {
        match self {
            NewsKind::Article { .. } => "02",
            NewsKind::Scoop { .. } => "01",
            NewsKind::Interview { .. } => "R",
        }
    }

    fn is_notable(&self) -> bool {
        match self {
            NewsKind::Article { links } => links.len() >= 2,
            NewsKind::Scoop { cost, threshold } => cost > threshold,
            // odd number of characters, not letters
            NewsKind::Interview { interviewee, .. } => interviewee.chars().count() % 2 != 0,
        }
    }

    fn is_sensational(&self) -> bool {
        match self {
            NewsKind::Article { .. } | NewsKind::Scoop { .. } => true,
            NewsKind::Interview { interviewee, .. } => interviewee == CELEBRITY,
        }
    }

    fn is_special(&self) -> bool {
        match self {
            NewsKind::Article { .. } => false,
            NewsKind::Scoop { .. } => self.is_notable(),
            NewsKind::Interview { is_musician, .. } => *is_musician,
        }
    }
}

/// Dashboard priority derived from importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    /// important (≥ 8)
    A,
    /// moderately important (5..=7)
    M,
    /// everything else
    C,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Priority::A => "A",
            Priority::M => "M",
            Priority::C => "C",
        }
    }
}

#[derive(Debug, Clone)]
pub struct News {
    code: String,
    published_on: NaiveDate,
    journalist: JournalistRef,
    contact_email: String,
    importance: i32,
    title: String,
    body: String,
    kind: NewsKind,
}

impl News {
    /// Starts a news item with empty title/body, importance 0 and the kind's default code.
    pub fn new(kind: NewsKind, journalist: JournalistRef, published_on: NaiveDate) -> Self {
        Self {
            code: kind.default_code().to_string(),
            published_on,
            journalist,
            contact_email: String::new(),
            importance: 0,
            title: String::new(),
            body: String::new(),
            kind,
        }
    }

    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn with_contact_email(mut self, email: impl Into<String>) -> Self {
        self.contact_email = email.into();
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    // --- accessors ---

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn published_on(&self) -> NaiveDate {
        self.published_on
    }

    pub fn journalist(&self) -> &JournalistRef {
        &self.journalist
    }

    /// Convenience: the author's name (borrows the journalist briefly).
    pub fn journalist_name(&self) -> String {
        self.journalist.borrow().name().to_string()
    }

    pub fn contact_email(&self) -> &str {
        &self.contact_email
    }

    pub fn importance(&self) -> i32 {
        self.importance
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn kind(&self) -> &NewsKind {
        &self.kind
    }

    pub fn set_importance(&mut self, importance: i32) {
        self.importance = importance;
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn set_body(&mut self, body: impl Into<String>) {
        self.body = body.into();
    }

    // --- classification ---

    /// Whole days between publication and `today` (negative for future dates).
    pub fn days_since_published(&self, today: NaiveDate) -> i64 {
        (today - self.published_on).num_days()
    }

    pub fn is_new_at(&self, today: NaiveDate) -> bool {
        self.days_since_published(today) < NEW_WINDOW_DAYS
    }

    pub fn is_new(&self) -> bool {
        self.is_new_at(today())
    }

    pub fn is_important(&self) -> bool {
        self.importance >= 8
    }

    pub fn is_moderately_important(&self) -> bool {
        (5..=7).contains(&self.importance)
    }

    pub fn is_notable(&self) -> bool {
        self.kind.is_notable()
    }

    pub fn has_sensational_kind(&self) -> bool {
        self.kind.is_sensational()
    }

    pub fn is_special(&self) -> bool {
        self.kind.is_special()
    }

    pub fn has_sensational_title(&self) -> bool {
        let title = self.title.to_lowercase();
        SENSATIONAL_WORDS.iter().any(|w| title.contains(w))
    }

    pub fn is_noteworthy_at(&self, today: NaiveDate) -> bool {
        self.is_important() && self.is_new_at(today) && self.is_notable()
    }

    pub fn is_noteworthy(&self) -> bool {
        self.is_noteworthy_at(today())
    }

    pub fn is_sensationalist(&self) -> bool {
        self.has_sensational_title() && self.has_sensational_kind()
    }

    pub fn priority(&self) -> Priority {
        if self.is_important() {
            Priority::A
        } else if self.is_moderately_important() {
            Priority::M
        } else {
            Priority::C
        }
    }

    /// Whitespace-delimited word count of the body.
    pub fn word_count(&self) -> usize {
        self.body.split_whitespace().count()
    }
}

/// Field equality; the journalist is compared by handle identity.
impl PartialEq for News {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
            && self.published_on == other.published_on
            && Rc::ptr_eq(&self.journalist, &other.journalist)
            && self.contact_email == other.contact_email
            && self.importance == other.importance
            && self.title == other.title
            && self.body == other.body
            && self.kind == other.kind
    }
}

/// Local calendar date used by the date-dependent predicates.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
