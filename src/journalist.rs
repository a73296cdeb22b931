//! Journalists: who wrote a piece, what they like, and how much they've been paid.

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDate;

use crate::error::InvalidCredit;
use crate::news::News;
use crate::preference::Preference;

/// Shared handle to a journalist. News items hold one of these; the
/// payment observer credits through it.
pub type JournalistRef = Rc<RefCell<Journalist>>;

#[derive(Debug, Clone, PartialEq)]
pub struct Journalist {
    hired_on: NaiveDate,
    name: String,
    preference: Preference,
    balance: f64,
}

impl Journalist {
    pub fn new(hired_on: NaiveDate, name: impl Into<String>, preference: Preference) -> Self {
        Self {
            hired_on,
            name: name.into(),
            preference,
            balance: 0.0,
        }
    }

    /// Wraps the journalist into the shared handle news items expect.
    pub fn into_ref(self) -> JournalistRef {
        Rc::new(RefCell::new(self))
    }

    pub fn hired_on(&self) -> NaiveDate {
        self.hired_on
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn balance(&self) -> f64 {
        self.balance
    }

    pub fn preference(&self) -> Preference {
        self.preference
    }

    /// Takes effect on the next `likes` call.
    pub fn set_preference(&mut self, preference: Preference) {
        self.preference = preference;
    }

    pub fn likes(&self, news: &News) -> bool {
        self.preference.likes(news)
    }

    /// Adds `amount` to the balance and returns the new balance.
    /// Negative or non-finite amounts are rejected and leave the balance untouched.
    pub fn credit(&mut self, amount: f64) -> Result<f64, InvalidCredit> {
        if !amount.is_finite() || amount < 0.0 {
            return Err(InvalidCredit { amount });
        }
        self.balance += amount;
        tracing::debug!(journalist = %self.name, amount, balance = self.balance, "credited");
        Ok(self.balance)
    }
}
