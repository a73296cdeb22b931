// src/config/publishing.rs
use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::criteria::Criterion;
use crate::news::{NewsKind, DEFAULT_SCOOP_THRESHOLD};

pub const ENV_CONFIG_PATH: &str = "PUBLISHING_CONFIG_PATH";
const DEFAULT_TOML_PATH: &str = "config/publishing.toml";
const DEFAULT_JSON_PATH: &str = "config/publishing.json";

fn default_min_words() -> usize {
    1000
}
fn default_base_payment() -> f64 {
    50_000.0
}
fn default_bonus_payment() -> f64 {
    75_000.0
}
fn default_editor_address() -> String {
    "editor@newsroom.local".to_string()
}
fn default_mail_subject() -> String {
    "Special news".to_string()
}
fn default_dashboard_title() -> String {
    "News to publish:".to_string()
}
fn default_scoop_threshold() -> f64 {
    DEFAULT_SCOOP_THRESHOLD
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Bodies with strictly more words than this earn the bonus payment.
    #[serde(default = "default_min_words")]
    pub min_words: usize,
    #[serde(default = "default_base_payment")]
    pub base: f64,
    #[serde(default = "default_bonus_payment")]
    pub bonus: f64,
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            min_words: default_min_words(),
            base: default_base_payment(),
            bonus: default_bonus_payment(),
        }
    }
}

impl PaymentConfig {
    /// Negative or non-finite amounts fall back to the defaults.
    pub fn sanitized(mut self) -> Self {
        if invalid_amount(self.base) {
            tracing::warn!(value = self.base, "invalid base payment, using default");
            self.base = default_base_payment();
        }
        if invalid_amount(self.bonus) {
            tracing::warn!(value = self.bonus, "invalid bonus payment, using default");
            self.bonus = default_bonus_payment();
        }
        self
    }
}

fn invalid_amount(x: f64) -> bool {
    !x.is_finite() || x < 0.0
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MailConfig {
    #[serde(default = "default_editor_address")]
    pub editor_address: String,
    #[serde(default = "default_mail_subject")]
    pub subject: String,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            editor_address: default_editor_address(),
            subject: default_mail_subject(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_dashboard_title")]
    pub title: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: default_dashboard_title(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoopConfig {
    #[serde(default = "default_scoop_threshold")]
    pub threshold: f64,
}

impl Default for ScoopConfig {
    fn default() -> Self {
        Self {
            threshold: default_scoop_threshold(),
        }
    }
}

impl ScoopConfig {
    /// Scoop kind using the configured threshold.
    pub fn kind(&self, cost: f64) -> NewsKind {
        NewsKind::scoop_with_threshold(cost, self.threshold)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Initial criterion for the manager; `None` leaves it unset.
    #[serde(default)]
    pub criterion: Option<Criterion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PublishingConfig {
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub mail: MailConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
    #[serde(default)]
    pub scoop: ScoopConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
}

impl PublishingConfig {
    /// Load from an explicit path. Supports TOML or JSON formats.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading publishing config from {}", path.display()))?;
        let ext = path
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_ascii_lowercase();
        let cfg = parse(&content, ext.as_str())
            .with_context(|| format!("parsing publishing config {}", path.display()))?;
        Ok(cfg.sanitized())
    }

    /// Load using env var + fallbacks:
    /// 1) $PUBLISHING_CONFIG_PATH
    /// 2) config/publishing.toml
    /// 3) config/publishing.json
    /// 4) built-in defaults
    pub fn load_default() -> Result<Self> {
        if let Ok(p) = env::var(ENV_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            } else {
                return Err(anyhow!("{ENV_CONFIG_PATH} points to non-existent path"));
            }
        }
        for p in [DEFAULT_TOML_PATH, DEFAULT_JSON_PATH] {
            let pb = PathBuf::from(p);
            if pb.exists() {
                return Self::load_from(&pb);
            }
        }
        tracing::debug!("no publishing config found, using defaults");
        Ok(Self::default())
    }

    /// Negative or non-finite payments and thresholds fall back to defaults.
    /// Reversed importance ranges are kept as written (they match nothing) but logged.
    fn sanitized(mut self) -> Self {
        self.payment = self.payment.sanitized();
        if invalid_amount(self.scoop.threshold) {
            tracing::warn!(value = self.scoop.threshold, "invalid scoop threshold, using default");
            self.scoop.threshold = default_scoop_threshold();
        }
        if let Some(criterion) = &self.selection.criterion {
            for (min, max) in reversed_ranges(criterion) {
                tracing::warn!(min, max, "importance_range with min > max never matches");
            }
        }
        self
    }
}

/// Every `ImportanceRange` with `min > max`, at any depth.
fn reversed_ranges(criterion: &Criterion) -> Vec<(i32, i32)> {
    match criterion {
        Criterion::ImportanceRange { min, max } if min > max => vec![(*min, *max)],
        Criterion::AllOf(all) => all.children().iter().flat_map(reversed_ranges).collect(),
        _ => Vec::new(),
    }
}

fn parse(s: &str, hint_ext: &str) -> Result<PublishingConfig> {
    if hint_ext == "json" {
        return Ok(serde_json::from_str(s)?);
    }
    match toml::from_str(s) {
        Ok(cfg) => Ok(cfg),
        Err(toml_err) => serde_json::from_str(s).map_err(|_| anyhow!(toml_err)),
    }
}
