use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// Nominal range of a single item answer (inclusive).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct AnswerRange {
    pub min: i32,
    pub max: i32,
}

impl AnswerRange {
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// One question of an instrument.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// 1-based item number; also the `q{n}` form field suffix.
    pub number: usize,
    pub prompt: String,
    /// Reverse-scored items contribute `max - answer` to the total.
    pub reversed: bool,
}

/// A named severity bucket. A total belongs to the first tier whose
/// `max_total` it does not exceed; the last tier is open-ended.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityTier {
    pub max_total: Option<i32>,
    pub label: String,
    pub recommendations: Vec<String>,
}

/// Outcome of scoring one set of answers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningScore {
    pub total: i32,
    pub severity: String,
    pub recommendations: Vec<String>,
}

/// An answer outside its item's nominal range. Reported, never enforced.
#[derive(Debug, Clone, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("{message}")]
pub struct ValidationError {
    pub item: usize,
    pub value: i32,
    pub expected_range: AnswerRange,
    pub message: String,
}

pub(crate) fn items(prompts: &[&str], reversed: &[usize]) -> Vec<Item> {
    prompts
        .iter()
        .enumerate()
        .map(|(i, prompt)| Item {
            number: i + 1,
            prompt: prompt.to_string(),
            reversed: reversed.contains(&(i + 1)),
        })
        .collect()
}

pub(crate) fn tier(max_total: Option<i32>, label: &str, recommendations: [&str; 3]) -> SeverityTier {
    SeverityTier {
        max_total,
        label: label.to_string(),
        recommendations: recommendations.iter().map(|r| r.to_string()).collect(),
    }
}

pub(crate) fn labels(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|l| l.to_string()).collect()
}
