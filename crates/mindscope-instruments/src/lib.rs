//! mindscope-instruments
//!
//! Screening instrument definitions and scoring. Pure data and arithmetic,
//! no I/O. Defines the items, answer scales, reverse-scored items and
//! severity tiers of each supported instrument, plus the wellness index
//! derived from moods and screenings.

pub mod error;
pub mod form;
pub mod instruments;
pub mod scoring;
pub mod wellness;

use mindscope_core::models::screening::{ScreeningKind, ScreeningResult};
use uuid::Uuid;

use error::InstrumentError;
use scoring::{AnswerRange, Item, ScreeningScore, SeverityTier, ValidationError};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    fn kind(&self) -> ScreeningKind;

    /// Unique identifier for this instrument (e.g., "phq9").
    fn id(&self) -> &str {
        self.kind().id()
    }

    /// Human-readable name (e.g., "PHQ-9").
    fn name(&self) -> &str;

    /// Instruction shown above the items.
    fn instructions(&self) -> &str;

    fn items(&self) -> &[Item];

    fn answer_range(&self) -> AnswerRange;

    /// One label per answer value, starting at `answer_range().min`.
    fn answer_labels(&self) -> &[String];

    /// Severity tiers in ascending order. The last tier is open-ended.
    fn tiers(&self) -> &[SeverityTier];

    fn item_count(&self) -> usize {
        self.items().len()
    }

    /// Contribution of one answer to the total. `index` is 0-based.
    fn item_value(&self, index: usize, answer: i32) -> i32 {
        match self.items().get(index) {
            Some(item) if item.reversed => self.answer_range().max.saturating_sub(answer),
            Some(_) => answer,
            None => 0,
        }
    }

    /// Pad with zeros or truncate so there is exactly one answer per item.
    fn normalize_answers(&self, answers: &[i32]) -> Vec<i32> {
        (0..self.item_count())
            .map(|i| answers.get(i).copied().unwrap_or(0))
            .collect()
    }

    /// Sum of item values. Missing answers count as 0 before any reversal.
    fn total(&self, answers: &[i32]) -> i32 {
        self.normalize_answers(answers)
            .into_iter()
            .enumerate()
            .fold(0i32, |acc, (i, answer)| acc.saturating_add(self.item_value(i, answer)))
    }

    fn classify(&self, total: i32) -> &SeverityTier {
        let tiers = self.tiers();
        tiers
            .iter()
            .find(|t| t.max_total.is_none_or(|max| total <= max))
            .unwrap_or(&tiers[tiers.len() - 1])
    }

    fn score(&self, answers: &[i32]) -> ScreeningScore {
        let total = self.total(answers);
        let tier = self.classify(total);
        ScreeningScore {
            total,
            severity: tier.label.clone(),
            recommendations: tier.recommendations.clone(),
        }
    }

    /// Report answers outside the nominal range. Scoring does not depend on
    /// this; out-of-range answers are still summed as given.
    fn validate_answers(&self, answers: &[i32]) -> Vec<ValidationError> {
        let range = self.answer_range();
        answers
            .iter()
            .take(self.item_count())
            .enumerate()
            .filter(|(_, value)| !range.contains(**value))
            .map(|(i, value)| ValidationError {
                item: i + 1,
                value: *value,
                expected_range: range,
                message: format!(
                    "{}: item {} answer {} is outside range [{}, {}]",
                    self.name(),
                    i + 1,
                    value,
                    range.min,
                    range.max,
                ),
            })
            .collect()
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<&'static dyn Instrument> {
    ScreeningKind::ALL.into_iter().map(instrument_for).collect()
}

pub fn instrument_for(kind: ScreeningKind) -> &'static dyn Instrument {
    match kind {
        ScreeningKind::Phq9 => &instruments::phq9::Phq9,
        ScreeningKind::Gad7 => &instruments::gad7::Gad7,
        ScreeningKind::Pss10 => &instruments::pss10::Pss10,
    }
}

/// Look up an instrument by id or code.
pub fn get_instrument(id: &str) -> Result<&'static dyn Instrument, InstrumentError> {
    id.parse::<ScreeningKind>()
        .map(instrument_for)
        .map_err(|_| InstrumentError::UnknownInstrument(id.to_string()))
}

/// Score a set of answers for an instrument.
pub fn score(kind: ScreeningKind, answers: &[i32]) -> ScreeningScore {
    instrument_for(kind).score(answers)
}

/// Score answers and build the immutable record to persist.
pub fn record_screening(kind: ScreeningKind, user: &str, answers: &[i32]) -> ScreeningResult {
    let instrument = instrument_for(kind);
    let raw_answers = instrument.normalize_answers(answers);
    let scored = instrument.score(&raw_answers);
    ScreeningResult {
        id: Uuid::new_v4(),
        user: user.to_string(),
        instrument: kind,
        raw_answers,
        total_score: scored.total,
        severity: scored.severity,
        taken_at: jiff::Timestamp::now(),
    }
}
