//! Wellness index: a derived 0–10-ish composite of recent moods and the
//! latest screening total. Computed on demand, never stored.
//!
//! ```text
//! avg_mood         = mean(mood scores), or 5 with no moods
//! screening_factor = max(0, 10 - total / 3), or 5 with no screening
//! wellness         = round(avg_mood * 0.6 + screening_factor * 0.4, 1)
//! ```
//!
//! Rounding is half away from zero on the exact value. The formula is
//! evaluated in integer arithmetic over a common denominator, so a value
//! that is exactly `x.x5` in decimal (e.g. 6.35) always rounds up, whatever
//! its nearest binary float happens to be.

use mindscope_core::models::mood::MoodEntry;
use mindscope_core::models::screening::{ScreeningKind, ScreeningResult};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Number of recent moods the dashboard feeds into the index.
pub const DEFAULT_MOOD_WINDOW: usize = 7;

/// Mood average used when no moods are logged.
pub const BASELINE_MOOD: i32 = 5;

/// Screening factor used when no screening exists.
pub const BASELINE_SCREENING_FACTOR: i32 = 5;

/// Compute the wellness index, rounded to one decimal.
pub fn compute_wellness(recent_mood_scores: &[i32], latest_screening_score: Option<i32>) -> f64 {
    let (sum, count) = if recent_mood_scores.is_empty() {
        (i128::from(BASELINE_MOOD), 1i128)
    } else {
        (
            recent_mood_scores.iter().map(|s| i128::from(*s)).sum(),
            recent_mood_scores.len() as i128,
        )
    };

    // 4 * screening_factor, scaled by 3 so the `/ 3` stays exact.
    let factor_term = match latest_screening_score {
        Some(score) => (120 - 4 * i128::from(score)).max(0),
        None => 12 * i128::from(BASELINE_SCREENING_FACTOR),
    };

    // wellness * 10 == numerator / denominator
    let numerator = 18 * sum + count * factor_term;
    let denominator = 3 * count;

    round_half_away(numerator, denominator) as f64 / 10.0
}

fn round_half_away(numerator: i128, denominator: i128) -> i128 {
    let magnitude = (2 * numerator.abs() + denominator) / (2 * denominator);
    if numerator < 0 { -magnitude } else { magnitude }
}

/// The wellness index together with the inputs it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessIndex {
    pub value: f64,
    pub mood_samples: usize,
    pub average_mood: Option<f64>,
    pub latest_screening: Option<ScreeningKind>,
    pub latest_screening_score: Option<i32>,
}

impl WellnessIndex {
    /// Compute from stored records. Uses the `window` most recent moods and
    /// the most recent screening of any instrument; input order is irrelevant.
    pub fn from_records(moods: &[MoodEntry], screenings: &[ScreeningResult], window: usize) -> Self {
        let mut recent: Vec<&MoodEntry> = moods.iter().collect();
        recent.sort_by_key(|m| std::cmp::Reverse(m.logged_at()));
        let scores: Vec<i32> = recent.iter().take(window).map(|m| m.score()).collect();

        let latest = screenings.iter().max_by_key(|s| s.taken_at);

        let average_mood = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<i32>() as f64 / scores.len() as f64)
        };

        Self {
            value: compute_wellness(&scores, latest.map(|s| s.total_score)),
            mood_samples: scores.len(),
            average_mood,
            latest_screening: latest.map(|s| s.instrument),
            latest_screening_score: latest.map(|s| s.total_score),
        }
    }
}
