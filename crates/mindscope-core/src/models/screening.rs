use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// The screening instruments Mindscope administers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum ScreeningKind {
    /// Patient Health Questionnaire (depression).
    #[serde(rename = "PHQ9")]
    Phq9,
    /// Generalized Anxiety Disorder scale.
    #[serde(rename = "GAD7")]
    Gad7,
    /// Perceived Stress Scale.
    #[serde(rename = "PSS10")]
    Pss10,
}

impl ScreeningKind {
    pub const ALL: [ScreeningKind; 3] = [ScreeningKind::Phq9, ScreeningKind::Gad7, ScreeningKind::Pss10];

    /// Stored code, e.g. `"PHQ9"`.
    pub fn code(self) -> &'static str {
        match self {
            ScreeningKind::Phq9 => "PHQ9",
            ScreeningKind::Gad7 => "GAD7",
            ScreeningKind::Pss10 => "PSS10",
        }
    }

    /// Route/catalogue id, e.g. `"phq9"`.
    pub fn id(self) -> &'static str {
        match self {
            ScreeningKind::Phq9 => "phq9",
            ScreeningKind::Gad7 => "gad7",
            ScreeningKind::Pss10 => "pss10",
        }
    }

    /// Human-readable label, e.g. `"Depression (PHQ-9)"`.
    pub fn label(self) -> &'static str {
        match self {
            ScreeningKind::Phq9 => "Depression (PHQ-9)",
            ScreeningKind::Gad7 => "Anxiety (GAD-7)",
            ScreeningKind::Pss10 => "Stress (PSS-10)",
        }
    }
}

impl fmt::Display for ScreeningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for ScreeningKind {
    type Err = CoreError;

    /// Accepts the stored code (`PHQ9`), the route id (`phq9`) and the
    /// hyphenated display form (`PHQ-9`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();
        ScreeningKind::ALL
            .into_iter()
            .find(|k| k.id() == normalized)
            .ok_or_else(|| CoreError::UnknownInstrument(s.to_string()))
    }
}

/// A completed screening. Created once on submission and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScreeningResult {
    pub id: Uuid,
    pub user: String,
    pub instrument: ScreeningKind,
    /// Per-item answers after coercion, one per instrument item.
    pub raw_answers: Vec<i32>,
    pub total_score: i32,
    pub severity: String,
    pub taken_at: jiff::Timestamp,
}
