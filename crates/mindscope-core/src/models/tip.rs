use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// An entry in the static wellness tip reference table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct WellnessTip {
    pub title: String,
    pub content: String,
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_language() -> String {
    "English".to_string()
}

impl WellnessTip {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            language: default_language(),
        }
    }
}

/// Tips seeded into an empty store.
pub fn default_tips() -> Vec<WellnessTip> {
    vec![
        WellnessTip::new(
            "Breathe on purpose",
            "Try the 4-7-8 pattern: inhale for 4 seconds, hold for 7, exhale for 8. \
             Three rounds are often enough to settle a racing mind.",
        ),
        WellnessTip::new(
            "Protect your sleep",
            "Keep a regular bedtime, dim screens an hour before sleep, and keep the \
             bedroom cool and quiet.",
        ),
        WellnessTip::new(
            "Move a little every day",
            "A brisk 15-20 minute walk lifts mood and eases stress, even on busy days.",
        ),
        WellnessTip::new(
            "Stay connected",
            "Send a message to someone you trust. Small moments of connection add up.",
        ),
        WellnessTip::new(
            "Name the feeling",
            "Writing down what you feel and what triggered it makes patterns easier \
             to spot in your mood log.",
        ),
    ]
}
