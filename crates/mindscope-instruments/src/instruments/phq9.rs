use std::sync::LazyLock;

use mindscope_core::models::screening::ScreeningKind;

use crate::Instrument;
use crate::scoring::{self, AnswerRange, Item, SeverityTier};

/// PHQ-9: Patient Health Questionnaire, depression module.
/// 9 items, each rated 0–3. Total 0–27.
pub struct Phq9;

/// Answer scale shared with GAD-7.
pub(crate) static FREQUENCY_LABELS: LazyLock<Vec<String>> = LazyLock::new(|| {
    scoring::labels(&[
        "Not at all",
        "Several days",
        "More than half the days",
        "Nearly every day",
    ])
});

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    scoring::items(
        &[
            "Little interest or pleasure in doing things",
            "Feeling down, depressed, or hopeless",
            "Trouble falling or staying asleep, or sleeping too much",
            "Feeling tired or having little energy",
            "Poor appetite or overeating",
            "Feeling bad about yourself, or that you are a failure or have let yourself or your family down",
            "Trouble concentrating on things, such as reading the newspaper or watching television",
            "Moving or speaking so slowly that other people could have noticed, or being so fidgety or restless that you have been moving around a lot more than usual",
            "Thoughts that you would be better off dead or of hurting yourself in some way",
        ],
        &[],
    )
});

static TIERS: LazyLock<Vec<SeverityTier>> = LazyLock::new(|| {
    vec![
        scoring::tier(
            Some(4),
            "Minimal",
            [
                "Maintain your healthy lifestyle habits",
                "Stay socially connected",
                "Keep monitoring your mood",
            ],
        ),
        scoring::tier(
            Some(9),
            "Mild",
            [
                "Practice self-care and relaxation techniques",
                "Track your mood daily",
                "Seek support if symptoms persist",
            ],
        ),
        scoring::tier(
            Some(14),
            "Moderate",
            [
                "Consider speaking with a counselor",
                "Use our mood tracker regularly",
                "Explore mindfulness or breathing exercises",
            ],
        ),
        scoring::tier(
            Some(19),
            "Moderately Severe",
            [
                "Consider speaking with a mental health professional",
                "Track your mood daily using our mood tracker",
                "Explore our wellness resources for self-care tips",
            ],
        ),
        scoring::tier(
            None,
            "Severe",
            [
                "Seek professional help as soon as possible",
                "Reach out to supportive friends/family",
                "Use wellness and crisis resources available",
            ],
        ),
    ]
});

impl Instrument for Phq9 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Phq9
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn instructions(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by any of the following problems?"
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn answer_range(&self) -> AnswerRange {
        AnswerRange { min: 0, max: 3 }
    }

    fn answer_labels(&self) -> &[String] {
        &FREQUENCY_LABELS
    }

    fn tiers(&self) -> &[SeverityTier] {
        &TIERS
    }
}
