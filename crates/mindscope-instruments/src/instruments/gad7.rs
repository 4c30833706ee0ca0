use std::sync::LazyLock;

use mindscope_core::models::screening::ScreeningKind;

use crate::Instrument;
use crate::instruments::phq9::FREQUENCY_LABELS;
use crate::scoring::{self, AnswerRange, Item, SeverityTier};

/// GAD-7: Generalized Anxiety Disorder scale.
/// 7 items, each rated 0–3. Total 0–21.
pub struct Gad7;

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    scoring::items(
        &[
            "Feeling nervous, anxious, or on edge",
            "Not being able to stop or control worrying",
            "Worrying too much about different things",
            "Trouble relaxing",
            "Being so restless that it is hard to sit still",
            "Becoming easily annoyed or irritable",
            "Feeling afraid as if something awful might happen",
        ],
        &[],
    )
});

static TIERS: LazyLock<Vec<SeverityTier>> = LazyLock::new(|| {
    vec![
        scoring::tier(
            Some(4),
            "Minimal Anxiety",
            [
                "Maintain healthy routines like sleep and exercise",
                "Practice daily relaxation techniques",
                "Stay socially engaged",
            ],
        ),
        scoring::tier(
            Some(9),
            "Mild Anxiety",
            [
                "Use mindfulness or breathing exercises",
                "Track triggers in a journal",
                "Talk with friends/family for support",
            ],
        ),
        scoring::tier(
            Some(14),
            "Moderate Anxiety",
            [
                "Consider seeking therapy or counseling",
                "Practice stress management strategies",
                "Incorporate regular physical activity",
            ],
        ),
        scoring::tier(
            None,
            "Severe Anxiety",
            [
                "Reach out to a mental health professional promptly",
                "Use crisis hotlines if needed",
                "Build a strong support system with trusted people",
            ],
        ),
    ]
});

impl Instrument for Gad7 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Gad7
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn instructions(&self) -> &str {
        "Over the last 2 weeks, how often have you been bothered by the following problems?"
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
