use std::sync::LazyLock;

use mindscope_core::models::screening::ScreeningKind;

use crate::Instrument;
use crate::scoring::{self, AnswerRange, Item, SeverityTier};

/// PSS-10: Perceived Stress Scale.
/// 10 items, each rated 0–4. Items 4, 5, 7 and 8 are positively worded and
/// reverse-scored. Total 0–40.
pub struct Pss10;

pub const REVERSED_ITEMS: [usize; 4] = [4, 5, 7, 8];

static LABELS: LazyLock<Vec<String>> = LazyLock::new(|| {
    scoring::labels(&["Never", "Almost never", "Sometimes", "Fairly often", "Very often"])
});

static ITEMS: LazyLock<Vec<Item>> = LazyLock::new(|| {
    scoring::items(
        &[
            "Been upset because of something that happened unexpectedly",
            "Felt that you were unable to control the important things in your life",
            "Felt nervous and stressed",
            "Felt confident about your ability to handle your personal problems",
            "Felt that things were going your way",
            "Found that you could not cope with all the things that you had to do",
            "Been able to control irritations in your life",
            "Felt that you were on top of things",
            "Been angered because of things that happened that were outside of your control",
            "Felt difficulties were piling up so high that you could not overcome them",
        ],
        &REVERSED_ITEMS,
    )
});

static TIERS: LazyLock<Vec<SeverityTier>> = LazyLock::new(|| {
    vec![
        scoring::tier(
            Some(13),
            "Low",
            [
                "Maintain healthy daily routines (sleep, diet, exercise).",
                "Practice brief daily relaxation (deep breathing, progressive muscle relaxation).",
                "Keep social connections and monitor stress regularly.",
            ],
        ),
        scoring::tier(
            Some(26),
            "Moderate",
            [
                "Use stress reduction practices (mindfulness, scheduled breaks).",
                "Establish a consistent sleep and exercise routine.",
                "Consider talking with a counselor or trusted person about stressors.",
            ],
        ),
        scoring::tier(
            None,
            "High",
            [
                "Reach out to a mental health professional for assessment and support.",
                "Talk to supportive friends/family and reduce high-demand tasks if possible.",
                "If you feel overwhelmed or unsafe, contact local crisis services or emergency help immediately.",
            ],
        ),
    ]
});

impl Instrument for Pss10 {
    fn kind(&self) -> ScreeningKind {
        ScreeningKind::Pss10
    }

    fn name(&self) -> &str {
        "PSS-10"
    }

    fn instructions(&self) -> &str {
        "In the last month, how often have you..."
    }

    fn items(&self) -> &[Item] {
        &ITEMS
    }

    fn answer_range(&self) -> AnswerRange {
        AnswerRange { min: 0, max: 4 }
    }

    fn answer_labels(&self) -> &[String] {
        &LABELS
    }

    fn tiers(&self) -> &[SeverityTier] {
        &TIERS
    }
}
