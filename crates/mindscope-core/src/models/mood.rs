use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::CoreError;

/// Score given to a mood label the table does not know.
pub const NEUTRAL_MOOD_SCORE: i32 = 5;

/// The six moods a user can log. Stored as their emoji symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Mood {
    #[serde(rename = "😊")]
    Happy,
    #[serde(rename = "😢")]
    Sad,
    #[serde(rename = "😡")]
    Angry,
    #[serde(rename = "😌")]
    Calm,
    #[serde(rename = "😴")]
    Tired,
    #[serde(rename = "😟")]
    Anxious,
}

impl Mood {
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Tired,
        Mood::Anxious,
    ];

    /// Fixed numeric score for this mood.
    pub fn score(self) -> i32 {
        match self {
            Mood::Happy => 8,
            Mood::Sad => 3,
            Mood::Angry => 2,
            Mood::Calm => 7,
            Mood::Tired => 5,
            Mood::Anxious => 4,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😡",
            Mood::Calm => "😌",
            Mood::Tired => "😴",
            Mood::Anxious => "😟",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Tired => "Tired",
            Mood::Anxious => "Anxious",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Mood {
    type Err = CoreError;

    /// Accepts the emoji symbol or the case-insensitive name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Mood::ALL
            .into_iter()
            .find(|m| m.symbol() == s || m.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownMood(s.to_string()))
    }
}

/// Score for a raw mood label; unknown labels get [`NEUTRAL_MOOD_SCORE`].
pub fn mood_score(label: &str) -> i32 {
    label.parse::<Mood>().map_or(NEUTRAL_MOOD_SCORE, Mood::score)
}

/// A logged mood. The score always follows from the mood.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct MoodEntry {
    id: Uuid,
    user: String,
    mood: Mood,
    score: i32,
    influencers: BTreeSet<String>,
    notes: Option<String>,
    logged_at: jiff::Timestamp,
}

impl MoodEntry {
    /// Build a new entry stamped with the current time.
    ///
    /// Blank influencer tags are dropped and blank notes become `None`.
    pub fn new<I, S>(user: impl Into<String>, mood: Mood, influencers: I, notes: Option<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let influencers = influencers
            .into_iter()
            .map(|tag| tag.as_ref().trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect();
        let notes = notes.filter(|n| !n.trim().is_empty());

        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            mood,
            score: mood.score(),
            influencers,
            notes,
            logged_at: jiff::Timestamp::now(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn influencers(&self) -> &BTreeSet<String> {
        &self.influencers
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    pub fn logged_at(&self) -> jiff::Timestamp {
        self.logged_at
    }
}

/// Wire shape of a stored entry. Any `score` present is ignored.
#[derive(Deserialize)]
struct StoredMoodEntry {
    id: Uuid,
    user: String,
    mood: Mood,
    #[serde(default)]
    influencers: BTreeSet<String>,
    #[serde(default)]
    notes: Option<String>,
    logged_at: jiff::Timestamp,
}

impl<'de> Deserialize<'de> for MoodEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = StoredMoodEntry::deserialize(deserializer)?;
        Ok(MoodEntry {
            id: stored.id,
            user: stored.user,
            mood: stored.mood,
            score: stored.mood.score(),
            influencers: stored.influencers,
            notes: stored.notes,
            logged_at: stored.logged_at,
        })
    }
}
