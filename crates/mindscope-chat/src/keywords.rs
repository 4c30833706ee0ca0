//! Deterministic keyword replies. The terminal stage of the chain: every
//! message gets an answer.
//!
//! Matching runs over the lowercased message and a *clean* form with all
//! characters other than alphanumerics, `_` and whitespace removed.
//! Rules are checked in a fixed priority order; the first match wins.

use serde::Serialize;

/// Reply category chosen for a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyTopic {
    Greeting,
    HowAreYou,
    Name,
    Help,
    Thanks,
    Goodbye,
    Exercise,
    Anxious,
    Sleep,
    Stress,
    Lonely,
    Work,
    Relationship,
    Sad,
    Angry,
    Overwhelm,
    Default,
}

impl ReplyTopic {
    pub fn reply(self) -> &'static str {
        match self {
            ReplyTopic::Greeting => {
                "Hello! 👋 I'm here to provide emotional support and guidance. How are you feeling today?"
            }
            ReplyTopic::HowAreYou => {
                "I'm here and ready to listen! I'm an AI designed to provide mental health support. How can I help you today?"
            }
            ReplyTopic::Name => {
                "I'm your mental health support assistant! You can call me MindHelper. 😊"
            }
            ReplyTopic::Help => {
                "I'm here to listen and provide emotional support. You can share how you're feeling, ask for coping strategies, or discuss anything that's on your mind. What would you like to talk about?"
            }
            ReplyTopic::Thanks => {
                "You're very welcome! I'm glad I could help. Remember I'm here whenever you need someone to talk to. 💙"
            }
            ReplyTopic::Goodbye => {
                "Take care of yourself! Remember to practice self-care and reach out if you need more support. I'll be here when you return. 🌟"
            }
            ReplyTopic::Exercise => concat!(
                "Great question! Here are some helpful exercises:\n\n",
                "• **Deep Breathing**: 4-7-8 technique (inhale 4s, hold 7s, exhale 8s)\n",
                "• **Walking**: 15-20 minute brisk walk\n",
                "• **Yoga**: Child's pose or gentle stretches\n",
                "• **Progressive Muscle Relaxation**: Tense and release each muscle group\n",
                "• **Mindful Movement**: Gentle stretching with focus on breath",
            ),
            ReplyTopic::Anxious => {
                "I understand feeling anxious can be really difficult. 😔 Try taking some deep breaths - inhale for 4 seconds, hold for 4, exhale for 6. Would you like to talk about what's making you feel this way?"
            }
            ReplyTopic::Sleep => {
                "Trouble sleeping can be so challenging. 😴 Establishing a regular bedtime routine, limiting screen time before bed, and creating a comfortable sleep environment can help. Would you like more specific suggestions?"
            }
            ReplyTopic::Stress => {
                "Stress management is so important for wellbeing. 🧘‍♀️ Try breaking tasks into smaller steps, taking short breaks, or practicing mindfulness. What's causing you stress right now?"
            }
            ReplyTopic::Lonely => {
                "Feeling lonely can be really tough. 💔 Reaching out to friends, joining community activities, or even volunteering can help create connections. Would you like to explore ways to feel more connected?"
            }
            ReplyTopic::Work => {
                "Work stress is common. 💼 Setting boundaries, prioritizing tasks, and taking regular breaks can help manage this. What aspect of work is most challenging for you?"
            }
            ReplyTopic::Relationship => {
                "Relationship issues can be complex. 💑 Clear communication and setting healthy boundaries are often helpful. Would you like to talk more about your specific situation?"
            }
            ReplyTopic::Sad => {
                "I'm sorry you're feeling sad. 😔 Remember that it's okay to feel this way. Sometimes talking about it, writing in a journal, or doing something you enjoy can help."
            }
            ReplyTopic::Angry => {
                "Feeling angry is a natural emotion. 😠 Taking a walk, deep breathing, or counting to ten can help manage intense feelings. Would you like to talk about what's making you feel this way?"
            }
            ReplyTopic::Overwhelm => {
                "When feeling overwhelmed, try breaking things down into smaller steps. 📝 Focus on one thing at a time and remember to take breaks. What's feeling overwhelming right now?"
            }
            ReplyTopic::Default => {
                "Thank you for sharing. I'm here to listen and support you. How has your day been going? 💭"
            }
        }
    }
}

/// Quick-reply button texts, checked before anything else.
static QUICK_REPLIES: &[(&str, ReplyTopic)] = &[
    ("i'm having trouble sleeping", ReplyTopic::Sleep),
    ("i'm feeling anxious", ReplyTopic::Anxious),
    ("i need help with stress management", ReplyTopic::Stress),
    ("i'm feeling lonely", ReplyTopic::Lonely),
    ("i have work stress", ReplyTopic::Work),
    ("i have a relationship issue", ReplyTopic::Relationship),
];

/// Keyword rules in priority order.
static RULES: &[(ReplyTopic, &[&str])] = &[
    (
        ReplyTopic::Exercise,
        &["exercise", "workout", "physical", "fitness", "yoga", "stretch"],
    ),
    (
        ReplyTopic::Greeting,
        &["hi", "hello", "hey", "hola", "greetings", "good morning", "good afternoon"],
    ),
    (
        ReplyTopic::HowAreYou,
        &["how are you", "how do you do", "how's it going"],
    ),
    (
        ReplyTopic::Name,
        &["who are you", "whats your name", "what is your name"],
    ),
    (
        ReplyTopic::Help,
        &["help", "what can you do", "how do you work", "what should i do"],
    ),
    (ReplyTopic::Thanks, &["thank", "thanks", "appreciate", "grateful"]),
    (ReplyTopic::Goodbye, &["bye", "goodbye", "see you", "talk later"]),
    (
        ReplyTopic::Anxious,
        &["anxious", "worry", "nervous", "panic", "anxiety"],
    ),
    (
        ReplyTopic::Sleep,
        &["sleep", "tired", "insomnia", "awake", "cant sleep", "can't sleep"],
    ),
    (
        ReplyTopic::Stress,
        &["stress", "stressed", "overwhelm", "pressure", "stressing"],
    ),
    (
        ReplyTopic::Lonely,
        &["lonely", "alone", "isolated", "isolation", "no friends"],
    ),
    (
        ReplyTopic::Work,
        &["work", "job", "career", "boss", "colleague", "office"],
    ),
    (
        ReplyTopic::Relationship,
        &[
            "relationship",
            "partner",
            "friend",
            "family",
            "boyfriend",
            "girlfriend",
            "husband",
            "wife",
        ],
    ),
    (
        ReplyTopic::Sad,
        &["sad", "depress", "unhappy", "miserable", "down", "blue"],
    ),
    (
        ReplyTopic::Angry,
        &["angry", "mad", "frustrat", "annoy", "furious", "irritated"],
    ),
    (
        ReplyTopic::Overwhelm,
        &["overwhelm", "too much", "cant handle", "drowning"],
    ),
];

/// Single-token keywords this short must match a whole token.
const MAX_EXACT_TOKEN_LEN: usize = 3;

struct Normalized {
    lowered: String,
    clean: String,
}

impl Normalized {
    fn new(message: &str) -> Self {
        let lowered = message.trim().to_lowercase();
        let clean = clean(&lowered);
        Self { lowered, clean }
    }

    fn tokens(&self) -> impl Iterator<Item = &str> {
        self.clean.split_whitespace()
    }

    fn contains_phrase(&self, phrase: &str) -> bool {
        self.lowered.contains(phrase) || self.clean.contains(clean(phrase).as_str())
    }

    fn matches(&self, keyword: &str) -> bool {
        if keyword.contains(' ') || keyword.contains('\'') {
            self.contains_phrase(keyword)
        } else if keyword.chars().count() <= MAX_EXACT_TOKEN_LEN {
            self.tokens().any(|t| t == keyword)
        } else {
            self.clean.contains(keyword)
        }
    }
}

fn clean(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || c.is_whitespace())
        .collect()
}

/// Pick the reply category for a message.
pub fn classify(message: &str) -> ReplyTopic {
    let normalized = Normalized::new(message);
    if normalized.clean.trim().is_empty() {
        return ReplyTopic::Default;
    }

    if let Some((_, topic)) = QUICK_REPLIES
        .iter()
        .find(|(phrase, _)| normalized.contains_phrase(phrase))
    {
        return *topic;
    }

    RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| normalized.matches(k)))
        .map_or(ReplyTopic::Default, |(topic, _)| *topic)
}

/// The canned reply for a message.
pub fn reply_for(message: &str) -> &'static str {
    classify(message).reply()
}
