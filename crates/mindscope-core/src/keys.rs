//! Record key/path conventions.
//!
//! Pure string functions, no I/O. These define the canonical layout of
//! records inside the Mindscope data directory.
//!
//! Record keys start with a fixed-width time segment, so the lexical order
//! of a user's keys is the chronological order of the records.

use jiff::Timestamp;
use uuid::Uuid;

pub const SCREENINGS_PREFIX: &str = "screenings/";

pub const MOODS_PREFIX: &str = "moods/";

pub const CHATS_PREFIX: &str = "chats/";

pub const TIPS: &str = "tips.json";

pub fn screenings_prefix(user: &str) -> String {
    format!("{SCREENINGS_PREFIX}{}/", user_segment(user))
}

pub fn screening(user: &str, taken_at: Timestamp, id: Uuid) -> String {
    format!("{}{}-{id}.json", screenings_prefix(user), time_segment(taken_at))
}

pub fn moods_prefix(user: &str) -> String {
    format!("{MOODS_PREFIX}{}/", user_segment(user))
}

pub fn mood(user: &str, logged_at: Timestamp, id: Uuid) -> String {
    format!("{}{}-{id}.json", moods_prefix(user), time_segment(logged_at))
}

pub fn chats_prefix(user: &str) -> String {
    format!("{CHATS_PREFIX}{}/", user_segment(user))
}

pub fn chat(user: &str, occurred_at: Timestamp, id: Uuid) -> String {
    format!("{}{}-{id}.json", chats_prefix(user), time_segment(occurred_at))
}

/// Nanoseconds since the Unix epoch, zero-padded to 21 digits. Instants
/// before the epoch clamp to zero.
pub fn time_segment(at: Timestamp) -> String {
    format!("{:021}", at.as_nanosecond().max(0))
}

/// Encode a user subject as a single path segment.
///
/// Alphanumerics, `-`, `_` and `.` pass through; every other byte is written
/// as `%XX`. A leading `.` is escaped too so a subject can never name `.` or
/// `..`.
pub fn user_segment(user: &str) -> String {
    let mut out = String::with_capacity(user.len());
    for (i, b) in user.bytes().enumerate() {
        let keep = b.is_ascii_alphanumeric() || b == b'-' || b == b'_' || (b == b'.' && i > 0);
        if keep {
            out.push(b as char);
        } else {
            out.push_str(&format!("%{b:02X}"));
        }
    }
    if out.is_empty() {
        out.push_str("%00");
    }
    out
}
