//! Reading instrument answers from submitted form fields.
//!
//! Submissions are lenient: an absent, empty or non-numeric `q{n}` field is
//! read as 0 and never rejected.

use std::collections::HashMap;

use crate::Instrument;

/// Parse a single answer field. Anything that is not an integer becomes 0.
pub fn coerce_answer(raw: Option<&str>) -> i32 {
    raw.map(str::trim)
        .and_then(|s| s.parse::<i32>().ok())
        .unwrap_or(0)
}

/// Name of the form field carrying item `number` (1-based).
pub fn field_name(number: usize) -> String {
    format!("q{number}")
}

/// Collect one answer per item from `q1..qN`.
pub fn answers_from_form(instrument: &dyn Instrument, fields: &HashMap<String, String>) -> Vec<i32> {
    instrument
        .items()
        .iter()
        .map(|item| coerce_answer(fields.get(&field_name(item.number)).map(String::as_str)))
        .collect()
}
