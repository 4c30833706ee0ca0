pub mod chat;
pub mod dashboard;
pub mod health;
pub mod instruments;
pub mod moods;
pub mod screenings;
pub mod tips;

use serde::Deserialize;

/// `?limit=n` on list endpoints.
#[derive(Debug, Default, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}
