use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

/// Which stage of the response chain produced a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ResponseSource {
    Primary,
    Secondary,
    Keyword,
}

/// One user message and the assistant reply chosen for it.
///
/// The reply is filled before the exchange is persisted and never edited.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChatExchange {
    pub id: Uuid,
    pub user: String,
    pub user_message: String,
    pub assistant_response: Option<String>,
    #[serde(default)]
    pub response_source: Option<ResponseSource>,
    pub occurred_at: jiff::Timestamp,
}

impl ChatExchange {
    pub fn new(
        user: impl Into<String>,
        user_message: impl Into<String>,
        assistant_response: String,
        response_source: ResponseSource,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user: user.into(),
            user_message: user_message.into(),
            assistant_response: Some(assistant_response),
            response_source: Some(response_source),
            occurred_at: jiff::Timestamp::now(),
        }
    }
}
