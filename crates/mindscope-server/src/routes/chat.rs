use axum::extract::{Query, State};
use axum::{Extension, Form, Json};
use serde::Deserialize;
use tracing::{error, warn};

use mindscope_chat::chain::ChainReply;
use mindscope_chat::context::{history_from_exchanges, MAX_HISTORY_EXCHANGES};
use mindscope_chat::keywords;
use mindscope_core::models::chat::{ChatExchange, ResponseSource};
use mindscope_storage::records;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::routes::ListQuery;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ChatForm {
    #[serde(default)]
    message: String,
}

/// Answer a message through the response chain and store the exchange.
///
/// Only an empty message is rejected. Storage problems are logged and the
/// reply is still returned.
pub async fn send_message(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Form(form): Form<ChatForm>,
) -> Result<Json<ChatExchange>, ApiError> {
    let message = form.message.trim().to_string();
    if message.is_empty() {
        return Err(ApiError::BadRequest("Please enter a message.".to_string()));
    }

    let history =
        match records::list_chats(state.data_dir(), &user.sub, Some(MAX_HISTORY_EXCHANGES)).await {
            Ok(recent) => history_from_exchanges(&recent),
            Err(e) => {
                warn!(user = %user.sub, error = %e, "chat history unavailable, replying without it");
                Vec::new()
            }
        };

    // Remote stages use blocking HTTP.
    let chain = state.chain.clone();
    let prompt = message.clone();
    let reply = match tokio::task::spawn_blocking(move || chain.respond(&prompt, &history)).await {
        Ok(reply) => reply,
        Err(e) => {
            error!(error = %e, "response chain task failed");
            ChainReply {
                text: keywords::reply_for(&message).to_string(),
                source: ResponseSource::Keyword,
            }
        }
    };

    let exchange = ChatExchange::new(user.sub, message, reply.text, reply.source);
    if let Err(e) = records::save_chat(state.data_dir(), &exchange).await {
        error!(user = %exchange.user, error = %e, "chat exchange not saved");
    }
    Ok(Json(exchange))
}

/// The caller's conversation, oldest first.
pub async fn chat_history(
    State(state): State<AppState>,
    Extension(user): Extension<AuthUser>,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<ChatExchange>>, ApiError> {
    let exchanges = records::list_chats(state.data_dir(), &user.sub, query.limit).await?;
    Ok(Json(exchanges))
}
