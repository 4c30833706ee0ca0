//! The response fallback chain.
//!
//! Providers are tried in order and the first usable reply wins. A provider
//! that errors, or answers with nothing usable, is logged and passed over.
//! When every provider is exhausted the keyword matcher answers, so
//! [`ResponseChain::respond`] never fails.

use mindscope_core::models::chat::ResponseSource;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::ChatConfig;
use crate::context::ChatMessage;
use crate::error::ChatError;
use crate::inference::{PrimaryInference, SecondaryInference};
use crate::keywords;

/// Canned text some endpoints return instead of a real generation.
pub const PLACEHOLDER_REPLY: &str = "This is an AI response to your message";

/// One stage of the chain.
pub trait ResponseProvider: Send + Sync {
    fn name(&self) -> &str;

    fn source(&self) -> ResponseSource;

    /// `Ok(None)` means the stage does not apply (e.g. no credential) and
    /// the chain moves on without logging a failure.
    fn attempt(&self, message: &str, history: &[ChatMessage]) -> Result<Option<String>, ChatError>;
}

/// The reply picked for a message and the stage that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainReply {
    pub text: String,
    pub source: ResponseSource,
}

pub struct ResponseChain {
    providers: Vec<Box<dyn ResponseProvider>>,
}

impl ResponseChain {
    pub fn new(providers: Vec<Box<dyn ResponseProvider>>) -> Self {
        Self { providers }
    }

    /// Primary inference, then secondary inference, then keywords.
    pub fn from_config(config: &ChatConfig) -> Self {
        Self::new(vec![
            Box::new(PrimaryInference::new(
                config.primary_endpoint.clone(),
                config.api_key.clone(),
                config.primary_timeout,
            )),
            Box::new(SecondaryInference::new(
                config.secondary_endpoint.clone(),
                config.secondary_timeout,
            )),
        ])
    }

    /// A chain that only uses the keyword matcher.
    pub fn keywords_only() -> Self {
        Self::new(Vec::new())
    }

    pub fn respond(&self, message: &str, history: &[ChatMessage]) -> ChainReply {
        for provider in &self.providers {
            match provider.attempt(message, history) {
                Ok(Some(text)) if is_usable(&text) => {
                    info!(provider = provider.name(), reply_len = text.len(), "chat reply generated");
                    return ChainReply {
                        text,
                        source: provider.source(),
                    };
                }
                Ok(Some(_)) => {
                    warn!(provider = provider.name(), "discarding empty or placeholder reply");
                }
                Ok(None) => {
                    debug!(provider = provider.name(), "stage skipped");
                }
                Err(e) => {
                    warn!(provider = provider.name(), error = %e, "stage failed, falling back");
                }
            }
        }

        let topic = keywords::classify(message);
        info!(?topic, "answering from keyword replies");
        ChainReply {
            text: topic.reply().to_string(),
            source: ResponseSource::Keyword,
        }
    }
}

fn is_usable(text: &str) -> bool {
    let text = text.trim();
    !text.is_empty() && text != PLACEHOLDER_REPLY
}
