//! Remote text-generation stages.
//!
//! Both stages POST `{inputs, parameters}` to a hosted inference endpoint
//! and read back `[{"generated_text": ...}]`. Calls are blocking with a
//! per-stage global timeout and are never retried.

use std::time::Duration;

use mindscope_core::models::chat::ResponseSource;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};
use ureq::Agent;

use crate::chain::ResponseProvider;
use crate::context::{self, ChatMessage};
use crate::error::ChatError;
use crate::extract;

/// Generation parameters sent with every request. Unset fields are omitted.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationParameters {
    pub max_length: u32,
    pub temperature: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub do_sample: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repetition_penalty: Option<f64>,
}

impl GenerationParameters {
    /// Sampling settings for the primary model.
    pub fn primary() -> Self {
        Self {
            max_length: 150,
            temperature: 0.7,
            do_sample: Some(true),
            top_p: Some(0.9),
            repetition_penalty: Some(1.1),
        }
    }

    /// Minimal settings for the secondary model.
    pub fn secondary() -> Self {
        Self {
            max_length: 150,
            temperature: 0.7,
            do_sample: None,
            top_p: None,
            repetition_penalty: None,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: &'a GenerationParameters,
}

fn build_agent(timeout: Duration) -> Agent {
    let config = Agent::config_builder()
        .timeout_global(Some(timeout))
        .build();
    Agent::new_with_config(config)
}

/// POST a generation request and return the raw `generated_text`.
fn generate(
    agent: &Agent,
    endpoint: &str,
    bearer: Option<&str>,
    inputs: &str,
    parameters: &GenerationParameters,
) -> Result<String, ChatError> {
    let request = GenerationRequest { inputs, parameters };

    let mut builder = agent.post(endpoint);
    if let Some(token) = bearer {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let mut response = builder.send_json(&request)?;
    let body: Value = response.body_mut().read_json()?;
    extract::generated_text(&body)
}

/// Hosted inference with the conversation history. Needs a credential.
pub struct PrimaryInference {
    agent: Agent,
    endpoint: String,
    api_key: Option<String>,
    parameters: GenerationParameters,
}

impl PrimaryInference {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>, timeout: Duration) -> Self {
        Self {
            agent: build_agent(timeout),
            endpoint: endpoint.into(),
            api_key,
            parameters: GenerationParameters::primary(),
        }
    }
}

impl ResponseProvider for PrimaryInference {
    fn name(&self) -> &str {
        "primary_inference"
    }

    fn source(&self) -> ResponseSource {
        ResponseSource::Primary
    }

    fn attempt(&self, message: &str, history: &[ChatMessage]) -> Result<Option<String>, ChatError> {
        let Some(api_key) = self.api_key.as_deref() else {
            debug!("no inference credential configured, skipping primary stage");
            return Ok(None);
        };

        let conversation = context::build_conversation(message, history);
        info!(
            endpoint = %self.endpoint,
            history_len = history.len(),
            "requesting primary inference"
        );

        let generated = generate(
            &self.agent,
            &self.endpoint,
            Some(api_key),
            &conversation,
            &self.parameters,
        )?;
        Ok(Some(extract::primary_reply(&generated)))
    }
}

/// Smaller hosted model, unauthenticated, without history.
pub struct SecondaryInference {
    agent: Agent,
    endpoint: String,
    parameters: GenerationParameters,
}

impl SecondaryInference {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            agent: build_agent(timeout),
            endpoint: endpoint.into(),
            parameters: GenerationParameters::secondary(),
        }
    }
}

impl ResponseProvider for SecondaryInference {
    fn name(&self) -> &str {
        "secondary_inference"
    }

    fn source(&self) -> ResponseSource {
        ResponseSource::Secondary
    }

    fn attempt(&self, message: &str, _history: &[ChatMessage]) -> Result<Option<String>, ChatError> {
        let prompt = context::simple_prompt(message);
        info!(endpoint = %self.endpoint, "requesting secondary inference");

        let generated = generate(&self.agent, &self.endpoint, None, &prompt, &self.parameters)?;
        Ok(Some(extract::secondary_reply(&generated, &prompt)))
    }
}
