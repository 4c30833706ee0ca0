use std::env;
use std::fmt;
use std::time::Duration;

pub const DEFAULT_PRIMARY_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-large";

pub const DEFAULT_SECONDARY_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/microsoft/DialoGPT-small";

pub const PRIMARY_TIMEOUT: Duration = Duration::from_secs(15);

pub const SECONDARY_TIMEOUT: Duration = Duration::from_secs(5);

/// Endpoints, credential and timeouts for the remote inference stages.
#[derive(Clone)]
pub struct ChatConfig {
    pub primary_endpoint: String,
    pub secondary_endpoint: String,
    /// Bearer credential for the primary endpoint. `None` skips that stage.
    pub api_key: Option<String>,
    pub primary_timeout: Duration,
    pub secondary_timeout: Duration,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            primary_endpoint: DEFAULT_PRIMARY_ENDPOINT.to_string(),
            secondary_endpoint: DEFAULT_SECONDARY_ENDPOINT.to_string(),
            api_key: None,
            primary_timeout: PRIMARY_TIMEOUT,
            secondary_timeout: SECONDARY_TIMEOUT,
        }
    }
}

impl ChatConfig {
    /// Read `HUGGINGFACE_API_KEY`, `MINDSCOPE_PRIMARY_ENDPOINT` and
    /// `MINDSCOPE_SECONDARY_ENDPOINT`. Blank values count as unset.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            primary_endpoint: non_empty_var("MINDSCOPE_PRIMARY_ENDPOINT")
                .unwrap_or(defaults.primary_endpoint),
            secondary_endpoint: non_empty_var("MINDSCOPE_SECONDARY_ENDPOINT")
                .unwrap_or(defaults.secondary_endpoint),
            api_key: non_empty_var("HUGGINGFACE_API_KEY"),
            ..defaults
        }
    }

    /// Last four characters of the credential, for logs.
    pub fn api_key_hint(&self) -> Option<String> {
        self.api_key.as_ref().map(|key| {
            let chars: Vec<char> = key.chars().collect();
            let tail: String = chars[chars.len().saturating_sub(4)..].iter().collect();
            format!("...{tail}")
        })
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("primary_endpoint", &self.primary_endpoint)
            .field("secondary_endpoint", &self.secondary_endpoint)
            .field("api_key", &self.api_key_hint())
            .field("primary_timeout", &self.primary_timeout)
            .field("secondary_timeout", &self.secondary_timeout)
            .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
