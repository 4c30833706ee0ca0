use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use mindscope_chat::chain::{ResponseChain, ResponseProvider, PLACEHOLDER_REPLY};
use mindscope_chat::config::ChatConfig;
use mindscope_chat::context::ChatMessage;
use mindscope_chat::error::ChatError;
use mindscope_chat::keywords::ReplyTopic;
use mindscope_core::models::chat::ResponseSource;

/// A provider that replays a fixed outcome and records its calls.
struct Scripted {
    name: &'static str,
    source: ResponseSource,
    outcome: fn() -> Result<Option<String>, ChatError>,
    calls: Arc<Mutex<Vec<(String, usize)>>>,
}

impl Scripted {
    fn new(
        name: &'static str,
        source: ResponseSource,
        outcome: fn() -> Result<Option<String>, ChatError>,
    ) -> Self {
        Self {
            name,
            source,
            outcome,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }
}

impl ResponseProvider for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn source(&self) -> ResponseSource {
        self.source
    }

    fn attempt(&self, message: &str, history: &[ChatMessage]) -> Result<Option<String>, ChatError> {
        self.calls.lock().unwrap().push((message.to_string(), history.len()));
        (self.outcome)()
    }
}

/// An address nothing listens on.
fn dead_endpoint() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}/models/unreachable")
}

#[test]
fn first_successful_provider_wins() {
    let chain = ResponseChain::new(vec![
        Box::new(Scripted::new("a", ResponseSource::Primary, || {
            Ok(Some("from primary".to_string()))
        })),
        Box::new(Scripted::new("b", ResponseSource::Secondary, || {
            panic!("second provider must not be called")
        })),
    ]);

    let reply = chain.respond("hello", &[ChatMessage::user("earlier")]);
    assert_eq!(reply.text, "from primary");
    assert_eq!(reply.source, ResponseSource::Primary);
}

#[test]
fn failures_and_skips_fall_through() {
    let chain = ResponseChain::new(vec![
        Box::new(Scripted::new("skip", ResponseSource::Primary, || Ok(None))),
        Box::new(Scripted::new("fail", ResponseSource::Secondary, || {
            Err(ChatError::Remote("model loading".to_string()))
        })),
    ]);

    let reply = chain.respond("I'm feeling anxious", &[]);
    assert_eq!(reply.source, ResponseSource::Keyword);
    assert_eq!(reply.text, ReplyTopic::Anxious.reply());
}

#[test]
fn empty_and_placeholder_replies_are_not_used() {
    let chain = ResponseChain::new(vec![
        Box::new(Scripted::new("blank", ResponseSource::Primary, || {
            Ok(Some("   ".to_string()))
        })),
        Box::new(Scripted::new("placeholder", ResponseSource::Secondary, || {
            Ok(Some(PLACEHOLDER_REPLY.to_string()))
        })),
    ]);

    let reply = chain.respond("hello", &[]);
    assert_eq!(reply.source, ResponseSource::Keyword);
    assert_eq!(reply.text, ReplyTopic::Greeting.reply());
}

#[test]
fn providers_receive_message_and_history() {
    let provider = Scripted::new("spy", ResponseSource::Primary, || Ok(None));
    let calls = Arc::clone(&provider.calls);
    let chain = ResponseChain::new(vec![Box::new(provider)]);
    let history = vec![ChatMessage::user("a"), ChatMessage::assistant("b")];
    let reply = chain.respond("what now", &history);
    assert_eq!(reply.source, ResponseSource::Keyword);
    assert_eq!(*calls.lock().unwrap(), vec![("what now".to_string(), 2)]);
}

#[test]
fn keywords_only_chain_always_answers() {
    let chain = ResponseChain::keywords_only();
    let reply = chain.respond("", &[]);
    assert_eq!(reply.text, ReplyTopic::Default.reply());
}

#[test]
fn no_credential_and_unreachable_secondary_yields_keyword_reply() {
    let config = ChatConfig {
        primary_endpoint: dead_endpoint(),
        secondary_endpoint: dead_endpoint(),
        api_key: None,
        primary_timeout: Duration::from_secs(2),
        secondary_timeout: Duration::from_secs(2),
    };
    let chain = ResponseChain::from_config(&config);

    let reply = chain.respond("I'm feeling anxious", &[]);
    assert_eq!(reply.source, ResponseSource::Keyword);
    assert_eq!(reply.text, ReplyTopic::Anxious.reply());
}

#[test]
fn unreachable_primary_with_credential_still_answers() {
    let config = ChatConfig {
        primary_endpoint: dead_endpoint(),
        secondary_endpoint: dead_endpoint(),
        api_key: Some("hf_test_key".to_string()),
        primary_timeout: Duration::from_secs(2),
        secondary_timeout: Duration::from_secs(2),
    };
    let reply = ResponseChain::from_config(&config).respond("I need help with stress management", &[]);
    assert_eq!(reply.text, ReplyTopic::Stress.reply());
}

#[test]
fn config_debug_hides_credential() {
    let config = ChatConfig {
        api_key: Some("hf_supersecret1234".to_string()),
        ..ChatConfig::default()
    };
    let rendered = format!("{config:?}");
    assert!(!rendered.contains("supersecret"));
    assert!(rendered.contains("1234"));
}
