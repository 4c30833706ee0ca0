//! mindscope-chat
//!
//! Supportive chat replies. A message goes through an ordered chain of
//! response providers: hosted inference with the conversation history,
//! a smaller unauthenticated model, and finally a keyword matcher that
//! always answers.

pub mod chain;
pub mod config;
pub mod context;
pub mod error;
pub mod extract;
pub mod inference;
pub mod keywords;
