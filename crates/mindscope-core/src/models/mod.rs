pub mod chat;
pub mod mood;
pub mod screening;
pub mod tip;
