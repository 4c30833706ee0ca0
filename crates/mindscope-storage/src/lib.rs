//! mindscope-storage
//!
//! Record persistence. JSON objects under a data directory, addressed by
//! the keys defined in `mindscope_core::keys`.

pub mod error;
pub mod json;
pub mod objects;
pub mod records;
