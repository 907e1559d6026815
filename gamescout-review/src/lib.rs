//! Review enrichment for catalog records.
//!
//! Each record gets at most one call to a chat-style language-model service,
//! which is asked for a short review and a 1-10 rating. Failures never leave
//! this crate: a bad call yields an empty outcome and the caller moves on.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;
pub mod service;

pub use client::{ChatBackend, ChatClient, DEFAULT_MODEL};
pub use error::ReviewError;
pub use parse::parse_response;
pub use service::{LlmReviewer, ReviewService};
