//! Text generation service client for Prescribe Engine
//!
//! Wraps the external generation capability behind the [`GenAiClient`]
//! trait: a single opaque `complete(prompt) -> text` call. The production
//! implementation talks to the Gemini `generateContent` REST endpoint; model
//! selection and tuning are configuration, never part of the workflow logic.
//!
//! The remote call is treated as possibly slow and possibly failing: every
//! request carries a client-side timeout, and all failures surface as
//! upstream errors for the dispatch layer to wrap into failure envelopes.

pub mod config;
pub mod error;
pub mod service;

pub use config::GenAiConfig;
pub use error::{GenAiError, GenAiResult};
pub use service::{GeminiClient, GenAiClient};
