//! Core engine for deckgen - turns narration into structured presentations
//!
//! Takes free-form source text (or recorded audio, via transcription) and
//! calls a generative-AI endpoint to synthesize a validated presentation
//! document, handling upstream unreliability with bounded timeouts,
//! exponential-backoff retries, and defensive parsing of model output.

pub mod ai;
pub mod app;
pub mod classify;
pub mod error;
pub mod extract;
pub mod models;
pub mod prompts;
pub mod retry;
pub mod validate;

pub use error::{Error, Result};
