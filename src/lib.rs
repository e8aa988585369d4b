//! GenAI Loan Risk Assessment API Library
//!
//! This library provides the core functionality for the loan risk assessment
//! service: fixed in-memory customer record sets, policy document loading,
//! prompt assembly for the external model, the OpenAI-compatible chat client,
//! and the HTTP handlers that tie them together.
//!
//! # Modules
//!
//! - `assessment`: Per-request assessment orchestration.
//! - `config`: Configuration management.
//! - `errors`: Error handling types.
//! - `handlers`: HTTP request handlers.
//! - `models`: Core data models.
//! - `openai`: Chat-completions API client.
//! - `policy`: Policy document loading.
//! - `prompt`: Prompt and summary assembly.
//! - `records`: Fixed customer record sets.

pub mod assessment;
pub mod config;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod openai;
pub mod policy;
pub mod prompt;
pub mod records;
