//! Completion client for Hireflow agents.
//!
//! Everything an agent needs from the language model goes through the
//! [`LlmClient`] trait: a temperature-controlled chat completion over a
//! system prompt and dialogue history. The concrete client talks to the
//! OpenAI chat-completions API; a retrying wrapper distinguishes transient
//! failures (rate limits, server errors) from fatal ones and backs off on
//! the former.

pub mod client;
pub mod config;
pub mod openai;
pub mod retry;

pub use client::{ChatMessage, CompletionRequest, CompletionResponse, LlmClient, Role, TokenUsage};
pub use config::{LlmConfig, build_llm_client};
pub use openai::OpenAiClient;
pub use retry::{RetryConfig, RetryingClient};
