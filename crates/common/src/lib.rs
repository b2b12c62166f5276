//! Common types shared across Hireflow crates.
//!
//! This crate provides the foundational pieces the agent and LLM crates
//! build on: the error taxonomy, conversation turn records, and the
//! deployment settings loaded from the environment.

pub mod error;
pub mod settings;
pub mod turn;

pub use error::{HireflowError, Result};
pub use settings::Settings;
pub use turn::{ConversationTurn, TurnRole};
