//! Hiring-assistant agents.
//!
//! This crate implements the agent composition model: an [`Agent`] is an
//! identity (name, role, role description), a fixed ordered tool set, a
//! temperature, and an isolated conversation memory. Four role variants are
//! declared as pure configuration:
//!
//! - **Screener**: resume analysis and candidate triage (0.3)
//! - **Interviewer**: dynamic interviews (0.7)
//! - **Matcher**: culture and skill fit analysis (0.5)
//! - **Coordinator**: workflow orchestration (0.5)
//!
//! A request flows: role variant assembles its tool list and temperature,
//! the agent builds a system prompt from role description plus memory, and
//! an [`Executor`] performs the completion round and appends the resulting
//! turns. Each agent owns its memory; variants never observe each other's
//! conversation state.

pub mod agent;
pub mod executor;
pub mod memory;
pub mod roles;
pub mod tool;

pub use agent::{Agent, RoleProfile};
pub use executor::{CompletionExecutor, ExecutionContext, Executor};
pub use memory::{ConversationMemory, MemorySnapshot};
pub use roles::{COORDINATOR, INTERVIEWER, MATCHER, ROLE_PROFILES, SCREENER};
pub use tool::{Tool, Toolbox};
