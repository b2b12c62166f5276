//! The base agent: identity, memory, tools, and the request cycle.

use std::sync::Arc;

use hireflow_common::{HireflowError, Result};
use tracing::{info, warn};

use crate::executor::{ExecutionContext, Executor};
use crate::memory::{ConversationMemory, MemorySnapshot};
use crate::tool::{Tool, Toolbox};

/// Declarative description of a role variant.
///
/// A new role is added by declaring a new profile, never by changing
/// [`Agent`] itself. Tool names may overlap across profiles; tools are
/// stateless and shared.
#[derive(Debug, Clone, Copy)]
pub struct RoleProfile {
    /// Display name, e.g. `Screener`
    pub name: &'static str,
    /// Short responsibility label
    pub role: &'static str,
    /// Long-form responsibility description used in the system prompt
    pub description: &'static str,
    /// Response randomness, in [0, 1]
    pub temperature: f32,
    /// Tools in the order they are handed to the executor
    pub tool_names: &'static [&'static str],
}

/// An identity + tool-set + memory bundle that produces text responses.
///
/// Identity, tools, and temperature are fixed at construction; the
/// conversation memory is the only mutable state. One `run` call is
/// expected to complete before the next on the same instance (`&mut self`
/// enforces that); distinct instances share nothing and may run
/// concurrently.
pub struct Agent {
    name: String,
    role: String,
    role_description: String,
    tools: Vec<Arc<dyn Tool>>,
    temperature: f32,
    memory: ConversationMemory,
    executor: Arc<dyn Executor>,
}

impl Agent {
    /// Construct an agent from its parts.
    ///
    /// Fails with a configuration error if the temperature is outside
    /// [0, 1] or the role description is empty. Both are construction
    /// defects, not runtime conditions.
    pub fn new(
        name: impl Into<String>,
        role: impl Into<String>,
        role_description: impl Into<String>,
        tools: Vec<Arc<dyn Tool>>,
        temperature: f32,
        executor: Arc<dyn Executor>,
    ) -> Result<Self> {
        let name = name.into();
        let role_description = role_description.into();

        if !(0.0..=1.0).contains(&temperature) {
            return Err(HireflowError::Config(format!(
                "Agent '{name}' temperature {temperature} is outside [0, 1]"
            )));
        }
        if role_description.trim().is_empty() {
            return Err(HireflowError::Config(format!(
                "Agent '{name}' has an empty role description"
            )));
        }

        Ok(Self {
            name,
            role: role.into(),
            role_description,
            tools,
            temperature,
            memory: ConversationMemory::new(),
            executor,
        })
    }

    /// Construct a role variant from its profile, resolving tool names
    /// against the toolbox in declared order.
    pub fn from_profile(
        profile: &RoleProfile,
        toolbox: &Toolbox,
        executor: Arc<dyn Executor>,
    ) -> Result<Self> {
        if profile.tool_names.is_empty() {
            return Err(HireflowError::Config(format!(
                "Role '{}' declares no tools",
                profile.name
            )));
        }
        let tools = toolbox.resolve(profile.tool_names)?;
        Self::new(
            profile.name,
            profile.role,
            profile.description,
            tools,
            profile.temperature,
            executor,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn temperature(&self) -> f32 {
        self.temperature
    }

    pub fn tools(&self) -> &[Arc<dyn Tool>] {
        &self.tools
    }

    /// Build the system prompt: fixed boilerplate, the role description,
    /// and the current memory rendered as text. Deterministic for a given
    /// memory state.
    pub fn build_system_prompt(&self) -> String {
        format!(
            "You are {name}, an AI agent responsible for {role}.\n\
             \n\
             {description}\n\
             \n\
             You should:\n\
             1. Be professional and courteous\n\
             2. Provide clear and concise responses\n\
             3. Ask clarifying questions when needed\n\
             4. Document your reasoning\n\
             5. Follow best practices for your role\n\
             \n\
             Current conversation context:\n\
             {context}",
            name = self.name,
            role = self.role,
            description = self.role_description,
            context = self.memory.render(),
        )
    }

    /// The single request/response entry point.
    ///
    /// Hands the input, tools, and memory to the executor and returns its
    /// text. Any executor failure becomes an `"Error: ..."` text response
    /// so a conversational caller never sees a hard fault; only
    /// construction surfaces real errors.
    pub async fn run(&mut self, input_text: &str) -> String {
        info!(agent = %self.name, "Processing request");

        let system_prompt = self.build_system_prompt();
        let ctx = ExecutionContext {
            system_prompt: &system_prompt,
            input: input_text,
            tools: &self.tools,
            temperature: self.temperature,
        };

        match self.executor.execute(ctx, &mut self.memory).await {
            Ok(response) => response,
            Err(e) => {
                warn!(agent = %self.name, error = %e, "Request failed, returning fail-soft text");
                format!("Error: {e}")
            }
        }
    }

    /// Empty the conversation memory. Idempotent.
    pub fn clear_memory(&mut self) {
        self.memory.clear();
    }

    /// Read-only copy of the current conversation history.
    pub fn memory_snapshot(&self) -> MemorySnapshot {
        self.memory.snapshot()
    }
}
