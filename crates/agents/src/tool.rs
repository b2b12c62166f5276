//! The tool contract and the toolbox registry.
//!
//! Tools are stateless, reusable capabilities (resume parsing, interview
//! logic, matching, coordination). Concrete implementations live outside
//! this crate; agents only need the name/description/invoke contract. A
//! failed invocation is an `Err`, distinguishable from a successful but
//! empty `Ok(String::new())`.

use std::collections::HashMap;
use std::sync::Arc;

use hireflow_common::{HireflowError, Result};

/// Tool names the role variants reference.
pub mod names {
    pub const RESUME_PARSER: &str = "resume_parser";
    pub const INTERVIEW: &str = "interview";
    pub const MATCHING: &str = "matching";
    pub const COORDINATION: &str = "coordination";
}

/// An externally implemented capability an agent can use.
pub trait Tool: Send + Sync {
    /// Identifier the executor selects the tool by.
    fn name(&self) -> &str;

    /// Natural-language description consumed for tool selection.
    fn description(&self) -> &str;

    /// Invoke the tool synchronously.
    fn invoke(&self, input: &str) -> Result<String>;
}

impl std::fmt::Debug for dyn Tool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tool").field("name", &self.name()).finish()
    }
}

/// Registry the role variants resolve their declared tool names against.
///
/// Registering a tool under an already-used name replaces the previous
/// entry; tools are shared freely across agents since they hold no
/// conversation state.
#[derive(Default)]
pub struct Toolbox {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl Toolbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Resolve a declared tool list, preserving its order. Any missing name
    /// is a configuration error.
    pub fn resolve(&self, tool_names: &[&str]) -> Result<Vec<Arc<dyn Tool>>> {
        tool_names
            .iter()
            .map(|name| {
                self.get(name).ok_or_else(|| {
                    HireflowError::Config(format!("Tool '{name}' is not registered"))
                })
            })
            .collect()
    }
}
