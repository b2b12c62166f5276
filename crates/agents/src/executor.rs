//! The executor contract: the tool-augmented completion loop.
//!
//! The base agent treats the executor as opaque. It hands over the system
//! prompt, the user input, the tool list (in declared order), and mutable
//! access to its memory; the executor decides which tools to call and when
//! to stop, appends the resulting turns, and returns the final text.

use std::sync::Arc;

use async_trait::async_trait;
use hireflow_common::{ConversationTurn, Result};
use hireflow_llm::{ChatMessage, CompletionRequest, LlmClient};
use tracing::debug;

use crate::memory::ConversationMemory;
use crate::tool::Tool;

/// Everything an executor receives for one request cycle, except the
/// memory it mutates.
pub struct ExecutionContext<'a> {
    pub system_prompt: &'a str,
    pub input: &'a str,
    /// Tools in the order the role variant declared them. Executors may use
    /// this order as a tie-break among equally applicable tools.
    pub tools: &'a [Arc<dyn Tool>],
    pub temperature: f32,
}

/// The completion loop an agent delegates to.
///
/// Implementations append the turns they produce to `memory`; the agent
/// does not duplicate that append. Errors returned here are converted to
/// fail-soft text at the agent boundary.
#[async_trait]
pub trait Executor: Send + Sync {
    async fn execute(
        &self,
        ctx: ExecutionContext<'_>,
        memory: &mut ConversationMemory,
    ) -> Result<String>;
}

/// Default executor: a single completion round with no tool dispatch.
///
/// Sends the system prompt plus the dialogue history to the completion
/// client, appends the user turn and the assistant turn, and returns the
/// response text. Richer tool-selection loops implement [`Executor`]
/// themselves and drop in through the same constructor parameter.
pub struct CompletionExecutor {
    client: Arc<dyn LlmClient>,
    max_tokens: Option<u32>,
}

impl CompletionExecutor {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self {
            client,
            max_tokens: None,
        }
    }

    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

#[async_trait]
impl Executor for CompletionExecutor {
    async fn execute(
        &self,
        ctx: ExecutionContext<'_>,
        memory: &mut ConversationMemory,
    ) -> Result<String> {
        let mut messages: Vec<ChatMessage> = memory.turns().iter().map(ChatMessage::from).collect();
        messages.push(ChatMessage::user(ctx.input));

        debug!(
            model = %self.client.model_name(),
            history_turns = memory.len(),
            tools = ctx.tools.len(),
            "Running completion round"
        );

        let request = CompletionRequest {
            system_prompt: Some(ctx.system_prompt.to_string()),
            messages,
            temperature: Some(ctx.temperature),
            max_tokens: self.max_tokens,
        };

        let response = self.client.complete(request).await?;

        memory.append(ConversationTurn::user(ctx.input));
        memory.append(ConversationTurn::assistant(&response.content));

        Ok(response.content)
    }
}
