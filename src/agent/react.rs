//! ReAct Agent Loop
//!
//! Handles one tutoring turn:
//! - Context injection before each LLM call
//! - LLM → Tools → LLM cycle until the model answers without tool calls
//! - A snapshot of the whole state after every step
//! - A step budget that stops runaway tool use

use std::sync::Arc;

use anyhow::Result;

use crate::core::TutorState;
use crate::llm::{LlmProvider, ToolCall, Turn};
use crate::tools::ToolResult;

use super::config::AgentConfig;
use super::service::{AgentService, SnapshotStream};

/// Reply used when the model asks for tools with too few steps left
pub const OUT_OF_STEPS_REPLY: &str = "Sorry, need more steps to process this request.";

/// A tool round-trip needs a tool step and a follow-up agent step
const MIN_STEPS_FOR_TOOLS: u32 = 2;

/// Tool-calling agent over an [`LlmProvider`]
///
/// # Example
///
/// ```ignore
/// let agent = ReactAgent::new(llm, AgentConfig::new().with_tools(tools));
/// let mut snapshots = agent.stream(state, "conversation_1");
/// while let Some(snapshot) = snapshots.next().await { /* ... */ }
/// ```
pub struct ReactAgent {
    llm: Arc<dyn LlmProvider>,
    config: AgentConfig,
}

impl ReactAgent {
    pub fn new(llm: Arc<dyn LlmProvider>, config: AgentConfig) -> Self {
        Self { llm, config }
    }

    /// Ask the model for the next assistant turn
    async fn agent_step(
        llm: &dyn LlmProvider,
        config: &AgentConfig,
        state: &TutorState,
        thread_id: &str,
    ) -> Result<Turn> {
        let messages = config.injections.apply(state, state.messages.clone());

        tracing::info!(
            "[ReactAgent] Calling {} with {} messages ({} steps left)",
            llm.model(),
            messages.len(),
            state.remaining_steps
        );

        let response = llm
            .complete(messages, config.tool_definitions(), Some(thread_id))
            .await?;

        Ok(response.turn)
    }

    /// Run every requested tool, answering each call with a tool turn
    async fn tool_step(config: &AgentConfig, calls: &[ToolCall]) -> Vec<Turn> {
        let mut results = Vec::with_capacity(calls.len());

        for call in calls {
            tracing::info!("[ReactAgent] Tool use: {} ({})", call.name, call.id);

            let result = match config.tools {
                Some(ref tools) => match tools.execute(&call.name, &call.arguments).await {
                    Ok(result) => result,
                    Err(e) => {
                        tracing::warn!("[ReactAgent] Tool {} failed: {}", call.name, e);
                        ToolResult::error(e.to_string())
                    }
                },
                None => ToolResult::error(format!(
                    "No tools configured, cannot execute: {}",
                    call.name
                )),
            };

            results.push(Turn::tool(&call.id, result.to_model_content()));
        }

        results
    }
}

impl AgentService for ReactAgent {
    fn stream(&self, state: TutorState, thread_id: &str) -> SnapshotStream {
        let llm = Arc::clone(&self.llm);
        let config = self.config.clone();
        let thread_id = thread_id.to_string();

        let stream = async_stream::stream! {
            let mut state = state;
            state.remaining_steps = config.max_steps;

            tracing::info!(
                "[ReactAgent] Run started on thread {} with {} messages",
                thread_id,
                state.messages.len()
            );
            yield Ok(state.clone());

            loop {
                let reply = match Self::agent_step(llm.as_ref(), &config, &state, &thread_id).await {
                    Ok(reply) => reply,
                    Err(e) => {
                        tracing::error!("[ReactAgent] LLM call failed: {}", e);
                        yield Err(e);
                        break;
                    }
                };
                state.remaining_steps = state.remaining_steps.saturating_sub(1);

                let reply = if reply.has_tool_calls() && state.remaining_steps < MIN_STEPS_FOR_TOOLS {
                    tracing::warn!("[ReactAgent] Step budget exhausted, dropping tool calls");
                    Turn::assistant(OUT_OF_STEPS_REPLY)
                } else {
                    reply
                };

                let calls = reply.tool_calls.clone();
                state.messages.push(reply);
                yield Ok(state.clone());

                if calls.is_empty() {
                    break;
                }

                let results = Self::tool_step(&config, &calls).await;
                state.messages.extend(results);
                state.remaining_steps = state.remaining_steps.saturating_sub(1);
                yield Ok(state.clone());
            }

            tracing::info!("[ReactAgent] Run finished on thread {}", thread_id);
        };

        Box::pin(stream)
    }
}
