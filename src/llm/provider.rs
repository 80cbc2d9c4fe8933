//! LLM Provider trait
//!
//! Abstracts the model backend so the agent loop can run against the hosted
//! API or an in-memory fake in tests.

use anyhow::Result;

use super::types::{ChatResponse, ToolDefinition, Turn};

/// Trait for chat models that can be driven by the agent loop.
#[async_trait::async_trait]
pub trait LlmProvider: Send + Sync {
    /// Send the conversation with the available tools and return the model's reply.
    ///
    /// `session_id` identifies the conversation thread and is forwarded to
    /// the provider for attribution.
    async fn complete(
        &self,
        messages: Vec<Turn>,
        tools: Vec<ToolDefinition>,
        session_id: Option<&str>,
    ) -> Result<ChatResponse>;

    /// Get the current model name.
    fn model(&self) -> String;

    /// Get the provider name (e.g., "openai").
    fn provider_name(&self) -> &str;
}
