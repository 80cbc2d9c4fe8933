//! Agent Configuration
//!
//! Configuration options for the ReactAgent.

use std::sync::Arc;

use crate::helpers::{ContextInjection, InjectionChain};
use crate::llm::ToolDefinition;
use crate::tools::ToolRegistry;

/// Step budget for one agent run
pub const DEFAULT_MAX_STEPS: u32 = 25;

/// Configuration for a ReactAgent
///
/// ```ignore
/// let config = AgentConfig::new()
///     .with_tools(tools)
///     .with_injection(LearningStateInjection)
///     .with_max_steps(25);
/// ```
#[derive(Clone)]
pub struct AgentConfig {
    /// Tool registry (optional - agent can work without tools)
    pub tools: Option<Arc<ToolRegistry>>,

    /// Context injection chain (applied before each LLM call)
    pub injections: InjectionChain,

    /// Agent and tool steps allowed per run
    pub max_steps: u32,
}

impl AgentConfig {
    pub fn new() -> Self {
        Self {
            tools: None,
            injections: InjectionChain::new(),
            max_steps: DEFAULT_MAX_STEPS,
        }
    }

    /// Set the tool registry
    pub fn with_tools(mut self, tools: Arc<ToolRegistry>) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Add a single injection to the chain
    pub fn with_injection<I: ContextInjection + 'static>(mut self, injection: I) -> Self {
        self.injections.add(injection);
        self
    }

    /// Set the step budget per run
    pub fn with_max_steps(mut self, max_steps: u32) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Get tool definitions (empty vec if no tools)
    pub fn tool_definitions(&self) -> Vec<ToolDefinition> {
        self.tools
            .as_ref()
            .map(|t| t.get_definitions())
            .unwrap_or_default()
    }
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AgentConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AgentConfig")
            .field("tools", &self.tools.as_ref().map(|t| t.tool_names()))
            .field("injections", &self.injections.names())
            .field("max_steps", &self.max_steps)
            .finish()
    }
}
