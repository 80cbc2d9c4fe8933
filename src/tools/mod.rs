//! Tool system for the tutor
//!
//! This module provides:
//! - `Tool` trait - Interface for implementing tools
//! - `ToolResult` - Result type for tool execution
//! - `ToolRegistry` - Registry for managing available tools
//! - `TavilySearchTool` - Web search used by the agent

mod registry;
mod search;
mod tool;

pub use registry::ToolRegistry;
pub use search::{TavilySearchTool, DEFAULT_MAX_RESULTS, TAVILY_SEARCH_URL};
pub use tool::{Tool, ToolResult};
