//! The tutoring agent: a tool-calling loop behind the `AgentService` contract

pub mod config;
pub mod react;
pub mod service;
pub mod system_prompt;

pub use config::{AgentConfig, DEFAULT_MAX_STEPS};
pub use react::{ReactAgent, OUT_OF_STEPS_REPLY};
pub use service::{AgentService, SnapshotStream};
pub use system_prompt::{default_system_prompt, SYSTEM_PROMPT};
