pub mod config;
pub mod core;
pub mod tools;

// Optional components
pub mod cli;
pub mod llm;
pub mod logging;

// Helpers for shaping model requests
pub mod helpers;

// Tool-calling agent
pub mod agent;

pub use config::TutorConfig;
