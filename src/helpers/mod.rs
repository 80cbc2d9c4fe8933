//! Helpers for shaping what the agent sends to the model

pub mod context_injection;

pub use context_injection::{
    ContextInjection, FnInjection, InjectionChain, LearningStateInjection, SharedInjection,
};
