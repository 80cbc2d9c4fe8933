//! Context Injection System
//!
//! Lets callers modify the outgoing messages right before each LLM call
//! without touching the stored history.
//!
//! # Example
//!
//! ```ignore
//! let mut chain = InjectionChain::new();
//! chain.add(LearningStateInjection);
//! chain.add_fn("be_brief", |_state, mut messages| {
//!     if let Some(last) = messages.last_mut() {
//!         last.append_text("\n\nKeep it short.");
//!     }
//!     messages
//! });
//! ```

use std::sync::Arc;

use crate::core::TutorState;
use crate::llm::{Role, Turn};

/// Trait for context injection implementations
///
/// For simple closures, use `FnInjection` instead.
pub trait ContextInjection: Send + Sync {
    /// Name of this injection (for logging/debugging)
    fn name(&self) -> &str;

    /// Return the (potentially modified) messages to send to the LLM.
    ///
    /// `state` is the snapshot the agent is currently working on.
    fn inject(&self, state: &TutorState, messages: Vec<Turn>) -> Vec<Turn>;
}

/// A context injection created from a closure
pub struct FnInjection<F>
where
    F: Fn(&TutorState, Vec<Turn>) -> Vec<Turn> + Send + Sync,
{
    name: String,
    func: F,
}

impl<F> FnInjection<F>
where
    F: Fn(&TutorState, Vec<Turn>) -> Vec<Turn> + Send + Sync,
{
    /// Create a new function-based injection
    pub fn new(name: impl Into<String>, func: F) -> Self {
        Self {
            name: name.into(),
            func,
        }
    }
}

impl<F> ContextInjection for FnInjection<F>
where
    F: Fn(&TutorState, Vec<Turn>) -> Vec<Turn> + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn inject(&self, state: &TutorState, messages: Vec<Turn>) -> Vec<Turn> {
        (self.func)(state, messages)
    }
}

/// Arc-wrapped injection for sharing across threads
pub type SharedInjection = Arc<dyn ContextInjection>;

/// A chain of context injections that are applied in order
#[derive(Clone, Default)]
pub struct InjectionChain {
    injections: Vec<SharedInjection>,
}

impl InjectionChain {
    /// Create a new empty injection chain
    pub fn new() -> Self {
        Self {
            injections: Vec::new(),
        }
    }

    /// Add an injection to the chain
    pub fn add<I: ContextInjection + 'static>(&mut self, injection: I) {
        self.injections.push(Arc::new(injection));
    }

    /// Add a function-based injection to the chain
    pub fn add_fn<F>(&mut self, name: impl Into<String>, func: F)
    where
        F: Fn(&TutorState, Vec<Turn>) -> Vec<Turn> + Send + Sync + 'static,
    {
        self.add(FnInjection::new(name, func));
    }

    /// Apply all injections in order
    ///
    /// Each injection receives the output of the previous one.
    pub fn apply(&self, state: &TutorState, mut messages: Vec<Turn>) -> Vec<Turn> {
        for injection in &self.injections {
            tracing::debug!("Applying context injection: {}", injection.name());
            messages = injection.inject(state, messages);
        }
        messages
    }

    /// Get the number of injections in the chain
    pub fn len(&self) -> usize {
        self.injections.len()
    }

    /// Check if the chain is empty
    pub fn is_empty(&self) -> bool {
        self.injections.is_empty()
    }

    /// Get the names of all injections in the chain
    pub fn names(&self) -> Vec<&str> {
        self.injections.iter().map(|i| i.name()).collect()
    }
}

// ============================================================================
// Learning state
// ============================================================================

/// Tells the model where the student stands.
///
/// Adds a `<learning-state>` block to the latest user turn so the tutor can
/// pitch its questions at the right level and build on covered topics.
pub struct LearningStateInjection;

impl LearningStateInjection {
    fn describe(state: &TutorState) -> String {
        let topics = if state.topics_covered.is_empty() {
            "none yet".to_string()
        } else {
            state.topics_covered.join(", ")
        };

        format!(
            "Student level: {}\nCurrent focus: {}\nLearning progress: {}%\nTopics covered: {}\nQuestions asked: {}",
            state.user_level,
            state.session_context,
            state.learning_progress,
            topics,
            state.questions_asked
        )
    }
}

impl ContextInjection for LearningStateInjection {
    fn name(&self) -> &str {
        "learning_state"
    }

    fn inject(&self, state: &TutorState, mut messages: Vec<Turn>) -> Vec<Turn> {
        let block = format!(
            "\n\n<learning-state>\n{}\n</learning-state>",
            Self::describe(state)
        );
        if let Some(turn) = messages.iter_mut().rev().find(|t| t.role == Role::User) {
            turn.append_text(&block);
        }
        messages
    }
}
