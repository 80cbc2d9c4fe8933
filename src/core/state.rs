//! Tutor session state

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::llm::Turn;

/// Label used before any finance keyword has been seen
pub const INITIAL_CONTEXT: &str = "introduction";

/// Self-reported or inferred experience of the student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserLevel {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

impl std::fmt::Display for UserLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserLevel::Beginner => write!(f, "beginner"),
            UserLevel::Intermediate => write!(f, "intermediate"),
            UserLevel::Advanced => write!(f, "advanced"),
        }
    }
}

/// Everything tracked about one tutoring session
///
/// Updates produce a new record (see [`TutorState::after_user_input`] and
/// [`TutorState::absorb_snapshot`]); the same type doubles as the snapshot
/// the agent yields after each step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorState {
    /// Dialogue so far. The first turn is the system prompt.
    pub messages: Vec<Turn>,

    /// Agent steps left in the current run
    pub remaining_steps: u32,

    pub user_level: UserLevel,

    /// Topic labels in the order they first came up, no duplicates
    pub topics_covered: Vec<String>,

    /// 0..=100
    pub learning_progress: u8,

    /// Current focus area
    pub session_context: String,

    pub questions_asked: u32,

    pub started_at: DateTime<Utc>,
}

impl TutorState {
    /// Fresh session seeded with the system prompt
    pub fn new(system_prompt: impl Into<String>, remaining_steps: u32) -> Self {
        Self {
            messages: vec![Turn::system(system_prompt)],
            remaining_steps,
            user_level: UserLevel::default(),
            topics_covered: Vec::new(),
            learning_progress: 0,
            session_context: INITIAL_CONTEXT.to_string(),
            questions_asked: 0,
            started_at: Utc::now(),
        }
    }

    /// Copy of this state with `messages` replaced
    pub fn with_messages(&self, messages: Vec<Turn>) -> Self {
        Self {
            messages,
            ..self.clone()
        }
    }

    /// Copy of this state with `turn` appended to the history
    pub fn with_turn(&self, turn: Turn) -> Self {
        let mut messages = self.messages.clone();
        messages.push(turn);
        self.with_messages(messages)
    }

    /// Take every field of an agent snapshot except its messages
    pub fn absorb_snapshot(&self, snapshot: &TutorState) -> Self {
        snapshot.with_messages(self.messages.clone())
    }

    /// The last turn, if any
    pub fn last_turn(&self) -> Option<&Turn> {
        self.messages.last()
    }
}
