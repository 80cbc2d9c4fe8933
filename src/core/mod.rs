//! Core types for the tutor
//!
//! This module provides the session state and the pure logic around it:
//! - `TutorState` - Session state and snapshot type
//! - `recent_turns` - Sliding history window
//! - `learning` - Keyword heuristics for progress tracking
//! - `TutorError` - Error types

pub mod error;
pub mod learning;
pub mod state;
pub mod window;

pub use error::{TutorError, TutorResult};
pub use learning::{detect_topic, is_question, QUESTION_WORDS, TOPIC_KEYWORDS};
pub use state::{TutorState, UserLevel};
pub use window::recent_turns;
