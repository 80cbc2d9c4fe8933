//! Agent service contract
//!
//! The tutor hands the agent a state and a thread id and receives a stream of
//! state snapshots. Only the final snapshot's last message is used.

use std::pin::Pin;

use anyhow::Result;
use futures::stream::Stream;

use crate::core::TutorState;

/// Stream of snapshots produced by one agent run
pub type SnapshotStream = Pin<Box<dyn Stream<Item = Result<TutorState>> + Send>>;

/// Anything that can answer a tutoring turn
pub trait AgentService: Send + Sync {
    /// Start a run over `state` on conversation `thread_id`.
    fn stream(&self, state: TutorState, thread_id: &str) -> SnapshotStream;
}
