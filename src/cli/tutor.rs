//! Interactive tutoring loop
//!
//! Each turn: update the learning state from the input, append the user
//! turn, window the history, run the agent, keep its final reply.

use std::sync::Arc;

use anyhow::{Context, Result};
use futures::StreamExt;

use crate::agent::AgentService;
use crate::core::{recent_turns, TutorState};
use crate::llm::{Role, Turn};

use super::console::Console;

/// Inputs that end the session
pub const EXIT_COMMANDS: &[&str] = &["bye", "exit"];

/// Whether `input` ends the session (case-insensitive, surrounding space ignored)
pub fn is_exit_command(input: &str) -> bool {
    let lowered = input.trim().to_lowercase();
    EXIT_COMMANDS.contains(&lowered.as_str())
}

/// One tutoring session over a console
pub struct TutorSession {
    agent: Arc<dyn AgentService>,
    console: Console,
    state: TutorState,
    window_size: usize,
    thread_id: String,
}

impl TutorSession {
    pub fn new(
        agent: Arc<dyn AgentService>,
        console: Console,
        state: TutorState,
        window_size: usize,
        thread_id: impl Into<String>,
    ) -> Self {
        Self {
            agent,
            console,
            state,
            window_size,
            thread_id: thread_id.into(),
        }
    }

    /// Current session state
    pub fn state(&self) -> &TutorState {
        &self.state
    }

    /// Run until an exit command or end of input, then print the summary
    pub async fn run(&mut self) -> Result<()> {
        self.console.print_banner()?;

        while let Some(input) = self.console.read_input()? {
            if is_exit_command(&input) {
                tracing::info!("Exit command received");
                break;
            }

            if let Some(reply) = self.handle_input(&input).await? {
                self.console.print_educator(&reply.content)?;
            }
        }

        self.console.print_summary(&self.state)?;

        let elapsed = chrono::Utc::now() - self.state.started_at;
        tracing::info!(
            questions_asked = self.state.questions_asked,
            topics = self.state.topics_covered.len(),
            learning_progress = self.state.learning_progress,
            "Session ended after {}s",
            elapsed.num_seconds()
        );

        Ok(())
    }

    /// Process one student message and return the tutor's reply, if any
    pub async fn handle_input(&mut self, input: &str) -> Result<Option<Turn>> {
        let state = self
            .state
            .after_user_input(input)
            .with_turn(Turn::user(input));

        let windowed = recent_turns(&state.messages, self.window_size);
        tracing::debug!(
            "Sending {} of {} turns to the agent",
            windowed.len(),
            state.messages.len()
        );

        let mut snapshots = self.agent.stream(state.with_messages(windowed), &self.thread_id);

        let mut current = state;
        let mut last_snapshot = None;
        while let Some(snapshot) = snapshots.next().await {
            let snapshot = snapshot.context("Agent run failed")?;
            current = current.absorb_snapshot(&snapshot);
            last_snapshot = Some(snapshot);
        }

        let reply = last_snapshot
            .and_then(|s| s.messages.last().cloned())
            .filter(|turn| turn.role == Role::Assistant);

        if let Some(ref reply) = reply {
            current = current.with_turn(reply.clone());
        } else {
            tracing::warn!("Agent finished without an assistant reply");
        }

        self.state = current;
        Ok(reply)
    }
}
