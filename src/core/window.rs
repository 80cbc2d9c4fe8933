//! Sliding history window
//!
//! The agent only ever sees a bounded suffix of the dialogue. The first turn
//! holds the system prompt and is kept in every window.

use crate::llm::Turn;

/// Return the first turn plus the most recent `window - 1` turns.
///
/// Histories no longer than `window` are returned unchanged. A `window` of
/// 0 or 1 keeps only the first turn once the history exceeds it.
pub fn recent_turns(turns: &[Turn], window: usize) -> Vec<Turn> {
    if turns.len() <= window {
        return turns.to_vec();
    }

    let tail = window.saturating_sub(1);
    let mut windowed = Vec::with_capacity(tail + 1);
    windowed.push(turns[0].clone());
    windowed.extend_from_slice(&turns[turns.len() - tail..]);
    windowed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn history(len: usize) -> Vec<Turn> {
        let mut turns = vec![Turn::system("You are a financial educator.")];
        for i in 1..len {
            if i % 2 == 1 {
                turns.push(Turn::user(format!("question {}", i)));
            } else {
                turns.push(Turn::assistant(format!("answer {}", i)));
            }
        }
        turns
    }

    #[test]
    fn test_short_history_is_unchanged() {
        for len in 0..=10 {
            let turns = history(len.max(1));
            assert_eq!(recent_turns(&turns, 10), turns);
        }
        assert!(recent_turns(&[], 10).is_empty());
    }

    #[test]
    fn test_long_history_keeps_system_and_tail() {
        let turns = history(15);
        let windowed = recent_turns(&turns, 10);

        assert_eq!(windowed.len(), 10);
        assert_eq!(windowed[0], turns[0]);
        assert_eq!(&windowed[1..], &turns[6..]);
    }

    #[test]
    fn test_window_bound_holds_for_every_length() {
        for window in 2..8 {
            for len in 1..30 {
                let turns = history(len);
                let windowed = recent_turns(&turns, window);
                assert!(windowed.len() <= window);
                assert_eq!(windowed[0], turns[0]);
                assert_eq!(windowed.last(), turns.last());
            }
        }
    }

    #[test]
    fn test_degenerate_windows_keep_only_system_turn() {
        let turns = history(5);
        assert_eq!(recent_turns(&turns, 1), vec![turns[0].clone()]);
        assert_eq!(recent_turns(&turns, 0), vec![turns[0].clone()]);
    }

    #[test]
    fn test_input_is_not_mutated() {
        let turns = history(12);
        let before = turns.clone();
        let _ = recent_turns(&turns, 4);
        assert_eq!(turns, before);
    }
}
