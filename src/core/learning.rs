//! Keyword heuristics that track learning progress
//!
//! Matching is plain substring search on the lowercased input, so "somewhat"
//! counts as containing "what". The results only feed the progress summary
//! and the learning-state injection.

use super::state::TutorState;

/// Words that mark the input as a question
pub const QUESTION_WORDS: &[&str] = &["what", "how", "why", "explain"];

/// Ordered `(keyword, topic label)` table.
///
/// The first keyword found in the input decides the topic, so order is
/// precedence: "stock dividend" maps to `stock_market`.
pub const TOPIC_KEYWORDS: &[(&str, &str)] = &[
    ("stock", "stock_market"),
    ("investment", "investing"),
    ("portfolio", "portfolio_management"),
    ("risk", "risk_management"),
    ("dividend", "dividend_investing"),
    ("budget", "budgeting"),
    ("savings", "savings_strategies"),
];

/// Progress awarded per question
pub const PROGRESS_PER_QUESTION: u8 = 2;

/// Upper bound of `learning_progress`
pub const MAX_PROGRESS: u8 = 100;

/// Whether the input reads like a question
pub fn is_question(input: &str) -> bool {
    let lowered = input.to_lowercase();
    QUESTION_WORDS.iter().any(|word| lowered.contains(word))
}

/// Topic label for the first matching keyword, if any
pub fn detect_topic(input: &str) -> Option<&'static str> {
    let lowered = input.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(keyword, _)| lowered.contains(keyword))
        .map(|(_, label)| *label)
}

impl TutorState {
    /// State after the student sends `input`.
    ///
    /// Counts the question, awards progress for question words (capped at
    /// [`MAX_PROGRESS`]) and switches the session context to the detected
    /// topic, recording it the first time it appears. Messages are untouched.
    pub fn after_user_input(&self, input: &str) -> TutorState {
        let mut next = self.clone();
        next.questions_asked = self.questions_asked.saturating_add(1);

        if is_question(input) {
            next.learning_progress = self
                .learning_progress
                .saturating_add(PROGRESS_PER_QUESTION)
                .min(MAX_PROGRESS);
        }

        if let Some(topic) = detect_topic(input) {
            next.session_context = topic.to_string();
            if !next.topics_covered.iter().any(|t| t == topic) {
                next.topics_covered.push(topic.to_string());
            }
        }

        tracing::debug!(
            questions_asked = next.questions_asked,
            learning_progress = next.learning_progress,
            session_context = %next.session_context,
            "Learning state updated"
        );

        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TutorState {
        TutorState::new("system prompt", 25)
    }

    #[test]
    fn test_questions_asked_always_increments() {
        let inputs = ["", "hello", "What is a stock?", "budget budget budget", "🙂"];
        let mut current = state();
        for (i, input) in inputs.iter().enumerate() {
            current = current.after_user_input(input);
            assert_eq!(current.questions_asked, i as u32 + 1);
        }
    }

    #[test]
    fn test_question_words_award_progress() {
        let next = state().after_user_input("How do bonds work?");
        assert_eq!(next.learning_progress, 2);

        let next = state().after_user_input("Tell me about bonds.");
        assert_eq!(next.learning_progress, 0);

        // Case-insensitive substring match
        let next = state().after_user_input("EXPLAIN compounding");
        assert_eq!(next.learning_progress, 2);
    }

    #[test]
    fn test_progress_is_capped() {
        let mut current = state();
        for _ in 0..80 {
            current = current.after_user_input("why?");
            assert!(current.learning_progress <= MAX_PROGRESS);
        }
        assert_eq!(current.learning_progress, 100);

        let mut near_cap = state();
        near_cap.learning_progress = 99;
        assert_eq!(near_cap.after_user_input("what").learning_progress, 100);
    }

    #[test]
    fn test_stock_topic_recorded_once() {
        let mut current = state();
        for input in ["What is a stock?", "more stock talk", "STOCKS again"] {
            current = current.after_user_input(input);
            assert_eq!(current.session_context, "stock_market");
        }
        assert_eq!(current.topics_covered, vec!["stock_market".to_string()]);
    }

    #[test]
    fn test_first_keyword_in_table_order_wins() {
        // "dividend" appears first in the text but "stock" is earlier in the table
        let next = state().after_user_input("dividend stock");
        assert_eq!(next.session_context, "stock_market");
        assert_eq!(next.topics_covered, vec!["stock_market".to_string()]);
    }

    #[test]
    fn test_topics_keep_insertion_order() {
        let next = state()
            .after_user_input("How should I budget?")
            .after_user_input("what about risk")
            .after_user_input("back to my budget");

        assert_eq!(next.session_context, "budgeting");
        assert_eq!(
            next.topics_covered,
            vec!["budgeting".to_string(), "risk_management".to_string()]
        );
    }

    #[test]
    fn test_no_keyword_keeps_context() {
        let next = state().after_user_input("hello there");
        assert_eq!(next.session_context, "introduction");
        assert!(next.topics_covered.is_empty());
    }

    #[test]
    fn test_update_does_not_touch_messages_or_input_state() {
        let before = state();
        let next = before.after_user_input("What is a portfolio?");
        assert_eq!(next.messages, before.messages);
        assert_eq!(before.questions_asked, 0);
        assert!(before.topics_covered.is_empty());
    }

    #[test]
    fn test_detect_topic() {
        assert_eq!(detect_topic("my savings account"), Some("savings_strategies"));
        assert_eq!(detect_topic("Investment basics"), Some("investing"));
        assert_eq!(detect_topic("weather"), None);
    }
}
