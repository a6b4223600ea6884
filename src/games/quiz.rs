use std::sync::Arc;

use crate::catalog::Deck;
use crate::types::catalog_data::QuizQuestion;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Answering,
    Answered { chosen: String },
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizEvent {
    Select(String),
    Advance,
    Restart,
}

/// How an option should be shown once the question is answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionFeedback {
    Neutral,
    Correct,
    Wrong,
}

/// Multiple-choice run over a deck. The first answer to a question sticks.
#[derive(Debug, Clone)]
pub struct QuizGame {
    deck: Arc<Deck<QuizQuestion>>,
    index: usize,
    phase: QuizPhase,
    correct_count: usize,
}

impl QuizGame {
    pub fn new(deck: Arc<Deck<QuizQuestion>>) -> Self {
        QuizGame {
            deck,
            index: 0,
            phase: QuizPhase::Answering,
            correct_count: 0,
        }
    }

    pub fn deck(&self) -> &Deck<QuizQuestion> {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    pub fn correct_count(&self) -> usize {
        self.correct_count
    }

    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    pub fn selected_option(&self) -> Option<&str> {
        match &self.phase {
            QuizPhase::Answered { chosen } => Some(chosen),
            _ => None,
        }
    }

    pub fn current(&self) -> &QuizQuestion {
        self.deck.item(self.index)
    }

    /// Records an answer. Returns false when the tap is ignored.
    pub fn select_option(&mut self, option: &str) -> bool {
        if self.phase != QuizPhase::Answering {
            return false;
        }
        if option == self.current().answer {
            self.correct_count += 1;
        }
        self.phase = QuizPhase::Answered {
            chosen: option.to_string(),
        };
        true
    }

    /// Moves past an answered question; the last one finishes the run.
    pub fn advance(&mut self) -> bool {
        if !matches!(self.phase, QuizPhase::Answered { .. }) {
            return false;
        }
        if self.deck.is_last(self.index) {
            log::debug!(
                "Quiz finished with {} of {} correct",
                self.correct_count,
                self.deck.len()
            );
            self.phase = QuizPhase::Finished;
        } else {
            self.index += 1;
            self.phase = QuizPhase::Answering;
        }
        true
    }

    pub fn restart(&mut self) -> bool {
        if !self.is_finished() {
            return false;
        }
        self.index = 0;
        self.correct_count = 0;
        self.phase = QuizPhase::Answering;
        true
    }

    pub fn apply(mut self, event: QuizEvent) -> Self {
        match event {
            QuizEvent::Select(option) => {
                self.select_option(&option);
            }
            QuizEvent::Advance => {
                self.advance();
            }
            QuizEvent::Restart => {
                self.restart();
            }
        }
        self
    }

    pub fn option_feedback(&self, option: &str) -> OptionFeedback {
        let Some(chosen) = self.selected_option() else {
            return OptionFeedback::Neutral;
        };
        if option == self.current().answer {
            OptionFeedback::Correct
        } else if option == chosen {
            OptionFeedback::Wrong
        } else {
            OptionFeedback::Neutral
        }
    }

    pub fn position(&self) -> String {
        format!("{}/{}", self.index + 1, self.deck.len())
    }

    pub fn advance_label(&self) -> &'static str {
        if self.deck.is_last(self.index) {
            "Finish"
        } else {
            "Next"
        }
    }

    /// Score line shown once the run is over.
    pub fn summary(&self) -> Option<String> {
        self.is_finished().then(|| {
            format!(
                "You answered {} out of {} correctly.",
                self.correct_count,
                self.deck.len()
            )
        })
    }
}
