//! Mini-game state machines. Each game owns an `Arc` to the deck it plays, so
//! front ends can hold them without borrowing the catalog.

pub mod flashcard;
pub mod phrase;
pub mod quiz;

pub use flashcard::{Direction, FlashcardEvent, FlashcardGame, FlashcardView};
pub use phrase::{PhraseEvent, PhraseGame, PhrasePhase, TileView};
pub use quiz::{OptionFeedback, QuizEvent, QuizGame, QuizPhase};

use crate::catalog::Catalog;

/// One instance of every game, all playing the decks of the same language.
#[derive(Debug, Clone)]
pub struct GameSet {
    language: String,
    pub flashcards: FlashcardGame,
    pub quiz: QuizGame,
    pub phrases: PhraseGame,
}

impl GameSet {
    pub fn for_language(catalog: &Catalog, code: &str) -> Self {
        GameSet {
            language: code.to_string(),
            flashcards: FlashcardGame::new(catalog.deck(code)),
            quiz: QuizGame::new(catalog.deck(code)),
            phrases: PhraseGame::new(catalog.deck(code)),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Starts every game over on the new language's decks. Selecting the
    /// current language again keeps progress.
    pub fn switch_language(&mut self, catalog: &Catalog, code: &str) -> bool {
        if self.language == code {
            return false;
        }
        log::debug!("Switching games from '{}' to '{}'", self.language, code);
        *self = GameSet::for_language(catalog, code);
        true
    }
}
