use std::sync::Arc;

use crate::catalog::Deck;
use crate::types::catalog_data::Flashcard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardEvent {
    Advance(Direction),
    ToggleReveal,
}

/// Flip-card drill: front shows the prompt, back the translation.
#[derive(Debug, Clone)]
pub struct FlashcardGame {
    deck: Arc<Deck<Flashcard>>,
    index: usize,
    revealed: bool,
}

/// What the shell needs to draw the current card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlashcardView<'a> {
    pub face: &'a str,
    pub tip: &'a str,
    pub position: String,
    pub reveal_hint: &'static str,
}

impl FlashcardGame {
    pub fn new(deck: Arc<Deck<Flashcard>>) -> Self {
        FlashcardGame {
            deck,
            index: 0,
            revealed: false,
        }
    }

    pub fn deck(&self) -> &Deck<Flashcard> {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn current(&self) -> &Flashcard {
        self.deck.item(self.index)
    }

    /// Moves one card either way, wrapping at both ends, and turns the new
    /// card face down.
    pub fn advance(&mut self, direction: Direction) {
        let len = self.deck.len();
        self.index = match direction {
            Direction::Next => (self.index + 1) % len,
            Direction::Previous => (self.index + len - 1) % len,
        };
        self.revealed = false;
    }

    pub fn toggle_reveal(&mut self) {
        self.revealed = !self.revealed;
    }

    pub fn apply(mut self, event: FlashcardEvent) -> Self {
        match event {
            FlashcardEvent::Advance(direction) => self.advance(direction),
            FlashcardEvent::ToggleReveal => self.toggle_reveal(),
        }
        self
    }

    pub fn view(&self) -> FlashcardView<'_> {
        let card = self.current();
        FlashcardView {
            face: if self.revealed {
                &card.translation
            } else {
                &card.prompt
            },
            tip: &card.tip,
            position: format!("{}/{}", self.index + 1, self.deck.len()),
            reveal_hint: if self.revealed {
                "Tap to hide translation"
            } else {
                "Tap to reveal translation"
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::DeckKind;

    fn deck(len: usize) -> Arc<Deck<Flashcard>> {
        let cards = (0..len)
            .map(|i| Flashcard {
                prompt: format!("prompt {i}"),
                translation: format!("translation {i}"),
                tip: format!("tip {i}"),
            })
            .collect();
        Arc::new(Deck::new(DeckKind::Flashcard, "en", cards).unwrap())
    }

    #[test]
    fn starts_face_down_on_first_card() {
        let game = FlashcardGame::new(deck(3));
        assert_eq!(game.index(), 0);
        assert!(!game.is_revealed());
        assert_eq!(game.view().face, "prompt 0");
        assert_eq!(game.view().position, "1/3");
    }

    #[test]
    fn wraps_in_both_directions() {
        let mut game = FlashcardGame::new(deck(3));
        game.advance(Direction::Previous);
        assert_eq!(game.index(), 2);
        game.advance(Direction::Next);
        assert_eq!(game.index(), 0);
        game.advance(Direction::Next);
        game.advance(Direction::Next);
        game.advance(Direction::Next);
        assert_eq!(game.index(), 0);
    }

    #[test]
    fn previous_then_next_returns_face_down() {
        for start in 0..3 {
            let mut game = FlashcardGame::new(deck(3));
            for _ in 0..start {
                game.advance(Direction::Next);
            }
            game.toggle_reveal();

            let game = game
                .apply(FlashcardEvent::Advance(Direction::Previous))
                .apply(FlashcardEvent::Advance(Direction::Next));
            assert_eq!(game.index(), start);
            assert!(!game.is_revealed());
        }
    }

    #[test]
    fn reveal_toggles_without_moving() {
        let mut game = FlashcardGame::new(deck(2));
        game.advance(Direction::Next);
        game.toggle_reveal();
        assert_eq!(game.index(), 1);
        let view = game.view();
        assert_eq!(view.face, "translation 1");
        assert_eq!(view.tip, "tip 1");
        assert_eq!(view.reveal_hint, "Tap to hide translation");
        game.toggle_reveal();
        assert_eq!(game.view().face, "prompt 1");
    }

    #[test]
    fn single_card_deck_stays_put() {
        let mut game = FlashcardGame::new(deck(1));
        game.advance(Direction::Previous);
        assert_eq!(game.index(), 0);
        game.advance(Direction::Next);
        assert_eq!(game.index(), 0);
    }
}
