use std::sync::Arc;

use crate::catalog::Deck;
use crate::types::catalog_data::PhraseCard;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhrasePhase {
    Building,
    Solved,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhraseEvent {
    Pick(String),
    Advance,
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileView<'a> {
    pub token: &'a str,
    pub disabled: bool,
}

/// Sentence assembly from word tiles.
///
/// Tile availability is never stored: a tile is spent once the picks hold as
/// many copies of its token as the solution needs. Tiles whose token is not in
/// the solution are therefore spent from the start.
#[derive(Debug, Clone)]
pub struct PhraseGame {
    deck: Arc<Deck<PhraseCard>>,
    index: usize,
    picked: Vec<String>,
    phase: PhrasePhase,
}

impl PhraseGame {
    pub fn new(deck: Arc<Deck<PhraseCard>>) -> Self {
        PhraseGame {
            deck,
            index: 0,
            picked: Vec::new(),
            phase: PhrasePhase::Building,
        }
    }

    pub fn deck(&self) -> &Deck<PhraseCard> {
        &self.deck
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn phase(&self) -> PhrasePhase {
        self.phase
    }

    pub fn picked(&self) -> &[String] {
        &self.picked
    }

    pub fn is_finished(&self) -> bool {
        self.phase == PhrasePhase::Finished
    }

    pub fn current(&self) -> &PhraseCard {
        self.deck.item(self.index)
    }

    fn used_count(&self, token: &str) -> usize {
        self.picked.iter().filter(|picked| *picked == token).count()
    }

    pub fn is_tile_available(&self, token: &str) -> bool {
        self.used_count(token) < self.current().required_count(token)
    }

    pub fn pick_tile(&mut self, token: &str) -> bool {
        if self.phase != PhrasePhase::Building || !self.is_tile_available(token) {
            return false;
        }
        self.picked.push(token.to_string());
        if self.picked == self.current().solution {
            self.phase = PhrasePhase::Solved;
        }
        true
    }

    /// Next card, skipping an unsolved one if asked; the last card finishes.
    pub fn advance(&mut self) -> bool {
        if self.phase == PhrasePhase::Finished {
            return false;
        }
        if self.deck.is_last(self.index) {
            self.phase = PhrasePhase::Finished;
        } else {
            self.index += 1;
            self.picked.clear();
            self.phase = PhrasePhase::Building;
        }
        true
    }

    pub fn restart(&mut self) -> bool {
        if !self.is_finished() {
            return false;
        }
        self.index = 0;
        self.picked.clear();
        self.phase = PhrasePhase::Building;
        true
    }

    pub fn apply(mut self, event: PhraseEvent) -> Self {
        match event {
            PhraseEvent::Pick(token) => {
                self.pick_tile(&token);
            }
            PhraseEvent::Advance => {
                self.advance();
            }
            PhraseEvent::Restart => {
                self.restart();
            }
        }
        self
    }

    pub fn tiles(&self) -> Vec<TileView<'_>> {
        self.current()
            .tiles
            .iter()
            .map(|token| TileView {
                token,
                disabled: !self.is_tile_available(token),
            })
            .collect()
    }

    pub fn built_sentence(&self) -> String {
        self.picked.join(" ")
    }

    pub fn solved_banner(&self) -> Option<String> {
        (self.phase == PhrasePhase::Solved)
            .then(|| format!("✅ Perfect! {}", self.current().context))
    }

    pub fn step_label(&self) -> &'static str {
        if self.is_finished() {
            "Replay Deck"
        } else if self.deck.is_last(self.index) {
            "Finish Deck"
        } else {
            "Next Card"
        }
    }
}
