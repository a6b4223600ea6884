//! Read-only reference data: languages, roadmap, showcase lists and the
//! per-language decks the games play over.
//!
//! A [`Catalog`] is built once (from the built-in tables or a catalog file),
//! validated on the way in, and then shared behind an `Arc`. Nothing here is
//! ever mutated after construction.

pub mod builtin;
pub mod loader;

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{LinguaPlayError, Result};
use crate::types::catalog_data::{
    Flashcard, Language, LevelId, Milestone, Persona, PhraseCard, PricingTier, QuizQuestion,
    SkillTrack,
};

pub use loader::{load_catalog_from_file, CatalogData, DeckTableData};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeckKind {
    Flashcard,
    Quiz,
    Phrase,
}

impl fmt::Display for DeckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeckKind::Flashcard => "flashcard",
            DeckKind::Quiz => "quiz",
            DeckKind::Phrase => "phrase",
        };
        write!(f, "{name}")
    }
}

/// Ordered, non-empty run of learning items for one language code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck<T> {
    code: String,
    items: Vec<T>,
}

impl<T> Deck<T> {
    pub fn new(kind: DeckKind, code: &str, items: Vec<T>) -> Result<Self> {
        if items.is_empty() {
            return Err(LinguaPlayError::EmptyDeck {
                kind,
                code: code.to_string(),
            });
        }
        Ok(Deck {
            code: code.to_string(),
            items,
        })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Always false for a constructed deck.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Item at `index`, wrapped into range.
    pub fn item(&self, index: usize) -> &T {
        &self.items[index % self.items.len()]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_last(&self, index: usize) -> bool {
        index + 1 >= self.items.len()
    }
}

/// All decks of one kind, with the deck used for codes that have none.
#[derive(Debug, Clone)]
pub struct DeckTable<T> {
    default: Arc<Deck<T>>,
    decks: BTreeMap<String, Arc<Deck<T>>>,
}

impl<T> DeckTable<T> {
    pub fn new(kind: DeckKind, default_code: &str, decks: BTreeMap<String, Vec<T>>) -> Result<Self> {
        let decks = decks
            .into_iter()
            .map(|(code, items)| Ok((code.clone(), Arc::new(Deck::new(kind, &code, items)?))))
            .collect::<Result<BTreeMap<_, _>>>()?;

        let default = decks
            .get(default_code)
            .cloned()
            .ok_or_else(|| LinguaPlayError::MissingDefaultDeck {
                kind,
                code: default_code.to_string(),
            })?;

        Ok(DeckTable { default, decks })
    }

    /// The deck registered for `code`, or the default deck.
    pub fn lookup(&self, code: &str) -> Arc<Deck<T>> {
        match self.decks.get(code) {
            Some(deck) => Arc::clone(deck),
            None => {
                log::debug!(
                    "No dedicated deck for '{code}', using default '{}'",
                    self.default.code()
                );
                Arc::clone(&self.default)
            }
        }
    }

    pub fn contains(&self, code: &str) -> bool {
        self.decks.contains_key(code)
    }

    pub fn default_code(&self) -> &str {
        self.default.code()
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.decks.keys().map(String::as_str)
    }
}

/// Item types that live in a [`Catalog`] deck table.
pub trait DeckItem: Sized {
    const KIND: DeckKind;

    fn table(catalog: &Catalog) -> &DeckTable<Self>;
}

impl DeckItem for Flashcard {
    const KIND: DeckKind = DeckKind::Flashcard;

    fn table(catalog: &Catalog) -> &DeckTable<Self> {
        &catalog.flashcards
    }
}

impl DeckItem for QuizQuestion {
    const KIND: DeckKind = DeckKind::Quiz;

    fn table(catalog: &Catalog) -> &DeckTable<Self> {
        &catalog.quizzes
    }
}

impl DeckItem for PhraseCard {
    const KIND: DeckKind = DeckKind::Phrase;

    fn table(catalog: &Catalog) -> &DeckTable<Self> {
        &catalog.phrases
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    languages: Vec<Language>,
    greetings: BTreeMap<String, String>,
    default_greeting: String,
    milestones: Vec<Milestone>,
    skill_tracks: Vec<SkillTrack>,
    personas: Vec<Persona>,
    pricing: Vec<PricingTier>,
    flashcards: DeckTable<Flashcard>,
    quizzes: DeckTable<QuizQuestion>,
    phrases: DeckTable<PhraseCard>,
}

impl Catalog {
    /// The catalog shipped with the app.
    pub fn builtin() -> Result<Self> {
        Catalog::try_from(builtin::builtin_data())
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Exact code match; no default substitution.
    pub fn language(&self, code: &str) -> Option<&Language> {
        self.languages.iter().find(|language| language.code == code)
    }

    /// Every language except the learner's native one, in catalog order.
    pub fn target_choices(&self, native_code: &str) -> Vec<&Language> {
        self.languages
            .iter()
            .filter(|language| language.code != native_code)
            .collect()
    }

    /// Welcome line in the native language, English when there is none.
    pub fn greeting(&self, native_code: &str) -> Option<&str> {
        self.greetings
            .get(native_code)
            .or_else(|| self.greetings.get(&self.default_greeting))
            .map(String::as_str)
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn milestone(&self, level: LevelId) -> Option<&Milestone> {
        self.milestones.iter().find(|milestone| milestone.id == level)
    }

    pub fn skill_tracks(&self) -> &[SkillTrack] {
        &self.skill_tracks
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn pricing(&self) -> &[PricingTier] {
        &self.pricing
    }

    /// Deck of `T` for `code`, falling back to the default deck of that kind.
    pub fn deck<T: DeckItem>(&self, code: &str) -> Arc<Deck<T>> {
        T::table(self).lookup(code)
    }

    pub fn has_dedicated_deck(&self, kind: DeckKind, code: &str) -> bool {
        match kind {
            DeckKind::Flashcard => self.flashcards.contains(code),
            DeckKind::Quiz => self.quizzes.contains(code),
            DeckKind::Phrase => self.phrases.contains(code),
        }
    }

    pub(crate) fn from_validated_parts(parts: CatalogParts) -> Self {
        Catalog {
            languages: parts.languages,
            greetings: parts.greetings,
            default_greeting: parts.default_greeting,
            milestones: parts.milestones,
            skill_tracks: parts.skill_tracks,
            personas: parts.personas,
            pricing: parts.pricing,
            flashcards: parts.flashcards,
            quizzes: parts.quizzes,
            phrases: parts.phrases,
        }
    }
}

/// Validated pieces handed from the loader to [`Catalog`].
pub(crate) struct CatalogParts {
    pub languages: Vec<Language>,
    pub greetings: BTreeMap<String, String>,
    pub default_greeting: String,
    pub milestones: Vec<Milestone>,
    pub skill_tracks: Vec<SkillTrack>,
    pub personas: Vec<Persona>,
    pub pricing: Vec<PricingTier>,
    pub flashcards: DeckTable<Flashcard>,
    pub quizzes: DeckTable<QuizQuestion>,
    pub phrases: DeckTable<PhraseCard>,
}
