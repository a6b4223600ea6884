use std::collections::{BTreeMap, HashMap, HashSet};
use std::fs;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::{Catalog, CatalogParts, DeckItem, DeckTable};
use crate::error::{LinguaPlayError, Result};
use crate::types::catalog_data::{
    Flashcard, Language, Milestone, Persona, PhraseCard, PricingTier, QuizQuestion, SkillTrack,
};

const LANGUAGE_CODE_PATTERN: &str = r"^[a-z]{2,3}$";

fn default_greeting_code() -> String {
    "en".to_string()
}

/// Decks of one kind as they appear in a catalog file.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DeckTableData<T> {
    pub default: String,
    pub decks: BTreeMap<String, Vec<T>>,
}

/// On-disk shape of a catalog (TOML or JSON).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CatalogData {
    pub languages: Vec<Language>,
    #[serde(default)]
    pub greetings: BTreeMap<String, String>,
    #[serde(default = "default_greeting_code")]
    pub default_greeting: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub skill_tracks: Vec<SkillTrack>,
    #[serde(default)]
    pub personas: Vec<Persona>,
    #[serde(default)]
    pub pricing: Vec<PricingTier>,
    pub flashcards: DeckTableData<Flashcard>,
    pub quizzes: DeckTableData<QuizQuestion>,
    pub phrases: DeckTableData<PhraseCard>,
}

impl TryFrom<CatalogData> for Catalog {
    type Error = LinguaPlayError;

    fn try_from(data: CatalogData) -> Result<Self> {
        let code_pattern = Regex::new(LANGUAGE_CODE_PATTERN)?;

        let mut seen_codes = HashSet::new();
        for language in &data.languages {
            if !code_pattern.is_match(&language.code) {
                return Err(LinguaPlayError::InvalidLanguageCode(language.code.clone()));
            }
            if !seen_codes.insert(language.code.as_str()) {
                return Err(LinguaPlayError::DuplicateLanguage(language.code.clone()));
            }
        }

        for code in data
            .flashcards
            .decks
            .keys()
            .chain(data.quizzes.decks.keys())
            .chain(data.phrases.decks.keys())
        {
            if !code_pattern.is_match(code) {
                return Err(LinguaPlayError::InvalidLanguageCode(code.clone()));
            }
        }

        let mut seen_levels = HashSet::new();
        for milestone in &data.milestones {
            if !seen_levels.insert(milestone.id) {
                return Err(LinguaPlayError::DuplicateMilestone(milestone.id));
            }
        }

        for (code, questions) in &data.quizzes.decks {
            validate_quiz_deck(code, questions)?;
        }
        for (code, cards) in &data.phrases.decks {
            validate_phrase_deck(code, cards)?;
        }

        Ok(Catalog::from_validated_parts(CatalogParts {
            languages: data.languages,
            greetings: data.greetings,
            default_greeting: data.default_greeting,
            milestones: data.milestones,
            skill_tracks: data.skill_tracks,
            personas: data.personas,
            pricing: data.pricing,
            flashcards: build_table(data.flashcards)?,
            quizzes: build_table(data.quizzes)?,
            phrases: build_table(data.phrases)?,
        }))
    }
}

fn build_table<T: DeckItem>(data: DeckTableData<T>) -> Result<DeckTable<T>> {
    DeckTable::new(T::KIND, &data.default, data.decks)
}

fn validate_quiz_deck(code: &str, questions: &[QuizQuestion]) -> Result<()> {
    for (index, question) in questions.iter().enumerate() {
        let mut seen = HashSet::new();
        for option in &question.options {
            if !seen.insert(option.as_str()) {
                return Err(LinguaPlayError::DuplicateOption {
                    code: code.to_string(),
                    index,
                    option: option.clone(),
                });
            }
        }
        if !seen.contains(question.answer.as_str()) {
            return Err(LinguaPlayError::AnswerNotAmongOptions {
                code: code.to_string(),
                index,
                answer: question.answer.clone(),
            });
        }
    }
    Ok(())
}

fn validate_phrase_deck(code: &str, cards: &[PhraseCard]) -> Result<()> {
    for (index, card) in cards.iter().enumerate() {
        if card.solution.is_empty() {
            return Err(LinguaPlayError::EmptySolution {
                code: code.to_string(),
                index,
            });
        }

        let mut available: HashMap<&str, usize> = HashMap::new();
        for tile in &card.tiles {
            *available.entry(tile.as_str()).or_default() += 1;
        }
        for token in &card.solution {
            match available.get_mut(token.as_str()) {
                Some(count) if *count > 0 => *count -= 1,
                _ => {
                    return Err(LinguaPlayError::SolutionNotCoveredByTiles {
                        code: code.to_string(),
                        index,
                        token: token.clone(),
                    })
                }
            }
        }
    }
    Ok(())
}

/// Reads a catalog file; `.toml` and `.json` are accepted.
pub fn load_catalog_from_file(file_path: &Path) -> Result<Catalog> {
    let contents = fs::read_to_string(file_path)?;

    let data: CatalogData = match file_path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&contents)?,
        Some("json") => serde_json::from_str(&contents)?,
        _ => {
            return Err(LinguaPlayError::UnsupportedCatalogFile(
                file_path.display().to_string(),
            ))
        }
    };

    let catalog = Catalog::try_from(data)?;
    log::info!(
        "Loaded catalog from {} ({} languages)",
        file_path.display(),
        catalog.languages().len()
    );
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin::builtin_data;
    use crate::catalog::DeckKind;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn builtin_data_validates() {
        assert!(Catalog::try_from(builtin_data()).is_ok());
    }

    #[test]
    fn rejects_bad_language_code() {
        let mut data = builtin_data();
        data.languages[0].code = "Arabic".to_string();
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::InvalidLanguageCode(code)) if code == "Arabic"
        ));
    }

    #[test]
    fn rejects_duplicate_language() {
        let mut data = builtin_data();
        let copy = data.languages[1].clone();
        data.languages.push(copy);
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::DuplicateLanguage(code)) if code == "en"
        ));
    }

    #[test]
    fn rejects_answer_outside_options() {
        let mut data = builtin_data();
        if let Some(questions) = data.quizzes.decks.get_mut("es") {
            questions[1].answer = "Hola".to_string();
        }
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::AnswerNotAmongOptions { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_duplicate_option() {
        let mut data = builtin_data();
        if let Some(questions) = data.quizzes.decks.get_mut("fr") {
            questions[0].options = strings(&["J'apprends le français.", "J'apprends le français."]);
        }
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::DuplicateOption { index: 0, .. })
        ));
    }

    #[test]
    fn rejects_solution_using_a_tile_too_often() {
        let mut data = builtin_data();
        if let Some(cards) = data.phrases.decks.get_mut("en") {
            cards[0].solution = strings(&["I", "I"]);
        }
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::SolutionNotCoveredByTiles { token, .. }) if token == "I"
        ));
    }

    #[test]
    fn accepts_distractor_tiles() {
        let mut data = builtin_data();
        if let Some(cards) = data.phrases.decks.get_mut("fr") {
            cards[0].tiles.push("chien".to_string());
        }
        assert!(Catalog::try_from(data).is_ok());
    }

    #[test]
    fn rejects_empty_deck() {
        let mut data = builtin_data();
        data.flashcards.decks.insert("de".to_string(), Vec::new());
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::EmptyDeck { kind: DeckKind::Flashcard, code }) if code == "de"
        ));
    }

    #[test]
    fn rejects_missing_default_deck() {
        let mut data = builtin_data();
        data.phrases.default = "de".to_string();
        assert!(matches!(
            Catalog::try_from(data),
            Err(LinguaPlayError::MissingDefaultDeck { kind: DeckKind::Phrase, .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.yaml");
        fs::write(&path, "languages: []").unwrap();
        assert!(matches!(
            load_catalog_from_file(&path),
            Err(LinguaPlayError::UnsupportedCatalogFile(_))
        ));
    }

    #[test]
    fn json_round_trip_of_builtin_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        fs::write(&path, serde_json::to_string_pretty(&builtin_data()).unwrap()).unwrap();

        let catalog = load_catalog_from_file(&path).unwrap();
        assert_eq!(catalog.languages().len(), 20);
        assert_eq!(catalog.deck::<Flashcard>("es").len(), 3);
    }
}
