use thiserror::Error;

use crate::catalog::DeckKind;
use crate::types::catalog_data::LevelId;

#[derive(Error, Debug)]
pub enum LinguaPlayError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("Unsupported catalog file type: {0}")]
    UnsupportedCatalogFile(String),

    #[error("Invalid language code '{0}' (expected two or three lowercase letters)")]
    InvalidLanguageCode(String),

    #[error("Language '{0}' is listed more than once")]
    DuplicateLanguage(String),

    #[error("{kind} deck '{code}' has no entries")]
    EmptyDeck { kind: DeckKind, code: String },

    #[error("{kind} decks have no default deck '{code}'")]
    MissingDefaultDeck { kind: DeckKind, code: String },

    #[error("Quiz deck '{code}' question {index}: answer '{answer}' is not one of the options")]
    AnswerNotAmongOptions {
        code: String,
        index: usize,
        answer: String,
    },

    #[error("Quiz deck '{code}' question {index}: option '{option}' appears twice")]
    DuplicateOption {
        code: String,
        index: usize,
        option: String,
    },

    #[error("Phrase deck '{code}' card {index}: solution uses '{token}' more often than the tiles provide")]
    SolutionNotCoveredByTiles {
        code: String,
        index: usize,
        token: String,
    },

    #[error("Phrase deck '{code}' card {index}: solution is empty")]
    EmptySolution { code: String, index: usize },

    #[error("Roadmap lists level '{0}' more than once")]
    DuplicateMilestone(LevelId),

    #[error("Plan table '{0}' must not be empty")]
    EmptyPlanPool(&'static str),
}

impl From<std::io::Error> for LinguaPlayError {
    fn from(error: std::io::Error) -> Self {
        LinguaPlayError::Io(Box::new(error))
    }
}

pub type Result<T> = std::result::Result<T, LinguaPlayError>;
