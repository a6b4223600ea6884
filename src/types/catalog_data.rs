use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Language {
    pub code: String,
    pub name: String,
    pub native_name: String,
    pub family: String,
}

impl Language {
    /// Label used by language pickers, e.g. `Español · Spanish`.
    pub fn option_label(&self) -> String {
        format!("{} · {}", self.native_name, self.name)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Flashcard {
    pub prompt: String,
    pub translation: String,
    pub tip: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub answer: String,
    pub hint: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PhraseCard {
    pub clue: String,
    pub tiles: Vec<String>,
    pub solution: Vec<String>,
    pub context: String,
}

impl PhraseCard {
    /// How many times `token` has to be placed to complete the sentence.
    pub fn required_count(&self, token: &str) -> usize {
        self.solution.iter().filter(|t| t.as_str() == token).count()
    }
}

/// The four stages of the learning roadmap.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum LevelId {
    Starter,
    Explorer,
    Storyteller,
    Mastery,
}

impl LevelId {
    pub const ALL: [LevelId; 4] = [
        LevelId::Starter,
        LevelId::Explorer,
        LevelId::Storyteller,
        LevelId::Mastery,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LevelId::Starter => "starter",
            LevelId::Explorer => "explorer",
            LevelId::Storyteller => "storyteller",
            LevelId::Mastery => "mastery",
        }
    }

    /// Exact match against the level ids; anything else is `None`.
    pub fn from_id(id: &str) -> Option<LevelId> {
        LevelId::ALL.into_iter().find(|level| level.as_str() == id)
    }

    /// Like [`LevelId::from_id`], but unknown ids land on `Starter`.
    pub fn from_id_or_starter(id: &str) -> LevelId {
        match LevelId::from_id(id) {
            Some(level) => level,
            None => {
                log::debug!("Unknown level id '{id}', using starter");
                LevelId::Starter
            }
        }
    }
}

impl fmt::Display for LevelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Milestone {
    pub id: LevelId,
    pub title: String,
    pub badge: String,
    pub focus: String,
    pub ai_support: String,
    pub duration: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SkillTrack {
    pub id: String,
    pub title: String,
    pub icon: String,
    pub description: String,
    pub outcomes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    pub id: String,
    pub title: String,
    pub tag: String,
    pub accent: String,
    pub best_for: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PricingTier {
    pub tier: String,
    pub price: String,
    pub cadence: String,
    pub perks: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}
