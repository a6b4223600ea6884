use std::fs;

use linguaplay::catalog::{load_catalog_from_file, Catalog, DeckKind};
use linguaplay::config::load_config_from_file;
use linguaplay::games::GameSet;
use linguaplay::types::catalog_data::{LevelId, PhraseCard, QuizQuestion};
use linguaplay::LinguaPlayError;

const SMALL_CATALOG: &str = r#"
default_greeting = "en"

[[languages]]
code = "en"
name = "English"
native_name = "English"
family = "Germanic"

[[languages]]
code = "sw"
name = "Swahili"
native_name = "Kiswahili"
family = "Bantu"

[greetings]
en = "Welcome!"
sw = "Karibu!"

[[milestones]]
id = "starter"
title = "Spark"
badge = "✨"
focus = "Sounds and survival words."
ai_support = "Gentle prompts."
duration = "2 weeks"

[flashcards]
default = "en"

[[flashcards.decks.en]]
prompt = "Hello"
translation = "Hi there"
tip = "Wave."

[[flashcards.decks.sw]]
prompt = "Jambo"
translation = "Hello"
tip = "Smile."

[quizzes]
default = "en"

[[quizzes.decks.en]]
question = "Pick the greeting"
options = ["Hello", "Goodbye"]
answer = "Hello"
hint = "Start of a conversation."

[phrases]
default = "en"

[[phrases.decks.sw]]
clue = "Say good morning"
tiles = ["asubuhi", "Habari", "za", "jioni"]
solution = ["Habari", "za", "asubuhi"]
context = "Morning greeting."

[[phrases.decks.en]]
clue = "Say good morning"
tiles = ["morning", "Good"]
solution = ["Good", "morning"]
context = "Morning greeting."
"#;

#[test]
fn toml_catalog_loads_and_drives_games() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, SMALL_CATALOG).unwrap();

    let catalog = load_catalog_from_file(&path).unwrap();
    assert_eq!(catalog.languages().len(), 2);
    assert_eq!(catalog.greeting("sw"), Some("Karibu!"));
    assert_eq!(catalog.greeting("fr"), Some("Welcome!"));
    assert!(catalog.milestone(LevelId::Starter).is_some());
    assert!(catalog.milestone(LevelId::Mastery).is_none());
    assert!(catalog.pricing().is_empty());

    assert!(catalog.has_dedicated_deck(DeckKind::Flashcard, "sw"));
    assert!(!catalog.has_dedicated_deck(DeckKind::Quiz, "sw"));
    assert_eq!(catalog.deck::<QuizQuestion>("sw").code(), "en");

    let mut games = GameSet::for_language(&catalog, "sw");
    let distractor = games
        .phrases
        .tiles()
        .into_iter()
        .find(|tile| tile.token == "jioni")
        .map(|tile| tile.disabled);
    assert_eq!(distractor, Some(true));
    for token in ["Habari", "za", "asubuhi"] {
        assert!(games.phrases.pick_tile(token));
    }
    assert_eq!(games.phrases.built_sentence(), "Habari za asubuhi");
    assert_eq!(games.phrases.solved_banner().as_deref(), Some("✅ Perfect! Morning greeting."));
}

#[test]
fn invalid_phrase_card_is_rejected_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    let broken = SMALL_CATALOG.replace(
        r#"tiles = ["morning", "Good"]"#,
        r#"tiles = ["morning", "Bad"]"#,
    );
    fs::write(&path, broken).unwrap();

    match load_catalog_from_file(&path) {
        Err(LinguaPlayError::SolutionNotCoveredByTiles { code, index, token }) => {
            assert_eq!(code, "en");
            assert_eq!(index, 0);
            assert_eq!(token, "Good");
        }
        other => panic!("expected a tile coverage error, got {other:?}"),
    }
}

#[test]
fn unknown_level_in_roadmap_fails_to_parse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("catalog.toml");
    fs::write(&path, SMALL_CATALOG.replace(r#"id = "starter""#, r#"id = "legend""#)).unwrap();
    assert!(matches!(load_catalog_from_file(&path), Err(LinguaPlayError::Toml(_))));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        load_catalog_from_file(&dir.path().join("absent.json")),
        Err(LinguaPlayError::Io(_))
    ));
}

#[test]
fn config_points_at_a_catalog_file() {
    let dir = tempfile::tempdir().unwrap();
    let catalog_path = dir.path().join("catalog.toml");
    fs::write(&catalog_path, SMALL_CATALOG).unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        format!(
            "catalog_path = '{}'\n\n[defaults]\ntarget_language = \"sw\"\n",
            catalog_path.display()
        ),
    )
    .unwrap();

    let config = load_config_from_file(&config_path).unwrap();
    let catalog = load_catalog_from_file(&config.catalog_path().unwrap()).unwrap();
    let games = GameSet::for_language(&catalog, &config.defaults.target_language);
    assert_eq!(games.flashcards.current().prompt, "Jambo");
    assert_eq!(games.phrases.deck().code(), "sw");
}

#[test]
fn builtin_catalog_covers_the_showcase() {
    let catalog = Catalog::builtin().unwrap();
    assert_eq!(catalog.languages().len(), 20);
    assert_eq!(catalog.milestones().len(), 4);
    assert_eq!(catalog.skill_tracks().len(), 4);
    assert_eq!(catalog.personas().len(), 3);
    assert_eq!(catalog.pricing().iter().filter(|tier| tier.featured).count(), 1);
    for code in ["en", "es", "fr"] {
        assert!(catalog.has_dedicated_deck(DeckKind::Phrase, code));
        assert_eq!(catalog.deck::<PhraseCard>(code).len(), 2);
    }
}
