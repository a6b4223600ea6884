use std::sync::Arc;

use linguaplay::catalog::{Catalog, Deck, DeckKind};
use linguaplay::games::{
    Direction, FlashcardGame, GameSet, PhraseGame, PhrasePhase, QuizGame, QuizPhase,
};
use linguaplay::plan::{compose_plan, PlanRequest, PlanTables, DEFAULT_GOAL};
use linguaplay::types::catalog_data::{Flashcard, PhraseCard, QuizQuestion};

fn catalog() -> Catalog {
    Catalog::builtin().unwrap()
}

fn plan(goal: &str, level: &str, seed: u64) -> String {
    compose_plan(
        &PlanTables::builtin(),
        &PlanRequest {
            goal,
            level,
            native: None,
            target: None,
            seed,
        },
    )
}

#[test]
fn unknown_levels_compose_the_starter_plan() {
    for seed in 0..6 {
        let starter = plan("Speak with friends", "starter", seed);
        assert_eq!(plan("Speak with friends", "grandmaster", seed), starter);
        assert_eq!(plan("Speak with friends", "", seed), starter);
    }
}

#[test]
fn bonus_and_accent_lines_cycle_independently() {
    let tables = PlanTables::builtin();
    let bonus: Vec<_> = (0..8).map(|seed| tables.bonus_line(seed)).collect();
    let accent: Vec<_> = (0..6).map(|seed| tables.accent_tip(seed)).collect();
    assert_eq!(bonus[..4], bonus[4..]);
    assert_eq!(accent[..3], accent[3..]);

    // Seed 3: fourth bonus line, first accent tip again.
    let lines: Vec<String> = plan("Goal", "starter", 3).lines().map(String::from).collect();
    assert_eq!(lines[6], format!("🎧 Accent boost: {}", tables.accent_tip(0)));
    assert_eq!(lines[7], tables.bonus_line(3));
}

#[test]
fn empty_goal_uses_the_default_sentence() {
    let text = plan("", "explorer", 0);
    let first = text.lines().next().unwrap();
    assert!(first.ends_with(&format!(": {DEFAULT_GOAL}")));
    assert_eq!(text.lines().count(), 9);
}

#[test]
fn flashcard_previous_then_next_is_identity() {
    let catalog = catalog();
    for code in ["en", "es", "fr", "ko"] {
        let mut game = FlashcardGame::new(catalog.deck(code));
        for _ in 0..game.deck().len() {
            let start = game.index();
            game.toggle_reveal();
            game.advance(Direction::Previous);
            game.advance(Direction::Next);
            assert_eq!(game.index(), start);
            assert!(!game.is_revealed());
            game.advance(Direction::Next);
        }
    }
}

#[test]
fn quiz_second_selection_never_changes_score() {
    let catalog = catalog();
    let mut quiz = QuizGame::new(catalog.deck::<QuizQuestion>("es"));
    let question = quiz.current().clone();
    let wrong = question
        .options
        .iter()
        .find(|option| **option != question.answer)
        .unwrap()
        .clone();

    quiz.select_option(&wrong);
    quiz.select_option(&question.answer);
    assert_eq!(quiz.correct_count(), 0);
    assert_eq!(quiz.selected_option(), Some(wrong.as_str()));
}

#[test]
fn quiz_perfect_run_then_restart() {
    let catalog = catalog();
    let mut quiz = QuizGame::new(catalog.deck::<QuizQuestion>("fr"));
    assert_eq!(quiz.deck().len(), 2);

    for _ in 0..2 {
        let answer = quiz.current().answer.clone();
        quiz.select_option(&answer);
        quiz.advance();
    }
    assert_eq!(quiz.phase(), &QuizPhase::Finished);
    assert_eq!(quiz.correct_count(), 2);
    assert_eq!(
        quiz.summary().as_deref(),
        Some("You answered 2 out of 2 correctly.")
    );

    quiz.restart();
    assert_eq!(quiz.phase(), &QuizPhase::Answering);
    assert_eq!(quiz.index(), 0);
    assert_eq!(quiz.correct_count(), 0);
}

#[test]
fn phrase_routine_in_order_is_solved() {
    let catalog = catalog();
    let mut game = PhraseGame::new(catalog.deck::<PhraseCard>("en"));
    for token in ["I", "wake", "up", "at", "six", "every", "day"] {
        assert!(game.pick_tile(token));
    }
    assert_eq!(game.phase(), PhrasePhase::Solved);
    assert_eq!(
        game.solved_banner().as_deref(),
        Some("✅ Perfect! Say it out loud with your morning stretch.")
    );
}

#[test]
fn phrase_other_orders_never_solve() {
    let catalog = catalog();
    let orders: [[&str; 7]; 3] = [
        ["wake", "I", "up", "at", "six", "every", "day"],
        ["day", "every", "six", "at", "up", "wake", "I"],
        ["I", "wake", "up", "six", "at", "every", "day"],
    ];
    for order in orders {
        let mut game = PhraseGame::new(catalog.deck::<PhraseCard>("en"));
        for token in order {
            game.pick_tile(token);
        }
        assert_eq!(game.phase(), PhrasePhase::Building);
        assert!(game.tiles().iter().all(|tile| tile.disabled));
    }
}

#[test]
fn phrase_repeated_token_cannot_be_picked_a_third_time() {
    let catalog = catalog();
    let mut game = PhraseGame::new(catalog.deck::<PhraseCard>("en"));
    game.advance();
    assert_eq!(game.current().required_count("me"), 2);

    assert!(game.pick_tile("Excuse"));
    assert!(game.pick_tile("me"));
    assert!(game.pick_tile("me"));
    assert!(!game.pick_tile("me"));
    assert_eq!(game.picked(), ["Excuse", "me", "me"]);

    let me_tiles: Vec<_> = game.tiles().into_iter().filter(|t| t.token == "me").collect();
    assert_eq!(me_tiles.len(), 2);
    assert!(me_tiles.iter().all(|tile| tile.disabled));
}

#[test]
fn fixture_decks_can_replace_the_catalog() {
    let deck = Deck::new(
        DeckKind::Phrase,
        "xx",
        vec![PhraseCard {
            clue: "Say hi".to_string(),
            tiles: vec!["hi".to_string(), "there".to_string(), "bye".to_string()],
            solution: vec!["hi".to_string(), "there".to_string()],
            context: "Wave.".to_string(),
        }],
    )
    .unwrap();
    let mut game = PhraseGame::new(Arc::new(deck));
    assert!(!game.pick_tile("bye"));
    game.pick_tile("hi");
    game.pick_tile("there");
    assert_eq!(game.phase(), PhrasePhase::Solved);
    assert_eq!(game.step_label(), "Finish Deck");
    game.advance();
    assert_eq!(game.step_label(), "Replay Deck");
}

#[test]
fn game_set_follows_target_language() {
    let catalog = catalog();
    let mut games = GameSet::for_language(&catalog, "en");
    games.flashcards.advance(Direction::Next);
    games.switch_language(&catalog, "es");
    assert_eq!(games.flashcards.index(), 0);
    let spanish = catalog.deck::<Flashcard>("es");
    assert_eq!(games.flashcards.current().prompt, spanish.item(0).prompt);
}
