//! The catalog the app ships with.

use std::collections::BTreeMap;

use super::loader::{CatalogData, DeckTableData};
use crate::types::catalog_data::{
    Flashcard, Language, LevelId, Milestone, Persona, PhraseCard, PricingTier, QuizQuestion,
    SkillTrack,
};

const LANGUAGES: [(&str, &str, &str, &str); 20] = [
    ("ar", "Arabic", "العربية", "Semitic"),
    ("en", "English", "English", "Germanic"),
    ("es", "Spanish", "Español", "Romance"),
    ("fr", "French", "Français", "Romance"),
    ("de", "German", "Deutsch", "Germanic"),
    ("zh", "Mandarin", "中文", "Sino-Tibetan"),
    ("ja", "Japanese", "日本語", "Japonic"),
    ("ko", "Korean", "한국어", "Koreanic"),
    ("ru", "Russian", "Русский", "Slavic"),
    ("pt", "Portuguese", "Português", "Romance"),
    ("it", "Italian", "Italiano", "Romance"),
    ("tr", "Turkish", "Türkçe", "Turkic"),
    ("hi", "Hindi", "हिन्दी", "Indo-Aryan"),
    ("th", "Thai", "ไทย", "Kra–Dai"),
    ("sv", "Swedish", "Svenska", "Germanic"),
    ("pl", "Polish", "Polski", "Slavic"),
    ("ms", "Malay", "Bahasa Melayu", "Austronesian"),
    ("fa", "Persian", "فارسی", "Iranian"),
    ("am", "Amharic", "አማርኛ", "Semitic"),
    ("sw", "Swahili", "Kiswahili", "Bantu"),
];

const GREETINGS: [(&str, &str); 8] = [
    ("ar", "أهلاً بك! لنحوّل تعلم اللغات إلى مغامرة ممتعة تدعمها الذكاء الاصطناعي."),
    ("en", "Welcome! Let’s turn language learning into an adventure powered by joyful AI."),
    ("es", "¡Bienvenido! Aprender idiomas será una aventura emocionante con ayuda de la IA."),
    ("fr", "Bienvenue ! Transformons l'apprentissage des langues en aventure ludique avec l'IA."),
    ("de", "Willkommen! Wir machen Sprachenlernen zur KI-gestützten Entdeckungsreise."),
    ("ru", "Добро пожаловать! Сделаем изучение языков захватывающим с поддержкой ИИ."),
    ("zh", "欢迎！让我们把语言学习变成充满乐趣的人工智能冒险。"),
    ("ja", "ようこそ！AIと一緒に楽しく言語をマスターしましょう。"),
];

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

fn words(sentence: &str) -> Vec<String> {
    sentence.split_whitespace().map(String::from).collect()
}

fn flashcard(prompt: &str, translation: &str, tip: &str) -> Flashcard {
    Flashcard {
        prompt: prompt.to_string(),
        translation: translation.to_string(),
        tip: tip.to_string(),
    }
}

fn question(question: &str, options: &[&str], answer: &str, hint: &str) -> QuizQuestion {
    QuizQuestion {
        question: question.to_string(),
        options: strings(options),
        answer: answer.to_string(),
        hint: hint.to_string(),
    }
}

/// Built-in phrase cards use the solution itself as the tile set.
fn phrase(clue: &str, sentence: &str, context: &str) -> PhraseCard {
    PhraseCard {
        clue: clue.to_string(),
        tiles: words(sentence),
        solution: words(sentence),
        context: context.to_string(),
    }
}

fn milestone(
    id: LevelId,
    title: &str,
    badge: &str,
    focus: &str,
    ai_support: &str,
    duration: &str,
) -> Milestone {
    Milestone {
        id,
        title: title.to_string(),
        badge: badge.to_string(),
        focus: focus.to_string(),
        ai_support: ai_support.to_string(),
        duration: duration.to_string(),
    }
}

fn skill_track(id: &str, title: &str, icon: &str, description: &str, outcomes: &[&str]) -> SkillTrack {
    SkillTrack {
        id: id.to_string(),
        title: title.to_string(),
        icon: icon.to_string(),
        description: description.to_string(),
        outcomes: strings(outcomes),
    }
}

fn persona(id: &str, title: &str, tag: &str, accent: &str, best_for: &[&str]) -> Persona {
    Persona {
        id: id.to_string(),
        title: title.to_string(),
        tag: tag.to_string(),
        accent: accent.to_string(),
        best_for: strings(best_for),
    }
}

fn pricing_tier(tier: &str, price: &str, cadence: &str, perks: &[&str], featured: bool) -> PricingTier {
    PricingTier {
        tier: tier.to_string(),
        price: price.to_string(),
        cadence: cadence.to_string(),
        perks: strings(perks),
        featured,
    }
}

fn languages() -> Vec<Language> {
    LANGUAGES
        .iter()
        .map(|(code, name, native_name, family)| Language {
            code: code.to_string(),
            name: name.to_string(),
            native_name: native_name.to_string(),
            family: family.to_string(),
        })
        .collect()
}

fn milestones() -> Vec<Milestone> {
    vec![
        milestone(
            LevelId::Starter,
            "Starter Spark",
            "🎯",
            "Build unstoppable foundations with smart spaced repetition and pronunciation mirrors.",
            "AI Companion records every attempt, corrects sound waves, and awards streak boosts.",
            "7 days",
        ),
        milestone(
            LevelId::Explorer,
            "Explorer Quest",
            "🧭",
            "Unlock travel packs, cultural survival stories, and rapid response mini-games.",
            "Scenario simulator adapts role plays based on your native language reflexes.",
            "21 days",
        ),
        milestone(
            LevelId::Storyteller,
            "Storyteller Rise",
            "📚",
            "Craft confident conversations, improvise jokes, and weave cultural anecdotes.",
            "Narrative AI stitches variations of your stories to test depth and nuance.",
            "35 days",
        ),
        milestone(
            LevelId::Mastery,
            "Mastery Arena",
            "🏆",
            "Specialize in business, academia, or creative mastery with expert-guided sprints.",
            "Coach blends real-world articles, voice clones, and peer challenges on demand.",
            "90 days",
        ),
    ]
}

fn skill_tracks() -> Vec<SkillTrack> {
    vec![
        skill_track(
            "vocabulary",
            "Vocabulary Maps",
            "🗺️",
            "Discover themed word constellations with AI clustering and pronunciation playback.",
            &[
                "Adaptive decks build from your mistakes.",
                "Visual memory palaces for long-term recall.",
                "Daily speed-rounds with smart difficulty shifts.",
            ],
        ),
        skill_track(
            "grammar",
            "Grammar Workshop",
            "⚙️",
            "Turn tricky grammar into friendly hacks powered by pattern-aware explanations.",
            &[
                "AI rewrites explainers using your native language.",
                "Interactive sandboxes show rules in action.",
                "Instant feedback on sentence crafting challenges.",
            ],
        ),
        skill_track(
            "conversation",
            "Conversation Studio",
            "🎙️",
            "Role-play real-life situations with avatars that coach you to natural fluency.",
            &[
                "Voice mirror responds with accents you choose.",
                "Emotion tracker scores confidence and clarity.",
                "AI supervisor summarizes progress every session.",
            ],
        ),
        skill_track(
            "culture",
            "Culture Adventures",
            "🎭",
            "Dive into festivals, cuisine, cinema, and micro-cultures through story quests.",
            &[
                "Interactive maps unlock regional phrases.",
                "Cultural quizzes reward collectible badges.",
                "Community duels celebrate local knowledge.",
            ],
        ),
    ]
}

fn personas() -> Vec<Persona> {
    vec![
        persona(
            "sensei",
            "Sensei Nova",
            "Precision Pronunciation",
            "Neutral global accent with tone-perfect guidance.",
            &["Beginners", "Audio Learners", "Daily streakers"],
        ),
        persona(
            "companion",
            "Companion Lila",
            "Friendly Conversationalist",
            "Adapts to your chosen region with empathetic corrections.",
            &["Confidence building", "Storytelling", "Travel prep"],
        ),
        persona(
            "strategist",
            "Strategist Orion",
            "Goal-driven Mentor",
            "Business and academia focused, crisp articulation.",
            &["Interviews", "Presentations", "Professional polish"],
        ),
    ]
}

fn pricing() -> Vec<PricingTier> {
    vec![
        pricing_tier(
            "Spark",
            "$9",
            "per month",
            &[
                "Unlimited AI conversations with Sensei Nova",
                "Daily story quests tailored to your native language",
                "Offline lesson packs across 12 skill missions",
            ],
            false,
        ),
        pricing_tier(
            "Galaxy",
            "$19",
            "per month",
            &[
                "All Spark benefits",
                "Live community leagues with weekly rewards",
                "Professional pronunciation analysis with spectral heatmaps",
                "Personal AI strategist for interviews and presentations",
            ],
            true,
        ),
        pricing_tier(
            "Infinity",
            "$199",
            "per year",
            &[
                "Galaxy tier unlocked across every language",
                "Custom curricula mapped to academic or corporate goals",
                "Quarterly fluency certifications with human mentors",
                "Vercel-powered API access for innovators and schools",
            ],
            false,
        ),
    ]
}

fn flashcard_decks() -> BTreeMap<String, Vec<Flashcard>> {
    let mut decks = BTreeMap::new();
    decks.insert(
        "en".to_string(),
        vec![
            flashcard("مرحبا", "Hello", "Smile when you say it to mimic intonation."),
            flashcard("شكراً", "Thank you", "Practice with a gratitude journal entry."),
            flashcard("أين المترو؟", "Where is the metro?", "Visualize yourself at a busy station."),
        ],
    );
    decks.insert(
        "es".to_string(),
        vec![
            flashcard("Good morning", "Buenos días", "Link it with a sunrise playlist."),
            flashcard("How are you?", "¿Cómo estás?", "Emphasize the rising tone on the last word."),
            flashcard("See you later", "Hasta luego", "Wave your hand as a kinesthetic cue."),
        ],
    );
    decks.insert(
        "fr".to_string(),
        vec![
            flashcard("Thank you very much", "Merci beaucoup", "Round your lips for the ending sound."),
            flashcard("I would like coffee", "Je voudrais un café", "Practice with a café role-play."),
            flashcard("Where do you live?", "Où habites-tu ?", "Keep the liaison between words smooth."),
        ],
    );
    decks
}

fn quiz_decks() -> BTreeMap<String, Vec<QuizQuestion>> {
    let mut decks = BTreeMap::new();
    decks.insert(
        "en".to_string(),
        vec![
            question(
                "Choose the correct response: ما اسمك؟",
                &["How old are you?", "What's your name?", "Where are you going?", "What do you do?"],
                "What's your name?",
                "Focus on polite introductions.",
            ),
            question(
                "Pick the best translation: أحب القراءة",
                &["I love reading", "I need rest", "I lost the book", "I will arrive early"],
                "I love reading",
                "Think about hobbies and passions.",
            ),
        ],
    );
    decks.insert(
        "es".to_string(),
        vec![
            question(
                "Translate to Spanish: I need an extra ticket.",
                &[
                    "Necesito un boleto extra.",
                    "Necesito llegar temprano.",
                    "Tengo un boleto extra.",
                    "¿Dónde está la taquilla?",
                ],
                "Necesito un boleto extra.",
                "Look for the verb that mirrors 'need'.",
            ),
            question(
                "Pick the correct phrase for ordering food at a café.",
                &[
                    "Quisiera un té verde, por favor.",
                    "¿Dónde está el tren?",
                    "Necesito cambiar dinero.",
                    "¿Puedes ayudarme?",
                ],
                "Quisiera un té verde, por favor.",
                "Mind the polite opening phrase.",
            ),
        ],
    );
    decks.insert(
        "fr".to_string(),
        vec![
            question(
                "Quelle est la bonne traduction de “I'm learning French” ?",
                &[
                    "J'apprends le français.",
                    "Je cherche le français.",
                    "Je visite le français.",
                    "Je trouve le français.",
                ],
                "J'apprends le français.",
                "Spot the verb that means 'to learn'.",
            ),
            question(
                "Choisissez la réponse appropriée : Où est la bibliothèque ?",
                &[
                    "Elle est près du parc.",
                    "Je suis en retard.",
                    "Nous sommes heureux.",
                    "C'est délicieux.",
                ],
                "Elle est près du parc.",
                "Think about locations.",
            ),
        ],
    );
    decks
}

fn phrase_decks() -> BTreeMap<String, Vec<PhraseCard>> {
    let mut decks = BTreeMap::new();
    decks.insert(
        "en".to_string(),
        vec![
            phrase(
                "Arrange to describe a daily routine",
                "I wake up at six every day",
                "Say it out loud with your morning stretch.",
            ),
            phrase(
                "Build a polite request for directions",
                "Excuse me could you show me the museum?",
                "Add a friendly tone to feel authentic.",
            ),
        ],
    );
    decks.insert(
        "es".to_string(),
        vec![
            phrase(
                "Forma una frase para pedir la cuenta",
                "¿Nos puedes traer la cuenta por favor?",
                "Practice it with a smile and eye contact.",
            ),
            phrase(
                "Construye una frase sobre tus hobbies",
                "Me encanta tocar la guitarra los fines de semana",
                "Share it with a friend to anchor the memory.",
            ),
        ],
    );
    decks.insert(
        "fr".to_string(),
        vec![
            phrase(
                "Composer une phrase pour faire des courses",
                "Je cherche un cadeau pour mon ami",
                "Imagine yourself in a stylish Paris boutique.",
            ),
            phrase(
                "Exprimez votre passion pour la cuisine",
                "J'adore préparer des plats traditionnels le dimanche",
                "Visualize the aroma of your favorite recipe.",
            ),
        ],
    );
    decks
}

/// Raw built-in tables, before validation.
pub fn builtin_data() -> CatalogData {
    CatalogData {
        languages: languages(),
        greetings: GREETINGS
            .iter()
            .map(|(code, greeting)| (code.to_string(), greeting.to_string()))
            .collect(),
        default_greeting: "en".to_string(),
        milestones: milestones(),
        skill_tracks: skill_tracks(),
        personas: personas(),
        pricing: pricing(),
        flashcards: DeckTableData {
            default: "en".to_string(),
            decks: flashcard_decks(),
        },
        quizzes: DeckTableData {
            default: "en".to_string(),
            decks: quiz_decks(),
        },
        phrases: DeckTableData {
            default: "en".to_string(),
            decks: phrase_decks(),
        },
    }
}
