//! Personalised study plan text.
//!
//! The "AI" plan is template assembly: a stage plan keyed by level, plus one
//! entry from each of two rotation pools picked by `seed % pool_len`. The
//! output is a pure function of its inputs, so bumping the seed cycles
//! through the pools in a fixed order.

use crate::error::{LinguaPlayError, Result};
use crate::types::catalog_data::{Language, LevelId};

pub const DEFAULT_GOAL: &str = "I want to express myself confidently in everyday conversations.";
pub const TARGET_PLACEHOLDER: &str = "اللغة الجديدة";
const BOOST_TARGET_PLACEHOLDER: &str = "اللغة";
pub const GENERIC_NATIVE_HINT: &str = "We will leverage your native language patterns";
pub const CLOSING_LINE: &str =
    "🚀 Track progress on your dashboard and celebrate every milestone you unlock!";

const STARTER_PLAN: [&str; 3] = [
    "Micro lessons that introduce sounds, scripts, and top 100 survival words.",
    "Emoji-powered drills and voice mirrors to build muscle memory.",
    "Interactive quests celebrating every streak you complete.",
];

const EXPLORER_PLAN: [&str; 3] = [
    "Scenario role plays for travel, study, and social moments.",
    "Live pronunciation corrections with instant spectral feedback.",
    "Weekly remix challenges turning vocabulary into mini stories.",
];

const STORYTELLER_PLAN: [&str; 3] = [
    "Creative writing sparks with AI co-authors adapting to your tone.",
    "Cultural insights that unlock idioms, humor, and local expressions.",
    "Conversation circles powered by adaptive avatars with different accents.",
];

const MASTERY_PLAN: [&str; 3] = [
    "Specialized tracks for business, academia, and creative fluency.",
    "Deep-dive feedback comparing your speech to expert benchmarks.",
    "Personalized fluency missions culminating in certification labs.",
];

const INSPIRATION_POOL: [&str; 4] = [
    "🎉 Unlock a hidden celebration badge when you finish three consecutive missions.",
    "🎵 Add a music-powered shadowing session to infuse rhythm into your speech.",
    "🧩 End every mission with a culture trivia tile to widen your worldview.",
    "🪄 Turn your mistakes into collectible power-ups inside Game Lab quests.",
];

const ACCENT_POOL: [&str; 3] = [
    "Focus on breath control and intonation arcs for natural prosody.",
    "Mirror native speech by recording and comparing waveforms with the AI analyzer.",
    "Use the color-coded pronunciation tracker to smooth tricky consonant clusters.",
];

/// Text tables the composer draws from.
#[derive(Debug, Clone, Copy)]
pub struct PlanTables {
    starter: [&'static str; 3],
    explorer: [&'static str; 3],
    storyteller: [&'static str; 3],
    mastery: [&'static str; 3],
    inspiration: &'static [&'static str],
    accent: &'static [&'static str],
}

impl PlanTables {
    /// Stage plans in `LevelId::ALL` order. Pools must be non-empty.
    pub fn new(
        stage_plans: [[&'static str; 3]; 4],
        inspiration: &'static [&'static str],
        accent: &'static [&'static str],
    ) -> Result<Self> {
        if inspiration.is_empty() {
            return Err(LinguaPlayError::EmptyPlanPool("inspiration"));
        }
        if accent.is_empty() {
            return Err(LinguaPlayError::EmptyPlanPool("accent"));
        }
        let [starter, explorer, storyteller, mastery] = stage_plans;
        Ok(PlanTables {
            starter,
            explorer,
            storyteller,
            mastery,
            inspiration,
            accent,
        })
    }

    pub fn builtin() -> Self {
        PlanTables {
            starter: STARTER_PLAN,
            explorer: EXPLORER_PLAN,
            storyteller: STORYTELLER_PLAN,
            mastery: MASTERY_PLAN,
            inspiration: &INSPIRATION_POOL,
            accent: &ACCENT_POOL,
        }
    }

    pub fn stage_plan(&self, level: LevelId) -> &[&'static str; 3] {
        match level {
            LevelId::Starter => &self.starter,
            LevelId::Explorer => &self.explorer,
            LevelId::Storyteller => &self.storyteller,
            LevelId::Mastery => &self.mastery,
        }
    }

    pub fn bonus_line(&self, seed: u64) -> &'static str {
        pick(self.inspiration, seed)
    }

    pub fn accent_tip(&self, seed: u64) -> &'static str {
        pick(self.accent, seed)
    }
}

impl Default for PlanTables {
    fn default() -> Self {
        PlanTables::builtin()
    }
}

fn pick(pool: &'static [&'static str], seed: u64) -> &'static str {
    // Pools are non-empty by construction.
    pool[(seed % pool.len() as u64) as usize]
}

/// Counter behind the "regenerate" action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct VariationSeed(pub u64);

impl VariationSeed {
    pub fn regenerate(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    pub goal: &'a str,
    /// Raw level id; unknown ids plan as `starter`.
    pub level: &'a str,
    pub native: Option<&'a Language>,
    pub target: Option<&'a Language>,
    pub seed: u64,
}

pub fn compose_plan(tables: &PlanTables, request: &PlanRequest<'_>) -> String {
    let trimmed_goal = request.goal.trim();
    let goal = if trimmed_goal.is_empty() {
        DEFAULT_GOAL
    } else {
        trimmed_goal
    };

    let native_hint = match request.native {
        Some(native) => format!(
            "We will leverage {} ({}) cognates and phonetic bridges",
            native.native_name, native.name
        ),
        None => GENERIC_NATIVE_HINT.to_string(),
    };

    let target_label = request
        .target
        .map_or(TARGET_PLACEHOLDER, |target| target.native_name.as_str());

    let stage_plan = tables.stage_plan(LevelId::from_id_or_starter(request.level));

    let mut lines = vec![
        format!("🎯 Target focus for {target_label}: {goal}"),
        format!("🧠 {native_hint} to accelerate understanding."),
        "⚡ Weekly blueprint:".to_string(),
    ];
    lines.extend(
        stage_plan
            .iter()
            .enumerate()
            .map(|(index, line)| format!("{}. {}", index + 1, line)),
    );
    lines.push(format!("🎧 Accent boost: {}", tables.accent_tip(request.seed)));
    lines.push(tables.bonus_line(request.seed).to_string());
    lines.push(CLOSING_LINE.to_string());

    lines.join("\n")
}

/// Hero-panel blurb; only shown once a native language is known.
pub fn native_boost(native: Option<&Language>, target: Option<&Language>) -> Option<String> {
    let native = native?;
    let target_label = target.map_or(BOOST_TARGET_PLACEHOLDER, |target| target.native_name.as_str());
    Some(format!(
        "{} speakers learn {} faster with tailored mnemonics, mirrored grammar maps, and cultural bridges forged by our AI.",
        native.native_name, target_label
    ))
}
