use eframe::{egui, App};
use std::sync::Arc;

use linguaplay::catalog::Catalog;
use linguaplay::config::Config;
use linguaplay::games::{Direction, GameSet, OptionFeedback};
use linguaplay::plan::{compose_plan, native_boost, PlanRequest, PlanTables, VariationSeed};
use linguaplay::preferences::PreferenceStore;
use linguaplay::theme::{load_theme, save_theme, ThemeMode};

pub struct LinguaPlayApp {
    catalog: Arc<Catalog>,
    plan_tables: PlanTables,
    preferences: Option<PreferenceStore>,
    theme: ThemeMode,
    native_language: String,
    target_language: String,
    level: String,
    goal: String,
    seed: VariationSeed,
    games: GameSet,
    status_error: Option<String>,
}

impl LinguaPlayApp {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        catalog: Arc<Catalog>,
        config: &Config,
        preferences: Option<PreferenceStore>,
    ) -> Self {
        let system_prefers_dark = cc
            .integration_info
            .system_theme
            .map(|theme| theme == eframe::Theme::Dark);
        let theme = match &preferences {
            Some(store) => load_theme(store, system_prefers_dark),
            None => ThemeMode::resolve_initial(None, system_prefers_dark),
        };
        apply_theme(&cc.egui_ctx, theme);

        let defaults = &config.defaults;
        let games = GameSet::for_language(&catalog, &defaults.target_language);

        Self {
            catalog,
            plan_tables: PlanTables::builtin(),
            preferences,
            theme,
            native_language: defaults.native_language.clone(),
            target_language: defaults.target_language.clone(),
            level: defaults.level.clone(),
            goal: defaults.goal.clone(),
            seed: VariationSeed::default(),
            games,
            status_error: None,
        }
    }

    fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.theme = self.theme.toggle();
        apply_theme(ctx, self.theme);
        if let Some(store) = &mut self.preferences {
            if let Err(e) = save_theme(store, self.theme) {
                log::warn!("Could not save theme preference: {e}");
                self.status_error = Some(format!("Theme not saved: {e}"));
            }
        }
    }

    fn language_pickers(&mut self, ui: &mut egui::Ui) {
        let catalog = Arc::clone(&self.catalog);
        let label_for = |code: &str| {
            catalog
                .language(code)
                .map_or_else(|| code.to_string(), |language| language.option_label())
        };

        ui.horizontal(|ui| {
            ui.label("لغتي الأم");
            egui::ComboBox::from_id_source("native_language")
                .selected_text(label_for(&self.native_language))
                .width(220.0)
                .show_ui(ui, |ui| {
                    for language in catalog.languages() {
                        ui.selectable_value(
                            &mut self.native_language,
                            language.code.clone(),
                            language.option_label(),
                        );
                    }
                });

            ui.label("أرغب في تعلم");
            egui::ComboBox::from_id_source("target_language")
                .selected_text(label_for(&self.target_language))
                .width(220.0)
                .show_ui(ui, |ui| {
                    for language in catalog.target_choices(&self.native_language) {
                        ui.selectable_value(
                            &mut self.target_language,
                            language.code.clone(),
                            language.option_label(),
                        );
                    }
                });
        });

        self.games.switch_language(&catalog, &self.target_language);
    }

    fn plan_panel(&mut self, ui: &mut egui::Ui) {
        let catalog = Arc::clone(&self.catalog);
        ui.heading("Journey Map");

        ui.horizontal_wrapped(|ui| {
            for milestone in catalog.milestones() {
                let id = milestone.id.as_str();
                let text = format!("{} {}\n{}", milestone.badge, milestone.title, milestone.duration);
                if ui.selectable_label(self.level == id, text).clicked() {
                    self.level = id.to_string();
                }
            }
        });

        ui.label("ما هو هدفك الحالي؟");
        ui.add(
            egui::TextEdit::multiline(&mut self.goal)
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(8.0);

        let native = catalog.language(&self.native_language);
        let target = catalog.language(&self.target_language);
        let plan = compose_plan(
            &self.plan_tables,
            &PlanRequest {
                goal: &self.goal,
                level: &self.level,
                native,
                target,
                seed: self.seed.value(),
            },
        );

        ui.heading("خطة المدرب الذكي");
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(egui::RichText::new(plan).monospace());
        });
        if ui.button("🔁 أنشئ خطة جديدة الآن").clicked() {
            self.seed.regenerate();
        }
    }

    fn flashcard_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Flashcards");
        let view = self.games.flashcards.view();
        let face = view.face.to_string();
        let tip = view.tip.to_string();
        let hint = view.reveal_hint;
        let position = view.position;

        let card = ui.add_sized(
            [ui.available_width(), 80.0],
            egui::Button::new(egui::RichText::new(face).size(20.0)),
        );
        if card.clicked() {
            self.games.flashcards.toggle_reveal();
        }
        ui.small(hint);
        ui.label(format!("💡 {tip}"));
        ui.horizontal(|ui| {
            if ui.button("◀").clicked() {
                self.games.flashcards.advance(Direction::Previous);
            }
            ui.label(position);
            if ui.button("▶").clicked() {
                self.games.flashcards.advance(Direction::Next);
            }
        });
    }

    fn quiz_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Quick Quiz");
        let quiz = &self.games.quiz;

        if let Some(summary) = quiz.summary() {
            ui.label(summary);
            if ui.button("Play again").clicked() {
                self.games.quiz.restart();
            }
            return;
        }

        let question = quiz.current();
        ui.label(quiz.position());
        ui.label(egui::RichText::new(&question.question).strong());

        let answered = quiz.selected_option().is_some();
        let mut chosen = None;
        for option in &question.options {
            let text = match quiz.option_feedback(option) {
                OptionFeedback::Correct => egui::RichText::new(option).color(egui::Color32::from_rgb(34, 160, 90)),
                OptionFeedback::Wrong => egui::RichText::new(option).color(egui::Color32::from_rgb(210, 60, 60)),
                OptionFeedback::Neutral => egui::RichText::new(option),
            };
            if ui.add_enabled(!answered, egui::Button::new(text)).clicked() {
                chosen = Some(option.clone());
            }
        }
        if answered {
            ui.small(format!("💡 {}", question.hint));
        }
        let advance_label = quiz.advance_label();

        if let Some(option) = chosen {
            self.games.quiz.select_option(&option);
        }
        if ui.add_enabled(answered, egui::Button::new(advance_label)).clicked() {
            self.games.quiz.advance();
        }
    }

    fn phrase_ui(&mut self, ui: &mut egui::Ui) {
        ui.heading("Phrase Builder");
        let phrases = &self.games.phrases;
        let finished = phrases.is_finished();

        ui.label(&phrases.current().clue);
        ui.group(|ui| {
            ui.set_width(ui.available_width());
            ui.label(phrases.built_sentence());
        });

        let mut picked = None;
        ui.horizontal_wrapped(|ui| {
            for tile in phrases.tiles() {
                if ui.add_enabled(!tile.disabled, egui::Button::new(tile.token)).clicked() {
                    picked = Some(tile.token.to_string());
                }
            }
        });
        if let Some(banner) = phrases.solved_banner() {
            ui.colored_label(egui::Color32::from_rgb(34, 160, 90), banner);
        }
        let step_label = phrases.step_label();

        if let Some(token) = picked {
            self.games.phrases.pick_tile(&token);
        }
        if ui.button(step_label).clicked() {
            if finished {
                self.games.phrases.restart();
            } else {
                self.games.phrases.advance();
            }
        }
    }

    fn showcase_ui(&self, ui: &mut egui::Ui) {
        ui.collapsing("Skill Universes", |ui| {
            for track in self.catalog.skill_tracks() {
                ui.label(egui::RichText::new(format!("{} {}", track.icon, track.title)).strong());
                ui.label(&track.description);
                for outcome in &track.outcomes {
                    ui.label(format!("✓ {outcome}"));
                }
                ui.add_space(6.0);
            }
        });

        ui.collapsing("Milestones", |ui| {
            for milestone in self.catalog.milestones() {
                ui.label(
                    egui::RichText::new(format!(
                        "{} {} ({})",
                        milestone.badge, milestone.title, milestone.duration
                    ))
                    .strong(),
                );
                ui.label(&milestone.focus);
                ui.small(format!("🤖 {}", milestone.ai_support));
                ui.add_space(6.0);
            }
        });

        ui.collapsing("AI Personas", |ui| {
            for persona in self.catalog.personas() {
                ui.label(egui::RichText::new(format!("{} · {}", persona.title, persona.tag)).strong());
                ui.label(&persona.accent);
                ui.small(format!("Best for: {}", persona.best_for.join(", ")));
                ui.add_space(6.0);
            }
        });

        ui.collapsing("Premium", |ui| {
            ui.columns(self.catalog.pricing().len().max(1), |columns| {
                for (column, tier) in columns.iter_mut().zip(self.catalog.pricing()) {
                    column.group(|ui| {
                        let title = egui::RichText::new(&tier.tier).strong();
                        if tier.featured {
                            ui.label(title.color(egui::Color32::GOLD));
                        } else {
                            ui.label(title);
                        }
                        ui.label(format!("{} {}", tier.price, tier.cadence));
                        for perk in &tier.perks {
                            ui.small(format!("• {perk}"));
                        }
                    });
                }
            });
        });
    }
}

fn apply_theme(ctx: &egui::Context, theme: ThemeMode) {
    ctx.set_visuals(if theme.is_dark() {
        egui::Visuals::dark()
    } else {
        egui::Visuals::light()
    });
}

impl App for LinguaPlayApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("🌍 LinguaPlay");
                ui.label("Learn every language with joy + AI.");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if self.theme.is_dark() { "☀" } else { "🌙" };
                    if ui.button(icon).on_hover_text("Toggle theme").clicked() {
                        self.toggle_theme(ctx);
                    }
                    if let Some(err) = &self.status_error {
                        ui.colored_label(egui::Color32::RED, err);
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().auto_shrink([false, false]).show(ui, |ui| {
                if let Some(greeting) = self.catalog.greeting(&self.native_language) {
                    ui.label(egui::RichText::new(greeting).size(16.0));
                }
                self.language_pickers(ui);

                let boost = native_boost(
                    self.catalog.language(&self.native_language),
                    self.catalog.language(&self.target_language),
                );
                if let Some(boost) = boost {
                    ui.small(boost);
                }
                ui.separator();

                self.plan_panel(ui);
                ui.separator();

                ui.heading("Game Lab");
                ui.columns(3, |columns| {
                    self.flashcard_ui(&mut columns[0]);
                    self.quiz_ui(&mut columns[1]);
                    self.phrase_ui(&mut columns[2]);
                });
                ui.separator();

                self.showcase_ui(ui);
            });
        });
    }
}
