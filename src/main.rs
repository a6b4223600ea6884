#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod cli;

use clap::Parser;
use eframe::{egui, NativeOptions};
use std::error::Error;
use std::sync::Arc;

use linguaplay::catalog::{load_catalog_from_file, Catalog};
use linguaplay::config::{resolve_config, Config};
use linguaplay::plan::{compose_plan, PlanRequest, PlanTables};
use linguaplay::preferences::PreferenceStore;
use linguaplay::theme::{load_theme, save_theme, ThemeMode};

use crate::app::LinguaPlayApp;
use crate::cli::{Cli, Cmd, ThemeAction};

fn load_catalog(config: &Config) -> linguaplay::Result<Catalog> {
    match config.catalog_path() {
        Some(path) => load_catalog_from_file(&path),
        None => Catalog::builtin(),
    }
}

fn open_preferences(config: &Config) -> linguaplay::Result<PreferenceStore> {
    let path = match config.preferences_path() {
        Some(path) => path,
        None => PreferenceStore::default_path()?,
    };
    PreferenceStore::open(path)
}

fn run_gui(config: Config, catalog: Arc<Catalog>) -> Result<(), eframe::Error> {
    // Without persistence the app still runs; the theme just isn't remembered.
    let preferences = match open_preferences(&config) {
        Ok(store) => Some(store),
        Err(e) => {
            log::warn!("Preferences unavailable: {e}");
            None
        }
    };

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([960.0, 640.0]),
        follow_system_theme: false,
        ..Default::default()
    };
    eframe::run_native(
        "LinguaPlay",
        options,
        Box::new(move |cc| Box::new(LinguaPlayApp::new(cc, catalog, &config, preferences))),
    )
}

fn print_plan(
    catalog: &Catalog,
    config: &Config,
    goal: Option<String>,
    level: Option<String>,
    native: Option<String>,
    target: Option<String>,
    seed: u64,
) {
    let defaults = &config.defaults;
    let goal = goal.unwrap_or_else(|| defaults.goal.clone());
    let level = level.unwrap_or_else(|| defaults.level.clone());
    let native = native.unwrap_or_else(|| defaults.native_language.clone());
    let target = target.unwrap_or_else(|| defaults.target_language.clone());

    let plan = compose_plan(
        &PlanTables::builtin(),
        &PlanRequest {
            goal: &goal,
            level: &level,
            native: catalog.language(&native),
            target: catalog.language(&target),
            seed,
        },
    );
    println!("{plan}");
}

fn print_languages(catalog: &Catalog, exclude: Option<&str>) {
    let languages = match exclude {
        Some(native) => catalog.target_choices(native),
        None => catalog.languages().iter().collect(),
    };
    for language in languages {
        println!("{}\t{}", language.code, language.option_label());
    }
}

fn print_roadmap(catalog: &Catalog) {
    for milestone in catalog.milestones() {
        println!(
            "{} {} [{}] {}",
            milestone.badge, milestone.title, milestone.id, milestone.duration
        );
        println!("   {}", milestone.focus);
        println!("   🤖 {}", milestone.ai_support);
    }
}

fn run_theme(config: &Config, action: Option<ThemeAction>) -> linguaplay::Result<()> {
    let mut store = open_preferences(config)?;
    let current = load_theme(&store, None);
    let next = match action {
        None => {
            println!("{current}");
            return Ok(());
        }
        Some(ThemeAction::Light) => ThemeMode::Light,
        Some(ThemeAction::Dark) => ThemeMode::Dark,
        Some(ThemeAction::Toggle) => current.toggle(),
    };
    save_theme(&mut store, next)?;
    println!("{next}");
    Ok(())
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = resolve_config(cli.config.as_deref())?;
    let catalog = load_catalog(&config)?;

    match cli.cmd.unwrap_or(Cmd::Gui) {
        Cmd::Gui => run_gui(config, Arc::new(catalog))?,
        Cmd::Plan {
            goal,
            level,
            native,
            target,
            seed,
        } => print_plan(&catalog, &config, goal, level, native, target, seed),
        Cmd::Languages { exclude } => print_languages(&catalog, exclude.as_deref()),
        Cmd::Roadmap => print_roadmap(&catalog),
        Cmd::Theme { action } => run_theme(&config, action)?,
    }
    Ok(())
}

fn main() {
    env_logger::init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
