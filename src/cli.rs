use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "linguaplay", version, about = "LinguaPlay language-learning showcase")]
pub struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Open the desktop app (default)
    Gui,
    /// Print a study plan
    Plan {
        #[arg(long)]
        goal: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        native: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// List languages, optionally without one (e.g. your native language)
    Languages {
        #[arg(long)]
        exclude: Option<String>,
    },
    /// Print the level roadmap
    Roadmap,
    /// Show or change the stored theme
    Theme {
        #[arg(value_enum)]
        action: Option<ThemeAction>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Light,
    Dark,
    Toggle,
}
