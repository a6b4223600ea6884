use std::fmt;

use crate::error::Result;
use crate::preferences::PreferenceStore;

pub const THEME_KEY: &str = "linguaplay-theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn toggle(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Only the exact stored spellings are accepted.
    pub fn parse(value: &str) -> Option<ThemeMode> {
        match value {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    /// Startup theme: a valid stored value wins, then the system preference,
    /// then light.
    pub fn resolve_initial(stored: Option<&str>, system_prefers_dark: Option<bool>) -> ThemeMode {
        if let Some(value) = stored {
            match ThemeMode::parse(value) {
                Some(mode) => return mode,
                None => log::warn!("Ignoring stored theme '{value}'"),
            }
        }
        match system_prefers_dark {
            Some(true) => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn load_theme(store: &PreferenceStore, system_prefers_dark: Option<bool>) -> ThemeMode {
    ThemeMode::resolve_initial(store.get(THEME_KEY), system_prefers_dark)
}

pub fn save_theme(store: &mut PreferenceStore, mode: ThemeMode) -> Result<()> {
    log::info!("Saving theme preference '{mode}'");
    store.set(THEME_KEY, mode.as_str())
}
