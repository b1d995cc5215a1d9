use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

pub const DEFAULT_TARGET_USER: &str = "Travis Fantina";
pub const DEFAULT_GOAL_HOURS: f64 = 140.0;
pub const DEFAULT_ACCOUNT_LABELS: [&str; 2] = ["Objective", "Built"];

/// Optional overrides read from `~/.harvest-hours.json`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub target_user: Option<String>,
    #[serde(default)]
    pub goal_hours: Option<f64>,
    #[serde(default)]
    pub account_labels: Vec<String>,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Settings {
    pub fn account_label(&self, index: usize) -> String {
        self.account_labels
            .get(index)
            .filter(|label| !label.trim().is_empty())
            .cloned()
            .or_else(|| DEFAULT_ACCOUNT_LABELS.get(index).map(|label| label.to_string()))
            .unwrap_or_else(|| format!("Account {}", index + 1))
    }
}

pub fn read_settings() -> Settings {
    let Some(path) = settings_path() else {
        return Settings::default();
    };
    let Ok(contents) = fs::read_to_string(&path) else {
        debug!(path = %path.display(), "no settings file");
        return Settings::default();
    };
    match parse_settings(&contents) {
        Some(settings) => settings,
        None => {
            warn!(path = %path.display(), "ignoring malformed settings file");
            Settings::default()
        }
    }
}

fn parse_settings(contents: &str) -> Option<Settings> {
    serde_json::from_str(contents).ok()
}

fn settings_path() -> Option<PathBuf> {
    let mut path = dirs::home_dir()?;
    path.push(".harvest-hours.json");
    Some(path)
}
