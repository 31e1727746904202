//! Settings service: an optional JSON file with theme overrides and
//! animation parameters, polled for changes while the app runs.
//!
//! A missing file means defaults; a malformed file is logged and ignored.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime};

use crate::app::anim::Stagger;
use crate::core::Service;

pub const SETTINGS_ENV: &str = "FOLIO_SETTINGS";
pub const SETTINGS_FILE: &str = "folio.json";

const CHECK_INTERVAL: Duration = Duration::from_millis(500);

/// Hex (or named) color overrides, one per theme token. All optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeSettings {
    pub bg: Option<String>,
    pub panel_bg: Option<String>,
    pub panel_border: Option<String>,
    pub focus_border: Option<String>,
    pub header_fg: Option<String>,
    pub accent_fg: Option<String>,
    pub accent_alt_fg: Option<String>,
    pub highlight_fg: Option<String>,
    pub text_fg: Option<String>,
    pub text_bright_fg: Option<String>,
    pub text_muted_fg: Option<String>,
    pub badge_bg: Option<String>,
    pub badge_fg: Option<String>,
    pub star_fg: Option<String>,
    pub modal_border: Option<String>,
    pub hint_fg: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Main-loop tick, in milliseconds. Drives reveal animation speed.
    pub tick_ms: u64,
    /// Ticks before the first staggered child appears.
    pub reveal_delay: u64,
    /// Ticks between consecutive staggered children.
    pub reveal_interval: u64,
    /// Fan-out radius for the focused skill category, in percent of the
    /// constellation area.
    pub fan_radius: f64,
    pub theme: ThemeSettings,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            reveal_delay: 2,
            reveal_interval: 2,
            fan_radius: 38.0,
            theme: ThemeSettings::default(),
        }
    }
}

impl UiSettings {
    pub fn stagger(&self) -> Stagger {
        Stagger {
            delay: self.reveal_delay,
            interval: self.reveal_interval,
        }
    }
}

pub struct SettingsService {
    path: Option<PathBuf>,
    settings: UiSettings,
    last_check: Instant,
    last_modified: Option<SystemTime>,
}

impl SettingsService {
    /// Resolves the settings path from `$FOLIO_SETTINGS`, falling back to
    /// `folio.json` in the working directory, and loads it if present.
    pub fn new() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .or_else(|| Some(PathBuf::from(SETTINGS_FILE)));
        Self::with_path(path)
    }

    pub fn with_path(path: Option<PathBuf>) -> Self {
        let settings = path
            .as_deref()
            .map(load_settings)
            .unwrap_or_default();
        let last_modified = path.as_deref().and_then(modified_time);
        Self {
            path,
            settings,
            last_check: Instant::now(),
            last_modified,
        }
    }

    pub fn settings(&self) -> &UiSettings {
        &self.settings
    }

    /// Reloads when the file's mtime moved since the last poll. Throttled
    /// so the tick loop can call it unconditionally. Returns true when the
    /// active settings changed.
    pub fn poll_reload(&mut self) -> bool {
        let Some(path) = self.path.clone() else {
            return false;
        };
        if self.last_check.elapsed() < CHECK_INTERVAL {
            return false;
        }
        self.last_check = Instant::now();

        let modified = modified_time(&path);
        if modified == self.last_modified {
            return false;
        }
        self.last_modified = modified;

        let reloaded = load_settings(&path);
        if reloaded == self.settings {
            return false;
        }
        tracing::info!(path = %path.display(), "settings reloaded");
        self.settings = reloaded;
        true
    }
}

impl Default for SettingsService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service for SettingsService {
    fn name(&self) -> &'static str {
        "SettingsService"
    }
}

fn load_settings(path: &Path) -> UiSettings {
    let data = match std::fs::read_to_string(path) {
        Ok(data) => data,
        Err(_) => return UiSettings::default(),
    };
    match serde_json::from_str(&data) {
        Ok(settings) => settings,
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "invalid settings file");
            UiSettings::default()
        }
    }
}

fn modified_time(path: &Path) -> Option<SystemTime> {
    std::fs::metadata(path).and_then(|m| m.modified()).ok()
}
