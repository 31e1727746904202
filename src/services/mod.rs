//! Service layer.

pub mod settings;

pub use settings::{SettingsService, ThemeSettings, UiSettings};
