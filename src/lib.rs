//! folio - a terminal portfolio
//!
//! Module structure:
//! - core: framework abstractions (View, InputEvent, Service)
//! - models: static content (projects, skills, biography)
//! - app: theme, state store, animation clocks, workbench
//! - views: one view per section (About, Skills, Projects)
//! - services: settings file loading and polling
//! - tui: terminal setup/restore and signal handling

pub mod app;
pub mod core;
pub mod logging;
pub mod models;
pub mod services;
pub mod tui;
pub mod views;
