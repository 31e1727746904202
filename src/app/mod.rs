//! Application layer: theme, state store, animation clocks, workbench.

pub mod anim;
pub mod state;
pub mod theme;
pub mod workbench;

pub use state::{Action, AppState, Effect, Section, Store};
pub use theme::UiTheme;
pub use workbench::Workbench;
