//! TUI integration layer (crossterm + ratatui).

pub mod terminal_guard;

pub use terminal_guard::{TerminalGuard, TerminalRestorer, TerminationSignal};
