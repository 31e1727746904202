//! View trait implemented by every section of the portfolio.

use ratatui::layout::Rect;
use ratatui::Frame;

use super::event::InputEvent;
use crate::app::state::AppState;
use crate::app::theme::UiTheme;

pub trait View {
    /// Section-local input (scrolling, orb focus). Shared state (filter,
    /// selection) is mutated by the workbench through the store, not here.
    fn handle_input(&mut self, event: &InputEvent) -> EventResult;

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme);

    /// Called when the section becomes the active tab.
    fn on_enter(&mut self) {}

    /// Advance animation clocks. Returns true when the next frame differs.
    fn tick(&mut self) -> bool {
        false
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    Consumed,
    Ignored,
    Quit,
}

impl EventResult {
    pub fn is_consumed(&self) -> bool {
        matches!(self, EventResult::Consumed)
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, EventResult::Ignored)
    }

    pub fn is_quit(&self) -> bool {
        matches!(self, EventResult::Quit)
    }
}
