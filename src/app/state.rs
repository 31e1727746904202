//! Application state and its dispatch loop.
//!
//! All UI state lives in [`AppState`] and is mutated only by dispatching an
//! [`Action`] through the [`Store`]. Dispatch returns the side effects the
//! caller must perform (opening a URL is the only one) plus whether the
//! state changed, which drives redraws.

use crate::models::{filter_by_category, project_by_id, Project, CATEGORIES, PROJECTS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    About,
    Skills,
    Projects,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Skills, Section::Projects];

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
        }
    }

    /// Section number shown in headings, matching the site's "01." style.
    pub fn ordinal(self) -> &'static str {
        match self {
            Section::About => "01.",
            Section::Skills => "02.",
            Section::Projects => "03.",
        }
    }

    fn index(self) -> usize {
        Section::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    fn offset(self, delta: isize) -> Section {
        let len = Section::ALL.len() as isize;
        let next = (self.index() as isize + delta).rem_euclid(len);
        Section::ALL[next as usize]
    }
}

impl Default for Section {
    fn default() -> Self {
        Section::About
    }
}

/// Gallery-owned state: the active filter and the current selection.
/// Both reset to their defaults on restart; neither is persisted.
#[derive(Debug, Clone, Copy)]
pub struct GalleryState {
    pub active_category: &'static str,
    pub cursor: usize,
    pub selected: Option<u32>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            active_category: CATEGORIES[0],
            cursor: 0,
            selected: None,
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AppState {
    pub section: Section,
    pub gallery: GalleryState,
}

impl AppState {
    /// Projects visible under the active filter, in collection order.
    pub fn filtered_projects(&self) -> Vec<&'static Project> {
        filter_by_category(&PROJECTS, self.gallery.active_category)
    }

    /// The project under the gallery cursor, if any row exists.
    pub fn cursor_project(&self) -> Option<&'static Project> {
        self.filtered_projects().get(self.gallery.cursor).copied()
    }

    /// Payload for the detail overlay. `None` means the overlay is hidden.
    pub fn selected_project(&self) -> Option<&'static Project> {
        self.gallery.selected.and_then(project_by_id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SetSection(Section),
    CycleSection(isize),
    SetCategory(&'static str),
    CycleCategory(isize),
    MoveCursor(isize),
    /// Select the project under the cursor.
    ActivateCursor,
    SelectProject(u32),
    ClearSelection,
    /// Open the source-repository URL of the selection (or cursor row).
    OpenRepository,
    /// Open the live-deployment URL of the selection (or cursor row).
    OpenLiveDemo,
}

/// Fire-and-forget boundary actions produced by dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    OpenUrl(String),
}

pub struct DispatchResult {
    pub effects: Vec<Effect>,
    pub state_changed: bool,
}

impl DispatchResult {
    fn changed(changed: bool) -> Self {
        Self {
            effects: Vec::new(),
            state_changed: changed,
        }
    }

    fn effect(effect: Effect) -> Self {
        Self {
            effects: vec![effect],
            state_changed: false,
        }
    }

    fn unchanged() -> Self {
        Self::changed(false)
    }
}

#[derive(Default)]
pub struct Store {
    state: AppState,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, action: Action) -> DispatchResult {
        match action {
            Action::SetSection(section) => {
                let changed = self.state.section != section;
                self.state.section = section;
                DispatchResult::changed(changed)
            }
            Action::CycleSection(delta) => {
                let next = self.state.section.offset(delta);
                self.dispatch(Action::SetSection(next))
            }
            Action::SetCategory(category) => {
                if self.state.gallery.active_category == category {
                    return DispatchResult::unchanged();
                }
                self.state.gallery.active_category = category;
                self.state.gallery.cursor = 0;
                DispatchResult::changed(true)
            }
            Action::CycleCategory(delta) => {
                let current = CATEGORIES
                    .iter()
                    .position(|c| *c == self.state.gallery.active_category)
                    .unwrap_or(0);
                let len = CATEGORIES.len() as isize;
                let next = (current as isize + delta).rem_euclid(len) as usize;
                self.dispatch(Action::SetCategory(CATEGORIES[next]))
            }
            Action::MoveCursor(delta) => {
                let len = self.state.filtered_projects().len();
                if len == 0 {
                    return DispatchResult::unchanged();
                }
                let cursor = self.state.gallery.cursor.min(len - 1) as isize;
                let next = (cursor + delta).clamp(0, len as isize - 1) as usize;
                let changed = next != self.state.gallery.cursor;
                self.state.gallery.cursor = next;
                DispatchResult::changed(changed)
            }
            Action::ActivateCursor => match self.state.cursor_project() {
                Some(project) => self.dispatch(Action::SelectProject(project.id)),
                None => DispatchResult::unchanged(),
            },
            Action::SelectProject(id) => {
                if project_by_id(id).is_none() {
                    return DispatchResult::unchanged();
                }
                // Selecting while a selection exists simply replaces it.
                let changed = self.state.gallery.selected != Some(id);
                self.state.gallery.selected = Some(id);
                DispatchResult::changed(changed)
            }
            Action::ClearSelection => {
                // Idempotent: clearing with nothing selected is a no-op.
                let changed = self.state.gallery.selected.is_some();
                self.state.gallery.selected = None;
                DispatchResult::changed(changed)
            }
            Action::OpenRepository => match self.link_target() {
                Some(project) => {
                    DispatchResult::effect(Effect::OpenUrl(project.github_url.to_string()))
                }
                None => DispatchResult::unchanged(),
            },
            Action::OpenLiveDemo => match self.link_target() {
                Some(project) => {
                    DispatchResult::effect(Effect::OpenUrl(project.live_url.to_string()))
                }
                None => DispatchResult::unchanged(),
            },
        }
    }

    /// Links act on the open detail overlay first, else the cursor row.
    fn link_target(&self) -> Option<&'static Project> {
        self.state.selected_project().or_else(|| self.state.cursor_project())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let store = Store::new();
        assert_eq!(store.state().section, Section::About);
        assert_eq!(store.state().gallery.active_category, "All");
        assert!(store.state().selected_project().is_none());
        assert_eq!(store.state().filtered_projects().len(), PROJECTS.len());
    }

    #[test]
    fn test_set_category_resets_cursor() {
        let mut store = Store::new();
        store.dispatch(Action::MoveCursor(3));
        assert_eq!(store.state().gallery.cursor, 3);

        let result = store.dispatch(Action::SetCategory("Full Stack"));
        assert!(result.state_changed);
        assert_eq!(store.state().gallery.cursor, 0);
        assert_eq!(store.state().filtered_projects().len(), 2);
    }

    #[test]
    fn test_cycle_category_wraps() {
        let mut store = Store::new();
        store.dispatch(Action::CycleCategory(-1));
        assert_eq!(store.state().gallery.active_category, "Data Science");
        store.dispatch(Action::CycleCategory(1));
        assert_eq!(store.state().gallery.active_category, "All");
    }

    #[test]
    fn test_cursor_clamps_to_filtered_list() {
        let mut store = Store::new();
        store.dispatch(Action::SetCategory("AI/ML"));
        let result = store.dispatch(Action::MoveCursor(5));
        assert!(!result.state_changed);
        assert_eq!(store.state().gallery.cursor, 0);
        assert_eq!(
            store.state().cursor_project().map(|p| p.title),
            Some("AI-Powered Content Generator")
        );
    }

    #[test]
    fn test_select_replaces_previous_selection() {
        let mut store = Store::new();
        store.dispatch(Action::SelectProject(1));
        store.dispatch(Action::SelectProject(3));
        assert_eq!(store.state().selected_project().map(|p| p.id), Some(3));
    }

    #[test]
    fn test_select_unknown_id_is_ignored() {
        let mut store = Store::new();
        let result = store.dispatch(Action::SelectProject(99));
        assert!(!result.state_changed);
        assert!(store.state().selected_project().is_none());
    }

    #[test]
    fn test_clear_selection_is_idempotent() {
        let mut store = Store::new();
        let result = store.dispatch(Action::ClearSelection);
        assert!(!result.state_changed);
        assert!(store.state().selected_project().is_none());

        store.dispatch(Action::SelectProject(2));
        assert!(store.dispatch(Action::ClearSelection).state_changed);
        assert!(!store.dispatch(Action::ClearSelection).state_changed);
    }

    #[test]
    fn test_activate_cursor_selects_cursor_row() {
        let mut store = Store::new();
        store.dispatch(Action::SetCategory("Full Stack"));
        store.dispatch(Action::MoveCursor(1));
        store.dispatch(Action::ActivateCursor);
        assert_eq!(
            store.state().selected_project().map(|p| p.title),
            Some("Real-time Chat Application")
        );
    }

    #[test]
    fn test_open_repository_prefers_selection() {
        let mut store = Store::new();
        store.dispatch(Action::SelectProject(4));
        let result = store.dispatch(Action::OpenRepository);
        assert_eq!(
            result.effects,
            vec![Effect::OpenUrl("https://github.com/jagadeswar/chat-app".into())]
        );
        assert!(!result.state_changed);
    }

    #[test]
    fn test_open_live_demo_falls_back_to_cursor() {
        let mut store = Store::new();
        let result = store.dispatch(Action::OpenLiveDemo);
        assert_eq!(
            result.effects,
            vec![Effect::OpenUrl("https://ai-content-gen-demo.com".into())]
        );
    }

    #[test]
    fn test_selection_survives_category_change() {
        let mut store = Store::new();
        store.dispatch(Action::SelectProject(1));
        store.dispatch(Action::SetCategory("Full Stack"));
        assert_eq!(store.state().selected_project().map(|p| p.id), Some(1));
    }
}
