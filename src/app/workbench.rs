//! Workbench: owns the store, theme, settings and section views, routes
//! input to them, and lays out every frame.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::state::{Action, Effect, Section, Store};
use super::theme::UiTheme;
use crate::core::event::{InputEvent, Key};
use crate::core::view::{EventResult, View};
use crate::core::Service;
use crate::services::settings::SettingsService;
use crate::views::{AboutView, ProjectsView, SkillsView};

const HEADER_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Outbound navigation boundary: fire-and-forget, injectable for tests.
pub trait UrlOpener: Send {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

struct SystemOpener;

impl UrlOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that(url)
    }
}

pub struct Workbench {
    store: Store,
    theme: UiTheme,
    settings: SettingsService,
    about: AboutView,
    skills: SkillsView,
    projects: ProjectsView,
    opener: Box<dyn UrlOpener>,
    last_tab_areas: Vec<(Rect, Section)>,
}

impl Workbench {
    pub fn new() -> Self {
        Self::with_opener(SettingsService::new(), Box::new(SystemOpener))
    }

    pub fn with_opener(settings: SettingsService, opener: Box<dyn UrlOpener>) -> Self {
        tracing::debug!(service = settings.name(), "service ready");

        let ui = settings.settings().clone();
        let mut theme = UiTheme::default();
        theme.apply_settings(&ui.theme);
        theme.adapt_to_terminal_capabilities();

        let stagger = ui.stagger();
        let mut rng = rand::thread_rng();

        Self {
            store: Store::new(),
            theme,
            settings,
            about: AboutView::new(stagger),
            skills: SkillsView::new(&mut rng, ui.fan_radius, stagger),
            projects: ProjectsView::new(stagger),
            opener,
            last_tab_areas: Vec::new(),
        }
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn theme(&self) -> &UiTheme {
        &self.theme
    }

    /// Main-loop tick interval from settings.
    pub fn tick_ms(&self) -> u64 {
        self.settings.settings().tick_ms
    }

    /// Dispatches through the store and performs any resulting effects.
    /// Returns whether the state changed (drives redraw).
    fn dispatch(&mut self, action: Action) -> bool {
        let result = self.store.dispatch(action);
        for effect in result.effects {
            self.perform(effect);
        }
        result.state_changed
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::OpenUrl(url) => {
                tracing::info!(url = %url, "opening external link");
                if let Err(err) = self.opener.open(&url) {
                    // Fire-and-forget: a failed launch is logged, never shown.
                    tracing::warn!(url = %url, error = %err, "failed to open link");
                }
            }
        }
    }

    fn set_section(&mut self, section: Section) -> bool {
        let changed = self.dispatch(Action::SetSection(section));
        if changed {
            self.active_view_mut().on_enter();
        }
        changed
    }

    fn cycle_section(&mut self, delta: isize) {
        let changed = self.dispatch(Action::CycleSection(delta));
        if changed {
            self.active_view_mut().on_enter();
        }
    }

    fn active_view_mut(&mut self) -> &mut dyn View {
        match self.store.state().section {
            Section::About => &mut self.about,
            Section::Skills => &mut self.skills,
            Section::Projects => &mut self.projects,
        }
    }

    pub fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => self.handle_key(key),
            InputEvent::Mouse(mouse) => self.handle_mouse(mouse),
            InputEvent::Resize(..) => EventResult::Consumed,
            _ => EventResult::Ignored,
        }
    }

    fn handle_key(&mut self, event: &KeyEvent) -> EventResult {
        // Normalize so `Q` and `q` hit the same binding.
        let key = Key::from(event);
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return EventResult::Quit;
        }
        match key.code {
            KeyCode::Char('q') => return EventResult::Quit,
            KeyCode::Char('1') => {
                self.set_section(Section::About);
                return EventResult::Consumed;
            }
            KeyCode::Char('2') => {
                self.set_section(Section::Skills);
                return EventResult::Consumed;
            }
            KeyCode::Char('3') => {
                self.set_section(Section::Projects);
                return EventResult::Consumed;
            }
            KeyCode::Tab => {
                self.cycle_section(1);
                return EventResult::Consumed;
            }
            KeyCode::BackTab => {
                self.cycle_section(-1);
                return EventResult::Consumed;
            }
            KeyCode::Esc => {
                if self.store.state().selected_project().is_some() {
                    self.dispatch(Action::ClearSelection);
                    return EventResult::Consumed;
                }
                return EventResult::Ignored;
            }
            _ => {}
        }

        if self.store.state().section == Section::Projects {
            let handled = self.handle_gallery_key(key);
            if handled.is_consumed() {
                return handled;
            }
        }

        self.active_view_mut().handle_input(&InputEvent::Key(*event))
    }

    /// Gallery keys mutate shared state, so they live here rather than in
    /// the projects view.
    fn handle_gallery_key(&mut self, key: Key) -> EventResult {
        match key.code {
            KeyCode::Left | KeyCode::Char('[') => {
                self.dispatch(Action::CycleCategory(-1));
                EventResult::Consumed
            }
            KeyCode::Right | KeyCode::Char(']') => {
                self.dispatch(Action::CycleCategory(1));
                EventResult::Consumed
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.dispatch(Action::MoveCursor(-1));
                EventResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.dispatch(Action::MoveCursor(1));
                EventResult::Consumed
            }
            KeyCode::Enter => {
                self.dispatch(Action::ActivateCursor);
                EventResult::Consumed
            }
            KeyCode::Char('g') => {
                self.dispatch(Action::OpenRepository);
                EventResult::Consumed
            }
            KeyCode::Char('o') => {
                self.dispatch(Action::OpenLiveDemo);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn handle_mouse(&mut self, mouse: &MouseEvent) -> EventResult {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return EventResult::Ignored;
        }

        let tab_hit = self
            .last_tab_areas
            .iter()
            .find(|(rect, _)| rect_contains(*rect, mouse.column, mouse.row))
            .map(|(_, section)| *section);
        if let Some(section) = tab_hit {
            self.set_section(section);
            return EventResult::Consumed;
        }

        if self.store.state().section == Section::Projects {
            if self.projects.modal_visible() {
                // Clicking outside the overlay dismisses it.
                if !self.projects.modal_contains(mouse.column, mouse.row) {
                    self.dispatch(Action::ClearSelection);
                }
                return EventResult::Consumed;
            }
            if let Some(category) = self.projects.category_at(mouse.column, mouse.row) {
                self.dispatch(Action::SetCategory(category));
                return EventResult::Consumed;
            }
            if let Some(id) = self.projects.card_at(mouse.column, mouse.row) {
                self.dispatch(Action::SelectProject(id));
                return EventResult::Consumed;
            }
            return EventResult::Ignored;
        }

        self.active_view_mut()
            .handle_input(&InputEvent::Mouse(*mouse))
    }

    /// Called from the main loop between input polls. Returns true when
    /// the next frame differs from the last.
    pub fn tick(&mut self) -> bool {
        let mut changed = false;

        if self.settings.poll_reload() {
            let ui = self.settings.settings().clone();
            let mut theme = UiTheme::default();
            theme.apply_settings(&ui.theme);
            theme.adapt_to_terminal_capabilities();
            self.theme = theme;

            let stagger = ui.stagger();
            self.about.set_stagger(stagger);
            self.skills.set_stagger(stagger);
            self.skills.set_fan_radius(ui.fan_radius);
            self.projects.set_stagger(stagger);
            changed = true;
        }

        changed |= self.active_view_mut().tick();
        changed
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(Style::default().bg(self.theme.bg)), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_HEIGHT),
            ])
            .split(area);

        self.render_header(frame, rows[0]);
        self.render_status(frame, rows[2]);

        let state = *self.store.state();
        let theme = self.theme.clone();
        match state.section {
            Section::About => self.about.render(frame, rows[1], &state, &theme),
            Section::Skills => self.skills.render(frame, rows[1], &state, &theme),
            Section::Projects => self.projects.render(frame, rows[1], &state, &theme),
        }
    }

    fn render_header(&mut self, frame: &mut Frame, area: Rect) {
        self.last_tab_areas.clear();
        let active = self.store.state().section;

        let mut x = area.x + 1;
        for section in Section::ALL {
            let label = format!(" {} {} ", section.ordinal(), section.label());
            let width = label.len() as u16;
            if x + width > area.x + area.width {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            let style = if section == active {
                Style::default()
                    .fg(self.theme.accent_fg)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(self.theme.text_muted_fg)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            self.last_tab_areas.push((rect, section));
            x += width + 1;
        }
    }

    fn render_status(&mut self, frame: &mut Frame, area: Rect) {
        let hints = match self.store.state().section {
            Section::About => "tab section  ↑/↓ scroll  q quit",
            Section::Skills => "tab section  ←/→ focus constellation  q quit",
            Section::Projects => {
                if self.store.state().selected_project().is_some() {
                    "g code  o live demo  esc close  q quit"
                } else {
                    "←/→ filter  ↑/↓ move  enter details  g code  o live  q quit"
                }
            }
        };
        let line = Line::styled(hints, Style::default().fg(self.theme.hint_fg));
        frame.render_widget(Paragraph::new(line).centered(), area);
    }
}

impl Default for Workbench {
    fn default() -> Self {
        Self::new()
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct RecordingOpener {
        urls: Arc<Mutex<Vec<String>>>,
    }

    impl UrlOpener for RecordingOpener {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.urls.lock().unwrap().push(url.to_string());
            Ok(())
        }
    }

    fn workbench() -> (Workbench, RecordingOpener) {
        let opener = RecordingOpener::default();
        let settings = SettingsService::with_path(None);
        let workbench = Workbench::with_opener(settings, Box::new(opener.clone()));
        (workbench, opener)
    }

    fn key(code: KeyCode) -> InputEvent {
        key_with(code, KeyModifiers::NONE)
    }

    fn key_with(code: KeyCode, modifiers: KeyModifiers) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_workbench_defaults() {
        let (workbench, _) = workbench();
        assert_eq!(workbench.store().state().section, Section::About);
        assert_eq!(workbench.store().state().gallery.active_category, "All");
    }

    #[test]
    fn test_quit_keys() {
        let (mut workbench, _) = workbench();
        assert!(workbench.handle_input(&key(KeyCode::Char('q'))).is_quit());
        assert!(workbench
            .handle_input(&key_with(KeyCode::Char('c'), KeyModifiers::CONTROL))
            .is_quit());
    }

    #[test]
    fn test_tab_cycles_sections() {
        let (mut workbench, _) = workbench();
        workbench.handle_input(&key(KeyCode::Tab));
        assert_eq!(workbench.store().state().section, Section::Skills);
        workbench.handle_input(&key(KeyCode::Tab));
        assert_eq!(workbench.store().state().section, Section::Projects);
        workbench.handle_input(&key(KeyCode::Tab));
        assert_eq!(workbench.store().state().section, Section::About);
        workbench.handle_input(&key(KeyCode::BackTab));
        assert_eq!(workbench.store().state().section, Section::Projects);
    }

    #[test]
    fn test_number_keys_jump_to_section() {
        let (mut workbench, _) = workbench();
        workbench.handle_input(&key(KeyCode::Char('3')));
        assert_eq!(workbench.store().state().section, Section::Projects);
        workbench.handle_input(&key(KeyCode::Char('1')));
        assert_eq!(workbench.store().state().section, Section::About);
    }

    #[test]
    fn test_gallery_filter_and_selection_flow() {
        let (mut workbench, _) = workbench();
        workbench.handle_input(&key(KeyCode::Char('3')));

        // All -> AI/ML
        workbench.handle_input(&key(KeyCode::Right));
        assert_eq!(workbench.store().state().gallery.active_category, "AI/ML");
        assert_eq!(workbench.store().state().filtered_projects().len(), 1);

        workbench.handle_input(&key(KeyCode::Enter));
        assert_eq!(
            workbench.store().state().selected_project().map(|p| p.title),
            Some("AI-Powered Content Generator")
        );

        workbench.handle_input(&key(KeyCode::Esc));
        assert!(workbench.store().state().selected_project().is_none());
    }

    #[test]
    fn test_esc_without_selection_is_ignored() {
        let (mut workbench, _) = workbench();
        workbench.handle_input(&key(KeyCode::Char('3')));
        assert!(workbench.handle_input(&key(KeyCode::Esc)).is_ignored());
    }

    #[test]
    fn test_open_repository_goes_through_opener() {
        let (mut workbench, opener) = workbench();
        workbench.handle_input(&key(KeyCode::Char('3')));
        workbench.handle_input(&key(KeyCode::Char('g')));
        assert_eq!(
            opener.urls.lock().unwrap().as_slice(),
            ["https://github.com/jagadeswar/ai-content-generator"]
        );
    }

    #[test]
    fn test_open_live_demo_uses_selection() {
        let (mut workbench, opener) = workbench();
        workbench.handle_input(&key(KeyCode::Char('3')));
        workbench.handle_input(&key(KeyCode::Down));
        workbench.handle_input(&key(KeyCode::Enter));
        workbench.handle_input(&key(KeyCode::Char('o')));
        assert_eq!(
            opener.urls.lock().unwrap().as_slice(),
            ["https://analytics-dashboard-demo.com"]
        );
    }

    #[test]
    fn test_about_scroll_keys_reach_view() {
        let (mut workbench, _) = workbench();
        assert!(workbench.handle_input(&key(KeyCode::Down)).is_consumed());
    }
}
