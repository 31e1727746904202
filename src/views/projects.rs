//! Projects section: category filter bar, card grid, and the detail
//! overlay for the current selection.
//!
//! This view is purely presentational: filter and selection live in the
//! store and are mutated by the workbench's input handlers. The view
//! records the screen areas it drew so mouse hits can be mapped back to
//! categories and cards.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::anim::{Reveal, Stagger};
use crate::app::state::AppState;
use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::models::{Project, CATEGORIES, PROJECTS};

const CARD_HEIGHT: u16 = 7;
const SHOWN_TECHNOLOGIES: usize = 3;

pub struct ProjectsView {
    reveal: Reveal,
    stagger: Stagger,
    last_category: &'static str,
    last_total: usize,
    last_filter_areas: Vec<(Rect, &'static str)>,
    last_card_areas: Vec<(Rect, u32)>,
    last_modal_area: Option<Rect>,
}

impl ProjectsView {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            reveal: Reveal::default(),
            stagger,
            last_category: CATEGORIES[0],
            last_total: PROJECTS.len(),
            last_filter_areas: Vec::new(),
            last_card_areas: Vec::new(),
            last_modal_area: None,
        }
    }

    pub fn set_stagger(&mut self, stagger: Stagger) {
        self.stagger = stagger;
    }

    /// Category under a screen position, for filter-bar clicks.
    pub fn category_at(&self, x: u16, y: u16) -> Option<&'static str> {
        self.last_filter_areas
            .iter()
            .find(|(rect, _)| rect_contains(*rect, x, y))
            .map(|(_, category)| *category)
    }

    /// Project id under a screen position, for card clicks.
    pub fn card_at(&self, x: u16, y: u16) -> Option<u32> {
        self.last_card_areas
            .iter()
            .find(|(rect, _)| rect_contains(*rect, x, y))
            .map(|(_, id)| *id)
    }

    pub fn modal_visible(&self) -> bool {
        self.last_modal_area.is_some()
    }

    pub fn modal_contains(&self, x: u16, y: u16) -> bool {
        self.last_modal_area
            .is_some_and(|rect| rect_contains(rect, x, y))
    }

    fn render_filter_bar(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
        self.last_filter_areas.clear();
        let mut x = area.x;
        for category in CATEGORIES {
            let label = format!(" {category} ");
            let width = label.width() as u16;
            if x + width > area.x + area.width {
                break;
            }
            let rect = Rect::new(x, area.y, width, 1);
            let style = if category == state.gallery.active_category {
                Style::default()
                    .fg(theme.bg)
                    .bg(theme.accent_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.text_fg).bg(theme.badge_bg)
            };
            frame.render_widget(Paragraph::new(Span::styled(label, style)), rect);
            self.last_filter_areas.push((rect, category));
            x += width + 2;
        }
    }

    fn render_grid(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
        self.last_card_areas.clear();
        let projects = state.filtered_projects();
        if projects.is_empty() || area.height == 0 {
            // Out-of-range filters silently yield an empty grid.
            return;
        }

        let columns = if area.width >= 110 { 3 } else { 2 };
        let card_width = area.width / columns as u16;
        let visible = self.reveal.visible(projects.len(), self.stagger);

        for (i, project) in projects.iter().take(visible).enumerate() {
            let col = (i % columns) as u16;
            let row = (i / columns) as u16;
            let y = area.y + row * CARD_HEIGHT;
            if y + CARD_HEIGHT > area.y + area.height {
                break;
            }
            let rect = Rect::new(area.x + col * card_width, y, card_width, CARD_HEIGHT);
            let under_cursor = i == state.gallery.cursor;
            self.render_card(frame, rect, project, under_cursor, theme);
            self.last_card_areas.push((rect, project.id));
        }
    }

    fn render_card(
        &self,
        frame: &mut Frame,
        area: Rect,
        project: &Project,
        under_cursor: bool,
        theme: &UiTheme,
    ) {
        let border = if under_cursor { theme.focus_border } else { theme.panel_border };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {} ", project.title),
                Style::default().fg(theme.text_bright_fg).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.height == 0 {
            return;
        }

        let mut badges: Vec<Span> = vec![Span::styled(
            format!(" {} ", project.category),
            Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
        )];
        if project.featured {
            badges.push(Span::raw(" "));
            badges.push(Span::styled(
                " ★ Featured ",
                Style::default().fg(theme.bg).bg(theme.accent_alt_fg),
            ));
        }

        let mut tech_spans: Vec<Span> = Vec::new();
        for (i, tech) in project.technologies.iter().take(SHOWN_TECHNOLOGIES).enumerate() {
            if i > 0 {
                tech_spans.push(Span::raw(" "));
            }
            tech_spans.push(Span::styled(
                format!("[{tech}]"),
                Style::default().fg(theme.text_muted_fg),
            ));
        }
        if project.technologies.len() > SHOWN_TECHNOLOGIES {
            tech_spans.push(Span::styled(
                format!(" +{}", project.technologies.len() - SHOWN_TECHNOLOGIES),
                Style::default().fg(theme.text_muted_fg),
            ));
        }

        let body = Paragraph::new(vec![
            Line::from(badges),
            Line::styled(project.description, Style::default().fg(theme.text_fg)),
            Line::from(tech_spans),
            Line::from(vec![
                Span::styled("Lighthouse ", Style::default().fg(theme.text_muted_fg)),
                Span::styled(
                    format!("{}/100", project.lighthouse_score),
                    Style::default().fg(theme.accent_alt_fg),
                ),
            ]),
        ])
        .wrap(Wrap { trim: true });
        frame.render_widget(body, inner);
    }

    fn render_modal(&mut self, frame: &mut Frame, area: Rect, project: &Project, theme: &UiTheme) {
        let rect = centered_rect(area, 80, 80);
        self.last_modal_area = Some(rect);

        frame.render_widget(Clear, rect);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.modal_border))
            .title(Span::styled(
                format!(" {} ", project.title),
                Style::default().fg(theme.text_bright_fg).add_modifier(Modifier::BOLD),
            ))
            .style(Style::default().bg(theme.panel_bg));
        let inner = block.inner(rect);
        frame.render_widget(block, rect);
        if inner.height == 0 {
            return;
        }

        let mut lines = vec![
            Line::styled(project.long_description, Style::default().fg(theme.text_fg)),
            Line::default(),
            Line::styled(
                "Technologies Used",
                Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
            ),
        ];
        let techs = project
            .technologies
            .iter()
            .map(|t| format!("[{t}]"))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::styled(techs, Style::default().fg(theme.text_fg)));
        lines.push(Line::default());
        lines.push(Line::styled(
            "Performance",
            Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
        ));
        lines.push(Line::from(vec![
            Span::styled("Lighthouse Score  ", Style::default().fg(theme.text_fg)),
            Span::styled(
                format!("{}/100", project.lighthouse_score),
                Style::default().fg(theme.accent_alt_fg),
            ),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Category          ", Style::default().fg(theme.text_fg)),
            Span::styled(project.category, Style::default().fg(theme.badge_fg)),
        ]));
        if project.featured {
            lines.push(Line::from(vec![
                Span::styled("Status            ", Style::default().fg(theme.text_fg)),
                Span::styled("★ Featured", Style::default().fg(theme.accent_alt_fg)),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::styled(
            "g open code   o open live demo   esc close",
            Style::default().fg(theme.hint_fg),
        ));

        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
    }
}

impl View for ProjectsView {
    fn handle_input(&mut self, _event: &InputEvent) -> EventResult {
        // Gallery input is shared state and handled by the workbench.
        EventResult::Ignored
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState, theme: &UiTheme) {
        if state.gallery.active_category != self.last_category {
            self.last_category = state.gallery.active_category;
            self.reveal.restart();
        }
        self.last_total = state.filtered_projects().len();
        self.last_modal_area = None;

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(2),
                Constraint::Min(0),
            ])
            .split(area);

        let heading = Line::from(vec![
            Span::styled("03. ", Style::default().fg(theme.accent_fg)),
            Span::styled(
                "My Projects",
                Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading).centered(), rows[0]);

        self.render_filter_bar(frame, rows[1], state, theme);
        self.render_grid(frame, rows[2], state, theme);

        if let Some(project) = state.selected_project() {
            self.render_modal(frame, area, project, theme);
        }
    }

    fn on_enter(&mut self) {
        self.reveal.restart();
    }

    fn tick(&mut self) -> bool {
        self.reveal.tick(self.last_total, self.stagger)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Centered sub-rect covering the given percentages of `area`.
fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let width = area.width * percent_x / 100;
    let height = area.height * percent_y / 100;
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 50);
        let rect = centered_rect(area, 80, 80);
        assert_eq!(rect, Rect::new(10, 5, 80, 40));
    }

    #[test]
    fn test_hit_tests_empty_before_render() {
        let view = ProjectsView::new(Stagger::default());
        assert_eq!(view.category_at(5, 5), None);
        assert_eq!(view.card_at(5, 5), None);
        assert!(!view.modal_visible());
    }

    #[test]
    fn test_rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 2);
        assert!(rect_contains(rect, 2, 3));
        assert!(rect_contains(rect, 5, 4));
        assert!(!rect_contains(rect, 6, 4));
        assert!(!rect_contains(rect, 2, 5));
    }
}
