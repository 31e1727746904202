//! Skills section: three category "constellations". Unfocused categories
//! show their skills as anonymous dots at random positions; the focused one
//! fans its skill labels out around the center at deterministic angles.

use crossterm::event::{KeyCode, MouseButton, MouseEventKind};
use rand::Rng;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::anim::{fan_out_offset, star_position, Reveal, Stagger};
use crate::app::state::AppState;
use crate::app::theme::UiTheme;
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::models::{skill_glyph, SKILL_CATEGORIES};

pub struct SkillsView {
    focused: usize,
    stagger: Stagger,
    reveal: Reveal,
    /// Percent coordinates per category per displayed skill, computed once
    /// at construction and held for the view's lifetime.
    star_positions: Vec<Vec<(f64, f64)>>,
    fan_radius: f64,
    last_column_areas: Vec<Rect>,
}

impl SkillsView {
    pub fn new<R: Rng + ?Sized>(rng: &mut R, fan_radius: f64, stagger: Stagger) -> Self {
        let star_positions = SKILL_CATEGORIES
            .iter()
            .map(|category| {
                category
                    .display_skills()
                    .iter()
                    .map(|_| star_position(rng))
                    .collect()
            })
            .collect();

        Self {
            focused: 0,
            stagger,
            reveal: Reveal::default(),
            star_positions,
            fan_radius,
            last_column_areas: Vec::new(),
        }
    }

    pub fn set_stagger(&mut self, stagger: Stagger) {
        self.stagger = stagger;
    }

    pub fn set_fan_radius(&mut self, radius: f64) {
        self.fan_radius = radius;
    }

    pub fn focused(&self) -> usize {
        self.focused
    }

    pub fn star_positions(&self) -> &[Vec<(f64, f64)>] {
        &self.star_positions
    }

    fn set_focused(&mut self, index: usize) {
        if index != self.focused && index < SKILL_CATEGORIES.len() {
            self.focused = index;
            self.reveal.restart();
        }
    }

    fn cycle_focus(&mut self, delta: isize) {
        let len = SKILL_CATEGORIES.len() as isize;
        let next = (self.focused as isize + delta).rem_euclid(len) as usize;
        self.set_focused(next);
    }

    fn orb_color(theme: &UiTheme, index: usize) -> ratatui::style::Color {
        match index % 3 {
            0 => theme.accent_fg,
            1 => theme.accent_alt_fg,
            _ => theme.highlight_fg,
        }
    }

    fn render_column(
        &self,
        frame: &mut Frame,
        area: Rect,
        index: usize,
        theme: &UiTheme,
    ) {
        let category = &SKILL_CATEGORIES[index];
        let focused = index == self.focused;
        let color = Self::orb_color(theme, index);

        let border = if focused { theme.focus_border } else { theme.panel_border };
        let mut title_style = Style::default().fg(color);
        if focused {
            title_style = title_style.add_modifier(Modifier::BOLD);
        }
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border))
            .title(Span::styled(format!(" {} ", category.name), title_style));
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let skills = category.display_skills();
        let revealed = if focused {
            self.reveal.visible(skills.len(), self.stagger)
        } else {
            0
        };

        for (i, skill) in skills.iter().enumerate() {
            if focused && i < revealed {
                self.render_fanned_label(frame, inner, i, skills.len(), skill, color, theme);
            } else {
                self.render_star(frame, inner, index, i, theme);
            }
        }
    }

    /// A dot at the skill's once-computed random position.
    fn render_star(&self, frame: &mut Frame, inner: Rect, category: usize, skill: usize, theme: &UiTheme) {
        let (top, left) = self.star_positions[category][skill];
        let x = inner.x + percent_of(left, inner.width.saturating_sub(1));
        let y = inner.y + percent_of(top, inner.height.saturating_sub(1));
        let cell = Rect::new(x, y, 1, 1);
        frame.render_widget(
            Paragraph::new(Span::styled("•", Style::default().fg(theme.star_fg))),
            cell.intersection(inner),
        );
    }

    /// Glyph + name placed on the deterministic fan-out circle.
    fn render_fanned_label(
        &self,
        frame: &mut Frame,
        inner: Rect,
        index: usize,
        total: usize,
        skill: &str,
        color: ratatui::style::Color,
        theme: &UiTheme,
    ) {
        let (dx, dy) = fan_out_offset(index, total, self.fan_radius);
        let cx = f64::from(inner.x) + f64::from(inner.width) / 2.0;
        let cy = f64::from(inner.y) + f64::from(inner.height) / 2.0;
        let x = cx + dx / 100.0 * f64::from(inner.width);
        let y = cy + dy / 100.0 * f64::from(inner.height);

        let label = match skill_glyph(skill) {
            Some(glyph) => format!("{glyph} {skill}"),
            None => skill.to_string(),
        };
        let width = label.width() as u16;

        let x = (x as u16).saturating_sub(width / 2).max(inner.x);
        let y = (y as u16).clamp(inner.y, inner.y + inner.height.saturating_sub(1));
        let rect = Rect::new(x, y, width.min(inner.width), 1).intersection(inner);
        if rect.width == 0 {
            return;
        }
        frame.render_widget(
            Paragraph::new(Span::styled(label, Style::default().fg(color))),
            rect,
        );
    }
}

/// `value` percent of `extent`, rounded down, for percent-space placement.
fn percent_of(value: f64, extent: u16) -> u16 {
    (value / 100.0 * f64::from(extent)) as u16
}

impl View for SkillsView {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        match event {
            InputEvent::Key(key) => match key.code {
                KeyCode::Left | KeyCode::Char('h') => {
                    self.cycle_focus(-1);
                    EventResult::Consumed
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    self.cycle_focus(1);
                    EventResult::Consumed
                }
                _ => EventResult::Ignored,
            },
            InputEvent::Mouse(mouse) => {
                if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
                    return EventResult::Ignored;
                }
                let hit = self
                    .last_column_areas
                    .iter()
                    .position(|r| rect_contains(*r, mouse.column, mouse.row));
                match hit {
                    Some(index) => {
                        self.set_focused(index);
                        EventResult::Consumed
                    }
                    None => EventResult::Ignored,
                }
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState, theme: &UiTheme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        let heading = Line::from(vec![
            Span::styled("02. ", Style::default().fg(theme.accent_fg)),
            Span::styled(
                "Skills & Technologies",
                Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(heading).centered(), rows[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
                Constraint::Ratio(1, 3),
            ])
            .split(rows[1]);

        self.last_column_areas = columns.to_vec();
        for (index, column) in columns.iter().enumerate() {
            self.render_column(frame, *column, index, theme);
        }
    }

    fn on_enter(&mut self) {
        self.reveal.restart();
    }

    fn tick(&mut self) -> bool {
        let total = SKILL_CATEGORIES[self.focused].display_skills().len();
        self.reveal.tick(total, self.stagger)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}
