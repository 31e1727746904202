//! About section: biography, education, learning path, and the staggered
//! tools grid.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::anim::{Reveal, Stagger};
use crate::app::state::AppState;
use crate::app::theme::{parse_color, UiTheme};
use crate::core::event::InputEvent;
use crate::core::view::{EventResult, View};
use crate::models::bio::{BIO_PARAGRAPHS, EDUCATION, LEARNING_PATH};
use crate::models::TOOLS;
use crossterm::event::KeyCode;

const TOOLS_ROW_HEIGHT: u16 = 4;

pub struct AboutView {
    reveal: Reveal,
    stagger: Stagger,
    scroll: u16,
}

impl AboutView {
    pub fn new(stagger: Stagger) -> Self {
        Self {
            reveal: Reveal::default(),
            stagger,
            scroll: 0,
        }
    }

    pub fn set_stagger(&mut self, stagger: Stagger) {
        self.stagger = stagger;
    }

    fn render_heading(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let line = Line::from(vec![
            Span::styled("01. ", Style::default().fg(theme.accent_fg)),
            Span::styled(
                "About Me",
                Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
            ),
        ]);
        frame.render_widget(Paragraph::new(line).centered(), area);
    }

    fn render_bio(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let mut lines: Vec<Line> = Vec::new();
        for (i, paragraph) in BIO_PARAGRAPHS.iter().enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            lines.push(Line::styled(*paragraph, Style::default().fg(theme.text_fg)));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.panel_border))
            .title(Span::styled(
                " Background ",
                Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
            ));
        let body = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0));
        frame.render_widget(body, area);
    }

    fn render_education(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(area);

        let education = Paragraph::new(vec![
            Line::styled(
                EDUCATION.degree,
                Style::default().fg(theme.text_bright_fg).add_modifier(Modifier::BOLD),
            ),
            Line::styled(EDUCATION.school, Style::default().fg(theme.accent_fg)),
            Line::styled(EDUCATION.years, Style::default().fg(theme.text_muted_fg)),
            Line::default(),
            Line::styled(EDUCATION.details, Style::default().fg(theme.text_fg)),
        ])
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.panel_border))
                .title(Span::styled(
                    " Education ",
                    Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
                )),
        );
        frame.render_widget(education, rows[0]);

        let bullets: Vec<Line> = LEARNING_PATH
            .iter()
            .map(|item| {
                Line::from(vec![
                    Span::styled("● ", Style::default().fg(theme.accent_alt_fg)),
                    Span::styled(*item, Style::default().fg(theme.text_fg)),
                ])
            })
            .collect();
        let learning = Paragraph::new(bullets).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.panel_border))
                .title(Span::styled(
                    " Learning Path ",
                    Style::default().fg(theme.accent_fg).add_modifier(Modifier::BOLD),
                )),
        );
        frame.render_widget(learning, rows[1]);
    }

    fn render_tools(&self, frame: &mut Frame, area: Rect, theme: &UiTheme) {
        let title = Paragraph::new(Line::styled(
            "Tools I Use",
            Style::default().fg(theme.header_fg).add_modifier(Modifier::BOLD),
        ))
        .centered();
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);
        frame.render_widget(title, rows[0]);

        let visible = self.reveal.visible(TOOLS.len(), self.stagger);
        if visible == 0 || rows[1].height == 0 {
            return;
        }

        let constraints = vec![Constraint::Ratio(1, TOOLS.len() as u32); TOOLS.len()];
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(constraints)
            .split(rows[1]);

        for (i, tool) in TOOLS.iter().take(visible).enumerate() {
            let color = parse_color(tool.color).unwrap_or(theme.text_fg);
            let card = Paragraph::new(vec![
                Line::styled(tool.glyph, Style::default().fg(color)),
                Line::styled(tool.name, Style::default().fg(theme.text_fg)),
            ])
            .centered()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.panel_border)),
            );
            frame.render_widget(card, cells[i]);
        }
    }
}

impl View for AboutView {
    fn handle_input(&mut self, event: &InputEvent) -> EventResult {
        let Some(key) = event.as_key() else {
            return EventResult::Ignored;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.scroll = self.scroll.saturating_sub(1);
                EventResult::Consumed
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.scroll = self.scroll.saturating_add(1);
                EventResult::Consumed
            }
            _ => EventResult::Ignored,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, _state: &AppState, theme: &UiTheme) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(0),
                Constraint::Length(TOOLS_ROW_HEIGHT + 1),
            ])
            .split(area);

        self.render_heading(frame, rows[0], theme);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[1]);
        self.render_bio(frame, columns[0], theme);
        self.render_education(frame, columns[1], theme);

        self.render_tools(frame, rows[2], theme);
    }

    fn on_enter(&mut self) {
        self.reveal.restart();
        self.scroll = 0;
    }

    fn tick(&mut self) -> bool {
        self.reveal.tick(TOOLS.len(), self.stagger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> InputEvent {
        InputEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_scroll_clamps_at_top() {
        let mut view = AboutView::new(Stagger::default());
        assert!(view.handle_input(&key(KeyCode::Up)).is_consumed());
        assert_eq!(view.scroll, 0);
        view.handle_input(&key(KeyCode::Down));
        view.handle_input(&key(KeyCode::Down));
        view.handle_input(&key(KeyCode::Up));
        assert_eq!(view.scroll, 1);
    }

    #[test]
    fn test_on_enter_restarts_reveal() {
        let mut view = AboutView::new(Stagger { delay: 0, interval: 1 });
        while view.tick() {}
        view.on_enter();
        // Sequence runs again from the start.
        assert!(view.tick());
    }

    #[test]
    fn test_tick_settles_after_all_tools_shown() {
        let mut view = AboutView::new(Stagger { delay: 0, interval: 1 });
        let mut changes = 0;
        for _ in 0..64 {
            if view.tick() {
                changes += 1;
            }
        }
        // First tick reveals index 0 at elapsed 0 already; remaining tools
        // arrive one per tick, then the clock settles.
        assert_eq!(changes, TOOLS.len() - 1);
        assert!(!view.tick());
    }
}
