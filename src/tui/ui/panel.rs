//! The mounted resource panel.

use super::content::content_lines;
use super::icons;
use super::layout::{display_width, fit_lines_to_area, truncate_to_width};
use crate::panel::Panel;
use crate::tui::{App, InputMode};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub const FOOTER: &str = "Data provided by free public APIs. Reliability may vary.";

/// Right-hand title of the panel block.
pub fn refresh_hint(panel: &Panel, spinner: char, ascii: bool) -> String {
    if panel.state.loading {
        format!("{} Fetching...", spinner)
    } else if panel.can_refresh() {
        format!("{} [r] Refresh Data", icons::refresh(ascii))
    } else {
        String::new()
    }
}

pub fn draw_panel(f: &mut Frame, app: &App, area: Rect) {
    let panel = &app.panel;
    let descriptor = panel.descriptor();
    let ascii = app.config.ui.ascii_icons;

    let hint = refresh_hint(panel, app.spinner_char(), ascii);
    let hint_style = if panel.state.loading {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(
                icons::integration(descriptor.icon, ascii),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(
                format!(" {} ", descriptor.title),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]));
    if !hint.is_empty() {
        block = block
            .title_top(Line::from(Span::styled(format!(" {} ", hint), hint_style)).right_aligned());
    }
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut constraints = vec![Constraint::Length(2)]; // Description
    if panel.is_query() {
        constraints.push(Constraint::Length(3)); // Query input
    }
    if panel.state.error.is_some() {
        constraints.push(Constraint::Length(3)); // Error banner
    }
    constraints.push(Constraint::Min(0)); // Content
    constraints.push(Constraint::Length(1)); // Footer

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut idx = 0;

    let description = Paragraph::new(Line::from(Span::styled(
        descriptor.description,
        Style::default().fg(Color::Gray),
    )));
    f.render_widget(description, chunks[idx]);
    idx += 1;

    if panel.is_query() {
        draw_query_input(f, app, chunks[idx]);
        idx += 1;
    }

    if let Some(error) = &panel.state.error {
        draw_error_banner(f, error, ascii, chunks[idx]);
        idx += 1;
    }

    draw_content(f, app, chunks[idx]);
    idx += 1;

    let footer = Paragraph::new(Line::from(Span::styled(
        FOOTER,
        Style::default().fg(Color::DarkGray),
    )))
    .alignment(Alignment::Center);
    f.render_widget(footer, chunks[idx]);
}

fn draw_query_input(f: &mut Frame, app: &App, area: Rect) {
    let panel = &app.panel;
    let editing = app.mode == InputMode::Editing;
    let ascii = app.config.ui.ascii_icons;

    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            if editing {
                " Enter: search | Esc: cancel "
            } else {
                " /: edit "
            },
            Style::default().fg(Color::DarkGray),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let prefix = format!("{} ", icons::search(ascii));
    let text = if panel.query.is_empty() {
        Span::styled(
            panel.placeholder().unwrap_or_default(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::styled(
            panel.query.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };
    let input = Paragraph::new(Line::from(vec![
        Span::styled(prefix.clone(), Style::default().fg(Color::Yellow)),
        text,
    ]));
    f.render_widget(input, inner);

    if editing && inner.width > 0 {
        let offset = display_width(&prefix) + display_width(&panel.query);
        let x = inner.x + (offset as u16).min(inner.width.saturating_sub(1));
        f.set_cursor_position((x, inner.y));
    }
}

fn draw_error_banner(f: &mut Frame, error: &str, ascii: bool, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let text = format!("{} {}", icons::alert(ascii), error);
    let banner = Paragraph::new(Line::from(Span::styled(
        truncate_to_width(&text, inner.width as usize),
        Style::default().fg(Color::Red),
    )));
    f.render_widget(banner, inner);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    let panel = &app.panel;

    if panel.shows_spinner() {
        let spinner = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                format!("{} Loading...", app.spinner_char()),
                Style::default().fg(Color::Cyan),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(spinner, area);
        return;
    }

    let lines = fit_lines_to_area(content_lines(panel, area.width), area, 0);
    let mut paragraph = Paragraph::new(lines).wrap(Wrap { trim: true });
    // Previous content stays visible but dimmed while a refresh runs
    if panel.state.loading {
        paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
    }
    f.render_widget(paragraph, area);
}
