//! Status bar and help popup rendering.

use super::layout::{fit_lines_to_area, popup_rect};
use crate::tui::{App, InputMode};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Keyboard shortcuts by section, shown in the help popup.
pub const SHORTCUTS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            ("j/k ↑/↓", "Previous / next integration"),
            ("gg/Home", "First integration"),
            ("G/End", "Last integration"),
            ("1-8", "Jump to integration"),
        ],
    ),
    (
        "Panel",
        &[
            ("r", "Refresh data"),
            ("/ i", "Edit query"),
            ("Enter", "Submit query"),
            ("Ctrl+U", "Clear query (while editing)"),
            ("Space", "Show punchline"),
            ("o", "Open image in browser"),
        ],
    ),
    (
        "Application",
        &[("?", "Toggle help"), ("Esc", "Close"), ("q Ctrl+C", "Quit")],
    ),
];

/// Key hints for the current context, shortened to fit `width`.
pub fn status_hints(app: &App, width: usize) -> &'static str {
    if app.mode == InputMode::Editing {
        if width >= 50 {
            " Type a query | Enter: submit | Esc: cancel "
        } else {
            " Enter Esc "
        }
    } else if app.panel.is_query() {
        if width >= 80 {
            " j/k: nav | 1-8: jump | /: edit | Enter: submit | r: refresh | ?: help | q: quit "
        } else if width >= 45 {
            " j/k / Enter r ? q "
        } else {
            " ? help "
        }
    } else if width >= 70 {
        " j/k: nav | 1-8: jump | r: refresh | space | o | ?: help | q: quit "
    } else if width >= 40 {
        " j/k 1-8 r ? q "
    } else {
        " ? help "
    }
}

pub fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let status = if let Some(message) = &app.status_message {
        Span::styled(format!(" {} ", message), Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            status_hints(app, area.width as usize),
            Style::default().fg(Color::DarkGray),
        )
    };

    f.render_widget(Paragraph::new(Line::from(status)), area);
}

pub fn draw_help_popup(f: &mut Frame) {
    let area = popup_rect(60, 70, 40, 12, f.area());
    f.render_widget(Clear, area);

    let section_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);

    let mut lines = Vec::new();
    for (section, bindings) in SHORTCUTS {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        lines.push(Line::from(Span::styled(*section, section_style)));
        for (keys, action) in *bindings {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<10}", keys), key_style),
                Span::raw(*action),
            ]));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  Press ? or Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    let lines = fit_lines_to_area(lines, inner, 1);
    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().fg(Color::White));

    f.render_widget(paragraph, area);
}
