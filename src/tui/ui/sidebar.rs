//! Catalog sidebar: integrations grouped by category.

use super::icons;
use super::layout::{display_width, truncate_with_ellipsis};
use crate::catalog;
use crate::tui::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw_sidebar(f: &mut Frame, app: &App, area: Rect) {
    let ascii = app.config.ui.ascii_icons;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let items: Vec<ListItem> = sidebar_lines(app.selection.selected_id(), ascii, inner.width)
        .into_iter()
        .map(ListItem::new)
        .collect();
    f.render_widget(List::new(items), inner);
}

/// Sidebar rows: a header per category followed by its integrations,
/// numbered in display order.
pub fn sidebar_lines(selected_id: &str, ascii: bool, width: u16) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);
    let selected_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    let mut number = 0;
    for (category, entries) in catalog::grouped() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        let icon = icons::category(category, ascii);
        let label = category.label().to_uppercase();
        let header = if icon.is_empty() {
            label
        } else {
            format!("{} {}", icon, label)
        };
        lines.push(Line::from(Span::styled(header, header_style)));

        for entry in entries {
            number += 1;
            let is_selected = entry.id == selected_id;
            let marker = if is_selected { icons::CHEVRON } else { " " };
            let prefix = format!(
                "{} {} {} ",
                marker,
                number,
                icons::integration(entry.icon, ascii)
            );
            let title_width = (width as usize).saturating_sub(display_width(&prefix));
            let title = truncate_with_ellipsis(entry.title, title_width);

            let style = if is_selected {
                selected_style
            } else {
                Style::default().fg(Color::Gray)
            };
            lines.push(Line::from(vec![
                Span::styled(prefix, style),
                Span::styled(title, style),
            ]));
        }
    }
    lines
}
