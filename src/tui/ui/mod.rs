//! TUI rendering module.
//!
//! - `icons` - Nerd Font icons with ASCII fallbacks
//! - `layout` - Layout calculations and text utilities
//! - `sidebar` - Catalog grouped by category
//! - `panel` - The mounted resource panel
//! - `content` - Integration-specific panel content
//! - `status` - Status bar and help popup

mod content;
pub mod icons;
pub mod layout;
mod panel;
mod sidebar;
mod status;

pub use content::content_lines;
pub use sidebar::sidebar_lines;

use crate::tui::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const SIDEBAR_WIDTH: u16 = 30;

/// Main draw function - renders the entire TUI.
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Sidebar + panel
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);
    sidebar::draw_sidebar(f, app, body[0]);
    panel::draw_panel(f, app, body[1]);

    status::draw_status_bar(f, app, chunks[2]);

    if app.show_help() {
        status::draw_help_popup(f);
    }
}

fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let border_style = if app.panel.state.loading {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let mut spans = Vec::new();
    if !app.config.ui.ascii_icons {
        spans.push(Span::styled(
            format!("{} ", icons::APP),
            Style::default().fg(Color::Cyan),
        ));
    }
    spans.push(Span::styled(
        "API Nexus ",
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::styled(
        "Enterprise API Explorer",
        Style::default().fg(Color::DarkGray),
    ));

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, inner);
}
