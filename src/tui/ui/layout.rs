//! Layout calculations and text utilities for the TUI.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Calculate the display width of text (accounting for Unicode).
pub fn display_width(text: &str) -> usize {
    UnicodeWidthStr::width(text)
}

/// Truncate text to a maximum display width.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let ch_width = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + ch_width > max_width {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out
}

/// Truncate text with an ellipsis if it exceeds max width.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    if display_width(text) <= max_width {
        return text.to_string();
    }
    if max_width == 1 {
        return "…".to_string();
    }
    let truncated = truncate_to_width(text, max_width.saturating_sub(1));
    format!("{truncated}…")
}

/// Create an ellipsis line centered in the given width.
pub fn ellipsis_line() -> Line<'static> {
    Line::from(Span::styled("…", Style::default().fg(Color::DarkGray)))
        .alignment(Alignment::Center)
}

/// Fit lines to an area height, replacing the overflow with an ellipsis and
/// keeping the last `keep_bottom` lines visible.
pub fn fit_lines_to_area<'a>(
    mut lines: Vec<Line<'a>>,
    inner: Rect,
    keep_bottom: usize,
) -> Vec<Line<'a>> {
    let height = inner.height as usize;
    if height == 0 || inner.width == 0 {
        return Vec::new();
    }
    if lines.len() <= height {
        return lines;
    }

    let keep_bottom = keep_bottom.min(height.saturating_sub(1));
    let top_take = height.saturating_sub(keep_bottom + 1);
    let bottom = lines.split_off(lines.len() - keep_bottom);
    lines.truncate(top_take);
    lines.push(ellipsis_line());
    lines.extend(bottom);
    lines
}

/// Calculate a centered popup rectangle within a container.
pub fn popup_rect(
    percent_x: u16,
    percent_y: u16,
    min_width: u16,
    min_height: u16,
    r: Rect,
) -> Rect {
    let max_width = r.width.saturating_sub(2).max(1);
    let max_height = r.height.saturating_sub(2).max(1);

    let target_width = (r.width.saturating_mul(percent_x) / 100).max(min_width);
    let target_height = (r.height.saturating_mul(percent_y) / 100).max(min_height);

    let width = target_width.min(max_width);
    let height = target_height.min(max_height);

    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;

    Rect {
        x,
        y,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_with_ellipsis() {
        assert_eq!(truncate_with_ellipsis("Zippopotamus", 20), "Zippopotamus");
        assert_eq!(truncate_with_ellipsis("Zippopotamus", 5), "Zipp…");
        assert_eq!(truncate_with_ellipsis("Zippopotamus", 1), "…");
        assert_eq!(truncate_with_ellipsis("Zippopotamus", 0), "");
    }

    #[test]
    fn test_truncate_respects_wide_chars() {
        assert_eq!(truncate_to_width("日本語", 4), "日本");
    }

    #[test]
    fn test_fit_lines_keeps_bottom() {
        let lines: Vec<Line> = (0..10).map(|i| Line::from(i.to_string())).collect();
        let area = Rect::new(0, 0, 10, 4);
        let fitted = fit_lines_to_area(lines, area, 1);
        let text: Vec<String> = fitted
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(text, vec!["0", "1", "…", "9"]);
    }

    #[test]
    fn test_popup_rect_is_centered_and_bounded() {
        let area = Rect::new(0, 0, 100, 40);
        let popup = popup_rect(50, 50, 10, 5, area);
        assert_eq!(popup, Rect::new(25, 10, 50, 20));

        let tiny = popup_rect(50, 50, 60, 30, Rect::new(0, 0, 20, 10));
        assert!(tiny.width <= 18 && tiny.height <= 8);
    }
}
