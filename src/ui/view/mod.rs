//! Frame composition
//!
//! `draw` paints one full frame: the view tabs, the active view, the
//! status line, and any overlay (help, word form).

pub mod admin;
pub mod archive;
pub mod chrome;
pub mod prompt;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, View};
use crate::ui::theme::{colors, parse_hex};

pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let surface = app
        .surface_color()
        .and_then(parse_hex)
        .unwrap_or_else(colors::focus);
    frame.render_widget(Block::default().style(Style::default().bg(surface)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    chrome::render_tabs(frame, app, chunks[0]);

    match app.view {
        View::Daily | View::Random => prompt::render(frame, app, chunks[1]),
        View::Archive => archive::render(frame, app, chunks[1]),
        View::Admin => admin::render(frame, app, chunks[1]),
    }

    chrome::render_status_line(frame, app, chunks[2]);

    if app.admin.form.is_some() {
        admin::render_form(frame, app, area);
    }
    if app.show_help {
        chrome::render_help(frame, area);
    }
}

/// Rectangle of at most `width` x `height` centered in `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_fits_inside() {
        let area = Rect::new(0, 0, 80, 24);
        let rect = centered(area, 40, 10);
        assert_eq!(rect, Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_clamps_to_area() {
        let area = Rect::new(5, 5, 10, 4);
        assert_eq!(centered(area, 40, 10), area);
    }
}
