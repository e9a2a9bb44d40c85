//! Tabs, status line, and help overlay

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Tabs},
    Frame,
};

use super::centered;
use crate::app::{App, AppMode, View};
use crate::ui::theme::colors;

const HELP: &[(&str, &str)] = &[
    ("1-4", "daily / random / archive / admin"),
    ("Tab ←→", "pick a word in the prompt"),
    ("Enter", "search images for the picked word"),
    ("5-9", "search word N"),
    ("c", "copy share text"),
    ("h", "open today's hashtag"),
    ("g s x", "new random prompt / settings / scene"),
    ("n p", "archive pages"),
    ("j k space a", "move / select / select all"),
    ("N e t d", "new / edit / toggle / delete word"),
    ("A D", "activate / deactivate selected"),
    (":", "command deck, e.g. :vibe cozy or :login"),
    ("q", "quit"),
];

pub fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<String> = View::ALL
        .iter()
        .enumerate()
        .map(|(i, v)| format!("{} {}", i + 1, v.title()))
        .collect();
    let selected = View::ALL.iter().position(|v| *v == app.view).unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected)
        .style(Style::default().fg(colors::dimmed()).bg(colors::card()))
        .highlight_style(
            Style::default()
                .fg(colors::accent())
                .add_modifier(Modifier::BOLD),
        )
        .divider("|");
    frame.render_widget(tabs, area);
}

/// The bottom line: command input, confirmation, status message, or hints
pub fn status_line(app: &App) -> Line<'static> {
    match app.mode() {
        AppMode::Command => Line::from(vec![
            Span::styled(
                ":",
                Style::default()
                    .fg(colors::accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(app.command_input.clone(), Style::default().fg(colors::card_text())),
        ]),
        _ => match &app.status {
            Some(status) => Line::from(Span::styled(
                status.clone(),
                Style::default()
                    .fg(colors::focus())
                    .add_modifier(Modifier::BOLD),
            )),
            None => Line::from(Span::styled(
                "? help · : command · q quit",
                Style::default().fg(colors::dimmed()),
            )),
        },
    }
}

pub fn render_status_line(frame: &mut Frame, app: &App, area: Rect) {
    frame.render_widget(
        Paragraph::new(status_line(app)).style(Style::default().bg(colors::card())),
        area,
    );
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let popup = centered(area, 60, HELP.len() as u16 + 2);
    let lines: Vec<Line> = HELP
        .iter()
        .map(|(keys, action)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<12}", keys),
                    Style::default()
                        .fg(colors::focus())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors::card_text())),
            ])
        })
        .collect();
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" Keys ")
                .style(Style::default().bg(colors::card())),
        ),
        popup,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::testing::offline_app;
    use crate::app::AppEvent;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_status_line_shows_hints_by_default() {
        let app = offline_app();
        assert_eq!(text(&status_line(&app)), "? help · : command · q quit");
    }

    #[test]
    fn test_status_line_echoes_command_input() {
        let mut app = offline_app();
        app.handle_event(AppEvent::EnterCommand);
        app.command_input.push_str("vibe cozy");
        assert_eq!(text(&status_line(&app)), ":vibe cozy");
    }

    #[test]
    fn test_status_line_shows_status() {
        let mut app = offline_app();
        app.handle_event(AppEvent::Warning("Copied to clipboard!".to_string()));
        assert_eq!(text(&status_line(&app)), "Copied to clipboard!");
    }
}
