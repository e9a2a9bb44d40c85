//! Archive grid

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use super::prompt::prompt_spans;
use crate::api::ArchiveEntry;
use crate::app::archive::format_archive_date;
use crate::app::App;
use crate::engine::{segment_prompt, Config};
use crate::ui::theme::{colors, contrast_text, parse_hex};

const COLUMNS: usize = 3;
const CARD_HEIGHT: u16 = 7;

/// Card body: date, highlighted prompt, hashtag
fn entry_lines(entry: &ArchiveEntry, config: &Config, fg: Color) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    if let Some(date) = entry.date.as_deref() {
        lines.push(Line::from(Span::styled(
            format_archive_date(date),
            Style::default().fg(fg).add_modifier(Modifier::ITALIC),
        )));
    }
    match segment_prompt(&entry.record) {
        Ok(segments) => lines.push(Line::from(prompt_spans(&segments, None))),
        Err(_) => lines.push(Line::from(Span::styled(
            entry.record.prompt.clone().unwrap_or_default(),
            Style::default().fg(fg),
        ))),
    }
    let hashtag = entry
        .record
        .hashtag
        .clone()
        .filter(|h| !h.trim().is_empty())
        .unwrap_or_else(|| config.archive.default_hashtag.clone());
    lines.push(Line::from(Span::styled(
        hashtag,
        Style::default().fg(fg).add_modifier(Modifier::BOLD),
    )));
    lines
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let archive = &app.archive;
    let config = app.config();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(area);

    let heading = Style::default().fg(colors::card()).add_modifier(Modifier::BOLD);
    if let Some(label) = archive.loading {
        frame.render_widget(
            Paragraph::new(Span::styled(label, heading)).alignment(Alignment::Center),
            chunks[0],
        );
        return;
    }
    if let Some(notice) = &archive.notice {
        frame.render_widget(
            Paragraph::new(Span::styled(notice.headline.clone(), heading))
                .alignment(Alignment::Center),
            chunks[0],
        );
        return;
    }

    let entries = archive.page_entries();
    let rows = entries.len().div_ceil(COLUMNS).max(1);
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); rows])
        .split(chunks[0]);

    for (row_index, row) in entries.chunks(COLUMNS).enumerate() {
        let Some(row_area) = row_areas.get(row_index) else {
            break;
        };
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, COLUMNS as u32); COLUMNS])
            .split(*row_area);

        for (col, entry) in row.iter().enumerate() {
            let index = row_index * COLUMNS + col;
            let color = entry
                .record
                .stored_color()
                .and_then(parse_hex)
                .or_else(|| parse_hex(&config.archive.default_color))
                .unwrap_or_else(colors::focus);
            let fg = contrast_text(color);
            let selected = index == archive.cursor;

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(if selected {
                    BorderType::Thick
                } else {
                    BorderType::Rounded
                })
                .border_style(Style::default().fg(if selected { colors::accent() } else { fg }))
                .style(Style::default().bg(color));

            frame.render_widget(
                Paragraph::new(entry_lines(entry, config, fg))
                    .block(block)
                    .wrap(Wrap { trim: true }),
                cells[col],
            );
        }
    }

    let mut nav = Vec::new();
    if archive.has_prev() {
        nav.push(Span::raw("← p  "));
    }
    nav.push(Span::styled(archive.page_info(), heading));
    if archive.has_next() {
        nav.push(Span::raw("  n →"));
    }
    frame.render_widget(
        Paragraph::new(Line::from(nav))
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::card())),
        chunks[1],
    );
}
