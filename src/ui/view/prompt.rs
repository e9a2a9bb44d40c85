//! Prompt card for the daily and random views

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::centered;
use crate::app::state::{Notice, PromptView, RandomSettings};
use crate::app::{App, View};
use crate::engine::{Presentation, Segment};
use crate::ui::theme::{colors, contrast_text, parse_hex, Theme};

const CARD_MAX_WIDTH: u16 = 64;

/// Styled spans for a rendered prompt. Tagged words carry their category
/// color; the focused word is reversed.
pub fn prompt_spans(segments: &[Segment], focus: Option<usize>) -> Vec<Span<'static>> {
    let base = Style::default().fg(colors::card_text());
    let mut word_index = 0;
    segments
        .iter()
        .map(|segment| match segment.category {
            None => Span::styled(segment.text.clone(), base),
            Some(category) => {
                let mut style = Style::default()
                    .fg(Theme::category(category))
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
                if focus == Some(word_index) {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                word_index += 1;
                Span::styled(segment.text.clone(), style)
            }
        })
        .collect()
}

/// Horizontal card offset standing in for the tilt. Terminal cells can't
/// rotate, so each degree shifts the card one column.
pub fn tilt_offset(presentation: &Presentation) -> i16 {
    presentation.rotation_degrees.round() as i16
}

fn shifted(area: Rect, bounds: Rect, offset: i16) -> Rect {
    let min_x = bounds.x as i32;
    let max_x = (bounds.x + bounds.width).saturating_sub(area.width) as i32;
    let x = (area.x as i32 + offset as i32).clamp(min_x, max_x.max(min_x));
    Rect { x: x as u16, ..area }
}

fn card_height(text: &str, inner_width: u16) -> u16 {
    let width = UnicodeWidthStr::width(text).max(1) as u16;
    let lines = width.div_ceil(inner_width.max(1));
    lines + 4
}

fn notice_lines(notice: &Notice) -> Vec<Line<'static>> {
    let mut lines = vec![Line::from(Span::styled(
        notice.headline.clone(),
        Style::default()
            .fg(colors::accent())
            .add_modifier(Modifier::BOLD),
    ))];
    if let Some(detail) = &notice.detail {
        lines.push(Line::from(Span::styled(
            detail.clone(),
            Style::default().fg(colors::dimmed()),
        )));
    }
    lines
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let Some(view) = app.current_prompt() else {
        return;
    };
    let title = match app.view {
        View::Daily => " Today's prompt ",
        _ => " Random prompt ",
    };

    let width = CARD_MAX_WIDTH.min(area.width.saturating_sub(4)).max(10);
    let inner_width = width.saturating_sub(4);

    let (body, offset) = match (&view.rendered, &view.notice, view.loading) {
        (_, _, Some(label)) => (
            vec![Line::from(Span::styled(
                label,
                Style::default().fg(colors::dimmed()),
            ))],
            0,
        ),
        (Some(rendered), _, None) => (
            vec![Line::from(prompt_spans(&rendered.segments, view.focus))],
            tilt_offset(&rendered.presentation),
        ),
        (None, Some(notice), None) => (notice_lines(notice), 0),
        (None, None, None) => (vec![Line::from("")], 0),
    };

    let text = view.text().unwrap_or_default();
    let height = card_height(&text, inner_width).min(area.height);
    let card = shifted(centered(area, width, height), area, offset);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(colors::dimmed()))
        .title(title)
        .style(Style::default().bg(colors::card()));

    frame.render_widget(Clear, card);
    frame.render_widget(
        Paragraph::new(body)
            .block(block)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        card,
    );

    render_footer(frame, app, view, area, card);

    if app.view == View::Random && app.settings.open {
        render_settings(frame, &app.settings, area);
    }
}

fn render_footer(frame: &mut Frame, app: &App, view: &PromptView, area: Rect, card: Rect) {
    let y = card.y + card.height;
    if y >= area.y + area.height {
        return;
    }
    let surface = app.surface_color().and_then(parse_hex).unwrap_or_else(colors::focus);
    let fg = contrast_text(surface);

    let mut lines = Vec::new();
    if let Some(tag) = view.hashtag.as_ref().filter(|_| app.view == View::Daily) {
        lines.push(Line::from(Span::styled(
            tag.clone(),
            Style::default().fg(fg).add_modifier(Modifier::BOLD),
        )));
    }
    let hint = match app.view {
        View::Daily => "Tab pick word · Enter search · c share · h hashtag",
        _ => "g new prompt · s settings · Tab pick word · Enter search · c share",
    };
    lines.push(Line::from(Span::styled(hint, Style::default().fg(fg))));

    let footer = Rect {
        x: area.x,
        y,
        width: area.width,
        height: (area.y + area.height - y).min(lines.len() as u16 + 1),
    };
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center),
        Rect {
            y: footer.y + 1,
            height: footer.height.saturating_sub(1),
            ..footer
        },
    );
}

fn render_settings(frame: &mut Frame, settings: &RandomSettings, area: Rect) {
    let panel = Rect {
        x: area.x + 1,
        y: area.y,
        width: 48.min(area.width),
        height: 6.min(area.height),
    };
    let label = Style::default().fg(colors::dimmed());
    let value = Style::default()
        .fg(colors::card_text())
        .add_modifier(Modifier::BOLD);
    let row = |name: &'static str, v: String| {
        Line::from(vec![Span::styled(name, label), Span::styled(v, value)])
    };
    let lines = vec![
        row("Scene   ", (if settings.include_scene { "yes" } else { "no" }).to_string()),
        row("Vibe    ", settings.vibe.clone()),
        row("Animals ", settings.animal_rarity.clone()),
        row("Objects ", settings.object_rarity.clone()),
    ];
    frame.render_widget(Clear, panel);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" Settings (x scene, :vibe, :animal, :object) ")
                .style(Style::default().bg(colors::card())),
        ),
        panel,
    );
}
