//! Admin panel: login box, word table, add/edit form

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Cell, Clear, Paragraph, Row, Table, TableState},
    Frame,
};

use super::centered;
use crate::api::Word;
use crate::app::admin::AdminState;
use crate::app::form::{FormField, WordForm};
use crate::app::{App, AppMode};
use crate::ui::theme::colors;

const TEXT: Color = Color::Rgb(229, 231, 235);

fn check(value: bool) -> &'static str {
    if value {
        "✓"
    } else {
        "·"
    }
}

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    if app.admin.is_logged_in() {
        render_table(frame, &app.admin, area);
    } else {
        render_login(frame, app, area);
    }
}

fn render_login(frame: &mut Frame, app: &App, area: Rect) {
    let admin = &app.admin;
    let box_area = centered(area, 44, 7);
    let typing = app.mode() == AppMode::Login;

    let mut lines = vec![Line::from(vec![
        Span::styled("Password: ", Style::default().fg(colors::dimmed())),
        Span::styled(
            "•".repeat(admin.password.chars().count()),
            Style::default().fg(colors::card_text()),
        ),
        Span::styled(
            if typing { "▏" } else { "" },
            Style::default().fg(colors::focus()),
        ),
    ])];
    if let Some(error) = &admin.login_error {
        lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::error()),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        if typing {
            "Enter to log in · Esc to cancel"
        } else {
            "Enter to log in"
        },
        Style::default().fg(colors::dimmed()),
    )));

    frame.render_widget(Clear, box_area);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(" Admin Login ")
                .style(Style::default().bg(colors::card())),
        ),
        box_area,
    );
}

fn filter_line(admin: &AdminState) -> Line<'static> {
    let label = Style::default().fg(colors::dimmed());
    let value = Style::default().fg(TEXT).add_modifier(Modifier::BOLD);
    let filter = &admin.filter;
    Line::from(vec![
        Span::styled("category ", label),
        Span::styled(
            filter.category.map_or("all", |c| c.as_str()).to_string(),
            value,
        ),
        Span::styled("  mood ", label),
        Span::styled(filter.mood.clone().unwrap_or_else(|| "all".to_string()), value),
        Span::styled("  active ", label),
        Span::styled(
            filter
                .active
                .map_or("all".to_string(), |a| a.to_string()),
            value,
        ),
        Span::styled("  search ", label),
        Span::styled(
            if admin.search.is_empty() {
                "-".to_string()
            } else {
                admin.search.clone()
            },
            value,
        ),
    ])
}

fn word_row(word: &Word, selected: bool) -> Row<'static> {
    let dim = if word.active {
        Style::default().fg(TEXT)
    } else {
        Style::default().fg(colors::dimmed())
    };
    Row::new(vec![
        Cell::from(if selected { "[x]" } else { "[ ]" }),
        Cell::from(word.word.clone()),
        Cell::from(word.category.as_str()),
        Cell::from(word.mood.join(", ")),
        Cell::from(check(word.is_animal)),
        Cell::from(check(word.is_object)),
        Cell::from(if word.active { "active" } else { "inactive" }),
    ])
    .style(dim)
}

fn render_table(frame: &mut Frame, admin: &AdminState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
        ])
        .split(area);

    let stats = admin.stats();
    let accent = Style::default()
        .fg(colors::accent())
        .add_modifier(Modifier::BOLD);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!("{} words", stats.total), accent),
            Span::styled(format!("  {} active", stats.active), Style::default().fg(TEXT)),
            Span::styled(
                format!("  {} inactive", stats.inactive),
                Style::default().fg(colors::dimmed()),
            ),
            Span::styled(
                format!("  {} selected", admin.selected.len()),
                Style::default().fg(TEXT),
            ),
        ])),
        chunks[0],
    );
    frame.render_widget(Paragraph::new(filter_line(admin)), chunks[1]);

    if let Some(error) = &admin.table_error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.clone(), Style::default().fg(colors::error())))
                .alignment(Alignment::Center),
            chunks[2],
        );
        return;
    }

    let rows: Vec<Row> = admin
        .visible()
        .into_iter()
        .map(|w| word_row(w, admin.selected.contains(&w.id)))
        .collect();

    let header = Row::new(vec!["", "Word", "Category", "Moods", "Animal", "Object", "Status"])
        .style(Style::default().fg(colors::accent()).add_modifier(Modifier::BOLD));

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Percentage(25),
            Constraint::Length(10),
            Constraint::Percentage(30),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(8),
        ],
    )
    .header(header)
    .block(Block::bordered().style(Style::default().fg(TEXT)))
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = TableState::default().with_selected(Some(admin.cursor));
    frame.render_stateful_widget(table, chunks[2], &mut state);
}

fn form_line(form: &WordForm, field: FormField) -> Line<'static> {
    let value = match field {
        FormField::Word => form.draft.word.clone(),
        FormField::Category => format!("◂ {} ▸", form.draft.category),
        FormField::Moods => form.moods.clone(),
        FormField::Animal => check(form.draft.is_animal).to_string(),
        FormField::Object => check(form.draft.is_object).to_string(),
        FormField::Active => check(form.draft.active).to_string(),
    };
    let active = form.field == field;
    let label_style = if active {
        Style::default()
            .fg(colors::focus())
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(colors::dimmed())
    };
    Line::from(vec![
        Span::styled(format!("{:<10}", field.label()), label_style),
        Span::styled(value, Style::default().fg(colors::card_text())),
        Span::raw(if active { " ◂" } else { "" }),
    ])
}

pub fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let Some(form) = app.admin.form.as_ref() else {
        return;
    };
    let popup = centered(area, 56, 12);

    let mut lines: Vec<Line> = FormField::all()
        .iter()
        .map(|field| form_line(form, *field))
        .collect();
    lines.push(Line::from(""));
    match &form.error {
        Some(error) => lines.push(Line::from(Span::styled(
            error.clone(),
            Style::default().fg(colors::error()),
        ))),
        None => lines.push(Line::from(Span::styled(
            "Tab next field · space toggle · Enter save · Esc cancel",
            Style::default().fg(colors::dimmed()),
        ))),
    }

    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::bordered()
                .title(format!(" {} ", form.title()))
                .style(Style::default().bg(colors::card())),
        ),
        popup,
    );
}
