//! Entry form panel.
//!
//! Three bordered inputs, each followed by a line for its inline
//! validation error, and a submit button whose label reflects whether the
//! form creates or updates a record.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::constants::{ERROR_LINE_HEIGHT, FIELD_HEIGHT};
use crate::domain::Field;
use crate::state::{EntryForm, Focus};
use crate::theme::{ERROR_COLOR, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Placeholder shown while no category is selected.
const CATEGORY_PLACEHOLDER: &str = "Select a category";

/// Render the entry form.
pub fn render(frame: &mut Frame, area: Rect, form: &EntryForm, focus: Focus) {
    let focused = focus == Focus::Form;
    let title = if form.editing().is_some() {
        "Edit Expense"
    } else {
        "New Expense"
    };
    let panel = create_border_block(title, focused);
    let inner = panel.inner(area);
    frame.render_widget(panel, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(FIELD_HEIGHT),
            Constraint::Length(ERROR_LINE_HEIGHT),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    for (index, field) in Field::ALL.into_iter().enumerate() {
        let active = focused && form.active_field == field;
        render_field(frame, rows[index * 2], form, field, active);
        render_error(frame, rows[index * 2 + 1], form, field);
    }

    render_submit(frame, rows[6], form);
}

fn render_field(frame: &mut Frame, area: Rect, form: &EntryForm, field: Field, active: bool) {
    let border_style = if active {
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD)
    } else if form.errors.get(field).is_some() {
        Style::default().fg(ERROR_COLOR)
    } else {
        Style::default().fg(MUTED_COLOR)
    };

    let value = match field {
        Field::Description => form.description.clone(),
        Field::Amount => form.amount.clone(),
        Field::Category => match form.category {
            Some(category) if active => format!("◀ {category} ▶"),
            Some(category) => category.to_string(),
            None if active => format!("◀ {CATEGORY_PLACEHOLDER} ▶"),
            None => String::new(),
        },
    };

    let (content, style) = if value.is_empty() {
        let placeholder = match field {
            Field::Category => CATEGORY_PLACEHOLDER,
            _ => "<required>",
        };
        (placeholder.to_string(), Style::default().fg(MUTED_COLOR))
    } else if active && field != Field::Category {
        (format!("{value}_"), Style::default())
    } else {
        (value, Style::default())
    };

    let paragraph = Paragraph::new(content).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(field.label()),
    );

    frame.render_widget(paragraph, area);
}

fn render_error(frame: &mut Frame, area: Rect, form: &EntryForm, field: Field) {
    if let Some(error) = form.errors.get(field) {
        let line = Paragraph::new(format!(" {error}")).style(Style::default().fg(ERROR_COLOR));
        frame.render_widget(line, area);
    }
}

fn render_submit(frame: &mut Frame, area: Rect, form: &EntryForm) {
    let (label, color) = if form.editing().is_some() {
        ("[ Update ]", WARNING_COLOR)
    } else {
        ("[ Submit ]", PRIMARY_COLOR)
    };

    let line = Line::from(vec![
        Span::styled(
            label,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Enter", Style::default().fg(MUTED_COLOR)),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

// ============================================================================
// Tests
// ============================================================================
