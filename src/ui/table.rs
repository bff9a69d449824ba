//! Transaction history: the category filter bar and the record table.

use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::domain::{Category, format_amount};
use crate::state::{App, Focus, filter_label};
use crate::theme::{HIGHLIGHT_STYLE, MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Column widths: description, amount, category.
const COLUMN_WIDTHS: [Constraint; 3] = [
    Constraint::Min(16),
    Constraint::Length(10),
    Constraint::Length(12),
];

/// Render the filter bar listing every selection, the active one highlighted.
pub fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
    let block = create_border_block("Filter", false);

    let options = std::iter::once(None).chain(Category::ALL.into_iter().map(Some));
    let mut spans = Vec::new();
    for option in options {
        let label = filter_label(option);
        let style = if option == app.filter {
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(MUTED_COLOR)
        };
        spans.push(Span::styled(format!(" {label} "), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Render the table of records in the current filtered view.
pub fn render_table(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.ui.focus == Focus::Table;
    let records = app.visible_records();
    let title = format!("Transaction History ({})", records.len());
    let block = create_border_block(&title, focused);

    if records.is_empty() {
        let empty = Paragraph::new("No expenses to show")
            .style(Style::default().fg(MUTED_COLOR))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let editing = app.form.editing();
    let rows = records.iter().map(|expense| {
        let style = if Some(expense.id) == editing {
            Style::default().fg(WARNING_COLOR)
        } else {
            Style::default()
        };
        Row::new(vec![
            Cell::from(expense.description.as_str()),
            Cell::from(format_amount(&app.config.currency_symbol, expense.amount)),
            Cell::from(expense.category.label()),
        ])
        .style(style)
    });

    let header = Row::new(vec!["Description", "Amount", "Category"]).style(
        Style::default()
            .fg(PRIMARY_COLOR)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .row_highlight_style(if focused {
            HIGHLIGHT_STYLE
        } else {
            Style::default()
        })
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(app.ui.selected_row);
    frame.render_stateful_widget(table, area, &mut state);
}

// ============================================================================
// Tests
// ============================================================================
