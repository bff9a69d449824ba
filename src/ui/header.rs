//! Header rendering: application title, record count, and active filter.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, filter_label};
use crate::theme::{MUTED_COLOR, PRIMARY_COLOR, WARNING_COLOR};

use super::helpers::create_border_block;

/// Render the application header.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let header_block = create_border_block("", false);
    let inner = header_block.inner(area);
    frame.render_widget(header_block, area);

    if inner.height == 0 {
        return;
    }

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    let title = Line::from(vec![
        Span::styled(
            "Expense Tracker",
            Style::default()
                .fg(PRIMARY_COLOR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} recorded", app.store.len()),
            Style::default().fg(MUTED_COLOR),
        ),
    ]);
    frame.render_widget(Paragraph::new(title).alignment(Alignment::Left), halves[0]);

    let mut status = vec![Span::styled(
        format!("Filter: {}", filter_label(app.filter)),
        Style::default().fg(MUTED_COLOR),
    )];
    if let Some(id) = app.form.editing() {
        status.push(Span::raw("  "));
        status.push(Span::styled(
            format!("Editing {id}"),
            Style::default()
                .fg(WARNING_COLOR)
                .add_modifier(Modifier::BOLD),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(status)).alignment(Alignment::Right),
        halves[1],
    );
}
