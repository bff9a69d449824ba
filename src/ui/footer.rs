//! Footer bar with keyboard shortcuts for the focused pane.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    widgets::Paragraph,
};

use crate::state::{App, Focus};
use crate::theme::MUTED_COLOR;

const FORM_HINTS: &str = "Tab/↑↓:Field  ←→:Category  Enter:Submit  Esc:Table/Cancel  Ctrl+C:Quit";
const TABLE_HINTS: &str = "↑↓:Select  e:Edit  d:Delete  f/F:Filter  Tab:Form  q:Quit";

/// Renders the footer bar with the shortcuts of the focused pane.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let hints = match app.ui.focus {
        Focus::Form => FORM_HINTS,
        Focus::Table => TABLE_HINTS,
    };
    let footer = Paragraph::new(hints)
        .style(Style::default().fg(MUTED_COLOR))
        .alignment(Alignment::Center);

    frame.render_widget(footer, area);
}

// ============================================================================
// Tests
// ============================================================================
