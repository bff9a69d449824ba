//! UI rendering for the expense tracker.
//!
//! # Module Structure
//!
//! - `layout` - Layout calculations and structs
//! - `header` - Title bar with record count and active filter
//! - `form` - Entry form with inline validation errors
//! - `table` - Filter bar and transaction table
//! - `footer` - Keybinding hints for the focused pane
//! - `components` - Overlays (status banner)
//! - `helpers` - Shared helper functions for creating styled blocks

pub mod components;
pub mod footer;
pub mod form;
pub mod header;
pub mod helpers;
pub mod layout;
pub mod table;

use ratatui::Frame;

use crate::state::App;

/// Draw the whole screen from the current application state.
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    let areas = layout::calculate_app_layout(size);

    header::render(frame, areas.header, app);
    form::render(frame, areas.form, &app.form, app.ui.focus);
    table::render_filter_bar(frame, areas.filter_bar, app);
    table::render_table(frame, areas.table, app);
    footer::render(frame, areas.footer, app);

    if let Some(message) = app.notification.message() {
        components::render_toast(frame, size, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DELETED_MESSAGE;
    use crate::test_utils::{AppMother, buffer_to_string, test_terminal};
    use ratatui::{Terminal, backend::TestBackend};
    use rstest::rstest;

    #[rstest]
    fn test_render_composes_every_pane(mut test_terminal: Terminal<TestBackend>) {
        let app = AppMother::fruit_and_other();

        test_terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_to_string(test_terminal.backend().buffer());

        assert!(content.contains("Expense Tracker"));
        assert!(content.contains("New Expense"));
        assert!(content.contains("Vegetables"));
        assert!(content.contains("Transaction History (2)"));
        assert!(content.contains("$2.00"));
        assert!(content.contains("Ctrl+C:Quit"));
        assert!(!content.contains(DELETED_MESSAGE));
    }

    #[tokio::test]
    async fn test_render_shows_banner_after_delete() {
        let mut test_terminal = test_terminal();
        let mut app = AppMother::fruit_and_other();
        let id = app.store.records()[0].id;
        app.delete(id);

        test_terminal.draw(|frame| render(&app, frame)).unwrap();
        let content = buffer_to_string(test_terminal.backend().buffer());

        assert!(content.contains(DELETED_MESSAGE), "got: {content}");
        assert!(content.contains("Transaction History (1)"));
    }
}
