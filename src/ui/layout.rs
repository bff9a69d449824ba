//! Layout calculations for the expense tracker.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::constants::{FILTER_BAR_HEIGHT, FOOTER_HEIGHT, FORM_WIDTH, HEADER_HEIGHT};

// ============================================================================
// Layout Structs
// ============================================================================

/// Main application layout areas.
#[derive(Debug, Clone, Copy)]
pub struct AppLayout {
    /// Header area (title, record count, active filter)
    pub header: Rect,
    /// Entry form column
    pub form: Rect,
    /// Category filter bar above the table
    pub filter_bar: Rect,
    /// Transaction table
    pub table: Rect,
    /// Footer area (keybinding hints)
    pub footer: Rect,
}

// ============================================================================
// Layout Functions
// ============================================================================

/// Calculate the main application layout from the terminal area.
#[must_use]
pub fn calculate_app_layout(area: Rect) -> AppLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(FOOTER_HEIGHT),
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_WIDTH), Constraint::Min(20)])
        .split(rows[1]);

    let history = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(FILTER_BAR_HEIGHT), Constraint::Min(3)])
        .split(columns[1]);

    AppLayout {
        header: rows[0],
        form: columns[0],
        filter_bar: history[0],
        table: history[1],
        footer: rows[2],
    }
}

// ============================================================================
// Tests
// ============================================================================
