//! UI state for the expense tracker.
//!
//! Presentation concerns only: which panel has focus and which table row
//! is highlighted. Records, the form, and the filter live on
//! [`App`](super::App).

// ============================================================================
// Focus
// ============================================================================

/// Which panel receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The entry form has focus.
    #[default]
    Form,
    /// The transaction table has focus.
    Table,
}

// ============================================================================
// UI State
// ============================================================================

#[derive(Debug, Default)]
pub struct UiState {
    /// Which panel currently has focus.
    pub focus: Focus,
    /// Highlighted row, as an index into the filtered view.
    pub selected_row: Option<usize>,
}

impl UiState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_prev(&mut self, row_count: usize) {
        self.selected_row = match self.selected_row {
            _ if row_count == 0 => None,
            Some(index) => Some(index.saturating_sub(1)),
            None => Some(0),
        };
    }

    pub fn select_next(&mut self, row_count: usize) {
        self.selected_row = match self.selected_row {
            _ if row_count == 0 => None,
            Some(index) => Some((index + 1).min(row_count - 1)),
            None => Some(0),
        };
    }

    /// Keeps the selection inside a view of `row_count` rows.
    ///
    /// An empty view clears the selection; a non-empty view always has one.
    pub fn clamp_selection(&mut self, row_count: usize) {
        self.selected_row = match (self.selected_row, row_count) {
            (_, 0) => None,
            (Some(index), count) => Some(index.min(count - 1)),
            (None, _) => Some(0),
        };
    }
}
