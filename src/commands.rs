//! Command pattern for key event handling.
//!
//! Key events are translated into [`AppCommand`]s by a pure mapping that
//! only depends on the current [`InputContext`]. The application state is
//! then updated by executing the command, which keeps key bindings testable
//! in isolation from the state they drive.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Determines which key bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// The entry form has focus; printable keys type into the active field.
    Form,
    /// The transaction table has focus; keys navigate and act on rows.
    Table,
}

// ============================================================================
// App Commands
// ============================================================================

/// All commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Exit the application.
    Quit,

    // === Focus ===
    /// Move keyboard focus to the entry form.
    FocusForm,
    /// Cancel an edit in progress, otherwise move focus to the table.
    Dismiss,

    // === Entry Form ===
    /// Focus the next form field.
    NextField,
    /// Focus the previous form field.
    PrevField,
    /// Type a character into the active field.
    TypeChar(char),
    /// Delete the last character of the active field.
    Backspace,
    /// Select the next category in the category field.
    NextCategory,
    /// Select the previous category in the category field.
    PrevCategory,
    /// Validate the form and create or update a record.
    Submit,

    // === Transaction Table ===
    /// Move the row selection up.
    MoveUp,
    /// Move the row selection down.
    MoveDown,
    /// Load the selected record into the form for editing.
    EditSelected,
    /// Delete the selected record.
    DeleteSelected,
    /// Switch the table filter to the next category.
    NextFilter,
    /// Switch the table filter to the previous category.
    PrevFilter,

    // === No Operation ===
    /// Unhandled key.
    Noop,
}

impl AppCommand {
    /// Returns `true` if this command changes the record store when it
    /// succeeds.
    #[must_use]
    pub const fn mutates_records(&self) -> bool {
        matches!(self, Self::Submit | Self::DeleteSelected)
    }
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to application commands based on the input context.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to an application command.
    ///
    /// This is a pure function with no side effects.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return AppCommand::Quit;
        }

        match context {
            InputContext::Form => Self::map_form_keys(key),
            InputContext::Table => Self::map_table_keys(key),
        }
    }

    fn map_form_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::Submit,
            KeyCode::Tab | KeyCode::Down => AppCommand::NextField,
            KeyCode::BackTab | KeyCode::Up => AppCommand::PrevField,
            KeyCode::Right => AppCommand::NextCategory,
            KeyCode::Left => AppCommand::PrevCategory,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_table_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::Quit,
            KeyCode::Tab | KeyCode::Esc | KeyCode::Char('a') => AppCommand::FocusForm,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Enter | KeyCode::Char('e') => AppCommand::EditSelected,
            KeyCode::Delete | KeyCode::Char('d') => AppCommand::DeleteSelected,
            KeyCode::Right | KeyCode::Char('f') => AppCommand::NextFilter,
            KeyCode::Left | KeyCode::Char('F') => AppCommand::PrevFilter,
            _ => AppCommand::Noop,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
