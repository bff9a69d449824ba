//! Command execution and record operations.
//!
//! Keyboard input is mapped to commands, and commands are executed here.
//! Table row actions are resolved from the highlighted row of the filtered
//! view to the record's [`ExpenseId`] before anything is changed, so they
//! always hit the record the user sees.

use crossterm::event::KeyEvent;

use super::{App, Focus, filtered_view};
use crate::commands::{AppCommand, InputContext, KeyMapper};
use crate::constants::DELETED_MESSAGE;
use crate::domain::{Category, Expense, ExpenseId, Field};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.input_context();
        let command = KeyMapper::map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines which key bindings are active.
    #[must_use]
    pub fn input_context(&self) -> InputContext {
        match self.ui.focus {
            Focus::Form => InputContext::Form,
            Focus::Table => InputContext::Table,
        }
    }

    /// Executes an application command.
    ///
    /// This is the single update function for the whole application state.
    ///
    /// # Panics
    ///
    /// [`AppCommand::DeleteSelected`] panics outside a tokio runtime; see
    /// [`App::delete`].
    pub fn execute_command(&mut self, command: AppCommand) {
        let mutates = command.mutates_records();

        match command {
            // === Application Control ===
            AppCommand::Quit => {
                self.exit = true;
            }

            // === Focus ===
            AppCommand::FocusForm => {
                self.ui.focus = Focus::Form;
            }
            AppCommand::Dismiss => {
                if self.form.editing().is_some() {
                    self.cancel_edit();
                } else {
                    self.ui.focus = Focus::Table;
                }
            }

            // === Entry Form ===
            AppCommand::NextField => self.form.next_field(),
            AppCommand::PrevField => self.form.prev_field(),
            AppCommand::TypeChar(c) => self.form.push_char(c),
            AppCommand::Backspace => self.form.backspace(),
            AppCommand::NextCategory => {
                if self.form.active_field == Field::Category {
                    self.form.next_category();
                }
            }
            AppCommand::PrevCategory => {
                if self.form.active_field == Field::Category {
                    self.form.prev_category();
                }
            }
            AppCommand::Submit => {
                self.submit();
            }

            // === Transaction Table ===
            AppCommand::MoveUp => {
                let rows = self.visible_records().len();
                self.ui.select_prev(rows);
            }
            AppCommand::MoveDown => {
                let rows = self.visible_records().len();
                self.ui.select_next(rows);
            }
            AppCommand::EditSelected => {
                if let Some(id) = self.selected_expense_id() {
                    self.edit(id);
                }
            }
            AppCommand::DeleteSelected => {
                if let Some(id) = self.selected_expense_id() {
                    self.delete(id);
                }
            }
            AppCommand::NextFilter => {
                self.set_filter(Category::cycle_next(self.filter));
            }
            AppCommand::PrevFilter => {
                self.set_filter(Category::cycle_prev(self.filter));
            }

            AppCommand::Noop => {}
        }

        if mutates {
            tracing::debug!("Store holds {} records", self.store.len());
        }

        let rows = self.visible_records().len();
        self.ui.clamp_selection(rows);
    }

    // ========================================================================
    // Record Operations
    // ========================================================================

    /// Validates the form and stores its values.
    ///
    /// While editing, the edited record is replaced in place; otherwise a
    /// new record is appended. The form is cleared after either. On
    /// validation failure the store is left untouched and the errors stay
    /// on the form.
    ///
    /// # Returns
    ///
    /// The id of the created or updated record.
    pub fn submit(&mut self) -> Option<ExpenseId> {
        let Some(draft) = self.form.validate(self.config.max_amount) else {
            tracing::debug!("Submission rejected: {:?}", self.form.errors);
            return None;
        };

        let id = match self.form.editing() {
            Some(id) if self.store.get(id).is_some() => {
                self.store.replace(id, draft);
                tracing::info!("Updated expense {id}");
                id
            }
            Some(id) => {
                let new_id = self.store.append(draft);
                tracing::warn!("Expense {id} no longer exists, recorded as {new_id}");
                new_id
            }
            None => {
                let id = self.store.append(draft);
                tracing::info!("Recorded expense {id}");
                id
            }
        };

        self.form.clear();
        Some(id)
    }

    /// Loads a record into the form and marks it as being edited.
    pub fn edit(&mut self, id: ExpenseId) {
        let Some(expense) = self.store.get(id) else {
            return;
        };
        self.form.load(expense);
        self.ui.focus = Focus::Form;
        tracing::debug!("Editing expense {id}");
    }

    /// Leaves editing mode without touching the store.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.form.editing() {
            tracing::debug!("Cancelled editing expense {id}");
        }
        self.form.clear();
    }

    /// Deletes a record and shows the deletion banner.
    ///
    /// Deleting the record that is being edited also cancels the edit.
    ///
    /// # Panics
    ///
    /// Panics if called outside a tokio runtime, since the banner's hide
    /// timer is spawned as a tokio task.
    pub fn delete(&mut self, id: ExpenseId) -> Option<Expense> {
        let removed = self.store.remove(id)?;

        if self.form.editing() == Some(id) {
            self.form.clear();
        }

        self.notification.show(
            DELETED_MESSAGE,
            self.config.notification_duration(),
            self.message_tx.clone(),
        );
        tracing::info!("Deleted expense {id}");
        Some(removed)
    }

    /// Changes the category shown in the table.
    pub fn set_filter(&mut self, filter: Option<Category>) {
        self.filter = filter;
        self.ui.selected_row = None;
        tracing::debug!("Filter set to {}", super::filter_label(filter));
    }

    // ========================================================================
    // Derived Views
    // ========================================================================

    /// The records shown in the table, in store order.
    #[must_use]
    pub fn visible_records(&self) -> Vec<&Expense> {
        filtered_view(self.store.records(), self.filter)
    }

    /// The id of the highlighted table row.
    #[must_use]
    pub fn selected_expense_id(&self) -> Option<ExpenseId> {
        let row = self.ui.selected_row?;
        self.visible_records().get(row).map(|expense| expense.id)
    }
}
