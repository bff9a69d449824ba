//! Entry form state: field values, focus, inline errors, and edit target.

use rust_decimal::Decimal;

use crate::domain::{Category, Expense, ExpenseDraft, ExpenseId, Field, FormErrors};

// ============================================================================
// Form Mode
// ============================================================================

/// Whether a submit will create a new record or update an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Idle,
    Editing(ExpenseId),
}

// ============================================================================
// Entry Form
// ============================================================================

/// State for the expense entry form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryForm {
    pub description: String,
    pub amount: String,
    pub category: Option<Category>,
    pub active_field: Field,
    pub errors: FormErrors,
    pub mode: FormMode,
}

impl EntryForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The record currently loaded for editing, if any.
    #[must_use]
    pub fn editing(&self) -> Option<ExpenseId> {
        match self.mode {
            FormMode::Editing(id) => Some(id),
            FormMode::Idle => None,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.next();
    }

    pub fn prev_field(&mut self) {
        self.active_field = self.active_field.prev();
    }

    /// Types a character into the focused text field.
    ///
    /// The amount field only takes digits and a single decimal point. The
    /// category field ignores typed characters.
    pub fn push_char(&mut self, c: char) {
        match self.active_field {
            Field::Description => self.description.push(c),
            Field::Amount => {
                let accepted = c.is_ascii_digit() || (c == '.' && !self.amount.contains('.'));
                if !accepted {
                    return;
                }
                self.amount.push(c);
            }
            Field::Category => return,
        }
        self.errors.clear(self.active_field);
    }

    pub fn backspace(&mut self) {
        let removed = match self.active_field {
            Field::Description => self.description.pop(),
            Field::Amount => self.amount.pop(),
            Field::Category => None,
        };
        if removed.is_some() {
            self.errors.clear(self.active_field);
        }
    }

    pub fn next_category(&mut self) {
        self.category = Category::cycle_next(self.category);
        self.errors.clear(Field::Category);
    }

    pub fn prev_category(&mut self) {
        self.category = Category::cycle_prev(self.category);
        self.errors.clear(Field::Category);
    }

    /// Validates the current values.
    ///
    /// On failure the errors are stored on the form for inline display and
    /// the field values are left as typed.
    pub fn validate(&mut self, max_amount: Decimal) -> Option<ExpenseDraft> {
        match ExpenseDraft::validate(&self.description, &self.amount, self.category, max_amount) {
            Ok(draft) => {
                self.errors = FormErrors::default();
                Some(draft)
            }
            Err(errors) => {
                self.errors = errors;
                None
            }
        }
    }

    /// Pre-populates the form from a stored record and marks it as being
    /// edited. No validation happens here.
    pub fn load(&mut self, expense: &Expense) {
        let draft = expense.to_draft();
        self.description = draft.description;
        self.amount = draft.amount.normalize().to_string();
        self.category = Some(draft.category);
        self.active_field = Field::Description;
        self.errors = FormErrors::default();
        self.mode = FormMode::Editing(expense.id);
    }

    /// Resets every field, error and the edit target.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ============================================================================
// Tests
// ============================================================================
