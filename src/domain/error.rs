//! Validation errors for the expense entry form.
//!
//! Validation failures are ordinary values: they are shown inline next to
//! the offending field and never escalate past the form.

use rust_decimal::Decimal;
use thiserror::Error;

// ============================================================================
// Form Fields
// ============================================================================

/// The input fields of the entry form, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Description,
    Amount,
    Category,
}

impl Field {
    /// All fields in focus order.
    pub const ALL: [Field; 3] = [Field::Description, Field::Amount, Field::Category];

    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Description,
        }
    }

    #[must_use]
    pub const fn prev(self) -> Self {
        match self {
            Self::Description => Self::Category,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Description => "Description",
            Self::Amount => "Amount",
            Self::Category => "Category",
        }
    }
}

// ============================================================================
// Field Errors
// ============================================================================

/// A single validation failure on one field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A mandatory field was left empty or at its placeholder value.
    #[error("{} is required!", .0.label())]
    Required(Field),

    /// The amount exceeds the permitted maximum.
    #[error("Amount must not exceed {max}!")]
    OutOfRange {
        /// The inclusive upper bound that was exceeded.
        max: Decimal,
    },

    /// The amount text could not be read as a number.
    #[error("Amount must be a number!")]
    NotANumber,
}

/// Validation errors for a whole form submission, at most one per field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormErrors {
    pub description: Option<FieldError>,
    pub amount: Option<FieldError>,
    pub category: Option<FieldError>,
}

impl FormErrors {
    /// Returns `true` when no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.amount.is_none() && self.category.is_none()
    }

    /// Returns the error recorded for `field`, if any.
    #[must_use]
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        match field {
            Field::Description => self.description.as_ref(),
            Field::Amount => self.amount.as_ref(),
            Field::Category => self.category.as_ref(),
        }
    }

    /// Records an error for `field`, replacing any earlier one.
    pub fn set(&mut self, field: Field, error: FieldError) {
        *self.slot(field) = Some(error);
    }

    /// Clears the error recorded for `field`.
    pub fn clear(&mut self, field: Field) {
        *self.slot(field) = None;
    }

    fn slot(&mut self, field: Field) -> &mut Option<FieldError> {
        match field {
            Field::Description => &mut self.description,
            Field::Amount => &mut self.amount,
            Field::Category => &mut self.category,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
