//! Expense records and their validation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;

use super::{Category, Field, FieldError, FormErrors};

// ============================================================================
// Identity
// ============================================================================

/// Stable identifier of a stored expense.
///
/// Assigned once by the record store and never reused within a session, so
/// it stays valid while the table is filtered or rows move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExpenseId(pub(crate) u64);

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// ============================================================================
// Expense
// ============================================================================

/// A stored expense record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: ExpenseId,
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl Expense {
    /// Returns the record's values without its identity.
    #[must_use]
    pub fn to_draft(&self) -> ExpenseDraft {
        ExpenseDraft {
            description: self.description.clone(),
            amount: self.amount,
            category: self.category,
        }
    }
}

/// A validated expense that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseDraft {
    pub description: String,
    pub amount: Decimal,
    pub category: Category,
}

impl ExpenseDraft {
    /// Validates raw form input and builds a draft from it.
    ///
    /// Every field is checked, so the returned [`FormErrors`] carries one
    /// message for each offending field. The amount bound is inclusive.
    ///
    /// # Errors
    ///
    /// Returns the collected field errors if any field is invalid.
    pub fn validate(
        description: &str,
        amount: &str,
        category: Option<Category>,
        max_amount: Decimal,
    ) -> Result<Self, FormErrors> {
        let mut errors = FormErrors::default();

        let description = description.trim();
        if description.is_empty() {
            errors.set(Field::Description, FieldError::Required(Field::Description));
        }

        let amount = match parse_amount(amount, max_amount) {
            Ok(value) => Some(value),
            Err(error) => {
                errors.set(Field::Amount, error);
                None
            }
        };

        if category.is_none() {
            errors.set(Field::Category, FieldError::Required(Field::Category));
        }

        match (amount, category) {
            (Some(amount), Some(category)) if errors.is_empty() => Ok(Self {
                description: description.to_string(),
                amount,
                category,
            }),
            _ => Err(errors),
        }
    }
}

/// Parses the amount field's text, checking it against the inclusive bound.
///
/// The amount is unsigned: digits with at most one decimal point. The bound
/// is compared on the typed digits, so values `Decimal` cannot hold exactly
/// (too many digits or too many decimal places) are still judged by what
/// was typed and never rounded into range.
fn parse_amount(text: &str, max_amount: Decimal) -> Result<Decimal, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FieldError::Required(Field::Amount));
    }

    let (integer, fraction) = text.split_once('.').unwrap_or((text, ""));
    let is_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if (integer.is_empty() && fraction.is_empty()) || !is_digits(integer) || !is_digits(fraction) {
        return Err(FieldError::NotANumber);
    }

    if exceeds_bound(integer, fraction, max_amount) {
        return Err(FieldError::OutOfRange { max: max_amount });
    }

    let integer = match integer.trim_start_matches('0') {
        "" => "0",
        digits => digits,
    };
    let fraction = if fraction.is_empty() { "0" } else { fraction };
    Decimal::from_str(&format!("{integer}.{fraction}")).map_err(|_| FieldError::NotANumber)
}

/// Whether the unsigned decimal `integer.fraction` is greater than `max`.
fn exceeds_bound(integer: &str, fraction: &str, max: Decimal) -> bool {
    if max.is_sign_negative() && !max.is_zero() {
        return true;
    }

    let bound = max.normalize().to_string();
    let (bound_integer, bound_fraction) = bound.split_once('.').unwrap_or((&bound, ""));

    let integer = integer.trim_start_matches('0');
    let bound_integer = bound_integer.trim_start_matches('0');

    // Equal-length digit runs order like the numbers they spell; trailing
    // fraction zeros carry no value.
    let ordering = integer
        .len()
        .cmp(&bound_integer.len())
        .then_with(|| integer.cmp(bound_integer))
        .then_with(|| {
            fraction
                .trim_end_matches('0')
                .cmp(bound_fraction.trim_end_matches('0'))
        });

    ordering == Ordering::Greater
}

/// Formats an amount for display with two decimal places.
#[must_use]
pub fn format_amount(currency_symbol: &str, amount: Decimal) -> String {
    format!("{currency_symbol}{:.2}", amount.round_dp(2))
}

// ============================================================================
// Tests
// ============================================================================
