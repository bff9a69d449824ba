//! Domain types for the expense tracker.
//!
//! # Module Organization
//!
//! - [`category`] - The fixed set of expense categories
//! - [`error`] - Form fields and their validation errors
//! - [`expense`] - Stored records, drafts, and amount formatting

// ============================================================================
// Module Declarations
// ============================================================================

pub mod category;
pub mod error;
pub mod expense;

// ============================================================================
// Re-exports
// ============================================================================

pub use category::Category;
pub use error::{Field, FieldError, FormErrors};
pub use expense::{Expense, ExpenseDraft, ExpenseId, format_amount};
