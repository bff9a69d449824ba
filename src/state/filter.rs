//! Category filter: the read-only view of the store shown in the table.
//!
//! The view is derived on demand from the store and the selected category,
//! never cached.

use crate::domain::{Category, Expense};

/// Returns the records whose category matches `selection`, in store order.
///
/// `None` selects every record.
#[must_use]
pub fn filtered_view(records: &[Expense], selection: Option<Category>) -> Vec<&Expense> {
    records
        .iter()
        .filter(|record| selection.is_none_or(|category| record.category == category))
        .collect()
}

/// Human-readable label for a filter selection.
#[must_use]
pub fn filter_label(selection: Option<Category>) -> &'static str {
    selection.map_or("All", |category| category.label())
}
