//! The record store: the ordered, in-memory list of expenses.
//!
//! Records are addressed by [`ExpenseId`], never by position. Insertion
//! order is preserved; an update replaces a record in place.

use crate::domain::{Expense, ExpenseDraft, ExpenseId};

// ============================================================================
// Record Store
// ============================================================================

/// Ordered collection of every expense recorded in this session.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<Expense>,
    next_id: u64,
}

impl RecordStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a validated draft and returns the id assigned to it.
    pub fn append(&mut self, draft: ExpenseDraft) -> ExpenseId {
        let id = ExpenseId(self.next_id);
        self.next_id += 1;
        self.records.push(Expense {
            id,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
        });
        id
    }

    /// Overwrites the record with `id`, keeping its position.
    ///
    /// # Returns
    ///
    /// `false` if no record has that id.
    pub fn replace(&mut self, id: ExpenseId, draft: ExpenseDraft) -> bool {
        match self.records.iter_mut().find(|record| record.id == id) {
            Some(record) => {
                record.description = draft.description;
                record.amount = draft.amount;
                record.category = draft.category;
                true
            }
            None => false,
        }
    }

    /// Removes and returns the record with `id`.
    pub fn remove(&mut self, id: ExpenseId) -> Option<Expense> {
        let position = self.records.iter().position(|record| record.id == id)?;
        Some(self.records.remove(position))
    }

    /// Looks up a record by id.
    #[must_use]
    pub fn get(&self, id: ExpenseId) -> Option<&Expense> {
        self.records.iter().find(|record| record.id == id)
    }

    /// All records in insertion order.
    #[must_use]
    pub fn records(&self) -> &[Expense] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================
