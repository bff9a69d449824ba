//! Shared test utilities and Mother pattern factories.
//!
//! Use these helpers to avoid copy-pasting setup code across tests.
#![allow(dead_code)]

use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use rstest::fixture;
use rust_decimal::Decimal;

use crate::domain::{Category, Expense, ExpenseDraft, ExpenseId};
use crate::state::{App, AppConfig};

// ============================================================================
// Mother Pattern Factories
// ============================================================================

pub struct ExpenseMother;

impl ExpenseMother {
    #[must_use]
    pub fn draft(description: &str, amount: i64, category: Category) -> ExpenseDraft {
        ExpenseDraft {
            description: description.to_string(),
            amount: Decimal::from(amount),
            category,
        }
    }

    #[must_use]
    pub fn expense(id: u64, description: &str, amount: i64, category: Category) -> Expense {
        Expense {
            id: ExpenseId(id),
            description: description.to_string(),
            amount: Decimal::from(amount),
            category,
        }
    }
}

pub struct AppMother;

impl AppMother {
    /// An app with default settings and no records.
    #[must_use]
    pub fn empty() -> App {
        App::new(AppConfig::default())
    }

    /// An app whose store holds the given drafts, in order.
    #[must_use]
    pub fn with_records(drafts: Vec<ExpenseDraft>) -> App {
        let mut app = Self::empty();
        for draft in drafts {
            app.store.append(draft);
        }
        app
    }

    /// The `[{A,1,Fruits}, {B,2,Other}]` store used across the suite.
    #[must_use]
    pub fn fruit_and_other() -> App {
        Self::with_records(vec![
            ExpenseMother::draft("A", 1, Category::Fruits),
            ExpenseMother::draft("B", 2, Category::Other),
        ])
    }
}

// ============================================================================
// Fixtures
// ============================================================================

#[fixture]
pub fn test_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(100, 30)).expect("terminal creation should succeed")
}

#[fixture]
pub fn test_terminal_80x24() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).expect("terminal creation should succeed")
}

// ============================================================================
// Buffer Helpers
// ============================================================================

/// Flattens a rendered buffer into newline-separated rows.
#[must_use]
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut result = String::new();
    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            result.push_str(buffer[(x, y)].symbol());
        }
        if y + 1 < area.y + area.height {
            result.push('\n');
        }
    }
    result
}
