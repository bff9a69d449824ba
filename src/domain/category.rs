//! Expense categories.
//!
//! The category set is fixed. The "no selection" placeholder of the entry
//! form is modelled as `Option<Category>::None` rather than a variant, so a
//! stored [`Expense`](super::Expense) can never carry it.

use std::fmt;

// ============================================================================
// Category
// ============================================================================

/// The category an expense is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Fruits,
    Vegetables,
    Bread,
    Other,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 4] = [
        Category::Fruits,
        Category::Vegetables,
        Category::Bread,
        Category::Other,
    ];

    /// Returns the human-readable name of the category.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Fruits => "Fruits",
            Self::Vegetables => "Vegetables",
            Self::Bread => "Bread",
            Self::Other => "Other",
        }
    }

    /// Cycles forward through an optional selection, passing through `None`
    /// after the last category.
    ///
    /// Used by both the form's category selector (where `None` is the
    /// placeholder) and the table filter (where `None` means "All").
    #[must_use]
    pub fn cycle_next(selection: Option<Self>) -> Option<Self> {
        match selection {
            None => Some(Self::Fruits),
            Some(Self::Fruits) => Some(Self::Vegetables),
            Some(Self::Vegetables) => Some(Self::Bread),
            Some(Self::Bread) => Some(Self::Other),
            Some(Self::Other) => None,
        }
    }

    /// Cycles backward through an optional selection.
    #[must_use]
    pub fn cycle_prev(selection: Option<Self>) -> Option<Self> {
        match selection {
            None => Some(Self::Other),
            Some(Self::Other) => Some(Self::Bread),
            Some(Self::Bread) => Some(Self::Vegetables),
            Some(Self::Vegetables) => Some(Self::Fruits),
            Some(Self::Fruits) => None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_visits_every_option_and_wraps() {
        let mut selection = None;
        let mut seen = Vec::new();
        for _ in 0..5 {
            selection = Category::cycle_next(selection);
            seen.push(selection);
        }
        assert_eq!(
            seen,
            vec![
                Some(Category::Fruits),
                Some(Category::Vegetables),
                Some(Category::Bread),
                Some(Category::Other),
                None,
            ]
        );

        for option in seen {
            assert_eq!(Category::cycle_prev(Category::cycle_next(option)), option);
        }
    }
}
