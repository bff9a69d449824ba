//! State management for the expense tracker.
//!
//! The state is split into focused pieces:
//!
//! - [`RecordStore`] - the ordered list of recorded expenses
//! - [`EntryForm`] - field values, inline errors, and the edit target
//! - [`Notification`] - the transient banner and its hide timer
//! - [`UiState`] - focus and table selection
//! - [`AppConfig`] - settings read at startup
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                        App                           │
//! ├─────────────┬─────────────┬──────────────┬───────────┤
//! │ RecordStore │  EntryForm  │ Notification │  UiState  │
//! │  - records  │  - fields   │  - message   │  - focus  │
//! │  - next id  │  - errors   │  - timer     │  - row    │
//! │             │  - mode     │              │           │
//! └─────────────┴─────────────┴──────────────┴───────────┘
//! ```
//!
//! Every key press becomes an [`AppCommand`](crate::commands::AppCommand)
//! and [`App::execute_command`] is the single place where state changes.

use tokio::sync::mpsc;

use crate::domain::Category;

// ============================================================================
// Module Declarations
// ============================================================================

mod app_lifecycle;

pub mod config;
pub mod filter;
pub mod form;
pub mod notification;
pub mod store;
pub mod ui_state;

// ============================================================================
// Re-exports
// ============================================================================

pub use config::AppConfig;
pub use filter::{filter_label, filtered_view};
pub use form::{EntryForm, FormMode};
pub use notification::Notification;
pub use store::RecordStore;
pub use ui_state::{Focus, UiState};

// ============================================================================
// App Message Types
// ============================================================================

/// Messages sent from background tasks to the main loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMessage {
    /// The notification timer of the given generation elapsed.
    NotificationExpired(u64),
}

// ============================================================================
// Main App State
// ============================================================================

/// The main application state container.
#[derive(Debug)]
pub struct App {
    /// Every expense recorded in this session.
    pub store: RecordStore,

    /// Category shown in the table; `None` shows every record.
    pub filter: Option<Category>,

    /// The entry form.
    pub form: EntryForm,

    /// The deletion banner.
    pub notification: Notification,

    /// Focus and table selection.
    pub ui: UiState,

    /// Settings loaded at startup.
    pub config: AppConfig,

    /// Whether the application should exit.
    pub exit: bool,

    // NOTE: Channel sends use `let _ = tx.send(...)`. Receivers may be
    // dropped during shutdown and those errors are not propagated.
    /// Sender for app messages (cloned for background tasks).
    pub(crate) message_tx: mpsc::UnboundedSender<AppMessage>,

    /// Receiver for app messages.
    pub(crate) message_rx: mpsc::UnboundedReceiver<AppMessage>,
}

// ============================================================================
// Implementation Modules
// ============================================================================

// Command execution, input handling, record operations
mod app_commands;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests;
