//! Application constants for the expense tracker.
//!
//! UI dimensions, timing, and the default validation and presentation
//! settings that [`AppConfig`](crate::state::AppConfig) falls back to.

use std::time::Duration;

use rust_decimal::Decimal;

// ============================================================================
// Timing
// ============================================================================

/// Interval between redraws of the main loop.
pub const TICK_RATE: Duration = Duration::from_millis(100);

/// Default display time of the deletion banner, in seconds.
pub const DEFAULT_NOTIFICATION_SECS: u64 = 3;

// ============================================================================
// Validation and Presentation Defaults
// ============================================================================

/// Default inclusive upper bound for an expense amount.
pub const MAX_AMOUNT: Decimal = Decimal::TEN;

/// Default currency symbol shown in the table.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Banner shown after a record is deleted.
pub const DELETED_MESSAGE: &str = "[+] Item deleted successfully!";

// ============================================================================
// UI Dimension Constants
// ============================================================================

/// Height of the application header area (in rows).
pub const HEADER_HEIGHT: u16 = 3;

/// Height of one bordered form input (in rows).
pub const FIELD_HEIGHT: u16 = 3;

/// Height of the inline error line below each form input (in rows).
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Height of the filter bar above the table (in rows).
pub const FILTER_BAR_HEIGHT: u16 = 3;

/// Height of the footer area (in rows).
pub const FOOTER_HEIGHT: u16 = 1;

/// Width of the entry form column (in columns).
pub const FORM_WIDTH: u16 = 40;
