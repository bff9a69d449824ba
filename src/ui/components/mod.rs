//! Reusable overlay components.
//!
//! - [`toast`] - transient status banner shown over the main layout

pub mod toast;

pub use toast::render_toast;
