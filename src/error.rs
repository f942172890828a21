//! Error types for widget construction and rendering.
//!
//! Provides unified error handling for the whole crate. Unrecognized input
//! samples and bubbled events are deliberately not represented here: they
//! are defined as pass-through no-ops and must never raise.

use thiserror::Error;

/// Errors that can occur while building or driving a widget.
#[derive(Error, Debug)]
pub enum WidgetError {
    /// Malformed construction input (non-positive dimensions, empty or
    /// malformed layout). Raised before any widget state exists.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The render host rejected a committed visual tree. Fatal to the
    /// owning component instance; never retried.
    #[error("render commit rejected: {0}")]
    RenderCommitFailure(String),
}

/// Result type alias for widget operations.
pub type WidgetResult<T> = Result<T, WidgetError>;
