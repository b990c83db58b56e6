//! WidgetError for the account form controller

use super::{FormError, SnapshotError};

/// Error type for widget lifecycle and event handling.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    /// An event or query arrived before `init`.
    #[error("widget is not initialized")]
    NotInitialized,

    /// `init` was called on a live widget.
    #[error("widget is already initialized")]
    AlreadyInitialized,

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Snapshot(#[from] SnapshotError),
}
