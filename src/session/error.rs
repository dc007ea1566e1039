use thiserror::Error;

/// The session's last-error signal.
///
/// All variants are non-fatal and locally recoverable: each leaves prior
/// committed state intact, and the only recovery action is dismissal —
/// the failed intent is dropped, never replayed. While a signal is set
/// the view suppresses normal rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    /// Malformed intent arguments: missing item or an id the catalog
    /// does not know.
    #[error("Invalid item operation")]
    InvalidOperation,

    /// Unexpected failure while applying an otherwise-valid step.
    #[error("Error updating cart")]
    UpdateFailure,

    /// Unexpected failure while removing a cart line.
    #[error("Error removing item")]
    RemovalFailure,

    /// Unexpected failure while starting a new order.
    #[error("Error creating new order")]
    NewOrderFailure,
}

impl SessionError {
    /// Stable category string for logs and diagnostics.
    pub fn code(&self) -> &'static str {
        match self {
            SessionError::InvalidOperation => "invalid-operation",
            SessionError::UpdateFailure => "update-failure",
            SessionError::RemovalFailure => "removal-failure",
            SessionError::NewOrderFailure => "new-order-failure",
        }
    }
}
