//! Error types for modalq
//!
//! Centralized error handling using thiserror.
//!
//! The only fatal condition in this crate is a construction-time one: an
//! item was built against a host that cannot present an exclusive modal
//! surface. Everything else the scheduler encounters (duplicate
//! submission, removal of an absent id, dismissal of an item that is not
//! showing) is an expected race and resolves to a silent no-op.

use thiserror::Error;

/// All error types that can occur in modalq
#[derive(Debug, Error)]
pub enum ModalqError {
    /// The host cannot present an exclusive modal surface
    #[error("host cannot present an exclusive modal surface: {0}")]
    NonModalHost(String),
}

/// Result type alias for modalq operations
pub type Result<T> = std::result::Result<T, ModalqError>;
