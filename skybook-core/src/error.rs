use crate::repository::StoreError;

/// Domain-level failure taxonomy. The API layer maps each variant onto an
/// HTTP status; nothing here knows about transport.
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    /// Payload failed schema validation; the message lists the violated fields.
    #[error("{0}")]
    Validation(String),

    /// Well-formed request that cannot be honored (bad fare type, missing
    /// search criteria, missing refresh token).
    #[error("{0}")]
    BadRequest(String),

    /// Duplicate unique field at sign-up.
    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    /// Bad credentials or an invalid/expired/missing token.
    #[error("{0}")]
    Unauthorized(String),

    /// Role mismatch.
    #[error("{0}")]
    Forbidden(String),

    #[error("store failure: {0}")]
    Store(#[from] StoreError),
}

impl DomainError {
    pub fn not_found(what: &str) -> Self {
        Self::NotFound(format!("{} not found", what))
    }
}
