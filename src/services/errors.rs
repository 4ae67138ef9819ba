use thiserror::Error;

use crate::host::GeolocationError;

/// Generic error type used by service layer functions.
///
/// Every variant is terminal to the single user action that raised it; no
/// failure here corrupts catalog or draft state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The visitor must sign in before performing the operation.
    #[error("sign in to add events")]
    Unauthorized,
    /// Requested resource was not found.
    #[error("not found")]
    NotFound,
    /// Submitted data failed validation; the message names the unmet
    /// requirement(s).
    #[error("{0}")]
    Validation(String),
    /// The host geolocation capability failed or is absent.
    #[error(transparent)]
    Geolocation(#[from] GeolocationError),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
