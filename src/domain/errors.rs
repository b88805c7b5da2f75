//! Domain errors. Used by ports, adapters and use cases.
//!
//! Adapters map infrastructure errors into these. None of them is fatal: the
//! ports collapse them into "no result" and the search flow turns that into an alert.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Network/connectivity failure before a response arrived.
    #[error("Transport error: {0}")]
    Transport(String),

    /// The service answered with a non-success status.
    #[error("Service error: {0}")]
    Service(String),

    /// The service answered successfully but had nothing for the request.
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    /// Response body did not have the expected shape.
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("UI error: {0}")]
    Ui(String),
}
