//! Error types for remote calls and dashboard operations.

use thiserror::Error;

use crate::model::FoodId;

/// A remote call against the foods API failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The request body could not be serialized.
    #[error("Serialization error: {0}")]
    Encode(String),

    /// The response body did not match the expected shape.
    #[error("Parse error: {0}")]
    Decode(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Errors returned by [`crate::DashboardController`] operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DashboardError {
    #[error(transparent)]
    Remote(#[from] ApiError),

    /// Another update or delete for this food has not settled yet.
    #[error("Food #{0} already has a request in flight")]
    Busy(FoodId),

    #[error("No food is being edited")]
    NotEditing,
}

pub type DashboardResult<T> = Result<T, DashboardError>;
