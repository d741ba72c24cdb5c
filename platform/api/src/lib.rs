use async_graphql::{Error, ErrorExtensions};
use thiserror::Error;

/// Shared GraphQL result type.
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("bad request: {0}")]
    InvalidInput(String),
}

impl ApiError {
    fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound(_) => "NOT_FOUND",
            ApiError::InvalidInput(_) => "INVALID_INPUT",
        }
    }

    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound(what.into())
    }

    pub fn invalid_input(message: impl ToString) -> Self {
        Self::InvalidInput(message.to_string())
    }
}

impl ErrorExtensions for ApiError {
    fn extend(&self) -> Error {
        tracing::debug!(code = self.code(), error = %self, "graphql request rejected");
        let mut err = Error::new(self.to_string());
        err = err.extend_with(|_err, e| {
            e.set("code", self.code());
        });
        if let ApiError::InvalidInput(_) = self {
            err = err.extend_with(|_err, e| {
                e.set("type", "BAD_REQUEST");
            });
        }
        err
    }
}

/// Lift an [`ApiResult`] into the resolver result type, attaching error codes.
pub fn graphql_result<T>(result: ApiResult<T>) -> async_graphql::Result<T> {
    result.map_err(|err| err.extend())
}
