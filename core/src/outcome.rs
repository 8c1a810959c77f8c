//! The result-or-error pair every `MovieApi` call returns.

use crate::error::ApiError;

/// Outcome of one API call: exactly one of `data` and `error` is set.
///
/// Callers that do not care about failures can read `data` and move on;
/// `into_result` recovers a `Result` for `?`-style handling.
#[derive(Debug)]
pub struct ApiOutcome<T> {
    pub data: Option<T>,
    pub error: Option<ApiError>,
}

impl<T> ApiOutcome<T> {
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn into_result(self) -> Result<T, ApiError> {
        match (self.data, self.error) {
            (_, Some(error)) => Err(error),
            (Some(data), None) => Ok(data),
            // Unreachable through the constructors; fields are public though.
            (None, None) => Err(ApiError::Deserialization("empty outcome".to_string())),
        }
    }
}

impl<T> From<Result<T, ApiError>> for ApiOutcome<T> {
    fn from(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(data) => Self::ok(data),
            Err(error) => Self::err(error),
        }
    }
}

impl<T> From<ApiOutcome<T>> for Result<T, ApiError> {
    fn from(outcome: ApiOutcome<T>) -> Self {
        outcome.into_result()
    }
}
