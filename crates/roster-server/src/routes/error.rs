//! HTTP error mapping
//!
//! Every failure is a 400. Only missing parameters are described to the
//! client; service error kinds are logged and replaced by a fixed message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::application::ServiceError;

/// Body of every 400 caused by a failed business operation
pub const GENERIC_ERROR_MESSAGE: &str = "Unable to process request.";

#[derive(Debug)]
pub enum ApiError {
    /// Required fields, in declaration order
    MissingParameters(Vec<&'static str>),
    Service(ServiceError),
}

impl ApiError {
    /// Collect the names flagged as missing from `(name, missing)` pairs
    pub fn missing<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, bool)>,
    {
        Self::MissingParameters(
            fields
                .into_iter()
                .filter(|(_, missing)| *missing)
                .map(|(name, _)| name)
                .collect(),
        )
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self {
            ApiError::MissingParameters(names) => format!(
                "Missing parameter{}: {}",
                if names.len() > 1 { "s" } else { "" },
                names.join(", ")
            ),
            ApiError::Service(err) => {
                tracing::warn!(kind = ?err, "Request failed: {}", err);
                GENERIC_ERROR_MESSAGE.to_string()
            }
        };

        (StatusCode::BAD_REQUEST, body).into_response()
    }
}
