use activities_core::ActivityError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Unified error type for HTTP responses.
///
/// Domain errors map to 404 (unknown activity) or 400 (every other
/// validation failure, conflicts included); anything else is a 500.
/// The body is always `{"detail": "<reason>"}`.
#[derive(Debug)]
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if let Some(e) = self.0.downcast_ref::<ActivityError>() {
            match e {
                ActivityError::ActivityNotFound => StatusCode::NOT_FOUND,
                ActivityError::AlreadySignedUp
                | ActivityError::CapacityReached
                | ActivityError::InvalidEmail
                | ActivityError::WrongDomain
                | ActivityError::EnrolledElsewhere
                | ActivityError::ActivityFull => StatusCode::BAD_REQUEST,
            }
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = serde_json::json!({ "detail": self.0.to_string() });
        (status, axum::Json(body)).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
