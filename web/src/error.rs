use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use validator::ValidationErrors;

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    BadRequest(String),
    Unauthorized,
    InternalServerError(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Unauthorized => write!(f, "Unauthorized"),
            Self::InternalServerError(msg) => write!(f, "Internal server error: {}", msg),
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            Self::Storage(StorageError::NotFound | StorageError::EventNotFound(_)) => {
                StatusCode::NOT_FOUND
            }
            Self::Storage(
                StorageError::EventFull(_)
                | StorageError::AlreadyRegistered(_)
                | StorageError::ConstraintViolation(_),
            ) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match &self {
            // Domain outcomes carry their own user-facing message, which
            // always names the offending event.
            Self::Storage(
                e @ (StorageError::EventNotFound(_)
                | StorageError::EventFull(_)
                | StorageError::AlreadyRegistered(_)
                | StorageError::ConstraintViolation(_)),
            ) => {
                json!({
                    "success": false,
                    "error": e.to_string()
                })
            }
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "success": false,
                    "error": "Resource not found"
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "success": false,
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let field_errors: Vec<String> = errors
                    .field_errors()
                    .iter()
                    .flat_map(|(field, errors)| {
                        errors.iter().map(move |e| {
                            format!(
                                "{}: {}",
                                field,
                                e.message
                                    .as_ref()
                                    .map(|m| m.to_string())
                                    .unwrap_or_else(|| e.code.to_string())
                            )
                        })
                    })
                    .collect();

                json!({
                    "success": false,
                    "error": "Validation failed",
                    "details": field_errors
                })
            }
            Self::BadRequest(msg) => {
                json!({
                    "success": false,
                    "error": msg
                })
            }
            Self::Unauthorized => {
                json!({
                    "success": false,
                    "error": "Unauthorized"
                })
            }
            Self::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                json!({
                    "success": false,
                    "error": "An internal error occurred"
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use uuid::Uuid;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn capacity_errors_map_to_conflict_and_name_the_event() {
        let response =
            WebError::Storage(StorageError::EventFull("AI Workshop".into())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("AI Workshop"));
    }

    #[tokio::test]
    async fn duplicate_registrations_map_to_conflict() {
        let response =
            WebError::Storage(StorageError::AlreadyRegistered("Code Golf".into())).into_response();
        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn missing_events_map_to_not_found() {
        let response =
            WebError::Storage(StorageError::EventNotFound(Uuid::nil())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn internal_errors_never_leak_detail() {
        let response = WebError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut))
            .into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["error"], "An internal error occurred");
    }

    #[tokio::test]
    async fn bad_requests_echo_their_message() {
        let response = WebError::BadRequest("Invalid event id: zzz".into()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "Invalid event id: zzz");
    }
}
