use axum::Json;
use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;
use wayfarer_core::domain::common::entities::app_errors::CoreError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    InternalServerError(String),
}

/// Client faults carry `status: "fail"`, server faults `status: "error"`.
#[derive(Debug, Serialize)]
struct ErrorEnvelope {
    status: &'static str,
    message: String,
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let envelope = ErrorEnvelope {
            status: if status.is_client_error() { "fail" } else { "error" },
            message: self.to_string(),
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::NotFound | CoreError::PageNotFound => ApiError::NotFound(message),
            CoreError::InvalidQuery(_)
            | CoreError::Validation(_)
            | CoreError::ResetTokenInvalid => ApiError::BadRequest(message),
            CoreError::Conflict(_) => ApiError::Conflict(message),
            CoreError::InvalidCredentials => {
                ApiError::Unauthorized("incorrect email or password".to_string())
            }
            CoreError::InvalidToken | CoreError::TokenExpired | CoreError::Unauthorized(_) => {
                ApiError::Unauthorized(message)
            }
            CoreError::Forbidden => ApiError::Forbidden(message),
            CoreError::EmailDelivery
            | CoreError::ExternalServiceError(_)
            | CoreError::InternalServerError => ApiError::InternalServerError(message),
        }
    }
}

/// Json extractor that also runs the validator rules, turning both
/// deserialization and validation failures into 400s.
pub struct ValidateJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidateJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection: JsonRejection| ApiError::BadRequest(rejection.body_text()))?;

        value
            .validate()
            .map_err(|errors| ApiError::BadRequest(flatten_validation_errors(&errors)))?;

        Ok(ValidateJson(value))
    }
}

fn flatten_validation_errors(errors: &validator::ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|message| message.to_string())
                    .unwrap_or_else(|| format!("{field} is invalid"))
            })
        })
        .collect();
    messages.sort();
    messages.join(". ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_the_documented_status_codes() {
        let cases = [
            (CoreError::NotFound, StatusCode::NOT_FOUND),
            (CoreError::PageNotFound, StatusCode::NOT_FOUND),
            (
                CoreError::InvalidQuery("bad column".into()),
                StatusCode::BAD_REQUEST,
            ),
            (
                CoreError::Conflict("duplicate key".into()),
                StatusCode::CONFLICT,
            ),
            (CoreError::Validation("bad".into()), StatusCode::BAD_REQUEST),
            (CoreError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (CoreError::InvalidToken, StatusCode::UNAUTHORIZED),
            (CoreError::TokenExpired, StatusCode::UNAUTHORIZED),
            (CoreError::ResetTokenInvalid, StatusCode::BAD_REQUEST),
            (CoreError::Forbidden, StatusCode::FORBIDDEN),
            (CoreError::EmailDelivery, StatusCode::INTERNAL_SERVER_ERROR),
            (
                CoreError::InternalServerError,
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status_code(), expected);
        }
    }

    #[test]
    fn client_faults_are_fail_and_server_faults_are_error() {
        let fail = ApiError::NotFound("missing".into());
        assert!(fail.status_code().is_client_error());

        let error = ApiError::InternalServerError("boom".into());
        assert!(error.status_code().is_server_error());
    }

    #[test]
    fn wrong_credentials_never_leak_which_part_was_wrong() {
        let err = ApiError::from(CoreError::InvalidCredentials);
        assert_eq!(
            err,
            ApiError::Unauthorized("incorrect email or password".to_string())
        );
    }
}
