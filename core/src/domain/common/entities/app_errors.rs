use thiserror::Error;

/// Error taxonomy surfaced by domain services and repositories. The HTTP
/// layer owns the translation to status codes.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("resource not found")]
    NotFound,

    #[error("this page does not exist")]
    PageNotFound,

    #[error("invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    Validation(String),

    #[error("incorrect email or password")]
    InvalidCredentials,

    #[error("invalid token, please log in again")]
    InvalidToken,

    #[error("your token has expired, please log in again")]
    TokenExpired,

    #[error("token is invalid or has expired")]
    ResetTokenInvalid,

    #[error("{0}")]
    Unauthorized(String),

    #[error("you do not have permission to perform this action")]
    Forbidden,

    #[error("there was an error sending the email, try again later")]
    EmailDelivery,

    #[error("external service error: {0}")]
    ExternalServiceError(String),

    #[error("internal server error")]
    InternalServerError,
}
