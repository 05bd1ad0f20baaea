use sea_orm::{DbErr, SqlErr};
use tracing::error;

use crate::domain::common::entities::app_errors::CoreError;

pub mod crypto;
pub mod db;
pub mod health;
pub mod mailer;
pub mod query;
pub mod tour;
pub mod user;

/// Shared DbErr translation for the repositories. Unique-key violations
/// surface as conflicts and failed query builds as invalid queries, so
/// the api layer can map them to 409 and 400 instead of a blanket 500.
pub(crate) fn map_db_err(context: &str, err: DbErr) -> CoreError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return CoreError::Conflict(detail);
    }

    error!("{context}: {err}");
    match err {
        DbErr::Query(_) => CoreError::InvalidQuery(err.to_string()),
        _ => CoreError::InternalServerError,
    }
}
