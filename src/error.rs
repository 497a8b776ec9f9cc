//! Typed errors and HTTP mapping.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{var}: {reason}")]
    Invalid { var: &'static str, reason: String },
    #[error("unsupported database url '{0}': expected sqlite: or postgres:")]
    UnsupportedDatabase(String),
}

/// Failures surfaced by the storage gateway.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),
}

impl From<sqlx::Error> for StoreError {
    fn from(e: sqlx::Error) -> Self {
        use sqlx::error::ErrorKind;
        match &e {
            sqlx::Error::Database(db) => match db.kind() {
                ErrorKind::ForeignKeyViolation
                | ErrorKind::UniqueViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => StoreError::ConstraintViolation(db.message().to_string()),
                _ => StoreError::Unavailable(e),
            },
            _ => StoreError::Unavailable(e),
        }
    }
}

/// One field-level validation problem, shaped like `{"loc": [..], "msg": .., "type": ..}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        FieldError {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    pub fn missing(loc: &[&str]) -> Self {
        FieldError::new(loc, "Field required", "missing")
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("validation failed ({} field error(s))", .0.len())]
    Validation(Vec<FieldError>),
    /// Carries the entity label, e.g. `"Hero"`.
    #[error("{0} not found")]
    NotFound(&'static str),
    #[error("constraint violation: {0}")]
    ConstraintViolation(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl AppError {
    pub fn invalid(loc: &[&str], msg: impl Into<String>, kind: &str) -> Self {
        AppError::Validation(vec![FieldError::new(loc, msg, kind)])
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConstraintViolation(_) => StatusCode::CONFLICT,
            AppError::StorageUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::ConstraintViolation(msg) => AppError::ConstraintViolation(msg),
            StoreError::Unavailable(source) => AppError::StorageUnavailable(source.to_string()),
        }
    }
}

/// Error envelope. `detail` is a string for not-found and storage errors, a list for validation errors.
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorBody {
    #[schema(value_type = Object)]
    pub detail: serde_json::Value,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let detail = match self {
            AppError::Validation(errors) => serde_json::to_value(errors).unwrap_or_default(),
            AppError::NotFound(entity) => format!("{} not found", entity).into(),
            AppError::ConstraintViolation(msg) => {
                tracing::warn!(error = %msg, "constraint violation");
                msg.into()
            }
            AppError::StorageUnavailable(msg) => {
                tracing::error!(error = %msg, "storage unavailable");
                "storage unavailable".into()
            }
        };
        (status, Json(ErrorBody { detail })).into_response()
    }
}
