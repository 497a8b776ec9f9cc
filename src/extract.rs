//! Request decoding that reports failures as validation errors (422) instead of axum's plain-text rejections.

use crate::error::{AppError, FieldError};
use async_trait::async_trait;
use axum::extract::rejection::{JsonDataError, JsonRejection};
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_path_to_error::Segment;
use std::collections::HashMap;
use std::error::Error as _;

/// JSON body extractor. Malformed JSON, wrong field types and a missing content type become
/// [`AppError::Validation`] located at `["body"]`.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(JsonBody(value)),
            Err(rejection) => Err(rejection_to_error(rejection)),
        }
    }
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    tracing::debug!(error = %rejection.body_text(), "rejected request body");
    let kind = match &rejection {
        JsonRejection::JsonDataError(err) => {
            if let Some(located) = located_data_error(err) {
                return AppError::Validation(vec![located]);
            }
            "value_error"
        }
        JsonRejection::JsonSyntaxError(_) => "json_invalid",
        JsonRejection::MissingJsonContentType(_) => "content_type",
        _ => "body",
    };
    AppError::Validation(vec![FieldError::new(&["body"], rejection.body_text(), kind)])
}

/// Field-level error for a body that parsed as JSON but not as the target type. The
/// offending field path goes into `loc` after `"body"`.
fn located_data_error(err: &JsonDataError) -> Option<FieldError> {
    let located = err
        .source()?
        .source()?
        .downcast_ref::<serde_path_to_error::Error<serde_json::Error>>()?;
    let mut loc = vec!["body".to_string()];
    for segment in located.path().iter() {
        match segment {
            Segment::Seq { index } => loc.push(index.to_string()),
            Segment::Map { key } => loc.push(key.clone()),
            Segment::Enum { variant } => loc.push(variant.clone()),
            _ => {}
        }
    }
    Some(FieldError {
        loc,
        msg: located.inner().to_string(),
        kind: "value_error".to_string(),
    })
}

/// Parse an integer path parameter.
pub fn parse_id(raw: &str, param: &str) -> Result<i64, AppError> {
    raw.trim().parse().map_err(|_| {
        AppError::invalid(
            &["path", param],
            "Input should be a valid integer",
            "int_parsing",
        )
    })
}

/// Optional integer query parameter; present but unparsable is an error, not a default.
pub fn query_int(params: &HashMap<String, String>, key: &str) -> Result<Option<i64>, AppError> {
    match params.get(key) {
        None => Ok(None),
        Some(v) => v.trim().parse().map(Some).map_err(|_| {
            AppError::invalid(
                &["query", key],
                "Input should be a valid integer",
                "int_parsing",
            )
        }),
    }
}
