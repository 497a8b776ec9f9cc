use crate::error::{AppError, FieldError};

pub const DEFAULT_LIMIT: i64 = 100;
pub const MAX_LIMIT: i64 = 100;

/// Validated offset/limit window for list reads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    pub offset: i64,
    pub limit: i64,
}

impl Default for Pagination {
    fn default() -> Self {
        Pagination {
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// `offset` must be >= 0 and `limit` within `0..=100`. Out-of-range values are errors, never clamped.
    pub fn new(offset: Option<i64>, limit: Option<i64>) -> Result<Self, AppError> {
        let offset = offset.unwrap_or(0);
        let limit = limit.unwrap_or(DEFAULT_LIMIT);
        let mut errors = Vec::new();
        if offset < 0 {
            errors.push(FieldError::new(
                &["query", "offset"],
                "Input should be greater than or equal to 0",
                "greater_than_equal",
            ));
        }
        if limit < 0 {
            errors.push(FieldError::new(
                &["query", "limit"],
                "Input should be greater than or equal to 0",
                "greater_than_equal",
            ));
        } else if limit > MAX_LIMIT {
            errors.push(FieldError::new(
                &["query", "limit"],
                format!("Input should be less than or equal to {}", MAX_LIMIT),
                "less_than_equal",
            ));
        }
        if errors.is_empty() {
            Ok(Pagination { offset, limit })
        } else {
            Err(AppError::Validation(errors))
        }
    }
}
