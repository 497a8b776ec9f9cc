//! Entity schemas: stored records, their create/update/read projections and pagination.

mod hero;
mod pagination;
mod team;

pub use hero::{HeroCreate, HeroRead, HeroReadWithTeam, HeroUpdate, NewHero};
pub use pagination::{Pagination, DEFAULT_LIMIT, MAX_LIMIT};
pub use team::{NewTeam, TeamCreate, TeamRead, TeamReadWithHeroes, TeamUpdate};

use crate::error::FieldError;
use crate::sql::Assignments;
use serde::{Deserialize, Deserializer};
use sqlx::any::AnyRow;
use sqlx::FromRow;

/// A row type backed by one table. `COLUMNS` lists every column, primary key `id` first.
pub trait Record: for<'r> FromRow<'r, AnyRow> + Send + Unpin {
    const TABLE: &'static str;
    const COLUMNS: &'static [&'static str];
    /// Human label used in not-found details ("Hero not found").
    const LABEL: &'static str;
}

/// Validated input for an insert: column/value pairs, `id` excluded.
pub trait Insertable {
    type Target: Record;

    fn assignments(&self) -> Assignments;
}

/// Keeps a present key distinguishable from an absent one: with `#[serde(default)]` an
/// absent key is `None`, `null` is `Some(None)` and a value is `Some(Some(v))`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A required string on create: missing or null is reported, never defaulted.
fn require(field: &str, value: Option<String>, errors: &mut Vec<FieldError>) -> String {
    match value {
        Some(v) => v,
        None => {
            errors.push(FieldError::missing(&["body", field]));
            String::new()
        }
    }
}

/// A required string on update: may be absent, may not be null.
fn reject_null<T>(field: &str, value: &Option<Option<T>>, errors: &mut Vec<FieldError>) {
    if let Some(None) = value {
        errors.push(FieldError::new(
            &["body", field],
            "Input should not be null",
            "null",
        ));
    }
}
