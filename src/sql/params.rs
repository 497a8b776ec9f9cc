//! Values that can be bound to a query on any supported backend.

use sqlx::any::{Any, AnyArguments};
use sqlx::query::{Query, QueryAs};

/// A nullable, typed column value. Nulls keep their type so PostgreSQL can infer parameter types.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BindValue {
    Int(Option<i64>),
    Text(Option<String>),
}

/// Column/value pairs for INSERT and UPDATE, in statement order.
pub type Assignments = Vec<(&'static str, BindValue)>;

impl BindValue {
    pub fn text(s: impl Into<String>) -> Self {
        BindValue::Text(Some(s.into()))
    }

    pub fn int(n: i64) -> Self {
        BindValue::Int(Some(n))
    }

    pub fn bind_to<'q, O>(
        &self,
        query: QueryAs<'q, Any, O, AnyArguments<'q>>,
    ) -> QueryAs<'q, Any, O, AnyArguments<'q>> {
        match self {
            BindValue::Int(v) => query.bind(*v),
            BindValue::Text(v) => query.bind(v.clone()),
        }
    }

    pub fn bind_query<'q>(&self, query: Query<'q, Any, AnyArguments<'q>>) -> Query<'q, Any, AnyArguments<'q>> {
        match self {
            BindValue::Int(v) => query.bind(*v),
            BindValue::Text(v) => query.bind(v.clone()),
        }
    }
}

impl From<i64> for BindValue {
    fn from(n: i64) -> Self {
        BindValue::int(n)
    }
}
