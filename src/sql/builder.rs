//! Builds parameterized SELECT, INSERT, UPDATE, DELETE and relationship joins from [`Record`] metadata.
//! Placeholders are `$n`, which both SQLite and PostgreSQL accept.

use super::params::{Assignments, BindValue};
use crate::model::{HeroRead, Pagination, Record, TeamRead};

/// Column-name prefixes for the joined side of a relationship read.
pub const TEAM_PREFIX: &str = "team__";
pub const HERO_PREFIX: &str = "hero__";

/// Quote identifier (safe: only from entity schemas).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<BindValue>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: BindValue) -> usize {
        self.params.push(v);
        self.params.len()
    }
}

fn column_list<R: Record>() -> String {
    R::COLUMNS.iter().map(|c| quoted(c)).collect::<Vec<_>>().join(", ")
}

/// `alias.col AS prefixcol` for every column, so joined rows do not collide on names.
fn aliased_columns<R: Record>(alias: &str, prefix: &str) -> String {
    R::COLUMNS
        .iter()
        .map(|c| format!("{}.{} AS {}", alias, quoted(c), quoted(&format!("{}{}", prefix, c))))
        .collect::<Vec<_>>()
        .join(", ")
}

fn own_columns<R: Record>(alias: &str) -> String {
    R::COLUMNS
        .iter()
        .map(|c| format!("{}.{} AS {}", alias, quoted(c), quoted(c)))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT by primary key.
pub fn select_by_id<R: Record>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {} FROM {} WHERE \"id\" = ${}",
        column_list::<R>(),
        quoted(R::TABLE),
        n
    );
    q
}

/// SELECT a page in primary-key order.
pub fn select_list<R: Record>(page: Pagination) -> QueryBuf {
    let mut q = QueryBuf::new();
    let limit = q.push_param(page.limit.into());
    let offset = q.push_param(page.offset.into());
    q.sql = format!(
        "SELECT {} FROM {} ORDER BY \"id\" LIMIT ${} OFFSET ${}",
        column_list::<R>(),
        quoted(R::TABLE),
        limit,
        offset
    );
    q
}

/// INSERT the given columns; the store generates `id`. Returns the full row.
pub fn insert<R: Record>(fields: &Assignments) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::with_capacity(fields.len());
    let mut placeholders = Vec::with_capacity(fields.len());
    for (col, val) in fields {
        let n = q.push_param(val.clone());
        cols.push(quoted(col));
        placeholders.push(format!("${}", n));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(R::TABLE),
        cols.join(", "),
        placeholders.join(", "),
        column_list::<R>()
    );
    q
}

/// UPDATE only the given columns of one row. Returns the full row, or nothing when the id is unknown.
/// Caller must not pass an empty field list.
pub fn update<R: Record>(id: i64, fields: &Assignments) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut sets = Vec::with_capacity(fields.len());
    for (col, val) in fields {
        let n = q.push_param(val.clone());
        sets.push(format!("{} = ${}", quoted(col), n));
    }
    let id_n = q.push_param(id.into());
    q.sql = format!(
        "UPDATE {} SET {} WHERE \"id\" = ${} RETURNING {}",
        quoted(R::TABLE),
        sets.join(", "),
        id_n,
        column_list::<R>()
    );
    q
}

/// DELETE by primary key, returning the deleted id.
pub fn delete<R: Record>(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "DELETE FROM {} WHERE \"id\" = ${} RETURNING \"id\"",
        quoted(R::TABLE),
        n
    );
    q
}

/// One hero LEFT JOIN its team. Team columns carry [`TEAM_PREFIX`].
pub fn select_hero_with_team(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {}, {} FROM {} h LEFT JOIN {} t ON t.\"id\" = h.\"team_id\" WHERE h.\"id\" = ${}",
        own_columns::<HeroRead>("h"),
        aliased_columns::<TeamRead>("t", TEAM_PREFIX),
        quoted(HeroRead::TABLE),
        quoted(TeamRead::TABLE),
        n
    );
    q
}

/// One team LEFT JOIN its heroes, one row per hero (a single all-null hero row when there are none).
/// Hero columns carry [`HERO_PREFIX`].
pub fn select_team_with_heroes(id: i64) -> QueryBuf {
    let mut q = QueryBuf::new();
    let n = q.push_param(id.into());
    q.sql = format!(
        "SELECT {}, {} FROM {} t LEFT JOIN {} h ON h.\"team_id\" = t.\"id\" WHERE t.\"id\" = ${} ORDER BY h.\"id\"",
        own_columns::<TeamRead>("t"),
        aliased_columns::<HeroRead>("h", HERO_PREFIX),
        quoted(TeamRead::TABLE),
        quoted(HeroRead::TABLE),
        n
    );
    q
}
