//! Storage gateway: the only component that talks to the store. Every call is one
//! transaction on its own pooled connection, committed before returning.

use crate::error::StoreError;
use crate::model::{
    HeroRead, HeroReadWithTeam, Insertable, Pagination, Record, TeamRead, TeamReadWithHeroes,
};
use crate::sql::{self, Assignments, QueryBuf, HERO_PREFIX, TEAM_PREFIX};
use sqlx::any::AnyRow;
use sqlx::{AnyConnection, AnyPool, FromRow, Row};

#[derive(Clone)]
pub struct Gateway {
    pool: AnyPool,
}

impl Gateway {
    pub fn new(pool: AnyPool) -> Self {
        Gateway { pool }
    }

    pub fn pool(&self) -> &AnyPool {
        &self.pool
    }

    pub async fn get<R: Record>(&self, id: i64) -> Result<Option<R>, StoreError> {
        let q = sql::select_by_id::<R>(id);
        let mut conn = self.pool.acquire().await?;
        fetch_optional(&mut conn, &q).await
    }

    /// Rows in primary-key order.
    pub async fn list<R: Record>(&self, page: Pagination) -> Result<Vec<R>, StoreError> {
        let q = sql::select_list::<R>(page);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query_as::<_, R>(&q.sql);
        for p in &q.params {
            query = p.bind_to(query);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }

    pub async fn insert<N: Insertable>(&self, new: &N) -> Result<N::Target, StoreError> {
        let q = sql::insert::<N::Target>(&new.assignments());
        let mut tx = self.pool.begin().await?;
        let row: Option<N::Target> = fetch_optional(&mut tx, &q).await?;
        tx.commit().await?;
        row.ok_or(StoreError::Unavailable(sqlx::Error::RowNotFound))
    }

    /// Overwrite only the given columns. An empty field list reads the row unchanged.
    pub async fn apply_partial_update<R: Record>(
        &self,
        id: i64,
        fields: &Assignments,
    ) -> Result<Option<R>, StoreError> {
        if fields.is_empty() {
            return self.get(id).await;
        }
        let q = sql::update::<R>(id, fields);
        let mut tx = self.pool.begin().await?;
        let row = fetch_optional(&mut tx, &q).await?;
        tx.commit().await?;
        Ok(row)
    }

    /// Hard delete. Returns whether a row existed.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<bool, StoreError> {
        let q = sql::delete::<R>(id);
        let mut tx = self.pool.begin().await?;
        let row: Option<(i64,)> = fetch_optional(&mut tx, &q).await?;
        tx.commit().await?;
        Ok(row.is_some())
    }

    /// Hero plus its team in one join. A dangling `team_id` reads as no team.
    pub async fn hero_with_team(&self, id: i64) -> Result<Option<HeroReadWithTeam>, StoreError> {
        let q = sql::select_hero_with_team(id);
        let rows = self.fetch_rows(&q).await?;
        let Some(row) = rows.first() else {
            return Ok(None);
        };
        let hero = HeroRead::from_row(row)?;
        let team = match row.try_get::<Option<i64>, _>(format!("{}id", TEAM_PREFIX).as_str())? {
            Some(team_id) => Some(TeamRead {
                id: team_id,
                name: row.try_get(format!("{}name", TEAM_PREFIX).as_str())?,
                headquarters: row.try_get(format!("{}headquarters", TEAM_PREFIX).as_str())?,
            }),
            None => None,
        };
        Ok(Some(HeroReadWithTeam { hero, team }))
    }

    /// Team plus its heroes in one join, heroes ordered by id.
    pub async fn team_with_heroes(&self, id: i64) -> Result<Option<TeamReadWithHeroes>, StoreError> {
        let q = sql::select_team_with_heroes(id);
        let rows = self.fetch_rows(&q).await?;
        let Some(first) = rows.first() else {
            return Ok(None);
        };
        let team = TeamRead::from_row(first)?;
        let mut heroes = Vec::with_capacity(rows.len());
        for row in &rows {
            if let Some(hero) = prefixed_hero(row)? {
                heroes.push(hero);
            }
        }
        Ok(Some(TeamReadWithHeroes { team, heroes }))
    }

    async fn fetch_rows(&self, q: &QueryBuf) -> Result<Vec<AnyRow>, StoreError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut conn = self.pool.acquire().await?;
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = p.bind_query(query);
        }
        Ok(query.fetch_all(&mut *conn).await?)
    }
}

async fn fetch_optional<O>(conn: &mut AnyConnection, q: &QueryBuf) -> Result<Option<O>, StoreError>
where
    O: for<'r> FromRow<'r, AnyRow> + Send + Unpin,
{
    tracing::debug!(sql = %q.sql, params = ?q.params, "query");
    let mut query = sqlx::query_as::<_, O>(&q.sql);
    for p in &q.params {
        query = p.bind_to(query);
    }
    Ok(query.fetch_optional(&mut *conn).await?)
}

fn prefixed_hero(row: &AnyRow) -> Result<Option<HeroRead>, sqlx::Error> {
    let col = |name: &str| format!("{}{}", HERO_PREFIX, name);
    let Some(id) = row.try_get::<Option<i64>, _>(col("id").as_str())? else {
        return Ok(None);
    };
    Ok(Some(HeroRead {
        id,
        name: row.try_get(col("name").as_str())?,
        secret_name: row.try_get(col("secret_name").as_str())?,
        age: row.try_get(col("age").as_str())?,
        team_id: row.try_get(col("team_id").as_str())?,
    }))
}
