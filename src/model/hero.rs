use super::{present, reject_null, require, Insertable, Record, TeamRead};
use crate::error::{AppError, FieldError};
use crate::sql::{Assignments, BindValue};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Stored hero row and its plain read projection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct HeroRead {
    pub id: i64,
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub team_id: Option<i64>,
}

impl Record for HeroRead {
    const TABLE: &'static str = "hero";
    const COLUMNS: &'static [&'static str] = &["id", "name", "secret_name", "age", "team_id"];
    const LABEL: &'static str = "Hero";
}

/// Hero with its team embedded (the team does not embed its heroes).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct HeroReadWithTeam {
    #[serde(flatten)]
    pub hero: HeroRead,
    pub team: Option<TeamRead>,
}

/// Create payload as received. Required fields are optional here so that every
/// missing one can be reported at once by [`HeroCreate::validate`].
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct HeroCreate {
    pub name: Option<String>,
    pub secret_name: Option<String>,
    pub age: Option<i64>,
    pub team_id: Option<i64>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewHero {
    pub name: String,
    pub secret_name: String,
    pub age: Option<i64>,
    pub team_id: Option<i64>,
}

impl HeroCreate {
    pub fn validate(self) -> Result<NewHero, AppError> {
        let mut errors = Vec::new();
        let name = require("name", self.name, &mut errors);
        let secret_name = require("secret_name", self.secret_name, &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(NewHero {
            name,
            secret_name,
            age: self.age,
            team_id: self.team_id,
        })
    }
}

impl Insertable for NewHero {
    type Target = HeroRead;

    fn assignments(&self) -> Assignments {
        vec![
            ("name", BindValue::text(self.name.clone())),
            ("secret_name", BindValue::text(self.secret_name.clone())),
            ("age", BindValue::Int(self.age)),
            ("team_id", BindValue::Int(self.team_id)),
        ]
    }
}

/// Partial update. Absent keys are left alone; `null` clears `age` or `team_id`.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct HeroUpdate {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub secret_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub age: Option<Option<i64>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<i64>)]
    pub team_id: Option<Option<i64>>,
}

impl HeroUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors: Vec<FieldError> = Vec::new();
        reject_null("name", &self.name, &mut errors);
        reject_null("secret_name", &self.secret_name, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    /// Columns to overwrite, one entry per key present in the payload.
    pub fn assignments(&self) -> Assignments {
        let mut out = Assignments::new();
        if let Some(name) = &self.name {
            out.push(("name", BindValue::Text(name.clone())));
        }
        if let Some(secret_name) = &self.secret_name {
            out.push(("secret_name", BindValue::Text(secret_name.clone())));
        }
        if let Some(age) = self.age {
            out.push(("age", BindValue::Int(age)));
        }
        if let Some(team_id) = self.team_id {
            out.push(("team_id", BindValue::Int(team_id)));
        }
        out
    }
}
