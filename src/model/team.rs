use super::{present, reject_null, require, HeroRead, Insertable, Record};
use crate::error::AppError;
use crate::sql::{Assignments, BindValue};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct TeamRead {
    pub id: i64,
    pub name: String,
    pub headquarters: String,
}

impl Record for TeamRead {
    const TABLE: &'static str = "team";
    const COLUMNS: &'static [&'static str] = &["id", "name", "headquarters"];
    const LABEL: &'static str = "Team";
}

/// Team with its members as plain hero projections, ordered by hero id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TeamReadWithHeroes {
    #[serde(flatten)]
    pub team: TeamRead,
    pub heroes: Vec<HeroRead>,
}

#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct TeamCreate {
    pub name: Option<String>,
    pub headquarters: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NewTeam {
    pub name: String,
    pub headquarters: String,
}

impl TeamCreate {
    pub fn validate(self) -> Result<NewTeam, AppError> {
        let mut errors = Vec::new();
        let name = require("name", self.name, &mut errors);
        let headquarters = require("headquarters", self.headquarters, &mut errors);
        if !errors.is_empty() {
            return Err(AppError::Validation(errors));
        }
        Ok(NewTeam { name, headquarters })
    }
}

impl Insertable for NewTeam {
    type Target = TeamRead;

    fn assignments(&self) -> Assignments {
        vec![
            ("name", BindValue::text(self.name.clone())),
            ("headquarters", BindValue::text(self.headquarters.clone())),
        ]
    }
}

/// Partial update. Both columns are required, so `null` is rejected rather than applied.
#[derive(Clone, Debug, Default, Deserialize, ToSchema)]
pub struct TeamUpdate {
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    #[schema(value_type = Option<String>)]
    pub headquarters: Option<Option<String>>,
}

impl TeamUpdate {
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();
        reject_null("name", &self.name, &mut errors);
        reject_null("headquarters", &self.headquarters, &mut errors);
        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }

    pub fn assignments(&self) -> Assignments {
        let mut out = Assignments::new();
        if let Some(name) = &self.name {
            out.push(("name", BindValue::Text(name.clone())));
        }
        if let Some(headquarters) = &self.headquarters {
            out.push(("headquarters", BindValue::Text(headquarters.clone())));
        }
        out
    }
}
