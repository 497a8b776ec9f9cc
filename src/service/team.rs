use crate::error::AppError;
use crate::gateway::Gateway;
use crate::model::{Pagination, Record, TeamCreate, TeamRead, TeamReadWithHeroes, TeamUpdate};

pub struct TeamService;

impl TeamService {
    pub async fn create(gw: &Gateway, input: TeamCreate) -> Result<TeamRead, AppError> {
        let new = input.validate()?;
        let team = gw.insert(&new).await?;
        tracing::info!(team_id = team.id, "team created");
        Ok(team)
    }

    pub async fn list(
        gw: &Gateway,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<TeamRead>, AppError> {
        let page = Pagination::new(offset, limit)?;
        Ok(gw.list(page).await?)
    }

    /// One team with its heroes (each without its own team).
    pub async fn get(gw: &Gateway, id: i64) -> Result<TeamReadWithHeroes, AppError> {
        gw.team_with_heroes(id)
            .await?
            .ok_or(AppError::NotFound(TeamRead::LABEL))
    }

    pub async fn update(gw: &Gateway, id: i64, patch: TeamUpdate) -> Result<TeamRead, AppError> {
        patch.validate()?;
        let fields = patch.assignments();
        let team = gw
            .apply_partial_update::<TeamRead>(id, &fields)
            .await?
            .ok_or(AppError::NotFound(TeamRead::LABEL))?;
        tracing::info!(team_id = id, fields = fields.len(), "team updated");
        Ok(team)
    }

    /// Hard delete. Heroes are not cascaded; while any still reference the team the
    /// store rejects the delete as a constraint violation.
    pub async fn delete(gw: &Gateway, id: i64) -> Result<(), AppError> {
        if !gw.delete::<TeamRead>(id).await? {
            return Err(AppError::NotFound(TeamRead::LABEL));
        }
        tracing::info!(team_id = id, "team deleted");
        Ok(())
    }
}
