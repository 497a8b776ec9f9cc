use crate::error::AppError;
use crate::gateway::Gateway;
use crate::model::{HeroCreate, HeroRead, HeroReadWithTeam, HeroUpdate, Pagination, Record};

pub struct HeroService;

impl HeroService {
    /// Validate and insert. `team_id` is not pre-checked; an unknown team fails in the store.
    pub async fn create(gw: &Gateway, input: HeroCreate) -> Result<HeroRead, AppError> {
        let new = input.validate()?;
        let hero = gw.insert(&new).await?;
        tracing::info!(hero_id = hero.id, "hero created");
        Ok(hero)
    }

    /// List with offset (default 0) and limit (default 100, at most 100).
    pub async fn list(
        gw: &Gateway,
        offset: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<HeroRead>, AppError> {
        let page = Pagination::new(offset, limit)?;
        Ok(gw.list(page).await?)
    }

    /// One hero with its team embedded.
    pub async fn get(gw: &Gateway, id: i64) -> Result<HeroReadWithTeam, AppError> {
        gw.hero_with_team(id)
            .await?
            .ok_or(AppError::NotFound(HeroRead::LABEL))
    }

    /// Apply the keys present in `patch`; returns the plain projection.
    pub async fn update(gw: &Gateway, id: i64, patch: HeroUpdate) -> Result<HeroRead, AppError> {
        patch.validate()?;
        let fields = patch.assignments();
        let hero = gw
            .apply_partial_update::<HeroRead>(id, &fields)
            .await?
            .ok_or(AppError::NotFound(HeroRead::LABEL))?;
        tracing::info!(hero_id = id, fields = fields.len(), "hero updated");
        Ok(hero)
    }

    pub async fn delete(gw: &Gateway, id: i64) -> Result<(), AppError> {
        if !gw.delete::<HeroRead>(id).await? {
            return Err(AppError::NotFound(HeroRead::LABEL));
        }
        tracing::info!(hero_id = id, "hero deleted");
        Ok(())
    }
}
