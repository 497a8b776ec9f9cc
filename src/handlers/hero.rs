//! Hero handlers: create, list, read (with team), update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extract::{parse_id, query_int, JsonBody};
use crate::model::{HeroCreate, HeroRead, HeroReadWithTeam, HeroUpdate};
use crate::service::HeroService;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::collections::HashMap;

#[utoipa::path(
    post,
    path = "/heroes/",
    tag = "Heroes",
    request_body = HeroCreate,
    responses(
        (status = 201, description = "Hero created", body = HeroRead),
        (status = 409, description = "Unknown team_id", body = ErrorBody),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_hero(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<HeroCreate>,
) -> Result<impl IntoResponse, AppError> {
    let hero = HeroService::create(&state.gateway, input).await?;
    Ok((StatusCode::CREATED, Json(hero)))
}

#[utoipa::path(
    get,
    path = "/heroes/",
    tag = "Heroes",
    params(
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Page size, 0 to 100 (default 100)")
    ),
    responses(
        (status = 200, description = "Heroes in id order", body = [HeroRead]),
        (status = 422, description = "Invalid offset or limit", body = ErrorBody)
    )
)]
pub async fn list_heroes(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<HeroRead>>, AppError> {
    let offset = query_int(&params, "offset")?;
    let limit = query_int(&params, "limit")?;
    let heroes = HeroService::list(&state.gateway, offset, limit).await?;
    Ok(Json(heroes))
}

#[utoipa::path(
    get,
    path = "/heroes/{hero_id}",
    tag = "Heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    responses(
        (status = 200, description = "Hero with its team", body = HeroReadWithTeam),
        (status = 404, description = "Hero not found", body = ErrorBody)
    )
)]
pub async fn read_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<String>,
) -> Result<Json<HeroReadWithTeam>, AppError> {
    let id = parse_id(&hero_id, "hero_id")?;
    Ok(Json(HeroService::get(&state.gateway, id).await?))
}

#[utoipa::path(
    patch,
    path = "/heroes/{hero_id}",
    tag = "Heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    request_body = HeroUpdate,
    responses(
        (status = 200, description = "Updated hero", body = HeroRead),
        (status = 404, description = "Hero not found", body = ErrorBody),
        (status = 409, description = "Unknown team_id", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<String>,
    JsonBody(patch): JsonBody<HeroUpdate>,
) -> Result<Json<HeroRead>, AppError> {
    let id = parse_id(&hero_id, "hero_id")?;
    Ok(Json(HeroService::update(&state.gateway, id, patch).await?))
}

#[utoipa::path(
    delete,
    path = "/heroes/{hero_id}",
    tag = "Heroes",
    params(("hero_id" = i64, Path, description = "Hero id")),
    responses(
        (status = 204, description = "Hero deleted"),
        (status = 404, description = "Hero not found", body = ErrorBody)
    )
)]
pub async fn delete_hero(
    State(state): State<AppState>,
    Path(hero_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&hero_id, "hero_id")?;
    HeroService::delete(&state.gateway, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
