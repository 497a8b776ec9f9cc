//! Team handlers: create, list, read (with heroes), update, delete.

use crate::error::{AppError, ErrorBody};
use crate::extract::{parse_id, query_int, JsonBody};
use crate::model::{TeamCreate, TeamRead, TeamReadWithHeroes, TeamUpdate};
use crate::service::TeamService;
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
    path = "/teams/",
    tag = "Teams",
    request_body = TeamCreate,
    responses(
        (status = 201, description = "Team created", body = TeamRead),
        (status = 422, description = "Missing or invalid fields", body = ErrorBody)
    )
)]
pub async fn create_team(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TeamCreate>,
) -> Result<impl IntoResponse, AppError> {
    let team = TeamService::create(&state.gateway, input).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

#[utoipa::path(
    get,
    path = "/teams/",
    tag = "Teams",
    params(
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Page size, 0 to 100 (default 100)")
    ),
    responses(
        (status = 200, description = "Teams in id order", body = [TeamRead]),
        (status = 422, description = "Invalid offset or limit", body = ErrorBody)
    )
)]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<Vec<TeamRead>>, AppError> {
    let offset = query_int(&params, "offset")?;
    let limit = query_int(&params, "limit")?;
    let teams = TeamService::list(&state.gateway, offset, limit).await?;
    Ok(Json(teams))
}

#[utoipa::path(
    get,
    path = "/teams/{team_id}",
    tag = "Teams",
    params(("team_id" = i64, Path, description = "Team id")),
    responses(
        (status = 200, description = "Team with its heroes", body = TeamReadWithHeroes),
        (status = 404, description = "Team not found", body = ErrorBody)
    )
)]
pub async fn read_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamReadWithHeroes>, AppError> {
    let id = parse_id(&team_id, "team_id")?;
    Ok(Json(TeamService::get(&state.gateway, id).await?))
}

#[utoipa::path(
    patch,
    path = "/teams/{team_id}",
    tag = "Teams",
    params(("team_id" = i64, Path, description = "Team id")),
    request_body = TeamUpdate,
    responses(
        (status = 200, description = "Updated team", body = TeamRead),
        (status = 404, description = "Team not found", body = ErrorBody),
        (status = 422, description = "Invalid fields", body = ErrorBody)
    )
)]
pub async fn update_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
    JsonBody(patch): JsonBody<TeamUpdate>,
) -> Result<Json<TeamRead>, AppError> {
    let id = parse_id(&team_id, "team_id")?;
    Ok(Json(TeamService::update(&state.gateway, id, patch).await?))
}

#[utoipa::path(
    delete,
    path = "/teams/{team_id}",
    tag = "Teams",
    params(("team_id" = i64, Path, description = "Team id")),
    responses(
        (status = 204, description = "Team deleted"),
        (status = 404, description = "Team not found", body = ErrorBody)
    )
)]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<StatusCode, AppError> {
    let id = parse_id(&team_id, "team_id")?;
    TeamService::delete(&state.gateway, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
