//! Hero and team routes. Collections answer with and without a trailing slash.

use crate::handlers::{
    create_hero, create_team, delete_hero, delete_team, list_heroes, list_teams, read_hero,
    read_team, update_hero, update_team,
};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .route("/heroes", get(list_heroes).post(create_hero))
        .route("/heroes/", get(list_heroes).post(create_hero))
        .route(
            "/heroes/:hero_id",
            get(read_hero).patch(update_hero).delete(delete_hero),
        )
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/", get(list_teams).post(create_team))
        .route(
            "/teams/:team_id",
            get(read_team).patch(update_team).delete(delete_team),
        )
        .with_state(state)
}
