//! OpenAPI description of the HTTP surface.

use crate::error::{ErrorBody, FieldError};
use crate::handlers;
use crate::model::{
    HeroCreate, HeroRead, HeroReadWithTeam, HeroUpdate, TeamCreate, TeamRead, TeamReadWithHeroes,
    TeamUpdate,
};
use crate::routes::common::{self, VersionBody};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        common::root,
        handlers::hero::create_hero,
        handlers::hero::list_heroes,
        handlers::hero::read_hero,
        handlers::hero::update_hero,
        handlers::hero::delete_hero,
        handlers::team::create_team,
        handlers::team::list_teams,
        handlers::team::read_team,
        handlers::team::update_team,
        handlers::team::delete_team,
    ),
    components(schemas(
        HeroCreate,
        HeroRead,
        HeroReadWithTeam,
        HeroUpdate,
        TeamCreate,
        TeamRead,
        TeamReadWithHeroes,
        TeamUpdate,
        ErrorBody,
        FieldError,
        VersionBody,
    )),
    tags(
        (name = "Heroes", description = "Hero records"),
        (name = "Teams", description = "Team records"),
        (name = "Meta", description = "Service metadata")
    )
)]
pub struct ApiDoc;
