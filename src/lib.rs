//! Heroes API: CRUD REST backend for heroes and the teams they belong to.

pub mod config;
pub mod doc;
pub mod error;
pub mod extract;
pub mod gateway;
pub mod handlers;
pub mod model;
pub mod routes;
pub mod service;
pub mod sql;
pub mod state;
pub mod store;

pub use config::Settings;
pub use error::{AppError, ConfigError, StoreError};
pub use gateway::Gateway;
pub use routes::{app, common_routes_with_ready, entity_routes};
pub use service::{HeroService, TeamService};
pub use state::AppState;
pub use store::{connect, connect_in_memory, ensure_database_exists, init_schema, Backend};
