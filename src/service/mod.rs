//! Hero and team services: CRUD and relationship-aware reads over the gateway.

mod hero;
mod team;
pub use hero::HeroService;
pub use team::TeamService;
