//! HTTP handlers for heroes and teams.

pub mod hero;
pub mod team;
pub use hero::*;
pub use team::*;
