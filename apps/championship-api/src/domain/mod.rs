// Domain layer module exports
// Teams, matches and the repository contracts the services depend on

pub mod errors;
pub mod matches;
pub mod repositories;
pub mod team;

pub use errors::{ChampionshipError, ChampionshipResult};
