//! Application services.
//!
//! Services hold the championship operations and depend only on the
//! repository traits, which are injected at construction.

pub mod match_service;
pub mod team_service;

pub use match_service::MatchService;
pub use team_service::TeamService;
