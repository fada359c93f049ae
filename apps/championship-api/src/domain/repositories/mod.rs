// Repository traits (ports)
// Implemented by the adapters in infrastructure::repositories

pub mod match_repository;
pub mod team_repository;

pub use match_repository::MatchRepository;
pub use team_repository::TeamRepository;
