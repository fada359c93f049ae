// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_match_repository;
pub mod in_memory_team_repository;
pub mod postgres_match_repository;
pub mod postgres_team_repository;

pub use in_memory_match_repository::InMemoryMatchRepository;
pub use in_memory_team_repository::InMemoryTeamRepository;
pub use postgres_match_repository::PostgresMatchRepository;
pub use postgres_team_repository::PostgresTeamRepository;
