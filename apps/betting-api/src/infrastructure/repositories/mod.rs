// Repository implementations (data access layer)

pub mod in_memory_bet_repository;
pub mod postgres_bet_repository;

pub use in_memory_bet_repository::InMemoryBetRepository;
pub use postgres_bet_repository::PostgresBetRepository;
