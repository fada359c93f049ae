// Repository traits (ports)

pub mod bet_repository;

pub use bet_repository::BetRepository;
