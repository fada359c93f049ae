// Domain layer module exports
// Bets, settlement rules and the ports to storage and the championship service

pub mod bet;
pub mod errors;
pub mod match_client;
pub mod repositories;

pub use errors::{BettingError, BettingResult};
