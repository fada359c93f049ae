//! Application services.

pub mod bet_service;

pub use bet_service::BetService;
