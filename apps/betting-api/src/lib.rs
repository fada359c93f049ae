//! Betting API Library
//!
//! Bets on championship matches: placement against the championship
//! service, lazy settlement once a match is played, exposed over HTTP
//! with axum.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
