//! Championship API Library
//!
//! Team and match management for the betting demo: team registration,
//! match scheduling and result recording, exposed over HTTP with axum.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod services;
