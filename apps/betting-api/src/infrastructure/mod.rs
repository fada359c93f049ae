// Infrastructure layer module
// Database adapters and the HTTP client for the championship service

pub mod clients;
pub mod repositories;
