// Infrastructure layer module
// Database and in-memory adapters for the domain repository traits

pub mod repositories;
