// Outbound HTTP clients

pub mod http_match_client;

pub use http_match_client::HttpMatchClient;
