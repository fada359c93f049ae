//! HTTP client for the championship service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use uuid::Uuid;

use crate::domain::match_client::{MatchClient, MatchLookup, RemoteMatch};

/// Reads matches from `GET {base_url}/api/matches/{id}`
///
/// - 2xx with a valid body -> `Found`
/// - 404 -> `NotFound`
/// - anything else, including transport errors -> `Unavailable`
///
/// No retries are attempted.
#[derive(Debug, Clone)]
pub struct HttpMatchClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpMatchClient {
    /// Creates a client for the championship service at `base_url`
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Ok(Self { client, base_url })
    }

    fn match_url(&self, match_id: Uuid) -> String {
        format!("{}/api/matches/{}", self.base_url, match_id)
    }
}

#[async_trait]
impl MatchClient for HttpMatchClient {
    async fn get_match(&self, match_id: Uuid) -> MatchLookup {
        let url = self.match_url(match_id);

        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "Championship service request failed");
                return MatchLookup::Unavailable(format!("Request to {} failed: {}", url, e));
            }
        };

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return MatchLookup::NotFound;
        }

        if !status.is_success() {
            tracing::warn!(%url, %status, "Championship service returned an error");
            return MatchLookup::Unavailable(format!("Championship service returned {}", status));
        }

        match response.json::<RemoteMatch>().await {
            Ok(remote) => MatchLookup::Found(remote),
            Err(e) => {
                tracing::warn!(%url, error = %e, "Invalid match payload");
                MatchLookup::Unavailable(format!("Invalid match payload: {}", e))
            }
        }
    }
}
