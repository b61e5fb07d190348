//! DriveBC Open511 API access
//!
//! Queries the public events endpoint and hands the typed records to the
//! flattening stage. The API needs no credentials; the only tunables are the
//! record limit and the HTTP timeout.

pub mod api;
pub mod flatten;

use self::api::{Event, EventsResponse};
use crate::constants::USER_AGENT;
use crate::error::{DriveBcError, Result};
use std::time::Duration;
use tracing::{debug, info};

/// Client for the Open511 events endpoint
#[derive(Debug, Clone)]
pub struct EventsClient {
    http: reqwest::Client,
    base_url: String,
}

impl EventsClient {
    pub fn new(base_url: impl Into<String>, timeout_secs: u64) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch up to `limit` road events.
    pub async fn fetch_events(&self, limit: usize) -> Result<Vec<Event>> {
        let url = format!("{}/events", self.base_url);
        info!("Querying events API: {} (limit {})", url, limit);

        let response = self
            .http
            .get(&url)
            .query(&[("limit", limit.to_string())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DriveBcError::ApiStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body: EventsResponse = response.json().await?;
        debug!("Events API returned {} records", body.events.len());
        Ok(body.events)
    }
}
