use crate::error::FetchError;
use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, info, warn};

/// Latest figures for one region as published by the feed.
///
/// Counts are kept as text and only ever displayed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct StatRecord {
    pub state: String,
    pub active: String,
    pub confirmed: String,
    pub deaths: String,
    pub recovered: String,
    /// `DD/MM/YYYY HH:MM:SS`
    #[serde(rename = "lastupdatedtime")]
    pub last_updated: String,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct StatsSnapshot {
    #[serde(rename = "statewise")]
    pub records: Vec<StatRecord>,
}

impl StatsSnapshot {
    pub fn from_slice(body: &[u8]) -> Result<Self, FetchError> {
        Ok(serde_json::from_slice(body)?)
    }

    pub fn find_state(&self, state: &str) -> Option<&StatRecord> {
        self.records.iter().find(|record| record.state == state)
    }
}

#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Retrieve a fresh snapshot. Nothing is cached between calls.
    async fn fetch_snapshot(&self) -> Result<StatsSnapshot, FetchError>;
}

pub struct StatsClient {
    url: String,
    client: reqwest::Client,
}

impl StatsClient {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    /// Fetch once and report whether the feed looks usable. Never fails.
    pub async fn probe(&self) -> bool {
        match self.fetch_snapshot().await {
            Ok(snapshot) => {
                info!("Stats feed is available ({} records)", snapshot.records.len());
                true
            }
            Err(e) => {
                warn!("Stats feed is not available: {} (continuing anyway)", e);
                false
            }
        }
    }
}

#[async_trait]
impl StatsSource for StatsClient {
    async fn fetch_snapshot(&self) -> Result<StatsSnapshot, FetchError> {
        debug!("Fetching stats from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(FetchError::Network)?;

        let status = response.status();
        if !status.is_success() {
            // The body is still decoded; an error page fails as bad JSON.
            warn!("Stats feed responded with status {}", status);
        }

        let body = response.bytes().await.map_err(FetchError::Body)?;
        StatsSnapshot::from_slice(&body)
    }
}
