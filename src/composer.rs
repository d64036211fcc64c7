//! Turns a region code into the pair of replies sent for `/stats`.

use crate::api_client::StatsSource;
use crate::error::ComposeError;
use crate::regions;
use crate::utils::{format_emergency, format_stats_message, region_prefix};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatsReport {
    pub info: String,
    pub emergency: String,
}

/// `code` is matched case-insensitively but echoed back as typed.
pub async fn compose(source: &dyn StatsSource, code: &str) -> Result<StatsReport, ComposeError> {
    let normalized = code.to_uppercase();
    let region = regions::lookup(&normalized);
    // Unknown codes resolve to a blank name, which never matches a record.
    let name = region.map(|r| r.name).unwrap_or_default();

    let snapshot = source.fetch_snapshot().await?;
    let prefix = region_prefix(&normalized, name);

    match (region, snapshot.find_state(name)) {
        (Some(region), Some(record)) => Ok(StatsReport {
            info: format_stats_message(&prefix, record),
            emergency: format_emergency(region.phone),
        }),
        _ => Err(ComposeError::RegionNotFound {
            code: code.to_string(),
            prefix,
        }),
    }
}

/// Flatten a compose result into `(info, emergency)` chat texts.
///
/// A fetch failure fills both slots with the error text; an unknown region
/// leaves the emergency slot empty.
pub fn render(result: Result<StatsReport, ComposeError>) -> (String, String) {
    match result {
        Ok(report) => (report.info, report.emergency),
        Err(ComposeError::Fetch(e)) => {
            let text = e.to_string();
            (text.clone(), text)
        }
        Err(e @ ComposeError::RegionNotFound { .. }) => (e.to_string(), String::new()),
    }
}
