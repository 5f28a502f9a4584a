//! Trait for anything that can hand back a fresh batch of readings.

use anyhow::Result;
use aqi_reporter::reading::Reading;

/// Abstraction over a reading provider (e.g., the AirNow reporting-area API).
#[async_trait::async_trait]
pub trait ReadingSource: Send + Sync {
    /// Returns every reading the provider currently reports, in its order.
    async fn readings(&self) -> Result<Vec<Reading>>;
}
