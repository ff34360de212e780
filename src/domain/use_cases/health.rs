use std::time::Duration;

use chrono::Utc;
use humantime::format_duration;

use crate::{
    constants::START_TIME,
    entities::health::{DatabaseStatus, HealthReport, ServiceStatus},
    repositories::health::StoreHealth,
};

pub struct HealthHandler<S>
where
    S: StoreHealth,
{
    pub store: S,
}

impl<S> HealthHandler<S>
where
    S: StoreHealth,
{
    pub fn new(store: S) -> Self {
        HealthHandler { store }
    }

    /// Probes the store. Has no side effects beyond the probe itself.
    pub async fn report(&self) -> HealthReport {
        let now = Utc::now();
        let uptime_secs = now.signed_duration_since(*START_TIME).num_seconds().max(0) as u64;

        let (status, database) = match self.store.check_connection().await {
            Ok(()) => (ServiceStatus::Up, DatabaseStatus::Connected),
            Err(e) => {
                tracing::warn!("Store health probe failed: {}", e);
                (ServiceStatus::Down, DatabaseStatus::Disconnected)
            }
        };

        HealthReport {
            status,
            database,
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime: format_duration(Duration::from_secs(uptime_secs)).to_string(),
            timestamp: now.to_rfc3339(),
        }
    }
}
