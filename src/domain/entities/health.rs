use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ServiceStatus {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DatabaseStatus {
    Connected,
    Disconnected,
}

/// Body of `GET /health`. Only `status` and `database` are load-bearing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    pub status: ServiceStatus,
    pub database: DatabaseStatus,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub uptime: String,
    #[serde(default)]
    pub timestamp: String,
}

impl HealthReport {
    pub fn is_up(&self) -> bool {
        self.status == ServiceStatus::Up
    }
}
