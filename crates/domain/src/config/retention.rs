use crate::retention::Collection;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RetentionConfig {
    /// Collections to sweep, in order. Names must match a known policy.
    #[serde(default = "default_collections")]
    pub collections: Vec<String>,

    /// Six-field cron expression (seconds first).
    #[serde(default = "default_schedule")]
    pub schedule: String,

    /// IANA timezone for the schedule and for the end-of-day cutoff.
    #[serde(default = "default_timezone")]
    pub timezone: String,

    #[serde(default = "default_operation_timeout_secs")]
    pub operation_timeout_secs: u64,

    #[serde(default = "default_cycle_timeout_secs")]
    pub cycle_timeout_secs: u64,
}

impl Default for RetentionConfig {
    fn default() -> Self {
        Self {
            collections: default_collections(),
            schedule: default_schedule(),
            timezone: default_timezone(),
            operation_timeout_secs: default_operation_timeout_secs(),
            cycle_timeout_secs: default_cycle_timeout_secs(),
        }
    }
}

fn default_collections() -> Vec<String> {
    Collection::ALL.iter().map(|c| c.name().to_string()).collect()
}

fn default_schedule() -> String {
    "0 0 0 1 */2 *".to_string()
}

fn default_timezone() -> String {
    "Asia/Kolkata".to_string()
}

fn default_operation_timeout_secs() -> u64 {
    30
}

fn default_cycle_timeout_secs() -> u64 {
    600
}
