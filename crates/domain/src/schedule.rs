use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use cron::Schedule;
use std::str::FromStr;

/// Timezone-qualified cron trigger for the sweep.
#[derive(Debug, Clone)]
pub struct SweepSchedule {
    expression: String,
    schedule: Schedule,
    timezone: Tz,
}

impl SweepSchedule {
    /// `expression` uses the six-field form with seconds first,
    /// e.g. `"0 0 0 1 */2 *"`.
    pub fn parse(expression: &str, timezone: &str) -> Result<Self, DomainError> {
        let schedule = Schedule::from_str(expression).map_err(|e| {
            DomainError::ConfigError(format!("invalid schedule '{}': {}", expression, e))
        })?;
        let timezone = parse_timezone(timezone)?;
        Ok(Self {
            expression: expression.to_string(),
            schedule,
            timezone,
        })
    }

    pub fn expression(&self) -> &str {
        &self.expression
    }

    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Next fire time strictly after `now`.
    pub fn next_after(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.schedule
            .after(&now.with_timezone(&self.timezone))
            .next()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

pub fn parse_timezone(name: &str) -> Result<Tz, DomainError> {
    Tz::from_str(name)
        .map_err(|_| DomainError::ConfigError(format!("unknown timezone '{}'", name)))
}
