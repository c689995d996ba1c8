//! Retention policy table for the sweeper.
//!
//! Every swept collection has one temporal field and one exclusion rule.
//! A record is deletable only when its temporal field is at or before the
//! cycle cutoff and its exclusion rule does not protect it.

use crate::document::Document;
use crate::errors::DomainError;
use crate::status::{MatchStatus, RequestStatus};
use chrono::{DateTime, Days, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

/// Days a record is kept after its temporal field.
pub const RETENTION_DAYS: i64 = 45;

const STATUS_FIELD: &str = "status";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Bets,
    Deposits,
    Withdrawals,
    Matches,
}

impl Collection {
    /// Fixed sweep order.
    pub const ALL: [Collection; 4] = [
        Collection::Bets,
        Collection::Deposits,
        Collection::Withdrawals,
        Collection::Matches,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Collection::Bets => "bets",
            Collection::Deposits => "deposits",
            Collection::Withdrawals => "withdrawals",
            Collection::Matches => "matches",
        }
    }

    pub fn temporal_field(&self) -> &'static str {
        match self {
            Collection::Bets => "timestamp",
            Collection::Deposits | Collection::Withdrawals => "createdAt",
            Collection::Matches => "startTime",
        }
    }

    pub fn exclusion(&self) -> ExclusionRule {
        match self {
            Collection::Bets => ExclusionRule::None,
            Collection::Deposits | Collection::Withdrawals => ExclusionRule::RequestInFlight,
            Collection::Matches => ExclusionRule::MatchActive,
        }
    }
}

impl FromStr for Collection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Collection::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| DomainError::UnknownCollection(s.to_string()))
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Rule that keeps a record regardless of its age.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExclusionRule {
    None,
    /// Deposit/withdrawal still `Processing`.
    RequestInFlight,
    /// Match still `Upcoming` or `Live`.
    MatchActive,
}

impl ExclusionRule {
    /// `Ok(true)` when the document must be kept.
    ///
    /// A guarded document whose status is missing or outside the known set
    /// yields `Err`; callers keep such records.
    pub fn protects(&self, doc: &Document) -> Result<bool, DomainError> {
        match self {
            ExclusionRule::None => Ok(false),
            ExclusionRule::RequestInFlight => {
                Ok(read_status(doc)?.parse::<RequestStatus>()?.is_in_flight())
            }
            ExclusionRule::MatchActive => {
                Ok(read_status(doc)?.parse::<MatchStatus>()?.is_active())
            }
        }
    }
}

fn read_status(doc: &Document) -> Result<&str, DomainError> {
    doc.str_field(STATUS_FIELD)
        .ok_or_else(|| DomainError::InvalidStatus(format!("document {} has no status", doc.id)))
}

/// One row of the policy table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    pub collection: Collection,
    pub retention_days: i64,
}

impl RetentionPolicy {
    pub fn new(collection: Collection) -> Self {
        Self {
            collection,
            retention_days: RETENTION_DAYS,
        }
    }

    /// The full table in sweep order.
    pub fn standard_table() -> Vec<RetentionPolicy> {
        Collection::ALL.into_iter().map(Self::new).collect()
    }

    pub fn temporal_field(&self) -> &'static str {
        self.collection.temporal_field()
    }

    pub fn exclusion(&self) -> ExclusionRule {
        self.collection.exclusion()
    }

    pub fn cutoff(&self, now: DateTime<Utc>, tz: Tz) -> DateTime<Utc> {
        cutoff_date(now, tz, self.retention_days)
    }
}

/// Last instant (millisecond precision) of the day `retention_days` before
/// `now`, with "day" taken in `tz`.
pub fn cutoff_date(now: DateTime<Utc>, tz: Tz, retention_days: i64) -> DateTime<Utc> {
    // Calendar days on the local date, so a DST shift inside the window
    // cannot move the cutoff by a day.
    let day = now
        .with_timezone(&tz)
        .date_naive()
        .checked_sub_days(Days::new(retention_days.max(0) as u64))
        .unwrap_or(NaiveDate::MIN);
    let next_midnight = day
        .succ_opt()
        .unwrap_or(day)
        .and_time(NaiveTime::MIN);

    let start_of_next = tz
        .from_local_datetime(&next_midnight)
        .earliest()
        .map(|dt| dt.with_timezone(&Utc))
        // Midnight skipped by a DST jump: fall back to the UTC reading.
        .unwrap_or_else(|| Utc.from_utc_datetime(&next_midnight));

    start_of_next - Duration::milliseconds(1)
}
