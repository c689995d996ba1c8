//! Guess and Win domain layer: records, statuses and the retention policy table
pub mod config;
pub mod document;
pub mod errors;
pub mod records;
pub mod retention;
pub mod schedule;
pub mod status;
pub mod sweep_report;

pub use config::{CliOverrides, Config};
pub use document::Document;
pub use errors::DomainError;
pub use records::{Bet, FundsRequest, Match};
pub use retention::{cutoff_date, Collection, ExclusionRule, RetentionPolicy, RETENTION_DAYS};
pub use schedule::SweepSchedule;
pub use status::{MatchStatus, RequestStatus};
pub use sweep_report::{CollectionOutcome, SweepReport};
