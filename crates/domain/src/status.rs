use crate::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Review state of a deposit or withdrawal request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RequestStatus {
    Processing,
    Approved,
    Rejected,
}

impl RequestStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            RequestStatus::Processing => "Processing",
            RequestStatus::Approved => "Approved",
            RequestStatus::Rejected => "Rejected",
        }
    }

    /// Still waiting for an admin decision; money may be on hold.
    pub fn is_in_flight(&self) -> bool {
        match self {
            RequestStatus::Processing => true,
            RequestStatus::Approved | RequestStatus::Rejected => false,
        }
    }
}

impl FromStr for RequestStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Processing" => Ok(RequestStatus::Processing),
            "Approved" => Ok(RequestStatus::Approved),
            "Rejected" => Ok(RequestStatus::Rejected),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}

/// Lifecycle state of a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl MatchStatus {
    pub fn to_str(&self) -> &'static str {
        match self {
            MatchStatus::Upcoming => "Upcoming",
            MatchStatus::Live => "Live",
            MatchStatus::Completed => "Completed",
        }
    }

    /// Bets can still be placed or settled against an active match.
    pub fn is_active(&self) -> bool {
        match self {
            MatchStatus::Upcoming | MatchStatus::Live => true,
            MatchStatus::Completed => false,
        }
    }
}

impl FromStr for MatchStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Upcoming" => Ok(MatchStatus::Upcoming),
            "Live" => Ok(MatchStatus::Live),
            "Completed" => Ok(MatchStatus::Completed),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.to_str())
    }
}
