use crate::status::{MatchStatus, RequestStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A wager a user placed on a match question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bet {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub match_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_option: Option<String>,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
}

/// A wallet top-up or payout awaiting (or past) admin review. Deposits and
/// withdrawals share this shape and live in separate collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FundsRequest {
    #[serde(default)]
    pub id: String,
    pub user_id: String,
    pub amount: f64,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    /// UTR / reference the user entered for a deposit.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Payout destination for a withdrawal.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upi_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviewed_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Match {
    #[serde(default)]
    pub id: String,
    pub team_a: String,
    pub team_b: String,
    pub start_time: DateTime<Utc>,
    pub status: MatchStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub winner: Option<String>,
}
