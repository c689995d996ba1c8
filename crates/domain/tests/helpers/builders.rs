#![allow(dead_code)]
use chrono::{DateTime, Duration, Utc};
use guesswin_domain::{Bet, Document, FundsRequest, Match, MatchStatus, RequestStatus};

pub fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

pub struct FundsRequestBuilder {
    id: String,
    status: RequestStatus,
    created_at: DateTime<Utc>,
    amount: f64,
    upi_id: Option<String>,
}

impl FundsRequestBuilder {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            status: RequestStatus::Approved,
            created_at: Utc::now(),
            amount: 500.0,
            upi_id: None,
        }
    }

    pub fn status(mut self, status: RequestStatus) -> Self {
        self.status = status;
        self
    }

    pub fn days_old(mut self, days: i64) -> Self {
        self.created_at = days_ago(days);
        self
    }

    pub fn upi(mut self, upi_id: &str) -> Self {
        self.upi_id = Some(upi_id.to_string());
        self
    }

    pub fn build(self) -> FundsRequest {
        FundsRequest {
            id: self.id,
            user_id: "user-1".to_string(),
            amount: self.amount,
            status: self.status,
            created_at: self.created_at,
            transaction_id: None,
            upi_id: self.upi_id,
            reviewed_at: None,
        }
    }

    pub fn document(self) -> Document {
        let request = self.build();
        Document::from_record(request.id.clone(), &request).unwrap()
    }
}

pub fn bet_document(id: &str, days_old: i64) -> Document {
    let bet = Bet {
        id: id.to_string(),
        user_id: "user-1".to_string(),
        match_id: "match-1".to_string(),
        question_id: Some("q-1".to_string()),
        selected_option: Some("Team A".to_string()),
        amount: 100.0,
        timestamp: days_ago(days_old),
    };
    Document::from_record(id, &bet).unwrap()
}

pub fn match_document(id: &str, status: MatchStatus, days_old: i64) -> Document {
    let m = Match {
        id: id.to_string(),
        team_a: "Mumbai".to_string(),
        team_b: "Chennai".to_string(),
        start_time: days_ago(days_old),
        status,
        winner: None,
    };
    Document::from_record(id, &m).unwrap()
}
