use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::PLEDGE_TIMESTAMP_FORMAT;

/// Outcome recorded on a pledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PledgeStatus {
    Success,
    Rejected,
}

/// A recorded pledge attempt. Rejected attempts are kept as an audit trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pledge {
    #[serde(rename = "pledge_id")]
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub timestamp: String,
    pub amount: f64,
    pub reward_id: Option<String>,
    pub status: PledgeStatus,
}

impl Pledge {
    /// Create a pledge record with a fresh id
    pub fn new(
        user_id: &str,
        project_id: &str,
        amount: f64,
        reward_id: Option<&str>,
        status: PledgeStatus,
        at: NaiveDateTime,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            user_id: user_id.to_string(),
            project_id: project_id.to_string(),
            timestamp: at.format(PLEDGE_TIMESTAMP_FORMAT).to_string(),
            amount,
            reward_id: reward_id.map(str::to_string),
            status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == PledgeStatus::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_new_pledge() {
        let at = NaiveDate::from_ymd_opt(2025, 9, 10)
            .unwrap()
            .and_hms_micro_opt(9, 30, 0, 1500)
            .unwrap();
        let pledge = Pledge::new("user-1", "p-1", 50.0, Some("r-2"), PledgeStatus::Success, at);

        assert!(Uuid::parse_str(&pledge.id).is_ok());
        assert_eq!(pledge.timestamp, "2025-09-10T09:30:00.001500");
        assert_eq!(pledge.reward_id.as_deref(), Some("r-2"));
        assert!(pledge.is_success());
    }

    #[test]
    fn test_ids_are_unique() {
        let at = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let a = Pledge::new("u", "p", 1.0, None, PledgeStatus::Rejected, at);
        let b = Pledge::new("u", "p", 1.0, None, PledgeStatus::Rejected, at);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_value(PledgeStatus::Rejected).unwrap(),
            serde_json::json!("rejected")
        );
        let status: PledgeStatus = serde_json::from_str("\"success\"").unwrap();
        assert_eq!(status, PledgeStatus::Success);
    }
}
