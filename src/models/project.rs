use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Crowdfunding project as persisted in the data document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "project_id")]
    pub id: String,
    pub title: String,
    pub target_amount: f64,
    /// Running total of successful pledges (plus any opening balance)
    pub current_amount: f64,
    /// Last day pledges are accepted, serialized as `YYYY-MM-DD`
    pub deadline: NaiveDate,
    pub category_id: String,
    /// ISO 8601 creation time; ordered as a plain string
    #[serde(default)]
    pub created_at: String,
}

impl Project {
    /// Funding progress in percent; zero when the target is zero
    pub fn progress_percent(&self) -> f64 {
        if self.target_amount > 0.0 {
            self.current_amount / self.target_amount * 100.0
        } else {
            0.0
        }
    }

    /// A project expires the day after its deadline
    pub fn is_expired(&self, today: NaiveDate) -> bool {
        self.deadline < today
    }

    /// Build the read-time view with derived display fields
    pub fn view(&self, today: NaiveDate) -> ProjectView {
        ProjectView {
            project: self.clone(),
            progress_percent: self.progress_percent(),
            is_expired: self.is_expired(today),
        }
    }
}

/// Project plus fields computed at read time. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectView {
    #[serde(flatten)]
    pub project: Project,
    pub progress_percent: f64,
    pub is_expired: bool,
}
