use serde::{Deserialize, Serialize};

/// Reward offered to backers pledging at least `min_pledge`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RewardTier {
    #[serde(rename = "reward_id")]
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub min_pledge: f64,
    /// Remaining stock; `None` means unlimited
    pub quota: Option<u32>,
}

impl RewardTier {
    /// Whether another pledge can still claim this reward
    pub fn in_stock(&self) -> bool {
        self.quota.map_or(true, |left| left > 0)
    }

    /// Take one unit of a finite quota. Unlimited tiers are left alone.
    pub fn claim(&mut self) {
        if let Some(left) = self.quota.as_mut() {
            *left = left.saturating_sub(1);
        }
    }
}
