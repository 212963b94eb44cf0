use chrono::NaiveDateTime;
use thiserror::Error;

use crate::constants::*;
use crate::db::Store;
use crate::error::Result;
use crate::models::{Pledge, PledgeStatus};

/// A backer's attempt to fund a project
#[derive(Debug, Clone)]
pub struct PledgeRequest {
    pub user_id: String,
    pub project_id: String,
    pub amount: f64,
    pub reward_id: Option<String>,
}

/// Business rule a pledge failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("{}", MSG_PROJECT_NOT_FOUND)]
    ProjectNotFound,
    #[error("{}", MSG_PROJECT_EXPIRED)]
    Expired,
    #[error("{}", MSG_REWARD_NOT_FOUND)]
    RewardNotFound,
    #[error("{}", MSG_BELOW_MINIMUM)]
    BelowMinimum,
    #[error("{}", MSG_OUT_OF_STOCK)]
    OutOfStock,
}

#[derive(Debug, Clone)]
pub enum PledgeDecision {
    Accepted(Pledge),
    Rejected(Rejection),
}

impl PledgeDecision {
    pub fn is_accepted(&self) -> bool {
        matches!(self, PledgeDecision::Accepted(_))
    }

    pub fn message(&self) -> String {
        match self {
            PledgeDecision::Accepted(_) => MSG_PLEDGE_SUCCESSFUL.to_string(),
            PledgeDecision::Rejected(rejection) => rejection.to_string(),
        }
    }
}

/// Validate and apply a pledge
///
/// Rules run in order and stop at the first failure:
/// 1. the project exists (nothing is recorded otherwise)
/// 2. its deadline is not before `now`'s date
/// 3. a requested reward exists on that project
/// 4. the amount covers the reward minimum
/// 5. a finite reward quota is not exhausted
///
/// Every other failure is stored as a rejected pledge. On success the project
/// total grows by `amount`, a finite quota shrinks by one and a successful
/// pledge is appended. Each outcome is persisted before returning.
pub fn create_pledge(
    store: &mut Store,
    request: &PledgeRequest,
    now: NaiveDateTime,
) -> Result<PledgeDecision> {
    let today = now.date();

    let Some(project) = store.project(&request.project_id) else {
        tracing::warn!("Pledge for unknown project {}", request.project_id);
        return Ok(PledgeDecision::Rejected(Rejection::ProjectNotFound));
    };

    if project.is_expired(today) {
        return reject(store, request, Rejection::Expired, now);
    }

    if let Some(reward_id) = request.reward_id.as_deref() {
        let reward = match store.reward(reward_id) {
            Some(r) if r.project_id == request.project_id => r,
            _ => return reject(store, request, Rejection::RewardNotFound, now),
        };

        if request.amount < reward.min_pledge {
            return reject(store, request, Rejection::BelowMinimum, now);
        }

        if !reward.in_stock() {
            return reject(store, request, Rejection::OutOfStock, now);
        }
    }

    apply(store, request, now)
}

fn apply(store: &mut Store, request: &PledgeRequest, now: NaiveDateTime) -> Result<PledgeDecision> {
    let mut previous_amount = None;
    if let Some(project) = store.project_mut(&request.project_id) {
        previous_amount = Some(project.current_amount);
        project.current_amount += request.amount;
    }

    let mut previous_quota = None;
    if let Some(reward_id) = request.reward_id.as_deref() {
        if let Some(reward) = store.reward_mut(reward_id) {
            previous_quota = Some(reward.quota);
            reward.claim();
        }
    }

    let pledge = Pledge::new(
        &request.user_id,
        &request.project_id,
        request.amount,
        request.reward_id.as_deref(),
        PledgeStatus::Success,
        now,
    );
    store.record_pledge(pledge.clone());

    if let Err(e) = store.save() {
        // Leave memory matching the file that is still on disk
        store.discard_last_pledge();
        if let (Some(amount), Some(project)) =
            (previous_amount, store.project_mut(&request.project_id))
        {
            project.current_amount = amount;
        }
        if let (Some(quota), Some(reward_id)) = (previous_quota, request.reward_id.as_deref()) {
            if let Some(reward) = store.reward_mut(reward_id) {
                reward.quota = quota;
            }
        }
        return Err(e);
    }

    tracing::info!(
        "Pledge {} accepted: {} to project {} by {}",
        pledge.id,
        request.amount,
        request.project_id,
        request.user_id
    );

    Ok(PledgeDecision::Accepted(pledge))
}

fn reject(
    store: &mut Store,
    request: &PledgeRequest,
    rejection: Rejection,
    now: NaiveDateTime,
) -> Result<PledgeDecision> {
    tracing::info!(
        "Pledge rejected for project {} by {}: {}",
        request.project_id,
        request.user_id,
        rejection
    );

    store.record_pledge(Pledge::new(
        &request.user_id,
        &request.project_id,
        request.amount,
        request.reward_id.as_deref(),
        PledgeStatus::Rejected,
        now,
    ));

    if let Err(e) = store.save() {
        store.discard_last_pledge();
        return Err(e);
    }

    Ok(PledgeDecision::Rejected(rejection))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::models::{Project, RewardTier};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 10, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn project(id: &str, deadline: &str) -> Project {
        Project {
            id: id.to_string(),
            title: format!("Project {}", id),
            target_amount: 1000.0,
            current_amount: 100.0,
            deadline: deadline.parse().unwrap(),
            category_id: "cat-1".to_string(),
            created_at: "2025-09-01T10:00:00".to_string(),
        }
    }

    fn reward(id: &str, project_id: &str, min_pledge: f64, quota: Option<u32>) -> RewardTier {
        RewardTier {
            id: id.to_string(),
            project_id: project_id.to_string(),
            title: format!("Reward {}", id),
            min_pledge,
            quota,
        }
    }

    fn test_store(temp_dir: &TempDir) -> Store {
        let data = Database {
            projects: vec![project("open", "2025-12-31"), project("closed", "2020-01-01"), project("today", "2025-10-01")],
            reward_tiers: vec![
                reward("r-free", "open", 10.0, None),
                reward("r-limited", "open", 50.0, Some(2)),
                reward("r-gone", "open", 5.0, Some(0)),
                reward("r-other", "closed", 5.0, None),
            ],
            ..Database::default()
        };
        Store::with_data(temp_dir.path().join("db.json"), data)
    }

    fn request(project_id: &str, amount: f64, reward_id: Option<&str>) -> PledgeRequest {
        PledgeRequest {
            user_id: "user-1".to_string(),
            project_id: project_id.to_string(),
            amount,
            reward_id: reward_id.map(str::to_string),
        }
    }

    fn current_amount(store: &Store, id: &str) -> f64 {
        store.project(id).unwrap().current_amount
    }

    #[test]
    fn test_pledge_without_reward_succeeds() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision = create_pledge(&mut store, &request("open", 25.0, None), now()).unwrap();

        assert!(decision.is_accepted());
        assert_eq!(decision.message(), "Pledge successful.");
        assert_eq!(current_amount(&store, "open"), 125.0);
        assert_eq!(store.pledges().len(), 1);
        assert!(store.pledges()[0].is_success());
        assert!(store.path().exists());
    }

    #[test]
    fn test_unknown_project_records_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision = create_pledge(&mut store, &request("nope", 25.0, None), now()).unwrap();

        assert!(matches!(
            decision,
            PledgeDecision::Rejected(Rejection::ProjectNotFound)
        ));
        assert_eq!(decision.message(), "Project not found.");
        assert!(store.pledges().is_empty());
        assert!(!store.path().exists());
    }

    #[test]
    fn test_expired_project_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision = create_pledge(&mut store, &request("closed", 500.0, None), now()).unwrap();

        assert!(!decision.is_accepted());
        assert_eq!(decision.message(), "Project has already expired.");
        assert_eq!(current_amount(&store, "closed"), 100.0);
        assert_eq!(store.pledges().len(), 1);
        assert_eq!(store.pledges()[0].status, PledgeStatus::Rejected);
    }

    #[test]
    fn test_deadline_day_still_accepts() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision = create_pledge(&mut store, &request("today", 5.0, None), now()).unwrap();
        assert!(decision.is_accepted());
    }

    #[test]
    fn test_expiry_checked_before_reward() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision =
            create_pledge(&mut store, &request("closed", 1.0, Some("missing")), now()).unwrap();
        assert!(matches!(decision, PledgeDecision::Rejected(Rejection::Expired)));
    }

    #[test]
    fn test_unknown_reward_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision =
            create_pledge(&mut store, &request("open", 100.0, Some("r-missing")), now()).unwrap();

        assert!(matches!(
            decision,
            PledgeDecision::Rejected(Rejection::RewardNotFound)
        ));
        assert_eq!(current_amount(&store, "open"), 100.0);
        assert_eq!(store.pledges()[0].reward_id.as_deref(), Some("r-missing"));
    }

    #[test]
    fn test_reward_of_another_project_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision =
            create_pledge(&mut store, &request("open", 100.0, Some("r-other")), now()).unwrap();
        assert!(matches!(
            decision,
            PledgeDecision::Rejected(Rejection::RewardNotFound)
        ));
    }

    #[test]
    fn test_below_minimum_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision =
            create_pledge(&mut store, &request("open", 10.0, Some("r-limited")), now()).unwrap();

        assert!(decision.message().contains("less than the minimum"));
        assert_eq!(current_amount(&store, "open"), 100.0);
        assert_eq!(store.reward("r-limited").unwrap().quota, Some(2));
    }

    #[test]
    fn test_out_of_stock_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let decision =
            create_pledge(&mut store, &request("open", 50.0, Some("r-gone")), now()).unwrap();

        assert_eq!(decision.message(), "Selected reward is out of stock.");
        assert_eq!(store.reward("r-gone").unwrap().quota, Some(0));
        assert_eq!(current_amount(&store, "open"), 100.0);
    }

    #[test]
    fn test_quota_counts_down_to_zero() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        let outcomes: Vec<bool> = (0..4)
            .map(|_| {
                create_pledge(&mut store, &request("open", 60.0, Some("r-limited")), now())
                    .unwrap()
                    .is_accepted()
            })
            .collect();

        assert_eq!(outcomes, vec![true, true, false, false]);
        assert_eq!(store.reward("r-limited").unwrap().quota, Some(0));
        assert_eq!(current_amount(&store, "open"), 220.0);
    }

    #[test]
    fn test_unlimited_reward_keeps_null_quota() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        for _ in 0..3 {
            assert!(create_pledge(&mut store, &request("open", 10.0, Some("r-free")), now())
                .unwrap()
                .is_accepted());
        }
        assert_eq!(store.reward("r-free").unwrap().quota, None);
    }

    #[test]
    fn test_total_matches_successful_pledges() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        let opening = current_amount(&store, "open");

        let attempts = [
            request("open", 20.0, None),
            request("open", 10.0, Some("r-limited")),
            request("open", 75.0, Some("r-limited")),
            request("open", 5.0, Some("r-gone")),
            request("open", 12.5, Some("r-free")),
        ];
        for attempt in &attempts {
            create_pledge(&mut store, attempt, now()).unwrap();
        }

        let successful: f64 = store
            .pledges()
            .iter()
            .filter(|p| p.project_id == "open" && p.is_success())
            .map(|p| p.amount)
            .sum();
        assert_eq!(current_amount(&store, "open"), opening + successful);
        assert_eq!(store.pledge_counts().success_count, 3);
        assert_eq!(store.pledge_counts().rejected_count, 2);
    }

    #[test]
    fn test_outcome_is_persisted() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);

        create_pledge(&mut store, &request("open", 60.0, Some("r-limited")), now()).unwrap();

        let reloaded = Store::load(store.path()).unwrap();
        assert_eq!(reloaded.data(), store.data());
        assert_eq!(reloaded.reward("r-limited").unwrap().quota, Some(1));
    }

    /// Make the next save fail by occupying its temp file path with a directory
    fn block_saves(store: &Store) {
        std::fs::create_dir_all(store.path().with_extension("json.tmp")).unwrap();
    }

    #[test]
    fn test_failed_save_rolls_back_accepted_pledge() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        block_saves(&store);

        let result = create_pledge(&mut store, &request("open", 60.0, Some("r-limited")), now());

        assert!(result.is_err());
        assert_eq!(current_amount(&store, "open"), 100.0);
        assert_eq!(store.reward("r-limited").unwrap().quota, Some(2));
        assert!(store.pledges().is_empty());
    }

    #[test]
    fn test_failed_save_drops_rejected_pledge() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = test_store(&temp_dir);
        block_saves(&store);

        let result = create_pledge(&mut store, &request("closed", 500.0, None), now());

        assert!(result.is_err());
        assert_eq!(current_amount(&store, "closed"), 100.0);
        assert!(store.pledges().is_empty());
    }
}
