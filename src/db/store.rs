use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::db::seed;
use crate::error::Result;
use crate::models::{Category, Pledge, PledgeStatus, Project, RewardTier, User};

/// The persisted document. Every key is an array of records.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Database {
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub reward_tiers: Vec<RewardTier>,
    #[serde(default)]
    pub pledges: Vec<Pledge>,
}

/// Success/rejected tally over all recorded pledges
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PledgeCounts {
    pub success_count: usize,
    pub rejected_count: usize,
}

/// In-memory copy of the data document, bound to the file it came from
///
/// Accessors hand out references into the live data; `save` rewrites the
/// whole document.
#[derive(Debug)]
pub struct Store {
    path: PathBuf,
    data: Database,
}

impl Store {
    /// Load the document at `path`, creating it from the seed dataset if absent
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if !path.exists() {
            tracing::info!("{:?} not found, creating sample data", path);
            let store = Self::with_data(path, seed::sample_database()?);
            store.save()?;
            return Ok(store);
        }

        let bytes = fs::read(&path)?;
        let data = serde_json::from_slice(&bytes)?;
        Ok(Self { path, data })
    }

    /// Wrap an existing document without touching the disk
    pub fn with_data(path: impl Into<PathBuf>, data: Database) -> Self {
        Self {
            path: path.into(),
            data,
        }
    }

    /// Overwrite the backing file with the full document
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let bytes = serde_json::to_vec_pretty(&self.data)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, bytes)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!("Store saved to {:?}", self.path);
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn data(&self) -> &Database {
        &self.data
    }

    pub fn projects(&self) -> &[Project] {
        &self.data.projects
    }

    pub fn project(&self, project_id: &str) -> Option<&Project> {
        self.data.projects.iter().find(|p| p.id == project_id)
    }

    pub fn project_mut(&mut self, project_id: &str) -> Option<&mut Project> {
        self.data.projects.iter_mut().find(|p| p.id == project_id)
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn reward_tiers(&self) -> &[RewardTier] {
        &self.data.reward_tiers
    }

    pub fn rewards_for_project(&self, project_id: &str) -> Vec<&RewardTier> {
        self.data
            .reward_tiers
            .iter()
            .filter(|r| r.project_id == project_id)
            .collect()
    }

    pub fn reward(&self, reward_id: &str) -> Option<&RewardTier> {
        self.data.reward_tiers.iter().find(|r| r.id == reward_id)
    }

    pub fn reward_mut(&mut self, reward_id: &str) -> Option<&mut RewardTier> {
        self.data.reward_tiers.iter_mut().find(|r| r.id == reward_id)
    }

    pub fn pledges(&self) -> &[Pledge] {
        &self.data.pledges
    }

    /// Append a pledge record. Callers decide when to `save`.
    pub fn record_pledge(&mut self, pledge: Pledge) {
        self.data.pledges.push(pledge);
    }

    /// Drop the most recently recorded pledge
    pub(crate) fn discard_last_pledge(&mut self) -> Option<Pledge> {
        self.data.pledges.pop()
    }

    /// Resolve a username to its user id
    pub fn authenticate(&self, username: &str) -> Option<&str> {
        self.data
            .users
            .iter()
            .find(|u| u.username == username)
            .map(|u| u.id.as_str())
    }

    pub fn pledge_counts(&self) -> PledgeCounts {
        self.data
            .pledges
            .iter()
            .fold(PledgeCounts::default(), |mut counts, p| {
                match p.status {
                    PledgeStatus::Success => counts.success_count += 1,
                    PledgeStatus::Rejected => counts.rejected_count += 1,
                }
                counts
            })
    }
}
