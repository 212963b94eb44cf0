pub mod seed;
pub mod store;

use std::path::Path;
use std::sync::{Arc, Mutex, MutexGuard};

pub use store::{Database, PledgeCounts, Store};

use crate::error::{AppError, Result};

/// Store handle (Arc-wrapped for sharing across handlers)
///
/// Every request holds the lock for its whole read-validate-write sequence.
pub type Db = Arc<Mutex<Store>>;

/// Open the JSON data file at the given path, seeding it on first run
pub fn open_store(path: impl AsRef<Path>) -> Result<Db> {
    tracing::info!("Opening data file at: {:?}", path.as_ref());

    let store = Store::load(path)?;

    tracing::info!(
        "Store loaded: {} projects, {} reward tiers, {} pledges",
        store.projects().len(),
        store.reward_tiers().len(),
        store.pledges().len()
    );

    Ok(Arc::new(Mutex::new(store)))
}

/// Acquire the store lock
pub fn lock(db: &Db) -> Result<MutexGuard<'_, Store>> {
    db.lock().map_err(|_| AppError::StorePoisoned)
}
