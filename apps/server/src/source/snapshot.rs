use std::sync::Arc;

use tokio::sync::OnceCell;

use super::DataSource;
use crate::error::AppResult;
use crate::models::BoardSnapshot;

/// Holds the dataset for the lifetime of the process.
///
/// The first successful fetch is kept; a failed fetch leaves the store empty
/// and the next caller fetches again.
pub struct SnapshotStore {
    source: Arc<dyn DataSource>,
    snapshot: OnceCell<Arc<BoardSnapshot>>,
}

impl SnapshotStore {
    pub fn new(source: Arc<dyn DataSource>) -> Self {
        Self {
            source,
            snapshot: OnceCell::new(),
        }
    }

    /// Returns the cached snapshot, fetching it on first use
    pub async fn snapshot(&self) -> AppResult<Arc<BoardSnapshot>> {
        let snapshot = self
            .snapshot
            .get_or_try_init(|| async {
                log::info!("Fetching tickets from {}", self.source.describe());
                match self.source.fetch().await {
                    Ok(dataset) => {
                        log::info!(
                            "Loaded {} tickets and {} users",
                            dataset.tickets.len(),
                            dataset.users.len()
                        );
                        Ok(Arc::new(BoardSnapshot::new(dataset)))
                    }
                    Err(e) => {
                        log::error!("Failed to load tickets: {}", e);
                        Err(e)
                    }
                }
            })
            .await?;

        Ok(Arc::clone(snapshot))
    }

    pub fn is_loaded(&self) -> bool {
        self.snapshot.initialized()
    }
}
