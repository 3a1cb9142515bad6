//! Ticket data sources.
//!
//! A data source produces the `{ tickets, users }` payload the board is
//! built from. The board service never talks to the network itself; it only
//! consumes an already fetched [`Dataset`].

pub mod file;
pub mod http;
pub mod snapshot;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::DataSourceConfig;
use crate::error::AppResult;
use crate::models::Dataset;

pub use file::FileDataSource;
pub use http::HttpDataSource;
pub use snapshot::SnapshotStore;

/// Trait for ticket data sources (Strategy pattern)
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Loads and validates the full payload
    async fn fetch(&self) -> AppResult<Dataset>;

    /// Human readable origin, for logs
    fn describe(&self) -> String;
}

/// Data source serving a fixed in-memory dataset
pub struct StaticDataSource {
    dataset: Dataset,
}

impl StaticDataSource {
    pub fn new(dataset: Dataset) -> Self {
        Self { dataset }
    }
}

#[async_trait]
impl DataSource for StaticDataSource {
    async fn fetch(&self) -> AppResult<Dataset> {
        self.dataset.validate()?;
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        format!("in-memory dataset ({} tickets)", self.dataset.tickets.len())
    }
}

/// Creates the data source selected by configuration.
///
/// A configured file wins over the URL.
pub fn create_data_source(config: &DataSourceConfig) -> AppResult<Arc<dyn DataSource>> {
    match &config.file {
        Some(path) => Ok(Arc::new(FileDataSource::new(path))),
        None => Ok(Arc::new(HttpDataSource::new(&config.url, config.timeout)?)),
    }
}
