use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use super::DataSource;
use crate::error::{AppError, AppResult};
use crate::models::Dataset;

/// Data source reading a JSON payload from disk
pub struct FileDataSource {
    path: PathBuf,
}

impl FileDataSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DataSource for FileDataSource {
    async fn fetch(&self) -> AppResult<Dataset> {
        let bytes = fs::read(&self.path).await.map_err(|e| {
            AppError::DataFetch(format!("Failed to read {}: {}", self.path.display(), e))
        })?;

        Dataset::from_slice(&bytes)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
