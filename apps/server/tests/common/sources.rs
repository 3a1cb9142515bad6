//! Test data sources

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;
use ticketboard::error::{AppError, AppResult};
use ticketboard::models::Dataset;
use ticketboard::source::{DataSource, SnapshotStore, StaticDataSource};

/// Always fails with a fetch error
pub struct FailingSource;

#[async_trait]
impl DataSource for FailingSource {
    async fn fetch(&self) -> AppResult<Dataset> {
        Err(AppError::DataFetch("HTTP 503".to_string()))
    }

    fn describe(&self) -> String {
        "failing source".to_string()
    }
}

/// Serves a dataset and counts how often it was asked to.
/// Fails the first `failures` calls.
pub struct CountingSource {
    dataset: Dataset,
    failures: usize,
    calls: AtomicUsize,
}

impl CountingSource {
    pub fn new(dataset: Dataset, failures: usize) -> Self {
        Self {
            dataset,
            failures,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DataSource for CountingSource {
    async fn fetch(&self) -> AppResult<Dataset> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(AppError::DataFetch("Connection failed".to_string()));
        }
        Ok(self.dataset.clone())
    }

    fn describe(&self) -> String {
        "counting source".to_string()
    }
}

pub fn static_store(dataset: Dataset) -> web::Data<SnapshotStore> {
    web::Data::new(SnapshotStore::new(Arc::new(StaticDataSource::new(dataset))))
}

pub fn failing_store() -> web::Data<SnapshotStore> {
    web::Data::new(SnapshotStore::new(Arc::new(FailingSource)))
}
