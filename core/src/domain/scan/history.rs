use std::{
    collections::HashMap,
    sync::{Mutex, MutexGuard},
};

use uuid::Uuid;

use crate::domain::scan::entities::{Classification, ScanResult};

/// Session-scoped scan history, most recent first.
///
/// Results are appended in completion order; overlapping scans are not
/// reordered by submission time. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ScanHistory {
    entries: Mutex<Vec<ScanResult>>,
}

impl ScanHistory {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ScanResult>> {
        // a panic while holding the lock cannot leave the list half-written
        self.entries
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn record(&self, result: ScanResult) {
        self.lock().insert(0, result);
    }

    pub fn latest(&self) -> Option<ScanResult> {
        self.lock().first().cloned()
    }

    pub fn entries(&self) -> Vec<ScanResult> {
        self.lock().clone()
    }

    pub fn find(&self, id: Uuid) -> Option<ScanResult> {
        self.lock().iter().find(|result| result.id == id).cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    pub fn summary(&self) -> HashMap<Classification, usize> {
        let mut counts = HashMap::new();
        for result in self.lock().iter() {
            *counts.entry(result.classification).or_insert(0) += 1;
        }
        counts
    }
}
