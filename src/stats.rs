//! Run Statistics
//!
//! Counters for one tagger instance. Files may be annotated in parallel by
//! the host pipeline, so increments are atomic.

#[cfg(feature = "napi")]
use napi_derive::napi;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct RunStats {
    files_seen: AtomicU64,
    files_processed: AtomicU64,
    elements_tagged: AtomicU64,
    elements_skipped: AtomicU64,
}

impl RunStats {
    pub fn new() -> Self {
        RunStats::default()
    }

    pub fn record_file_seen(&self) {
        self.files_seen.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_file_processed(&self) {
        self.files_processed.fetch_add(1, Ordering::SeqCst);
    }

    pub fn record_tagged(&self, count: u64) {
        self.elements_tagged.fetch_add(count, Ordering::SeqCst);
    }

    pub fn record_skipped(&self, count: u64) {
        self.elements_skipped.fetch_add(count, Ordering::SeqCst);
    }

    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            files_seen: self.files_seen.load(Ordering::SeqCst) as u32,
            files_processed: self.files_processed.load(Ordering::SeqCst) as u32,
            elements_tagged: self.elements_tagged.load(Ordering::SeqCst) as u32,
            elements_skipped: self.elements_skipped.load(Ordering::SeqCst) as u32,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "napi", napi(object))]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub files_seen: u32,
    pub files_processed: u32,
    pub elements_tagged: u32,
    pub elements_skipped: u32,
}
