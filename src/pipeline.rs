//! Build-Pipeline Shell
//!
//! Everything between the host bundler and the annotation pass: file
//! filtering, the per-instance `Tagger`, a recursive batch mode, and the
//! native entry points. A `null`/`None` result always means "no change".

use lazy_static::lazy_static;
use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::warn;
use walkdir::WalkDir;

use crate::annotate::{annotate_source, AnnotateResult};
use crate::config::TaggerOptions;
use crate::error::TaggerError;
use crate::stats::{RunStats, StatsSnapshot};

lazy_static! {
    /// Cheap pre-check: a file with no `<letter` cannot open a JSX tag.
    static ref JSX_HINT_RE: Regex = Regex::new(r"<[A-Za-z]").unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════════
// FILE FILTERING
// ═══════════════════════════════════════════════════════════════════════════════

/// Extension allow-list plus excluded-path substrings.
pub fn should_process_file(file_path: &str, options: &TaggerOptions) -> bool {
    let ext = match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some(ext) => ext,
        None => return false,
    };
    let included = options
        .included_extensions
        .iter()
        .any(|e| e.trim_start_matches('.') == ext);
    if !included {
        return false;
    }
    !options
        .excluded_paths
        .iter()
        .any(|p| !p.is_empty() && file_path.contains(p.as_str()))
}

// ═══════════════════════════════════════════════════════════════════════════════
// TAGGER INSTANCE
// ═══════════════════════════════════════════════════════════════════════════════

/// One plugin instance: immutable options plus the statistics for one build
/// run. Dropping the instance drops its counters.
pub struct Tagger {
    options: TaggerOptions,
    stats: RunStats,
}

impl Tagger {
    pub fn new(options: TaggerOptions) -> Self {
        Tagger {
            options,
            stats: RunStats::new(),
        }
    }

    pub fn options(&self) -> &TaggerOptions {
        &self.options
    }

    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Per-file inbound call from the host pipeline.
    pub fn annotate(&self, source: &str, file_path: &str) -> Option<AnnotateResult> {
        if !should_process_file(file_path, &self.options) {
            self.stats.record_file_seen();
            return None;
        }
        if !JSX_HINT_RE.is_match(source) {
            self.stats.record_file_seen();
            self.stats.record_file_processed();
            return None;
        }
        annotate_source(source, file_path, &self.options, &self.stats)
    }

    pub fn annotate_file(&self, path: &Path) -> Result<Option<AnnotateResult>, TaggerError> {
        let source = fs::read_to_string(path).map_err(|e| TaggerError::Io {
            path: path.display().to_string(),
            source: e,
        })?;
        Ok(self.annotate(&source, &path.to_string_lossy()))
    }

    /// Recursively annotate every matching file under `base_dir`. Files are
    /// processed in parallel; one file's failure never stops the walk.
    pub fn annotate_directory(&self, base_dir: &Path) -> DirectoryReport {
        let files: Vec<_> = WalkDir::new(base_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(Result::ok)
            .filter(|entry| entry.path().is_file())
            .map(|entry| entry.into_path())
            .filter(|path| should_process_file(&path.to_string_lossy(), &self.options))
            .collect();

        let mut reports: Vec<FileReport> = files
            .par_iter()
            .filter_map(|path| match self.annotate_file(path) {
                Ok(result) => Some(FileReport {
                    path: path.display().to_string(),
                    tagged: result.as_ref().map(|r| r.tagged).unwrap_or(0),
                    skipped: result.as_ref().map(|r| r.skipped).unwrap_or(0),
                    changed: result.is_some(),
                }),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "failed to annotate file");
                    None
                }
            })
            .collect();
        reports.sort_by(|a, b| a.path.cmp(&b.path));

        DirectoryReport {
            files: reports,
            stats: self.stats.snapshot(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: String,
    pub tagged: u32,
    pub skipped: u32,
    pub changed: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryReport {
    pub files: Vec<FileReport>,
    pub stats: StatsSnapshot,
}

// ═══════════════════════════════════════════════════════════════════════════════
// NAPI EXPORTS
// ═══════════════════════════════════════════════════════════════════════════════

#[cfg(feature = "napi")]
use napi_derive::napi;

#[cfg(feature = "napi")]
fn parse_options(options_json: &str) -> napi::Result<TaggerOptions> {
    TaggerOptions::from_json(options_json).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi")]
#[napi]
pub fn annotate_source_native(
    source: String,
    file_path: String,
    options_json: String,
) -> napi::Result<serde_json::Value> {
    let tagger = Tagger::new(parse_options(&options_json)?);
    match tagger.annotate(&source, &file_path) {
        Some(result) => {
            serde_json::to_value(&result).map_err(|e| napi::Error::from_reason(e.to_string()))
        }
        None => Ok(serde_json::Value::Null),
    }
}

#[cfg(feature = "napi")]
#[napi]
pub fn annotate_directory_native(
    base_dir: String,
    options_json: String,
) -> napi::Result<serde_json::Value> {
    let tagger = Tagger::new(parse_options(&options_json)?);
    let report = tagger.annotate_directory(Path::new(&base_dir));
    serde_json::to_value(&report).map_err(|e| napi::Error::from_reason(e.to_string()))
}

#[cfg(feature = "napi")]
#[napi]
pub fn should_process_file_native(file_path: String, options_json: String) -> bool {
    let options = TaggerOptions::from_json(&options_json).unwrap_or_default();
    should_process_file(&file_path, &options)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
