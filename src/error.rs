use thiserror::Error;

/// Errors surfaced to the host pipeline. Parse failures are deliberately not
/// represented here: a file that fails to parse is reported as "no change"
/// and never aborts the run.
#[derive(Debug, Error)]
pub enum TaggerError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid tagger options: {0}")]
    Options(#[from] serde_json::Error),
}
