//! # Native JSX Debug Tagger
//!
//! Splices machine-readable `data-*` debug attributes into JSX/TSX element
//! opening tags: a stable identifier, the element name, its declared
//! position, and a snapshot of its static content. Insertions are purely
//! additive and land right after the tag name (or its type-argument list),
//! so the modified source stays byte-faithful to the original everywhere
//! else and every position maps back.
//!
//! ## Invariants
//!
//! 1. **Additive only**: no original byte is ever deleted or replaced.
//! 2. **Fixed facet order**: id, name, path, line, file, content,
//!    regardless of which facets the options enable.
//! 3. **File-scoped failure**: a file that fails to parse is reported as
//!    "no change" and never aborts the run.
//! 4. **Fragments are transparent**: `Fragment` / `React.Fragment` are
//!    neither tagged nor counted.

#[cfg(feature = "napi")]
use napi_derive::napi;

mod annotate;
mod classify;
mod config;
mod descriptor;
mod error;
mod extract;
mod pipeline;
mod splice;
mod stats;

#[cfg(test)]
mod annotate_tests;

pub use annotate::{annotate_source, resolve_insert_offset, AnnotateResult};
pub use classify::{
    classify, element_name, is_component_name, is_fragment_name, is_three_fiber_element, Verdict,
};
pub use config::{PathMode, TaggerOptions};
pub use descriptor::{
    build_descriptor, encode_uri_component, serialize_attributes, AnnotationDescriptor,
    ContentSnapshot,
};
pub use error::TaggerError;
pub use extract::{classify_attr_value, extract_literal_attrs, extract_text, AttrValueKind};
pub use pipeline::{should_process_file, DirectoryReport, FileReport, Tagger};
pub use splice::{LineIndex, MappedSegment, PositionMap, SourceEditor};
pub use stats::{RunStats, StatsSnapshot};

#[cfg(feature = "napi")]
pub use pipeline::{annotate_directory_native, annotate_source_native, should_process_file_native};

#[cfg(feature = "napi")]
#[napi]
pub fn tagger_bridge() -> String {
    "Tagger Native Bridge Connected".to_string()
}
