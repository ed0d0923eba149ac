//! Source Splicing
//!
//! A non-destructive text buffer over one file's original source. Insertions
//! accumulate against immutable byte offsets; finalization applies them in
//! ascending order and yields the modified text plus a map from every
//! modified-text range back to its original position.

use serde::{Deserialize, Serialize};
use tracing::warn;

// ═══════════════════════════════════════════════════════════════════════════════
// LINE INDEX
// ═══════════════════════════════════════════════════════════════════════════════

/// Line-start table over one source text. Lines are 1-based; columns are
/// 0-based character offsets within the line.
pub struct LineIndex<'a> {
    source: &'a str,
    line_starts: Vec<u32>,
}

impl<'a> LineIndex<'a> {
    pub fn new(source: &'a str) -> Self {
        let mut line_starts = vec![0u32];
        for (i, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(i as u32 + 1);
            }
        }
        LineIndex {
            source,
            line_starts,
        }
    }

    /// (line, column) of the byte offset, which must lie on a character
    /// boundary. Offsets past the end clamp to the last position.
    pub fn line_col(&self, offset: u32) -> (u32, u32) {
        let offset = (offset as usize).min(self.source.len());
        let line = match self.line_starts.binary_search(&(offset as u32)) {
            Ok(i) => i,
            Err(i) => i - 1,
        };
        let line_start = self.line_starts[line] as usize;
        let column = self.source[line_start..offset].chars().count() as u32;
        (line as u32 + 1, column)
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// POSITION MAP
// ═══════════════════════════════════════════════════════════════════════════════

/// One contiguous run of the modified text. Original runs map byte-for-byte;
/// inserted runs map wholly to their insertion point.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappedSegment {
    pub new_start: u32,
    pub new_end: u32,
    pub orig_offset: u32,
    pub orig_line: u32,
    pub orig_column: u32,
    pub inserted: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionMap {
    pub segments: Vec<MappedSegment>,
}

impl PositionMap {
    /// Original byte offset a modified-text offset derives from.
    pub fn original_offset_of(&self, new_offset: u32) -> Option<u32> {
        let idx = self.segments.partition_point(|s| s.new_end <= new_offset);
        let segment = self.segments.get(idx)?;
        if new_offset < segment.new_start {
            return None;
        }
        Some(if segment.inserted {
            segment.orig_offset
        } else {
            segment.orig_offset + (new_offset - segment.new_start)
        })
    }

    /// Original (line, column) a modified-text offset derives from.
    pub fn original_position_of(&self, new_offset: u32, index: &LineIndex) -> Option<(u32, u32)> {
        self.original_offset_of(new_offset)
            .map(|offset| index.line_col(offset))
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SOURCE EDITOR
// ═══════════════════════════════════════════════════════════════════════════════

struct Insertion {
    offset: u32,
    text: String,
}

pub struct SourceEditor<'a> {
    source: &'a str,
    insertions: Vec<Insertion>,
}

impl<'a> SourceEditor<'a> {
    pub fn new(source: &'a str) -> Self {
        SourceEditor {
            source,
            insertions: Vec::new(),
        }
    }

    /// Register `text` for insertion at `offset`. Repeated insertions at the
    /// same offset accumulate in registration order, each landing to the left
    /// of the content already at that offset.
    pub fn insert(&mut self, offset: u32, text: String) {
        if offset as usize > self.source.len() {
            warn!(offset, len = self.source.len(), "insertion past end of source, ignored");
            return;
        }
        self.insertions.push(Insertion { offset, text });
    }

    pub fn is_empty(&self) -> bool {
        self.insertions.is_empty()
    }

    /// Apply all insertions in ascending offset order (stable, so equal
    /// offsets keep FIFO order) and emit the modified text with its map.
    /// No original byte is deleted or replaced.
    pub fn finalize(self, index: &LineIndex) -> (String, PositionMap) {
        let source = self.source;
        let mut insertions = self.insertions;
        insertions.sort_by_key(|i| i.offset);

        let added: usize = insertions.iter().map(|i| i.text.len()).sum();
        let mut out = String::with_capacity(source.len() + added);
        let mut segments = Vec::with_capacity(insertions.len() * 2 + 1);
        let mut orig_cursor = 0u32;
        let mut new_cursor = 0u32;

        let push_original = |upto: u32, new_cursor: &mut u32, out: &mut String,
                                 segments: &mut Vec<MappedSegment>,
                                 orig_cursor: &mut u32| {
            if upto > *orig_cursor {
                let chunk = &source[*orig_cursor as usize..upto as usize];
                let (line, column) = index.line_col(*orig_cursor);
                segments.push(MappedSegment {
                    new_start: *new_cursor,
                    new_end: *new_cursor + chunk.len() as u32,
                    orig_offset: *orig_cursor,
                    orig_line: line,
                    orig_column: column,
                    inserted: false,
                });
                out.push_str(chunk);
                *new_cursor += chunk.len() as u32;
                *orig_cursor = upto;
            }
        };

        for insertion in &insertions {
            push_original(
                insertion.offset,
                &mut new_cursor,
                &mut out,
                &mut segments,
                &mut orig_cursor,
            );
            let (line, column) = index.line_col(insertion.offset);
            segments.push(MappedSegment {
                new_start: new_cursor,
                new_end: new_cursor + insertion.text.len() as u32,
                orig_offset: insertion.offset,
                orig_line: line,
                orig_column: column,
                inserted: true,
            });
            out.push_str(&insertion.text);
            new_cursor += insertion.text.len() as u32;
        }
        push_original(
            source.len() as u32,
            &mut new_cursor,
            &mut out,
            &mut segments,
            &mut orig_cursor,
        );

        (out, PositionMap { segments })
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
