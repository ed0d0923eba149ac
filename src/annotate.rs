//! Annotation Pass
//!
//! Per-file pipeline: parse with oxc, walk the JSX tree once in document
//! order, and register one attribute-block insertion per taggable opening
//! tag. The original text is never rewritten, only spliced.

use oxc_allocator::Allocator;
use oxc_ast::ast::{JSXElement, JSXOpeningElement};
use oxc_ast_visit::{walk, Visit};
use oxc_parser::Parser;
use oxc_span::{GetSpan, SourceType};
use serde::Serialize;
use std::path::Path;
use tracing::{debug, warn};

use crate::classify::{classify, is_component_name, Verdict};
use crate::config::TaggerOptions;
use crate::descriptor::{build_descriptor, serialize_attributes};
use crate::extract::{extract_literal_attrs, extract_text};
use crate::splice::{LineIndex, PositionMap, SourceEditor};
use crate::stats::RunStats;

/// Modified source plus the map back to the original, for one file.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnnotateResult {
    pub code: String,
    pub map: PositionMap,
    pub tagged: u32,
    pub skipped: u32,
}

// ═══════════════════════════════════════════════════════════════════════════════
// OFFSET RESOLUTION
// ═══════════════════════════════════════════════════════════════════════════════

/// Byte offset at which the attribute block is spliced: right after the
/// type-argument list when the tag carries one, else right after the name
/// token. Inserting there is valid no matter how many attributes, spreads,
/// or line breaks the tag already has. 0 means no usable span; callers must
/// treat it as a no-op.
pub fn resolve_insert_offset(opening: &JSXOpeningElement) -> u32 {
    if let Some(type_args) = &opening.type_arguments {
        return type_args.span.end;
    }
    opening.name.span().end
}

fn source_type_for(file_path: &str) -> SourceType {
    match Path::new(file_path).extension().and_then(|e| e.to_str()) {
        Some("ts") | Some("tsx") => SourceType::tsx(),
        _ => SourceType::jsx(),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// TRAVERSAL
// ═══════════════════════════════════════════════════════════════════════════════

struct Annotator<'a, 'src> {
    options: &'a TaggerOptions,
    path: String,
    file_name: String,
    index: &'a LineIndex<'src>,
    editor: &'a mut SourceEditor<'src>,
    tagged: u32,
    skipped: u32,
}

impl Annotator<'_, '_> {
    fn process_element(&mut self, element: &JSXElement<'_>) {
        let opening = &element.opening_element;
        match classify(opening, self.options) {
            // Fragments and unrecognized name shapes are transparent.
            Verdict::Unnamed | Verdict::Fragment => {}
            Verdict::Filtered(name) => {
                self.skipped += 1;
                if self.options.debug {
                    debug!(element = %name, "skipped 3D element");
                }
            }
            Verdict::Tag(name) => {
                let offset = resolve_insert_offset(opening);
                if offset == 0 {
                    return;
                }
                let (line, column) = self.index.line_col(opening.span.start);
                let text = extract_text(element);
                let attrs = extract_literal_attrs(opening);
                let descriptor = build_descriptor(
                    &name,
                    &self.path,
                    &self.file_name,
                    line,
                    column,
                    text,
                    &attrs,
                );
                let block = serialize_attributes(&descriptor, self.options);
                if !block.is_empty() {
                    if self.options.debug {
                        debug!(
                            element = %descriptor.name,
                            line,
                            column,
                            component = is_component_name(&descriptor.name),
                            "tagged element"
                        );
                    }
                    self.editor.insert(offset, block);
                    self.tagged += 1;
                }
            }
        }
    }
}

impl<'ast> Visit<'ast> for Annotator<'_, '_> {
    fn visit_jsx_element(&mut self, element: &JSXElement<'ast>) {
        // The element in hand is the enclosing element of its own opening
        // tag, so content attribution cannot leak across siblings.
        self.process_element(element);
        walk::walk_jsx_element(self, element);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// PER-FILE ENTRY
// ═══════════════════════════════════════════════════════════════════════════════

/// Annotate one file's source. Returns `None` when the file produces no
/// change: parse failure, or no taggable element. Failures are file-scoped;
/// the caller keeps going.
pub fn annotate_source(
    source: &str,
    file_path: &str,
    options: &TaggerOptions,
    stats: &RunStats,
) -> Option<AnnotateResult> {
    stats.record_file_seen();

    let allocator = Allocator::default();
    let parsed = Parser::new(&allocator, source, source_type_for(file_path)).parse();
    if parsed.panicked || !parsed.errors.is_empty() {
        // Splice offsets against a partially-recovered tree are not
        // trustworthy, so any diagnostic abandons the file.
        warn!(
            file = file_path,
            errors = parsed.errors.len(),
            "parse failed, file left untouched"
        );
        return None;
    }

    let index = LineIndex::new(source);
    let mut editor = SourceEditor::new(source);
    let mut annotator = Annotator {
        options,
        path: options.resolve_path(file_path),
        file_name: TaggerOptions::file_name(file_path),
        index: &index,
        editor: &mut editor,
        tagged: 0,
        skipped: 0,
    };
    annotator.visit_program(&parsed.program);
    let (tagged, skipped) = (annotator.tagged, annotator.skipped);

    stats.record_file_processed();
    stats.record_tagged(tagged as u64);
    stats.record_skipped(skipped as u64);

    if editor.is_empty() {
        return None;
    }
    let (code, map) = editor.finalize(&index);
    Some(AnnotateResult {
        code,
        map,
        tagged,
        skipped,
    })
}
