//! Annotation Descriptor & Attribute Serialization
//!
//! Assembles the per-tag payload and renders it into the attribute block
//! spliced into the opening tag. The block is plain text, one leading space
//! per attribute, facets in fixed order regardless of configuration.

use serde::Serialize;
use std::collections::HashMap;

use crate::config::TaggerOptions;

// ═══════════════════════════════════════════════════════════════════════════════
// CONTENT SNAPSHOT
// ═══════════════════════════════════════════════════════════════════════════════

/// Static content captured for one element. An all-empty snapshot is
/// represented as absence upstream, never serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentSnapshot {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_name: Option<String>,
}

impl ContentSnapshot {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.placeholder.is_none() && self.class_name.is_none()
    }
}

/// Ephemeral payload for one opening tag; lives only for the duration of
/// processing that tag.
#[derive(Debug, Clone)]
pub struct AnnotationDescriptor {
    pub name: String,
    pub path: String,
    pub file_name: String,
    pub line: u32,
    pub column: u32,
    pub content: Option<ContentSnapshot>,
}

pub fn build_descriptor(
    name: &str,
    path: &str,
    file_name: &str,
    line: u32,
    column: u32,
    text: String,
    attrs: &HashMap<String, String>,
) -> AnnotationDescriptor {
    let non_empty = |value: &&String| !value.is_empty();
    let snapshot = ContentSnapshot {
        text: (!text.is_empty()).then_some(text),
        placeholder: attrs.get("placeholder").filter(non_empty).cloned(),
        class_name: attrs.get("className").filter(non_empty).cloned(),
    };
    AnnotationDescriptor {
        name: name.to_string(),
        path: path.to_string(),
        file_name: file_name.to_string(),
        line,
        column,
        content: (!snapshot.is_empty()).then_some(snapshot),
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// ATTRIBUTE SERIALIZATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Render the enabled facets as ` <prefix>-<facet>="<value>"` pieces, in
/// fixed order: id, name, path, line, file, content. Empty when every facet
/// is disabled or produces nothing.
pub fn serialize_attributes(descriptor: &AnnotationDescriptor, options: &TaggerOptions) -> String {
    let prefix = &options.attribute_prefix;
    let mut out = String::new();

    if options.include_id {
        out.push_str(&format!(
            " {}-id=\"{}:{}:{}\"",
            prefix, descriptor.path, descriptor.line, descriptor.column
        ));
    }
    if options.include_name {
        out.push_str(&format!(" {}-name=\"{}\"", prefix, descriptor.name));
    }
    if options.include_path {
        out.push_str(&format!(" {}-path=\"{}\"", prefix, descriptor.path));
    }
    if options.include_line {
        out.push_str(&format!(" {}-line=\"{}\"", prefix, descriptor.line));
    }
    if options.include_file {
        out.push_str(&format!(" {}-file=\"{}\"", prefix, descriptor.file_name));
    }
    if options.include_content {
        if let Some(snapshot) = &descriptor.content {
            if let Ok(json) = serde_json::to_string(snapshot) {
                out.push_str(&format!(
                    " {}-content=\"{}\"",
                    prefix,
                    encode_uri_component(&json)
                ));
            }
        }
    }

    out
}

/// Percent-encode `input` so it is safe inside a double-quoted attribute
/// value. Matches `encodeURIComponent`: ASCII alphanumerics and
/// `- _ . ! ~ * ' ( )` pass through, every other byte becomes `%XX`.
pub fn encode_uri_component(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for &byte in input.as_bytes() {
        if byte.is_ascii_alphanumeric()
            || matches!(byte, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
        {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{:02X}", byte));
        }
    }
    out
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
