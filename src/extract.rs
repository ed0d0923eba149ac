//! Static Content Extraction
//!
//! Pulls the statically-knowable text out of an element: literal text
//! children and literal-valued attributes. Dynamic expressions are never
//! evaluated and contribute nothing.

use oxc_ast::ast::{
    JSXAttributeItem, JSXAttributeName, JSXAttributeValue, JSXChild, JSXElement, JSXExpression,
    JSXOpeningElement,
};
use std::collections::HashMap;

/// Shape of a JSX attribute value, reduced to what the extractor cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttrValueKind<'a> {
    /// `attr="literal"`
    LiteralString(&'a str),
    /// `attr={"literal"}`
    WrappedLiteral(&'a str),
    /// Dynamic expression, boolean shorthand, element value, fragment value.
    Other,
}

pub fn classify_attr_value<'a>(value: Option<&'a JSXAttributeValue<'a>>) -> AttrValueKind<'a> {
    match value {
        Some(JSXAttributeValue::StringLiteral(s)) => AttrValueKind::LiteralString(s.value.as_str()),
        Some(JSXAttributeValue::ExpressionContainer(container)) => match &container.expression {
            JSXExpression::StringLiteral(s) => AttrValueKind::WrappedLiteral(s.value.as_str()),
            _ => AttrValueKind::Other,
        },
        _ => AttrValueKind::Other,
    }
}

/// Concatenated literal text children of `element`, in document order.
/// Each piece is trimmed; non-empty pieces are joined with a single space.
pub fn extract_text(element: &JSXElement) -> String {
    let mut pieces: Vec<&str> = Vec::new();
    for child in &element.children {
        match child {
            JSXChild::Text(text) => {
                let trimmed = text.value.trim();
                if !trimmed.is_empty() {
                    pieces.push(trimmed);
                }
            }
            JSXChild::ExpressionContainer(container) => {
                if let JSXExpression::StringLiteral(s) = &container.expression {
                    let trimmed = s.value.trim();
                    if !trimmed.is_empty() {
                        pieces.push(trimmed);
                    }
                }
            }
            _ => {}
        }
    }
    pieces.join(" ")
}

/// Literal-valued attributes of an opening tag, keyed by attribute name.
/// Source order is preserved by iteration, so a repeated name keeps its
/// last-seen value. Spread and namespaced attributes are ignored.
pub fn extract_literal_attrs(opening: &JSXOpeningElement) -> HashMap<String, String> {
    let mut attrs = HashMap::new();
    for item in &opening.attributes {
        let attr = match item {
            JSXAttributeItem::Attribute(attr) => attr,
            JSXAttributeItem::SpreadAttribute(_) => continue,
        };
        let name = match &attr.name {
            JSXAttributeName::Identifier(id) => id.name.to_string(),
            JSXAttributeName::NamespacedName(_) => continue,
        };
        match classify_attr_value(attr.value.as_ref()) {
            AttrValueKind::LiteralString(value) | AttrValueKind::WrappedLiteral(value) => {
                attrs.insert(name, value.to_string());
            }
            AttrValueKind::Other => {}
        }
    }
    attrs
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
