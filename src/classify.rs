//! Tag Classification
//!
//! Decides, per opening tag, whether the annotation pass touches it at all:
//! name extraction, fragment transparency, and the react-three-fiber
//! exclusion set.

use lazy_static::lazy_static;
use oxc_ast::ast::{JSXElementName, JSXMemberExpressionObject, JSXOpeningElement};
use std::collections::HashSet;

use crate::config::TaggerOptions;

// ═══════════════════════════════════════════════════════════════════════════════
// THREE-FIBER ELEMENT SET
// ═══════════════════════════════════════════════════════════════════════════════

lazy_static! {
    /// react-three-fiber scene-graph tags. Annotating these corrupts WebGL
    /// scene descriptions, so they are excluded wholesale when the filter is on.
    static ref THREE_FIBER_ELEMENTS: HashSet<&'static str> = {
        let mut s = HashSet::new();
        // Primitives
        s.insert("mesh");
        s.insert("group");
        s.insert("scene");
        s.insert("object3D");
        // Geometries
        s.insert("boxGeometry");
        s.insert("sphereGeometry");
        s.insert("planeGeometry");
        s.insert("cylinderGeometry");
        s.insert("coneGeometry");
        s.insert("torusGeometry");
        s.insert("torusKnotGeometry");
        s.insert("ringGeometry");
        s.insert("circleGeometry");
        s.insert("bufferGeometry");
        // Materials
        s.insert("meshBasicMaterial");
        s.insert("meshStandardMaterial");
        s.insert("meshPhysicalMaterial");
        s.insert("meshPhongMaterial");
        s.insert("meshLambertMaterial");
        s.insert("meshToonMaterial");
        s.insert("meshNormalMaterial");
        s.insert("meshMatcapMaterial");
        s.insert("shaderMaterial");
        s.insert("pointsMaterial");
        s.insert("lineBasicMaterial");
        // Lights
        s.insert("ambientLight");
        s.insert("directionalLight");
        s.insert("pointLight");
        s.insert("spotLight");
        s.insert("hemisphereLight");
        s.insert("rectAreaLight");
        // Cameras
        s.insert("perspectiveCamera");
        s.insert("orthographicCamera");
        // Higher-level helper components
        s.insert("Canvas");
        s.insert("OrbitControls");
        s.insert("TransformControls");
        s.insert("PerspectiveCamera");
        s.insert("OrthographicCamera");
        s.insert("Environment");
        s.insert("Sky");
        s.insert("Stars");
        s.insert("Cloud");
        s.insert("Html");
        s.insert("Text3D");
        s.insert("Billboard");
        s
    };
}

// ═══════════════════════════════════════════════════════════════════════════════
// CLASSIFICATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Outcome of classifying one opening tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Annotate this tag under the given canonical name.
    Tag(String),
    /// Fragment wrapper; transparent, never counted.
    Fragment,
    /// Excluded scene-graph element; counted as skipped.
    Filtered(String),
    /// Name shape the tagger does not understand; never counted.
    Unnamed,
}

/// Canonical element name: a simple identifier, or `Object.Property` for a
/// member-style tag. Deeper member chains and namespaced or `this`-based
/// names yield `None`.
pub fn element_name(name: &JSXElementName) -> Option<String> {
    match name {
        JSXElementName::Identifier(id) => Some(id.name.to_string()),
        JSXElementName::IdentifierReference(id) => Some(id.name.to_string()),
        JSXElementName::MemberExpression(member) => match &member.object {
            JSXMemberExpressionObject::IdentifierReference(object) => {
                Some(format!("{}.{}", object.name, member.property.name))
            }
            _ => None,
        },
        _ => None,
    }
}

pub fn is_fragment_name(name: &str) -> bool {
    name == "Fragment" || name == "React.Fragment"
}

pub fn is_three_fiber_element(name: &str) -> bool {
    THREE_FIBER_ELEMENTS.contains(name)
}

/// Check if a tag name represents a user-defined component (starts with uppercase)
pub fn is_component_name(name: &str) -> bool {
    name.chars().next().map(|c| c.is_uppercase()).unwrap_or(false)
}

pub fn classify(opening: &JSXOpeningElement, options: &TaggerOptions) -> Verdict {
    let name = match element_name(&opening.name) {
        Some(name) => name,
        None => return Verdict::Unnamed,
    };
    if is_fragment_name(&name) {
        return Verdict::Fragment;
    }
    if options.filter_three_elements && is_three_fiber_element(&name) {
        return Verdict::Filtered(name);
    }
    Verdict::Tag(name)
}

// ═══════════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════════
