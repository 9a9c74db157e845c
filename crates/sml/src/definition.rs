use crate::ast::Element;
use crate::diagnostics::DiagnosticSink;
use crate::props::get_string;

/// One documented property of an element definition.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyDoc {
    pub name: String,
    pub kind: String,
    pub default: String,
    pub description: String,
}

/// The documentation-relevant view of an element definition document.
///
/// ```sml
/// Element {
///     name: "Button"
///     description: "A clickable button"
///     Properties {
///         Property { name: "label" type: "String" default: "" description: "Caption" }
///     }
///     AllowedRoots { Root { name: "Column" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementDefinition {
    pub name: String,
    pub description: String,
    pub properties: Vec<PropertyDoc>,
    /// Non-blank `Root` names from the first `AllowedRoots` block.
    pub allowed_roots: Vec<String>,
}

impl ElementDefinition {
    pub fn from_element(node: &Element, sink: &mut dyn DiagnosticSink) -> Self {
        let properties = node
            .child("Properties")
            .map(|props| {
                props
                    .children_named("Property")
                    .map(|p| PropertyDoc {
                        name: get_string(p, "name", "", sink),
                        kind: get_string(p, "type", "", sink),
                        default: get_string(p, "default", "", sink),
                        description: get_string(p, "description", "", sink),
                    })
                    .collect()
            })
            .unwrap_or_default();

        let allowed_roots = node
            .child("AllowedRoots")
            .map(|roots| {
                roots
                    .children_named("Root")
                    .map(|r| get_string(r, "name", "", sink))
                    .filter(|name| !name.trim().is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: get_string(node, "name", "Unknown", sink),
            description: get_string(node, "description", "", sink),
            properties,
            allowed_roots,
        }
    }
}
