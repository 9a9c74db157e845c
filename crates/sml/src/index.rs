use std::collections::HashMap;

use crate::ast::Element;
use crate::diagnostics::DiagnosticSink;
use crate::props::get_string;

/// Reverse index over element definitions: root name → names of the elements
/// that list that root under `AllowedRoots { Root { name: "..." } }`.
///
/// ```sml
/// Element {
///     name: "Button"
///     AllowedRoots {
///         Root { name: "Column" }
///         Root { name: "Row" }
///     }
/// }
/// ```
///
/// Buckets keep insertion order and may repeat names; [`ChildrenIndex::sorted`]
/// is the read-side view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChildrenIndex {
    map: HashMap<String, Vec<String>>,
}

impl ChildrenIndex {
    /// Build the index from one top-level element per definition document.
    pub fn build<'a>(
        definitions: impl IntoIterator<Item = &'a Element>,
        sink: &mut dyn DiagnosticSink,
    ) -> Self {
        let mut index = Self::default();
        for node in definitions {
            index.add(node, sink);
        }
        index
    }

    /// Record everything one definition declares.
    pub fn add(&mut self, node: &Element, sink: &mut dyn DiagnosticSink) {
        let Some(roots) = node.child("AllowedRoots") else {
            return;
        };
        let element_name = get_string(node, "name", "", sink);
        for root in roots.children_named("Root") {
            let root_name = get_string(root, "name", "", sink);
            self.map.entry(root_name).or_default().push(element_name.clone());
        }
    }

    /// Raw bucket for `root`, in insertion order.
    pub fn get(&self, root: &str) -> &[String] {
        self.map.get(root).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Bucket for `root`, sorted and without duplicates.
    pub fn sorted(&self, root: &str) -> Vec<String> {
        let mut names = self.get(root).to_vec();
        names.sort();
        names.dedup();
        names
    }

    /// Root names in sorted order.
    pub fn roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = self.map.keys().map(String::as_str).collect();
        roots.sort_unstable();
        roots
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    fn def(name: &str, roots: &[&str]) -> Element {
        let roots: String = roots.iter().map(|r| format!("Root {{ name: \"{r}\" }} ")).collect();
        parse_str(&format!("Element {{ name: \"{name}\" AllowedRoots {{ {roots} }} }}")).unwrap()
    }

    #[test]
    fn shared_root_collects_both_elements() {
        let defs = [def("Button", &["Column"]), def("Image", &["Column"])];
        let mut warnings: Vec<String> = Vec::new();
        let index = ChildrenIndex::build(&defs, &mut warnings);
        assert_eq!(index.sorted("Column"), vec!["Button", "Image"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn element_without_allowed_roots_contributes_nothing() {
        let plain = parse_str(r#"Element { name: "Page" }"#).unwrap();
        let mut warnings: Vec<String> = Vec::new();
        let index = ChildrenIndex::build([&plain], &mut warnings);
        assert!(index.is_empty());
    }

    #[test]
    fn duplicates_kept_until_read() {
        let defs = [def("Text", &["Row", "Row"]), def("Button", &["Row"])];
        let mut warnings: Vec<String> = Vec::new();
        let index = ChildrenIndex::build(&defs, &mut warnings);
        assert_eq!(index.get("Row"), ["Text", "Text", "Button"]);
        assert_eq!(index.sorted("Row"), vec!["Button", "Text"]);
        assert_eq!(index.roots(), vec!["Row"]);
        assert!(index.get("Column").is_empty());
    }

    #[test]
    fn only_direct_children_count() {
        let nested = parse_str(
            r#"Element { name: "Deep" Wrapper { AllowedRoots { Root { name: "Page" } } } }"#,
        )
        .unwrap();
        let mut warnings: Vec<String> = Vec::new();
        assert!(ChildrenIndex::build([&nested], &mut warnings).is_empty());
    }
}
