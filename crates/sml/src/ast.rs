use std::fmt;

use indexmap::IndexMap;

// ── PropertyValue ─────────────────────────────────────────────────────────

/// A literal value in a property.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    /// Quoted string: `"hello"`
    String(String),
    /// Integer literal: `16`
    Integer(i32),
    /// Float literal: `0.75` (always `digits.digits`)
    Float(f32),
    /// `true` / `false`
    Boolean(bool),
}

impl PropertyValue {
    /// Name of the variant, as shown in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            PropertyValue::String(_) => "String",
            PropertyValue::Integer(_) => "Integer",
            PropertyValue::Float(_) => "Float",
            PropertyValue::Boolean(_) => "Boolean",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::String(s) => write!(f, "\"{s}\""),
            PropertyValue::Integer(v) => write!(f, "{v}"),
            PropertyValue::Float(v) => write!(f, "{v:?}"),
            PropertyValue::Boolean(v) => write!(f, "{v}"),
        }
    }
}

// ── Element ───────────────────────────────────────────────────────────────

/// A named node with properties and ordered children.
///
/// ```sml
/// Column {
///     padding: "8 16"
///     Text { text: "Hello" }
/// }
/// ```
///
/// Property values are read through the typed accessors
/// ([`Element::get_string`] and friends); the map itself is not exposed.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    name: String,
    properties: IndexMap<String, PropertyValue>,
    children: Vec<Element>,
}

impl Element {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Child elements in source order.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// First direct child with the given name.
    pub fn child(&self, name: &str) -> Option<&Element> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All direct children with the given name, in source order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Element> + 'a {
        self.children.iter().filter(move |c| c.name == name)
    }

    /// Property keys in first-occurrence order.
    pub fn property_keys(&self) -> impl Iterator<Item = &str> {
        self.properties.keys().map(String::as_str)
    }

    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    pub(crate) fn raw_property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

// ── ElementBuilder ────────────────────────────────────────────────────────

/// Assembles an [`Element`] member by member.
///
/// The parser feeds it in source order: a repeated property key overwrites the
/// earlier value (keeping the key's original position), children are appended.
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    element: Element,
}

impl ElementBuilder {
    /// # Panics
    ///
    /// Debug builds assert that `name` is non-empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "element name must not be empty");
        Self {
            element: Element { name, properties: IndexMap::new(), children: Vec::new() },
        }
    }

    pub fn property(mut self, key: impl Into<String>, value: PropertyValue) -> Self {
        self.push_property(key, value);
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn push_property(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.element.properties.insert(key.into(), value);
    }

    pub fn push_child(&mut self, child: Element) {
        self.element.children.push(child);
    }

    pub fn build(self) -> Element {
        self.element
    }
}

// ── Document ──────────────────────────────────────────────────────────────

/// Every top-level element of a `.sml` source, in source order.
///
/// The grammar requires at least one, so [`Document::root`] always exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
    rest: Vec<Element>,
}

impl Document {
    pub(crate) fn new(root: Element, rest: Vec<Element>) -> Self {
        Self { root, rest }
    }

    /// The first top-level element: the only one consumers read.
    pub fn root(&self) -> &Element {
        &self.root
    }

    /// All top-level elements, the root first.
    pub fn roots(&self) -> impl Iterator<Item = &Element> {
        std::iter::once(&self.root).chain(self.rest.iter())
    }

    pub fn root_count(&self) -> usize {
        1 + self.rest.len()
    }

    pub fn into_root(self) -> Element {
        self.root
    }
}
