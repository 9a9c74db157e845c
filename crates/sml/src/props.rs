//! Typed property accessors.
//!
//! Every accessor takes a default. The stored value is returned only when its
//! variant matches the requested type; a mismatch reports one warning to the
//! sink and yields the default, an absent key yields the default silently.

use std::fmt;

use crate::ast::{Element, PropertyValue};
use crate::diagnostics::{DiagnosticSink, LogSink};

// ── PropertyType ──────────────────────────────────────────────────────────

/// A Rust type that one [`PropertyValue`] variant converts into.
pub trait PropertyType: Sized + fmt::Debug {
    /// Variant name used in warnings.
    const KIND: &'static str;

    fn from_value(value: &PropertyValue) -> Option<Self>;
}

impl PropertyType for String {
    const KIND: &'static str = "String";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::String(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl PropertyType for i32 {
    const KIND: &'static str = "Integer";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Integer(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for f32 {
    const KIND: &'static str = "Float";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Float(v) => Some(*v),
            _ => None,
        }
    }
}

impl PropertyType for bool {
    const KIND: &'static str = "Boolean";

    fn from_value(value: &PropertyValue) -> Option<Self> {
        match value {
            PropertyValue::Boolean(v) => Some(*v),
            _ => None,
        }
    }
}

/// Read `key` as `T`, falling back to `default`.
pub fn get_value<T: PropertyType>(
    node: &Element,
    key: &str,
    default: T,
    sink: &mut dyn DiagnosticSink,
) -> T {
    let Some(value) = node.raw_property(key) else {
        return default;
    };
    match T::from_value(value) {
        Some(v) => v,
        None => {
            sink.warning(&format!(
                "the value for '{key}' is not of type {} (found: {}); returning default {default:?}",
                T::KIND,
                value.kind()
            ));
            default
        }
    }
}

pub fn get_string(node: &Element, key: &str, default: &str, sink: &mut dyn DiagnosticSink) -> String {
    get_value(node, key, default.to_string(), sink)
}

pub fn get_int(node: &Element, key: &str, default: i32, sink: &mut dyn DiagnosticSink) -> i32 {
    get_value(node, key, default, sink)
}

pub fn get_float(node: &Element, key: &str, default: f32, sink: &mut dyn DiagnosticSink) -> f32 {
    get_value(node, key, default, sink)
}

pub fn get_bool(node: &Element, key: &str, default: bool, sink: &mut dyn DiagnosticSink) -> bool {
    get_value(node, key, default, sink)
}

// ── Padding ───────────────────────────────────────────────────────────────

/// Insets on all four sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    #[inline]
    pub fn all(v: i32) -> Self {
        Self { top: v, right: v, bottom: v, left: v }
    }

    #[inline]
    pub fn symmetric(vertical: i32, horizontal: i32) -> Self {
        Self { top: vertical, bottom: vertical, left: horizontal, right: horizontal }
    }

    /// Positional-count rule over the `padding` string:
    /// one value for all sides, two for vertical/horizontal, four for
    /// top/right/bottom/left. Any other count gives zero padding.
    /// Tokens are split on single spaces; non-numeric ones are dropped.
    pub fn parse(text: &str) -> Self {
        let values: Vec<i32> = text.split(' ').filter_map(|t| t.parse().ok()).collect();
        match values.as_slice() {
            &[v] => Self::all(v),
            &[vertical, horizontal] => Self::symmetric(vertical, horizontal),
            &[top, right, bottom, left] => Self { top, right, bottom, left },
            _ => Self::default(),
        }
    }
}

/// Padding from the node's `padding` string property (default `"0"`).
pub fn get_padding(node: &Element, sink: &mut dyn DiagnosticSink) -> Padding {
    Padding::parse(&get_string(node, "padding", "0", sink))
}

// ── Element convenience ───────────────────────────────────────────────────

/// Accessors that report mismatches through [`LogSink`].
impl Element {
    pub fn get_string(&self, key: &str, default: &str) -> String {
        get_string(self, key, default, &mut LogSink)
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        get_int(self, key, default, &mut LogSink)
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        get_float(self, key, default, &mut LogSink)
    }

    pub fn get_bool(&self, key: &str, default: bool) -> bool {
        get_bool(self, key, default, &mut LogSink)
    }

    pub fn padding(&self) -> Padding {
        get_padding(self, &mut LogSink)
    }
}
