//! Lexer, parser, and AST for the **Simple Markup Language** (`.sml`), plus
//! the consumers that work purely on parsed trees.
//!
//! No renderer, file discovery, or process-wide state lives here; parses are
//! independent and can run in parallel.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`ast`] | `Element`, `PropertyValue`, `ElementBuilder`, `Document` |
//! | [`config`] | `ParserConfig` |
//! | [`error`] | `ParseError` |
//! | [`lexer`] | `Lexer`, `Token` |
//! | [`parser`] | `parse_str` / `parse_document` entry points |
//! | [`props`] | typed accessors with default-and-warn semantics, `Padding` |
//! | [`diagnostics`] | `DiagnosticSink`, `LogSink` |
//! | [`index`] | `ChildrenIndex` over element definitions |
//! | [`definition`] | `ElementDefinition` documentation view |
//! | [`style`] | `Theme`, `Color`, `FontWeight`, `TextAlign` |
//! | [`inline`] | inline markup → `StyledRun`s |
//!
//! # Quick start
//!
//! ```rust
//! use sml::parse_str;
//!
//! let src = r#"
//!     Column {
//!         padding: "8 16"
//!         Text { text: "Hello" fontSize: 14 }
//!     }
//! "#;
//!
//! let root = parse_str(src).unwrap();
//! assert_eq!(root.name(), "Column");
//! assert_eq!(root.padding().left, 16);
//! assert_eq!(root.children()[0].get_int("fontSize", 16), 14);
//! ```

pub mod ast;
pub mod config;
pub mod definition;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod inline;
pub mod lexer;
pub mod parser;
pub mod props;
pub mod style;

pub use ast::{Document, Element, ElementBuilder, PropertyValue};
pub use config::ParserConfig;
pub use diagnostics::{DiagnosticSink, LogSink};
pub use error::ParseError;
pub use index::ChildrenIndex;
pub use inline::{format_inline, StyleAttributes, StyledRun};
pub use parser::{parse_document, parse_document_with, parse_str, parse_str_with};
pub use props::Padding;

#[cfg(test)]
mod parse_tests {
    use super::*;

    fn ok(src: &str) { parse_str(src).unwrap(); }
    fn err(src: &str) { parse_str(src).unwrap_err(); }

    #[test] fn empty_element() { ok("Page { }"); }
    #[test] fn element_with_props() {
        ok(r#"Column { padding: "8"  Text { text: "hello" fontSize: 14 } }"#);
    }
    #[test] fn nested_elements() {
        ok("Page { Column { Row { Spacer { amount: 8 } } } }");
    }
    #[test] fn block_comment() {
        ok("/* header */ Page { /* body */ width: 8 /* tail */ }");
    }
    #[test] fn multiline_block_comment() {
        ok("/*\n * license\n */\nPage { }");
    }
    #[test] fn line_comment() {
        ok("// top\nPage {\n    // inside\n    width: 8\n}\n// end");
    }
    #[test] fn float_number() { ok("Image { scale: 0.75 }"); }
    #[test] fn booleans() { ok("Video { autoplay: true  loop: false }"); }
    #[test] fn multiline_string() { ok("Markdown { text: \"# Title\n\nBody\" }"); }
    #[test] fn several_roots() { ok("Page { } Page { }"); }
    #[test] fn full_app() {
        ok(r##"App {
            smlVersion: "1.1"
            name: "Course"
            Theme { primary: "#FF6200EE" onPrimary: "#FFFFFF" }
            Course {
                lang: "en" title: "Rust"
                Topic { label: "Intro" Lecture { label: "Hello" src: "hello.sml" duration: 5 } }
            }
        }"##);
    }
    #[test] fn err_empty() { err(""); }
    #[test] fn err_only_comment() { err("// nothing"); }
    #[test] fn err_unclosed_block() { err("Page { "); }
    #[test] fn err_unclosed_string() { err(r#"Text { text: "oops }"#); }
    #[test] fn err_double_colon() { err("Page { gap: : 8 }"); }
    #[test] fn err_negative_number() { err("Slider { min: -10 }"); }
    #[test] fn err_bare_identifier_value() { err("Text { color: red }"); }
    #[test] fn err_trailing_garbage() { err("Page { } }"); }
    #[test] fn err_property_at_top_level() { err("width: 8"); }
    #[test] fn err_non_ascii_identifier() { err("Größe { }"); }
}
