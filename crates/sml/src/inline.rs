//! Lightweight inline markup → styled text runs.
//!
//! A single left-to-right scan per line; there is no nesting and nothing spans
//! lines. At each position the first matching rule wins:
//!
//! | Syntax | Result |
//! |--------|--------|
//! | `` `code` `` | monospace run (unclosed: rest of line) |
//! | `# ` … `###### ` | heading run for the rest of the line |
//! | `![alt](src)` | dropped |
//! | `[text](url)` | hyperlink run |
//! | `<tag>` | dropped |
//! | `***x***`, `**x**`, `*x*`, `~~x~~` | bold-italic, bold, italic, strikethrough |
//! | `(c)`, `(r)`, `(tm)` | ©, ®, ™ (any case) |
//!
//! An opening emphasis marker without a closing one on the same line is
//! emitted as literal text.

use crate::ast::Element;
use crate::diagnostics::DiagnosticSink;
use crate::props::get_string;

// ── Style ─────────────────────────────────────────────────────────────────

/// Size tier of a run. Body text inherits the renderer's base size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontSize {
    #[default]
    Body,
    H1,
    H2,
    H3,
    H4,
    H5,
    H6,
}

impl FontSize {
    /// Point size for headings, `None` for body text.
    pub fn points(self) -> Option<u16> {
        match self {
            Self::Body => None,
            Self::H1 => Some(28),
            Self::H2 => Some(24),
            Self::H3 => Some(20),
            Self::H4 => Some(18),
            Self::H5 => Some(16),
            Self::H6 => Some(14),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleAttributes {
    pub font_size: FontSize,
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub monospace: bool,
    pub hyperlink: Option<String>,
}

impl StyleAttributes {
    fn heading(font_size: FontSize) -> Self {
        Self { font_size, bold: true, ..Self::default() }
    }

    fn link(url: &str) -> Self {
        Self { hyperlink: Some(url.to_string()), ..Self::default() }
    }

    fn monospace() -> Self {
        Self { monospace: true, ..Self::default() }
    }

    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }
}

/// A contiguous span of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledRun {
    pub text: String,
    pub style: StyleAttributes,
}

// ── Rules ─────────────────────────────────────────────────────────────────

/// Longest marker first, so `### ` is never read as `# `.
const HEADINGS: [(&str, FontSize); 6] = [
    ("###### ", FontSize::H6),
    ("##### ", FontSize::H5),
    ("#### ", FontSize::H4),
    ("### ", FontSize::H3),
    ("## ", FontSize::H2),
    ("# ", FontSize::H1),
];

#[derive(Clone, Copy)]
enum Emphasis {
    BoldItalic,
    Bold,
    Italic,
    Strikethrough,
}

impl Emphasis {
    fn style(self) -> StyleAttributes {
        let mut style = StyleAttributes::default();
        match self {
            Self::BoldItalic => { style.bold = true; style.italic = true; }
            Self::Bold => style.bold = true,
            Self::Italic => style.italic = true,
            Self::Strikethrough => style.strikethrough = true,
        }
        style
    }
}

const EMPHASIS: [(&str, Emphasis); 4] = [
    ("***", Emphasis::BoldItalic),
    ("**", Emphasis::Bold),
    ("*", Emphasis::Italic),
    ("~~", Emphasis::Strikethrough),
];

const GLYPHS: [(&str, &str); 3] = [("(c)", "©"), ("(r)", "®"), ("(tm)", "™")];

// ── Run builder ───────────────────────────────────────────────────────────

#[derive(Default)]
struct Runs {
    runs: Vec<StyledRun>,
}

impl Runs {
    /// Append `text`, extending the last run when the style matches.
    fn push(&mut self, text: &str, style: StyleAttributes) {
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.style == style => last.text.push_str(text),
            _ => self.runs.push(StyledRun { text: text.to_string(), style }),
        }
    }

    fn plain(&mut self, text: &str) {
        self.push(text, StyleAttributes::default());
    }
}

// ── Scanner ───────────────────────────────────────────────────────────────

/// Format `markup` into styled runs.
///
/// Lines are scanned independently and rejoined with plain `\n`.
pub fn format_inline(markup: &str) -> Vec<StyledRun> {
    let mut out = Runs::default();
    let mut lines = markup.split('\n').peekable();
    while let Some(line) = lines.next() {
        format_line(line, &mut out);
        if lines.peek().is_some() {
            out.plain("\n");
        }
    }
    out.runs
}

/// Read a string property (default empty) and format it as inline markup.
pub fn format_property(node: &Element, key: &str, sink: &mut dyn DiagnosticSink) -> Vec<StyledRun> {
    format_inline(&get_string(node, key, "", sink))
}

fn format_line(line: &str, out: &mut Runs) {
    let mut pos = 0;
    let mut in_code = false;

    while pos < line.len() {
        let rest = &line[pos..];

        if rest.starts_with('`') {
            in_code = !in_code;
            pos += 1;
            continue;
        }

        if in_code {
            match rest.find('`') {
                Some(end) => {
                    out.push(&rest[..end], StyleAttributes::monospace());
                    pos += end + 1;
                    in_code = false;
                }
                None => {
                    out.push(rest, StyleAttributes::monospace());
                    pos = line.len();
                }
            }
            continue;
        }

        pos += scan(rest, out);
    }
}

/// Apply the first rule matching at the start of `rest`; returns bytes consumed.
fn scan(rest: &str, out: &mut Runs) -> usize {
    for (marker, size) in HEADINGS {
        if rest.starts_with(marker) {
            out.push(rest[marker.len()..].trim(), StyleAttributes::heading(size));
            return rest.len();
        }
    }

    if rest.starts_with("![") {
        // images are not rendered inline
        return rest.find(')').map_or(1, |end| end + 1);
    }

    if rest.starts_with('[') {
        return scan_link(rest, out);
    }

    if rest.starts_with('<') {
        if let Some(end) = rest.find('>') {
            return end + 1;
        }
    }

    for (marker, emphasis) in EMPHASIS {
        if let Some(body) = rest.strip_prefix(marker) {
            return match body.find(marker) {
                Some(end) => {
                    out.push(body[..end].trim(), emphasis.style());
                    marker.len() * 2 + end
                }
                None => {
                    out.plain(marker);
                    marker.len()
                }
            };
        }
    }

    for (pattern, glyph) in GLYPHS {
        if rest.get(..pattern.len()).is_some_and(|p| p.eq_ignore_ascii_case(pattern)) {
            out.plain(glyph);
            return pattern.len();
        }
    }

    let ch = rest.chars().next().map_or(1, char::len_utf8);
    out.plain(&rest[..ch]);
    ch
}

/// `[text](url)`: the `(` must follow the first `]` directly and a `)` must
/// close it. Otherwise the `[` is literal.
fn scan_link(rest: &str, out: &mut Runs) -> usize {
    let link = rest.find(']').and_then(|bracket| {
        let target = rest[bracket + 1..].strip_prefix('(')?;
        let paren = target.find(')')?;
        Some((&rest[1..bracket], &target[..paren], bracket + 2 + paren + 1))
    });

    match link {
        Some((text, url, consumed)) => {
            out.push(text, StyleAttributes::link(url));
            consumed
        }
        None => {
            out.plain("[");
            1
        }
    }
}
