use thiserror::Error;

/// A parse failure for a whole `.sml` document.
///
/// Rendered as `ParseError: <line>:<col>: <message>`, chunked into lines of at
/// most `wrap_width` characters so it stays readable in a terminal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("ParseError: {}", render(.line, .col, .message, .wrap_width))]
pub struct ParseError {
    pub message: String,
    /// 1-based source line number where the error occurred.
    pub line: usize,
    /// 1-based source column number where the error occurred.
    pub col: usize,
    pub wrap_width: usize,
}

impl ParseError {
    pub(crate) fn new(msg: impl Into<String>, line: usize, col: usize, wrap_width: usize) -> Self {
        Self { message: msg.into(), line, col, wrap_width }
    }
}

fn render(line: &usize, col: &usize, message: &str, width: &usize) -> String {
    line_wrap(&format!("{line}:{col}: {message}"), *width)
}

/// Split `text` into chunks of `width` characters joined by `\n`.
///
/// A width of zero leaves the text untouched.
pub fn line_wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }
    let chars: Vec<char> = text.chars().collect();
    chars
        .chunks(width)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
