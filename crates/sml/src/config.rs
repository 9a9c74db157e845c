/// Parser configuration.
///
/// The defaults match the current language variant: boolean literals enabled,
/// error messages wrapped at 100 columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Lex `true` / `false` as boolean literals. When off they are plain
    /// identifiers, as in the earlier dialect that had no boolean token.
    pub booleans: bool,
    /// Maximum characters per line of a rendered [`ParseError`](crate::ParseError).
    pub wrap_width: usize,
    /// Maximum element nesting depth.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            booleans: true,
            wrap_width: 100,
            max_depth: 256,
        }
    }
}

impl ParserConfig {
    /// The boolean-free dialect.
    pub fn legacy() -> Self {
        Self { booleans: false, ..Self::default() }
    }

    pub fn with_wrap_width(mut self, width: usize) -> Self {
        self.wrap_width = width;
        self
    }

    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}
