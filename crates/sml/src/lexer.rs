use crate::config::ParserConfig;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    /// String literal without its surrounding quotes. No escapes exist.
    Str(String),
    /// Integer lexeme, converted by the parser so overflow surfaces as a parse error.
    Int(String),
    Float(f32),
    Bool(bool),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Trivia
    Whitespace,
    LineComment,
    BlockComment,
    /// A character no rule matched. Never valid in the grammar.
    Unknown(char),
    // Sentinel
    Eof,
}

impl Token {
    /// Whitespace and comments, filtered out before the grammar runs.
    pub fn is_trivia(&self) -> bool {
        matches!(self, Token::Whitespace | Token::LineComment | Token::BlockComment)
    }
}

/// A token with its 1-based source position.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
    booleans: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self::with_config(src, &ParserConfig::default())
    }

    pub fn with_config(src: &'s str, config: &ParserConfig) -> Self {
        Self { src, pos: 0, line: 1, col: 1, booleans: config.booleans }
    }

    /// Lex the whole source, trivia included. The last token is always `Eof`.
    ///
    /// Lexing never fails: unmatched input becomes [`Token::Unknown`] and is
    /// rejected by the parser.
    pub fn tokenize(mut self) -> Vec<TokenWithPos> {
        let mut tokens = Vec::new();
        loop {
            let (line, col) = (self.line, self.col);
            let token = self.next_token();
            let eof = token == Token::Eof;
            tokens.push(TokenWithPos { token, line, col });
            if eof {
                break;
            }
        }
        tokens
    }

    fn rest(&self) -> &'s str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.rest().chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn advance_while(&mut self, pred: impl Fn(char) -> bool) {
        while matches!(self.peek(), Some(c) if pred(c)) {
            self.advance();
        }
    }

    fn next_token(&mut self) -> Token {
        let ch = match self.peek() {
            None => return Token::Eof,
            Some(c) => c,
        };

        match ch {
            c if c.is_ascii_alphabetic() || c == '_' => self.lex_word(),
            '{' => { self.advance(); Token::LBrace }
            '}' => { self.advance(); Token::RBrace }
            ':' => { self.advance(); Token::Colon }
            '"' => self.lex_string(),
            c if c.is_ascii_digit() => self.lex_number(),
            c if c.is_whitespace() => {
                self.advance_while(char::is_whitespace);
                Token::Whitespace
            }
            '/' if self.rest().starts_with("//") => {
                self.advance_while(|c| c != '\n' && c != '\r');
                Token::LineComment
            }
            '/' if self.rest().starts_with("/*") && self.rest()[2..].contains("*/") => {
                self.advance(); self.advance(); // consume `/*`
                while !self.rest().starts_with("*/") {
                    self.advance();
                }
                self.advance(); self.advance(); // consume `*/`
                Token::BlockComment
            }
            other => {
                self.advance();
                Token::Unknown(other)
            }
        }
    }

    /// Identifiers and, when enabled, whole-word boolean literals.
    fn lex_word(&mut self) -> Token {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_alphanumeric() || c == '_');
        let word = &self.src[start..self.pos];
        match word {
            "true" if self.booleans => Token::Bool(true),
            "false" if self.booleans => Token::Bool(false),
            _ => Token::Ident(word.to_string()),
        }
    }

    fn lex_string(&mut self) -> Token {
        let body = &self.rest()[1..];
        let Some(end) = body.find('"') else {
            // unterminated: only the quote is unmatched
            self.advance();
            return Token::Unknown('"');
        };
        let content = body[..end].to_string();
        self.advance(); // opening `"`
        for _ in content.chars() {
            self.advance();
        }
        self.advance(); // closing `"`
        Token::Str(content)
    }

    /// `digits '.' digits` is tried before `digits`, so `1.5` never lexes as
    /// an integer followed by garbage.
    fn lex_number(&mut self) -> Token {
        let start = self.pos;
        self.advance_while(|c| c.is_ascii_digit());
        let int_end = self.pos;

        let rest = self.rest();
        let has_fraction = rest.starts_with('.')
            && rest[1..].chars().next().is_some_and(|c| c.is_ascii_digit());
        if has_fraction {
            self.advance(); // `.`
            self.advance_while(|c| c.is_ascii_digit());
            let text = &self.src[start..self.pos];
            // digits '.' digits always parses as f32 (overflow yields inf)
            return Token::Float(text.parse().unwrap_or(f32::INFINITY));
        }

        Token::Int(self.src[start..int_end].to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(src: &str) -> Vec<Token> {
        Lexer::new(src)
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .filter(|t| !t.is_trivia())
            .collect()
    }

    #[test]
    fn float_before_integer() {
        assert_eq!(kinds("123.0"), vec![Token::Float(123.0), Token::Eof]);
        assert_eq!(kinds("123"), vec![Token::Int("123".into()), Token::Eof]);
    }

    #[test]
    fn trailing_dot_is_not_a_float() {
        assert_eq!(kinds("1."), vec![Token::Int("1".into()), Token::Unknown('.'), Token::Eof]);
    }

    #[test]
    fn booleans_are_whole_words() {
        assert_eq!(kinds("true"), vec![Token::Bool(true), Token::Eof]);
        assert_eq!(kinds("trueColor"), vec![Token::Ident("trueColor".into()), Token::Eof]);
    }

    #[test]
    fn legacy_dialect_has_no_booleans() {
        let toks: Vec<Token> = Lexer::with_config("false", &ParserConfig::legacy())
            .tokenize()
            .into_iter()
            .map(|t| t.token)
            .collect();
        assert_eq!(toks, vec![Token::Ident("false".into()), Token::Eof]);
    }

    #[test]
    fn string_has_no_escapes() {
        assert_eq!(kinds(r#""a\b""#), vec![Token::Str(r"a\b".into()), Token::Eof]);
        assert_eq!(kinds("\"two\nlines\""), vec![Token::Str("two\nlines".into()), Token::Eof]);
    }

    #[test]
    fn unterminated_string_leaves_quote_unmatched() {
        assert_eq!(kinds("\"abc")[0], Token::Unknown('"'));
    }

    #[test]
    fn comments_are_trivia() {
        let all: Vec<Token> = Lexer::new("// a\n/* b\n c */x").tokenize().into_iter().map(|t| t.token).collect();
        assert_eq!(
            all,
            vec![
                Token::LineComment,
                Token::Whitespace,
                Token::BlockComment,
                Token::Ident("x".into()),
                Token::Eof,
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_is_unknown() {
        assert_eq!(kinds("/* open")[0], Token::Unknown('/'));
    }

    #[test]
    fn positions_are_one_based() {
        let toks = Lexer::new("A {\n  x: 1\n}").tokenize();
        let x = toks.iter().find(|t| t.token == Token::Ident("x".into())).unwrap();
        assert_eq!((x.line, x.col), (2, 3));
    }
}
