use crate::ast::{Document, Element, ElementBuilder, PropertyValue};
use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

/// Recursive-descent parser over a trivia-free token stream.
///
/// ```text
/// document := element+
/// element  := IDENT '{' member* '}'
/// member   := property | element
/// property := IDENT ':' value
/// value    := FLOAT | INT | BOOL | STRING
/// ```
pub struct Parser<'c> {
    tokens: Vec<TokenWithPos>,
    pos: usize,
    depth: usize,
    config: &'c ParserConfig,
}

impl<'c> Parser<'c> {
    /// Build a parser from lexer output. Whitespace and comments are dropped here.
    pub fn new(tokens: Vec<TokenWithPos>, config: &'c ParserConfig) -> Self {
        let tokens = tokens.into_iter().filter(|t| !t.token.is_trivia()).collect();
        Self { tokens, pos: 0, depth: 0, config }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map(|t| (t.line, t.col))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    /// Look at the token `offset` positions ahead of current without consuming.
    fn peek_ahead(&self, offset: usize) -> &Token {
        self.tokens.get(self.pos + offset).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col, self.config.wrap_width)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        if let Token::Ident(s) = self.peek() {
            let s = s.clone();
            self.advance();
            Ok(s)
        } else {
            Err(self.err(format!("expected an identifier, got {}", describe(self.peek()))))
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        if self.peek() == expected {
            self.advance();
            Ok(())
        } else {
            Err(self.err(format!(
                "expected {}, got {}",
                describe(expected),
                describe(self.peek())
            )))
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    /// `element+` followed by end of input.
    pub fn parse_document(&mut self) -> Result<Document, ParseError> {
        let root = self.parse_element()?;
        let mut rest = Vec::new();
        while self.peek() != &Token::Eof {
            rest.push(self.parse_element()?);
        }
        Ok(Document::new(root, rest))
    }

    // ── Element ───────────────────────────────────────────────────────────

    fn parse_element(&mut self) -> Result<Element, ParseError> {
        let name = self.expect_ident()?;
        self.expect_token(&Token::LBrace)?;

        self.depth += 1;
        if self.depth > self.config.max_depth {
            return Err(self.err(format!(
                "elements nested deeper than {} levels",
                self.config.max_depth
            )));
        }

        let mut builder = ElementBuilder::new(name);
        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof => return Err(self.err("unclosed '{' block")),
                Token::Ident(_) => match self.peek_ahead(1) {
                    Token::Colon => {
                        let (key, value) = self.parse_property()?;
                        builder.push_property(key, value);
                    }
                    _ => builder.push_child(self.parse_element()?),
                },
                tok => {
                    return Err(self.err(format!(
                        "unexpected {} inside block, expected a property (key: value) or an element",
                        describe(tok)
                    )));
                }
            }
        }

        self.depth -= 1;
        Ok(builder.build())
    }

    // ── Property ──────────────────────────────────────────────────────────

    fn parse_property(&mut self) -> Result<(String, PropertyValue), ParseError> {
        let key = self.expect_ident()?;
        self.advance(); // consume `:`
        let value = self.parse_value()?;
        Ok((key, value))
    }

    // ── Value ─────────────────────────────────────────────────────────────

    fn parse_value(&mut self) -> Result<PropertyValue, ParseError> {
        let value = match self.peek() {
            Token::Float(v) => PropertyValue::Float(*v),
            Token::Int(digits) => match digits.parse::<i32>() {
                Ok(v) => PropertyValue::Integer(v),
                Err(_) => return Err(self.err(format!("integer literal {digits} out of range"))),
            },
            Token::Bool(b) => PropertyValue::Boolean(*b),
            Token::Str(s) => PropertyValue::String(s.clone()),
            tok => return Err(self.err(format!("expected a value, got {}", describe(tok)))),
        };
        self.advance();
        Ok(value)
    }
}

fn describe(tok: &Token) -> String {
    match tok {
        Token::Ident(s) => format!("identifier '{s}'"),
        Token::Str(s) => format!("string \"{s}\""),
        Token::Int(s) => format!("integer {s}"),
        Token::Float(v) => format!("float {v:?}"),
        Token::Bool(b) => format!("boolean {b}"),
        Token::Colon => "':'".to_string(),
        Token::LBrace => "'{'".to_string(),
        Token::RBrace => "'}'".to_string(),
        Token::Unknown(c) => format!("character {c:?}"),
        Token::Eof => "end of input".to_string(),
        Token::Whitespace | Token::LineComment | Token::BlockComment => "trivia".to_string(),
    }
}

// ── Public parse entry points ─────────────────────────────────────────────

/// Parse `.sml` source into every top-level element it contains.
pub fn parse_document(src: &str) -> Result<Document, ParseError> {
    parse_document_with(src, &ParserConfig::default())
}

pub fn parse_document_with(src: &str, config: &ParserConfig) -> Result<Document, ParseError> {
    let tokens = Lexer::with_config(src, config).tokenize();
    let doc = Parser::new(tokens, config).parse_document()?;
    log::debug!("parsed sml document with {} root element(s)", doc.root_count());
    Ok(doc)
}

/// Parse `.sml` source and return its first top-level element.
///
/// Further top-level elements are syntax-checked and then dropped; use
/// [`parse_document`] to keep them.
pub fn parse_str(src: &str) -> Result<Element, ParseError> {
    parse_str_with(src, &ParserConfig::default())
}

pub fn parse_str_with(src: &str, config: &ParserConfig) -> Result<Element, ParseError> {
    parse_document_with(src, config).map(Document::into_root)
}
