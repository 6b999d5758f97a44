//! Lexer (tokenizer) for structure descriptions.

use admit_core::messages::ERR_PROCEDURAL_WORD;
use admit_core::RelationKind;

use crate::{ParseError, ParseResult, Span};

/// Words that describe a process rather than a structure.
///
/// A description states what exists, never what happens, so these are
/// rejected wherever they appear.
pub const PROCEDURAL_WORDS: &[&str] = &[
    "for", "while", "loop", "repeat", "iterate", "time", "step", "tick", "clock", "evolve",
    "simulate", "optimize", "minimize", "maximize", "search", "solve",
];

/// Token types.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // Keywords (case-insensitive)
    Node,
    MemberOf,
    Bounds,
    Inverts,

    // Labels
    Ident(String),

    // Symbols
    LParen,    // (
    RParen,    // )
    LBrace,    // {
    RBrace,    // }
    Comma,     // ,
    Semicolon, // ;

    // End of file
    Eof,
}

impl TokenKind {
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Node => "node",
            TokenKind::MemberOf => "member-of",
            TokenKind::Bounds => "bounds",
            TokenKind::Inverts => "inverts",
            TokenKind::Ident(_) => "label",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Eof => "end of input",
        }
    }

    /// The relation kind this keyword introduces, if any.
    pub fn relation_kind(&self) -> Option<RelationKind> {
        match self {
            TokenKind::MemberOf => Some(RelationKind::MemberOf),
            TokenKind::Bounds => Some(RelationKind::Bounds),
            TokenKind::Inverts => Some(RelationKind::Inverts),
            _ => None,
        }
    }
}

/// A token with its span.
#[derive(Debug, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    pub fn eof(pos: usize, line: usize, column: usize) -> Self {
        Self {
            kind: TokenKind::Eof,
            span: Span::new(pos, pos, line, column),
        }
    }
}

/// Lexer state.
pub struct Lexer<'a> {
    input: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            chars: input.char_indices().peekable(),
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    /// Tokenize all input into a vector of tokens.
    pub fn tokenize(mut self) -> ParseResult<Vec<Token>> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token()?;
            let is_eof = matches!(token.kind, TokenKind::Eof);
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn span_from(&self, start: usize, start_line: usize, start_col: usize) -> Span {
        Span::new(start, self.pos, start_line, start_col)
    }

    fn peek_char(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    /// The character after the next one.
    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    fn next_char(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.pos = pos + c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            Some(c)
        } else {
            None
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if c.is_whitespace() {
                self.next_char();
            } else {
                break;
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek_char() {
            if c == '\n' {
                break;
            }
            self.next_char();
        }
    }

    /// Skip whitespace and `//` or `--` line comments.
    fn skip_trivia(&mut self) {
        loop {
            self.skip_whitespace();
            match self.peek_char() {
                Some(c @ ('/' | '-')) if self.peek_second() == Some(c) => self.skip_line(),
                _ => break,
            }
        }
    }

    fn next_token(&mut self) -> ParseResult<Token> {
        self.skip_trivia();

        let start = self.pos;
        let start_line = self.line;
        let start_col = self.column;

        let Some(c) = self.next_char() else {
            return Ok(Token::eof(self.pos, self.line, self.column));
        };

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            '{' => TokenKind::LBrace,
            '}' => TokenKind::RBrace,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            '_' | 'a'..='z' | 'A'..='Z' => {
                self.scan_ident_or_keyword(c, start, start_line, start_col)?
            }
            _ => {
                return Err(ParseError::new(
                    format!("unexpected character '{}'", c),
                    self.span_from(start, start_line, start_col),
                )
                .with_found(c.to_string()));
            }
        };

        Ok(Token::new(
            kind,
            self.span_from(start, start_line, start_col),
        ))
    }

    fn scan_ident_or_keyword(
        &mut self,
        first: char,
        start: usize,
        start_line: usize,
        start_col: usize,
    ) -> ParseResult<TokenKind> {
        let mut ident = String::new();
        ident.push(first);

        loop {
            match self.peek_char() {
                Some(c) if is_label_char(c) => {
                    ident.push(c);
                    self.next_char();
                }
                // Inner hyphen, as in `member-of` or `outer-ring`
                Some('-') if self.peek_second().is_some_and(is_label_char) => {
                    ident.push('-');
                    self.next_char();
                }
                _ => break,
            }
        }

        let lowered = ident.to_ascii_lowercase();
        if PROCEDURAL_WORDS.contains(&lowered.as_str()) {
            return Err(ParseError::grammar(
                format!("procedural word '{}' {}", ident, ERR_PROCEDURAL_WORD),
                self.span_from(start, start_line, start_col),
            )
            .with_found(ident));
        }

        // Check for keywords (case-insensitive)
        Ok(match lowered.as_str() {
            "node" => TokenKind::Node,
            "member-of" => TokenKind::MemberOf,
            "bounds" => TokenKind::Bounds,
            "inverts" => TokenKind::Inverts,
            _ => TokenKind::Ident(ident),
        })
    }
}

/// Decode raw description bytes as UTF-8.
///
/// Invalid bytes are a syntax error located at the first bad byte.
pub fn decode(bytes: &[u8]) -> ParseResult<&str> {
    std::str::from_utf8(bytes).map_err(|e| {
        let at = e.valid_up_to();
        // The prefix up to `at` is valid, so this cannot fail.
        let prefix = std::str::from_utf8(&bytes[..at]).unwrap_or_default();
        let line = prefix.matches('\n').count() + 1;
        let line_start = prefix.rfind('\n').map_or(0, |i| i + 1);
        let column = prefix[line_start..].chars().count() + 1;
        ParseError::new(
            format!("invalid UTF-8 at byte {}", at),
            Span::new(at, at + e.error_len().unwrap_or(bytes.len() - at), line, column),
        )
        .with_found(format!("0x{:02x}", bytes[at]))
    })
}

fn is_label_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}
