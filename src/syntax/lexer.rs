//! The V# lexer.
//!
//! Scans source text into tokens. Comments are kept as tokens; whitespace is
//! skipped. Every malformed input surfaces as a spanned [`VsharpError`]
//! rather than a panic.

use crate::errors::{to_source_span, ErrorKind, SourceContext, VsharpError};

use super::keywords;
use super::token::{Token, TokenKind};
use super::Span;

/// Scans the whole source into a token stream terminated by an `Eof` token.
pub fn tokenize(source: &str, context: &SourceContext) -> Result<Vec<Token>, VsharpError> {
    let mut lexer = Lexer::new(source, context);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token()?;
        let at_end = token.kind == TokenKind::Eof;
        tokens.push(token);
        if at_end {
            break;
        }
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Vec<char>,
    pos: usize,
    offset: usize,
    line: usize,
    column: usize,
    context: &'a SourceContext,
}

impl<'a> Lexer<'a> {
    fn new(source: &str, context: &'a SourceContext) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
            context,
        }
    }

    fn next_token(&mut self) -> Result<Token, VsharpError> {
        self.skip_whitespace();
        let line = self.line;
        let column = self.column;
        let start_pos = self.pos;
        let start = self.offset;

        let ch = match self.peek(0) {
            Some(ch) => ch,
            None => return Ok(self.make_token(TokenKind::Eof, String::new(), line, column, start)),
        };

        if ch.is_alphabetic() || ch == '_' {
            let lexeme = self.scan_identifier(start_pos);
            let kind = keywords::lookup(&lexeme).unwrap_or(TokenKind::Identifier);
            return Ok(self.make_token(kind, lexeme, line, column, start));
        }

        if ch.is_ascii_digit() {
            let (lexeme, kind) = self.scan_number(start_pos, start)?;
            return Ok(self.make_token(kind, lexeme, line, column, start));
        }

        if ch == '"' {
            let lexeme = self.scan_string_literal(start_pos, start)?;
            return Ok(self.make_token(TokenKind::String, lexeme, line, column, start));
        }

        if ch == '\'' {
            let lexeme = self.scan_byte_literal(start_pos, start)?;
            return Ok(self.make_token(TokenKind::Byte, lexeme, line, column, start));
        }

        if ch == '/' && self.peek(1) == Some('/') {
            let lexeme = self.scan_line_comment(start_pos);
            return Ok(self.make_token(TokenKind::Comment, lexeme, line, column, start));
        }

        self.advance();
        let kind = match ch {
            '=' => self.two_char('=', TokenKind::Equal, TokenKind::Assign),
            '!' => self.two_char('=', TokenKind::NotEqual, TokenKind::Not),
            '<' => self.two_char('=', TokenKind::LessEqual, TokenKind::LessThan),
            '>' => self.two_char('=', TokenKind::GreaterEqual, TokenKind::GreaterThan),
            '&' => {
                if self.peek(0) == Some('&') {
                    self.advance();
                    TokenKind::And
                } else {
                    return Err(self.illegal_token("&", start));
                }
            }
            '|' => {
                if self.peek(0) == Some('|') {
                    self.advance();
                    TokenKind::Or
                } else {
                    return Err(self.illegal_token("|", start));
                }
            }
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Asterisk,
            '/' => TokenKind::Slash,
            '%' => TokenKind::Percent,
            '(' => TokenKind::LeftParen,
            ')' => TokenKind::RightParen,
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ',' => TokenKind::Comma,
            ';' => TokenKind::Semicolon,
            ':' => TokenKind::Colon,
            '.' => TokenKind::Dot,
            other => return Err(self.illegal_token(&other.to_string(), start)),
        };
        let lexeme = self.text_from(start_pos);
        Ok(self.make_token(kind, lexeme, line, column, start))
    }

    // ------------------------------------------------------------------------
    // Scanners
    // ------------------------------------------------------------------------

    fn scan_identifier(&mut self, start_pos: usize) -> String {
        while let Some(ch) = self.peek(0) {
            if ch.is_alphanumeric() || ch == '_' || ch == '\'' {
                self.advance();
            } else {
                break;
            }
        }
        self.text_from(start_pos)
    }

    fn scan_number(
        &mut self,
        start_pos: usize,
        start: usize,
    ) -> Result<(String, TokenKind), VsharpError> {
        let mut is_float = false;
        loop {
            match self.peek(0) {
                Some('.') => {
                    self.advance();
                    if is_float {
                        return Err(self.error(
                            ErrorKind::InvalidLiteral {
                                literal_type: "number".into(),
                                value: self.text_from(start_pos),
                            },
                            Span {
                                start,
                                end: self.offset,
                            },
                        ));
                    }
                    is_float = true;
                }
                Some(ch) if ch.is_ascii_digit() => {
                    self.advance();
                }
                _ => break,
            }
        }
        if self.peek(0) == Some('u') {
            self.advance();
            return Ok((self.text_from(start_pos), TokenKind::Unsigned));
        }
        let kind = if is_float {
            TokenKind::Float
        } else {
            TokenKind::Integer
        };
        Ok((self.text_from(start_pos), kind))
    }

    fn scan_string_literal(
        &mut self,
        start_pos: usize,
        start: usize,
    ) -> Result<String, VsharpError> {
        self.advance();
        loop {
            match self.peek(0) {
                None => return Err(self.unterminated("string", start)),
                Some('\\') => {
                    self.advance();
                    match self.peek(0) {
                        None => return Err(self.unterminated("string", start)),
                        Some(esc) if !is_valid_escape(esc) => {
                            self.advance();
                            return Err(self.invalid_escape(esc, start));
                        }
                        Some(_) => {
                            self.advance();
                        }
                    }
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
            }
        }
        Ok(self.text_from(start_pos))
    }

    fn scan_byte_literal(
        &mut self,
        start_pos: usize,
        start: usize,
    ) -> Result<String, VsharpError> {
        self.advance();
        match self.peek(0) {
            None => return Err(self.unterminated("character", start)),
            Some('\\') => {
                self.advance();
                match self.peek(0) {
                    None => return Err(self.unterminated("character", start)),
                    Some(esc) if !is_valid_escape(esc) => {
                        self.advance();
                        return Err(self.invalid_escape(esc, start));
                    }
                    Some(_) => {
                        self.advance();
                    }
                }
            }
            Some(_) => {
                self.advance();
            }
        }
        match self.peek(0) {
            None => Err(self.unterminated("character", start)),
            Some('\'') => {
                self.advance();
                Ok(self.text_from(start_pos))
            }
            Some(_) => Err(self.error(
                ErrorKind::InvalidLiteral {
                    literal_type: "character literal".into(),
                    value: self.text_from(start_pos),
                },
                Span {
                    start,
                    end: self.offset,
                },
            )),
        }
    }

    fn scan_line_comment(&mut self, start_pos: usize) -> String {
        self.advance();
        self.advance();
        while let Some(ch) = self.peek(0) {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
        self.text_from(start_pos).trim_end().to_string()
    }

    // ------------------------------------------------------------------------
    // Cursor primitives
    // ------------------------------------------------------------------------

    fn peek(&self, ahead: usize) -> Option<char> {
        self.chars.get(self.pos + ahead).copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.peek(0)?;
        self.pos += 1;
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(ch)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(0), Some(' ' | '\t' | '\r' | '\n')) {
            self.advance();
        }
    }

    fn two_char(&mut self, second: char, double: TokenKind, single: TokenKind) -> TokenKind {
        if self.peek(0) == Some(second) {
            self.advance();
            double
        } else {
            single
        }
    }

    fn text_from(&self, start_pos: usize) -> String {
        self.chars[start_pos..self.pos].iter().collect()
    }

    fn make_token(
        &self,
        kind: TokenKind,
        lexeme: String,
        line: usize,
        column: usize,
        start: usize,
    ) -> Token {
        Token {
            kind,
            lexeme,
            line,
            column,
            span: Span {
                start,
                end: self.offset,
            },
        }
    }

    // ------------------------------------------------------------------------
    // Error helpers
    // ------------------------------------------------------------------------

    fn error(&self, kind: ErrorKind, span: Span) -> VsharpError {
        self.context.report(kind, to_source_span(span))
    }

    fn illegal_token(&self, found: &str, start: usize) -> VsharpError {
        self.error(
            ErrorKind::IllegalToken {
                found: found.to_string(),
            },
            Span {
                start,
                end: self.offset,
            },
        )
    }

    fn unterminated(&self, literal_type: &str, start: usize) -> VsharpError {
        self.error(
            ErrorKind::UnterminatedLiteral {
                literal_type: literal_type.to_string(),
            },
            Span {
                start,
                end: self.offset,
            },
        )
    }

    fn invalid_escape(&self, esc: char, start: usize) -> VsharpError {
        self.error(
            ErrorKind::InvalidLiteral {
                literal_type: "escape sequence".into(),
                value: format!("\\{}", esc),
            },
            Span {
                start,
                end: self.offset,
            },
        )
    }
}

fn is_valid_escape(ch: char) -> bool {
    matches!(ch, 'n' | 't' | 'r' | '\\' | '\'' | '"' | '0')
}
