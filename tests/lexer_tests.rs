// tests/lexer_tests.rs

use vsharp::errors::{ErrorKind, SourceContext};
use vsharp::syntax::keywords::KEYWORDS;
use vsharp::syntax::{tokenize, Token, TokenKind};

fn lex(source: &str) -> Vec<Token> {
    let context = SourceContext::from_file("test.vsh", source);
    tokenize(source, &context).unwrap()
}

fn lex_err(source: &str) -> ErrorKind {
    let context = SourceContext::from_file("test.vsh", source);
    tokenize(source, &context).unwrap_err().kind
}

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).into_iter().map(|t| t.kind).collect()
}

#[test]
fn function_declaration_token_sequence() {
    let source = "define public add(int32 a, int32 b) int32 {\n    return a + b;\n}\n";
    assert_eq!(
        kinds(source),
        [
            TokenKind::KwDefine,
            TokenKind::KwPublic,
            TokenKind::Identifier,
            TokenKind::LeftParen,
            TokenKind::KwInt32,
            TokenKind::Identifier,
            TokenKind::Comma,
            TokenKind::KwInt32,
            TokenKind::Identifier,
            TokenKind::RightParen,
            TokenKind::KwInt32,
            TokenKind::LeftBrace,
            TokenKind::KwReturn,
            TokenKind::Identifier,
            TokenKind::Plus,
            TokenKind::Identifier,
            TokenKind::Semicolon,
            TokenKind::RightBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn positions_are_one_based_and_track_newlines() {
    let tokens = lex("var x\nx = 1");
    let positions: Vec<(TokenKind, usize, usize)> =
        tokens.iter().map(|t| (t.kind, t.line, t.column)).collect();
    assert_eq!(
        positions,
        [
            (TokenKind::KwVar, 1, 1),
            (TokenKind::Identifier, 1, 5),
            (TokenKind::Identifier, 2, 1),
            (TokenKind::Assign, 2, 3),
            (TokenKind::Integer, 2, 5),
            (TokenKind::Eof, 2, 6),
        ]
    );
}

#[test]
fn number_literals_classify_by_shape() {
    let tokens = lex("42 3.14 7u 1.");
    let summary: Vec<(TokenKind, &str)> = tokens
        .iter()
        .map(|t| (t.kind, t.lexeme.as_str()))
        .collect();
    assert_eq!(
        summary,
        [
            (TokenKind::Integer, "42"),
            (TokenKind::Float, "3.14"),
            (TokenKind::Unsigned, "7u"),
            (TokenKind::Float, "1."),
            (TokenKind::Eof, ""),
        ]
    );
}

#[test]
fn second_decimal_point_is_an_error() {
    assert!(matches!(
        lex_err("1.2.3"),
        ErrorKind::InvalidLiteral { literal_type, .. } if literal_type == "number"
    ));
}

#[test]
fn string_lexemes_keep_quotes_and_raw_escapes() {
    let tokens = lex(r#""hi\n""#);
    assert_eq!(tokens[0].kind, TokenKind::String);
    assert_eq!(tokens[0].lexeme, r#""hi\n""#);
}

#[test]
fn unterminated_string_is_an_error() {
    assert!(matches!(
        lex_err("\"abc"),
        ErrorKind::UnterminatedLiteral { literal_type } if literal_type == "string"
    ));
}

#[test]
fn invalid_escape_is_an_error() {
    assert!(matches!(
        lex_err(r#""a\qb""#),
        ErrorKind::InvalidLiteral { literal_type, value }
            if literal_type == "escape sequence" && value == r"\q"
    ));
}

#[test]
fn byte_literals_take_one_char_or_escape() {
    assert_eq!(
        kinds(r"'a' '\n'"),
        [TokenKind::Byte, TokenKind::Byte, TokenKind::Eof]
    );
    assert!(matches!(
        lex_err("'ab'"),
        ErrorKind::InvalidLiteral { literal_type, .. } if literal_type == "character literal"
    ));
    assert!(matches!(
        lex_err("'a"),
        ErrorKind::UnterminatedLiteral { literal_type } if literal_type == "character"
    ));
}

#[test]
fn line_comments_are_tokens_with_trimmed_lexemes() {
    let tokens = lex("x // trailing note   \ny");
    assert_eq!(
        tokens.iter().map(|t| t.kind).collect::<Vec<_>>(),
        [
            TokenKind::Identifier,
            TokenKind::Comment,
            TokenKind::Identifier,
            TokenKind::Eof,
        ]
    );
    assert_eq!(tokens[1].lexeme, "// trailing note");
}

#[test]
fn identifiers_allow_underscores_digits_and_primes() {
    let tokens = lex("x' _y a1");
    assert!(tokens[..3].iter().all(|t| t.kind == TokenKind::Identifier));
    assert_eq!(tokens[0].lexeme, "x'");
}

#[test]
fn every_reserved_word_lexes_to_its_kind() {
    for kw in KEYWORDS {
        let tokens = lex(kw.lexeme);
        assert_eq!(tokens[0].kind, kw.kind, "keyword {:?}", kw.lexeme);
        assert_eq!(tokens[0].lexeme, kw.lexeme);
    }
}

#[test]
fn token_spans_cover_the_lexeme_bytes() {
    let source = "var answer = 42;";
    for token in lex(source) {
        if token.kind == TokenKind::Eof {
            continue;
        }
        assert_eq!(
            &source[token.span.start..token.span.end],
            token.lexeme.as_str()
        );
    }
}
