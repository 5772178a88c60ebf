//! Reserved-word table for V#.
//!
//! Process-wide read-only configuration with explicit initialization: one
//! ordered table, consumed by the lexer for identifier classification and by
//! the language server for completion responses. Consumers receive the table
//! as a parameter; nothing mutates it.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::token::TokenKind;

/// One reserved word with its token kind and the short description shown as
/// completion detail.
#[derive(Debug, Clone, Copy)]
pub struct Keyword {
    pub lexeme: &'static str,
    pub kind: TokenKind,
    pub detail: &'static str,
}

/// Every reserved word of the language, declaration keywords first, then
/// primitive type names. Order is stable so completion responses are
/// deterministic.
pub static KEYWORDS: &[Keyword] = &[
    Keyword { lexeme: "public", kind: TokenKind::KwPublic, detail: "Access modifier" },
    Keyword { lexeme: "private", kind: TokenKind::KwPrivate, detail: "Access modifier" },
    Keyword { lexeme: "virtual", kind: TokenKind::KwVirtual, detail: "Virtual method modifier" },
    Keyword { lexeme: "override", kind: TokenKind::KwOverride, detail: "Override method modifier" },
    Keyword { lexeme: "static", kind: TokenKind::KwStatic, detail: "Static modifier" },
    Keyword { lexeme: "const", kind: TokenKind::KwConst, detail: "Constant declaration" },
    Keyword { lexeme: "var", kind: TokenKind::KwVar, detail: "Variable declaration" },
    Keyword { lexeme: "if", kind: TokenKind::KwIf, detail: "Conditional statement" },
    Keyword { lexeme: "else", kind: TokenKind::KwElse, detail: "Conditional alternative" },
    Keyword { lexeme: "match", kind: TokenKind::KwMatch, detail: "Pattern matching statement" },
    Keyword { lexeme: "for", kind: TokenKind::KwFor, detail: "Loop statement" },
    Keyword { lexeme: "return", kind: TokenKind::KwReturn, detail: "Return statement" },
    Keyword { lexeme: "structure", kind: TokenKind::KwStructure, detail: "Structure declaration" },
    Keyword { lexeme: "enumeration", kind: TokenKind::KwEnumeration, detail: "Enumeration declaration" },
    Keyword { lexeme: "define", kind: TokenKind::KwDefine, detail: "Function definition" },
    Keyword { lexeme: "typedef", kind: TokenKind::KwTypedef, detail: "Type alias" },
    Keyword { lexeme: "class", kind: TokenKind::KwClass, detail: "Class declaration" },
    Keyword { lexeme: "int8", kind: TokenKind::KwInt8, detail: "8-bit signed integer type" },
    Keyword { lexeme: "int16", kind: TokenKind::KwInt16, detail: "16-bit signed integer type" },
    Keyword { lexeme: "int32", kind: TokenKind::KwInt32, detail: "32-bit signed integer type" },
    Keyword { lexeme: "int64", kind: TokenKind::KwInt64, detail: "64-bit signed integer type" },
    Keyword { lexeme: "uint8", kind: TokenKind::KwUInt8, detail: "8-bit unsigned integer type" },
    Keyword { lexeme: "uint16", kind: TokenKind::KwUInt16, detail: "16-bit unsigned integer type" },
    Keyword { lexeme: "uint32", kind: TokenKind::KwUInt32, detail: "32-bit unsigned integer type" },
    Keyword { lexeme: "uint64", kind: TokenKind::KwUInt64, detail: "64-bit unsigned integer type" },
    Keyword { lexeme: "float32", kind: TokenKind::KwFloat32, detail: "32-bit floating point type" },
    Keyword { lexeme: "float64", kind: TokenKind::KwFloat64, detail: "64-bit floating point type" },
    Keyword { lexeme: "boolean", kind: TokenKind::KwBoolean, detail: "Boolean type" },
    Keyword { lexeme: "string", kind: TokenKind::KwString, detail: "String type" },
    Keyword { lexeme: "byte", kind: TokenKind::KwByte, detail: "Byte type" },
    Keyword { lexeme: "void", kind: TokenKind::KwVoid, detail: "Void type" },
];

static LOOKUP: Lazy<HashMap<&'static str, TokenKind>> =
    Lazy::new(|| KEYWORDS.iter().map(|kw| (kw.lexeme, kw.kind)).collect());

/// Resolves an identifier to its keyword kind, or `None` for plain
/// identifiers.
pub fn lookup(ident: &str) -> Option<TokenKind> {
    LOOKUP.get(ident).copied()
}
