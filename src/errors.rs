//! Unified error handling for the V# front end.
//!
//! One diagnostic error type covers every user-facing failure. Errors carry
//! their source context and primary span so miette can render a labelled
//! report; construction goes through [`SourceContext::report`] so the struct
//! is never assembled by hand at call sites.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

// ============================================================================
// SOURCE CONTEXT
// ============================================================================

/// Source text plus its display name, attached to every reported error.
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Creates a source context from real file content.
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Creates a fallback when no real source is available, e.g. for I/O
    /// failures that happen before any source text is read.
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("// {}", context),
        }
    }

    /// Converts to a `NamedSource` for miette error reporting.
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }

    /// Creates an error anchored to this source.
    pub fn report(&self, kind: ErrorKind, span: SourceSpan) -> VsharpError {
        let error_code = format!("vsharp::{}::{}", kind.phase(), kind.code_suffix());
        VsharpError {
            kind,
            source_info: SourceInfo {
                source: self.to_named_source(),
                primary_span: span,
            },
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code,
            },
        }
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

// ============================================================================
// ERROR TYPE
// ============================================================================

/// The single error type: what went wrong, where, and how to help.
#[derive(Debug)]
pub struct VsharpError {
    pub kind: ErrorKind,
    pub source_info: SourceInfo,
    pub diagnostic_info: DiagnosticInfo,
}

/// All error kinds as a clean enum.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    // Lexing errors
    IllegalToken {
        found: String,
    },
    InvalidLiteral {
        literal_type: String,
        value: String,
    },
    UnterminatedLiteral {
        literal_type: String,
    },

    // Environment errors
    Io {
        message: String,
    },
}

/// Context-specific source information.
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
}

/// Diagnostic enhancement data.
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

impl ErrorKind {
    /// Phase component of the diagnostic code.
    pub const fn phase(&self) -> &'static str {
        match self {
            Self::IllegalToken { .. }
            | Self::InvalidLiteral { .. }
            | Self::UnterminatedLiteral { .. } => "lex",
            Self::Io { .. } => "io",
        }
    }

    /// Kind component of the diagnostic code.
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::IllegalToken { .. } => "illegal_token",
            Self::InvalidLiteral { .. } => "invalid_literal",
            Self::UnterminatedLiteral { .. } => "unterminated_literal",
            Self::Io { .. } => "io",
        }
    }
}

impl std::error::Error for VsharpError {}

impl fmt::Display for VsharpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::IllegalToken { found } => {
                write!(f, "Lex error: illegal token '{}'", found)
            }
            ErrorKind::InvalidLiteral {
                literal_type,
                value,
            } => {
                write!(f, "Lex error: invalid {} '{}'", literal_type, value)
            }
            ErrorKind::UnterminatedLiteral { literal_type } => {
                write!(f, "Lex error: unterminated {} literal", literal_type)
            }
            ErrorKind::Io { message } => {
                write!(f, "I/O error: {}", message)
            }
        }
    }
}

impl Diagnostic for VsharpError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl VsharpError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::IllegalToken { .. } => "illegal token".into(),
            ErrorKind::InvalidLiteral { .. } => "invalid literal".into(),
            ErrorKind::UnterminatedLiteral { .. } => "literal never closed".into(),
            ErrorKind::Io { .. } => "I/O failure".into(),
        }
    }
}

// ============================================================================
// CONSTRUCTION HELPERS
// ============================================================================

/// Creates an error for failures not tied to any source location, such as
/// file reads or transport failures.
pub fn io_error(message: impl Into<String>) -> VsharpError {
    let message = message.into();
    SourceContext::fallback(&message).report(ErrorKind::Io { message }, unspanned())
}

/// Placeholder span for errors without a source location. Makes the intent
/// of an empty span explicit and searchable.
pub fn unspanned() -> SourceSpan {
    SourceSpan::from(0..0)
}

/// Converts a lexer span to a miette source span.
pub fn to_source_span(span: crate::syntax::Span) -> SourceSpan {
    SourceSpan::from(span.start..span.end)
}

/// Prints an error with full miette diagnostics to stderr.
///
/// Use this for user-facing error display in CLI contexts.
pub fn print_error(error: VsharpError) {
    use miette::Report;
    let report = Report::new(error);
    eprintln!("{report:?}");
}
