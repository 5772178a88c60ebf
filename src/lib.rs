pub use crate::ast::{LiteralValue, Node, NodeKind, Type};
pub use crate::errors::{print_error, ErrorKind, SourceContext, VsharpError};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod lsp;
pub mod syntax;
