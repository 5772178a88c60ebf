//! Minimal JSON-RPC language server for V#.
//!
//! Answers a fixed set of editor requests over a framed byte stream:
//! `initialize`, `textDocument/completion`, `shutdown` and `exit`.
//! Completion responses are the static keyword table; the server does not
//! consult any AST. Malformed request bodies are discarded and the loop
//! keeps serving.

pub mod transport;

use std::io::{self, BufRead, Write};

use serde::Serialize;
use serde_json::{json, Value};

use crate::syntax::keywords::Keyword;

pub use transport::RpcError;
use transport::{read_message, write_message};

/// LSP `CompletionItemKind` for keywords.
const COMPLETION_KIND_KEYWORD: u32 = 14;

#[derive(Debug, Serialize)]
struct CompletionItem {
    label: &'static str,
    kind: u32,
    detail: &'static str,
}

/// Runs the server loop over locked stdin/stdout until `exit` or EOF.
pub fn run_stdio(keywords: &[Keyword]) -> Result<(), RpcError> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&mut stdin.lock(), &mut stdout.lock(), keywords)
}

/// The server loop: read a frame, dispatch on `method`, respond.
///
/// Unknown methods are ignored; `exit` ends the loop, as does end of input.
pub fn serve<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    keywords: &[Keyword],
) -> Result<(), RpcError> {
    while let Some(message) = read_message(reader)? {
        if message.is_empty() {
            continue;
        }
        let request: Value = match serde_json::from_str(&message) {
            Ok(request) => request,
            // Malformed body: drop it and keep serving.
            Err(_) => continue,
        };
        match request.get("method").and_then(Value::as_str).unwrap_or("") {
            "initialize" => handle_initialize(writer, &request)?,
            "textDocument/completion" => handle_completion(writer, &request, keywords)?,
            "shutdown" => handle_shutdown(writer, &request)?,
            "exit" => break,
            _ => {}
        }
    }
    Ok(())
}

fn handle_initialize<W: Write>(writer: &mut W, request: &Value) -> Result<(), RpcError> {
    respond(
        writer,
        request,
        json!({
            "capabilities": {
                "completionProvider": { "resolveProvider": false }
            }
        }),
    )
}

fn handle_completion<W: Write>(
    writer: &mut W,
    request: &Value,
    keywords: &[Keyword],
) -> Result<(), RpcError> {
    let items: Vec<CompletionItem> = keywords
        .iter()
        .map(|kw| CompletionItem {
            label: kw.lexeme,
            kind: COMPLETION_KIND_KEYWORD,
            detail: kw.detail,
        })
        .collect();
    respond(writer, request, json!(items))
}

fn handle_shutdown<W: Write>(writer: &mut W, request: &Value) -> Result<(), RpcError> {
    respond(writer, request, Value::Null)
}

fn respond<W: Write>(writer: &mut W, request: &Value, result: Value) -> Result<(), RpcError> {
    let response = json!({
        "jsonrpc": "2.0",
        "id": request.get("id").cloned().unwrap_or(Value::Null),
        "result": result,
    });
    write_message(writer, &response.to_string())
}
