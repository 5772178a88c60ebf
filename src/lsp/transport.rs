//! Content-Length framed transport for the JSON-RPC surface.
//!
//! Messages are framed as `Content-Length: <N>\r\n\r\n<N bytes of body>`.
//! Both directions are generic over the reader/writer so the server loop can
//! be driven from in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use thiserror::Error;

/// Transport-level failures. Protocol-level problems (malformed JSON bodies)
/// are not errors; the server loop discards those silently.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("transport I/O failed: {0}")]
    Io(#[from] io::Error),
    #[error("invalid Content-Length value '{0}'")]
    InvalidContentLength(String),
}

/// Reads one framed message body. Returns `Ok(None)` at end of input.
///
/// Headers are consumed up to the blank separator line; a frame without a
/// `Content-Length` header yields an empty body, which callers skip.
pub fn read_message<R: BufRead>(reader: &mut R) -> Result<Option<String>, RpcError> {
    let mut content_length: Option<usize> = None;
    loop {
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim_end_matches(['\r', '\n']);
        if line.is_empty() {
            break;
        }
        if let Some(value) = line.strip_prefix("Content-Length:") {
            let value = value.trim();
            let parsed = value
                .parse::<usize>()
                .map_err(|_| RpcError::InvalidContentLength(value.to_string()))?;
            content_length = Some(parsed);
        }
    }

    let len = content_length.unwrap_or(0);
    let mut body = vec![0u8; len];
    reader.read_exact(&mut body)?;
    Ok(Some(String::from_utf8_lossy(&body).into_owned()))
}

/// Writes one framed message and flushes the sink.
pub fn write_message<W: Write>(writer: &mut W, body: &str) -> Result<(), RpcError> {
    write!(writer, "Content-Length: {}\r\n\r\n{}", body.len(), body)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn round_trips_a_frame() {
        let mut sink = Vec::new();
        write_message(&mut sink, r#"{"method":"shutdown"}"#).unwrap();
        let mut reader = Cursor::new(sink);
        let body = read_message(&mut reader).unwrap().unwrap();
        assert_eq!(body, r#"{"method":"shutdown"}"#);
        assert!(read_message(&mut reader).unwrap().is_none());
    }

    #[test]
    fn missing_header_yields_empty_body() {
        let mut reader = Cursor::new(b"\r\n".to_vec());
        assert_eq!(read_message(&mut reader).unwrap().unwrap(), "");
    }

    #[test]
    fn eof_yields_none() {
        let mut reader = Cursor::new(Vec::new());
        assert!(read_message(&mut reader).unwrap().is_none());
    }

    #[test]
    fn garbage_length_is_rejected() {
        let mut reader = Cursor::new(b"Content-Length: banana\r\n\r\n".to_vec());
        assert!(matches!(
            read_message(&mut reader),
            Err(RpcError::InvalidContentLength(_))
        ));
    }
}
