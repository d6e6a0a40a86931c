//! Hand-written validators for the request line and header lines.
//!
//! Both inputs are single lines as returned by
//! [`LineReader`](crate::http::line::LineReader): the `\n` is gone and the
//! line must end in the `\r` that preceded it.

use crate::http::error::ProtocolError;
use crate::http::request::{Method, ParsedHeaders, Request};

const HTTP_VERSION: &[u8] = b"HTTP/1.1";

fn is_token_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

fn is_path_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"./-".contains(&b)
}

fn is_header_name_char(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'-'
}

/// Strips the mandatory trailing `\r`.
fn strip_cr(line: &[u8]) -> Option<&[u8]> {
    line.strip_suffix(b"\r")
}

/// Splits off the longest prefix whose bytes all satisfy `pred`.
fn take_while(input: &[u8], pred: fn(u8) -> bool) -> (&[u8], &[u8]) {
    let end = input.iter().position(|&b| !pred(b)).unwrap_or(input.len());
    input.split_at(end)
}

/// Parses `<token> SP <path> SP "HTTP/1.1" CR`.
///
/// GET and HEAD require the path to start with `/`. Other methods are
/// accepted here and flagged for a 501 answer.
pub fn parse_request_line(line: &[u8]) -> Result<Request, ProtocolError> {
    let line = strip_cr(line).ok_or(ProtocolError::WrongRequest)?;

    let (token, rest) = take_while(line, is_token_char);
    let rest = rest.strip_prefix(b" ").ok_or(ProtocolError::WrongRequest)?;
    let (path, rest) = take_while(rest, is_path_char);
    let rest = rest.strip_prefix(b" ").ok_or(ProtocolError::WrongRequest)?;

    if token.is_empty() || path.is_empty() || rest != HTTP_VERSION {
        return Err(ProtocolError::WrongRequest);
    }

    // Both slices are ASCII after the character-class checks above.
    let token = std::str::from_utf8(token).map_err(|_| ProtocolError::WrongRequest)?;
    let path = std::str::from_utf8(path).map_err(|_| ProtocolError::WrongRequest)?;

    let method = Method::from_token(token);
    if method.is_supported() && !path.starts_with('/') {
        return Err(ProtocolError::WrongPath);
    }

    Ok(Request::new(method, path))
}

/// Parses `<name> ":" SP* <value> SP* CR` and records the headers the
/// server understands.
///
/// Leading and trailing spaces around the value are dropped, interior
/// spaces are kept. Unknown header names are validated and discarded.
pub fn parse_header_line(line: &[u8], headers: &mut ParsedHeaders) -> Result<(), ProtocolError> {
    let line = strip_cr(line).ok_or(ProtocolError::HeaderFormat)?;

    let (name, rest) = take_while(line, is_header_name_char);
    let rest = rest.strip_prefix(b":").ok_or(ProtocolError::HeaderFormat)?;

    if name.is_empty() || rest.contains(&b'\r') {
        return Err(ProtocolError::HeaderFormat);
    }

    let value = trim_spaces(rest);
    let name = name.to_ascii_lowercase();

    match name.as_slice() {
        b"connection" => {
            if headers.connection.is_some() {
                return Err(ProtocolError::HeaderRepetition("connection"));
            }
            headers.connection = Some(String::from_utf8_lossy(value).into_owned());
        }
        b"content-length" => {
            if headers.content_length.is_some() {
                return Err(ProtocolError::HeaderRepetition("content-length"));
            }
            if !value.iter().all(u8::is_ascii_digit) {
                return Err(ProtocolError::WrongParameter);
            }
            // All digits, so the text is ASCII.
            headers.content_length = Some(String::from_utf8_lossy(value).into_owned());

            if value.iter().any(|&b| b != b'0') {
                return Err(ProtocolError::BodyNotAllowed);
            }
        }
        _ => {}
    }

    Ok(())
}

fn trim_spaces(mut value: &[u8]) -> &[u8] {
    while let [b' ', rest @ ..] = value {
        value = rest;
    }
    while let [rest @ .., b' '] = value {
        value = rest;
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple_get() {
        let req = parse_request_line(b"GET /index.html HTTP/1.1\r").unwrap();

        assert_eq!(req.method, Method::GET);
        assert_eq!(req.path, "/index.html");
        assert!(!req.path_too_long);
    }

    #[test]
    fn trim_keeps_interior_spaces() {
        assert_eq!(trim_spaces(b"  a  b  "), b"a  b");
        assert_eq!(trim_spaces(b"   "), b"");
        assert_eq!(trim_spaces(b""), b"");
    }
}
