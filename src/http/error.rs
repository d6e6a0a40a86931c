use std::fmt;
use std::io;

use crate::http::response::StatusCode;

/// Client-caused malformations of the wire format.
///
/// Every variant ends the connection with a 400 response carrying the
/// variant's reason phrase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// The source ended before a request line arrived.
    RequestMissing,
    /// The request line does not match the grammar.
    WrongRequest,
    /// A GET or HEAD target that does not start with `/`.
    WrongPath,
    /// A header line that does not match the grammar.
    HeaderFormat,
    /// `Connection` or `Content-Length` sent twice.
    HeaderRepetition(&'static str),
    /// A `Content-Length` value with non-digit characters.
    WrongParameter,
    /// A positive `Content-Length`.
    BodyNotAllowed,
    /// The header block did not end with a bare CRLF.
    CrlfMissing,
}

impl ProtocolError {
    pub fn status(&self) -> StatusCode {
        StatusCode::BadRequest
    }

    pub fn reason(&self) -> &'static str {
        match self {
            ProtocolError::RequestMissing => "Request missing",
            ProtocolError::WrongRequest => "Wrong request",
            ProtocolError::WrongPath => "Wrong path",
            ProtocolError::HeaderFormat => "Header format error",
            ProtocolError::HeaderRepetition(_) => "Header repetition",
            ProtocolError::WrongParameter => "Wrong parameter",
            ProtocolError::BodyNotAllowed => "Message body not allowed",
            ProtocolError::CrlfMissing => "CRLF missing",
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::HeaderRepetition(name) => write!(f, "Header repetition \"{name}\""),
            other => f.write_str(other.reason()),
        }
    }
}

impl std::error::Error for ProtocolError {}

/// Why an exchange could not be completed normally.
#[derive(Debug)]
pub enum Fault {
    /// Bad input from the peer: 400 and close.
    Client(ProtocolError),
    /// I/O or environment failure: 500 and close.
    Server(io::Error),
}

impl From<ProtocolError> for Fault {
    fn from(err: ProtocolError) -> Self {
        Fault::Client(err)
    }
}

impl From<io::Error> for Fault {
    fn from(err: io::Error) -> Self {
        Fault::Server(err)
    }
}

/// What the connection does once a response has been sent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Read another request from the same connection.
    Continue,
    /// Stop; the caller tears the transport down.
    Close,
}
