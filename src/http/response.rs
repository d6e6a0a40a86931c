use std::fs::File;
use std::io;

/// HTTP status codes the server can emit.
///
/// - `Ok` (200): File served
/// - `Found` (302): Path is mapped to a remote URL
/// - `BadRequest` (400): Malformed request
/// - `NotFound` (404): No file and no redirect for the path
/// - `InternalServerError` (500): Server fault
/// - `NotImplemented` (501): Method other than GET or HEAD
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusCode {
    /// 200 OK
    Ok,
    /// 302 Found on remote
    Found,
    /// 400 Bad Request
    BadRequest,
    /// 404 Could not find the requested file
    NotFound,
    /// 500 Server Error
    InternalServerError,
    /// 501 Unknown method
    NotImplemented,
}

impl StatusCode {
    /// Returns the numeric HTTP status code.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::response::StatusCode;
    /// assert_eq!(StatusCode::Ok.as_u16(), 200);
    /// assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
    /// ```
    pub fn as_u16(&self) -> u16 {
        match self {
            StatusCode::Ok => 200,
            StatusCode::Found => 302,
            StatusCode::BadRequest => 400,
            StatusCode::NotFound => 404,
            StatusCode::InternalServerError => 500,
            StatusCode::NotImplemented => 501,
        }
    }

    /// Returns the reason phrase this server sends with the code.
    ///
    /// 400 responses normally carry the phrase of the
    /// [`ProtocolError`](crate::http::error::ProtocolError) instead.
    pub fn reason_phrase(&self) -> &'static str {
        match self {
            StatusCode::Ok => "OK",
            StatusCode::Found => "Found on remote",
            StatusCode::BadRequest => "Bad Request",
            StatusCode::NotFound => "Could not find the requested file",
            StatusCode::InternalServerError => "Server Error",
            StatusCode::NotImplemented => "Unknown method",
        }
    }
}

/// Outcome of resolving one request, ready to be written.
#[derive(Debug)]
pub struct Response {
    pub status: StatusCode,
    pub reason: &'static str,
    /// Open handle for a 200 response, streamed by the writer.
    pub file: Option<File>,
    /// Size of `file` when it was opened; sent as `Content-Length`.
    pub content_length: u64,
}

impl Response {
    /// A response with the status's own reason phrase and no file.
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            reason: status.reason_phrase(),
            file: None,
            content_length: 0,
        }
    }

    pub fn with_reason(status: StatusCode, reason: &'static str) -> Self {
        Self {
            status,
            reason,
            file: None,
            content_length: 0,
        }
    }

    /// Creates a 200 OK response serving `file`, sized now.
    ///
    /// The size can go stale if the file changes before it is streamed.
    pub fn file(file: File) -> io::Result<Self> {
        let content_length = file.metadata()?.len();

        Ok(Self {
            file: Some(file),
            content_length,
            ..Self::new(StatusCode::Ok)
        })
    }

    pub fn not_found() -> Self {
        Self::new(StatusCode::NotFound)
    }

    pub fn internal_error() -> Self {
        Self::new(StatusCode::InternalServerError)
    }
}
