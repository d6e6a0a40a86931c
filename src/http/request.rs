/// Longest request path that is ever resolved against the filesystem.
pub const MAX_PATH_LEN: usize = 4096;

/// HTTP request methods.
///
/// Only GET and HEAD are served. Any other syntactically valid token is
/// kept as `Other` and answered with 501.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    /// GET - Retrieve a resource
    GET,
    /// HEAD - Like GET but without the response body
    HEAD,
    /// Any other token
    Other(String),
}

impl Method {
    /// Classifies a method token. Matching is case-sensitive.
    ///
    /// # Example
    ///
    /// ```
    /// # use tinyhttpd::http::request::Method;
    /// assert_eq!(Method::from_token("GET"), Method::GET);
    /// assert_eq!(Method::from_token("get"), Method::Other("get".into()));
    /// ```
    pub fn from_token(token: &str) -> Self {
        match token {
            "GET" => Method::GET,
            "HEAD" => Method::HEAD,
            other => Method::Other(other.to_string()),
        }
    }

    pub fn is_get(&self) -> bool {
        matches!(self, Method::GET)
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Method::Other(_))
    }

    pub fn as_str(&self) -> &str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::Other(token) => token,
        }
    }
}

/// The only headers the server cares about.
///
/// `connection` and `content_length` come from the request; `location` is
/// filled in when the path resolves to a redirect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedHeaders {
    pub connection: Option<String>,
    pub content_length: Option<String>,
    pub location: Option<String>,
}

impl ParsedHeaders {
    /// True when the peer sent exactly `Connection: close`.
    ///
    /// The value comparison is case-sensitive.
    pub fn wants_close(&self) -> bool {
        self.connection.as_deref() == Some("close")
    }

    pub fn force_close(&mut self) {
        self.connection = Some("close".to_string());
    }
}

/// State of one request/response exchange.
///
/// Built from the request line, filled by the header lines, and dropped
/// before the next request on the same connection is read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Decoded path; left empty when `path_too_long` is set.
    pub path: String,
    /// The requested path exceeded [`MAX_PATH_LEN`] and will not be resolved.
    pub path_too_long: bool,
    pub headers: ParsedHeaders,
}

impl Request {
    pub fn new(method: Method, path: &str) -> Self {
        let path_too_long = path.len() > MAX_PATH_LEN;

        Self {
            method,
            path: if path_too_long { String::new() } else { path.to_string() },
            path_too_long,
            headers: ParsedHeaders::default(),
        }
    }
}
