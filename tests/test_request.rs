use tinyhttpd::http::request::{MAX_PATH_LEN, Method, ParsedHeaders, Request};

#[test]
fn test_method_from_token() {
    assert_eq!(Method::from_token("GET"), Method::GET);
    assert_eq!(Method::from_token("HEAD"), Method::HEAD);
    assert_eq!(Method::from_token("POST"), Method::Other("POST".to_string()));
    assert_eq!(Method::from_token("Get"), Method::Other("Get".to_string()));
}

#[test]
fn test_method_classification() {
    assert!(Method::GET.is_get());
    assert!(Method::GET.is_supported());
    assert!(!Method::HEAD.is_get());
    assert!(Method::HEAD.is_supported());

    let other = Method::from_token("OPTIONS");
    assert!(!other.is_get());
    assert!(!other.is_supported());
    assert_eq!(other.as_str(), "OPTIONS");
}

#[test]
fn test_request_new_keeps_short_path() {
    let req = Request::new(Method::GET, "/index.html");

    assert_eq!(req.path, "/index.html");
    assert!(!req.path_too_long);
    assert_eq!(req.headers, ParsedHeaders::default());
}

#[test]
fn test_request_new_flags_long_path() {
    let long = "/".repeat(MAX_PATH_LEN + 1);
    let req = Request::new(Method::HEAD, &long);

    assert!(req.path_too_long);
    assert_eq!(req.path, "");
}

#[test]
fn test_headers_default_keep_alive() {
    let headers = ParsedHeaders::default();

    assert!(!headers.wants_close());
    assert!(headers.location.is_none());
}

#[test]
fn test_headers_force_close_overrides_value() {
    let mut headers = ParsedHeaders {
        connection: Some("keep-alive".to_string()),
        ..ParsedHeaders::default()
    };
    headers.force_close();

    assert!(headers.wants_close());
}
