use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;

use tinyhttpd::http::request::ParsedHeaders;
use tinyhttpd::http::response::{Response, StatusCode};
use tinyhttpd::http::writer::ResponseWriter;

fn temp_file(name: &str, contents: &[u8]) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tinyhttpd-response-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn render(response: Response, headers: &ParsedHeaders, send_body: bool) -> Vec<u8> {
    let mut out = Vec::new();
    ResponseWriter::new(&mut out).write(response, headers, send_body).unwrap();
    out
}

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::Found.as_u16(), 302);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::NotFound.as_u16(), 404);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::NotImplemented.as_u16(), 501);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::Found.reason_phrase(), "Found on remote");
    assert_eq!(StatusCode::NotFound.reason_phrase(), "Could not find the requested file");
    assert_eq!(StatusCode::InternalServerError.reason_phrase(), "Server Error");
    assert_eq!(StatusCode::NotImplemented.reason_phrase(), "Unknown method");
}

#[test]
fn test_response_helpers() {
    assert_eq!(Response::not_found().status, StatusCode::NotFound);
    assert_eq!(Response::internal_error().reason, "Server Error");

    let custom = Response::with_reason(StatusCode::BadRequest, "Wrong path");
    assert_eq!(custom.status, StatusCode::BadRequest);
    assert_eq!(custom.reason, "Wrong path");
    assert!(custom.file.is_none());
}

#[test]
fn test_write_not_found() {
    let out = render(Response::not_found(), &ParsedHeaders::default(), true);

    assert_eq!(out, b"HTTP/1.1 404 Could not find the requested file\r\n\r\n");
}

#[test]
fn test_write_redirect() {
    let headers = ParsedHeaders {
        location: Some("http://example.com:81/alias".to_string()),
        ..ParsedHeaders::default()
    };
    let out = render(Response::new(StatusCode::Found), &headers, true);

    assert_eq!(
        out,
        b"HTTP/1.1 302 Found on remote\r\nLocation: http://example.com:81/alias\r\n\r\n"
    );
}

#[test]
fn test_write_connection_close_before_location() {
    let headers = ParsedHeaders {
        connection: Some("close".to_string()),
        location: Some("http://h:1/x".to_string()),
        ..ParsedHeaders::default()
    };
    let out = render(Response::new(StatusCode::Found), &headers, true);

    assert_eq!(
        out,
        b"HTTP/1.1 302 Found on remote\r\nConnection: close\r\nLocation: http://h:1/x\r\n\r\n"
    );
}

#[test]
fn test_other_connection_values_not_echoed() {
    let headers = ParsedHeaders {
        connection: Some("keep-alive".to_string()),
        ..ParsedHeaders::default()
    };
    let out = render(Response::new(StatusCode::NotImplemented), &headers, true);

    assert_eq!(out, b"HTTP/1.1 501 Unknown method\r\n\r\n");
}

#[test]
fn test_write_file_with_body() {
    let path = temp_file("get.bin", b"hello world");
    let response = Response::file(File::open(&path).unwrap()).unwrap();
    let out = render(response, &ParsedHeaders::default(), true);

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 11\r\n\r\nhello world"
    );
}

#[test]
fn test_write_file_without_body() {
    let path = temp_file("head.bin", b"hello world");
    let response = Response::file(File::open(&path).unwrap()).unwrap();
    let out = render(response, &ParsedHeaders::default(), false);

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 11\r\n\r\n"
    );
}

#[test]
fn test_write_large_file_streams_every_byte() {
    let contents: Vec<u8> = (0..50_000u32).map(|i| (i % 251) as u8).collect();
    let path = temp_file("large.bin", &contents);
    let response = Response::file(File::open(&path).unwrap()).unwrap();
    let out = render(response, &ParsedHeaders::default(), true);

    let head = b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 50000\r\n\r\n";
    assert_eq!(&out[..head.len()], head);
    assert_eq!(&out[head.len()..], contents.as_slice());
}

#[test]
fn test_write_file_with_connection_close() {
    let path = temp_file("close.bin", b"");
    let headers = ParsedHeaders {
        connection: Some("close".to_string()),
        ..ParsedHeaders::default()
    };
    let out = render(Response::file(File::open(&path).unwrap()).unwrap(), &headers, true);

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nConnection: close\r\nContent-Type: application/octet-stream\r\nContent-Length: 0\r\n\r\n"
    );
}

#[test]
fn test_file_is_sized_when_response_is_built() {
    let path = temp_file("sized.bin", b"hello world");
    let response = Response::file(File::open(&path).unwrap()).unwrap();
    assert_eq!(response.status, StatusCode::Ok);
    assert_eq!(response.content_length, 11);

    fs::OpenOptions::new().append(true).open(&path).unwrap().write_all(b"!!!!!").unwrap();
    let out = render(response, &ParsedHeaders::default(), false);

    assert_eq!(
        out,
        b"HTTP/1.1 200 OK\r\nContent-Type: application/octet-stream\r\nContent-Length: 11\r\n\r\n"
    );
}
