//! tinyhttpd - Minimal HTTP/1.1 file and redirect server
//!
//! Core library for request parsing, resolution and response writing.

pub mod config;
pub mod http;
pub mod server;
