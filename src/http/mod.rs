//! HTTP protocol implementation.
//!
//! This module implements a deliberately small HTTP/1.1 server: GET and HEAD
//! for files under a root directory, 302 redirects from a static map, and a
//! precise 400/404/500/501 for everything else.
//!
//! # Architecture
//!
//! - **`line`**: Bounded line reader over the connection's byte source
//! - **`parser`**: Request-line and header-line validators
//! - **`request`**: Per-exchange request state and the recognized headers
//! - **`resolver`**: File/redirect resolution and the traversal guard
//! - **`response`**: Status codes and the resolved response
//! - **`writer`**: Serializes responses and streams file bodies
//! - **`error`**: Protocol errors and exchange outcomes
//! - **`connection`**: The per-connection request/response loop
//!
//! # Connection State Machine
//!
//! ```text
//!        ┌──────────────────┐
//!        │ ReadRequestLine  │ ← end of stream: 400 "Request missing"
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │   ReadHeaders    │ ← until a bare CRLF
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Resolve      │ ← file, redirect, 404 or 501
//!        └──────┬───────────┘
//!               ▼
//!        ┌──────────────────┐
//!        │     Respond      │
//!        └──────┬───────────┘
//!               ├─ Connection: close → Closed
//!               └─ otherwise → ReadRequestLine (same connection)
//! ```
//!
//! Any protocol error or server fault answers with `Connection: close` and
//! ends the loop.
//!
//! # Example
//!
//! ```no_run
//! use std::io::BufReader;
//! use std::net::TcpListener;
//! use tinyhttpd::config::ServerConfig;
//! use tinyhttpd::http::connection::Connection;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::new("/srv/www");
//!     let listener = TcpListener::bind("127.0.0.1:8080")?;
//!
//!     for stream in listener.incoming() {
//!         let stream = stream?;
//!         let reader = BufReader::new(stream.try_clone()?);
//!         Connection::new(reader, &stream, &config).run()?;
//!     }
//!     Ok(())
//! }
//! ```

pub mod connection;
pub mod error;
pub mod line;
pub mod parser;
pub mod request;
pub mod resolver;
pub mod response;
pub mod writer;
