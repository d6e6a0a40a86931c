use std::io::{self, Read, Write};

use bytes::{BufMut, BytesMut};

use crate::http::request::ParsedHeaders;
use crate::http::response::{Response, StatusCode};

const HTTP_VERSION: &str = "HTTP/1.1";

/// Chunk size used when streaming a file body.
const BUFFER_SIZE: usize = 8192;

fn serialize_head(resp: &Response, headers: &ParsedHeaders) -> BytesMut {
    let mut buf = BytesMut::with_capacity(256);

    // Status line
    let status_line = format!("{} {} {}\r\n", HTTP_VERSION, resp.status.as_u16(), resp.reason);
    buf.put_slice(status_line.as_bytes());

    if headers.wants_close() {
        buf.put_slice(b"Connection: close\r\n");
    }

    if let Some(location) = &headers.location {
        buf.put_slice(b"Location: ");
        buf.put_slice(location.as_bytes());
        buf.put_slice(b"\r\n");
    }

    // Only a 200 with a file carries entity headers.
    if resp.status != StatusCode::Ok || resp.file.is_none() {
        buf.put_slice(b"\r\n");
    }

    buf
}

/// Serializes responses onto a connection's output sink.
pub struct ResponseWriter<'a, W> {
    sink: &'a mut W,
}

impl<'a, W: Write> ResponseWriter<'a, W> {
    pub fn new(sink: &'a mut W) -> Self {
        Self { sink }
    }

    /// Writes the status line and headers, then for a 200 the entity
    /// headers and, if `send_body`, the file contents.
    ///
    /// `Content-Length` is the size taken when the file was opened, so a
    /// file that changes concurrently may not match it. The handle is
    /// dropped before returning whether or not the body was sent.
    pub fn write(&mut self, mut response: Response, headers: &ParsedHeaders, send_body: bool) -> io::Result<()> {
        let mut head = serialize_head(&response, headers);

        if let (StatusCode::Ok, Some(mut file)) = (response.status, response.file.take()) {
            let size = response.content_length;

            head.put_slice(b"Content-Type: application/octet-stream\r\n");
            head.put_slice(format!("Content-Length: {size}\r\n\r\n").as_bytes());
            self.sink.write_all(&head)?;

            if send_body {
                self.stream_body(&mut file)?;
            }
        } else {
            self.sink.write_all(&head)?;
        }

        self.sink.flush()
    }

    fn stream_body(&mut self, body: &mut impl Read) -> io::Result<()> {
        let mut chunk = [0u8; BUFFER_SIZE];

        loop {
            let n = match body.read(&mut chunk) {
                Ok(0) => return Ok(()),
                Ok(n) => n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.sink.write_all(&chunk[..n])?;
        }
    }
}
