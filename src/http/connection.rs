use std::io::{BufRead, Write};

use anyhow::Context;
use tracing::{debug, error, warn};

use crate::config::ServerConfig;
use crate::http::error::{Fault, Outcome, ProtocolError};
use crate::http::line::LineReader;
use crate::http::parser::{parse_header_line, parse_request_line};
use crate::http::request::{ParsedHeaders, Request};
use crate::http::resolver::resolve;
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// One accepted connection: a line source, an output sink, and the
/// read-only server configuration.
pub struct Connection<'a, R, W> {
    reader: LineReader<R>,
    sink: W,
    config: &'a ServerConfig,
    state: ConnectionState,
    served: usize,
}

/// Where the connection loop is between exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionState {
    /// Waiting for the next request line.
    Reading,
    Closed,
}

/// A fully read request and its resolution, waiting to be written.
struct Prepared {
    request: Request,
    response: Response,
}

impl<'a, R: BufRead, W: Write> Connection<'a, R, W> {
    pub fn new(source: R, sink: W, config: &'a ServerConfig) -> Self {
        Self {
            reader: LineReader::new(source),
            sink,
            config,
            state: ConnectionState::Reading,
            served: 0,
        }
    }

    /// Serves requests until the connection must close.
    ///
    /// Returns `Ok` once a close was signalled and the last response went
    /// out. An `Err` means the sink failed and the peer may have received a
    /// partial response. Either way the caller closes the transport.
    pub fn run(&mut self) -> anyhow::Result<()> {
        while self.state == ConnectionState::Reading {
            let outcome = self.exchange()?;
            self.served += 1;

            if outcome == Outcome::Close {
                self.state = ConnectionState::Closed;
            }
        }

        Ok(())
    }

    /// Number of responses written so far, error responses included.
    pub fn served(&self) -> usize {
        self.served
    }

    pub fn state(&self) -> ConnectionState {
        self.state
    }

    pub fn into_sink(self) -> W {
        self.sink
    }

    /// Reads, resolves and answers one request.
    fn exchange(&mut self) -> anyhow::Result<Outcome> {
        match self.prepare() {
            Ok(Prepared { request, response }) => {
                debug!(
                    method = request.method.as_str(),
                    path = %request.path,
                    status = response.status.as_u16(),
                    "Request served"
                );

                ResponseWriter::new(&mut self.sink)
                    .write(response, &request.headers, request.method.is_get())
                    .context("failed to write response")?;

                if request.headers.wants_close() {
                    Ok(Outcome::Close)
                } else {
                    Ok(Outcome::Continue)
                }
            }

            Err(Fault::Client(err)) => {
                warn!(error = %err, "Protocol error, closing connection");
                self.write_error(Response::with_reason(err.status(), err.reason()))?;
                Ok(Outcome::Close)
            }

            Err(Fault::Server(err)) => {
                error!(error = %err, "Server fault, closing connection");
                self.write_error(Response::internal_error())?;
                Ok(Outcome::Close)
            }
        }
    }

    fn prepare(&mut self) -> Result<Prepared, Fault> {
        let line = self
            .reader
            .read_line()?
            .ok_or(ProtocolError::RequestMissing)?;
        let mut request = parse_request_line(&line)?;

        loop {
            let line = self.reader.read_line()?.ok_or(ProtocolError::CrlfMissing)?;

            match line.as_slice() {
                b"\r" => break,
                [] | [_] => return Err(ProtocolError::CrlfMissing.into()),
                _ => parse_header_line(&line, &mut request.headers)?,
            }
        }

        let response = resolve(&mut request, self.config)?;
        Ok(Prepared { request, response })
    }

    /// Error responses always force `Connection: close`.
    fn write_error(&mut self, response: Response) -> anyhow::Result<()> {
        let mut headers = ParsedHeaders::default();
        headers.force_close();

        ResponseWriter::new(&mut self.sink)
            .write(response, &headers, false)
            .context("failed to write error response")
    }
}
