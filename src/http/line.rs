use std::io::{self, BufRead};

/// Upper bound on a single line read from a connection (2^13 bytes).
///
/// Longer lines are cut at this length and the remainder is left in the
/// source, where the next read picks it up as a new line.
pub const MAX_LINE_LEN: usize = 1 << 13;

/// Reads `\n`-terminated lines from a connection's byte source.
///
/// The `\n` is stripped, anything before it (including a `\r`) is kept.
pub struct LineReader<R> {
    inner: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Reads the next line.
    ///
    /// Returns `Ok(None)` when the source is exhausted before any byte of
    /// the line was read.
    pub fn read_line(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();

        loop {
            let available = match self.inner.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(if line.is_empty() { None } else { Some(line) });
            }

            let room = MAX_LINE_LEN - line.len();
            let window = &available[..available.len().min(room)];

            let (used, done) = match window.iter().position(|&b| b == b'\n') {
                Some(i) => {
                    line.extend_from_slice(&window[..i]);
                    (i + 1, true)
                }
                None => {
                    line.extend_from_slice(window);
                    (window.len(), line.len() == MAX_LINE_LEN)
                }
            };
            self.inner.consume(used);

            if done {
                return Ok(Some(line));
            }
        }
    }
}
