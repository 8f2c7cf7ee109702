//! Output destinations for rendered text.

use std::io;

/// Append-only destination for rendered text.
///
/// A sink that reports [`is_closed`](Sink::is_closed) stops the render at
/// the next node; scopes pushed on the way there are still popped.
pub trait Sink {
    fn append(&mut self, text: &str);

    /// Returns `true` once the sink accepts no more output.
    fn is_closed(&self) -> bool {
        false
    }
}

impl Sink for String {
    #[inline]
    fn append(&mut self, text: &str) {
        self.push_str(text);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    #[inline]
    fn append(&mut self, text: &str) {
        (**self).append(text);
    }

    #[inline]
    fn is_closed(&self) -> bool {
        (**self).is_closed()
    }
}

/// Adapts an [`io::Write`] into a [`Sink`].
///
/// The first write error is kept and closes the sink; call
/// [`finish`](IoSink::finish) to get it back.
#[derive(Debug)]
pub struct IoSink<W: io::Write> {
    writer: W,
    error: Option<io::Error>,
}

impl<W: io::Write> IoSink<W> {
    pub fn new(writer: W) -> Self {
        IoSink {
            writer,
            error: None,
        }
    }

    /// The write error that closed this sink, if any.
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Flush and return the writer, or the first error seen.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(error) = self.error.take() {
            return Err(error);
        }
        self.writer.flush()?;
        Ok(self.writer)
    }
}

impl<W: io::Write> Sink for IoSink<W> {
    fn append(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(error) = self.writer.write_all(text.as_bytes()) {
            tracing::debug!(%error, "output closed");
            self.error = Some(error);
        }
    }

    #[inline]
    fn is_closed(&self) -> bool {
        self.error.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
