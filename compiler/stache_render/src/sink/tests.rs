use std::io::{self, Write};

use pretty_assertions::assert_eq;

use super::*;

/// Accepts `limit` bytes, then fails every write.
#[derive(Debug)]
struct Limited {
    written: Vec<u8>,
    limit: usize,
}

impl Write for Limited {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if self.written.len() + buf.len() > self.limit {
            return Err(io::Error::new(io::ErrorKind::WriteZero, "full"));
        }
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_string_sink() {
    let mut out = String::new();
    out.append("a");
    out.append("b");
    assert_eq!(out, "ab");
    assert!(!out.is_closed());
}

#[test]
fn test_mut_ref_forwards() {
    fn append_to<S: Sink>(mut sink: S) {
        sink.append("x");
    }

    let mut out = String::new();
    append_to(&mut out);
    append_to(&mut out);
    assert_eq!(out, "xx");
}

#[test]
fn test_io_sink_writes_through() {
    let mut sink = IoSink::new(Vec::new());
    sink.append("héllo");
    sink.append(" world");
    assert!(!sink.is_closed());
    assert_eq!(sink.finish().unwrap(), "héllo world".as_bytes());
}

#[test]
fn test_io_sink_closes_on_first_error() {
    let mut sink = IoSink::new(Limited {
        written: Vec::new(),
        limit: 3,
    });
    sink.append("ab");
    sink.append("cd");
    assert!(sink.is_closed());
    assert_eq!(sink.error().map(io::Error::kind), Some(io::ErrorKind::WriteZero));

    // Nothing more is attempted after the failure.
    sink.append("e");
    let err = sink.finish().unwrap_err();
    assert_eq!(err.kind(), io::ErrorKind::WriteZero);
}
