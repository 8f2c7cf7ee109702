//! HTML escaping for variable output.

use std::borrow::Cow;

use crate::Sink;

#[inline]
fn entity(byte: u8) -> Option<&'static str> {
    match byte {
        b'&' => Some("&amp;"),
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'"' => Some("&quot;"),
        b'\'' => Some("&apos;"),
        _ => None,
    }
}

/// Append `text` to `sink` with `& < > " '` replaced by entities.
///
/// Runs of ordinary text are appended as single slices.
pub fn write_escaped<S: Sink + ?Sized>(sink: &mut S, text: &str) {
    let mut start = 0;
    for (i, byte) in text.bytes().enumerate() {
        if let Some(entity) = entity(byte) {
            if start < i {
                sink.append(&text[start..i]);
            }
            sink.append(entity);
            start = i + 1;
        }
    }
    if start < text.len() {
        sink.append(&text[start..]);
    }
}

/// Escaped copy of `text`, borrowed when nothing needed replacing.
pub fn escape_html(text: &str) -> Cow<'_, str> {
    if !text.bytes().any(|b| entity(b).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + text.len() / 4);
    write_escaped(&mut out, text);
    Cow::Owned(out)
}
