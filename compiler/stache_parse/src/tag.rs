//! Tag contents: trimming and classification.

use std::ops::Range;

use stache_ir::TagKind;

/// ASCII whitespace as C's `isspace` sees it, vertical tab included.
#[inline]
fn is_tag_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\x0b' | b'\x0c' | b'\r')
}

/// Narrow `range` of `source` to exclude leading and trailing whitespace.
pub(crate) fn trim(source: &str, range: Range<usize>) -> Range<usize> {
    let bytes = source.as_bytes();
    let mut start = range.start;
    let mut end = range.end;
    while start < end && bytes.get(start).copied().is_some_and(is_tag_space) {
        start += 1;
    }
    while end > start && bytes.get(end - 1).copied().is_some_and(is_tag_space) {
        end -= 1;
    }
    start..end
}

/// Decide a tag's kind and the byte range of its name.
///
/// `contents` is the already-trimmed range inside the delimiters. Tags using
/// the triple-brace shorthand are unescaped variables named by the whole
/// contents. Otherwise the first character picks the kind: plain variables
/// keep the whole contents as their name, every other kind drops the sigil
/// and trims again.
pub(crate) fn classify(
    source: &str,
    contents: Range<usize>,
    triple: bool,
) -> (TagKind, Range<usize>) {
    if triple {
        return (TagKind::UnescapedVariable, contents);
    }
    let first = source.get(contents.clone()).and_then(|s| s.chars().next());
    match TagKind::from_sigil(first) {
        TagKind::Variable => (TagKind::Variable, contents),
        // Every sigil is a single ASCII byte.
        kind => (kind, trim(source, contents.start + 1..contents.end)),
    }
}

#[cfg(test)]
mod tests;
