use pretty_assertions::assert_eq;

use super::*;

fn classify_str(contents: &str, triple: bool) -> (TagKind, &str) {
    let range = trim(contents, 0..contents.len());
    let (kind, name) = classify(contents, range, triple);
    (kind, &contents[name])
}

#[test]
fn test_trim() {
    let s = " \t a b \r\n";
    assert_eq!(&s[trim(s, 0..s.len())], "a b");
    assert_eq!(trim("   ", 0..3), 3..3);
    assert_eq!(trim("x", 0..0), 0..0);
}

#[test]
fn test_trim_vertical_tab_and_form_feed() {
    let s = "\x0bname\x0c";
    assert_eq!(&s[trim(s, 0..s.len())], "name");
}

#[test]
fn test_trim_within_range() {
    let s = "{{  x  }}";
    assert_eq!(trim(s, 2..7), 4..5);
}

#[test]
fn test_classify_sigils() {
    assert_eq!(classify_str("#  items ", false), (TagKind::SectionBegin, "items"));
    assert_eq!(classify_str("^items", false), (TagKind::SectionBeginInverted, "items"));
    assert_eq!(classify_str("/ items", false), (TagKind::SectionEnd, "items"));
    assert_eq!(classify_str("> header", false), (TagKind::Partial, "header"));
    assert_eq!(classify_str("& raw", false), (TagKind::UnescapedVariable, "raw"));
    assert_eq!(classify_str("! a note", false), (TagKind::Comment, "a note"));
}

#[test]
fn test_classify_variable_keeps_whole_contents() {
    assert_eq!(classify_str(" first last ", false), (TagKind::Variable, "first last"));
    assert_eq!(classify_str("=<% %>=", false), (TagKind::Variable, "=<% %>="));
    assert_eq!(classify_str("", false), (TagKind::Variable, ""));
}

#[test]
fn test_classify_triple_ignores_sigils() {
    assert_eq!(classify_str("#x", true), (TagKind::UnescapedVariable, "#x"));
    assert_eq!(classify_str(" raw ", true), (TagKind::UnescapedVariable, "raw"));
}

#[test]
fn test_classify_sigil_only() {
    assert_eq!(classify_str("#", false), (TagKind::SectionBegin, ""));
}
