use pretty_assertions::assert_eq;

use super::*;

fn delims(open: &str, close: &str) -> Option<Delimiters> {
    Some(Delimiters {
        open: open.to_owned(),
        close: close.to_owned(),
    })
}

#[test]
fn test_default() {
    let d = Delimiters::default();
    assert_eq!(d.open, "{{");
    assert_eq!(d.close, "}}");
    assert!(d.is_default());
}

#[test]
fn test_valid_directives() {
    assert_eq!(Delimiters::from_directive("=<% %>="), delims("<%", "%>"));
    assert_eq!(Delimiters::from_directive("=| |="), delims("|", "|"));
    assert_eq!(Delimiters::from_directive("={{ }}="), delims("{{", "}}"));
    assert!(Delimiters::from_directive("={{ }}=").is_some_and(|d| d.is_default()));
}

#[test]
fn test_too_short() {
    assert_eq!(Delimiters::from_directive("=a ="), None);
    assert_eq!(Delimiters::from_directive("="), None);
}

#[test]
fn test_missing_trailing_equals() {
    assert_eq!(Delimiters::from_directive("=<% %>"), None);
}

#[test]
fn test_space_count() {
    assert_eq!(Delimiters::from_directive("=<%%>="), None);
    assert_eq!(Delimiters::from_directive("=<%  %>="), None);
    assert_eq!(Delimiters::from_directive("=<% % >="), None);
}

#[test]
fn test_empty_token() {
    assert_eq!(Delimiters::from_directive("= %>>="), None);
    assert_eq!(Delimiters::from_directive("=<<% ="), None);
}
