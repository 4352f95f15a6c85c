use crate::{SourcePosDelta, Token};

#[derive(Clone, Debug, PartialEq)]
enum Tok {
    Ident(String),
    Comma,
}

impl Token for Tok {}

#[test]
fn char_deltas() {
    assert_eq!('a'.pos_delta(), SourcePosDelta::ONE_COL);
    assert_eq!('\n'.pos_delta(), SourcePosDelta::NEWLINE);
    assert_eq!('\t'.pos_delta(), SourcePosDelta::new(0, 4));
}

#[test]
fn char_describe_is_quoted() {
    insta::assert_snapshot!('a'.describe(), @"'a'");
    insta::assert_snapshot!('\n'.describe(), @r"'\n'");
}

#[test]
fn byte_describe() {
    insta::assert_snapshot!(b'x'.describe(), @"'x'");
    insta::assert_snapshot!(0u8.describe(), @"0x00");
    assert_eq!(b'\n'.pos_delta(), SourcePosDelta::NEWLINE);
}

#[test]
fn custom_tokens_use_defaults() {
    let tok = Tok::Ident("x".to_string());
    assert_eq!(tok.pos_delta(), SourcePosDelta::ONE_COL);
    insta::assert_snapshot!(tok.describe(), @r#"Ident("x")"#);
    insta::assert_snapshot!(Tok::Comma.describe(), @"Comma");
}

#[test]
fn describe_run_per_token_type() {
    insta::assert_snapshot!(char::describe_run(&['a', 'b', '"']), @r#""ab\"""#);
    insta::assert_snapshot!(u8::describe_run(b"ok"), @r#""ok""#);
    insta::assert_snapshot!(Tok::describe_run(&[Tok::Comma, Tok::Comma]), @"Comma Comma");
}
