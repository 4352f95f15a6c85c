use indexmap::IndexMap;
use indoc::indoc;

use crate::json::Json;
use crate::{Limits, ParseErrorKind};

#[test]
fn scalars() {
    assert_eq!(Json::parse("null"), Ok(Json::Null));
    assert_eq!(Json::parse("true"), Ok(Json::Bool(true)));
    assert_eq!(Json::parse("false"), Ok(Json::Bool(false)));
    assert_eq!(Json::parse("-12.5e1"), Ok(Json::Number(-125.0)));
    assert_eq!(Json::parse("0"), Ok(Json::Number(0.0)));
    assert_eq!(Json::parse(r#""hi""#), Ok(Json::String("hi".to_string())));
}

#[test]
fn containers_with_whitespace() {
    let json = Json::parse(indoc! {r#"
        {
          "name": "weft",
          "tags": [ "parser", "combinator" ],
          "empty": {},
          "none": [ ]
        }
    "#})
    .unwrap();

    let mut expected = IndexMap::new();
    expected.insert("name".to_string(), Json::String("weft".to_string()));
    expected.insert(
        "tags".to_string(),
        Json::Array(vec![
            Json::String("parser".to_string()),
            Json::String("combinator".to_string()),
        ]),
    );
    expected.insert("empty".to_string(), Json::Object(IndexMap::new()));
    expected.insert("none".to_string(), Json::Array(vec![]));
    assert_eq!(json, Json::Object(expected));
}

#[test]
fn string_escapes() {
    let json = Json::parse(r#""a\"b\\c\/\n\té😀""#).unwrap();

    assert_eq!(json, Json::String("a\"b\\c/\n\té😀".to_string()));
}

#[test]
fn display_is_compact() {
    let json = Json::parse(r#"{ "a" : [1, 2.5, true, null], "b" : "x\ny" }"#).unwrap();

    insta::assert_snapshot!(json, @r#"{"a":[1,2.5,true,null],"b":"x\ny"}"#);
}

#[test]
fn display_round_trips() {
    let source = r#"{"k":[{"deep":[[[]]]},-0.001,1e21,"tab\tquote\"\u0001"],"z":{}}"#;
    let json = Json::parse(source).unwrap();

    let reparsed = Json::parse(&json.to_string()).unwrap();

    assert_eq!(reparsed, json);
}

#[test]
fn serializes_like_serde_json() {
    let source = r#"{"a":[1.5,true,null,"x\ny"],"b":{"c":-2.25e3}}"#;
    let json = Json::parse(source).unwrap();

    let ours = serde_json::to_value(&json).unwrap();
    let theirs: serde_json::Value = serde_json::from_str(source).unwrap();

    assert_eq!(ours, theirs);
}

#[test]
fn duplicate_keys_keep_last() {
    let json = Json::parse(r#"{"a":1,"a":2}"#).unwrap();

    insta::assert_snapshot!(json, @r#"{"a":2}"#);
}

#[test]
fn missing_value_error() {
    insta::assert_snapshot!(
        Json::parse("[1, 2,, 3]").unwrap_err(),
        @"error at line 1, col 7: unexpected ','; expected value"
    );
}

#[test]
fn empty_document_error() {
    insta::assert_snapshot!(
        Json::parse("  ").unwrap_err(),
        @"error at line 1, col 3: unexpected end of input; expected value"
    );
}

#[test]
fn unclosed_array_error() {
    insta::assert_snapshot!(
        Json::parse("[1, 2").unwrap_err(),
        @"error at line 1, col 6: unexpected end of input; expected ']'"
    );
}

#[test]
fn unterminated_string_error() {
    insta::assert_snapshot!(
        Json::parse(r#""abc"#).unwrap_err(),
        @r#"error at line 1, col 5: unexpected end of input; expected '"'"#
    );
}

#[test]
fn trailing_content_error() {
    insta::assert_snapshot!(
        Json::parse("1 2").unwrap_err(),
        @"error at line 1, col 3: unexpected '2'; expected end of input"
    );
}

#[test]
fn semantic_errors() {
    let unpaired = Json::parse(r#""\ud83dA""#).unwrap_err();
    let huge = Json::parse("1e400").unwrap_err();
    let control = Json::parse("\"a\u{1}\"").unwrap_err();

    assert_eq!(unpaired.kind(), ParseErrorKind::Custom);
    insta::assert_snapshot!(unpaired, @"error at line 1, col 8: unpaired surrogate in unicode escape");
    insta::assert_snapshot!(huge, @"error at line 1, col 6: number out of range");
    insta::assert_snapshot!(control, @"error at line 1, col 4: control character in string");
}

#[test]
fn nesting_256_deep() {
    let source = format!("{}{}", "[".repeat(256), "]".repeat(256));

    let json = Json::parse(&source);

    let mut depth = 0;
    let mut current = json.unwrap();
    while let Json::Array(mut items) = current {
        depth += 1;
        current = items.pop().unwrap_or(Json::Null);
    }
    assert_eq!(depth, 256);
}

#[test]
fn objects_nest_to_the_default_limit() {
    let object = |depth: usize| format!("{}1{}", r#"{"a":"#.repeat(depth), "}".repeat(depth));

    assert!(Json::parse(&object(256)).is_ok());
    let err = Json::parse(&object(257)).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::RecursionLimitExceeded);
    insta::assert_snapshot!(err.message().unwrap(), @"recursion limit of 256 exceeded");
}

#[test]
fn nesting_far_too_deep() {
    let source = format!("{}{}", "[".repeat(100_000), "]".repeat(100_000));

    let err = Json::parse(&source).unwrap_err();

    assert_eq!(err.kind(), ParseErrorKind::RecursionLimitExceeded);
}

#[test]
fn custom_recursion_limit() {
    let limits = Limits::new().recursion_limit(Some(8));

    let nested = |depth: usize| format!("{}{}", "[".repeat(depth), "]".repeat(depth));

    assert!(Json::parse_with_limits(&nested(8), limits).is_ok());
    let err = Json::parse_with_limits(&nested(9), limits).unwrap_err();
    assert_eq!(err.kind(), ParseErrorKind::RecursionLimitExceeded);
}

#[test]
fn wide_array() {
    let source = format!("[{}]", vec!["0"; 100_000].join(","));

    let json = Json::parse(&source).unwrap();

    match json {
        Json::Array(items) => assert_eq!(items.len(), 100_000),
        other => panic!("expected array, got {other:?}"),
    }
}
