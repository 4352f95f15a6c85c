use super::{Expected, ExpectedCollector};

fn labels(collector: &ExpectedCollector<char>, location: usize) -> Vec<String> {
    collector
        .at(location)
        .filter_map(Expected::describe)
        .collect()
}

#[test]
fn truncate_drops_entries_after_mark() {
    let mut collector = ExpectedCollector::new();
    collector.push(0, Expected::label("a"));
    let mark = collector.mark();
    collector.push(0, Expected::label("b"));
    collector.push(3, Expected::label("c"));

    collector.truncate(mark);

    assert_eq!(collector.len(), 1);
    assert_eq!(labels(&collector, 0), vec!["a"]);
}

#[test]
fn prune_shallower_keeps_entries_before_mark() {
    let mut collector = ExpectedCollector::new();
    collector.push(0, Expected::label("outer"));
    let mark = collector.mark();
    collector.push(1, Expected::label("shallow"));
    collector.push(4, Expected::label("deep"));
    collector.push(2, Expected::label("middle"));
    collector.push(4, Expected::label("deep too"));

    collector.prune_shallower(mark, 4);

    assert_eq!(labels(&collector, 0), vec!["outer"]);
    assert!(labels(&collector, 1).is_empty());
    assert!(labels(&collector, 2).is_empty());
    let mut deep = labels(&collector, 4);
    deep.sort();
    assert_eq!(deep, vec!["deep", "deep too"]);
}

#[test]
fn describe_forms() {
    assert_eq!(Expected::<char>::nothing().describe(), None);
    assert!(Expected::<char>::nothing().is_nothing());
    insta::assert_snapshot!(Expected::token('x').describe().unwrap(), @"'x'");
    insta::assert_snapshot!(Expected::tokens("let".chars()).describe().unwrap(), @r#""let""#);
    insta::assert_snapshot!(Expected::<char>::label("digit").describe().unwrap(), @"digit");
    insta::assert_snapshot!(Expected::<char>::EndOfInput.describe().unwrap(), @"end of input");
}

#[test]
fn clones_share_tokens() {
    let expected = Expected::tokens("abc".chars());
    let copy = expected.clone();
    match (&expected, &copy) {
        (Expected::Tokens(a), Expected::Tokens(b)) => assert!(std::sync::Arc::ptr_eq(a, b)),
        _ => unreachable!(),
    }
}
