use crate::{SourcePos, SourcePosDelta};

#[test]
fn start_is_line_one_col_one() {
    assert_eq!(SourcePos::default(), SourcePos::new(1, 1));
    insta::assert_snapshot!(SourcePos::START.to_string(), @"line 1, col 1");
}

#[test]
fn column_delta_stays_on_line() {
    let pos = SourcePos::START + SourcePosDelta::ONE_COL + SourcePosDelta::new(0, 3);
    assert_eq!(pos, SourcePos::new(1, 5));
}

#[test]
fn newline_resets_column() {
    let pos = SourcePos::new(3, 17) + SourcePosDelta::NEWLINE;
    assert_eq!(pos, SourcePos::new(4, 1));

    let pos = SourcePos::new(3, 17) + SourcePosDelta::new(2, 4);
    assert_eq!(pos, SourcePos::new(5, 5));
}

#[test]
fn deltas_compose_like_positions() {
    let steps = [
        SourcePosDelta::ONE_COL,
        SourcePosDelta::ONE_COL,
        SourcePosDelta::NEWLINE,
        SourcePosDelta::ONE_COL,
    ];

    let folded = steps.iter().fold(SourcePosDelta::ZERO, |acc, d| acc + *d);
    let walked = steps.iter().fold(SourcePos::START, |acc, d| acc + *d);

    assert_eq!(folded, SourcePosDelta::new(1, 1));
    assert_eq!(SourcePos::START + folded, walked);
    assert_eq!(walked, SourcePos::new(2, 2));
}
