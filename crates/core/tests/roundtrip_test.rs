use dotname_core::{QualifiedName, double_quotes, format, parse, undouble_quotes};

const SAMPLE_SEGMENTS: &[&str] = &[
    "db",
    "a\"b",
    "\"",
    "\"\"",
    "x.y",
    "\".\"",
    "with space",
    "données",
    "\"leading",
    "trailing\"",
    "a\"\".b",
    "{}",
];

fn names_of_every_depth() -> Vec<QualifiedName> {
    let mut names = Vec::new();
    for depth in 1..=4 {
        for start in 0..SAMPLE_SEGMENTS.len() {
            let segments = (0..depth).map(|offset| {
                SAMPLE_SEGMENTS[(start + offset * 5) % SAMPLE_SEGMENTS.len()]
            });
            names.push(QualifiedName::from_segments(segments));
        }
    }
    names
}

#[test]
fn quoted_format_round_trips_through_parse() {
    for name in names_of_every_depth() {
        let rendered = format(&name, true);
        assert_eq!(parse(&rendered), name, "round trip failed for `{rendered}`");
    }
}

#[test]
fn display_round_trips_through_from_str() {
    for name in names_of_every_depth() {
        let reparsed: QualifiedName = name
            .to_string()
            .parse()
            .unwrap_or_else(|error| panic!("`{name}` should reparse: {error}"));
        assert_eq!(reparsed, name);
    }
}

#[test]
fn unquoted_format_round_trips_simple_names() {
    let name = QualifiedName::database("DB")
        .with_schema("PUBLIC")
        .with_table("ORDERS")
        .with_column("ID");

    assert_eq!(parse(&format(&name, false)), name);
}

#[test]
fn doubling_then_undoubling_is_identity() {
    for value in SAMPLE_SEGMENTS.iter().chain(&["", "\"\"\"", "no quotes"]) {
        assert_eq!(undouble_quotes(&double_quotes(value)), *value);
    }
}
