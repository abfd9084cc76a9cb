use dotname_core::{
    QualifiedName, SplitError, decode_segment, format, parse, try_parse, undouble_quotes,
};

#[test]
fn parses_bare_four_level_name() {
    assert_eq!(
        parse("db.schema.table.column"),
        QualifiedName {
            database: Some("db".to_string()),
            schema: Some("schema".to_string()),
            table: Some("table".to_string()),
            column: Some("column".to_string()),
        },
    );
}

#[test]
fn parses_quoted_two_level_name_and_formats_it_back() {
    let name = parse(r#""db"."schema""#);

    assert_eq!(name, QualifiedName::database("db").with_schema("schema"));
    assert_eq!(name.table, None);
    assert_eq!(name.column, None);
    assert_eq!(format(&name, true), r#""db"."schema""#);
}

#[test]
fn decodes_doubled_quote_in_single_segment() {
    let name = parse(r#""a""b""#);

    assert_eq!(name, QualifiedName::database("a\"b"));
    assert_eq!(format(&name, true), r#""a""b""#);
}

#[test]
fn quoted_segment_keeps_dots_and_spaces() {
    let name = parse(r#"WH."my schema"."t.1""#);

    assert_eq!(name.database.as_deref(), Some("WH"));
    assert_eq!(name.schema.as_deref(), Some("my schema"));
    assert_eq!(name.table.as_deref(), Some("t.1"));
    assert_eq!(name.column, None);
}

#[test]
fn quoted_empty_segment_is_present_but_empty() {
    let name = parse(r#""".x"#);

    assert_eq!(name.database.as_deref(), Some(""));
    assert_eq!(name.schema.as_deref(), Some("x"));
}

#[test]
fn malformed_input_degrades_to_empty_name() {
    assert_eq!(parse(r#"A.B."LAST"aaa"#), QualifiedName::default());
    assert_eq!(parse("A.B.C.D.E.F."), QualifiedName::default());
    assert_eq!(parse(r#"A."unterminated"#), QualifiedName::default());
    assert!(parse(r#"A."B"x.C"#).is_empty());
}

#[test]
fn empty_input_is_empty_name() {
    assert!(parse("").is_empty());
    assert_eq!(try_parse(""), Ok(QualifiedName::default()));
}

#[test]
fn extra_segments_beyond_column_are_ignored() {
    let name = parse("a.b.c.d.e.f");

    assert_eq!(
        name,
        QualifiedName::database("a")
            .with_schema("b")
            .with_table("c")
            .with_column("d"),
    );
}

#[test]
fn parsed_names_are_prefix_closed() {
    for input in ["a", "a.b", r#"a."b".c"#, "a.b.c.d", "a.b.c.d.e", "", "x."] {
        let name = parse(input);
        let levels = [&name.database, &name.schema, &name.table, &name.column];
        let first_absent = levels
            .iter()
            .position(|level| level.is_none())
            .unwrap_or(levels.len());
        assert!(
            levels[first_absent..].iter().all(|level| level.is_none()),
            "`{input}` produced a gap: {name:?}",
        );
    }
}

#[test]
fn strict_parse_propagates_split_errors() {
    let error = try_parse(r#"A.B."LAST"aaa"#).expect_err("strict parse must fail");
    assert!(matches!(error, SplitError::MalformedSeparator { .. }));

    let name = try_parse(r#"DB."Sch""ema""#).expect("strict parse should succeed");
    assert_eq!(name, QualifiedName::database("DB").with_schema("Sch\"ema"));
}

#[test]
fn from_str_is_strict() {
    let name: QualifiedName = "db.s.t".parse().expect("valid name should parse");
    assert_eq!(name.depth(), 3);

    let error = "db.".parse::<QualifiedName>().expect_err("trailing dot must fail");
    assert!(matches!(error, SplitError::MalformedSeparator { .. }));
}

#[test]
fn decode_segment_strips_circumfix_quotes_only_when_both_present() {
    assert_eq!(decode_segment(r#""abc""#), "abc");
    assert_eq!(decode_segment(r#""abc"#), "\"abc");
    assert_eq!(decode_segment(r#"abc""#), "abc\"");
    assert_eq!(decode_segment("\""), "\"");
    assert_eq!(decode_segment(r#""""#), "");
}

#[test]
fn undouble_collapses_each_pair_once() {
    assert_eq!(undouble_quotes(r#"a""b"#), "a\"b");
    assert_eq!(undouble_quotes(r#""""""#), "\"\"");
    assert_eq!(undouble_quotes("\"\"\""), "\"\"");
    assert_eq!(undouble_quotes("plain"), "plain");
}
