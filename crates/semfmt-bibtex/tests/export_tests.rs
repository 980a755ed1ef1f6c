//! End-to-end export tests: result rows in, BibTeX document out.

use semfmt_bibtex::{build_entry, BibTexPrinter, FieldName};
use semfmt_domain::{
    DataValue, OutputMode, QueryLink, QueryResult, ResultField, ResultRow, TimeValue,
};

fn printer() -> BibTexPrinter {
    BibTexPrinter::new(None, "BibTeX export", "Example Wiki")
}

fn query_result(rows: Vec<ResultRow>) -> QueryResult {
    QueryResult::new(rows, QueryLink::new("https://wiki.example.org/Special:Ask", ""))
}

fn abramowitz_row() -> ResultRow {
    ResultRow::new(vec![
        ResultField::new(
            "authors",
            vec![
                DataValue::from("Milton Abramowitz"),
                DataValue::from("Irene A. Stegun"),
            ],
        ),
        ResultField::text("title", "Handbook of Mathematical Functions"),
        ResultField::text("publisher", "Dover"),
        ResultField::text("year", "1964"),
        ResultField::text("address", "New York"),
    ])
}

// === File mode ===

#[test]
fn test_single_book_export() {
    let text = printer().result_text(query_result(vec![abramowitz_row()]), OutputMode::File);
    assert_eq!(
        text,
        "@Book{abramowitz1964homf,\r\n\
         \x20 address = \"New York\", \r\n\
         \x20 author = \"Milton Abramowitz and Irene A. Stegun\", \r\n\
         \x20 publisher = \"Dover\", \r\n\
         \x20 title = \"Handbook of Mathematical Functions\", \r\n\
         \x20 year = \"1964\", \r\n\
         }\r\n\r\n"
    );
}

#[test]
fn test_two_rows_render_in_row_order() {
    let row2 = ResultRow::new(vec![
        ResultField::text("author", "Donald E. Knuth"),
        ResultField::text("year", "1973"),
    ]);
    let text = printer().result_text(query_result(vec![abramowitz_row(), row2]), OutputMode::File);

    let first = text.find("@Book{abramowitz1964homf,").unwrap();
    let second = text.find("@Book{knuth1973,").unwrap();
    assert!(first < second);
    assert_eq!(text.matches("}\r\n\r\n").count(), 2);
}

#[test]
fn test_empty_result_set_yields_empty_document() {
    assert_eq!(printer().result_text(query_result(vec![]), OutputMode::File), "");
}

#[test]
fn test_row_with_no_recognized_fields_still_produces_an_entry() {
    let rows = vec![ResultRow::new(vec![ResultField::text("shoe size", "42")])];
    let text = printer().result_text(query_result(rows), OutputMode::File);
    assert_eq!(text, "@Book{,\r\n}\r\n\r\n");
}

#[test]
fn test_umlaut_author_is_transliterated_in_key_and_escaped_in_field() {
    let rows = vec![ResultRow::new(vec![
        ResultField::text("author", "Hans Müller"),
        ResultField::text("year", "1964"),
        ResultField::text("title", "Handbook of Functions"),
    ])];
    let text = printer().result_text(query_result(rows), OutputMode::File);
    assert!(text.starts_with("@Book{mueller1964hof,\r\n"));
    assert!(text.contains("author = \"Hans M{\\\"u}ller\", \r\n"));
}

#[test]
fn test_date_field_populates_year_and_month() {
    let rows = vec![ResultRow::new(vec![
        ResultField::text("title", "Annual Report"),
        ResultField::new("date", vec![DataValue::Time(TimeValue::new(2021, Some(5)))]),
    ])];
    let text = printer().result_text(query_result(rows), OutputMode::File);
    assert!(text.contains("month = \"5\", \r\n"));
    assert!(text.contains("year = \"2021\", \r\n"));
}

#[test]
fn test_fields_are_canonically_ordered_regardless_of_row_order() {
    let entry = build_entry(ResultRow::new(vec![
        ResultField::text("year", "2000"),
        ResultField::text("journal", "Annalen der Physik"),
        ResultField::text("author", "A. Einstein"),
        ResultField::text("type", "article"),
    ]));
    let names: Vec<&str> = entry.fields.iter().map(|(n, _)| n.as_str()).collect();
    assert_eq!(names, vec!["author", "journal", "year"]);
    assert_eq!(entry.category, "Article");
}

#[test]
fn test_no_field_is_ever_empty() {
    let entry = build_entry(ResultRow::new(vec![
        ResultField::text("note", ""),
        ResultField::new("pages", vec![]),
        ResultField::text("title", "T"),
    ]));
    assert!(entry.fields.iter().all(|(_, v)| !v.is_empty()));
    assert_eq!(entry.get_field(FieldName::Note), None);
    assert_eq!(entry.get_field(FieldName::Pages), None);
}

// === Link mode ===

#[test]
fn test_wiki_link_mode() {
    let text = BibTexPrinter::new(Some("My Books".to_string()), "BibTeX export", "Example Wiki")
        .result_text(query_result(vec![abramowitz_row()]), OutputMode::Wiki);
    assert_eq!(
        text,
        "[https://wiki.example.org/Special:Ask?format=bibtex&searchlabel=My%20Books My Books]"
    );
}

#[test]
fn test_html_link_mode_uses_anchor_markup() {
    let text = printer().result_text(query_result(vec![]), OutputMode::Html);
    assert!(text.starts_with("<a href=\""));
    assert!(text.contains("format=bibtex"));
    assert!(text.ends_with(">BibTeX export</a>"));
}
