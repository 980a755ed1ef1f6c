//! Building BibTeX entries from result rows
//!
//! Field labels are matched case-insensitively against a fixed dispatch
//! table. Most labels take the first value of their field only; author and
//! editor labels drain all values and join them with `" and "`; a `date`
//! label splits a date/time value into the year and month destinations.
//! Unrecognized labels are ignored. Building never fails.

use crate::entry::{normalize_category, BibTexEntry, FieldName};
use crate::latex::{escape_latex, transliterate_key};
use lazy_static::lazy_static;
use regex::Regex;
use semfmt_domain::{ResultField, ResultRow};
use std::collections::HashMap;

lazy_static! {
    /// First alphabetic character of a title word.
    static ref TITLE_LETTER: Regex = Regex::new("[A-Za-z]").expect("valid regex");
}

/// How a recognized label feeds its destination.
enum LabelAction {
    /// Sets the entry category instead of a field.
    Category,
    /// First value only; a repeated label overwrites.
    Single(FieldName),
    /// Drain every value and join with `" and "`.
    Joined(FieldName),
    /// Split a date/time value into year and month.
    DateSplit,
}

fn recognize_label(label: &str) -> Option<LabelAction> {
    let action = match label {
        "type" => LabelAction::Category,
        "address" => LabelAction::Single(FieldName::Address),
        "annote" => LabelAction::Single(FieldName::Annote),
        "booktitle" => LabelAction::Single(FieldName::Booktitle),
        "chapter" => LabelAction::Single(FieldName::Chapter),
        "crossref" => LabelAction::Single(FieldName::Crossref),
        "doi" => LabelAction::Single(FieldName::Doi),
        "edition" => LabelAction::Single(FieldName::Edition),
        "eprint" => LabelAction::Single(FieldName::Eprint),
        "howpublished" => LabelAction::Single(FieldName::Howpublished),
        "institution" => LabelAction::Single(FieldName::Institution),
        "isbn" => LabelAction::Single(FieldName::Isbn),
        "issn" => LabelAction::Single(FieldName::Issn),
        "journal" => LabelAction::Single(FieldName::Journal),
        "key" => LabelAction::Single(FieldName::Key),
        "month" => LabelAction::Single(FieldName::Month),
        "note" => LabelAction::Single(FieldName::Note),
        "number" => LabelAction::Single(FieldName::Number),
        "organization" => LabelAction::Single(FieldName::Organization),
        "pages" => LabelAction::Single(FieldName::Pages),
        "publisher" => LabelAction::Single(FieldName::Publisher),
        "school" => LabelAction::Single(FieldName::School),
        "series" => LabelAction::Single(FieldName::Series),
        "title" => LabelAction::Single(FieldName::Title),
        "url" => LabelAction::Single(FieldName::Url),
        "year" => LabelAction::Single(FieldName::Year),
        "volume" | "journal_volume" => LabelAction::Single(FieldName::Volume),
        "author" | "authors" => LabelAction::Joined(FieldName::Author),
        "editor" | "editors" => LabelAction::Joined(FieldName::Editor),
        "date" => LabelAction::DateSplit,
        _ => return None,
    };
    Some(action)
}

/// Build the entry for one result row.
///
/// The row is consumed: field value cursors are drained as far as their
/// label's action requires and no further.
pub fn build_entry(mut row: ResultRow) -> BibTexEntry {
    let mut category = String::new();
    let mut destinations: HashMap<FieldName, String> = HashMap::new();

    for field in &mut row.fields {
        let label = field.label().to_lowercase();
        match recognize_label(&label) {
            Some(LabelAction::Category) => {
                if let Some(value) = field.next_value() {
                    category = value.to_short_text();
                }
            }
            Some(LabelAction::Single(name)) => {
                if let Some(value) = field.next_value() {
                    destinations.insert(name, value.to_short_text());
                }
            }
            Some(LabelAction::Joined(name)) => {
                destinations.insert(name, join_values(field));
            }
            Some(LabelAction::DateSplit) => {
                if let Some(time) = field.next_value().and_then(|v| v.as_time().cloned()) {
                    destinations.insert(FieldName::Year, time.year.to_string());
                    match time.month {
                        Some(month) => {
                            destinations.insert(FieldName::Month, month.to_string());
                        }
                        None => {
                            destinations.remove(&FieldName::Month);
                        }
                    }
                }
            }
            None => {}
        }
    }

    let cite_key = synthesize_cite_key(
        destinations.get(&FieldName::Author).map(String::as_str),
        destinations.get(&FieldName::Year).map(String::as_str),
        destinations.get(&FieldName::Title).map(String::as_str),
    );

    let fields = FieldName::CANONICAL_ORDER
        .iter()
        .filter_map(|name| {
            destinations
                .get(name)
                .filter(|value| !value.is_empty())
                .map(|value| (*name, escape_latex(value)))
        })
        .collect();

    BibTexEntry {
        category: normalize_category(&category),
        cite_key,
        fields,
    }
}

fn join_values(field: &mut ResultField) -> String {
    let mut texts = Vec::new();
    while let Some(value) = field.next_value() {
        texts.push(value.to_short_text());
    }
    texts.join(" and ")
}

/// Synthesize the citation key: first author's surname (transliterated and
/// stripped to ASCII letters), the year verbatim, and the first alphabetic
/// character of each title word, all lowercased.
fn synthesize_cite_key(author: Option<&str>, year: Option<&str>, title: Option<&str>) -> String {
    let mut key = String::new();

    if let Some(author) = author.filter(|s| !s.is_empty()) {
        let first_author = author.split(" and ").next().unwrap_or(author);
        if let Some(surname) = first_author.split(' ').next_back() {
            key.push_str(&transliterate_key(surname));
        }
    }

    if let Some(year) = year.filter(|s| !s.is_empty()) {
        key.push_str(year);
    }

    if let Some(title) = title.filter(|s| !s.is_empty()) {
        for word in title.split(' ') {
            if let Some(m) = TITLE_LETTER.find(word) {
                key.push_str(m.as_str());
            }
        }
    }

    key.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use semfmt_domain::{DataValue, TimeValue};

    fn row(fields: Vec<ResultField>) -> ResultRow {
        ResultRow::new(fields)
    }

    #[test]
    fn test_cite_key_author_year_title() {
        let key = synthesize_cite_key(
            Some("Hans Müller and Eva Beck"),
            Some("1964"),
            Some("Handbook of Functions"),
        );
        assert_eq!(key, "mueller1964hof");
    }

    #[test]
    fn test_cite_key_title_words_without_letters_contribute_nothing() {
        let key = synthesize_cite_key(None, None, Some("1984 --- a (re)reading"));
        assert_eq!(key, "ar");
    }

    #[test]
    fn test_cite_key_empty_inputs_yield_empty_key() {
        assert_eq!(synthesize_cite_key(None, None, None), "");
        assert_eq!(synthesize_cite_key(Some(""), Some(""), Some("")), "");
    }

    #[test]
    fn test_cite_key_contains_only_lowercase_ascii() {
        let key = synthesize_cite_key(Some("Sørensen Ñandú"), Some("2001"), Some("Über Äpfel"));
        assert!(key.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[test]
    fn test_singular_field_takes_first_value_only() {
        let entry = build_entry(row(vec![ResultField::new(
            "publisher",
            vec![DataValue::from("Dover"), DataValue::from("Springer")],
        )]));
        assert_eq!(entry.get_field(FieldName::Publisher), Some("Dover"));
    }

    #[test]
    fn test_author_field_joins_all_values() {
        let entry = build_entry(row(vec![ResultField::new(
            "authors",
            vec![
                DataValue::from("Milton Abramowitz"),
                DataValue::from("Irene A. Stegun"),
            ],
        )]));
        assert_eq!(
            entry.get_field(FieldName::Author),
            Some("Milton Abramowitz and Irene A. Stegun")
        );
        assert_eq!(entry.cite_key, "abramowitz");
    }

    #[test]
    fn test_editor_aliases_share_a_destination() {
        let entry = build_entry(row(vec![ResultField::text("editors", "Jane Roe")]));
        assert_eq!(entry.get_field(FieldName::Editor), Some("Jane Roe"));
    }

    #[test]
    fn test_journal_volume_feeds_volume() {
        let entry = build_entry(row(vec![ResultField::text("journal_volume", "55")]));
        assert_eq!(entry.get_field(FieldName::Volume), Some("55"));
    }

    #[test]
    fn test_date_splits_into_year_and_month() {
        let entry = build_entry(row(vec![ResultField::new(
            "date",
            vec![DataValue::Time(TimeValue::new(2021, Some(5)))],
        )]));
        assert_eq!(entry.get_field(FieldName::Year), Some("2021"));
        assert_eq!(entry.get_field(FieldName::Month), Some("5"));
    }

    #[test]
    fn test_date_overrides_explicit_year_and_month() {
        let entry = build_entry(row(vec![
            ResultField::text("year", "1999"),
            ResultField::text("month", "12"),
            ResultField::new("date", vec![DataValue::Time(TimeValue::new(2021, None))]),
        ]));
        assert_eq!(entry.get_field(FieldName::Year), Some("2021"));
        assert_eq!(entry.get_field(FieldName::Month), None);
    }

    #[test]
    fn test_non_time_date_value_is_ignored() {
        let entry = build_entry(row(vec![ResultField::text("date", "sometime in May")]));
        assert_eq!(entry.get_field(FieldName::Year), None);
        assert_eq!(entry.get_field(FieldName::Month), None);
    }

    #[test]
    fn test_repeated_singular_label_overwrites() {
        let entry = build_entry(row(vec![
            ResultField::text("title", "First Title"),
            ResultField::text("title", "Second Title"),
        ]));
        assert_eq!(entry.get_field(FieldName::Title), Some("Second Title"));
    }

    #[test]
    fn test_unrecognized_labels_are_ignored() {
        let entry = build_entry(row(vec![
            ResultField::text("color", "red"),
            ResultField::text("title", "A Title"),
        ]));
        assert_eq!(entry.fields.len(), 1);
    }

    #[test]
    fn test_missing_type_defaults_to_book() {
        let entry = build_entry(row(vec![ResultField::text("title", "A Title")]));
        assert_eq!(entry.category, "Book");
    }

    #[test]
    fn test_type_is_capitalized() {
        let entry = build_entry(row(vec![ResultField::text("type", "article")]));
        assert_eq!(entry.category, "Article");
    }

    #[test]
    fn test_field_values_are_escaped() {
        let entry = build_entry(row(vec![ResultField::text("title", "Caffè & Co")]));
        assert_eq!(entry.get_field(FieldName::Title), Some("Caff{\\`e} {\\&} Co"));
    }

    #[test]
    fn test_empty_values_are_omitted() {
        let entry = build_entry(row(vec![ResultField::text("note", "")]));
        assert!(entry.fields.is_empty());
    }

    #[test]
    fn test_fields_follow_canonical_order() {
        let entry = build_entry(row(vec![
            ResultField::text("year", "1964"),
            ResultField::text("title", "Handbook"),
            ResultField::text("address", "New York"),
        ]));
        let names: Vec<&str> = entry.fields.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["address", "title", "year"]);
    }
}
