//! BibTeX entry data structures

use serde::{Deserialize, Serialize};

/// A recognized BibTeX field name.
///
/// `CANONICAL_ORDER` fixes the order in which fields appear in rendered
/// entries, independent of the order the host delivered them in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldName {
    Address,
    Annote,
    Author,
    Booktitle,
    Chapter,
    Crossref,
    Doi,
    Edition,
    Editor,
    Eprint,
    Howpublished,
    Institution,
    Isbn,
    Issn,
    Journal,
    Key,
    Month,
    Note,
    Number,
    Organization,
    Pages,
    Publisher,
    School,
    Series,
    Title,
    Url,
    Volume,
    Year,
}

impl FieldName {
    pub const CANONICAL_ORDER: [FieldName; 28] = [
        FieldName::Address,
        FieldName::Annote,
        FieldName::Author,
        FieldName::Booktitle,
        FieldName::Chapter,
        FieldName::Crossref,
        FieldName::Doi,
        FieldName::Edition,
        FieldName::Editor,
        FieldName::Eprint,
        FieldName::Howpublished,
        FieldName::Institution,
        FieldName::Isbn,
        FieldName::Issn,
        FieldName::Journal,
        FieldName::Key,
        FieldName::Month,
        FieldName::Note,
        FieldName::Number,
        FieldName::Organization,
        FieldName::Pages,
        FieldName::Publisher,
        FieldName::School,
        FieldName::Series,
        FieldName::Title,
        FieldName::Url,
        FieldName::Volume,
        FieldName::Year,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::Annote => "annote",
            Self::Author => "author",
            Self::Booktitle => "booktitle",
            Self::Chapter => "chapter",
            Self::Crossref => "crossref",
            Self::Doi => "doi",
            Self::Edition => "edition",
            Self::Editor => "editor",
            Self::Eprint => "eprint",
            Self::Howpublished => "howpublished",
            Self::Institution => "institution",
            Self::Isbn => "isbn",
            Self::Issn => "issn",
            Self::Journal => "journal",
            Self::Key => "key",
            Self::Month => "month",
            Self::Note => "note",
            Self::Number => "number",
            Self::Organization => "organization",
            Self::Pages => "pages",
            Self::Publisher => "publisher",
            Self::School => "school",
            Self::Series => "series",
            Self::Title => "title",
            Self::Url => "url",
            Self::Volume => "volume",
            Self::Year => "year",
        }
    }
}

/// One bibliographic record, ready for rendering.
///
/// Field values are already LaTeX-escaped and appear in canonical order;
/// empty values are never stored. The cite key holds only lowercase ASCII
/// letters and digits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTexEntry {
    pub category: String,
    pub cite_key: String,
    pub fields: Vec<(FieldName, String)>,
}

impl BibTexEntry {
    /// Get an escaped field value by name.
    pub fn get_field(&self, name: FieldName) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }
}

/// Normalize a category string: empty falls back to "Book", otherwise the
/// first letter is uppercased.
pub(crate) fn normalize_category(category: &str) -> String {
    if category.is_empty() {
        return "Book".to_string();
    }
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => "Book".to_string(),
    }
}
