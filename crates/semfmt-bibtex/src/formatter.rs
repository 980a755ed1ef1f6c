//! Rendering entries to BibTeX text
//!
//! Output uses CRLF line endings and double-quoted values, matching the
//! wire format the export download has always used.

use crate::entry::BibTexEntry;

/// Render a single entry:
///
/// ```text
/// @Book{abramowitz1964homf,
///   author = "Milton Abramowitz and Irene A. Stegun",
///   title = "Handbook of Mathematical Functions",
/// }
/// ```
///
/// Each field line ends with `", "` (comma plus a trailing space) before
/// its CRLF.
pub fn render_entry(entry: &BibTexEntry) -> String {
    let mut text = String::new();

    text.push('@');
    text.push_str(&entry.category);
    text.push('{');
    text.push_str(&entry.cite_key);
    text.push_str(",\r\n");

    for (name, value) in &entry.fields {
        text.push_str("  ");
        text.push_str(name.as_str());
        text.push_str(" = \"");
        text.push_str(value);
        text.push_str("\", \r\n");
    }

    text.push_str("}\r\n\r\n");
    text
}

/// Render all entries in input order. Each entry carries its own trailing
/// blank line, so no separator is added; zero entries yield the empty string.
pub fn render_document(entries: &[BibTexEntry]) -> String {
    entries.iter().map(render_entry).collect()
}
