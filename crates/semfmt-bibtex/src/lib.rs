//! BibTeX result-format printer
//!
//! Turns query result rows into a BibTeX document:
//! - label-driven field extraction with multi-valued author/editor
//!   accumulation and date splitting
//! - citation-key synthesis from author surname, year, and title initials
//! - LaTeX character escaping via static code-point tables
//! - CRLF `@Type{key, ...}` rendering, plus the file/link printer surface

mod builder;
mod entry;
mod formatter;
mod latex;
mod printer;

pub use builder::build_entry;
pub use entry::{BibTexEntry, FieldName};
pub use formatter::{render_document, render_entry};
pub use latex::{escape_latex, transliterate_key};
pub use printer::{BibTexPrinter, DEFAULT_FILE_NAME, MIME_TYPE};
