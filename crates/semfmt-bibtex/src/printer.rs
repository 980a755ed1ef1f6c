//! The BibTeX printer surface
//!
//! Ties the pipeline together the way the host invokes it: file mode builds
//! one entry per result row and renders the document; wiki/HTML mode renders
//! only a link that re-invokes the query with `format=bibtex`.

use crate::builder::build_entry;
use crate::entry::BibTexEntry;
use crate::formatter::render_document;
use semfmt_domain::{OutputMode, QueryResult};

pub const MIME_TYPE: &str = "text/bibtex";
pub const DEFAULT_FILE_NAME: &str = "BibTeX.bib";

/// Per-request printer state supplied by the host.
#[derive(Clone, Debug)]
pub struct BibTexPrinter {
    search_label: Option<String>,
    link_caption: String,
    site_name: String,
}

impl BibTexPrinter {
    /// `link_caption` is the host-localized caption used for link-mode output
    /// when no search label is set; `site_name` is the fallback document
    /// title.
    pub fn new(
        search_label: Option<String>,
        link_caption: impl Into<String>,
        site_name: impl Into<String>,
    ) -> Self {
        Self {
            search_label: search_label.filter(|s| !s.is_empty()),
            link_caption: link_caption.into(),
            site_name: site_name.into(),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        MIME_TYPE
    }

    /// Download filename: the search label with spaces replaced by
    /// underscores, or a fixed default.
    pub fn file_name(&self) -> String {
        match &self.search_label {
            Some(label) => format!("{}.bib", label.replace(' ', "_")),
            None => DEFAULT_FILE_NAME.to_string(),
        }
    }

    /// Document title: the search label, falling back to the site name.
    pub fn document_title(&self) -> &str {
        self.search_label.as_deref().unwrap_or(&self.site_name)
    }

    /// Build one entry per result row, preserving row order.
    pub fn build_entries(&self, result: QueryResult) -> Vec<BibTexEntry> {
        result.rows.into_iter().map(build_entry).collect()
    }

    /// Produce the printer's result text for the requested output mode.
    ///
    /// File mode returns the `.bib` document; wiki and HTML modes return a
    /// link re-invoking the query with the format fixed to BibTeX, without
    /// consuming any rows.
    pub fn result_text(&self, result: QueryResult, mode: OutputMode) -> String {
        match mode {
            OutputMode::File => render_document(&self.build_entries(result)),
            OutputMode::Wiki | OutputMode::Html => {
                let mut link = result.query_link;
                if let Some(label) = &self.search_label {
                    link.set_caption(label.clone());
                } else {
                    link.set_caption(self.link_caption.clone());
                }
                link.set_parameter("bibtex", "format");
                if let Some(label) = &self.search_label {
                    link.set_parameter(label.clone(), "searchlabel");
                }
                link.render(mode)
            }
        }
    }
}
