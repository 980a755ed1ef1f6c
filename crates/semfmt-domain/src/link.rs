//! Query re-invocation links

use crate::output_mode::OutputMode;
use serde::{Deserialize, Serialize};

/// A link that re-runs the originating query, optionally with extra
/// parameters (e.g. `format=bibtex`). Rendered as wiki external-link markup
/// or as an HTML anchor depending on the requested output mode.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryLink {
    target: String,
    caption: String,
    params: Vec<(String, String)>,
}

impl QueryLink {
    pub fn new(target: impl Into<String>, caption: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            caption: caption.into(),
            params: Vec::new(),
        }
    }

    pub fn set_caption(&mut self, caption: impl Into<String>) {
        self.caption = caption.into();
    }

    /// Append a `key=value` parameter to the re-invocation query string.
    pub fn set_parameter(&mut self, value: impl Into<String>, key: impl Into<String>) {
        self.params.push((key.into(), value.into()));
    }

    fn href(&self) -> String {
        if self.params.is_empty() {
            return self.target.clone();
        }
        let query: Vec<String> = self
            .params
            .iter()
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect();
        let separator = if self.target.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.target, separator, query.join("&"))
    }

    /// Render the link for the given output mode. File mode has no link
    /// representation and yields the bare caption.
    pub fn render(&self, mode: OutputMode) -> String {
        match mode {
            OutputMode::Html => format!(r#"<a href="{}">{}</a>"#, self.href(), self.caption),
            OutputMode::Wiki => format!("[{} {}]", self.href(), self.caption),
            OutputMode::File => self.caption.clone(),
        }
    }
}
