//! Result rows and their labeled fields

use crate::link::QueryLink;
use crate::value::DataValue;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A labeled field of a result row.
///
/// Values are consumed through a one-shot cursor: `next_value` yields them in
/// order and the sequence is not restartable, mirroring the host's lazy
/// per-field iteration. Printers that only need the first value leave the
/// rest undrained.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResultField {
    label: String,
    values: VecDeque<DataValue>,
}

impl ResultField {
    pub fn new(label: impl Into<String>, values: Vec<DataValue>) -> Self {
        Self {
            label: label.into(),
            values: values.into(),
        }
    }

    /// Convenience constructor for a single-valued text field.
    pub fn text(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(label, vec![DataValue::Text(value.into())])
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Advance the value cursor. Returns `None` once exhausted.
    pub fn next_value(&mut self) -> Option<DataValue> {
        self.values.pop_front()
    }
}

/// One record of a query result: an ordered sequence of labeled fields.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ResultRow {
    pub fields: Vec<ResultField>,
}

impl ResultRow {
    pub fn new(fields: Vec<ResultField>) -> Self {
        Self { fields }
    }
}

/// A complete query result as handed to a printer: ordered rows plus the
/// link that re-invokes the query (used by link-mode output).
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct QueryResult {
    pub rows: Vec<ResultRow>,
    pub query_link: QueryLink,
}

impl QueryResult {
    pub fn new(rows: Vec<ResultRow>, query_link: QueryLink) -> Self {
        Self { rows, query_link }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_cursor_is_one_shot() {
        let mut field = ResultField::new(
            "author",
            vec![DataValue::from("Abramowitz"), DataValue::from("Stegun")],
        );
        assert_eq!(field.next_value().unwrap().short_text(), "Abramowitz");
        assert_eq!(field.next_value().unwrap().short_text(), "Stegun");
        assert!(field.next_value().is_none());
        assert!(field.next_value().is_none());
    }

    #[test]
    fn test_empty_field_yields_nothing() {
        let mut field = ResultField::new("title", vec![]);
        assert!(field.next_value().is_none());
    }
}
