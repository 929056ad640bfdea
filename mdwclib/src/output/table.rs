//! Table-ready data for the word count report.
//!
//! `WordTable` sits between the aggregation and the markdown document: it
//! holds display strings only and can be serialized to JSON as is.

use serde::{Deserialize, Serialize};

use crate::data::aggregate::AggregationResult;

/// Alignment row under the table header.
const ALIGNMENT_ROW: &str = "| :---------------- | :------ |";

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Row label (display path, or "Total")
    pub label: String,
    /// Link target for the label, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Word count as a string
    pub value: String,
}

/// Table-ready word count data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordTable {
    /// Column headers: [label_header, value_header]
    pub headers: Vec<String>,
    /// Data rows, in aggregation order
    pub rows: Vec<TableRow>,
    /// Total row
    pub footer: TableRow,
}

impl WordTable {
    /// Build a table from an aggregation.
    ///
    /// Each row is labelled with `label_prefix` joined to the entry key by a
    /// single `/` and links to the key itself.
    pub fn from_aggregation(result: &AggregationResult, label_prefix: &str) -> Self {
        let rows = result
            .iter()
            .map(|entry| TableRow {
                label: display_label(label_prefix, &entry.key),
                link: Some(entry.key.clone()),
                value: entry.word_count.to_string(),
            })
            .collect();

        WordTable {
            headers: vec!["File".to_string(), "Word count".to_string()],
            rows,
            footer: TableRow {
                label: "Total".to_string(),
                link: None,
                value: result.total.to_string(),
            },
        }
    }

    /// Render the table as markdown lines, each terminated by `\n`.
    pub fn to_markdown(&self) -> String {
        let label_header = self.headers.first().map_or("File", String::as_str);
        let value_header = self.headers.get(1).map_or("Word count", String::as_str);
        let mut out = format!("| {:<17} | {} |\n", label_header, value_header);
        out.push_str(ALIGNMENT_ROW);
        out.push('\n');

        for row in &self.rows {
            let label = match &row.link {
                Some(link) => format!("[{}]({})", row.label, link),
                None => row.label.clone(),
            };
            out.push_str(&format!("|{}| {} |\n", label, row.value));
        }

        out.push_str(&format!(
            "| **{}** | **{}** |\n",
            self.footer.label, self.footer.value
        ));
        out
    }
}

fn display_label(prefix: &str, key: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    let key = key.trim_start_matches('/');
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", prefix, key)
    }
}
