//! Delimited-text export of table rows
//!
//! By default values are joined as-is. A value that contains the delimiter,
//! a quote or a line break produces a malformed row unless
//! [`Escaping::Quoted`] is selected.

use crate::config::ExportConfig;
use crate::core::{ExportError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Line separator between exported rows
pub const LINE_SEPARATOR: &str = "\n";

/// How field values are written
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Escaping {
    /// Values joined unquoted
    #[default]
    None,
    /// RFC 4180 quoting for values that need it
    Quoted,
}

impl Escaping {
    fn apply(&self, value: &str, delimiter: &str) -> String {
        match self {
            Escaping::None => value.to_string(),
            Escaping::Quoted => {
                let needs_quotes = value.contains(delimiter)
                    || value.contains('"')
                    || value.contains('\n')
                    || value.contains('\r');
                if needs_quotes {
                    format!("\"{}\"", value.replace('"', "\"\""))
                } else {
                    value.to_string()
                }
            }
        }
    }
}

/// Encode a header line followed by one line per row
///
/// There is no trailing line separator.
pub fn encode<I, S>(headers: &[S], rows: I, delimiter: &str, escaping: Escaping) -> String
where
    I: IntoIterator<Item = Vec<String>>,
    S: AsRef<str>,
{
    let mut lines = vec![encode_line(
        headers.iter().map(|h| h.as_ref()),
        delimiter,
        escaping,
    )];
    lines.extend(
        rows.into_iter()
            .map(|row| encode_line(row.iter().map(String::as_str), delimiter, escaping)),
    );
    lines.join(LINE_SEPARATOR)
}

fn encode_line<'a>(
    fields: impl Iterator<Item = &'a str>,
    delimiter: &str,
    escaping: Escaping,
) -> String {
    fields
        .map(|f| escaping.apply(f, delimiter))
        .collect::<Vec<_>>()
        .join(delimiter)
}

/// An export ready to be handed to the user as a download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: String,
    pub body: String,
    /// Data rows encoded into `body`, header excluded
    pub rows: usize,
}

impl ExportFile {
    pub fn new(config: &ExportConfig, body: String, rows: usize) -> Self {
        Self {
            file_name: config.file_name.clone(),
            content_type: config.content_type.clone(),
            body,
            rows,
        }
    }

    /// Number of data rows (header excluded)
    ///
    /// Counted when the rows were encoded; quoted values may span lines.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Write the export into `dir`, returning the written path
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf> {
        let path = dir.join(&self.file_name);
        std::fs::write(&path, &self.body).map_err(|e| ExportError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        tracing::info!(path = %path.display(), bytes = self.body.len(), "export written");
        Ok(path)
    }
}
