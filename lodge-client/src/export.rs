//! Record export helpers
//!
//! CSV generation for homogeneous record lists plus the single-page
//! PDF placeholder the dashboard offers until a real document engine
//! is wired in.

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

/// Export failure
///
/// Export never touches the network, so it carries its own error type
/// instead of the API error.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Record could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// File I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Output bytes were not valid UTF-8
    #[error("Export is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Records must serialize to JSON objects
    #[error("Record does not serialize to an object")]
    UnsupportedRecord,
}

fn field_to_string(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Generate CSV text from records, restricted to an explicit field
/// allow-list (wire field names, in output order).
///
/// Fields containing a comma, quote or newline are quoted, with
/// internal quotes doubled.
pub fn to_csv<T: Serialize>(
    records: &[T],
    fields: &[&str],
    include_headers: bool,
) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new().from_writer(Vec::new());

    if include_headers {
        writer.write_record(fields)?;
    }

    for record in records {
        let value = serde_json::to_value(record)?;
        let object = value.as_object().ok_or(ExportError::UnsupportedRecord)?;
        let row: Vec<String> = fields
            .iter()
            .map(|field| field_to_string(object.get(*field)))
            .collect();
        writer.write_record(&row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| ExportError::Io(err.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Generate a minimal single-page PDF with the given title.
///
/// Placeholder until a real document engine replaces it; the output is
/// a syntactically plausible PDF, not a typeset report.
pub fn pdf_placeholder(title: &str) -> String {
    format!(
        "%PDF-1.4\n\
         1 0 obj\n<</Type /Catalog /Pages 2 0 R>>\nendobj\n\
         2 0 obj\n<</Type /Pages /Kids [3 0 R] /Count 1>>\nendobj\n\
         3 0 obj\n<</Type /Page /Parent 2 0 R /Resources 4 0 R /MediaBox [0 0 612 792] /Contents 6 0 R>>\nendobj\n\
         4 0 obj\n<</Font <</F1 5 0 R>>>>\nendobj\n\
         5 0 obj\n<</Type /Font /Subtype /Type1 /BaseFont /Helvetica>>\nendobj\n\
         6 0 obj\n<</Length 44>>\nstream\nBT /F1 24 Tf 100 700 Td ({title}) Tj ET\nendstream\nendobj\n\
         trailer\n<</Size 7 /Root 1 0 R>>\n%%EOF"
    )
}

/// Write exported content to disk (the save-as step)
pub fn save_to_file(path: impl AsRef<Path>, content: &str) -> Result<(), ExportError> {
    std::fs::write(path, content)?;
    Ok(())
}
