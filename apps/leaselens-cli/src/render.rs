//! Terminal rendering of the analysis view

use std::io::{self, Write};

use leaselens_core::AnalysisView;

const CLAUSE_HEADER: &str = "Clause";
const VALUE_HEADER: &str = "Extracted Value";

/// Results table, error block, or nothing, depending on the view
pub fn render_view<W: Write>(out: &mut W, view: &AnalysisView) -> io::Result<()> {
    if let Some(error) = view.error() {
        writeln!(out, "Error")?;
        writeln!(out, "  {}", error)?;
        return Ok(());
    }

    let Some(result) = view.result().filter(|_| view.has_displayable_result()) else {
        if view.result().is_some() {
            writeln!(out, "The analysis service did not report success")?;
        }
        return Ok(());
    };

    writeln!(out, "Analysis Results")?;
    writeln!(out, "Extracted from: {}", result.filename)?;
    writeln!(out)?;

    let rows = view.rows();
    let label_width = rows
        .iter()
        .map(|row| row.label.len())
        .chain(std::iter::once(CLAUSE_HEADER.len()))
        .max()
        .unwrap_or_default();
    let value_width = rows
        .iter()
        .map(|row| row.value.chars().count())
        .chain(std::iter::once(VALUE_HEADER.len()))
        .max()
        .unwrap_or_default();

    writeln!(out, "{:<label_width$} | {}", CLAUSE_HEADER, VALUE_HEADER)?;
    writeln!(out, "{}-+-{}", "-".repeat(label_width), "-".repeat(value_width))?;
    for row in rows {
        writeln!(out, "{:<label_width$} | {}", row.label, row.value)?;
    }

    Ok(())
}

/// Raw analysis result, or the error as `{"detail": ...}`
pub fn render_json<W: Write>(out: &mut W, view: &AnalysisView) -> io::Result<()> {
    let value = match (view.result(), view.error()) {
        (Some(result), _) => serde_json::to_value(result)?,
        (None, Some(error)) => serde_json::json!({ "detail": error }),
        (None, None) => serde_json::Value::Null,
    };
    serde_json::to_writer_pretty(&mut *out, &value)?;
    writeln!(out)
}
