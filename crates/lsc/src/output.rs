//! Output formatting: detail view, JSON, YAML, plain.
//!
//! Renders data in the format selected by `--output`. The detail view is
//! a pre-formatted block per command, structured formats use serde, plain
//! emits the object's identifier.

use std::io::{self, Write};

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

// ── Render dispatcher ────────────────────────────────────────────────

/// Render a single serde-serializable item in the chosen format.
pub fn render_single<T>(
    format: &OutputFormat,
    data: &T,
    detail_fn: impl Fn(&T) -> String,
    id_fn: impl Fn(&T) -> String,
) -> Result<String, CliError>
where
    T: Serialize + ?Sized,
{
    match format {
        OutputFormat::Table => Ok(detail_fn(data)),
        OutputFormat::Json => render_json(data, false),
        OutputFormat::JsonCompact => render_json(data, true),
        OutputFormat::Yaml => render_yaml(data),
        OutputFormat::Plain => Ok(id_fn(data)),
    }
}

/// Print the rendered output to stdout, respecting quiet mode.
///
/// A closed pipe (`lsc ... | head`) ends output quietly; any other write
/// failure is an error.
pub fn print_output(output: &str, quiet: bool) -> Result<(), CliError> {
    write_output(&mut io::stdout().lock(), output, quiet)?;
    Ok(())
}

fn write_output<W: Write>(out: &mut W, output: &str, quiet: bool) -> io::Result<()> {
    if quiet || output.is_empty() {
        return Ok(());
    }
    match writeln!(out, "{output}").and_then(|()| out.flush()) {
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => Ok(()),
        other => other,
    }
}

/// Aligned `key: value` lines for the detail view.
pub fn detail(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{k:<width$}  {v}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Format-specific renderers ────────────────────────────────────────

fn render_json<T: Serialize + ?Sized>(data: &T, compact: bool) -> Result<String, CliError> {
    let rendered = if compact {
        serde_json::to_string(data)
    } else {
        serde_json::to_string_pretty(data)
    };
    rendered.map_err(|e| CliError::Render {
        message: e.to_string(),
    })
}

fn render_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String, CliError> {
    serde_yaml::to_string(data).map_err(|e| CliError::Render {
        message: e.to_string(),
    })
}
