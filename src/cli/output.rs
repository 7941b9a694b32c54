/// Output formatting: invocation summary and error envelopes. TTY detection.
use std::io::{IsTerminal, Write};

use comfy_table::{Table, presets::UTF8_BORDERS_ONLY};
use serde_json::Value;

use crate::types::{ErrorOutput, InvocationOutput};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON (stream is piped).
    Json,
    /// Aligned field/value table (stream is a terminal).
    Table,
}

/// Standard stream a summary is written to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stream {
    Stdout,
    Stderr,
}

impl OutputFormat {
    /// Table when stdout is a TTY, JSON when piped.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_for(Stream::Stdout)
    }

    /// Table when `stream` is a TTY, JSON when piped.
    #[must_use]
    pub fn detect_for(stream: Stream) -> Self {
        let terminal = match stream {
            Stream::Stdout => std::io::stdout().is_terminal(),
            Stream::Stderr => std::io::stderr().is_terminal(),
        };
        if terminal { Self::Table } else { Self::Json }
    }
}

/// Write the resolved options record of a command to stdout.
pub fn write_summary(summary: &InvocationOutput, format: OutputFormat) {
    write_summary_to(summary, format, Stream::Stdout);
}

/// Write the resolved options record to a chosen stream.
///
/// Used when stdout carries CSV records and must stay clean.
pub fn write_summary_to(summary: &InvocationOutput, format: OutputFormat, stream: Stream) {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(summary).map_err(|e| e.to_string()),
        OutputFormat::Table => render_summary_table(summary),
    };
    match rendered {
        Ok(text) => emit(stream, &text),
        Err(e) => eprintln!("JSON serialization error: {e}"),
    }
}

fn emit(stream: Stream, text: &str) {
    let _ = match stream {
        Stream::Stdout => writeln!(std::io::stdout().lock(), "{text}"),
        Stream::Stderr => writeln!(std::io::stderr().lock(), "{text}"),
    };
}

fn render_summary_table(summary: &InvocationOutput) -> Result<String, String> {
    let value = serde_json::to_value(summary).map_err(|e| e.to_string())?;

    let mut rows = Vec::new();
    flatten_fields("", &value, &mut rows);

    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(["FIELD", "VALUE"]);
    for (field, value) in rows {
        table.add_row([field, value]);
    }
    Ok(table.to_string())
}

/// Flatten nested objects into dotted field names; arrays become one line per item.
fn flatten_fields(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let name = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten_fields(&name, child, out);
            }
        }
        Value::Array(items) => {
            let joined = items.iter().map(scalar).collect::<Vec<_>>().join("\n");
            out.push((prefix.to_owned(), joined));
        }
        other => out.push((prefix.to_owned(), scalar(other))),
    }
}

fn scalar(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

// --- Error output ---

/// Write a structured error to stderr.
pub fn write_error(err: &ErrorOutput, format: OutputFormat) {
    let stderr = std::io::stderr();
    let mut out = stderr.lock();
    match format {
        OutputFormat::Json => {
            let s = serde_json::to_string_pretty(err).unwrap_or_default();
            let _ = writeln!(out, "{s}");
        }
        OutputFormat::Table => {
            let _ = writeln!(out, "Error: {}", err.error.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flatten_nested_objects() {
        let value = json!({
            "command": "spoof_profile",
            "transport": { "url": "https://www.linkedin.com/", "verify_ssl": false },
        });
        let mut rows = Vec::new();
        flatten_fields("", &value, &mut rows);
        assert!(rows.contains(&("command".to_owned(), "spoof_profile".to_owned())));
        assert!(rows.contains(&(
            "transport.url".to_owned(),
            "https://www.linkedin.com/".to_owned()
        )));
        assert!(rows.contains(&("transport.verify_ssl".to_owned(), "false".to_owned())));
    }

    #[test]
    fn test_flatten_arrays_one_item_per_line() {
        let value = json!({ "company_names": ["acme-corp", "other-co"], "proxies": [] });
        let mut rows = Vec::new();
        flatten_fields("", &value, &mut rows);
        assert!(rows.contains(&("company_names".to_owned(), "acme-corp\nother-co".to_owned())));
        assert!(rows.contains(&("proxies".to_owned(), String::new())));
    }
}
