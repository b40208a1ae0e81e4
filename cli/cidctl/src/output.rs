//! Output formatting for CLI commands.

use colored::Colorize;
use serde::Serialize;
use tabled::{Table, Tabled};

/// Output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table format.
    #[default]
    Table,
    /// JSON format.
    Json,
}

impl OutputFormat {
    /// Anything other than `json` renders as a table.
    pub fn from_name(name: &str) -> Self {
        match name {
            "json" => Self::Json,
            _ => Self::Table,
        }
    }
}

/// One labelled value in table output.
#[derive(Debug, Serialize, Tabled)]
pub struct Field {
    pub field: &'static str,
    pub value: String,
}

impl Field {
    pub fn new(field: &'static str, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Print data in the specified format.
pub fn print_output<T: Serialize + Tabled>(data: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            if data.is_empty() {
                println!("{}", "No items found.".dimmed());
            } else {
                println!("{}", Table::new(data));
            }
        }
        OutputFormat::Json => println!("{}", format_json(data, "[]")),
    }
}

/// Print a single value: as a plain line in table mode, JSON otherwise.
pub fn print_value<T: Serialize>(text: &str, data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", text),
        OutputFormat::Json => println!("{}", format_json(data, "{}")),
    }
}

/// Print a set of fields: as a table, or as one JSON object.
pub fn print_fields(fields: &[Field], format: OutputFormat) {
    match format {
        OutputFormat::Table => println!("{}", Table::new(fields)),
        OutputFormat::Json => println!("{}", format_json(&fields_to_json(fields), "{}")),
    }
}

fn fields_to_json(fields: &[Field]) -> serde_json::Value {
    let map = fields
        .iter()
        .map(|f| (f.field.to_string(), serde_json::json!(f.value)))
        .collect::<serde_json::Map<_, _>>();
    serde_json::Value::Object(map)
}

fn format_json<T: Serialize + ?Sized>(data: &T, fallback: &str) -> String {
    serde_json::to_string_pretty(data).unwrap_or_else(|_| fallback.to_string())
}
