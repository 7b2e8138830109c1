//
//  gcore-cli
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/19.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Renders API entities for the terminal:
//!
//! - **Table format**: human-readable tables (the default)
//! - **JSON format**: the raw API payload, selected with `--json`
//!
//! ## Core Components
//!
//! - [`OutputFormat`]: the two formats
//! - [`OutputWriter`]: entry point used by every command
//! - [`TableOutput`]: types that know how to print themselves as a table
//!
//! ## Example
//!
//! ```rust,ignore
//! use gcore_cli::output::{OutputFormat, OutputWriter};
//!
//! let writer = OutputWriter::new(OutputFormat::Table);
//! writer.write_list(&zones, &[("NAME", "name"), ("RECORDS", "records_count")])?;
//! writer.write_success("Zone deleted");
//! ```

mod json;
mod table;

pub use json::*;
pub use table::*;

use serde::Serialize;
use serde_json::Value;

use crate::api::Entity;
use crate::util::{format_timestamp, truncate};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable table with optional color.
    #[default]
    Table,
    /// Pretty-printed JSON for scripting.
    Json,
}

impl OutputFormat {
    /// Picks the format from the global `--json` flag.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            Self::Json
        } else {
            Self::Table
        }
    }
}

/// A unified output writer for command results and status messages.
///
/// Data goes to stdout; errors and warnings go to stderr. Colors follow
/// `console`'s terminal detection, so they are off when piped.
pub struct OutputWriter {
    format: OutputFormat,
    color: bool,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            color: console::colors_enabled(),
        }
    }

    pub fn color_enabled(&self) -> bool {
        self.color
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }

    /// Writes a single value in the configured format.
    pub fn write<T: Serialize + TableOutput + ?Sized>(&self, value: &T) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Json => write_json(value),
            OutputFormat::Table => {
                value.print_table(self.color);
                Ok(())
            }
        }
    }

    /// Writes a list of entities.
    ///
    /// In table mode each `(header, key)` pair becomes a column; keys may
    /// use dots to reach nested fields (`"origin.source"`). JSON mode
    /// prints the full entities and ignores the columns.
    pub fn write_list(&self, entities: &[Entity], columns: &[(&str, &str)]) -> anyhow::Result<()> {
        if self.is_json() {
            return write_json(entities);
        }

        if entities.is_empty() {
            self.write_info("No results");
            return Ok(());
        }

        TableBuilder::new()
            .color(self.color)
            .headers(columns.iter().map(|(header, _)| *header))
            .rows(entities.iter().map(|entity| {
                columns
                    .iter()
                    .map(|(_, key)| cell(entity, key, self.color))
                    .collect::<Vec<_>>()
            }))
            .print();
        Ok(())
    }

    /// Reports a completed action with no response body, such as a delete.
    ///
    /// Table mode prints `msg` as a success line; JSON mode prints `value`.
    pub fn write_outcome(&self, msg: &str, value: &Value) -> anyhow::Result<()> {
        if self.is_json() {
            write_json(value)
        } else {
            self.write_success(msg);
            Ok(())
        }
    }

    pub fn write_warning(&self, msg: &str) {
        use console::style;
        if self.color {
            eprintln!("{} {}", style("warning:").yellow().bold(), msg);
        } else {
            eprintln!("warning: {}", msg);
        }
    }

    pub fn write_info(&self, msg: &str) {
        println!("{}", msg);
    }

    pub fn write_success(&self, msg: &str) {
        use console::style;
        if self.color {
            println!("{} {}", style("✓").green().bold(), msg);
        } else {
            println!("✓ {}", msg);
        }
    }
}

/// Types that can render themselves as a table.
pub trait TableOutput {
    fn print_table(&self, color: bool);
}

impl TableOutput for Entity {
    /// Prints one `key: value` line per top-level field.
    fn print_table(&self, color: bool) {
        for (key, value) in self {
            let rendered = if key == "status" {
                format_status(&display_value(value), color)
            } else {
                display_value(value)
            };
            print_field(key, &rendered, color);
        }
    }
}

/// Prints a `key: value` line with a dimmed key.
pub fn print_field(key: &str, value: &str, color: bool) {
    use console::style;
    if color {
        println!("{}: {}", style(key).dim(), value);
    } else {
        println!("{}: {}", key, value);
    }
}

/// Looks up a dotted key path inside an entity.
pub fn lookup<'a>(entity: &'a Entity, path: &str) -> Option<&'a Value> {
    let mut parts = path.split('.');
    let mut current = entity.get(parts.next()?)?;
    for part in parts {
        current = match current {
            Value::Object(map) => map.get(part)?,
            Value::Array(items) => items.get(part.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Renders a JSON value as a single table cell.
///
/// Missing and null values show as `-`; arrays of scalars are joined.
pub fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "-".to_string(),
        Value::String(s) if s.is_empty() => "-".to_string(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => format_bool(*b, false),
        Value::Number(n) => n.to_string(),
        Value::Array(items) if items.iter().all(|v| !v.is_object() && !v.is_array()) => {
            if items.is_empty() {
                "-".to_string()
            } else {
                items.iter().map(display_value).collect::<Vec<_>>().join(", ")
            }
        }
        other => other.to_string(),
    }
}

/// Widest a list cell may grow before it is cut.
const MAX_CELL_WIDTH: usize = 60;

fn cell(entity: &Entity, key: &str, color: bool) -> String {
    let text = lookup(entity, key).map_or_else(|| "-".to_string(), display_value);
    if key == "status" {
        format_status(&text, color)
    } else if is_timestamp_key(key) {
        format_timestamp(&text)
    } else {
        truncate(&text, MAX_CELL_WIDTH)
    }
}

fn is_timestamp_key(key: &str) -> bool {
    let field = key.rsplit('.').next().unwrap_or(key);
    matches!(field, "created" | "updated" | "expires" | "last_modified")
        || field.ends_with("_at")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entity(value: Value) -> Entity {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_format_from_flag() {
        assert_eq!(OutputFormat::from_json_flag(true), OutputFormat::Json);
        assert_eq!(OutputFormat::from_json_flag(false), OutputFormat::Table);
    }

    #[test]
    fn test_lookup_nested() {
        let e = entity(json!({
            "id": 7,
            "origin": {"source": "example.com"},
            "members": [{"address": "10.0.0.1"}]
        }));
        assert_eq!(lookup(&e, "id"), Some(&json!(7)));
        assert_eq!(lookup(&e, "origin.source"), Some(&json!("example.com")));
        assert_eq!(lookup(&e, "members.0.address"), Some(&json!("10.0.0.1")));
        assert_eq!(lookup(&e, "origin.missing"), None);
        assert_eq!(lookup(&e, "id.deeper"), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(&Value::Null), "-");
        assert_eq!(display_value(&json!("")), "-");
        assert_eq!(display_value(&json!(true)), "Yes");
        assert_eq!(display_value(&json!(3600)), "3600");
        assert_eq!(display_value(&json!(["a.example", "b.example"])), "a.example, b.example");
        assert_eq!(display_value(&json!([])), "-");
        assert_eq!(display_value(&json!({"k": 1})), r#"{"k":1}"#);
    }

    #[test]
    fn test_cell_missing_key() {
        let e = entity(json!({"name": "example.com"}));
        assert_eq!(cell(&e, "records_count", false), "-");
        assert_eq!(cell(&e, "name", false), "example.com");
    }

    #[test]
    fn test_cell_truncates_long_values() {
        let long = "a".repeat(80);
        let e = entity(json!({ "content": long }));
        let rendered = cell(&e, "content", false);
        assert_eq!(rendered.chars().count(), MAX_CELL_WIDTH);
        assert!(rendered.ends_with("..."));
    }

    #[test]
    fn test_timestamp_keys() {
        assert!(is_timestamp_key("created_at"));
        assert!(is_timestamp_key("validity.expires"));
        assert!(!is_timestamp_key("name"));

        let e = entity(json!({"created_at": "unknown"}));
        assert_eq!(cell(&e, "created_at", false), "unknown");
    }
}
