//! Table output formatting for CLI commands
//!
//! Renders constant tables and variable listings using comfy-table.

use comfy_table::{presets, Attribute, Cell, Color, ContentArrangement, Table};
use std::env;

/// Table formatter for CLI output
pub struct TableFormatter {
    /// Whether to use colors in output
    use_colors: bool,
    /// Maximum width for tables (None = auto)
    max_width: Option<u16>,
}

/// One row of the `vars` listing
#[derive(Debug, Clone, serde::Serialize)]
pub struct VariableRow {
    pub name: &'static str,
    pub set: bool,
    pub required: bool,
    pub secret: bool,
}

impl TableFormatter {
    /// Create a new table formatter
    pub fn new() -> Self {
        Self {
            use_colors: supports_color(),
            max_width: None,
        }
    }

    /// Create a new table formatter with custom settings
    pub const fn with_config(use_colors: bool, max_width: Option<u16>) -> Self {
        Self {
            use_colors,
            max_width,
        }
    }

    /// Format `(constant, value)` pairs
    pub fn format_constants(&self, constants: &[(&str, String)]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Constant").add_attribute(Attribute::Bold),
            Cell::new("Value").add_attribute(Attribute::Bold),
        ]);

        for (name, value) in constants {
            let value_cell = if value.is_empty() {
                self.dim("(empty)")
            } else {
                Cell::new(value)
            };
            table.add_row(vec![Cell::new(name), value_cell]);
        }

        table.to_string()
    }

    /// Format the variable listing
    pub fn format_variables(&self, rows: &[VariableRow]) -> String {
        let mut table = self.create_base_table();
        table.set_header(vec![
            Cell::new("Variable").add_attribute(Attribute::Bold),
            Cell::new("Set").add_attribute(Attribute::Bold),
            Cell::new("Required").add_attribute(Attribute::Bold),
            Cell::new("Secret").add_attribute(Attribute::Bold),
        ]);

        for row in rows {
            let set_cell = match (row.set, self.use_colors) {
                (true, true) => Cell::new("yes").fg(Color::Green),
                (false, true) if row.required => Cell::new("no").fg(Color::Red),
                (false, true) => Cell::new("no").fg(Color::Yellow),
                (true, false) => Cell::new("✓ yes"),
                (false, false) => Cell::new("✗ no"),
            };
            table.add_row(vec![
                Cell::new(row.name),
                set_cell,
                Cell::new(yes_no(row.required)),
                Cell::new(yes_no(row.secret)),
            ]);
        }

        table.to_string()
    }

    fn dim(&self, text: &str) -> Cell {
        if self.use_colors {
            Cell::new(text).fg(Color::DarkGrey)
        } else {
            Cell::new(text)
        }
    }

    fn create_base_table(&self) -> Table {
        let mut table = Table::new();

        // Use UTF-8 preset for nice borders
        table
            .load_preset(presets::UTF8_FULL)
            .set_content_arrangement(ContentArrangement::Dynamic);

        // Apply max width if set
        if let Some(width) = self.max_width {
            table.set_width(width);
        }

        table
    }
}

impl Default for TableFormatter {
    fn default() -> Self {
        Self::new()
    }
}

const fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

/// Check if color output is supported
fn supports_color() -> bool {
    // Respect NO_COLOR environment variable
    if env::var("NO_COLOR").is_ok() {
        return false;
    }

    // Check for dumb terminal
    if let Ok(term) = env::var("TERM") {
        if term == "dumb" {
            return false;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_constants_plain() {
        let formatter = TableFormatter::with_config(false, Some(80));
        let out = formatter.format_constants(&[
            ("DB_NAME", "wp".to_string()),
            ("DB_COLLATE", String::new()),
        ]);
        assert!(out.contains("Constant"));
        assert!(out.contains("DB_NAME"));
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn test_format_variables_plain() {
        let formatter = TableFormatter::with_config(false, None);
        let out = formatter.format_variables(&[
            VariableRow {
                name: "MYSQL_DATABASE",
                set: true,
                required: true,
                secret: false,
            },
            VariableRow {
                name: "WORDPRESS_DEBUG",
                set: false,
                required: false,
                secret: false,
            },
        ]);
        assert!(out.contains("✓ yes"));
        assert!(out.contains("✗ no"));
        assert!(out.contains("WORDPRESS_DEBUG"));
    }
}
