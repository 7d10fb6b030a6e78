//! Table-formatted output.

use comfy_table::{presets, Cell, Table};

use super::writer::Row;

/// Render rows as a borderless, left-aligned table: one header line from
/// the first row's headers, then one line per row. Rows are built with a
/// uniform field set, so the first row defines the columns. An empty
/// dataset carries no headers and renders the empty string.
pub fn render(rows: &[Row]) -> String {
    let Some(first) = rows.first() else {
        return String::new();
    };

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_header(first.iter().map(|field| Cell::new(&field.header)));

    for row in rows {
        table.add_row(row.iter().map(|field| Cell::new(&field.value)));
    }

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::writer::Field;

    fn field(label: &str, value: &str) -> Field {
        Field {
            label: label.to_string(),
            header: label.to_uppercase(),
            value: value.to_string(),
        }
    }

    #[test]
    fn test_header_plus_one_line_per_row() {
        let rows = vec![
            vec![field("version", "1.29"), field("type", "stable")],
            vec![field("version", "1.28"), field("type", "stable")],
        ];

        let rendered = render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);

        for line in &lines {
            assert_eq!(line.split_whitespace().count(), 2);
        }

        assert!(lines[0].contains("VERSION"));
        assert!(lines[0].contains("TYPE"));
        assert!(lines[1].contains("1.29"));
    }

    #[test]
    fn test_columns_align_on_widest_cell() {
        let rows = vec![
            vec![field("name", "g4s.small"), field("type", "instance")],
            vec![field("name", "x"), field("type", "db")],
        ];

        let rendered = render(&rows);
        let lines: Vec<&str> = rendered.lines().collect();

        // Second column starts at the same offset on every line.
        let offset = lines[1].find("instance").unwrap();
        assert_eq!(lines[2].find("db").unwrap(), offset);
    }

    #[test]
    fn test_empty_dataset_renders_empty_string() {
        assert_eq!(render(&[]), "");
    }
}
