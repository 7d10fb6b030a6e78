//! JSON-formatted output.
//!
//! Object keys are the field labels, values the field values as strings,
//! no type coercion. serde_json's `preserve_order` feature keeps keys in
//! append order in both the pretty and compact variants.

use serde_json::{Map, Value};

use super::writer::Row;

fn row_object(row: &Row) -> Value {
    let mut object = Map::new();
    for field in row {
        object.insert(field.label.clone(), Value::String(field.value.clone()));
    }
    Value::Object(object)
}

fn to_string(value: &Value, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_else(|_| "{}".to_string())
}

/// Render rows as an array of objects. An empty dataset renders `[]`.
pub fn render_list(rows: &[Row], pretty: bool) -> String {
    let value = Value::Array(rows.iter().map(row_object).collect());
    to_string(&value, pretty)
}

/// Render the first row as a single object, for single-record commands.
pub fn render_object(rows: &[Row], pretty: bool) -> String {
    let value = rows
        .first()
        .map(row_object)
        .unwrap_or_else(|| Value::Object(Map::new()));
    to_string(&value, pretty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::writer::Field;

    fn field(label: &str, value: &str) -> Field {
        Field {
            label: label.to_string(),
            header: label.to_string(),
            value: value.to_string(),
        }
    }

    fn sample_rows() -> Vec<Row> {
        vec![
            vec![field("version", "1.29"), field("default", "true")],
            vec![field("version", "1.28"), field("default", "false")],
        ]
    }

    #[test]
    fn test_round_trip_preserves_values_and_key_order() {
        let rendered = render_list(&sample_rows(), true);
        let parsed: Value = serde_json::from_str(&rendered).unwrap();

        let array = parsed.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["version"], "1.29");
        assert_eq!(array[1]["default"], "false");

        // Append order preserved as key order.
        let keys: Vec<&String> = array[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, ["version", "default"]);
    }

    #[test]
    fn test_pretty_and_compact_parse_identically() {
        let pretty: Value = serde_json::from_str(&render_list(&sample_rows(), true)).unwrap();
        let compact: Value = serde_json::from_str(&render_list(&sample_rows(), false)).unwrap();
        assert_eq!(pretty, compact);
    }

    #[test]
    fn test_compact_is_one_line() {
        assert!(!render_list(&sample_rows(), false).contains('\n'));
    }

    #[test]
    fn test_empty_dataset_renders_empty_array() {
        assert_eq!(render_list(&[], false), "[]");
    }

    #[test]
    fn test_single_object_shape() {
        let rows = vec![vec![field("id", "net-1"), field("label", "backend")]];
        let parsed: Value = serde_json::from_str(&render_object(&rows, false)).unwrap();
        assert_eq!(parsed["id"], "net-1");
        assert!(parsed.is_object());

        let empty: Value = serde_json::from_str(&render_object(&[], false)).unwrap();
        assert_eq!(empty, serde_json::json!({}));
    }

    #[test]
    fn test_values_stay_strings() {
        let rows = vec![vec![field("count", "3")]];
        let parsed: Value = serde_json::from_str(&render_list(&rows, false)).unwrap();
        assert!(parsed[0]["count"].is_string());
    }
}
