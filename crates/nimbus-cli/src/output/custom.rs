//! Custom-template output.
//!
//! The `--fields` string is treated as a template resolved once per row:
//! `{label}` tokens and bare label occurrences are replaced with that row's
//! value. Tokens that match no label pass through literally, so a stale
//! template degrades instead of failing.

use super::writer::{Field, Row};

/// Render one resolved template line per row, newline-joined.
pub fn render(rows: &[Row], template: &str) -> String {
    rows.iter()
        .map(|row| resolve(row, template))
        .collect::<Vec<_>>()
        .join("\n")
}

fn resolve(row: &Row, template: &str) -> String {
    let mut line = template.to_string();

    for field in row {
        line = line.replace(&format!("{{{}}}", field.label), &field.value);
    }

    // Bare labels second, longest first so a short label ("id") cannot
    // clobber a longer one ("default_username").
    let mut fields: Vec<&Field> = row.iter().collect();
    fields.sort_by_key(|field| std::cmp::Reverse(field.label.len()));
    for field in fields {
        line = line.replace(field.label.as_str(), &field.value);
    }

    line
}
