//! Output formatting for CLI results.
//!
//! Commands accumulate labeled fields row by row into an [`OutputWriter`]
//! and render once, according to the output configuration built from the
//! global flags.

pub mod custom;
pub mod json;
pub mod table;
pub mod writer;

pub use writer::OutputWriter;

use clap::ValueEnum;

/// Rendering target selected with `--output`.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Aligned plain-text table
    #[default]
    Table,
    /// JSON array of objects (or single object)
    Json,
    /// User-supplied template resolved per row
    Custom,
}

/// Output configuration built once from parsed flags and passed by
/// reference into commands and the writer. Read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub format: OutputFormat,

    /// Custom template / field filter string from `--fields`.
    pub fields: Option<String>,

    /// Pretty-print JSON.
    pub pretty: bool,
}

impl OutputConfig {
    /// Whether the user asked for this column. An absent or empty field
    /// filter requests everything.
    pub fn wants_column(&self, label: &str) -> bool {
        match self.fields.as_deref() {
            None | Some("") => true,
            Some(fields) => fields.contains(label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_filter_wants_everything() {
        let config = OutputConfig::default();
        assert!(config.wants_column("id"));

        let config = OutputConfig {
            fields: Some(String::new()),
            ..OutputConfig::default()
        };
        assert!(config.wants_column("id"));
    }

    #[test]
    fn test_filter_restricts_columns() {
        let config = OutputConfig {
            fields: Some("id,name".to_string()),
            ..OutputConfig::default()
        };

        assert!(config.wants_column("id"));
        assert!(config.wants_column("name"));
        assert!(!config.wants_column("selectable"));
    }
}
