//! Row accumulator for command output.

use super::{custom, json, table, OutputConfig, OutputFormat};

/// One labeled output value.
///
/// `label` is the machine name matched by field filters and custom
/// templates; `header` is the column heading shown in table mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub label: String,
    pub header: String,
    pub value: String,
}

/// One renderable record: an ordered list of fields.
pub type Row = Vec<Field>;

/// Accumulates rows of labeled fields and renders them once.
///
/// Rendering takes `self` by value, so the writer cannot be appended to
/// after its output has been produced.
#[derive(Debug, Default)]
pub struct OutputWriter {
    rows: Vec<Row>,
}

impl OutputWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a one-row writer from ordered label/value pairs, for commands
    /// that print a single object.
    pub fn single(pairs: &[(&str, &str)]) -> Self {
        let mut writer = Self::new();
        writer.start_line();
        for (label, value) in pairs {
            writer.append(*label, *value);
        }
        writer
    }

    /// Begin a new row; it becomes the target of subsequent appends.
    pub fn start_line(&mut self) {
        self.rows.push(Row::new());
    }

    /// Append a field to the current row. Ignored when no row has been
    /// started yet.
    pub fn append(&mut self, label: impl Into<String>, value: impl Into<String>) {
        let label = label.into();
        let header = label.clone();
        self.push_field(Field {
            label,
            header,
            value: value.into(),
        });
    }

    /// Append a field with an explicit table heading.
    pub fn append_with_header(
        &mut self,
        label: impl Into<String>,
        value: impl Into<String>,
        header: impl Into<String>,
    ) {
        self.push_field(Field {
            label: label.into(),
            header: header.into(),
            value: value.into(),
        });
    }

    /// Append a field only when the field filter requests it, so commands
    /// can skip columns the user did not ask for.
    pub fn append_if_requested(
        &mut self,
        config: &OutputConfig,
        label: impl Into<String>,
        value: impl Into<String>,
        header: impl Into<String>,
    ) {
        let label = label.into();
        if config.wants_column(&label) {
            self.append_with_header(label, value, header);
        }
    }

    fn push_field(&mut self, field: Field) {
        if let Some(row) = self.rows.last_mut() {
            row.push(field);
        }
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Render the accumulated rows as a list.
    pub fn render(self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Table => table::render(&self.rows),
            OutputFormat::Json => json::render_list(&self.rows, config.pretty),
            OutputFormat::Custom => {
                custom::render(&self.rows, config.fields.as_deref().unwrap_or(""))
            }
        }
    }

    /// Render as a single object. Table and custom modes fall back to the
    /// list renderers; JSON emits one object instead of an array.
    pub fn render_object(self, config: &OutputConfig) -> String {
        match config.format {
            OutputFormat::Json => json::render_object(&self.rows, config.pretty),
            _ => self.render(config),
        }
    }
}
