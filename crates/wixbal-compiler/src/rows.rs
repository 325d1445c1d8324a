//! Records handed to the linker.

use serde::{Serialize, Serializer};
use std::fmt;
use wixbal_source_map::SourceInfo;

/// The tables this extension writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Table {
    /// `(condition, message)`
    Condition,
    /// `(id, value, type)`
    Variable,
    /// `(id, value)`
    WixVariable,
    /// `(suppress_options_ui, suppress_downgrade_failure, suppress_repair, show_version)`
    StandardUiOptions,
    /// `(name)`
    OverridableVariable,
}

impl Table {
    /// The table name the linker knows.
    pub fn name(&self) -> &'static str {
        match self {
            Table::Condition => "WixBalCondition",
            Table::Variable => "Variable",
            Table::WixVariable => "WixVariable",
            Table::StandardUiOptions => "WixStdbaOptions",
            Table::OverridableVariable => "WixStdbaOverridableVariable",
        }
    }

    pub fn columns(&self) -> &'static [&'static str] {
        match self {
            Table::Condition => &["Condition", "Message"],
            Table::Variable => &["Id", "Value", "Type"],
            Table::WixVariable => &["Id", "Value"],
            Table::StandardUiOptions => &[
                "SuppressOptionsUI",
                "SuppressDowngradeFailure",
                "SuppressRepair",
                "ShowVersion",
            ],
            Table::OverridableVariable => &["Name"],
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns().len()
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Table {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// A single field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    Integer(i32),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Integer(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Text(s)
    }
}

impl From<i32> for FieldValue {
    fn from(i: i32) -> Self {
        FieldValue::Integer(i)
    }
}

/// A row destined for one of the extension tables.
///
/// Rows are created with every column unset; a column left unset reads
/// as null to the linker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub table: Table,
    pub fields: Vec<Option<FieldValue>>,
    /// The element that produced this row
    pub source: SourceInfo,
}

impl Row {
    pub fn new(table: Table, source: SourceInfo) -> Self {
        Row {
            table,
            fields: vec![None; table.column_count()],
            source,
        }
    }

    /// Set column `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the table's columns.
    pub fn set(mut self, index: usize, value: impl Into<FieldValue>) -> Self {
        self.fields[index] = Some(value.into());
        self
    }

    pub fn field(&self, index: usize) -> Option<&FieldValue> {
        self.fields.get(index).and_then(Option::as_ref)
    }

    pub fn text(&self, index: usize) -> Option<&str> {
        match self.field(index) {
            Some(FieldValue::Text(s)) => Some(s),
            _ => None,
        }
    }

    pub fn integer(&self, index: usize) -> Option<i32> {
        match self.field(index) {
            Some(FieldValue::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    /// A `WixVariable` row binding `id` to `value`.
    pub fn wix_variable(id: &str, value: &str, source: SourceInfo) -> Self {
        Row::new(Table::WixVariable, source).set(0, id).set(1, value)
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "table": self.table.name(),
            "fields": self.fields,
            "line": self.source.line(),
        })
    }
}

/// `Table: field | field | -`, with `-` for unset columns.
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.table)?;
        for (i, field) in self.fields.iter().enumerate() {
            let sep = if i == 0 { " " } else { " | " };
            match field {
                Some(value) => write!(f, "{sep}{value}")?,
                None => write!(f, "{sep}-")?,
            }
        }
        Ok(())
    }
}
