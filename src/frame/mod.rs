//! Ordered feature frames.
//!
//! A frame is the pipeline's output: fixed columns in a model's exact
//! order, one row per input record, emitted as an Arrow `RecordBatch` for
//! the model-invocation layer. Column order comes from the static specs,
//! never from record insertion order. Numeric columns are nullable
//! `Float64`; columns a model consumes as categorical strings are
//! nullable `Utf8` with integer codes rendered without a fractional part.

use std::sync::Arc;

use arrow::array::{ArrayRef, Float64Array, StringArray};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};
use itertools::Itertools;
use smallvec::SmallVec;

use crate::error::{FeatureError, Result};
use crate::models::codes::FieldCode;

/// Inline-capacity row buffer; the widest model emits 21 columns
pub type RowCells = SmallVec<[Option<f64>; 24]>;

/// How a column is represented downstream
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Nullable Float64
    Numeric,
    /// Nullable Utf8, integer codes rendered as strings
    Categorical,
}

/// Where a column's cell comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Read from the canonical record
    Field(FieldCode),
    /// Computed per request (risk tiers, composite indices)
    Derived,
}

/// One column of a model's order: source, wire name, representation
#[derive(Debug, Clone, Copy)]
pub struct ColumnSpec {
    /// Where the cell is read from
    pub source: ColumnSource,
    /// Column name as the trained model saw it
    pub name: &'static str,
    /// Numeric or categorical representation
    pub kind: ColumnKind,
}

impl ColumnSpec {
    /// Numeric column named by its canonical code
    #[must_use]
    pub const fn numeric(source: FieldCode) -> Self {
        Self {
            source: ColumnSource::Field(source),
            name: source.as_str(),
            kind: ColumnKind::Numeric,
        }
    }

    /// Numeric column with a model-specific wire name
    #[must_use]
    pub const fn renamed(source: FieldCode, name: &'static str) -> Self {
        Self {
            source: ColumnSource::Field(source),
            name,
            kind: ColumnKind::Numeric,
        }
    }

    /// String-typed categorical column named by its canonical code
    #[must_use]
    pub const fn categorical(source: FieldCode) -> Self {
        Self {
            source: ColumnSource::Field(source),
            name: source.as_str(),
            kind: ColumnKind::Categorical,
        }
    }

    /// Numeric column computed by the risk engine rather than read from
    /// the record
    #[must_use]
    pub const fn derived(name: &'static str) -> Self {
        Self {
            source: ColumnSource::Derived,
            name,
            kind: ColumnKind::Numeric,
        }
    }
}

/// Ordered columns plus rows, ready for emission
#[derive(Debug, Clone)]
pub struct FeatureFrame {
    specs: &'static [ColumnSpec],
    rows: Vec<RowCells>,
}

impl FeatureFrame {
    /// Empty frame over a model's column order
    #[must_use]
    pub const fn new(specs: &'static [ColumnSpec]) -> Self {
        Self { specs, rows: Vec::new() }
    }

    /// Append one row; the cell count must match the column count
    pub fn push_row(&mut self, cells: RowCells) -> Result<()> {
        if cells.len() != self.specs.len() {
            return Err(FeatureError::validation(format!(
                "Row has {} cells, frame has {} columns",
                cells.len(),
                self.specs.len()
            )));
        }
        self.rows.push(cells);
        Ok(())
    }

    /// Column specs in emission order
    #[must_use]
    pub const fn specs(&self) -> &'static [ColumnSpec] {
        self.specs
    }

    /// Column names in emission order
    #[must_use]
    pub fn column_names(&self) -> Vec<&'static str> {
        self.specs.iter().map(|spec| spec.name).collect()
    }

    /// Number of rows
    #[must_use]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns
    #[must_use]
    pub fn num_columns(&self) -> usize {
        self.specs.len()
    }

    /// Cells of one row, in column order
    #[must_use]
    pub fn row_values(&self, row: usize) -> Option<&[Option<f64>]> {
        self.rows.get(row).map(SmallVec::as_slice)
    }

    /// One cell by row index and wire column name; null and unknown
    /// column both read as `None`
    #[must_use]
    pub fn cell(&self, row: usize, name: &str) -> Option<f64> {
        let index = self.specs.iter().position(|spec| spec.name == name)?;
        self.rows.get(row)?.get(index).copied().flatten()
    }

    /// Comma-separated column list for logs
    #[must_use]
    pub fn describe(&self) -> String {
        self.specs.iter().map(|spec| spec.name).join(", ")
    }

    /// Emit the frame as an Arrow record batch
    pub fn to_record_batch(&self) -> Result<RecordBatch> {
        let fields: Vec<Field> = self
            .specs
            .iter()
            .map(|spec| {
                let data_type = match spec.kind {
                    ColumnKind::Numeric => DataType::Float64,
                    ColumnKind::Categorical => DataType::Utf8,
                };
                Field::new(spec.name, data_type, true)
            })
            .collect();
        let schema = Arc::new(Schema::new(fields));

        let mut columns: Vec<ArrayRef> = Vec::with_capacity(self.specs.len());
        for (index, spec) in self.specs.iter().enumerate() {
            let column: ArrayRef = match spec.kind {
                ColumnKind::Numeric => {
                    let values: Float64Array =
                        self.rows.iter().map(|row| row[index]).collect();
                    Arc::new(values)
                }
                ColumnKind::Categorical => {
                    let values: StringArray = self
                        .rows
                        .iter()
                        .map(|row| row[index].map(format_categorical))
                        .collect();
                    Arc::new(values)
                }
            };
            columns.push(column);
        }

        Ok(RecordBatch::try_new(schema, columns)?)
    }
}

/// Render a categorical code the way the models were trained: integral
/// values without the fractional part
fn format_categorical(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}
